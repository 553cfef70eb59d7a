//! Field-level validation for incoming DTOs.
//!
//! # Responsibility
//! - Evaluate the fixed rule set for each DTO type before any write.
//! - Collect every violated rule; validation never short-circuits.
//!
//! # Invariants
//! - An empty result means the DTO is valid.
//! - Each violated rule contributes exactly one `(field, message)` pair.
//! - The release-year upper bound is the calendar year at validation time.

use chrono::{Datelike, Utc};
use serde::{Deserialize, Serialize};

use crate::dto::{BicycleDto, BikePartDto};

/// Oldest release year the shop accepts into the catalog.
pub const MIN_RELEASE_YEAR: i32 = 2005;

/// A single violated validation rule.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FieldError {
    /// Wire name of the offending field.
    pub field: String,
    /// Human-readable description of the violated rule.
    pub message: String,
}

impl FieldError {
    fn new(field: &str, message: impl Into<String>) -> Self {
        Self {
            field: field.to_string(),
            message: message.into(),
        }
    }
}

/// Validates a bicycle payload against the full rule set.
///
/// Rules are evaluated independently so a client sees every violation in
/// one response.
pub fn validate_bicycle(dto: &BicycleDto) -> Vec<FieldError> {
    validate_bicycle_at(dto, current_year())
}

/// Year-parameterized variant so the bound stays testable.
pub(crate) fn validate_bicycle_at(dto: &BicycleDto, current_year: i32) -> Vec<FieldError> {
    let mut errors = Vec::new();

    if dto.model.trim().is_empty() {
        errors.push(FieldError::new("model", "Model name is required"));
    }
    if dto.kind.trim().is_empty() {
        errors.push(FieldError::new("type", "Type is required"));
    }
    if dto.manufacturer.trim().is_empty() {
        errors.push(FieldError::new("manufacturer", "Manufacturer name is required"));
    }
    if dto.release_year < MIN_RELEASE_YEAR || dto.release_year > current_year {
        errors.push(FieldError::new(
            "release_year",
            format!("Release year must be between {MIN_RELEASE_YEAR} and {current_year}"),
        ));
    }
    if dto.weight <= 0.0 {
        errors.push(FieldError::new("weight", "Weight must be a positive value"));
    }
    if dto.price <= 0.0 {
        errors.push(FieldError::new("price", "Price must be a positive value"));
    }
    if dto.stock_quantity < 0 {
        errors.push(FieldError::new(
            "stock_quantity",
            "Stock quantity cannot be negative",
        ));
    }

    errors
}

/// Validates a spare part payload against the full rule set.
pub fn validate_bike_part(dto: &BikePartDto) -> Vec<FieldError> {
    let mut errors = Vec::new();

    if dto.part_type.trim().is_empty() {
        errors.push(FieldError::new("part_type", "Part type is required"));
    }
    if dto.description.trim().is_empty() {
        errors.push(FieldError::new("description", "Description is required"));
    }
    if dto.manufacturer.trim().is_empty() {
        errors.push(FieldError::new("manufacturer", "Manufacturer name is required"));
    }
    if dto.price <= 0.0 {
        errors.push(FieldError::new("price", "Price must be a positive value"));
    }
    if dto.stock_quantity < 0 {
        errors.push(FieldError::new(
            "stock_quantity",
            "Stock quantity cannot be negative",
        ));
    }

    errors
}

fn current_year() -> i32 {
    Utc::now().year()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn valid_bicycle() -> BicycleDto {
        BicycleDto {
            model: "Escape".to_string(),
            kind: "Mountain".to_string(),
            manufacturer: "Giant".to_string(),
            release_year: 2020,
            weight: 8.2,
            price: 950.0,
            stock_quantity: 4,
        }
    }

    fn valid_part() -> BikePartDto {
        BikePartDto {
            part_type: "Chain".to_string(),
            description: "11-speed chain".to_string(),
            manufacturer: "Shimano".to_string(),
            price: 35.5,
            stock_quantity: 12,
        }
    }

    #[test]
    fn valid_bicycle_produces_no_errors() {
        assert!(validate_bicycle(&valid_bicycle()).is_empty());
    }

    #[test]
    fn valid_part_produces_no_errors() {
        assert!(validate_bike_part(&valid_part()).is_empty());
    }

    #[test]
    fn empty_model_yields_exactly_one_error() {
        let dto = BicycleDto {
            model: "  ".to_string(),
            ..valid_bicycle()
        };
        let errors = validate_bicycle(&dto);
        assert_eq!(errors.len(), 1);
        assert_eq!(errors[0].field, "model");
        assert_eq!(errors[0].message, "Model name is required");
    }

    #[test]
    fn release_year_bounds_are_inclusive() {
        let at_lower = BicycleDto {
            release_year: MIN_RELEASE_YEAR,
            ..valid_bicycle()
        };
        assert!(validate_bicycle_at(&at_lower, 2026).is_empty());

        let at_upper = BicycleDto {
            release_year: 2026,
            ..valid_bicycle()
        };
        assert!(validate_bicycle_at(&at_upper, 2026).is_empty());

        let below = BicycleDto {
            release_year: MIN_RELEASE_YEAR - 1,
            ..valid_bicycle()
        };
        let errors = validate_bicycle_at(&below, 2026);
        assert_eq!(errors.len(), 1);
        assert_eq!(errors[0].field, "release_year");

        let above = BicycleDto {
            release_year: 2027,
            ..valid_bicycle()
        };
        let errors = validate_bicycle_at(&above, 2026);
        assert_eq!(errors.len(), 1);
        assert_eq!(errors[0].field, "release_year");
        assert!(errors[0].message.contains("2005"));
        assert!(errors[0].message.contains("2026"));
    }

    #[test]
    fn zero_weight_and_price_are_rejected() {
        let dto = BicycleDto {
            weight: 0.0,
            price: 0.0,
            ..valid_bicycle()
        };
        let errors = validate_bicycle(&dto);
        let fields: Vec<&str> = errors.iter().map(|e| e.field.as_str()).collect();
        assert_eq!(fields, vec!["weight", "price"]);
    }

    #[test]
    fn negative_stock_is_rejected_but_zero_is_allowed() {
        let sold_out = BicycleDto {
            stock_quantity: 0,
            ..valid_bicycle()
        };
        assert!(validate_bicycle(&sold_out).is_empty());

        let negative = BicycleDto {
            stock_quantity: -1,
            ..valid_bicycle()
        };
        let errors = validate_bicycle(&negative);
        assert_eq!(errors.len(), 1);
        assert_eq!(errors[0].field, "stock_quantity");
        assert_eq!(errors[0].message, "Stock quantity cannot be negative");
    }

    #[test]
    fn all_violations_are_reported_together() {
        let dto = BicycleDto {
            model: String::new(),
            kind: String::new(),
            manufacturer: String::new(),
            release_year: 1999,
            weight: -1.0,
            price: 0.0,
            stock_quantity: -2,
        };
        let errors = validate_bicycle_at(&dto, 2026);
        assert_eq!(errors.len(), 7);
    }

    #[test]
    fn part_rules_report_each_field_once() {
        let dto = BikePartDto {
            part_type: String::new(),
            description: " ".to_string(),
            manufacturer: String::new(),
            price: -5.0,
            stock_quantity: -1,
        };
        let errors = validate_bike_part(&dto);
        let fields: Vec<&str> = errors.iter().map(|e| e.field.as_str()).collect();
        assert_eq!(
            fields,
            vec!["part_type", "description", "manufacturer", "price", "stock_quantity"]
        );
    }
}
