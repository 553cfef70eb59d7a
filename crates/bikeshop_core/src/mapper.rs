//! DTO <-> entity transforms.
//!
//! # Responsibility
//! - Build new entities from incoming DTOs.
//! - Merge DTOs into existing entities for full-overwrite updates.
//! - Project entities into summary shapes for list responses.
//!
//! # Invariants
//! - Every transform is pure and copies fields explicitly; there is no
//!   reflection or derived data.
//! - Merge never touches the entity identifier.

use crate::dto::{BicycleDto, BicycleSummary, BikePartDto, BikePartSummary};
use crate::model::bicycle::Bicycle;
use crate::model::bike_part::BikePart;
use crate::model::UNASSIGNED_ID;

/// Builds a new, not-yet-persisted bicycle from a create payload.
pub fn bicycle_from_dto(dto: &BicycleDto) -> Bicycle {
    Bicycle {
        id: UNASSIGNED_ID,
        model: dto.model.clone(),
        kind: dto.kind.clone(),
        manufacturer: dto.manufacturer.clone(),
        release_year: dto.release_year,
        weight: dto.weight,
        price: dto.price,
        stock_quantity: dto.stock_quantity,
    }
}

/// Overwrites every mutable field of `existing` from `dto`.
///
/// Update semantics are a full replace, not a partial patch; the
/// identifier is left untouched.
pub fn merge_bicycle(dto: &BicycleDto, existing: &mut Bicycle) {
    existing.model = dto.model.clone();
    existing.kind = dto.kind.clone();
    existing.manufacturer = dto.manufacturer.clone();
    existing.release_year = dto.release_year;
    existing.weight = dto.weight;
    existing.price = dto.price;
    existing.stock_quantity = dto.stock_quantity;
}

/// Projects a bicycle into the identifier-free summary shape.
pub fn bicycle_summary(entity: &Bicycle) -> BicycleSummary {
    BicycleSummary {
        model: entity.model.clone(),
        kind: entity.kind.clone(),
        manufacturer: entity.manufacturer.clone(),
        release_year: entity.release_year,
        weight: entity.weight,
        price: entity.price,
        stock_quantity: entity.stock_quantity,
    }
}

/// Builds a new, not-yet-persisted part from a create payload.
pub fn bike_part_from_dto(dto: &BikePartDto) -> BikePart {
    BikePart {
        id: UNASSIGNED_ID,
        part_type: dto.part_type.clone(),
        description: dto.description.clone(),
        manufacturer: dto.manufacturer.clone(),
        price: dto.price,
        stock_quantity: dto.stock_quantity,
    }
}

/// Overwrites every mutable field of `existing` from `dto`.
///
/// Full replace; the identifier is left untouched.
pub fn merge_bike_part(dto: &BikePartDto, existing: &mut BikePart) {
    existing.part_type = dto.part_type.clone();
    existing.description = dto.description.clone();
    existing.manufacturer = dto.manufacturer.clone();
    existing.price = dto.price;
    existing.stock_quantity = dto.stock_quantity;
}

/// Projects a part into the identifier-free summary shape.
pub fn bike_part_summary(entity: &BikePart) -> BikePartSummary {
    BikePartSummary {
        part_type: entity.part_type.clone(),
        description: entity.description.clone(),
        manufacturer: entity.manufacturer.clone(),
        price: entity.price,
        stock_quantity: entity.stock_quantity,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample_bicycle_dto() -> BicycleDto {
        BicycleDto {
            model: "Escape".to_string(),
            kind: "Mountain".to_string(),
            manufacturer: "Giant".to_string(),
            release_year: 2024,
            weight: 8.2,
            price: 950.0,
            stock_quantity: 4,
        }
    }

    #[test]
    fn bicycle_from_dto_leaves_id_unassigned() {
        let entity = bicycle_from_dto(&sample_bicycle_dto());
        assert_eq!(entity.id, UNASSIGNED_ID);
        assert_eq!(entity.model, "Escape");
        assert_eq!(entity.kind, "Mountain");
    }

    #[test]
    fn bicycle_summary_round_trips_dto_fields() {
        let dto = sample_bicycle_dto();
        let summary = bicycle_summary(&bicycle_from_dto(&dto));
        assert_eq!(summary.model, dto.model);
        assert_eq!(summary.kind, dto.kind);
        assert_eq!(summary.manufacturer, dto.manufacturer);
        assert_eq!(summary.release_year, dto.release_year);
        assert_eq!(summary.weight, dto.weight);
        assert_eq!(summary.price, dto.price);
        assert_eq!(summary.stock_quantity, dto.stock_quantity);
    }

    #[test]
    fn merge_bicycle_preserves_id_and_overwrites_fields() {
        let mut existing = bicycle_from_dto(&sample_bicycle_dto());
        existing.id = 42;

        let replacement = BicycleDto {
            model: "Defy".to_string(),
            kind: "Road".to_string(),
            manufacturer: "Giant".to_string(),
            release_year: 2022,
            weight: 7.4,
            price: 1200.0,
            stock_quantity: 0,
        };
        merge_bicycle(&replacement, &mut existing);

        assert_eq!(existing.id, 42);
        assert_eq!(existing.model, "Defy");
        assert_eq!(existing.kind, "Road");
        assert_eq!(existing.release_year, 2022);
        assert_eq!(existing.weight, 7.4);
        assert_eq!(existing.price, 1200.0);
        assert_eq!(existing.stock_quantity, 0);
    }

    #[test]
    fn bike_part_summary_round_trips_dto_fields() {
        let dto = BikePartDto {
            part_type: "Chain".to_string(),
            description: "11-speed chain".to_string(),
            manufacturer: "Shimano".to_string(),
            price: 35.5,
            stock_quantity: 12,
        };
        let summary = bike_part_summary(&bike_part_from_dto(&dto));
        assert_eq!(summary.part_type, dto.part_type);
        assert_eq!(summary.description, dto.description);
        assert_eq!(summary.manufacturer, dto.manufacturer);
        assert_eq!(summary.price, dto.price);
        assert_eq!(summary.stock_quantity, dto.stock_quantity);
    }

    #[test]
    fn merge_bike_part_preserves_id() {
        let dto = BikePartDto {
            part_type: "Chain".to_string(),
            description: "11-speed chain".to_string(),
            manufacturer: "Shimano".to_string(),
            price: 35.5,
            stock_quantity: 12,
        };
        let mut existing = bike_part_from_dto(&dto);
        existing.id = 7;

        let replacement = BikePartDto {
            part_type: "Cassette".to_string(),
            description: "11-34 cassette".to_string(),
            manufacturer: "SRAM".to_string(),
            price: 89.0,
            stock_quantity: 3,
        };
        merge_bike_part(&replacement, &mut existing);

        assert_eq!(existing.id, 7);
        assert_eq!(existing.part_type, "Cassette");
        assert_eq!(existing.manufacturer, "SRAM");
    }
}
