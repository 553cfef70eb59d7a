//! Wire-shape records for catalog requests and responses.
//!
//! # Responsibility
//! - Define create/update payload shapes (DTOs) without identifiers.
//! - Define the reduced summary projections returned by list endpoints.
//!
//! # Invariants
//! - DTOs carry every mutable entity field and never the identifier.
//! - Summaries are field-equivalent to the DTOs; they exist so list
//!   responses do not expose store identifiers.

use serde::{Deserialize, Serialize};

/// Create/update payload for a bicycle.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BicycleDto {
    pub model: String,
    #[serde(rename = "type")]
    pub kind: String,
    pub manufacturer: String,
    pub release_year: i32,
    pub weight: f64,
    pub price: f64,
    pub stock_quantity: i32,
}

/// Reduced read projection of a bicycle for list responses.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BicycleSummary {
    pub model: String,
    #[serde(rename = "type")]
    pub kind: String,
    pub manufacturer: String,
    pub release_year: i32,
    pub weight: f64,
    pub price: f64,
    pub stock_quantity: i32,
}

/// Create/update payload for a spare part.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BikePartDto {
    pub part_type: String,
    pub description: String,
    pub manufacturer: String,
    pub price: f64,
    pub stock_quantity: i32,
}

/// Reduced read projection of a spare part for list responses.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BikePartSummary {
    pub part_type: String,
    pub description: String,
    pub manufacturer: String,
    pub price: f64,
    pub stock_quantity: i32,
}
