//! Bicycle domain record.
//!
//! # Responsibility
//! - Define the persisted shape of a catalog bicycle.
//!
//! # Invariants
//! - `id` is assigned by the store and never reused for another bicycle.
//! - `stock_quantity >= 0`, `price > 0`, `weight > 0` and
//!   `release_year` within `[2005, current year]` are enforced at the
//!   validation boundary before any write.

use serde::{Deserialize, Serialize};

use super::{CatalogEntity, EntityId};

/// Persisted catalog record for a bicycle.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Bicycle {
    /// Store-assigned identifier (`UNASSIGNED_ID` before the first insert).
    pub id: EntityId,
    /// Model name, e.g. "Escape".
    pub model: String,
    /// Category, e.g. "Mountain". Serialized as `type` to match the wire schema.
    #[serde(rename = "type")]
    pub kind: String,
    pub manufacturer: String,
    /// First model year; bounded below by the oldest year the shop stocks.
    pub release_year: i32,
    /// Kilograms.
    pub weight: f64,
    pub price: f64,
    pub stock_quantity: i32,
}

impl Bicycle {
    /// Returns whether at least one unit is on hand.
    pub fn in_stock(&self) -> bool {
        self.stock_quantity > 0
    }
}

impl CatalogEntity for Bicycle {
    const TABLE: &'static str = "bicycles";

    fn id(&self) -> EntityId {
        self.id
    }

    fn set_id(&mut self, id: EntityId) {
        self.id = id;
    }

    fn stock_quantity(&self) -> i32 {
        self.stock_quantity
    }
}
