//! Bike part domain record.
//!
//! # Responsibility
//! - Define the persisted shape of a catalog spare part.
//!
//! # Invariants
//! - `id` is assigned by the store and never reused for another part.
//! - `stock_quantity >= 0` and `price > 0` are enforced at the validation
//!   boundary before any write.

use serde::{Deserialize, Serialize};

use super::{CatalogEntity, EntityId};

/// Persisted catalog record for a spare part.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BikePart {
    /// Store-assigned identifier (`UNASSIGNED_ID` before the first insert).
    pub id: EntityId,
    /// Part category, e.g. "Chain" or "Brake lever".
    pub part_type: String,
    pub description: String,
    pub manufacturer: String,
    pub price: f64,
    pub stock_quantity: i32,
}

impl BikePart {
    /// Returns whether at least one unit is on hand.
    pub fn in_stock(&self) -> bool {
        self.stock_quantity > 0
    }
}

impl CatalogEntity for BikePart {
    const TABLE: &'static str = "bike_parts";

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
