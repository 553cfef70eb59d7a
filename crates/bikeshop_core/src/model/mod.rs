//! Catalog domain model.
//!
//! # Responsibility
//! - Define the persisted record shapes for the two catalog resources.
//! - Provide the identity contract shared by all catalog entities.
//!
//! # Invariants
//! - Every entity is identified by a store-assigned integer `id`.
//! - `UNASSIGNED_ID` marks an entity that has not been persisted yet.

pub mod bicycle;
pub mod bike_part;

/// Store-assigned identifier for catalog records.
///
/// Kept as a type alias to make semantic intent explicit in signatures.
pub type EntityId = i64;

/// Identifier value carried by an entity before its first insert.
///
/// SQLite never hands out rowid 0, so the sentinel cannot collide with a
/// persisted record.
pub const UNASSIGNED_ID: EntityId = 0;

/// Identity and stock contract shared by every catalog entity.
///
/// Repositories and services are generic over this trait so one CRUD
/// pipeline serves both resources.
pub trait CatalogEntity: Clone + Send + Sync + 'static {
    /// Backing table name for the relational store.
    const TABLE: &'static str;

    /// Current identifier (`UNASSIGNED_ID` before the first insert).
    fn id(&self) -> EntityId;

    /// Records the identifier assigned by the store on insert.
    fn set_id(&mut self, id: EntityId);

    /// Units currently on hand; drives the availability filter.
    fn stock_quantity(&self) -> i32;
}
