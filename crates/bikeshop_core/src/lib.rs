//! Core domain logic for the bike shop catalog.
//! This crate is the single source of truth for business invariants.

pub mod config;
pub mod db;
pub mod dto;
pub mod logging;
pub mod mapper;
pub mod model;
pub mod repo;
pub mod service;
pub mod validator;

pub use config::{DisplayConfig, DisplaySettings};
pub use dto::{BicycleDto, BicycleSummary, BikePartDto, BikePartSummary};
pub use logging::{default_log_level, init_logging, logging_status};
pub use model::bicycle::Bicycle;
pub use model::bike_part::BikePart;
pub use model::{CatalogEntity, EntityId, UNASSIGNED_ID};
pub use repo::{MemoryRepository, RepoError, RepoResult, Repository, SqliteRepository};
pub use service::catalog::{CatalogEntry, CatalogService, ServiceError, ServiceResult};
pub use validator::{validate_bicycle, validate_bike_part, FieldError};

/// Minimal health-check API for delivery layers.
pub fn ping() -> &'static str {
    "pong"
}

/// Returns the core crate version.
pub fn core_version() -> &'static str {
    env!("CARGO_PKG_VERSION")
}
