//! Shared application state for the HTTP layer.
//!
//! # Responsibility
//! - Own one catalog service per resource, constructed once at startup.
//! - Resolve per-resource display settings at request time.
//!
//! # Invariants
//! - Storage backends are interchangeable behind boxed `Repository`
//!   trait objects; handlers never know which one is active.
//! - Display settings are re-read from disk on every lookup, never
//!   cached.

use std::path::PathBuf;
use std::sync::{Arc, Mutex};

use rusqlite::Connection;

use bikeshop_core::{
    Bicycle, BikePart, CatalogEntry, CatalogService, DisplayConfig, DisplaySettings,
    MemoryRepository, Repository, SqliteRepository,
};

/// Repository trait object so SQLite and in-memory backends swap freely.
pub type DynRepository<E> = Box<dyn Repository<E>>;

/// Catalog service over a boxed repository.
pub type DynCatalogService<E> = CatalogService<E, DynRepository<E>>;

/// Process-wide state handed to every handler.
pub struct AppState {
    bicycles: DynCatalogService<Bicycle>,
    bike_parts: DynCatalogService<BikePart>,
    config_path: PathBuf,
}

impl AppState {
    /// State over owned in-memory stores; data lives for the process.
    pub fn in_memory(config_path: impl Into<PathBuf>) -> Self {
        let bicycles: DynRepository<Bicycle> = Box::new(MemoryRepository::new());
        let bike_parts: DynRepository<BikePart> = Box::new(MemoryRepository::new());
        Self {
            bicycles: CatalogService::new(bicycles),
            bike_parts: CatalogService::new(bike_parts),
            config_path: config_path.into(),
        }
    }

    /// State over a SQLite database opened (and migrated) at startup.
    ///
    /// Both resource repositories share the one connection.
    pub fn sqlite(conn: Connection, config_path: impl Into<PathBuf>) -> Self {
        let conn = Arc::new(Mutex::new(conn));
        let bicycles: DynRepository<Bicycle> =
            Box::new(SqliteRepository::new(Arc::clone(&conn)));
        let bike_parts: DynRepository<BikePart> = Box::new(SqliteRepository::new(conn));
        Self {
            bicycles: CatalogService::new(bicycles),
            bike_parts: CatalogService::new(bike_parts),
            config_path: config_path.into(),
        }
    }

    fn display_config(&self) -> DisplayConfig {
        DisplayConfig::load_or_default(&self.config_path)
    }
}

/// Per-resource access to the state, so handlers stay generic over the
/// entity type.
pub trait CatalogState<E: CatalogEntry> {
    fn service(&self) -> &DynCatalogService<E>;
    fn settings(&self) -> DisplaySettings;
}

impl CatalogState<Bicycle> for AppState {
    fn service(&self) -> &DynCatalogService<Bicycle> {
        &self.bicycles
    }

    fn settings(&self) -> DisplaySettings {
        self.display_config().bicycles
    }
}

impl CatalogState<BikePart> for AppState {
    fn service(&self) -> &DynCatalogService<BikePart> {
        &self.bike_parts
    }

    fn settings(&self) -> DisplaySettings {
        self.display_config().bike_parts
    }
}
