//! Repository layer contracts and persistence implementations.
//!
//! # Responsibility
//! - Define the generic CRUD contract shared by all catalog entities.
//! - Isolate storage details (SQL, in-memory collections) from the
//!   service layer.
//!
//! # Invariants
//! - `get_by_id` reports an absent record as `Ok(None)`, never an error.
//! - `add` populates the entity identifier as an observable side effect.
//! - Commands are never implicitly retried; storage failures propagate
//!   to the caller unchanged.

use std::error::Error;
use std::fmt::{Display, Formatter};

use crate::db::DbError;
use crate::model::{CatalogEntity, EntityId};

pub mod memory;
pub mod sqlite;

pub use memory::MemoryRepository;
pub use sqlite::SqliteRepository;

pub type RepoResult<T> = Result<T, RepoError>;

/// Error surface for catalog persistence and query operations.
#[derive(Debug)]
pub enum RepoError {
    /// Transport/storage-level database failure.
    Db(DbError),
    /// No record with the given identifier exists (update/remove paths).
    NotFound(EntityId),
    /// Persisted state failed to decode into the entity shape.
    InvalidData(String),
    /// Backing store unusable, e.g. a poisoned connection lock.
    Storage(String),
}

impl Display for RepoError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Db(err) => write!(f, "{err}"),
            Self::NotFound(id) => write!(f, "record not found: {id}"),
            Self::InvalidData(message) => write!(f, "invalid persisted record: {message}"),
            Self::Storage(message) => write!(f, "storage failure: {message}"),
        }
    }
}

impl Error for RepoError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            Self::Db(err) => Some(err),
            Self::NotFound(_) | Self::InvalidData(_) | Self::Storage(_) => None,
        }
    }
}

impl From<DbError> for RepoError {
    fn from(value: DbError) -> Self {
        Self::Db(value)
    }
}

impl From<rusqlite::Error> for RepoError {
    fn from(value: rusqlite::Error) -> Self {
        Self::Db(DbError::Sqlite(value))
    }
}

/// Generic CRUD contract over a single catalog entity type.
///
/// Implementations hide the backing store so SQLite and in-memory
/// variants are interchangeable behind the same interface.
pub trait Repository<E: CatalogEntity>: Send + Sync {
    /// Returns every persisted record.
    fn get_all(&self) -> RepoResult<Vec<E>>;

    /// Returns the record with the given identifier, or `None`.
    fn get_by_id(&self, id: EntityId) -> RepoResult<Option<E>>;

    /// Inserts a new record, assigning a fresh identifier.
    ///
    /// The assigned identifier is written back onto `entity` and also
    /// returned for convenience.
    fn add(&self, entity: &mut E) -> RepoResult<EntityId>;

    /// Persists a full overwrite of the record matching `entity.id()`.
    fn update(&self, entity: &E) -> RepoResult<()>;

    /// Deletes the record matching `entity.id()`.
    fn remove(&self, entity: &E) -> RepoResult<()>;
}

impl<E: CatalogEntity> Repository<E> for Box<dyn Repository<E>> {
    fn get_all(&self) -> RepoResult<Vec<E>> {
        (**self).get_all()
    }

    fn get_by_id(&self, id: EntityId) -> RepoResult<Option<E>> {
        (**self).get_by_id(id)
    }

    fn add(&self, entity: &mut E) -> RepoResult<EntityId> {
        (**self).add(entity)
    }

    fn update(&self, entity: &E) -> RepoResult<()> {
        (**self).update(entity)
    }

    fn remove(&self, entity: &E) -> RepoResult<()> {
        (**self).remove(entity)
    }
}
