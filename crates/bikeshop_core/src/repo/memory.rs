//! In-memory catalog repository.
//!
//! # Responsibility
//! - Implement the generic `Repository` contract over an owned
//!   collection, interchangeable with the SQLite backend.
//!
//! # Invariants
//! - The store is an explicit object constructed at startup, not a
//!   process-wide static.
//! - Identifier assignment is monotonic and never reuses a freed id.
//! - A poisoned store lock surfaces as `RepoError::Storage`.

use std::sync::{Mutex, MutexGuard};

use crate::model::{CatalogEntity, EntityId};

use super::{RepoError, RepoResult, Repository};

/// Owned backing collection for one entity type.
#[derive(Debug)]
struct MemoryStore<E> {
    rows: Vec<E>,
    next_id: EntityId,
}

/// In-memory implementation of the generic catalog repository.
pub struct MemoryRepository<E> {
    store: Mutex<MemoryStore<E>>,
}

impl<E> MemoryRepository<E> {
    pub fn new() -> Self {
        Self {
            store: Mutex::new(MemoryStore {
                rows: Vec::new(),
                next_id: 1,
            }),
        }
    }

    fn lock(&self) -> RepoResult<MutexGuard<'_, MemoryStore<E>>> {
        self.store
            .lock()
            .map_err(|_| RepoError::Storage("memory store lock poisoned".to_string()))
    }
}

impl<E> Default for MemoryRepository<E> {
    fn default() -> Self {
        Self::new()
    }
}

impl<E: CatalogEntity> Repository<E> for MemoryRepository<E> {
    fn get_all(&self) -> RepoResult<Vec<E>> {
        let store = self.lock()?;
        Ok(store.rows.clone())
    }

    fn get_by_id(&self, id: EntityId) -> RepoResult<Option<E>> {
        let store = self.lock()?;
        Ok(store.rows.iter().find(|row| row.id() == id).cloned())
    }

    fn add(&self, entity: &mut E) -> RepoResult<EntityId> {
        let mut store = self.lock()?;

        let id = store.next_id;
        store.next_id += 1;
        entity.set_id(id);
        store.rows.push(entity.clone());
        Ok(id)
    }

    fn update(&self, entity: &E) -> RepoResult<()> {
        let mut store = self.lock()?;

        match store.rows.iter_mut().find(|row| row.id() == entity.id()) {
            Some(row) => {
                *row = entity.clone();
                Ok(())
            }
            None => Err(RepoError::NotFound(entity.id())),
        }
    }

    fn remove(&self, entity: &E) -> RepoResult<()> {
        let mut store = self.lock()?;

        match store.rows.iter().position(|row| row.id() == entity.id()) {
            Some(index) => {
                store.rows.remove(index);
                Ok(())
            }
            None => Err(RepoError::NotFound(entity.id())),
        }
    }
}
