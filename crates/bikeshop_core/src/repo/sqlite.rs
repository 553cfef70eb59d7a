//! SQLite-backed catalog repository.
//!
//! # Responsibility
//! - Implement the generic `Repository` contract over a SQLite table.
//! - Keep all SQL inside the persistence boundary.
//!
//! # Invariants
//! - Row decode failures surface as `RepoError::InvalidData` instead of
//!   being masked.
//! - `update`/`remove` report a zero-row change as `NotFound`.
//! - The connection is shared behind a mutex; a poisoned lock surfaces
//!   as `RepoError::Storage`.

use std::marker::PhantomData;
use std::sync::{Arc, Mutex, MutexGuard};

use rusqlite::types::Value;
use rusqlite::{params_from_iter, Connection, Row};

use crate::model::bicycle::Bicycle;
use crate::model::bike_part::BikePart;
use crate::model::{CatalogEntity, EntityId};

use super::{RepoError, RepoResult, Repository};

/// SQL bindings required to persist a catalog entity in SQLite.
///
/// Implemented here, next to the SQL, so entity modules stay free of
/// storage details.
pub trait SqliteRecord: CatalogEntity + Sized {
    /// Projection used by every read path (`id` column included).
    const SELECT_SQL: &'static str;
    /// Insert statement without the identifier column.
    const INSERT_SQL: &'static str;
    /// Full-overwrite update statement; the identifier binds last.
    const UPDATE_SQL: &'static str;

    /// Positional parameters for `INSERT_SQL`.
    fn insert_params(&self) -> Vec<Value>;

    /// Positional parameters for `UPDATE_SQL`, identifier last.
    fn update_params(&self) -> Vec<Value>;

    /// Decodes one row of `SELECT_SQL` into the entity shape.
    fn from_row(row: &Row<'_>) -> RepoResult<Self>;
}

impl SqliteRecord for Bicycle {
    const SELECT_SQL: &'static str = "SELECT
        id,
        model,
        type,
        manufacturer,
        release_year,
        weight,
        price,
        stock_quantity
    FROM bicycles";

    const INSERT_SQL: &'static str = "INSERT INTO bicycles (
        model,
        type,
        manufacturer,
        release_year,
        weight,
        price,
        stock_quantity
    ) VALUES (?1, ?2, ?3, ?4, ?5, ?6, ?7);";

    const UPDATE_SQL: &'static str = "UPDATE bicycles
     SET
        model = ?1,
        type = ?2,
        manufacturer = ?3,
        release_year = ?4,
        weight = ?5,
        price = ?6,
        stock_quantity = ?7
     WHERE id = ?8;";

    fn insert_params(&self) -> Vec<Value> {
        vec![
            Value::Text(self.model.clone()),
            Value::Text(self.kind.clone()),
            Value::Text(self.manufacturer.clone()),
            Value::Integer(i64::from(self.release_year)),
            Value::Real(self.weight),
            Value::Real(self.price),
            Value::Integer(i64::from(self.stock_quantity)),
        ]
    }

    fn update_params(&self) -> Vec<Value> {
        let mut values = self.insert_params();
        values.push(Value::Integer(self.id));
        values
    }

    fn from_row(row: &Row<'_>) -> RepoResult<Self> {
        let entity = Self {
            id: row.get("id")?,
            model: row.get("model")?,
            kind: row.get("type")?,
            manufacturer: row.get("manufacturer")?,
            release_year: row.get("release_year")?,
            weight: row.get("weight")?,
            price: row.get("price")?,
            stock_quantity: row.get("stock_quantity")?,
        };
        reject_negative_stock(entity.stock_quantity, Self::TABLE, entity.id)?;
        Ok(entity)
    }
}

impl SqliteRecord for BikePart {
    const SELECT_SQL: &'static str = "SELECT
        id,
        part_type,
        description,
        manufacturer,
        price,
        stock_quantity
    FROM bike_parts";

    const INSERT_SQL: &'static str = "INSERT INTO bike_parts (
        part_type,
        description,
        manufacturer,
        price,
        stock_quantity
    ) VALUES (?1, ?2, ?3, ?4, ?5);";

    const UPDATE_SQL: &'static str = "UPDATE bike_parts
     SET
        part_type = ?1,
        description = ?2,
        manufacturer = ?3,
        price = ?4,
        stock_quantity = ?5
     WHERE id = ?6;";

    fn insert_params(&self) -> Vec<Value> {
        vec![
            Value::Text(self.part_type.clone()),
            Value::Text(self.description.clone()),
            Value::Text(self.manufacturer.clone()),
            Value::Real(self.price),
            Value::Integer(i64::from(self.stock_quantity)),
        ]
    }

    fn update_params(&self) -> Vec<Value> {
        let mut values = self.insert_params();
        values.push(Value::Integer(self.id));
        values
    }

    fn from_row(row: &Row<'_>) -> RepoResult<Self> {
        let entity = Self {
            id: row.get("id")?,
            part_type: row.get("part_type")?,
            description: row.get("description")?,
            manufacturer: row.get("manufacturer")?,
            price: row.get("price")?,
            stock_quantity: row.get("stock_quantity")?,
        };
        reject_negative_stock(entity.stock_quantity, Self::TABLE, entity.id)?;
        Ok(entity)
    }
}

fn reject_negative_stock(stock: i32, table: &str, id: EntityId) -> RepoResult<()> {
    if stock < 0 {
        return Err(RepoError::InvalidData(format!(
            "negative stock_quantity {stock} in {table}.id={id}"
        )));
    }
    Ok(())
}

/// SQLite implementation of the generic catalog repository.
///
/// The connection handle is shared so both resource repositories can run
/// over one database opened at startup.
pub struct SqliteRepository<E> {
    conn: Arc<Mutex<Connection>>,
    _entity: PhantomData<fn() -> E>,
}

impl<E> SqliteRepository<E> {
    pub fn new(conn: Arc<Mutex<Connection>>) -> Self {
        Self {
            conn,
            _entity: PhantomData,
        }
    }

    fn lock(&self) -> RepoResult<MutexGuard<'_, Connection>> {
        self.conn
            .lock()
            .map_err(|_| RepoError::Storage("database connection lock poisoned".to_string()))
    }
}

impl<E: SqliteRecord> Repository<E> for SqliteRepository<E> {
    fn get_all(&self) -> RepoResult<Vec<E>> {
        let conn = self.lock()?;
        let mut stmt = conn.prepare(&format!("{} ORDER BY id ASC;", E::SELECT_SQL))?;
        let mut rows = stmt.query([])?;

        let mut entities = Vec::new();
        while let Some(row) = rows.next()? {
            entities.push(E::from_row(row)?);
        }
        Ok(entities)
    }

    fn get_by_id(&self, id: EntityId) -> RepoResult<Option<E>> {
        let conn = self.lock()?;
        let mut stmt = conn.prepare(&format!("{} WHERE id = ?1;", E::SELECT_SQL))?;
        let mut rows = stmt.query([id])?;

        if let Some(row) = rows.next()? {
            return Ok(Some(E::from_row(row)?));
        }
        Ok(None)
    }

    fn add(&self, entity: &mut E) -> RepoResult<EntityId> {
        let conn = self.lock()?;
        conn.execute(E::INSERT_SQL, params_from_iter(entity.insert_params()))?;

        let id = conn.last_insert_rowid();
        entity.set_id(id);
        Ok(id)
    }

    fn update(&self, entity: &E) -> RepoResult<()> {
        let conn = self.lock()?;
        let changed = conn.execute(E::UPDATE_SQL, params_from_iter(entity.update_params()))?;

        if changed == 0 {
            return Err(RepoError::NotFound(entity.id()));
        }
        Ok(())
    }

    fn remove(&self, entity: &E) -> RepoResult<()> {
        let conn = self.lock()?;
        let changed = conn.execute(
            &format!("DELETE FROM {} WHERE id = ?1;", E::TABLE),
            [entity.id()],
        )?;

        if changed == 0 {
            return Err(RepoError::NotFound(entity.id()));
        }
        Ok(())
    }
}
