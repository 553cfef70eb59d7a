//! Catalog use-case service.
//!
//! # Responsibility
//! - Provide the CRUD entry points backing the HTTP surface:
//!   validate the DTO, map it onto the entity shape, persist, and
//!   report semantic failures distinctly from storage ones.
//!
//! # Invariants
//! - No write is attempted while the validation result is non-empty.
//! - Update and delete fetch the existing record first; an absent
//!   identifier is `ServiceError::NotFound`, never a storage error.
//! - The service stays storage-agnostic; backends swap behind
//!   `Repository`.

use std::error::Error;
use std::fmt::{Display, Formatter};

use log::info;

use crate::dto::{BicycleDto, BicycleSummary, BikePartDto, BikePartSummary};
use crate::mapper;
use crate::model::bicycle::Bicycle;
use crate::model::bike_part::BikePart;
use crate::model::{CatalogEntity, EntityId};
use crate::repo::{RepoError, Repository};
use crate::validator::{self, FieldError};

pub type ServiceResult<T> = Result<T, ServiceError>;

/// Failure taxonomy surfaced to delivery layers.
#[derive(Debug)]
pub enum ServiceError {
    /// Requested identifier does not exist.
    NotFound(EntityId),
    /// One or more field rules were violated; nothing was written.
    Validation(Vec<FieldError>),
    /// Backing store unreachable or write rejected. Not retried.
    Storage(RepoError),
}

impl Display for ServiceError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::NotFound(id) => write!(f, "record not found: {id}"),
            Self::Validation(errors) => write!(f, "validation failed: {} field error(s)", errors.len()),
            Self::Storage(err) => write!(f, "{err}"),
        }
    }
}

impl Error for ServiceError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            Self::Storage(err) => Some(err),
            Self::NotFound(_) | Self::Validation(_) => None,
        }
    }
}

impl From<RepoError> for ServiceError {
    fn from(value: RepoError) -> Self {
        // A repo-level NotFound can only appear when a record vanished
        // between fetch and write; keep it semantic for the caller.
        match value {
            RepoError::NotFound(id) => Self::NotFound(id),
            other => Self::Storage(other),
        }
    }
}

/// Wires an entity type to its DTO, summary projection, validator and
/// mapper so one service implementation covers every resource.
pub trait CatalogEntry: CatalogEntity {
    type Dto;
    type Summary;

    /// URL segment of the resource collection, e.g. `bicycles`.
    fn resource() -> &'static str;

    /// Evaluates the full field rule set for a payload.
    fn validate(dto: &Self::Dto) -> Vec<FieldError>;

    /// Builds a new, unpersisted entity from a payload.
    fn from_dto(dto: &Self::Dto) -> Self;

    /// Full-overwrite merge of a payload into an existing entity.
    fn merge_dto(dto: &Self::Dto, existing: &mut Self);

    /// Identifier-free projection for list responses.
    fn summarize(&self) -> Self::Summary;
}

impl CatalogEntry for Bicycle {
    type Dto = BicycleDto;
    type Summary = BicycleSummary;

    fn resource() -> &'static str {
        "bicycles"
    }

    fn validate(dto: &Self::Dto) -> Vec<FieldError> {
        validator::validate_bicycle(dto)
    }

    fn from_dto(dto: &Self::Dto) -> Self {
        mapper::bicycle_from_dto(dto)
    }

    fn merge_dto(dto: &Self::Dto, existing: &mut Self) {
        mapper::merge_bicycle(dto, existing);
    }

    fn summarize(&self) -> Self::Summary {
        mapper::bicycle_summary(self)
    }
}

impl CatalogEntry for BikePart {
    type Dto = BikePartDto;
    type Summary = BikePartSummary;

    fn resource() -> &'static str {
        "bikeparts"
    }

    fn validate(dto: &Self::Dto) -> Vec<FieldError> {
        validator::validate_bike_part(dto)
    }

    fn from_dto(dto: &Self::Dto) -> Self {
        mapper::bike_part_from_dto(dto)
    }

    fn merge_dto(dto: &Self::Dto, existing: &mut Self) {
        mapper::merge_bike_part(dto, existing);
    }

    fn summarize(&self) -> Self::Summary {
        mapper::bike_part_summary(self)
    }
}

/// CRUD service over one catalog resource.
pub struct CatalogService<E: CatalogEntry, R: Repository<E>> {
    repo: R,
    _entity: std::marker::PhantomData<fn() -> E>,
}

impl<E: CatalogEntry, R: Repository<E>> CatalogService<E, R> {
    /// Creates a service using the provided repository implementation.
    pub fn new(repo: R) -> Self {
        Self {
            repo,
            _entity: std::marker::PhantomData,
        }
    }

    /// Lists all records, optionally restricted to those in stock.
    pub fn list(&self, available_only: bool) -> ServiceResult<Vec<E>> {
        let mut entities = self.repo.get_all()?;
        if available_only {
            entities.retain(|entity| entity.stock_quantity() > 0);
        }
        Ok(entities)
    }

    /// Fetches one record by identifier.
    pub fn get(&self, id: EntityId) -> ServiceResult<E> {
        self.repo.get_by_id(id)?.ok_or(ServiceError::NotFound(id))
    }

    /// Validates and persists a new record, returning it with its
    /// assigned identifier.
    pub fn create(&self, dto: &E::Dto) -> ServiceResult<E> {
        let errors = E::validate(dto);
        if !errors.is_empty() {
            return Err(ServiceError::Validation(errors));
        }

        let mut entity = E::from_dto(dto);
        let id = self.repo.add(&mut entity)?;
        info!(
            "event=catalog_create module=service resource={} id={id}",
            E::resource()
        );
        Ok(entity)
    }

    /// Full-overwrite update of an existing record.
    ///
    /// The existing record is fetched first so an unknown identifier is
    /// reported before the payload is validated.
    pub fn update(&self, id: EntityId, dto: &E::Dto) -> ServiceResult<E> {
        let mut existing = self.get(id)?;

        let errors = E::validate(dto);
        if !errors.is_empty() {
            return Err(ServiceError::Validation(errors));
        }

        E::merge_dto(dto, &mut existing);
        self.repo.update(&existing)?;
        info!(
            "event=catalog_update module=service resource={} id={id}",
            E::resource()
        );
        Ok(existing)
    }

    /// Deletes an existing record by identifier.
    pub fn delete(&self, id: EntityId) -> ServiceResult<()> {
        let existing = self.get(id)?;
        self.repo.remove(&existing)?;
        info!(
            "event=catalog_delete module=service resource={} id={id}",
            E::resource()
        );
        Ok(())
    }
}
