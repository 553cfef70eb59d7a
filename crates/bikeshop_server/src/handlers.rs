//! Request handlers, generic over the catalog entity type.
//!
//! # Responsibility
//! - Translate HTTP verbs into catalog service calls.
//! - Apply the configuration-driven list shaping (availability filter,
//!   summary vs full projection).
//!
//! # Invariants
//! - Handlers hold no state of their own; every request is independent.
//! - Display settings are resolved per request through `CatalogState`.

use std::sync::Arc;

use axum::extract::{Path, State};
use axum::http::{header, StatusCode};
use axum::response::{IntoResponse, Response};
use axum::Json;
use serde::de::DeserializeOwned;
use serde::Serialize;

use bikeshop_core::{CatalogEntry, EntityId};

use crate::error::ApiError;
use crate::state::{AppState, CatalogState};

/// Fixed-duration cache hint carried by list responses.
const LIST_CACHE_CONTROL: &str = "public, max-age=60";

/// `GET /api/{resource}` — list records, shaped by the display config.
pub async fn list<E>(State(state): State<Arc<AppState>>) -> Result<Response, ApiError>
where
    E: CatalogEntry + Serialize,
    E::Summary: Serialize,
    AppState: CatalogState<E>,
{
    let settings = <AppState as CatalogState<E>>::settings(state.as_ref());
    let service = <AppState as CatalogState<E>>::service(state.as_ref());

    let entities = service.list(settings.show_available_only)?;
    let body = if settings.show_full_information {
        Json(entities).into_response()
    } else {
        let summaries: Vec<E::Summary> = entities.iter().map(E::summarize).collect();
        Json(summaries).into_response()
    };

    Ok(([(header::CACHE_CONTROL, LIST_CACHE_CONTROL)], body).into_response())
}

/// `GET /api/{resource}/{id}` — fetch one record with full detail.
pub async fn get_by_id<E>(
    State(state): State<Arc<AppState>>,
    Path(id): Path<EntityId>,
) -> Result<Response, ApiError>
where
    E: CatalogEntry + Serialize,
    AppState: CatalogState<E>,
{
    let entity = <AppState as CatalogState<E>>::service(state.as_ref()).get(id)?;
    Ok(Json(entity).into_response())
}

/// `POST /api/{resource}` — validate and persist a new record.
///
/// Replies 201 with the created representation and a `Location`
/// reference to the get-by-id route.
pub async fn create<E>(
    State(state): State<Arc<AppState>>,
    Json(dto): Json<E::Dto>,
) -> Result<Response, ApiError>
where
    E: CatalogEntry + Serialize,
    E::Dto: DeserializeOwned + Send + 'static,
    AppState: CatalogState<E>,
{
    let entity = <AppState as CatalogState<E>>::service(state.as_ref()).create(&dto)?;
    let location = format!("/api/{}/{}", E::resource(), entity.id());

    Ok((
        StatusCode::CREATED,
        [(header::LOCATION, location)],
        Json(entity),
    )
        .into_response())
}

/// `PUT /api/{resource}/{id}` — full-overwrite update, 200 with the
/// updated record.
pub async fn update<E>(
    State(state): State<Arc<AppState>>,
    Path(id): Path<EntityId>,
    Json(dto): Json<E::Dto>,
) -> Result<Response, ApiError>
where
    E: CatalogEntry + Serialize,
    E::Dto: DeserializeOwned + Send + 'static,
    AppState: CatalogState<E>,
{
    let entity = <AppState as CatalogState<E>>::service(state.as_ref()).update(id, &dto)?;
    Ok(Json(entity).into_response())
}

/// `DELETE /api/{resource}/{id}` — 204 on success.
pub async fn remove<E>(
    State(state): State<Arc<AppState>>,
    Path(id): Path<EntityId>,
) -> Result<Response, ApiError>
where
    E: CatalogEntry,
    AppState: CatalogState<E>,
{
    <AppState as CatalogState<E>>::service(state.as_ref()).delete(id)?;
    Ok(StatusCode::NO_CONTENT.into_response())
}
