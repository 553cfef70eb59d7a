//! Router assembly and server entry point.

use std::sync::Arc;

use axum::response::IntoResponse;
use axum::routing::get;
use axum::{Json, Router};
use serde::de::DeserializeOwned;
use serde::Serialize;
use serde_json::json;

use bikeshop_core::{Bicycle, BikePart, CatalogEntry};

use crate::handlers;
use crate::state::{AppState, CatalogState};

/// Builds the full application router.
pub fn router(state: Arc<AppState>) -> Router {
    Router::new()
        .route("/health", get(health))
        .nest("/api/bicycles", resource_routes::<Bicycle>())
        .nest("/api/bikeparts", resource_routes::<BikePart>())
        .with_state(state)
}

/// Serves the catalog over HTTP at the given address, e.g. `127.0.0.1:3000`.
pub async fn serve(state: Arc<AppState>, addr: &str) -> Result<(), std::io::Error> {
    let app = router(state);
    let listener = tokio::net::TcpListener::bind(addr).await?;
    axum::serve(listener, app).await
}

/// One CRUD route set; instantiated per resource collection.
fn resource_routes<E>() -> Router<Arc<AppState>>
where
    E: CatalogEntry + Serialize,
    E::Summary: Serialize,
    E::Dto: DeserializeOwned + Send + 'static,
    AppState: CatalogState<E>,
{
    Router::new()
        .route("/", get(handlers::list::<E>).post(handlers::create::<E>))
        .route(
            "/:id",
            get(handlers::get_by_id::<E>)
                .put(handlers::update::<E>)
                .delete(handlers::remove::<E>),
        )
}

/// `GET /health` — liveness probe.
async fn health() -> impl IntoResponse {
    Json(json!({
        "ok": true,
        "ping": bikeshop_core::ping(),
        "version": bikeshop_core::core_version(),
    }))
}
