//! HTTP delivery for the bike shop catalog.
//!
//! Maps the two resource collections onto `bikeshop_core`'s CRUD
//! pipeline. Routing is axum; everything below the handlers stays
//! transport-agnostic.
//!
//! ## Routes
//!
//! - `GET /api/{resource}` — list (summary or full, per display config).
//! - `GET /api/{resource}/{id}` — fetch one, 404 when absent.
//! - `POST /api/{resource}` — create, 201 with `Location`.
//! - `PUT /api/{resource}/{id}` — full-overwrite update, 200.
//! - `DELETE /api/{resource}/{id}` — 204.
//! - `GET /health` — liveness probe.

pub mod error;
pub mod handlers;
pub mod routes;
pub mod state;

pub use error::ApiError;
pub use routes::{router, serve};
pub use state::AppState;
