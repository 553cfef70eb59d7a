//! Server binary: wires configuration, storage and logging, then serves.
//!
//! Environment:
//! - `BIKESHOP_ADDR` — listen address (default `127.0.0.1:3000`).
//! - `BIKESHOP_DB` — SQLite database path; unset runs on in-memory stores.
//! - `BIKESHOP_CONFIG` — display config path (default `display.json`).
//! - `BIKESHOP_LOG_DIR` — absolute log directory; unset disables file logs.

use std::sync::Arc;

use log::info;

use bikeshop_core::db::open_db;
use bikeshop_core::{default_log_level, init_logging};
use bikeshop_server::{serve, AppState};

#[tokio::main]
async fn main() {
    if let Err(err) = run().await {
        eprintln!("bikeshop_server: {err}");
        std::process::exit(1);
    }
}

async fn run() -> Result<(), Box<dyn std::error::Error>> {
    if let Ok(log_dir) = std::env::var("BIKESHOP_LOG_DIR") {
        init_logging(default_log_level(), &log_dir)?;
    }

    let config_path =
        std::env::var("BIKESHOP_CONFIG").unwrap_or_else(|_| "display.json".to_string());

    let state = match std::env::var("BIKESHOP_DB") {
        Ok(db_path) => {
            info!("event=server_start module=server backend=sqlite db={db_path}");
            Arc::new(AppState::sqlite(open_db(db_path)?, config_path))
        }
        Err(_) => {
            info!("event=server_start module=server backend=memory");
            Arc::new(AppState::in_memory(config_path))
        }
    };

    let addr = std::env::var("BIKESHOP_ADDR").unwrap_or_else(|_| "127.0.0.1:3000".to_string());
    info!("event=server_listen module=server addr={addr}");
    serve(state, &addr).await?;
    Ok(())
}
