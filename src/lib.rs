//! Persistence core for the Ayurficha patient manager.
//!
//! The UI (views, forms, sliders) lives in the host application; this
//! crate owns the record types, the SQLite schema, and the repositories
//! the UI calls. One connection, opened at startup, is passed by
//! reference into every repository function.

pub mod config;
pub mod db;
pub mod models;

use std::path::Path;

use rusqlite::Connection;
use tracing_subscriber::EnvFilter;

use db::DatabaseError;

/// Initialize tracing. Called once by the host application at startup.
pub fn init_logging() {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| EnvFilter::new(config::default_log_filter())),
        )
        .init();

    tracing::info!("{} starting v{}", config::APP_NAME, config::APP_VERSION);
}

/// Open the patient database at its standard location, creating the data
/// directory on first run. An `Err` here is fatal: the host aborts startup.
pub fn open_default_database() -> Result<Connection, DatabaseError> {
    let path = config::database_path();
    ensure_parent_dir(&path)?;
    db::open_database(&path)
}

fn ensure_parent_dir(path: &Path) -> Result<(), DatabaseError> {
    if let Some(parent) = path.parent() {
        std::fs::create_dir_all(parent)?;
    }
    Ok(())
}
