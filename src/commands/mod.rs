//! Command implementations for the hoops-stats CLI
//!
//! Each command has a `build_*` function returning plain data and a `handle_*`
//! function that prints it as text lines or JSON.

pub mod common;
pub mod compare;
pub mod import;
pub mod radar;
pub mod rank;
pub mod trend;
pub mod zones;


use crate::{error::Result, storage::StatsDatabase, DB_PATH_ENV_VAR};
use std::path::PathBuf;

/// Database path from the flag, else `HOOPS_STATS_DB`, else the platform data
/// directory.
pub fn resolve_database_path(db: Option<PathBuf>) -> Result<PathBuf> {
    if let Some(path) = db {
        return Ok(path);
    }
    match std::env::var(DB_PATH_ENV_VAR) {
        Ok(path) if !path.trim().is_empty() => Ok(PathBuf::from(path.trim())),
        _ => StatsDatabase::default_path(),
    }
}
