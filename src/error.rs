//! Error types for the hoops-stats engine and its data providers

use thiserror::Error;

pub type Result<T> = std::result::Result<T, StatsError>;

#[derive(Error, Debug)]
pub enum StatsError {
    #[error("Invalid parameter: {message}")]
    InvalidParameter { message: String },

    #[error("Unknown stat: {key}")]
    UnknownStat { key: String },

    #[error("Malformed input: {message}")]
    Structural { message: String },

    #[error("JSON parsing failed: {0}")]
    Json(#[from] serde_json::Error),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Database error: {0}")]
    Database(#[from] rusqlite::Error),

    #[error("Database path not provided, {env_var} not set and no data directory available")]
    MissingDatabasePath { env_var: String },
}

impl StatsError {
    pub fn invalid(message: impl Into<String>) -> Self {
        StatsError::InvalidParameter {
            message: message.into(),
        }
    }

    pub fn structural(message: impl Into<String>) -> Self {
        StatsError::Structural {
            message: message.into(),
        }
    }

    /// True for the caller-side configuration errors (bad window, unknown stat).
    pub fn is_invalid_parameter(&self) -> bool {
        matches!(
            self,
            StatsError::InvalidParameter { .. } | StatsError::UnknownStat { .. }
        )
    }
}

#[cfg(test)]
mod tests;
