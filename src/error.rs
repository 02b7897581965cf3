//! Error types for the F1 fantasy scoring CLI

use thiserror::Error;

#[cfg(test)]
mod tests;

pub type Result<T> = std::result::Result<T, FantasyError>;

#[derive(Error, Debug)]
pub enum FantasyError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("JSON parsing failed: {0}")]
    Json(#[from] serde_json::Error),

    #[error("Failed to parse data file {path}: {source}")]
    DataFile {
        path: String,
        #[source]
        source: serde_json::Error,
    },

    #[error("Failed to parse ID: {0}")]
    InvalidId(#[from] std::num::ParseIntError),

    #[error("Data directory not provided and {env_var} environment variable not set")]
    MissingDataDir { env_var: String },

    #[error("Invalid session: {session}")]
    InvalidSession { session: String },

    #[error("Driver not found: {query}")]
    DriverNotFound { query: String },

    #[error("Driver query is ambiguous: {query} matches {matches}")]
    AmbiguousDriver { query: String, matches: String },
}
