//! Error types for loading and configuration.
//!
//! Ranking and simulation never fail; only the I/O and config surfaces do.

use thiserror::Error;

#[derive(Error, Debug)]
pub enum LotteryError {
    #[error("Failed to read season records: {0}")]
    Io(#[from] std::io::Error),

    #[error("Invalid JSON: {0}")]
    Json(#[from] serde_json::Error),

    #[error("Configuration error: {0}")]
    Config(String),
}

pub type Result<T> = std::result::Result<T, LotteryError>;
