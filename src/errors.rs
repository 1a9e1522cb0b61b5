// ABOUTME: Error types for the reveal-deck library
// ABOUTME: Provides structured errors for builder validation and export

use thiserror::Error;

#[derive(Error, Debug)]
pub enum DeckError {
    #[error("Invalid layout for operation: {0}")]
    InvalidLayout(String),

    #[error("Invalid argument: {0}")]
    InvalidArgument(String),

    #[error("Failed to write presentation: {0}")]
    Io(#[from] std::io::Error),
}

pub type Result<T> = std::result::Result<T, DeckError>;
