use thiserror::Error;

use crate::grid::GridError;

// Custom Application Error
#[derive(Error, Debug)]
pub enum AppError {
    #[error("File I/O error: {0}")]
    Io(#[from] std::io::Error),
    #[error("{0}")]
    Grid(#[from] GridError),
    #[error("JSON encoding error: {0}")]
    Json(#[from] serde_json::Error),
    #[error("Invalid output path: {0}")]
    InvalidPath(String),
}

impl AppError {
    /// Process exit status: 2 for bad input, 1 for everything else.
    pub fn exit_code(&self) -> u8 {
        match self {
            AppError::Grid(e) if e.is_user_error() => 2,
            AppError::InvalidPath(_) => 2,
            _ => 1,
        }
    }
}
