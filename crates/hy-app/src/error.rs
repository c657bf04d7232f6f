//! Error types for the hy-app service layer.

use std::path::PathBuf;

/// Who is at fault for a failed request.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorClass {
    /// The scheme or request is malformed; resubmitting it unchanged fails again.
    Client,
    /// Something went wrong on our side.
    Server,
}

impl ErrorClass {
    /// HTTP-style status code for the class.
    pub fn status(self) -> u16 {
        match self {
            ErrorClass::Client => 400,
            ErrorClass::Server => 500,
        }
    }
}

/// Application error type that wraps errors from the backend crates
/// and provides a unified error interface for every front end.
#[derive(Debug, thiserror::Error)]
pub enum AppError {
    #[error("Scheme error: {0}")]
    Scheme(String),

    #[error("Failed to read scheme file: {path}")]
    SchemeFileRead {
        path: PathBuf,
        source: std::io::Error,
    },

    #[error("Scheme validation failed: {0}")]
    Validation(String),

    #[error("Invalid input: {0}")]
    InvalidInput(String),

    #[error("{0}")]
    Structural(String),

    #[error("Configuration error: {0}")]
    Config(String),

    #[error("Solver error: {0}")]
    Solver(String),

    #[error("Result contains a non-finite value: {field}")]
    NonFinite { field: String },

    #[error("Internal error: {0}")]
    Internal(String),

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

impl AppError {
    pub fn class(&self) -> ErrorClass {
        match self {
            AppError::Scheme(_)
            | AppError::SchemeFileRead { .. }
            | AppError::Validation(_)
            | AppError::InvalidInput(_)
            | AppError::Structural(_) => ErrorClass::Client,
            AppError::Config(_)
            | AppError::Solver(_)
            | AppError::NonFinite { .. }
            | AppError::Internal(_)
            | AppError::Io(_) => ErrorClass::Server,
        }
    }

    pub fn status(&self) -> u16 {
        self.class().status()
    }
}

/// Result type for hy-app operations.
pub type AppResult<T> = Result<T, AppError>;

// Conversions from backend error types
impl From<hy_project::ProjectError> for AppError {
    fn from(err: hy_project::ProjectError) -> Self {
        match err {
            hy_project::ProjectError::Validation(e) => AppError::Validation(e.to_string()),
            hy_project::ProjectError::Io(e) => AppError::Io(e),
            other => AppError::Scheme(other.to_string()),
        }
    }
}

impl From<hy_solver::SolverError> for AppError {
    fn from(err: hy_solver::SolverError) -> Self {
        if err.is_structural() {
            AppError::Structural(err.to_string())
        } else {
            AppError::Solver(err.to_string())
        }
    }
}

impl From<hy_graph::GraphError> for AppError {
    fn from(err: hy_graph::GraphError) -> Self {
        AppError::Structural(err.to_string())
    }
}

impl From<hy_core::HyError> for AppError {
    fn from(err: hy_core::HyError) -> Self {
        AppError::Config(err.to_string())
    }
}
