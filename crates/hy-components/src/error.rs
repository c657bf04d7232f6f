//! Error types for component operations.

use hy_core::error::HyError;
use thiserror::Error;

/// Errors that can occur while reading or evaluating a component model.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum ComponentError {
    #[error("Invalid selected engine RPM: {reason}")]
    InvalidEngineSpeed { reason: String },

    #[error("Module {module} is a {found}, expected {expected}")]
    WrongKind {
        module: String,
        found: &'static str,
        expected: &'static str,
    },
}

pub type ComponentResult<T> = Result<T, ComponentError>;

impl From<ComponentError> for HyError {
    fn from(e: ComponentError) -> Self {
        HyError::Invariant {
            what: e.to_string(),
        }
    }
}
