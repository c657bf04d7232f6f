//! Error types for solver operations.

use hy_components::ComponentError;
use hy_core::error::HyError;
use hy_graph::GraphError;
use thiserror::Error;

/// Errors that stop a solve before any branch result is produced.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum SolverError {
    /// The scheme lacks a mandatory module or has an invalid engine setting.
    #[error("Structural error: {what}")]
    Structural { what: String },

    #[error("Component error: {0}")]
    Component(#[from] ComponentError),

    #[error("Graph error: {0}")]
    Graph(#[from] GraphError),

    #[error("Numeric error: {what}")]
    Numeric { what: String },
}

pub type SolverResult<T> = Result<T, SolverError>;

impl SolverError {
    /// Whether the error is the caller's fault (bad scheme) rather than ours.
    pub fn is_structural(&self) -> bool {
        match self {
            SolverError::Structural { .. } | SolverError::Graph(_) => true,
            SolverError::Component(ComponentError::InvalidEngineSpeed { .. }) => true,
            SolverError::Component(_) | SolverError::Numeric { .. } => false,
        }
    }
}

impl From<SolverError> for HyError {
    fn from(e: SolverError) -> Self {
        HyError::Invariant {
            what: e.to_string(),
        }
    }
}
