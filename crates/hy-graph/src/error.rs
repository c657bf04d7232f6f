//! Graph-specific error types.

use hy_core::HyError;

use crate::graph::InstanceId;

/// Graph construction and validation errors.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum GraphError {
    /// The scheme has no modules at all.
    Empty,

    /// Two modules share one instance id.
    DuplicateInstance { id: InstanceId },
}

impl std::fmt::Display for GraphError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            GraphError::Empty => write!(f, "No modules provided"),
            GraphError::DuplicateInstance { id } => {
                write!(f, "Instance id {} is used by more than one module", id)
            }
        }
    }
}

impl std::error::Error for GraphError {}

impl From<GraphError> for HyError {
    fn from(err: GraphError) -> Self {
        HyError::Invariant {
            what: err.to_string(),
        }
    }
}
