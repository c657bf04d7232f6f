//! Core traits for component models.

use hy_graph::{ModuleInstance, ModuleKind};

use crate::error::{ComponentError, ComponentResult};

/// A model read from the properties of one catalog module.
///
/// Models are plain values: reading never touches the graph, and evaluation is a
/// deterministic function of the model and the physical constants.
pub trait CatalogModel: Sized {
    /// Module kind this model describes.
    const KIND: ModuleKind;

    /// Build the model from declared properties. Missing properties fall back to
    /// neutral values; the kind has already been checked.
    fn from_properties(module: &ModuleInstance) -> Self;

    /// Read the model, rejecting modules of another kind.
    fn read(module: &ModuleInstance) -> ComponentResult<Self> {
        let found = module.kind();
        if found != Self::KIND {
            return Err(ComponentError::WrongKind {
                module: module.label(),
                found: found.as_str(),
                expected: Self::KIND.as_str(),
            });
        }
        Ok(Self::from_properties(module))
    }
}
