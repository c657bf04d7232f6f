//! Scheme document validation.

use std::collections::HashSet;

use crate::schema::Scheme;

#[derive(thiserror::Error, Debug, PartialEq)]
pub enum ValidationError {
    #[error("Scheme name must not be empty")]
    EmptyName,

    #[error("Duplicate ID: {id} in {context}")]
    DuplicateId { id: String, context: String },
}

/// Checks the document itself; solvability is the solver's business.
pub fn validate_scheme(scheme: &Scheme) -> Result<(), ValidationError> {
    if scheme.name.trim().is_empty() {
        return Err(ValidationError::EmptyName);
    }

    let mut instance_ids = HashSet::new();
    for module in &scheme.data.modules {
        if !instance_ids.insert(module.instance_id) {
            return Err(ValidationError::DuplicateId {
                id: module.instance_id.to_string(),
                context: "modules".to_string(),
            });
        }
    }

    let mut connection_ids = HashSet::new();
    for conn in &scheme.data.connections {
        if !conn.id.is_empty() && !connection_ids.insert(conn.id.as_str()) {
            return Err(ValidationError::DuplicateId {
                id: conn.id.clone(),
                context: "connections".to_string(),
            });
        }
    }

    Ok(())
}
