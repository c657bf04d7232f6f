//! hy-project: scheme document format and validation.

pub mod schema;
pub mod validate;

pub use schema::*;
pub use validate::{ValidationError, validate_scheme};

use std::path::Path;

pub type ProjectResult<T> = Result<T, ProjectError>;

#[derive(thiserror::Error, Debug)]
pub enum ProjectError {
    #[error("Validation error: {0}")]
    Validation(#[from] ValidationError),

    #[error("Unsupported file extension: {path}")]
    UnsupportedFormat { path: String },

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("YAML error: {0}")]
    Yaml(#[from] serde_yaml::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

/// On-disk encodings of a scheme document.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Format {
    Json,
    Yaml,
}

impl Format {
    /// Pick the encoding from a file extension.
    pub fn from_path(path: &Path) -> ProjectResult<Self> {
        match path.extension().and_then(|e| e.to_str()) {
            Some("json") => Ok(Format::Json),
            Some("yaml" | "yml") => Ok(Format::Yaml),
            _ => Err(ProjectError::UnsupportedFormat {
                path: path.display().to_string(),
            }),
        }
    }
}

pub fn load_yaml(path: &Path) -> ProjectResult<Scheme> {
    let content = std::fs::read_to_string(path)?;
    let scheme: Scheme = serde_yaml::from_str(&content)?;
    validate_scheme(&scheme)?;
    Ok(scheme)
}

pub fn save_yaml(path: &Path, scheme: &Scheme) -> ProjectResult<()> {
    validate_scheme(scheme)?;
    let content = serde_yaml::to_string(scheme)?;
    std::fs::write(path, content)?;
    Ok(())
}

pub fn load_json(path: &Path) -> ProjectResult<Scheme> {
    let content = std::fs::read_to_string(path)?;
    let scheme: Scheme = serde_json::from_str(&content)?;
    validate_scheme(&scheme)?;
    Ok(scheme)
}

pub fn save_json(path: &Path, scheme: &Scheme) -> ProjectResult<()> {
    validate_scheme(scheme)?;
    let content = serde_json::to_string_pretty(scheme)?;
    std::fs::write(path, content)?;
    Ok(())
}

/// Load a scheme, choosing the encoding by extension.
pub fn load(path: &Path) -> ProjectResult<Scheme> {
    match Format::from_path(path)? {
        Format::Json => load_json(path),
        Format::Yaml => load_yaml(path),
    }
}

/// Save a scheme, choosing the encoding by extension.
pub fn save(path: &Path, scheme: &Scheme) -> ProjectResult<()> {
    match Format::from_path(path)? {
        Format::Json => save_json(path, scheme),
        Format::Yaml => save_yaml(path, scheme),
    }
}

/// Read a scheme from a file, accepting a bare `{modules, connections}` graph as well.
pub fn load_request(path: &Path) -> ProjectResult<Scheme> {
    let content = std::fs::read_to_string(path)?;
    let body: RequestBody = match Format::from_path(path)? {
        Format::Json => serde_json::from_str(&content)?,
        Format::Yaml => serde_yaml::from_str(&content)?,
    };
    let scheme = body.into_scheme(&file_stem(path));
    validate_scheme(&scheme)?;
    Ok(scheme)
}

fn file_stem(path: &Path) -> String {
    path.file_stem()
        .and_then(|s| s.to_str())
        .unwrap_or("scheme")
        .to_string()
}
