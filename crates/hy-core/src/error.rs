use thiserror::Error;

pub type HyResult<T> = Result<T, HyError>;

#[derive(Error, Debug, Clone, PartialEq)]
pub enum HyError {
    #[error("Non-finite numeric value for {what}: {value}")]
    NonFinite { what: &'static str, value: f64 },

    #[error("Invalid constant {name}: {value} ({reason})")]
    InvalidConstant {
        name: &'static str,
        value: f64,
        reason: &'static str,
    },

    #[error("Invariant violated: {what}")]
    Invariant { what: String },
}
