//! Shared application service layer for the hydraulic solver.
//!
//! This crate is the boundary the CLI (and any other front end) talks to. It
//! loads schemes and settings, turns a request body into a report or a
//! classified error, and never hands out a partial result.

pub mod config;
pub mod error;
pub mod scheme_service;
pub mod solve_service;

// Re-export key types for convenience
pub use config::Settings;
pub use error::{AppError, AppResult, ErrorClass};
pub use scheme_service::{
    BranchSummary, SchemeSummary, describe_branches, load_scheme, save_scheme, summarize,
    validate_scheme,
};
pub use solve_service::{ErrorBody, Response, calculate, calculate_body, respond, solve_batch};
