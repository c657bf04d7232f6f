//! hy-core: stable foundation for the hydraulic scheme solver.
//!
//! Contains:
//! - units (uom SI types + constructors and catalog unit conversions)
//! - numeric (Real + guarded float helpers)
//! - constants (fluid, environment and calibration records)
//! - error (shared error types)

pub mod constants;
pub mod error;
pub mod numeric;
pub mod units;

// Re-exports: nice ergonomics for downstream crates
pub use constants::{Environment, Fluid, LineAllowances, PhysicalConstants, PipeDefaults};
pub use error::{HyError, HyResult};
pub use numeric::*;
