//! hy-components: component library for hydraulic schemes.
//!
//! Provides models for the catalog modules and the fluid mechanics behind them:
//! - Pipe-flow primitives (velocity, Reynolds number, friction factor, losses)
//! - Per-line loss aggregation over the pipes of a suction/pressure/drain line
//! - Rated components whose nominal pressure drop scales with flow
//! - Pump, engine, cylinder and tank models read from module properties
//!
//! Every model is a deterministic function of module properties and the
//! physical constants; degenerate inputs map to zero instead of failing.
//!
//! # Example
//!
//! ```
//! use hy_components::flow;
//!
//! let v = flow::velocity(5.0e-4, 0.02);
//! let re = flow::reynolds(v, 0.02, 32e-6);
//! let lambda = flow::friction_factor(re, 0.02, 5e-5);
//! let dp = flow::friction_loss(lambda, 2.0, 0.02, 868.0, v);
//! assert!(dp > 0.0);
//! ```

pub mod common;
pub mod cylinder;
pub mod engine;
pub mod error;
pub mod flow;
pub mod line;
pub mod pipe;
pub mod pump;
pub mod rated;
pub mod surface;
pub mod traits;

// Re-exports
pub use cylinder::Cylinder;
pub use engine::Engine;
pub use error::{ComponentError, ComponentResult};
pub use line::{LineKind, LineLoss};
pub use pipe::Pipe;
pub use pump::Pump;
pub use rated::{DropScaling, RatedComponent};
pub use surface::{Tank, side_area};
pub use traits::CatalogModel;
