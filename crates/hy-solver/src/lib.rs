//! Hydraulic scheme solver.
//!
//! Given a validated scheme graph and the physical constants, the solver
//! locates the engine, the tank and every pump, evaluates one branch per pump
//! (line losses, component losses, cylinder demand, efficiencies, power and
//! heat), then closes a lumped heat balance over the whole circuit.
//!
//! The computation is a pure function of its inputs: the graph is only
//! borrowed, every accumulator is local to one branch, and repeated calls with
//! the same input return identical reports.

pub mod branch;
pub mod efficiency;
pub mod error;
pub mod problem;
pub mod report;
pub mod solve;
pub mod thermal;
pub mod topology;

pub use error::{SolverError, SolverResult};
pub use problem::HydraulicProblem;
pub use report::{BranchResult, ComponentLoss, HydraulicsReport, LineLosses, Velocities};
pub use solve::{calculate_hydraulics, solve_def};
pub use thermal::ThermalBalance;
pub use topology::{BranchTopology, Placement};
