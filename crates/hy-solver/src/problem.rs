//! Problem definition: the scheme plus the modules every branch shares.

use hy_components::{CatalogModel, Engine};
use hy_core::PhysicalConstants;
use hy_graph::{Graph, ModuleInstance, ModuleKind};
use tracing::debug;

use crate::error::{SolverError, SolverResult};

/// A scheme ready to solve.
///
/// Construction performs every structural check, so a problem that exists can
/// always be solved branch by branch.
#[derive(Debug, Clone)]
pub struct HydraulicProblem<'a> {
    /// Scheme topology
    pub graph: &'a Graph,

    /// Fluid, environment and calibration constants
    pub constants: &'a PhysicalConstants,

    pub engine: &'a ModuleInstance,

    pub tank: &'a ModuleInstance,

    /// Pumps in input order; one branch each
    pub pumps: Vec<&'a ModuleInstance>,

    /// Engine shaft speed [rev/min]
    pub engine_rpm: f64,
}

impl<'a> HydraulicProblem<'a> {
    /// Create a new problem with validation.
    pub fn new(graph: &'a Graph, constants: &'a PhysicalConstants) -> SolverResult<Self> {
        let engine = exactly_one(graph, ModuleKind::EngineInput, "engine")?;
        let tank = exactly_one(graph, ModuleKind::TankOutput, "tank")?;

        let pumps: Vec<&ModuleInstance> = graph.modules_of_kind(ModuleKind::Pump).collect();
        if pumps.is_empty() {
            return Err(SolverError::Structural {
                what: "the scheme has no pump".into(),
            });
        }

        let engine_rpm = Engine::read(engine)?.shaft_rpm()?;
        debug!(
            engine = %engine.label(),
            rpm = engine_rpm,
            pumps = pumps.len(),
            "problem set up"
        );

        Ok(Self {
            graph,
            constants,
            engine,
            tank,
            pumps,
            engine_rpm,
        })
    }
}

fn exactly_one<'a>(
    graph: &'a Graph,
    kind: ModuleKind,
    what: &str,
) -> SolverResult<&'a ModuleInstance> {
    let mut found = graph.modules_of_kind(kind);
    let first = found.next().ok_or_else(|| SolverError::Structural {
        what: format!("the scheme has no {what}"),
    })?;
    if found.next().is_some() {
        return Err(SolverError::Structural {
            what: format!("the scheme has more than one {what}"),
        });
    }
    Ok(first)
}
