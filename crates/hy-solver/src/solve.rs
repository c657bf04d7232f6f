//! Top-level entry points.

use std::collections::BTreeMap;

use hy_components::{CatalogModel, Tank, side_area};
use hy_core::{PhysicalConstants, ensure_finite};
use hy_graph::{Graph, GraphBuilder, GraphDef, ModuleInstance, ModuleKind};
use tracing::{debug, info};

use crate::branch::solve_branch;
use crate::error::{SolverError, SolverResult};
use crate::problem::HydraulicProblem;
use crate::report::{BranchResult, HydraulicsReport};
use crate::thermal::ThermalBalance;
use crate::topology::BranchTopology;

/// Solve a scheme received in wire form.
pub fn solve_def(def: GraphDef, constants: &PhysicalConstants) -> SolverResult<HydraulicsReport> {
    let graph = GraphBuilder::from_def(def).build()?;
    calculate_hydraulics(&graph, constants)
}

/// Compute every branch and the circuit heat balance.
///
/// Structural problems (missing engine, tank or pump, invalid engine speed)
/// fail before any branch is evaluated.
pub fn calculate_hydraulics(
    graph: &Graph,
    constants: &PhysicalConstants,
) -> SolverResult<HydraulicsReport> {
    let problem = HydraulicProblem::new(graph, constants)?;

    let mut details: BTreeMap<String, BranchResult> = BTreeMap::new();
    let mut total_heat_kw = 0.0;
    for &pump in &problem.pumps {
        let topology = BranchTopology::locate(&problem, pump);
        let result = solve_branch(&problem, &topology)?;
        total_heat_kw += result.heat_generated_kw;

        let mut key = branch_key(pump);
        if details.contains_key(&key) {
            key = format!("{key}#{}", pump.instance_id);
        }
        details.insert(key, result);
    }

    let equipment_area: f64 = graph
        .modules()
        .iter()
        .map(|m| side_area(m, &constants.pipe_defaults))
        .sum();
    let tank = Tank::read(problem.tank)?;
    let balance = ThermalBalance::solve(
        total_heat_kw,
        equipment_area,
        tank.dissipation_area(),
        &constants.environment,
        constants.target_temp,
    );
    ensure_finite(balance.total_heat_kw, "total heat").map_err(|e| SolverError::Numeric {
        what: e.to_string(),
    })?;
    debug!(?balance, "heat balance");

    let report = HydraulicsReport {
        calculated_steady_state_temp_c: balance.steady_state_temp,
        required_tank_area: balance.required_tank_area,
        current_tank_area: balance.tank_area,
        conclusion: balance.conclusion(),
        details,
    };
    info!(
        branches = report.details.len(),
        total_heat_kw,
        steady_state_temp = ?report.calculated_steady_state_temp_c,
        "hydraulics calculated"
    );
    Ok(report)
}

/// Key of a branch in the report: its system tag, else the pump's catalog id.
fn branch_key(pump: &ModuleInstance) -> String {
    debug_assert_eq!(pump.kind(), ModuleKind::Pump);
    match pump.system() {
        Some(system) => system.as_str().to_string(),
        None => pump.catalog_id.clone(),
    }
}
