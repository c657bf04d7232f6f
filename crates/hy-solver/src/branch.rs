//! Evaluation of one pump-rooted branch.

use hy_components::line::{self, LineKind, LineLoss};
use hy_components::{CatalogModel, Cylinder, DropScaling, Pump, RatedComponent};
use hy_core::units::{m3ps_to_lpm, pa_to_mpa, w_to_kw};
use hy_graph::{ModuleInstance, ModuleKind, SystemTag};
use tracing::{debug, warn};

use crate::efficiency::{self, Efficiencies};
use crate::error::SolverResult;
use crate::problem::HydraulicProblem;
use crate::report::{BranchResult, ComponentLoss, LineLosses, Velocities};
use crate::topology::{BranchTopology, Placement};

/// Running totals of the rated components on a branch.
#[derive(Debug, Default)]
struct ComponentTotals {
    pressure_pa: f64,
    drain_pa: f64,
    leakage_factors: Vec<f64>,
    records: Vec<ComponentLoss>,
}

/// Solve the branch described by `topology`.
pub fn solve_branch(
    problem: &HydraulicProblem<'_>,
    topology: &BranchTopology<'_>,
) -> SolverResult<BranchResult> {
    let constants = problem.constants;
    let pump = Pump::read(topology.pump)?;
    let cylinder = topology.cylinder.map(Cylinder::read).transpose()?;

    let flow_lpm = pump.flow_lpm(problem.engine_rpm);
    let flow = pump.flow_m3s(problem.engine_rpm);
    let drain_flow = cylinder.map_or(flow, |c| c.drain_flow(flow));
    let drain_flow_lpm = m3ps_to_lpm(drain_flow);

    let suction = line::aggregate(LineKind::Suction, topology.suction.as_deref(), flow, constants);
    let pressure = line::aggregate(LineKind::Pressure, topology.pressure.as_deref(), flow, constants);
    let drain = match cylinder {
        Some(_) => line::aggregate(LineKind::Drain, topology.drain.as_deref(), drain_flow, constants),
        None => LineLoss::absent(LineKind::Drain),
    };

    let members = topology.members(problem.graph.modules());
    let comps = component_losses(topology, &members, flow_lpm, drain_flow_lpm);

    let drain_back_pa = drain.total_pa() + comps.drain_pa;
    let cylinder_pa = cylinder
        .filter(Cylinder::has_demand)
        .map(|c| c.required_pressure_pa(drain_back_pa));
    let required_pa = suction.total_pa()
        + pressure.total_pa()
        + comps.pressure_pa
        + cylinder_pa.unwrap_or(drain_back_pa);
    let losses_pa = suction.total_pa() + pressure.total_pa() + drain_back_pa + comps.pressure_pa;

    let mut mech = vec![pump.mech_eff];
    let mut vol = vec![pump.volumetric_eff];
    if let Some(c) = cylinder {
        mech.push(c.mech_eff);
        vol.push(c.volumetric_eff);
    }
    vol.extend(comps.leakage_factors.iter().copied());
    let efficiencies = Efficiencies::compose(
        efficiency::hydraulic(required_pa, losses_pa),
        efficiency::mechanical(mech),
        efficiency::volumetric(vol),
    );

    let pump_power_kw = w_to_kw(pump.shaft_power_w(required_pa, flow));
    let heat_generated_kw = pump_power_kw * (1.0 - efficiencies.overall);

    debug!(
        pump = %topology.pump.label(),
        flow_lpm,
        required_mpa = pa_to_mpa(required_pa),
        efficiency = efficiencies.overall,
        pump_power_kw,
        heat_generated_kw,
        "branch solved"
    );

    Ok(BranchResult {
        pump_instance_id: topology.pump.instance_id,
        pump_catalog_id: topology.pump.catalog_id.clone(),
        system: topology.system.map(SystemTag::as_str),
        cylinder_instance_id: topology.cylinder.map(|c| c.instance_id),
        engine_rpm: problem.engine_rpm,
        flow_lpm,
        flow_m3s: flow,
        drain_flow_lpm,
        velocities: Velocities {
            suction: suction.velocity,
            pressure: pressure.velocity,
            drain: drain.velocity,
        },
        losses: LineLosses {
            suction_friction: pa_to_mpa(suction.friction_pa),
            suction_local: pa_to_mpa(suction.local_pa),
            pressure_friction: pa_to_mpa(pressure.friction_pa),
            pressure_local: pa_to_mpa(pressure.local_pa),
            drain_friction: pa_to_mpa(drain.friction_pa),
            drain_local: pa_to_mpa(drain.local_pa),
            pressure_components: pa_to_mpa(comps.pressure_pa),
            drain_components: pa_to_mpa(comps.drain_pa),
            total: pa_to_mpa(losses_pa),
        },
        components: comps.records,
        cylinder_pressure_mpa: pa_to_mpa(cylinder_pa.unwrap_or(0.0)),
        required_pump_pressure_mpa: pa_to_mpa(required_pa),
        efficiencies,
        system_efficiency: efficiencies.overall,
        pump_power_kw,
        heat_generated_kw,
    })
}

/// Scale every member's nominal drop to the flow through it and collect the
/// leakage efficiencies.
///
/// Components on the drain path see the drain flow; everything else sees the
/// pump flow and is charged to the pressure side.
fn component_losses(
    topology: &BranchTopology<'_>,
    members: &[&ModuleInstance],
    flow_lpm: f64,
    drain_flow_lpm: f64,
) -> ComponentTotals {
    let mut totals = ComponentTotals::default();
    for module in members {
        let rated = RatedComponent::from_module(module);
        let placement = topology.place(module.instance_id);
        let (line, through) = match placement {
            Placement::Drain => (LineKind::Drain, drain_flow_lpm),
            _ => (LineKind::Pressure, flow_lpm),
        };

        if let Some((loss_pa, scaling)) = rated.drop_pa(through) {
            if scaling == DropScaling::Unscaled {
                warn!(
                    component = %module.label(),
                    "no rated flow; nominal pressure drop used unscaled"
                );
            }
            match line {
                LineKind::Drain => totals.drain_pa += loss_pa,
                _ => totals.pressure_pa += loss_pa,
            }
            totals.records.push(ComponentLoss {
                instance_id: module.instance_id,
                catalog_id: module.catalog_id.clone(),
                line: line.as_str(),
                flow_lpm: through,
                loss_mpa: pa_to_mpa(loss_pa),
                scaled: scaling == DropScaling::Quadratic,
            });
        }

        if rated.leakage_lpm.is_some() {
            let confident = placement != Placement::Unplaced
                || module.kind() == ModuleKind::Filter
                || module.system() == Some(SystemTag::Common);
            if !confident {
                warn!(
                    component = %module.label(),
                    "leaking component is on no branch line; leakage ignored"
                );
                continue;
            }
            if let Some(factor) = rated.leakage_efficiency(through) {
                totals.leakage_factors.push(factor);
            }
        }
    }
    totals
}
