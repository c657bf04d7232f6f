//! Result records returned to the caller.

use std::collections::BTreeMap;

use hy_graph::InstanceId;
use serde::Serialize;

use crate::efficiency::Efficiencies;

/// Characteristic velocity of each line [m/s].
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Velocities {
    pub suction: f64,
    pub pressure: f64,
    pub drain: f64,
}

/// Branch losses [MPa].
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct LineLosses {
    pub suction_friction: f64,
    pub suction_local: f64,
    pub pressure_friction: f64,
    pub pressure_local: f64,
    pub drain_friction: f64,
    pub drain_local: f64,
    /// Component losses attributed to the pressure side
    pub pressure_components: f64,
    /// Component losses attributed to the drain side
    pub drain_components: f64,
    pub total: f64,
}

/// Pressure drop of one rated component.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ComponentLoss {
    pub instance_id: InstanceId,
    pub catalog_id: String,
    /// `pressure` or `drain`
    pub line: &'static str,
    /// Flow through the component [L/min]
    pub flow_lpm: f64,
    pub loss_mpa: f64,
    /// False when the nominal drop was used without flow scaling
    pub scaled: bool,
}

/// Everything computed for one pump-rooted branch.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct BranchResult {
    pub pump_instance_id: InstanceId,
    pub pump_catalog_id: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub system: Option<&'static str>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub cylinder_instance_id: Option<InstanceId>,
    pub engine_rpm: f64,
    pub flow_lpm: f64,
    pub flow_m3s: f64,
    pub drain_flow_lpm: f64,
    pub velocities: Velocities,
    pub losses: LineLosses,
    pub components: Vec<ComponentLoss>,
    /// Piston-side pressure demanded by the cylinder [MPa]
    pub cylinder_pressure_mpa: f64,
    pub required_pump_pressure_mpa: f64,
    pub efficiencies: Efficiencies,
    /// Overall branch efficiency, `efficiencies.overall`
    pub system_efficiency: f64,
    pub pump_power_kw: f64,
    pub heat_generated_kw: f64,
}

/// Response of a successful solve.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct HydraulicsReport {
    /// `null` when the temperature is unbounded
    pub calculated_steady_state_temp_c: Option<f64>,
    /// `null` only when no finite area holds the target temperature
    pub required_tank_area: Option<f64>,
    pub current_tank_area: f64,
    pub conclusion: String,
    pub details: BTreeMap<String, BranchResult>,
}

impl HydraulicsReport {
    /// Every number of the report, for finiteness checks at the boundary.
    pub fn numbers(&self) -> Vec<(String, f64)> {
        let mut out = vec![("currentTankArea".to_string(), self.current_tank_area)];
        if let Some(t) = self.calculated_steady_state_temp_c {
            out.push(("calculatedSteadyStateTempC".into(), t));
        }
        if let Some(a) = self.required_tank_area {
            out.push(("requiredTankArea".into(), a));
        }
        for (key, b) in &self.details {
            let l = &b.losses;
            let e = &b.efficiencies;
            let fields = [
                ("flowLpm", b.flow_lpm),
                ("flowM3s", b.flow_m3s),
                ("drainFlowLpm", b.drain_flow_lpm),
                ("velocities.suction", b.velocities.suction),
                ("velocities.pressure", b.velocities.pressure),
                ("velocities.drain", b.velocities.drain),
                ("losses.suctionFriction", l.suction_friction),
                ("losses.suctionLocal", l.suction_local),
                ("losses.pressureFriction", l.pressure_friction),
                ("losses.pressureLocal", l.pressure_local),
                ("losses.drainFriction", l.drain_friction),
                ("losses.drainLocal", l.drain_local),
                ("losses.pressureComponents", l.pressure_components),
                ("losses.drainComponents", l.drain_components),
                ("losses.total", l.total),
                ("cylinderPressureMpa", b.cylinder_pressure_mpa),
                ("requiredPumpPressureMpa", b.required_pump_pressure_mpa),
                ("efficiencies.hydraulic", e.hydraulic),
                ("efficiencies.mechanical", e.mechanical),
                ("efficiencies.volumetric", e.volumetric),
                ("systemEfficiency", b.system_efficiency),
                ("pumpPowerKw", b.pump_power_kw),
                ("heatGeneratedKw", b.heat_generated_kw),
            ];
            out.extend(
                fields
                    .into_iter()
                    .map(|(name, v)| (format!("details.{key}.{name}"), v)),
            );
            for c in &b.components {
                out.push((
                    format!("details.{key}.components.{}.lossMpa", c.instance_id),
                    c.loss_mpa,
                ));
            }
        }
        out
    }
}
