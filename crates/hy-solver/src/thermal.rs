//! Lumped steady-state heat balance of the whole circuit.
//!
//! Heat generated in every branch leaves through the equipment surfaces and
//! the exposed part of the tank: `Q = h·A·(T − T_amb)`.

use hy_core::Environment;
use serde::Serialize;

/// Steady-state temperature [°C], or `None` when the temperature is unbounded
/// (heat is generated but nothing dissipates it).
pub fn steady_state_temp(heat_w: f64, h: f64, area: f64, ambient: f64) -> Option<f64> {
    if heat_w <= 0.0 {
        return Some(ambient);
    }
    let conductance = h * area;
    if conductance <= 0.0 {
        return None;
    }
    Some(ambient + heat_w / conductance)
}

/// Total area [m²] holding the fluid at `target` while rejecting `heat_w`.
///
/// `None` when no finite area can do it (non-positive coefficient, or a target
/// not above ambient).
pub fn required_area(heat_w: f64, h: f64, ambient: f64, target: f64) -> Option<f64> {
    let rise = target - ambient;
    if h <= 0.0 || !(rise > 0.0) {
        return None;
    }
    Some(heat_w.max(0.0) / (h * rise))
}

/// Result of the heat balance.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ThermalBalance {
    pub total_heat_kw: f64,
    /// Σ equipment side areas [m²]
    pub equipment_area: f64,
    /// Exposed tank area [m²]
    pub tank_area: f64,
    pub steady_state_temp: Option<f64>,
    /// Tank area still needed once equipment surfaces are counted [m²]
    pub required_tank_area: Option<f64>,
    pub target_temp: f64,
}

impl ThermalBalance {
    pub fn solve(
        total_heat_kw: f64,
        equipment_area: f64,
        tank_area: f64,
        environment: &Environment,
        target_temp: f64,
    ) -> Self {
        let heat_w = total_heat_kw * 1000.0;
        let h = environment.heat_transfer_coeff;
        let ambient = environment.ambient_temp;
        let steady_state_temp = steady_state_temp(heat_w, h, equipment_area + tank_area, ambient);
        let required_tank_area = required_area(heat_w, h, ambient, target_temp)
            .map(|total| (total - equipment_area).max(0.0));
        Self {
            total_heat_kw,
            equipment_area,
            tank_area,
            steady_state_temp,
            required_tank_area,
            target_temp,
        }
    }

    pub fn is_unbounded(&self) -> bool {
        self.steady_state_temp.is_none()
    }

    /// The tank rejects enough heat to hold the target temperature.
    pub fn tank_sufficient(&self) -> bool {
        self.required_tank_area
            .is_some_and(|required| self.tank_area >= required)
    }

    /// Verdict in words.
    pub fn conclusion(&self) -> String {
        let required = self
            .required_tank_area
            .map_or_else(|| "an unbounded".to_string(), |a| format!("{a:.2} m²"));
        match self.steady_state_temp {
            None => format!(
                "Steady-state temperature is unbounded: {:.2} kW of heat is generated \
                 but no surface dissipates it. The tank needs {} of dissipation area \
                 to stay at or below {:.0} °C.",
                self.total_heat_kw, required, self.target_temp
            ),
            Some(t) if self.tank_sufficient() => format!(
                "Steady-state temperature is {:.1} °C. The tank is sufficient: \
                 {:.2} m² available, {} required to stay at or below {:.0} °C.",
                t, self.tank_area, required, self.target_temp
            ),
            Some(t) => format!(
                "Steady-state temperature is {:.1} °C, above the {:.0} °C limit. \
                 The tank is insufficient: {} of tank area required, {:.2} m² available.",
                t, self.target_temp, required, self.tank_area
            ),
        }
    }
}
