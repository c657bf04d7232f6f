//! Branch efficiency composition.

use hy_core::numeric::{clamp_or_floor, guarded_div};
use serde::Serialize;

/// Lower bound applied to the mechanical and volumetric products.
pub const EFFICIENCY_FLOOR: f64 = 0.1;

/// Share of the pump pressure that is not lost in lines and components.
pub fn hydraulic(pump_pressure: f64, total_losses: f64) -> f64 {
    if pump_pressure <= 0.0 {
        return 0.0;
    }
    guarded_div((pump_pressure - total_losses).max(0.0), pump_pressure)
}

/// Product of the mechanical efficiencies of pump and cylinder, floored.
pub fn mechanical(factors: impl IntoIterator<Item = f64>) -> f64 {
    let product: f64 = factors.into_iter().product();
    clamp_or_floor(product, EFFICIENCY_FLOOR, f64::MAX)
}

/// Product of volumetric and leakage efficiencies, clamped to `[0.1, 1]`.
pub fn volumetric(factors: impl IntoIterator<Item = f64>) -> f64 {
    let product: f64 = factors.into_iter().product();
    clamp_or_floor(product, EFFICIENCY_FLOOR, 1.0)
}

/// The three efficiencies of a branch and their product.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Efficiencies {
    pub hydraulic: f64,
    pub mechanical: f64,
    pub volumetric: f64,
    /// `hydraulic · mechanical · volumetric`, in `[0, 1]`
    pub overall: f64,
}

impl Efficiencies {
    pub fn compose(hydraulic: f64, mechanical: f64, volumetric: f64) -> Self {
        Self {
            hydraulic,
            mechanical,
            volumetric,
            overall: clamp_or_floor(hydraulic * mechanical * volumetric, 0.0, 1.0),
        }
    }
}
