//! Components rated at a nominal operating point (distributors, blocks,
//! filters, tees).

use hy_core::units::mpa_to_pa;
use hy_graph::ModuleInstance;

use crate::common::{keys, positive};

/// How a component's pressure drop was obtained.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DropScaling {
    /// `Δp_nom·(Q/Q_nom)²`
    Quadratic,
    /// Nominal drop used as is; the rated flow is unknown.
    Unscaled,
}

/// Rated data of a loss-producing component.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct RatedComponent {
    /// [MPa]
    pub nominal_drop_mpa: Option<f64>,
    /// [L/min]
    pub nominal_flow_lpm: Option<f64>,
    /// [L/min]
    pub leakage_lpm: Option<f64>,
}

/// Quadratic scaling of a nominal drop to the actual flow.
pub fn quadratic_drop(nominal_drop: f64, nominal_flow: f64, actual_flow: f64) -> f64 {
    let ratio = actual_flow / nominal_flow;
    nominal_drop * ratio * ratio
}

impl RatedComponent {
    /// Any module can carry rated data; kind filtering is the caller's concern.
    pub fn from_module(module: &ModuleInstance) -> Self {
        Self {
            nominal_drop_mpa: module.number(keys::NOMINAL_PRESSURE_DROP),
            nominal_flow_lpm: module.number(keys::NOMINAL_FLOW),
            leakage_lpm: module.number(keys::LEAKAGE),
        }
    }

    /// Pressure drop [Pa] at `flow_lpm`, or `None` when no nominal drop is declared.
    pub fn drop_pa(&self, flow_lpm: f64) -> Option<(f64, DropScaling)> {
        let drop = self.nominal_drop_mpa?;
        Some(match positive(self.nominal_flow_lpm) {
            Some(q_nom) => (
                mpa_to_pa(quadratic_drop(drop, q_nom, flow_lpm)),
                DropScaling::Quadratic,
            ),
            None => (mpa_to_pa(drop), DropScaling::Unscaled),
        })
    }

    /// Volumetric efficiency `(Q − leakage)/Q` at `flow_lpm`, in `[0, 1]`.
    ///
    /// `None` when no leakage is declared or there is no flow to leak from.
    pub fn leakage_efficiency(&self, flow_lpm: f64) -> Option<f64> {
        let leak = self.leakage_lpm?;
        if flow_lpm <= 0.0 {
            return None;
        }
        Some(((flow_lpm - leak) / flow_lpm).clamp(0.0, 1.0))
    }
}
