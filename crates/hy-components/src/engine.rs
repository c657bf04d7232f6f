//! Engine input: the prime mover driving every pump.

use hy_graph::{ModuleInstance, ModuleKind};

use crate::common::keys;
use crate::error::{ComponentError, ComponentResult};
use crate::traits::CatalogModel;

#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct Engine {
    pub nominal_rpm: Option<f64>,
    /// Operator-selected speed; overrides the nominal speed.
    pub selected_rpm: Option<f64>,
    pub max_rpm: Option<f64>,
}

impl Engine {
    /// Shaft speed [rev/min] the pumps are driven at.
    pub fn shaft_rpm(&self) -> ComponentResult<f64> {
        let rpm = self
            .selected_rpm
            .or(self.nominal_rpm)
            .ok_or_else(|| ComponentError::InvalidEngineSpeed {
                reason: "neither selectedRpm nor nominalRpm is set".into(),
            })?;
        if !rpm.is_finite() || rpm <= 0.0 {
            return Err(ComponentError::InvalidEngineSpeed {
                reason: format!("{rpm} is not a positive speed"),
            });
        }
        if let Some(max) = self.max_rpm {
            if rpm > max {
                return Err(ComponentError::InvalidEngineSpeed {
                    reason: format!("{rpm} exceeds maxRpm {max}"),
                });
            }
        }
        Ok(rpm)
    }
}

impl CatalogModel for Engine {
    const KIND: ModuleKind = ModuleKind::EngineInput;

    fn from_properties(module: &ModuleInstance) -> Self {
        Self {
            nominal_rpm: module.number(keys::NOMINAL_RPM),
            selected_rpm: module.number(keys::SELECTED_RPM),
            max_rpm: module.number(keys::MAX_RPM),
        }
    }
}
