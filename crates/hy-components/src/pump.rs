//! Positive-displacement pump driven from the engine.

use hy_core::numeric::guarded_div;
use hy_core::units::lpm_to_m3ps;
use hy_graph::{ModuleInstance, ModuleKind};

use crate::common::{efficiency_or_unity, keys};
use crate::traits::CatalogModel;

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Pump {
    /// Displacement [cm³/rev]
    pub working_volume: f64,
    pub volumetric_eff: f64,
    pub mech_eff: f64,
    /// Pump speed over engine speed
    pub drive_ratio: f64,
}

impl Pump {
    /// Delivered flow [L/min] at `engine_rpm`.
    pub fn flow_lpm(&self, engine_rpm: f64) -> f64 {
        self.working_volume * engine_rpm * self.drive_ratio * self.volumetric_eff / 1000.0
    }

    /// Delivered flow [m³/s] at `engine_rpm`.
    pub fn flow_m3s(&self, engine_rpm: f64) -> f64 {
        lpm_to_m3ps(self.flow_lpm(engine_rpm))
    }

    /// Shaft power [W] to deliver `flow` [m³/s] at `pressure` [Pa].
    ///
    /// Zero (not infinite) when either efficiency is zero.
    pub fn shaft_power_w(&self, pressure: f64, flow: f64) -> f64 {
        guarded_div(pressure * flow, self.volumetric_eff * self.mech_eff)
    }
}

impl CatalogModel for Pump {
    const KIND: ModuleKind = ModuleKind::Pump;

    fn from_properties(module: &ModuleInstance) -> Self {
        Self {
            working_volume: module.number(keys::WORKING_VOLUME).unwrap_or(0.0),
            volumetric_eff: efficiency_or_unity(module.number(keys::VOLUMETRIC_EFF)),
            mech_eff: efficiency_or_unity(module.number(keys::MECH_EFF)),
            drive_ratio: module.number(keys::DRIVE_RATIO).unwrap_or(1.0),
        }
    }
}
