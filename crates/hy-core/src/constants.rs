//! Calibration constants consumed by the solver.
//!
//! Defaults reproduce the catalog values exactly; they encode calibration
//! choices of the catalog, so change them only through a constants file.

use crate::{HyError, HyResult};

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// Working fluid (mineral hydraulic oil by default).
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "camelCase", default))]
pub struct Fluid {
    /// kg/m³
    pub density: f64,
    /// m²/s
    pub kinematic_viscosity: f64,
}

impl Default for Fluid {
    fn default() -> Self {
        Self {
            density: 868.0,
            kinematic_viscosity: 32e-6,
        }
    }
}

/// Ambient conditions for heat rejection.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "camelCase", default))]
pub struct Environment {
    /// °C
    pub ambient_temp: f64,
    /// W/(m²·K)
    pub heat_transfer_coeff: f64,
}

impl Default for Environment {
    fn default() -> Self {
        Self {
            ambient_temp: 30.0,
            heat_transfer_coeff: 15.0,
        }
    }
}

/// Sizing of the synthetic pipe used when a line has no pipe module.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "camelCase", default))]
pub struct PipeDefaults {
    /// m
    pub diameter: f64,
    /// m
    pub length: f64,
    /// m
    pub roughness: f64,
}

impl Default for PipeDefaults {
    fn default() -> Self {
        Self {
            diameter: 0.01,
            length: 1.0,
            roughness: 0.00005,
        }
    }
}

/// Minor-loss allowance (Σζ) added once per line for fittings.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "camelCase", default))]
pub struct LineAllowances {
    pub suction: f64,
    pub pressure: f64,
    pub drain: f64,
}

impl Default for LineAllowances {
    fn default() -> Self {
        Self {
            suction: 0.5,
            pressure: 1.5,
            drain: 1.0,
        }
    }
}

/// Every constant the solver reads, in one record.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "camelCase", default))]
pub struct PhysicalConstants {
    pub fluid: Fluid,
    pub environment: Environment,
    pub pipe_defaults: PipeDefaults,
    pub line_allowances: LineAllowances,
    /// Steady-state oil temperature the tank must hold, °C.
    pub target_temp: f64,
}

impl PhysicalConstants {
    pub const DEFAULT_TARGET_TEMP: f64 = 70.0;

    /// Reject constants that would make every result degenerate.
    pub fn validate(&self) -> HyResult<()> {
        positive("fluid.density", self.fluid.density)?;
        positive("fluid.kinematicViscosity", self.fluid.kinematic_viscosity)?;
        positive(
            "environment.heatTransferCoeff",
            self.environment.heat_transfer_coeff,
        )?;
        positive("pipeDefaults.diameter", self.pipe_defaults.diameter)?;
        positive("pipeDefaults.length", self.pipe_defaults.length)?;
        non_negative("pipeDefaults.roughness", self.pipe_defaults.roughness)?;
        non_negative("lineAllowances.suction", self.line_allowances.suction)?;
        non_negative("lineAllowances.pressure", self.line_allowances.pressure)?;
        non_negative("lineAllowances.drain", self.line_allowances.drain)?;
        if !self.environment.ambient_temp.is_finite() {
            return Err(HyError::InvalidConstant {
                name: "environment.ambientTemp",
                value: self.environment.ambient_temp,
                reason: "must be finite",
            });
        }
        if !(self.target_temp > self.environment.ambient_temp) {
            return Err(HyError::InvalidConstant {
                name: "targetTemp",
                value: self.target_temp,
                reason: "must exceed the ambient temperature",
            });
        }
        Ok(())
    }
}

impl Default for PhysicalConstants {
    fn default() -> Self {
        Self {
            fluid: Fluid::default(),
            environment: Environment::default(),
            pipe_defaults: PipeDefaults::default(),
            line_allowances: LineAllowances::default(),
            target_temp: Self::DEFAULT_TARGET_TEMP,
        }
    }
}

fn positive(name: &'static str, value: f64) -> HyResult<()> {
    if value.is_finite() && value > 0.0 {
        Ok(())
    } else {
        Err(HyError::InvalidConstant {
            name,
            value,
            reason: "must be positive",
        })
    }
}

fn non_negative(name: &'static str, value: f64) -> HyResult<()> {
    if value.is_finite() && value >= 0.0 {
        Ok(())
    } else {
        Err(HyError::InvalidConstant {
            name,
            value,
            reason: "must be non-negative",
        })
    }
}
