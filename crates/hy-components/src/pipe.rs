//! Pipe and hose segments.

use std::f64::consts::PI;

use hy_core::PipeDefaults;
use hy_core::units::{Length, m};
use hy_graph::{ModuleInstance, ModuleKind};

use crate::common::keys;
use crate::traits::CatalogModel;

/// One pipe segment as declared on the scheme.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Pipe {
    /// Inner diameter
    pub diameter: Length,
    pub length: Length,
    /// Absolute roughness
    pub roughness: Length,
    /// Sum of local resistance coefficients of the segment's own fittings
    pub local_resistance: f64,
}

impl Pipe {
    /// Read a pipe, filling unspecified sizing from `defaults`.
    pub fn with_defaults(module: &ModuleInstance, defaults: &PipeDefaults) -> Self {
        Self {
            diameter: m(module.number(keys::DIAMETER).unwrap_or(defaults.diameter)),
            length: m(module.number(keys::LENGTH).unwrap_or(defaults.length)),
            roughness: m(module.number(keys::ROUGHNESS).unwrap_or(defaults.roughness)),
            local_resistance: module.number(keys::LOCAL_RESISTANCE).unwrap_or(0.0),
        }
    }

    /// The stand-in segment for a line with no pipe module.
    pub fn synthetic(defaults: &PipeDefaults) -> Self {
        Self {
            diameter: m(defaults.diameter),
            length: m(defaults.length),
            roughness: m(defaults.roughness),
            local_resistance: 0.0,
        }
    }

    /// Outer lateral surface π·d·L [m²] exchanging heat with the air.
    pub fn lateral_area(&self) -> f64 {
        let (d, l) = (self.diameter.value, self.length.value);
        if d <= 0.0 || l <= 0.0 {
            return 0.0;
        }
        PI * d * l
    }
}

impl CatalogModel for Pipe {
    const KIND: ModuleKind = ModuleKind::Pipe;

    fn from_properties(module: &ModuleInstance) -> Self {
        Self::with_defaults(module, &PipeDefaults::default())
    }
}
