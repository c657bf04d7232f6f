//! Heat-rejecting surfaces: the tank and equipment side areas.

use hy_core::PipeDefaults;
use hy_graph::{ModuleInstance, ModuleKind};

use crate::common::keys;
use crate::pipe::Pipe;
use crate::traits::CatalogModel;

/// Share of the tank's outer surface effectively exposed to ambient air.
pub const TANK_EXPOSED_FRACTION: f64 = 0.9;

/// Rectangular oil tank.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct Tank {
    /// [m]
    pub length: f64,
    /// [m]
    pub width: f64,
    /// [m]
    pub height: f64,
}

impl Tank {
    /// Outer surface `2(LW + LH + WH)` [m²].
    pub fn outer_surface(&self) -> f64 {
        let (l, w, h) = (self.length, self.width, self.height);
        2.0 * (l * w + l * h + w * h)
    }

    /// Surface that actually rejects heat [m²].
    pub fn dissipation_area(&self) -> f64 {
        TANK_EXPOSED_FRACTION * self.outer_surface()
    }
}

impl CatalogModel for Tank {
    const KIND: ModuleKind = ModuleKind::TankOutput;

    fn from_properties(module: &ModuleInstance) -> Self {
        let dim = |key: &str| module.number(key).filter(|v| *v > 0.0).unwrap_or(0.0);
        Self {
            length: dim(keys::LENGTH),
            width: dim(keys::WIDTH),
            height: dim(keys::HEIGHT),
        }
    }
}

/// Heat-exchange side area [m²] of a piece of equipment.
///
/// Declared `sideArea` wins; pipes without one use their lateral surface. The
/// tank and the engine never count here.
pub fn side_area(module: &ModuleInstance, defaults: &PipeDefaults) -> f64 {
    match module.kind() {
        ModuleKind::TankOutput | ModuleKind::EngineInput => 0.0,
        kind => match module.number(keys::SIDE_AREA) {
            Some(area) => area.max(0.0),
            None if kind == ModuleKind::Pipe => Pipe::with_defaults(module, defaults).lateral_area(),
            None => 0.0,
        },
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::f64::consts::PI;

    #[test]
    fn tank_surfaces() {
        let m = ModuleInstance::new(9, "tank", "tank_output")
            .with_property(keys::LENGTH, 0.8)
            .with_property(keys::WIDTH, 0.5)
            .with_property(keys::HEIGHT, 0.6);
        let t = Tank::read(&m).unwrap();
        let outer = 2.0 * (0.8 * 0.5 + 0.8 * 0.6 + 0.5 * 0.6);
        assert!((t.outer_surface() - outer).abs() < 1e-12);
        assert!((t.dissipation_area() - 0.9 * outer).abs() < 1e-12);
    }

    #[test]
    fn tank_without_dimensions_has_no_area() {
        let m = ModuleInstance::new(9, "tank", "tank_output");
        assert_eq!(Tank::read(&m).unwrap().dissipation_area(), 0.0);
    }

    #[test]
    fn side_area_rules() {
        let d = PipeDefaults::default();
        let filter = ModuleInstance::new(1, "filter_frc12", "filter").with_property(keys::SIDE_AREA, 0.12);
        assert_eq!(side_area(&filter, &d), 0.12);

        let bare = ModuleInstance::new(2, "distributor_rge100", "distributor");
        assert_eq!(side_area(&bare, &d), 0.0);

        let pipe = ModuleInstance::new(3, "pipe", "pipe")
            .with_property(keys::DIAMETER, 0.02)
            .with_property(keys::LENGTH, 3.0);
        assert!((side_area(&pipe, &d) - PI * 0.02 * 3.0).abs() < 1e-12);

        let tank = ModuleInstance::new(4, "tank", "tank_output").with_property(keys::SIDE_AREA, 5.0);
        assert_eq!(side_area(&tank, &d), 0.0);
    }
}
