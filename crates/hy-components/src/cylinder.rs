//! Hydraulic cylinder (extension stroke).

use hy_core::units::{Force, Length, circle_area, m, newtons};
use hy_graph::{ModuleInstance, ModuleKind};

use crate::common::{efficiency_or_unity, keys};
use crate::traits::CatalogModel;

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Cylinder {
    /// Piston diameter D
    pub piston_diameter: Length,
    /// Rod diameter d
    pub rod_diameter: Length,
    /// Commanded force
    pub force: Force,
    pub mech_eff: f64,
    pub volumetric_eff: f64,
}

/// Piston-side pressure [Pa] needed to push `force` against the drain back-pressure.
///
/// `(F/η_m + Δp_drain·A_rod) / A_piston`, with `A_rod` the annulus on the rod
/// side. Zero when there is no demand or the geometry is invalid.
pub fn required_piston_pressure(
    force: f64,
    piston_diameter: f64,
    rod_diameter: f64,
    mech_eff: f64,
    drain_loss_pa: f64,
) -> f64 {
    if force <= 0.0 || piston_diameter <= 0.0 || mech_eff <= 0.0 {
        return 0.0;
    }
    let piston_area = circle_area(piston_diameter);
    let rod_side_area = annulus_area(piston_diameter, rod_diameter);
    (force / mech_eff + drain_loss_pa * rod_side_area) / piston_area
}

fn annulus_area(piston_diameter: f64, rod_diameter: f64) -> f64 {
    (circle_area(piston_diameter) - circle_area(rod_diameter)).max(0.0)
}

impl Cylinder {
    pub fn piston_area(&self) -> f64 {
        circle_area(self.piston_diameter.value)
    }

    pub fn rod_side_area(&self) -> f64 {
        annulus_area(self.piston_diameter.value, self.rod_diameter.value)
    }

    /// Whether the cylinder asks the pump for any pressure at all.
    pub fn has_demand(&self) -> bool {
        self.force.value > 0.0 && self.piston_diameter.value > 0.0 && self.mech_eff > 0.0
    }

    pub fn required_pressure_pa(&self, drain_loss_pa: f64) -> f64 {
        required_piston_pressure(
            self.force.value,
            self.piston_diameter.value,
            self.rod_diameter.value,
            self.mech_eff,
            drain_loss_pa,
        )
    }

    /// Flow [m³/s] expelled from the rod side while `pump_flow` fills the piston side.
    pub fn drain_flow(&self, pump_flow: f64) -> f64 {
        let piston = self.piston_area();
        if piston <= 0.0 {
            return pump_flow;
        }
        pump_flow * self.rod_side_area() / piston
    }
}

impl CatalogModel for Cylinder {
    const KIND: ModuleKind = ModuleKind::Cylinder;

    fn from_properties(module: &ModuleInstance) -> Self {
        Self {
            piston_diameter: m(module.number(keys::PISTON_DIAMETER).unwrap_or(0.0)),
            rod_diameter: m(module.number(keys::ROD_DIAMETER).unwrap_or(0.0)),
            force: newtons(module.number(keys::FORCE).unwrap_or(0.0)),
            mech_eff: efficiency_or_unity(module.number(keys::MECH_EFF)),
            volumetric_eff: efficiency_or_unity(module.number(keys::VOLUMETRIC_EFF)),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;
    use std::f64::consts::PI;

    fn c63() -> Cylinder {
        let module = ModuleInstance::new(4, "cylinder_znu_c63", "cylinder")
            .with_property(keys::PISTON_DIAMETER, 0.063)
            .with_property(keys::ROD_DIAMETER, 0.032)
            .with_property(keys::FORCE, 20_000.0)
            .with_property(keys::MECH_EFF, 0.95);
        Cylinder::read(&module).unwrap()
    }

    #[test]
    fn force_balance() {
        let c = c63();
        let a_p = PI * 0.0315 * 0.0315;
        let a_r = a_p - PI * 0.016 * 0.016;
        let expected = (20_000.0 / 0.95 + 0.3e6 * a_r) / a_p;
        assert!((c.required_pressure_pa(0.3e6) - expected).abs() < 1e-3);
        assert_eq!(c.volumetric_eff, 1.0);
    }

    #[test]
    fn geometry_is_read_in_si_units() {
        let c = c63();
        assert_eq!(c.piston_diameter, m(0.063));
        assert_eq!(c.rod_diameter, m(0.032));
        assert_eq!(c.force, newtons(20_000.0));
        assert!((c.piston_area() - PI * 0.0315 * 0.0315).abs() < 1e-15);
    }

    #[test]
    fn drain_flow_follows_area_ratio() {
        let c = c63();
        let q = 1e-3;
        let expected = q * (0.063f64.powi(2) - 0.032f64.powi(2)) / 0.063f64.powi(2);
        assert!((c.drain_flow(q) - expected).abs() < 1e-12);

        let no_geometry = Cylinder {
            piston_diameter: m(0.0),
            ..c
        };
        assert_eq!(no_geometry.drain_flow(q), q);
    }

    #[test]
    fn degenerate_demand_is_zero() {
        assert_eq!(required_piston_pressure(1000.0, 0.0, 0.02, 0.9, 1e5), 0.0);
        assert_eq!(required_piston_pressure(1000.0, 0.05, 0.02, 0.0, 1e5), 0.0);
        assert!(!Cylinder { force: newtons(0.0), ..c63() }.has_demand());
    }

    proptest! {
        #[test]
        fn zero_force_needs_no_pressure(
            d_p in -0.2f64..0.2,
            d_r in -0.2f64..0.2,
            eff in -1.0f64..1.0,
            drain in 0.0f64..1e7,
        ) {
            prop_assert_eq!(required_piston_pressure(0.0, d_p, d_r, eff, drain), 0.0);
        }
    }
}
