//! Incompressible pipe-flow primitives.
//!
//! All functions are total: out-of-domain inputs (zero diameter, zero
//! viscosity, zero Reynolds number) return 0 rather than an error, so a badly
//! sized line produces a defined but visibly degenerate number.

use std::f64::consts::PI;

/// Upper Reynolds bound of the laminar correlation.
pub const RE_LAMINAR: f64 = 2300.0;

/// Upper Reynolds bound of the Blasius correlation.
pub const RE_BLASIUS: f64 = 100_000.0;

/// Friction-factor correlation selected by Reynolds number.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FlowRegime {
    /// No flow (Re ≤ 0).
    Stagnant,
    /// `75/Re`
    Laminar,
    /// `0.3164·Re^-0.25`
    Blasius,
    /// `0.11·(k/d + 68/Re)^0.25`
    Altshul,
}

impl FlowRegime {
    pub fn of(re: f64) -> Self {
        if !(re > 0.0) {
            Self::Stagnant
        } else if re < RE_LAMINAR {
            Self::Laminar
        } else if re < RE_BLASIUS {
            Self::Blasius
        } else {
            Self::Altshul
        }
    }

    pub fn as_str(self) -> &'static str {
        match self {
            Self::Stagnant => "stagnant",
            Self::Laminar => "laminar",
            Self::Blasius => "blasius",
            Self::Altshul => "altshul",
        }
    }
}

/// Mean velocity [m/s] of `flow` [m³/s] through a bore of `diameter` [m].
pub fn velocity(flow: f64, diameter: f64) -> f64 {
    if diameter <= 0.0 {
        return 0.0;
    }
    flow / (PI * (diameter / 2.0).powi(2))
}

/// Reynolds number from velocity [m/s], bore [m] and kinematic viscosity [m²/s].
pub fn reynolds(velocity: f64, diameter: f64, nu: f64) -> f64 {
    if nu <= 0.0 || diameter <= 0.0 {
        return 0.0;
    }
    velocity * diameter / nu
}

/// Darcy friction factor.
///
/// The laminar branch uses 75/Re rather than 64/Re; the coefficient is a
/// calibration for hydraulic hose and must not be "corrected".
pub fn friction_factor(re: f64, diameter: f64, roughness: f64) -> f64 {
    match FlowRegime::of(re) {
        FlowRegime::Stagnant => 0.0,
        FlowRegime::Laminar => 75.0 / re,
        FlowRegime::Blasius => 0.3164 * re.powf(-0.25),
        FlowRegime::Altshul => {
            if diameter <= 0.0 {
                return 0.0;
            }
            0.11 * (roughness / diameter + 68.0 / re).powf(0.25)
        }
    }
}

/// Darcy-Weisbach friction loss [Pa]: `λ·(L/d)·(ρv²/2)`.
pub fn friction_loss(lambda: f64, length: f64, diameter: f64, rho: f64, velocity: f64) -> f64 {
    if diameter <= 0.0 {
        return 0.0;
    }
    lambda * (length / diameter) * dynamic_pressure(rho, velocity)
}

/// Local (minor) loss [Pa] from a resistance-coefficient sum: `Σζ·(ρv²/2)`.
pub fn local_loss(zeta: f64, rho: f64, velocity: f64) -> f64 {
    zeta * dynamic_pressure(rho, velocity)
}

#[inline]
fn dynamic_pressure(rho: f64, velocity: f64) -> f64 {
    rho * velocity * velocity / 2.0
}
