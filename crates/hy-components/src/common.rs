//! Common utilities for component calculations.

/// Property names as written by the property form.
pub mod keys {
    pub const NOMINAL_RPM: &str = "nominalRpm";
    pub const SELECTED_RPM: &str = "selectedRpm";
    pub const MAX_RPM: &str = "maxRpm";

    pub const WORKING_VOLUME: &str = "workingVolume";
    pub const DRIVE_RATIO: &str = "driveRatio";
    pub const VOLUMETRIC_EFF: &str = "volumetricEff";
    pub const MECH_EFF: &str = "mechEff";

    pub const PISTON_DIAMETER: &str = "pistonDiameter";
    pub const ROD_DIAMETER: &str = "rodDiameter";
    pub const FORCE: &str = "force";

    pub const DIAMETER: &str = "diameter";
    pub const LENGTH: &str = "length";
    pub const ROUGHNESS: &str = "roughness";
    pub const LOCAL_RESISTANCE: &str = "localResistance";

    pub const NOMINAL_PRESSURE_DROP: &str = "nominalPressureDrop";
    pub const NOMINAL_FLOW: &str = "nominalFlow";
    pub const LEAKAGE: &str = "leakage";

    pub const WIDTH: &str = "width";
    pub const HEIGHT: &str = "height";
    pub const SIDE_AREA: &str = "sideArea";
}

/// Efficiency as declared, or 1 when absent.
///
/// Negative values are kept so the guarded divisions downstream flag them.
pub fn efficiency_or_unity(declared: Option<f64>) -> f64 {
    declared.unwrap_or(1.0)
}

/// A declared quantity that must be positive to be meaningful.
pub fn positive(declared: Option<f64>) -> Option<f64> {
    declared.filter(|v| *v > 0.0)
}
