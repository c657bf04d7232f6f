// hy-core/src/units.rs

use uom::si::f64::{
    Area as UomArea, Force as UomForce, Length as UomLength, Power as UomPower,
    Pressure as UomPressure, VolumeRate as UomVolumeRate,
};

// Public canonical unit types (SI, f64)
pub type Area = UomArea;
pub type Force = UomForce;
pub type Length = UomLength;
pub type Power = UomPower;
pub type Pressure = UomPressure;
pub type VolumeRate = UomVolumeRate;

#[inline]
pub fn pa(v: f64) -> Pressure {
    use uom::si::pressure::pascal;
    Pressure::new::<pascal>(v)
}

#[inline]
pub fn mpa(v: f64) -> Pressure {
    use uom::si::pressure::megapascal;
    Pressure::new::<megapascal>(v)
}

#[inline]
pub fn m(v: f64) -> Length {
    use uom::si::length::meter;
    Length::new::<meter>(v)
}

#[inline]
pub fn newtons(v: f64) -> Force {
    use uom::si::force::newton;
    Force::new::<newton>(v)
}

#[inline]
pub fn lpm(v: f64) -> VolumeRate {
    use uom::si::volume_rate::liter_per_minute;
    VolumeRate::new::<liter_per_minute>(v)
}

#[inline]
pub fn m3ps(v: f64) -> VolumeRate {
    use uom::si::volume_rate::cubic_meter_per_second;
    VolumeRate::new::<cubic_meter_per_second>(v)
}

#[inline]
pub fn watts(v: f64) -> Power {
    use uom::si::power::watt;
    Power::new::<watt>(v)
}

/// Catalog flow [L/min] to SI [m³/s].
#[inline]
pub fn lpm_to_m3ps(q_lpm: f64) -> f64 {
    use uom::si::volume_rate::cubic_meter_per_second;
    lpm(q_lpm).get::<cubic_meter_per_second>()
}

/// SI flow [m³/s] to catalog units [L/min].
#[inline]
pub fn m3ps_to_lpm(q_m3ps: f64) -> f64 {
    use uom::si::volume_rate::liter_per_minute;
    m3ps(q_m3ps).get::<liter_per_minute>()
}

/// Catalog pressure [MPa] to SI [Pa].
#[inline]
pub fn mpa_to_pa(p_mpa: f64) -> f64 {
    use uom::si::pressure::pascal;
    mpa(p_mpa).get::<pascal>()
}

/// SI pressure [Pa] to report units [MPa].
#[inline]
pub fn pa_to_mpa(p_pa: f64) -> f64 {
    use uom::si::pressure::megapascal;
    pa(p_pa).get::<megapascal>()
}

/// SI power [W] to report units [kW].
#[inline]
pub fn w_to_kw(p_w: f64) -> f64 {
    use uom::si::power::kilowatt;
    watts(p_w).get::<kilowatt>()
}

/// Area of a circle of diameter `d` [m], in m². Zero for non-positive `d`.
#[inline]
pub fn circle_area(d: f64) -> f64 {
    use uom::si::area::square_meter;
    if d <= 0.0 {
        return 0.0;
    }
    let r = m(d / 2.0);
    let a: Area = r * r * std::f64::consts::PI;
    a.get::<square_meter>()
}
