// fl-core/src/units.rs

use uom::si::f64::{
    Area as UomArea, DynamicViscosity as UomDynamicViscosity, Length as UomLength,
    MassDensity as UomMassDensity, VolumeRate as UomVolumeRate,
};

// Public canonical unit types (SI, f64)
pub type Area = UomArea;
pub type DynVisc = UomDynamicViscosity;
pub type Length = UomLength;
pub type Density = UomMassDensity;
pub type VolumeRate = UomVolumeRate;

pub const SECONDS_PER_HOUR: f64 = 3600.0;

/// Volumetric flow given in m³/h.
#[inline]
pub fn m3ph(v: f64) -> VolumeRate {
    use uom::si::volume_rate::cubic_meter_per_second;
    VolumeRate::new::<cubic_meter_per_second>(v / SECONDS_PER_HOUR)
}

#[inline]
pub fn mm(v: f64) -> Length {
    use uom::si::length::millimeter;
    Length::new::<millimeter>(v)
}

#[inline]
pub fn m(v: f64) -> Length {
    use uom::si::length::meter;
    Length::new::<meter>(v)
}

#[inline]
pub fn kg_per_m3(v: f64) -> Density {
    use uom::si::mass_density::kilogram_per_cubic_meter;
    Density::new::<kilogram_per_cubic_meter>(v)
}

#[inline]
pub fn pa_s(v: f64) -> DynVisc {
    use uom::si::dynamic_viscosity::pascal_second;
    DynVisc::new::<pascal_second>(v)
}

/// Cross-sectional area of a full circular bore.
#[inline]
pub fn circle_area(diameter: Length) -> Area {
    use uom::si::area::square_meter;
    let r = diameter.value / 2.0;
    Area::new::<square_meter>(std::f64::consts::PI * r * r)
}

pub mod constants {
    /// Standard gravity [m/s²]
    pub const G0_MPS2: f64 = 9.806_65;
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn constructors_smoke() {
        let _q = m3ph(100.0);
        let _d = mm(150.0);
        let _l = m(50.0);
        let _rho = kg_per_m3(998.0);
        let _mu = pa_s(0.001);
    }

    #[test]
    fn input_units_normalize_to_si() {
        assert!((m3ph(3600.0).value - 1.0).abs() < 1e-12);
        assert!((mm(150.0).value - 0.15).abs() < 1e-12);
        assert!((kg_per_m3(998.0).value - 998.0).abs() < 1e-12);
        assert!((pa_s(0.001).value - 0.001).abs() < 1e-15);
    }

    #[test]
    fn circle_area_of_unit_diameter() {
        let a = circle_area(m(1.0));
        assert!((a.value - std::f64::consts::PI / 4.0).abs() < 1e-12);
    }
}
