// lab-core/src/units.rs

use uom::si::f64::{
    Acceleration as UomAcceleration, Angle as UomAngle, Length as UomLength, Time as UomTime,
};

// Public canonical unit types (SI, f64)
pub type Accel = UomAcceleration;
pub type Angle = UomAngle;
pub type Length = UomLength;
pub type Time = UomTime;

#[inline]
pub fn m(v: f64) -> Length {
    use uom::si::length::meter;
    Length::new::<meter>(v)
}

#[inline]
pub fn cm(v: f64) -> Length {
    use uom::si::length::centimeter;
    Length::new::<centimeter>(v)
}

#[inline]
pub fn s(v: f64) -> Time {
    use uom::si::time::second;
    Time::new::<second>(v)
}

#[inline]
pub fn mps2(v: f64) -> Accel {
    use uom::si::acceleration::meter_per_second_squared;
    Accel::new::<meter_per_second_squared>(v)
}

#[inline]
pub fn deg(v: f64) -> Angle {
    use uom::si::angle::degree;
    Angle::new::<degree>(v)
}

#[inline]
pub fn rad(v: f64) -> Angle {
    use uom::si::angle::radian;
    Angle::new::<radian>(v)
}

/// Plain-`f64` views in the SI base unit, for the numeric kernels.
pub mod si {
    use super::*;

    #[inline]
    pub fn meters(l: Length) -> f64 {
        l.get::<uom::si::length::meter>()
    }

    #[inline]
    pub fn seconds(t: Time) -> f64 {
        t.get::<uom::si::time::second>()
    }

    #[inline]
    pub fn mps2(a: Accel) -> f64 {
        a.get::<uom::si::acceleration::meter_per_second_squared>()
    }

    #[inline]
    pub fn radians(a: Angle) -> f64 {
        a.get::<uom::si::angle::radian>()
    }

    #[inline]
    pub fn degrees(a: Angle) -> f64 {
        a.get::<uom::si::angle::degree>()
    }
}

pub mod constants {
    /// Value of g used by the lecture demonstrations.
    pub const G_LECTURE_MPS2: f64 = 9.8;
}
