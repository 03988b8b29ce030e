// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Scalar float functions routed to `std` or `libm`.

#[cfg(not(any(feature = "std", feature = "libm")))]
compile_error!("understory_slider requires either the `std` or the `libm` feature");

#[cfg(feature = "std")]
mod imp {
    #[inline]
    pub(crate) fn round(x: f64) -> f64 {
        x.round()
    }

    #[inline]
    pub(crate) fn floor(x: f64) -> f64 {
        x.floor()
    }

    #[inline]
    pub(crate) fn abs(x: f64) -> f64 {
        x.abs()
    }

    #[inline]
    pub(crate) fn atan2(y: f64, x: f64) -> f64 {
        y.atan2(x)
    }

    #[inline]
    pub(crate) fn sin_cos(x: f64) -> (f64, f64) {
        x.sin_cos()
    }
}

#[cfg(all(not(feature = "std"), feature = "libm"))]
mod imp {
    #[inline]
    pub(crate) fn round(x: f64) -> f64 {
        libm::round(x)
    }

    #[inline]
    pub(crate) fn floor(x: f64) -> f64 {
        libm::floor(x)
    }

    #[inline]
    pub(crate) fn abs(x: f64) -> f64 {
        libm::fabs(x)
    }

    #[inline]
    pub(crate) fn atan2(y: f64, x: f64) -> f64 {
        libm::atan2(y, x)
    }

    #[inline]
    pub(crate) fn sin_cos(x: f64) -> (f64, f64) {
        libm::sincos(x)
    }
}

pub(crate) use imp::{abs, atan2, floor, round, sin_cos};

/// Clamp into the unit interval. NaN maps to `0`.
#[inline]
pub(crate) fn clamp_unit(x: f64) -> f64 {
    if x.is_nan() { 0.0 } else { x.clamp(0.0, 1.0) }
}

/// Wrap into [0,1]: values already inside are kept, others keep their fractional part.
#[inline]
pub(crate) fn wrap_unit(x: f64) -> f64 {
    if (0.0..=1.0).contains(&x) {
        x
    } else {
        x - floor(x)
    }
}

/// Sign of `x` as `-1`, `0` or `1`.
#[inline]
pub(crate) fn signum0(x: f64) -> f64 {
    if x > 0.0 {
        1.0
    } else if x < 0.0 {
        -1.0
    } else {
        0.0
    }
}
