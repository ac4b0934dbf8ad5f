//! Signed-epsilon comparison predicates for capacity arithmetic.
//!
//! # Why this exists
//!
//! Residual capacities are produced by repeated subtraction, so a residual
//! that is "really" zero often lands a few ULPs on either side of it.  A raw
//! `x < 0.0` test on such a value reports spurious over-allocation.  Every
//! sign test on a residual therefore goes through [`is_neg`] / [`is_pos`],
//! which treat the band `[-EPS·(1+EPS), EPS·(1+EPS)]` as zero.
//!
//! `EPS` is expressed in resource-quantity units (kg), so 1e-6 is a milligram
//! — far below anything a facility trades, far above accumulated rounding.

/// Tolerance on resource quantities, in quantity units.
pub const EPS: f64 = 1e-6;

/// The half-width of the "treated as zero" band.
#[inline]
fn threshold() -> f64 {
    EPS * (1.0 + EPS)
}

/// `true` if `x` is negative beyond tolerance.
#[inline]
pub fn is_neg(x: f64) -> bool {
    x < -threshold()
}

/// `true` if `x` is positive beyond tolerance.
#[inline]
pub fn is_pos(x: f64) -> bool {
    x > threshold()
}

/// `true` if `x` is within tolerance of zero.
#[inline]
pub fn is_zero(x: f64) -> bool {
    !is_neg(x) && !is_pos(x)
}
