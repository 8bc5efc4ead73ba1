//! Scalar helpers shared by the vector kernel

use crate::core::types::Number;
use rand::Rng;
use std::f64::consts::PI;

/// Default tolerance for [`within_epsilon`]
pub const SCALAR_EPSILON: Number = 1e-8;

/// `2π`, handy for angle maths
pub const TWO_PI: Number = PI * 2.;

/// Returns `true` when `|a - b| <= epsilon`
#[inline]
pub fn within_epsilon(a: Number, b: Number, epsilon: Number) -> bool { (a - b).abs() <= epsilon }

/// [`within_epsilon`] with the [`SCALAR_EPSILON`] tolerance
#[inline]
pub fn within_default_epsilon(a: Number, b: Number) -> bool { within_epsilon(a, b, SCALAR_EPSILON) }

/// Wraps an arbitrary angle (in radians) into the equivalent angle in `(-π, π]`
pub fn normalize_radians(rad: Number) -> Number {
    let mut rad = rad % TWO_PI;
    rad = (rad + TWO_PI) % TWO_PI;
    if rad > PI {
        rad -= TWO_PI;
    }
    rad
}

/// Random number in `min..max`.
///
/// Returns `min` exactly when both bounds are equal. Reversed bounds are allowed,
/// the value is then drawn from `max..min`.
#[allow(clippy::float_cmp)]
pub fn random_range<R: Rng + ?Sized>(rng: &mut R, min: Number, max: Number) -> Number {
    if min == max {
        return min;
    }
    rng.gen::<Number>() * (max - min) + min
}
