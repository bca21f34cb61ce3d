//! Fixed 15-digit rounding applied to every value an integrator emits.
//!
//! Rounding goes through the exact decimal expansion of the binary value, so
//! `round15` agrees with rounding the stored value to 15 fractional digits,
//! with exact ties going to the even digit.

use crate::Float;

/// Number of fractional decimal digits kept in every output value.
pub const DIGITS: usize = 15;

/// Round `v` to [`DIGITS`] fractional decimal digits.
///
/// Non-finite values are returned unchanged.
pub fn round15(v: Float) -> Float {
    if !v.is_finite() {
        return v;
    }
    format!("{:.*}", DIGITS, v).parse().unwrap_or(v)
}
