//! Aspect ratio reduction.
//!
//! Reduces a width × height pair to its simplest whole-number ratio using the
//! Euclidean GCD of the truncated inputs, and derives a decimal equivalent
//! rounded to three fractional digits.
//!
//! # Example
//!
//! ```
//! use aspectcalc::reduce;
//!
//! let ratio = reduce(1920.0, 1080.0).unwrap();
//! assert_eq!((ratio.width, ratio.height), (16, 9));
//! assert_eq!(ratio.decimal, 1.778);
//! ```

use core::fmt;

use num_traits::Float;

/// A width × height pair, as entered or as stored in a preset.
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct Dimensions {
    pub width: f32,
    pub height: f32,
}

impl Dimensions {
    /// Create a new dimension pair. No validation.
    pub const fn new(width: f32, height: f32) -> Self {
        Self { width, height }
    }

    /// Whether both values are finite and strictly positive.
    pub fn is_valid(&self) -> bool {
        let ok = |v: f32| v.is_finite() && v > 0.0;
        ok(self.width) && ok(self.height)
    }

    /// Shorthand for [`reduce`]`(self.width, self.height)`.
    pub fn reduce(&self) -> Result<Ratio, RatioError> {
        reduce(self.width, self.height)
    }
}

/// A simplified aspect ratio with its decimal equivalent.
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct Ratio {
    /// Simplified width component.
    pub width: u128,
    /// Simplified height component.
    pub height: u128,
    /// `width / height` of the original inputs, rounded to 3 fractional
    /// digits (half away from zero).
    pub decimal: f64,
}

impl Ratio {
    /// Decimal equivalent formatted with exactly three fractional digits.
    ///
    /// ```
    /// let ratio = aspectcalc::reduce(4.0, 3.0).unwrap();
    /// assert_eq!(format!("{}", ratio.decimal_label()), "1.333");
    /// ```
    pub fn decimal_label(&self) -> DecimalLabel {
        DecimalLabel(self.decimal)
    }
}

impl fmt::Display for Ratio {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}:{}", self.width, self.height)
    }
}

/// Display adapter for [`Ratio::decimal_label`].
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct DecimalLabel(f64);

impl fmt::Display for DecimalLabel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:.3}", self.0)
    }
}

/// Ratio reduction error.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum RatioError {
    /// Width or height is zero, negative, NaN, or infinite.
    InvalidDimension,
    /// Width or height is positive but below 1. It truncates to zero, so no
    /// whole-number ratio exists.
    SubUnitDimension,
}

impl fmt::Display for RatioError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::InvalidDimension => f.write_str("Values must be greater than 0"),
            Self::SubUnitDimension => f.write_str("Values must be at least 1"),
        }
    }
}

impl core::error::Error for RatioError {}

/// Reduce `width` × `height` to its simplest ratio.
///
/// The GCD is taken over the truncated inputs, then the original real values
/// are divided by it and truncated. Fractional inputs therefore reduce
/// approximately: `2.39 × 1` becomes `2:1`, while the decimal keeps `2.39`.
///
/// Every finite `f32` truncates into `u128` exactly, so the result is fully
/// reduced across the whole input range.
pub fn reduce(width: f32, height: f32) -> Result<Ratio, RatioError> {
    validate(width)?;
    validate(height)?;

    let w = width as f64;
    let h = height as f64;
    let tw = Float::trunc(w) as u128;
    let th = Float::trunc(h) as u128;
    let g = gcd(tw, th);

    // trunc(x / g) == trunc(x) / g for integer g >= 1.
    Ok(Ratio {
        width: tw / g,
        height: th / g,
        decimal: round3(w / h),
    })
}

/// Greatest common divisor by the Euclidean algorithm. `gcd(a, 0) == a`.
pub fn gcd(mut a: u128, mut b: u128) -> u128 {
    while b != 0 {
        (a, b) = (b, a % b);
    }
    a
}

fn validate(v: f32) -> Result<(), RatioError> {
    if !v.is_finite() || v <= 0.0 {
        Err(RatioError::InvalidDimension)
    } else if v < 1.0 {
        Err(RatioError::SubUnitDimension)
    } else {
        Ok(())
    }
}

/// Round to 3 fractional digits, half away from zero.
fn round3(v: f64) -> f64 {
    Float::round(v * 1000.0) / 1000.0
}

#[cfg(test)]
mod tests {
    use super::*;

    // ── gcd ─────────────────────────────────────────────────────────────

    #[test]
    fn gcd_basic() {
        assert_eq!(gcd(1920, 1080), 120);
        assert_eq!(gcd(16, 9), 1);
        assert_eq!(gcd(9, 16), 1);
    }

    #[test]
    fn gcd_with_zero() {
        assert_eq!(gcd(7, 0), 7);
        assert_eq!(gcd(0, 7), 7);
    }

    #[test]
    fn gcd_equal() {
        assert_eq!(gcd(500, 500), 500);
    }

    // ── reduce ──────────────────────────────────────────────────────────

    #[test]
    fn reduce_already_simple() {
        let r = reduce(16.0, 9.0).unwrap();
        assert_eq!((r.width, r.height), (16, 9));
        assert_eq!(r.decimal, 1.778);
    }

    #[test]
    fn reduce_full_hd() {
        let r = reduce(1920.0, 1080.0).unwrap();
        assert_eq!((r.width, r.height), (16, 9));
        assert_eq!(r.decimal, 1.778);
    }

    #[test]
    fn reduce_portrait() {
        let r = reduce(1080.0, 1920.0).unwrap();
        assert_eq!((r.width, r.height), (9, 16));
        assert_eq!(r.decimal, 0.563);
    }

    #[test]
    fn reduce_square() {
        let r = reduce(1000.0, 1000.0).unwrap();
        assert_eq!((r.width, r.height), (1, 1));
        assert_eq!(r.decimal, 1.0);
    }

    #[test]
    fn reduce_fractional_input_truncates() {
        // gcd(2, 1) = 1 → 2.39 / 1 truncates to 2.
        let r = reduce(2.39, 1.0).unwrap();
        assert_eq!((r.width, r.height), (2, 1));
        assert_eq!(r.decimal, 2.39);
    }

    #[test]
    fn reduce_coprime_large() {
        let r = reduce(1366.0, 768.0).unwrap();
        assert_eq!((r.width, r.height), (683, 384));
        assert_eq!(r.decimal, 1.779);
    }

    #[test]
    fn reduce_beyond_u64_equal() {
        let r = reduce(1e20, 1e20).unwrap();
        assert_eq!((r.width, r.height), (1, 1));
        assert_eq!(r.decimal, 1.0);
    }

    #[test]
    fn reduce_beyond_u64_exact_multiple() {
        // 2^64 and 3 · 2^64 are exact in f32.
        let r = reduce(3.0 * 18_446_744_073_709_551_616.0, 18_446_744_073_709_551_616.0).unwrap();
        assert_eq!((r.width, r.height), (3, 1));
        assert_eq!(r.decimal, 3.0);
    }

    #[test]
    fn reduce_beyond_u64_is_coprime() {
        // 3e19 is not exactly three times 1e19 once rounded to f32.
        let r = reduce(3e19, 1e19).unwrap();
        assert_eq!(gcd(r.width, r.height), 1);
        assert_eq!((r.width, r.height), (27_284_842, 9_094_947));
        assert_eq!(r.decimal, 3.0);
    }

    #[test]
    fn reduce_f32_max() {
        let r = reduce(f32::MAX, f32::MAX).unwrap();
        assert_eq!((r.width, r.height), (1, 1));
    }

    #[test]
    fn reduce_rejects_zero() {
        assert_eq!(reduce(0.0, 9.0), Err(RatioError::InvalidDimension));
        assert_eq!(reduce(16.0, 0.0), Err(RatioError::InvalidDimension));
    }

    #[test]
    fn reduce_rejects_negative() {
        assert_eq!(reduce(-16.0, 9.0), Err(RatioError::InvalidDimension));
        assert_eq!(reduce(16.0, -9.0), Err(RatioError::InvalidDimension));
    }

    #[test]
    fn reduce_rejects_non_finite() {
        assert_eq!(reduce(f32::NAN, 9.0), Err(RatioError::InvalidDimension));
        assert_eq!(reduce(16.0, f32::INFINITY), Err(RatioError::InvalidDimension));
    }

    #[test]
    fn reduce_rejects_sub_unit() {
        assert_eq!(reduce(0.5, 9.0), Err(RatioError::SubUnitDimension));
        assert_eq!(reduce(16.0, 0.999), Err(RatioError::SubUnitDimension));
    }

    // ── formatting ──────────────────────────────────────────────────────

    #[test]
    fn display_colon_form() {
        let r = reduce(1920.0, 1080.0).unwrap();
        assert_eq!(format!("{r}"), "16:9");
    }

    #[test]
    fn decimal_label_pads_to_three_digits() {
        let r = reduce(2.0, 1.0).unwrap();
        assert_eq!(format!("{}", r.decimal_label()), "2.000");
    }

    #[test]
    fn round3_half_away_from_zero() {
        // 0.0625 × 1000 is exactly 62.5.
        assert_eq!(round3(0.0625), 0.063);
        assert_eq!(round3(2.0 / 3.0), 0.667);
        assert_eq!(round3(0.1234), 0.123);
    }
}
