//! Text field parsing for width and height input.

use core::fmt;

use crate::ratio::Dimensions;

/// Why raw width/height text was rejected.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum InputError {
    /// A field is empty or whitespace.
    Missing,
    /// A field is not a finite decimal number.
    NotANumber,
    /// A field is zero or negative.
    NotPositive,
}

impl fmt::Display for InputError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Self::Missing => "Please enter both width and height",
            Self::NotANumber => "Please enter valid numbers",
            Self::NotPositive => "Values must be greater than 0",
        })
    }
}

impl core::error::Error for InputError {}

/// Parse width and height text into a positive dimension pair.
///
/// Both fields are checked for presence before either is parsed, so an
/// empty height reports [`InputError::Missing`] even when the width is
/// garbage.
///
/// ```
/// use aspectcalc::{Dimensions, InputError, parse_dimensions};
///
/// assert_eq!(parse_dimensions(" 1920 ", "1080"), Ok(Dimensions::new(1920.0, 1080.0)));
/// assert_eq!(parse_dimensions("16", ""), Err(InputError::Missing));
/// assert_eq!(parse_dimensions("16", "nine"), Err(InputError::NotANumber));
/// assert_eq!(parse_dimensions("16", "-9"), Err(InputError::NotPositive));
/// ```
pub fn parse_dimensions(width: &str, height: &str) -> Result<Dimensions, InputError> {
    let (width, height) = (width.trim(), height.trim());
    if width.is_empty() || height.is_empty() {
        return Err(InputError::Missing);
    }
    let w = parse_number(width)?;
    let h = parse_number(height)?;
    if w <= 0.0 || h <= 0.0 {
        return Err(InputError::NotPositive);
    }
    Ok(Dimensions::new(w, h))
}

/// Parse one field. Rejects `inf` and `NaN`, which `f32::from_str` accepts.
fn parse_number(s: &str) -> Result<f32, InputError> {
    match s.parse::<f32>() {
        Ok(v) if v.is_finite() => Ok(v),
        _ => Err(InputError::NotANumber),
    }
}
