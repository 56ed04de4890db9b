//! Numeric labels rendered as vector strokes.

pub mod glyphs;
mod vectorize;

pub use vectorize::VectorizeText;

use crate::error::{GeometryError, Result, ValueError};
use crate::math::{require_positive, Point2};

/// Distance to the nearest integer (absolute or relative) below which a value prints as an integer.
const INTEGER_TOLERANCE: f64 = 1e-9;

/// Magnitude from which `f64` no longer represents every integer (2^53).
const MAX_LABEL_MAGNITUDE: f64 = 9_007_199_254_740_992.0;

/// Formats a numeric label.
///
/// Values within `1e-9` (absolute or relative) of an integer print without a
/// decimal point; everything else prints with one decimal digit, rounded half
/// away from zero. `100.0` gives `"100"`, `228.6` gives `"228.6"` and `99.95`
/// gives `"100.0"`.
///
/// # Errors
///
/// Returns [`ValueError::NonFinite`] for NaN or infinite values and
/// [`ValueError::Unrepresentable`] for magnitudes of 2^53 and beyond.
#[allow(clippy::cast_possible_truncation)]
pub fn format_label(value: f64) -> Result<String> {
    if !value.is_finite() {
        return Err(ValueError::NonFinite(value).into());
    }
    if value.abs() >= MAX_LABEL_MAGNITUDE {
        return Err(ValueError::Unrepresentable(value).into());
    }

    let nearest = value.round();
    let diff = (value - nearest).abs();
    if diff <= INTEGER_TOLERANCE || diff <= INTEGER_TOLERANCE * value.abs() {
        return Ok((nearest as i64).to_string());
    }

    let tenths = round_half_away_from_zero(value * 10.0) as i64;
    let sign = if tenths < 0 { "-" } else { "" };
    let tenths = tenths.unsigned_abs();
    Ok(format!("{sign}{}.{}", tenths / 10, tenths % 10))
}

/// Rounds to the nearest integer, ties away from zero.
///
/// Scaling by ten can leave a decimal tie a hair off `.5` (`99.95 * 10`),
/// so fractions within tolerance of one half count as ties.
fn round_half_away_from_zero(x: f64) -> f64 {
    let fraction = (x - x.trunc()).abs();
    if (fraction - 0.5).abs() <= INTEGER_TOLERANCE {
        x.trunc() + x.signum()
    } else {
        x.round()
    }
}

/// Glyph size and spacing of a label.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct TextStyle {
    height: f64,
    width_factor: f64,
    gap: f64,
}

impl TextStyle {
    /// Default glyph width-to-height ratio.
    pub const DEFAULT_WIDTH_FACTOR: f64 = 0.6;
    /// Default inter-character gap as a fraction of glyph width.
    pub const DEFAULT_GAP: f64 = 0.1;

    /// Creates a text style.
    ///
    /// # Errors
    ///
    /// Returns [`crate::Error::InvalidGeometry`] if `height` or `width_factor`
    /// is not positive, or `gap` is negative.
    pub fn new(height: f64, width_factor: f64, gap: f64) -> Result<Self> {
        let height = require_positive("glyph height", height)?;
        let width_factor = require_positive("glyph width factor", width_factor)?;
        if !gap.is_finite() || gap < 0.0 {
            return Err(GeometryError::Negative {
                parameter: "glyph gap",
                value: gap,
            }
            .into());
        }
        Ok(Self {
            height,
            width_factor,
            gap,
        })
    }

    /// Creates a style with the default width factor and gap.
    ///
    /// # Errors
    ///
    /// Returns [`crate::Error::InvalidGeometry`] if `height` is not positive.
    pub fn with_height(height: f64) -> Result<Self> {
        Self::new(height, Self::DEFAULT_WIDTH_FACTOR, Self::DEFAULT_GAP)
    }

    #[must_use]
    pub fn height(&self) -> f64 {
        self.height
    }

    #[must_use]
    pub fn width_factor(&self) -> f64 {
        self.width_factor
    }

    #[must_use]
    pub fn gap(&self) -> f64 {
        self.gap
    }

    /// Width of a single glyph box.
    #[must_use]
    pub fn char_width(&self) -> f64 {
        self.height * self.width_factor
    }

    /// Horizontal distance between the origins of consecutive glyphs.
    #[must_use]
    pub fn advance(&self) -> f64 {
        self.char_width() * (1.0 + self.gap)
    }
}

/// A 2D line segment in label coordinates.
pub type Stroke = [Point2; 2];

/// One character of a label with its strokes in label coordinates.
#[derive(Debug, Clone, PartialEq)]
pub struct Glyph {
    pub ch: char,
    /// X offset of the glyph box from the label origin.
    pub offset: f64,
    pub strokes: Vec<Stroke>,
}

/// A label laid out left to right, baseline on y = 0.
#[derive(Debug, Clone, PartialEq)]
pub struct TextGlyphRun {
    pub text: String,
    pub style: TextStyle,
    pub glyphs: Vec<Glyph>,
}

impl TextGlyphRun {
    /// Extent of the label from its origin to the right edge of the last glyph box.
    #[allow(clippy::cast_precision_loss)]
    #[must_use]
    pub fn width(&self) -> f64 {
        match self.glyphs.len() {
            0 => 0.0,
            n => (n - 1) as f64 * self.style.advance() + self.style.char_width(),
        }
    }

    /// Total number of strokes across all glyphs.
    #[must_use]
    pub fn stroke_count(&self) -> usize {
        self.glyphs.iter().map(|g| g.strokes.len()).sum()
    }

    /// Iterates all strokes in layout order.
    pub fn strokes(&self) -> impl Iterator<Item = &Stroke> {
        self.glyphs.iter().flat_map(|g| g.strokes.iter())
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;
    use crate::Error;
    use approx::assert_relative_eq;

    #[test]
    fn integers_print_without_decimal_point() {
        assert_eq!(format_label(100.0).unwrap(), "100");
        assert_eq!(format_label(0.0).unwrap(), "0");
        assert_eq!(format_label(-0.0).unwrap(), "0");
        assert_eq!(format_label(-20.0).unwrap(), "-20");
        assert_eq!(format_label(220.000_000_000_1).unwrap(), "220");
    }

    #[test]
    fn fractions_print_one_decimal() {
        assert_eq!(format_label(228.6).unwrap(), "228.6");
        assert_eq!(format_label(28.36).unwrap(), "28.4");
        assert_eq!(format_label(2.02).unwrap(), "2.0");
        assert_eq!(format_label(-2.5).unwrap(), "-2.5");
        assert_eq!(format_label(-0.04).unwrap(), "0.0");
    }

    #[test]
    fn ties_round_away_from_zero() {
        assert_eq!(format_label(99.95).unwrap(), "100.0");
        assert_eq!(format_label(0.25).unwrap(), "0.3");
        assert_eq!(format_label(-0.25).unwrap(), "-0.3");
        assert_eq!(format_label(1.05).unwrap(), "1.1");
    }

    #[test]
    fn non_finite_values_fail() {
        assert!(matches!(
            format_label(f64::NAN).unwrap_err(),
            Error::InvalidValue(ValueError::NonFinite(_))
        ));
        assert!(format_label(f64::INFINITY).is_err());
        assert!(format_label(f64::NEG_INFINITY).is_err());
    }

    #[test]
    fn huge_values_fail() {
        assert_eq!(
            format_label(1e300).unwrap_err(),
            Error::InvalidValue(ValueError::Unrepresentable(1e300))
        );
    }

    #[test]
    fn style_metrics() {
        let style = TextStyle::with_height(1.0).unwrap();
        assert_relative_eq!(style.char_width(), 0.6);
        assert_relative_eq!(style.advance(), 0.66, epsilon = 1e-12);
    }

    #[test]
    fn invalid_style_fails() {
        assert!(TextStyle::new(0.0, 0.6, 0.1).is_err());
        assert!(TextStyle::new(1.0, -0.6, 0.1).is_err());
        assert!(TextStyle::new(1.0, 0.6, -0.1).is_err());
        assert!(TextStyle::new(1.0, 0.6, 0.0).is_ok());
    }
}
