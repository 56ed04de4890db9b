//! Tunable marker geometry, colors, label sizes and detection thresholds.
//!
//! Every field has a documented default; [`MarkerConfig::validate`] and
//! [`DetectionConfig::validate`] check a configuration eagerly, before any
//! marker is built.

use crate::alignment::segment::DEFAULT_CONTIGUITY_TOLERANCE;
use crate::error::{GeometryError, Result};
use crate::geometry::profile::{DEFAULT_CIRCLE_SEGMENTS, MIN_CIRCLE_SEGMENTS};
use crate::geometry::Rgb;
use crate::math::require_positive;
use crate::text::TextStyle;

/// Base half-width of an equilateral triangle per unit of height (`sqrt(3) / 2 / 2`, rounded).
const EQUILATERAL_HALF_WIDTH_RATIO: f64 = 0.433;

/// Geometry, color and label parameters for every marker kind.
#[derive(Debug, Clone, PartialEq)]
pub struct MarkerConfig {
    // -- Intermediate station markers (triangles) --
    /// Triangle height. Default 0.5.
    pub triangle_height: f64,
    /// Triangle base half-width. Default 0.2165 (equilateral for the default height).
    pub triangle_half_width: f64,
    /// Triangle extrusion thickness. Default 0.01.
    pub triangle_thickness: f64,
    /// Default green.
    pub intermediate_color: Rgb,

    // -- Terminal station markers (circles) --
    /// Default 0.5.
    pub circle_radius: f64,
    /// Default 0.01.
    pub circle_thickness: f64,
    /// Polygon segments approximating circles. Default 16, at least 12.
    pub circle_segments: usize,
    /// Default red.
    pub terminal_color: Rgb,

    // -- Station labels --
    /// Glyph height of station labels. Default 1.0.
    pub text_height: f64,
    /// Glyph width-to-height ratio. Default 0.6.
    pub text_width_factor: f64,
    /// Inter-character gap as a fraction of glyph width. Default 0.1.
    pub text_gap: f64,
    /// Default black.
    pub text_color: Rgb,
    /// Lift of station markers above the reference point. Default 0.5.
    pub marker_height_offset: f64,

    // -- Slope-change markers (circles) --
    /// Default 0.4.
    pub slope_marker_radius: f64,
    /// Default 0.05.
    pub slope_marker_thickness: f64,
    /// Default orange.
    pub slope_marker_color: Rgb,
    /// Default 1.0.
    pub slope_marker_height_offset: f64,

    // -- Directional arrows --
    /// Default 0.5.
    pub arrow_length: f64,
    /// Default 0.25.
    pub arrow_width: f64,
    /// Default 0.05.
    pub arrow_thickness: f64,
    /// Default 0.8.
    pub arrow_height_offset: f64,
    /// Color for non-negative grades. Default green.
    pub upward_color: Rgb,
    /// Color for negative grades. Default red.
    pub downward_color: Rgb,
    /// An arrow is placed at every `arrow_stride`-th reference point; 0 disables arrows. Default 2.
    pub arrow_stride: usize,

    // -- Slope labels --
    /// Glyph height of grade labels on slope markers and arrows. Default 0.5.
    pub slope_text_height: f64,
    /// Default dark blue.
    pub slope_text_color: Rgb,

    /// Slope-change detection parameters.
    pub detection: DetectionConfig,
}

impl Default for MarkerConfig {
    fn default() -> Self {
        let triangle_height = 0.5;
        Self {
            triangle_height,
            triangle_half_width: triangle_height * EQUILATERAL_HALF_WIDTH_RATIO,
            triangle_thickness: 0.01,
            intermediate_color: Rgb::GREEN,

            circle_radius: 0.5,
            circle_thickness: 0.01,
            circle_segments: DEFAULT_CIRCLE_SEGMENTS,
            terminal_color: Rgb::RED,

            text_height: 1.0,
            text_width_factor: TextStyle::DEFAULT_WIDTH_FACTOR,
            text_gap: TextStyle::DEFAULT_GAP,
            text_color: Rgb::BLACK,
            marker_height_offset: 0.5,

            slope_marker_radius: 0.4,
            slope_marker_thickness: 0.05,
            slope_marker_color: Rgb::ORANGE,
            slope_marker_height_offset: 1.0,

            arrow_length: 0.5,
            arrow_width: 0.25,
            arrow_thickness: 0.05,
            arrow_height_offset: 0.8,
            upward_color: Rgb::GREEN,
            downward_color: Rgb::RED,
            arrow_stride: 2,

            slope_text_height: 0.5,
            slope_text_color: Rgb::DARK_BLUE,

            detection: DetectionConfig::default(),
        }
    }
}

impl MarkerConfig {
    /// Checks every dimension, color and threshold.
    ///
    /// # Errors
    ///
    /// Returns the first [`crate::Error::InvalidGeometry`] or
    /// [`crate::Error::InvalidColor`] found.
    pub fn validate(&self) -> Result<()> {
        for (parameter, value) in [
            ("triangle height", self.triangle_height),
            ("triangle half-width", self.triangle_half_width),
            ("triangle thickness", self.triangle_thickness),
            ("circle radius", self.circle_radius),
            ("circle thickness", self.circle_thickness),
            ("slope marker radius", self.slope_marker_radius),
            ("slope marker thickness", self.slope_marker_thickness),
            ("arrow length", self.arrow_length),
            ("arrow width", self.arrow_width),
            ("arrow thickness", self.arrow_thickness),
        ] {
            require_positive(parameter, value)?;
        }

        for (parameter, value) in [
            ("marker height offset", self.marker_height_offset),
            ("slope marker height offset", self.slope_marker_height_offset),
            ("arrow height offset", self.arrow_height_offset),
        ] {
            if !value.is_finite() {
                return Err(GeometryError::Degenerate(format!("{parameter} must be finite, got {value}")).into());
            }
        }

        if self.circle_segments < MIN_CIRCLE_SEGMENTS {
            return Err(GeometryError::TooFewSegments {
                segments: self.circle_segments,
                min: MIN_CIRCLE_SEGMENTS,
            }
            .into());
        }

        for color in [
            self.intermediate_color,
            self.terminal_color,
            self.text_color,
            self.slope_marker_color,
            self.upward_color,
            self.downward_color,
            self.slope_text_color,
        ] {
            color.validate()?;
        }

        self.station_text_style()?;
        self.slope_text_style()?;
        self.detection.validate()
    }

    /// Label style for station markers.
    ///
    /// # Errors
    ///
    /// Returns [`crate::Error::InvalidGeometry`] if the text parameters are invalid.
    pub fn station_text_style(&self) -> Result<TextStyle> {
        TextStyle::new(self.text_height, self.text_width_factor, self.text_gap)
    }

    /// Label style for slope-change markers and arrows.
    ///
    /// # Errors
    ///
    /// Returns [`crate::Error::InvalidGeometry`] if the text parameters are invalid.
    pub fn slope_text_style(&self) -> Result<TextStyle> {
        TextStyle::new(self.slope_text_height, self.text_width_factor, self.text_gap)
    }
}

/// Parameters of the slope-change detector.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct DetectionConfig {
    /// Minimum absolute grade change reported at a segment boundary. Default 0.01 (1%).
    pub grade_change_threshold: f64,
    /// Allowed station gap or overlap between adjacent segments. Default 1e-3.
    pub contiguity_tolerance: f64,
    /// Station distance within which a known change overrides a detected one. Default 0.5.
    pub merge_tolerance: f64,
}

impl Default for DetectionConfig {
    fn default() -> Self {
        Self {
            grade_change_threshold: 0.01,
            contiguity_tolerance: DEFAULT_CONTIGUITY_TOLERANCE,
            merge_tolerance: 0.5,
        }
    }
}

impl DetectionConfig {
    /// Checks that all tolerances are finite and non-negative.
    ///
    /// # Errors
    ///
    /// Returns [`GeometryError::Negative`] for the first offending field.
    pub fn validate(&self) -> Result<()> {
        for (parameter, value) in [
            ("grade change threshold", self.grade_change_threshold),
            ("contiguity tolerance", self.contiguity_tolerance),
            ("merge tolerance", self.merge_tolerance),
        ] {
            if !value.is_finite() || value < 0.0 {
                return Err(GeometryError::Negative { parameter, value }.into());
            }
        }
        Ok(())
    }
}
