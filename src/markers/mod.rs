//! Annotation markers: an extruded shape, an optional vector label and typed
//! attributes, built from a [`Frame`] and a [`MarkerConfig`].
//!
//! Every builder is a pure function of its inputs.

pub mod attributes;
pub mod placement;
mod slope;
mod station;

pub use attributes::{AttributeValue, Attributes};
pub use placement::Placement;
pub use slope::{directional_arrow_marker, slope_change_marker};
pub use station::{
    classify_station, classify_within, intermediate_station_marker, station_bounds, station_marker,
    terminal_station_marker, StationClass,
};

use std::fmt;

use crate::config::MarkerConfig;
use crate::error::Result;
use crate::geometry::{GeometryBundle, Rgb};
use crate::math::{ExtrusionAxis, Frame};
use crate::text::TextGlyphRun;

/// The four marker families.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum MarkerKind {
    /// Triangle at a station between the ends of the alignment.
    IntermediateStation,
    /// Circle at the first or last station.
    TerminalStation,
    /// Circle at a grade discontinuity.
    SlopeChange,
    /// Arrow pointing along the direction of travel, colored by grade sign.
    DirectionalArrow,
}

impl MarkerKind {
    #[must_use]
    pub fn as_str(self) -> &'static str {
        match self {
            Self::IntermediateStation => "intermediate-station",
            Self::TerminalStation => "terminal-station",
            Self::SlopeChange => "slope-change",
            Self::DirectionalArrow => "directional-arrow",
        }
    }

    /// Frame axis the marker's profile is extruded along.
    #[must_use]
    pub fn axis(self) -> ExtrusionAxis {
        match self {
            Self::DirectionalArrow => ExtrusionAxis::Tangent,
            _ => ExtrusionAxis::Perpendicular,
        }
    }

    /// Vertical lift of the marker above its reference point.
    #[must_use]
    pub fn height_offset(self, config: &MarkerConfig) -> f64 {
        match self {
            Self::IntermediateStation | Self::TerminalStation => config.marker_height_offset,
            Self::SlopeChange => config.slope_marker_height_offset,
            Self::DirectionalArrow => config.arrow_height_offset,
        }
    }
}

impl fmt::Display for MarkerKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A finished annotation marker.
#[derive(Debug, Clone, PartialEq)]
pub struct Marker {
    pub kind: MarkerKind,
    pub station: f64,
    pub bundle: GeometryBundle,
    pub label: Option<TextGlyphRun>,
    pub label_color: Rgb,
    pub attributes: Attributes,
}

impl Marker {
    /// Local-to-world placement of this marker in `frame`.
    ///
    /// # Errors
    ///
    /// Returns [`crate::Error::InvalidGeometry`] if the configured height
    /// offset is not finite.
    pub fn placement(&self, frame: &Frame, config: &MarkerConfig) -> Result<Placement> {
        Placement::for_marker(frame, self.kind, config)
    }
}
