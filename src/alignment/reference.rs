use crate::error::{AlignmentError, Result};
use crate::math::{Point3, Vector2};

/// A fixed, oriented point along the alignment centerline.
#[derive(Debug, Clone, PartialEq)]
pub struct ReferencePoint {
    /// Distance along the alignment.
    pub station: f64,
    /// World position of the point.
    pub position: Point3,
    /// Horizontal direction of travel (need not be unit length).
    pub tangent: Vector2,
    /// Optional name carried over from the alignment source.
    pub name: Option<String>,
}

impl ReferencePoint {
    /// Creates an unnamed reference point.
    #[must_use]
    pub fn new(station: f64, position: Point3, tangent: Vector2) -> Self {
        Self {
            station,
            position,
            tangent,
            name: None,
        }
    }

    /// Sets the point's name.
    #[must_use]
    pub fn with_name(mut self, name: impl Into<String>) -> Self {
        self.name = Some(name.into());
        self
    }
}

/// Verifies that reference points are ordered by non-decreasing station.
///
/// # Errors
///
/// Returns [`AlignmentError::UnorderedStations`] at the first point whose
/// station is lower than its predecessor's (or is NaN).
pub fn check_station_order(points: &[ReferencePoint]) -> Result<()> {
    for (index, pair) in points.windows(2).enumerate() {
        let (previous, current) = (pair[0].station, pair[1].station);
        if current.is_nan() || previous.is_nan() || current < previous {
            return Err(AlignmentError::UnorderedStations {
                index: index + 1,
                station: current,
                previous,
            }
            .into());
        }
    }
    Ok(())
}
