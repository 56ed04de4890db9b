use crate::error::{AlignmentError, Result};

/// Default tolerance for the station gap or overlap between adjacent segments.
pub const DEFAULT_CONTIGUITY_TOLERANCE: f64 = 1e-3;

/// Shape of the elevation profile within a vertical segment.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum SegmentType {
    /// Straight grade; start and end grade are equal.
    ConstantGrade,
    /// Parabolic transition with a linearly varying grade.
    Curve,
}

impl SegmentType {
    /// Stable name used in marker attributes.
    #[must_use]
    pub fn as_str(self) -> &'static str {
        match self {
            Self::ConstantGrade => "Constant Grade",
            Self::Curve => "Vertical Curve",
        }
    }
}

/// A piece of the alignment's elevation profile.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct VerticalSegment {
    pub start_station: f64,
    pub end_station: f64,
    pub segment_type: SegmentType,
    /// Grade at the start, as a decimal fraction (0.02 = 2%).
    pub start_grade: f64,
    /// Grade at the end; equals `start_grade` for constant segments.
    pub end_grade: f64,
    /// Height above datum at the start station.
    pub start_height: f64,
}

impl VerticalSegment {
    /// Creates a constant-grade segment.
    #[must_use]
    pub fn constant(start_station: f64, end_station: f64, grade: f64, start_height: f64) -> Self {
        Self {
            start_station,
            end_station,
            segment_type: SegmentType::ConstantGrade,
            start_grade: grade,
            end_grade: grade,
            start_height,
        }
    }

    /// Creates a vertical curve between two grades.
    #[must_use]
    pub fn curve(
        start_station: f64,
        end_station: f64,
        start_grade: f64,
        end_grade: f64,
        start_height: f64,
    ) -> Self {
        Self {
            start_station,
            end_station,
            segment_type: SegmentType::Curve,
            start_grade,
            end_grade,
            start_height,
        }
    }

    /// Horizontal length of the segment.
    #[must_use]
    pub fn length(&self) -> f64 {
        self.end_station - self.start_station
    }

    /// Returns `true` if `station` lies within `[start, end]`.
    #[must_use]
    pub fn contains(&self, station: f64) -> bool {
        self.start_station <= station && station <= self.end_station
    }

    /// Grade at `station`, which must lie within the segment.
    #[must_use]
    pub fn grade_at(&self, station: f64) -> f64 {
        match self.segment_type {
            SegmentType::ConstantGrade => self.start_grade,
            SegmentType::Curve => {
                let t = (station - self.start_station) / self.length();
                self.start_grade + t * (self.end_grade - self.start_grade)
            }
        }
    }

    /// Height above datum at `station`, which must lie within the segment.
    #[must_use]
    pub fn height_at(&self, station: f64) -> f64 {
        let d = station - self.start_station;
        match self.segment_type {
            SegmentType::ConstantGrade => self.start_height + d * self.start_grade,
            // Parabola: average of start grade and grade at `station`.
            SegmentType::Curve => self.start_height + d * (self.start_grade + self.grade_at(station)) * 0.5,
        }
    }

    fn is_finite(&self) -> bool {
        [
            self.start_station,
            self.end_station,
            self.start_grade,
            self.end_grade,
            self.start_height,
        ]
        .iter()
        .all(|v| v.is_finite())
    }
}

/// Verifies that segments are non-empty, finite, ordered and contiguous.
///
/// Segments are never re-sorted; an out-of-order list is an upstream data error.
///
/// # Errors
///
/// Returns an [`AlignmentError`] describing the first violation found.
pub fn validate_segments(segments: &[VerticalSegment], tolerance: f64) -> Result<()> {
    if segments.is_empty() {
        return Err(AlignmentError::Empty.into());
    }

    for (index, segment) in segments.iter().enumerate() {
        if !segment.is_finite() {
            return Err(AlignmentError::NonFinite { index }.into());
        }
        if segment.end_station <= segment.start_station {
            return Err(AlignmentError::NonPositiveLength {
                index,
                start: segment.start_station,
                end: segment.end_station,
            }
            .into());
        }
    }

    for (i, pair) in segments.windows(2).enumerate() {
        let (previous, current) = (&pair[0], &pair[1]);
        let index = i + 1;
        if current.start_station < previous.start_station {
            return Err(AlignmentError::Unordered {
                index,
                start: current.start_station,
                previous: previous.start_station,
            }
            .into());
        }
        if (current.start_station - previous.end_station).abs() > tolerance {
            return Err(AlignmentError::Discontinuous {
                index,
                start: current.start_station,
                previous_end: previous.end_station,
            }
            .into());
        }
    }

    Ok(())
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;
    use crate::Error;
    use approx::assert_relative_eq;

    #[test]
    fn constant_segment_queries() {
        let seg = VerticalSegment::constant(10.0, 30.0, -0.03, 3.52);
        assert_relative_eq!(seg.length(), 20.0);
        assert_relative_eq!(seg.grade_at(25.0), -0.03);
        assert_relative_eq!(seg.height_at(20.0), 3.52 - 0.3, epsilon = 1e-12);
        assert_eq!(seg.segment_type.as_str(), "Constant Grade");
    }

    #[test]
    fn curve_segment_interpolates_grade() {
        let seg = VerticalSegment::curve(0.0, 40.0, -0.02, 0.02, 5.0);
        assert_relative_eq!(seg.grade_at(0.0), -0.02);
        assert_relative_eq!(seg.grade_at(20.0), 0.0, epsilon = 1e-15);
        assert_relative_eq!(seg.grade_at(40.0), 0.02);
        // Symmetric sag curve returns to its start height.
        assert_relative_eq!(seg.height_at(40.0), 5.0, epsilon = 1e-12);
        assert_relative_eq!(seg.height_at(20.0), 5.0 - 0.2, epsilon = 1e-12);
    }

    #[test]
    fn contiguous_segments_validate() {
        let segs = vec![
            VerticalSegment::constant(0.0, 10.0, 0.01, 0.0),
            VerticalSegment::curve(10.0005, 20.0, 0.01, -0.01, 0.1),
        ];
        assert!(validate_segments(&segs, DEFAULT_CONTIGUITY_TOLERANCE).is_ok());
    }

    #[test]
    fn empty_list_fails() {
        assert_eq!(
            validate_segments(&[], DEFAULT_CONTIGUITY_TOLERANCE).unwrap_err(),
            Error::InvalidAlignment(AlignmentError::Empty)
        );
    }

    #[test]
    fn gap_beyond_tolerance_fails() {
        let segs = vec![
            VerticalSegment::constant(0.0, 10.0, 0.01, 0.0),
            VerticalSegment::constant(10.5, 20.0, 0.01, 0.1),
        ];
        let err = validate_segments(&segs, DEFAULT_CONTIGUITY_TOLERANCE).unwrap_err();
        assert!(matches!(
            err,
            Error::InvalidAlignment(AlignmentError::Discontinuous { index: 1, .. })
        ));
    }

    #[test]
    fn overlap_fails() {
        let segs = vec![
            VerticalSegment::constant(0.0, 10.0, 0.01, 0.0),
            VerticalSegment::constant(9.0, 20.0, 0.01, 0.1),
        ];
        assert!(validate_segments(&segs, DEFAULT_CONTIGUITY_TOLERANCE).is_err());
    }

    #[test]
    fn unordered_fails() {
        let segs = vec![
            VerticalSegment::constant(10.0, 20.0, 0.01, 0.0),
            VerticalSegment::constant(0.0, 10.0, 0.01, 0.1),
        ];
        let err = validate_segments(&segs, DEFAULT_CONTIGUITY_TOLERANCE).unwrap_err();
        assert!(matches!(
            err,
            Error::InvalidAlignment(AlignmentError::Unordered { index: 1, .. })
        ));
    }

    #[test]
    fn zero_length_and_nan_fail() {
        let zero = vec![VerticalSegment::constant(5.0, 5.0, 0.0, 0.0)];
        assert!(matches!(
            validate_segments(&zero, DEFAULT_CONTIGUITY_TOLERANCE).unwrap_err(),
            Error::InvalidAlignment(AlignmentError::NonPositiveLength { .. })
        ));

        let nan = vec![VerticalSegment::constant(0.0, 5.0, f64::NAN, 0.0)];
        assert_eq!(
            validate_segments(&nan, DEFAULT_CONTIGUITY_TOLERANCE).unwrap_err(),
            Error::InvalidAlignment(AlignmentError::NonFinite { index: 0 })
        );
    }
}
