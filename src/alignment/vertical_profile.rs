use crate::error::Result;

use super::segment::{validate_segments, DEFAULT_CONTIGUITY_TOLERANCE};
use super::{GradeSample, VerticalSegment};

/// Grade and height queries over a validated vertical segment list.
///
/// Stations before the first segment clamp to its start; stations past the
/// last segment extrapolate linearly with the final grade.
#[derive(Debug, Clone, Copy)]
pub struct VerticalProfile<'a> {
    segments: &'a [VerticalSegment],
}

impl<'a> VerticalProfile<'a> {
    /// Creates a profile using the default contiguity tolerance.
    ///
    /// # Errors
    ///
    /// Returns [`crate::Error::InvalidAlignment`] if the segments are empty,
    /// unordered or not contiguous.
    pub fn new(segments: &'a [VerticalSegment]) -> Result<Self> {
        Self::with_tolerance(segments, DEFAULT_CONTIGUITY_TOLERANCE)
    }

    /// Creates a profile with an explicit contiguity tolerance.
    ///
    /// # Errors
    ///
    /// Returns [`crate::Error::InvalidAlignment`] if the segments are empty,
    /// unordered or not contiguous within `tolerance`.
    pub fn with_tolerance(segments: &'a [VerticalSegment], tolerance: f64) -> Result<Self> {
        validate_segments(segments, tolerance)?;
        Ok(Self { segments })
    }

    /// Station range covered by the profile.
    #[must_use]
    pub fn station_range(&self) -> (f64, f64) {
        (self.first().start_station, self.last().end_station)
    }

    /// Grade at `station`.
    #[must_use]
    pub fn grade_at(&self, station: f64) -> f64 {
        let first = self.first();
        if station < first.start_station {
            return first.start_grade;
        }
        match self.segment_at(station) {
            Some(segment) => segment.grade_at(station.max(segment.start_station)),
            None => self.last().end_grade,
        }
    }

    /// Height above datum at `station`.
    #[must_use]
    pub fn height_at(&self, station: f64) -> f64 {
        let first = self.first();
        if station < first.start_station {
            return first.start_height;
        }
        if let Some(segment) = self.segment_at(station) {
            return segment.height_at(station.max(segment.start_station));
        }
        let last = self.last();
        let end_height = last.height_at(last.end_station);
        end_height + (station - last.end_station) * last.end_grade
    }

    /// Grade and height at `station`.
    #[must_use]
    pub fn sample(&self, station: f64) -> GradeSample {
        let segment_type = if station < self.first().start_station {
            None
        } else {
            self.segment_at(station).map(|segment| segment.segment_type)
        };
        GradeSample {
            station,
            grade: self.grade_at(station),
            height: self.height_at(station),
            segment_type,
        }
    }

    /// First segment ending at or after `station`.
    ///
    /// Shared boundaries resolve to the earlier segment; a station inside a
    /// tolerated gap resolves to the following segment.
    fn segment_at(&self, station: f64) -> Option<&'a VerticalSegment> {
        let idx = self
            .segments
            .partition_point(|segment| segment.end_station < station);
        self.segments.get(idx)
    }

    fn first(&self) -> &'a VerticalSegment {
        // Non-empty by construction.
        &self.segments[0]
    }

    fn last(&self) -> &'a VerticalSegment {
        &self.segments[self.segments.len() - 1]
    }
}
