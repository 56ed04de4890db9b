use tracing::debug;

use crate::alignment::segment::validate_segments;
use crate::alignment::{ChangeType, KnownSlopeChange, SlopeChangeEvent, VerticalSegment};
use crate::config::DetectionConfig;
use crate::error::{AlignmentError, Result};

/// Finds grade discontinuities between adjacent vertical segments and merges
/// them with caller-supplied known changes.
///
/// Segments must arrive ordered by start station and contiguous within the
/// contiguity tolerance; they are validated, never re-sorted.
pub struct DetectSlopeChanges<'a> {
    segments: &'a [VerticalSegment],
    known: &'a [KnownSlopeChange],
    config: DetectionConfig,
}

impl<'a> DetectSlopeChanges<'a> {
    /// Creates a detector with the default [`DetectionConfig`].
    #[must_use]
    pub fn new(segments: &'a [VerticalSegment]) -> Self {
        Self {
            segments,
            known: &[],
            config: DetectionConfig::default(),
        }
    }

    /// Replaces all detection parameters.
    #[must_use]
    pub fn config(mut self, config: &DetectionConfig) -> Self {
        self.config = *config;
        self
    }

    /// Minimum absolute grade change that produces an event.
    #[must_use]
    pub fn threshold(mut self, threshold: f64) -> Self {
        self.config.grade_change_threshold = threshold;
        self
    }

    #[must_use]
    pub fn contiguity_tolerance(mut self, tolerance: f64) -> Self {
        self.config.contiguity_tolerance = tolerance;
        self
    }

    /// Station distance within which a known change replaces a detected one.
    #[must_use]
    pub fn merge_tolerance(mut self, tolerance: f64) -> Self {
        self.config.merge_tolerance = tolerance;
        self
    }

    /// Known changes, applied in the given order.
    #[must_use]
    pub fn known(mut self, known: &'a [KnownSlopeChange]) -> Self {
        self.known = known;
        self
    }

    /// Executes the detection.
    ///
    /// Returns events sorted by station. At equal stations, curve-boundary
    /// events precede known ones.
    ///
    /// # Errors
    ///
    /// Returns [`crate::Error::InvalidGeometry`] if a tolerance is negative or
    /// non-finite, and [`crate::Error::InvalidAlignment`] if the segments are
    /// empty, non-finite, unordered or not contiguous, or if a known change
    /// has a non-finite station, grade or height.
    pub fn execute(self) -> Result<Vec<SlopeChangeEvent>> {
        self.config.validate()?;
        validate_segments(self.segments, self.config.contiguity_tolerance)?;
        validate_known(self.known)?;

        let mut events: Vec<SlopeChangeEvent> = self
            .segments
            .windows(2)
            .filter_map(|pair| boundary_event(&pair[0], &pair[1], self.config.grade_change_threshold))
            .collect();
        let detected = events.len();

        let mut replaced = 0;
        for known in self.known {
            let event = SlopeChangeEvent::from(known.clone());
            match nearest_detected(&events, known.station, self.config.merge_tolerance) {
                Some(index) => {
                    debug!(
                        detected = events[index].station,
                        known = known.station,
                        "known slope change replaces detected event"
                    );
                    events[index] = event;
                    replaced += 1;
                }
                None => events.push(event),
            }
        }

        events.sort_by(|a, b| {
            a.station
                .total_cmp(&b.station)
                .then(a.change_type.cmp(&b.change_type))
        });

        debug!(
            segments = self.segments.len(),
            detected,
            known = self.known.len(),
            replaced,
            total = events.len(),
            "slope changes detected"
        );
        Ok(events)
    }
}

fn validate_known(known: &[KnownSlopeChange]) -> Result<()> {
    for (index, change) in known.iter().enumerate() {
        let values = [change.station, change.from_grade, change.to_grade, change.height];
        if !values.iter().all(|v| v.is_finite()) {
            return Err(AlignmentError::NonFiniteKnown { index }.into());
        }
    }
    Ok(())
}

fn boundary_event(
    current: &VerticalSegment,
    next: &VerticalSegment,
    threshold: f64,
) -> Option<SlopeChangeEvent> {
    let from_grade = current.end_grade;
    let to_grade = next.start_grade;
    if (to_grade - from_grade).abs() < threshold {
        return None;
    }
    Some(SlopeChangeEvent {
        station: next.start_station,
        from_grade,
        to_grade,
        height: next.start_height,
        change_type: ChangeType::CurveBoundary,
        label: None,
    })
}

/// Index of the curve-boundary event closest to `station` within `tolerance`.
/// Ties go to the lower station.
fn nearest_detected(events: &[SlopeChangeEvent], station: f64, tolerance: f64) -> Option<usize> {
    events
        .iter()
        .enumerate()
        .filter(|(_, e)| e.change_type == ChangeType::CurveBoundary)
        .map(|(i, e)| (i, (e.station - station).abs(), e.station))
        .filter(|&(_, distance, _)| distance <= tolerance)
        .min_by(|a, b| a.1.total_cmp(&b.1).then(a.2.total_cmp(&b.2)))
        .map(|(i, _, _)| i)
}
