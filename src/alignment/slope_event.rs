use std::fmt;

use super::SegmentType;

/// How a slope-change event was obtained.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum ChangeType {
    /// Detected at a boundary between two vertical segments.
    CurveBoundary,
    /// Supplied by the caller.
    Known,
}

impl ChangeType {
    /// Stable name used in marker attributes.
    #[must_use]
    pub fn as_str(self) -> &'static str {
        match self {
            Self::CurveBoundary => "curve-boundary",
            Self::Known => "known",
        }
    }
}

impl fmt::Display for ChangeType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A slope change the caller already knows about.
#[derive(Debug, Clone, PartialEq)]
pub struct KnownSlopeChange {
    pub station: f64,
    pub from_grade: f64,
    pub to_grade: f64,
    pub height: f64,
    pub label: Option<String>,
}

impl KnownSlopeChange {
    /// Creates an unlabelled known change.
    #[must_use]
    pub fn new(station: f64, from_grade: f64, to_grade: f64, height: f64) -> Self {
        Self {
            station,
            from_grade,
            to_grade,
            height,
            label: None,
        }
    }

    /// Attaches a label.
    #[must_use]
    pub fn with_label(mut self, label: impl Into<String>) -> Self {
        self.label = Some(label.into());
        self
    }
}

/// A grade discontinuity along the alignment.
#[derive(Debug, Clone, PartialEq)]
pub struct SlopeChangeEvent {
    pub station: f64,
    pub from_grade: f64,
    pub to_grade: f64,
    /// Height above datum at the station.
    pub height: f64,
    pub change_type: ChangeType,
    /// Caller label, present only on known events.
    pub label: Option<String>,
}

impl SlopeChangeEvent {
    /// Signed grade change (`to - from`).
    #[must_use]
    pub fn grade_change(&self) -> f64 {
        self.to_grade - self.from_grade
    }
}

impl From<KnownSlopeChange> for SlopeChangeEvent {
    fn from(known: KnownSlopeChange) -> Self {
        Self {
            station: known.station,
            from_grade: known.from_grade,
            to_grade: known.to_grade,
            height: known.height,
            change_type: ChangeType::Known,
            label: known.label,
        }
    }
}

/// Grade and height at a single station; the input of a directional arrow.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct GradeSample {
    pub station: f64,
    pub grade: f64,
    pub height: f64,
    /// Segment the station falls in; `None` outside the profile or for event samples.
    pub segment_type: Option<SegmentType>,
}

impl GradeSample {
    /// Creates a sample with no segment information.
    #[must_use]
    pub fn new(station: f64, grade: f64, height: f64) -> Self {
        Self {
            station,
            grade,
            height,
            segment_type: None,
        }
    }
}

impl From<&SlopeChangeEvent> for GradeSample {
    /// Samples the grade in effect after the change.
    fn from(event: &SlopeChangeEvent) -> Self {
        Self {
            station: event.station,
            grade: event.to_grade,
            height: event.height,
            segment_type: None,
        }
    }
}
