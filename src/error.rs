use thiserror::Error;

/// Top-level error type for the alignmark annotation kernel.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum Error {
    #[error("invalid geometry: {0}")]
    InvalidGeometry(#[from] GeometryError),

    #[error("invalid color: {0}")]
    InvalidColor(#[from] ColorError),

    #[error("invalid value: {0}")]
    InvalidValue(#[from] ValueError),

    #[error("invalid alignment: {0}")]
    InvalidAlignment(#[from] AlignmentError),
}

/// Errors related to frames, profiles and solid dimensions.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum GeometryError {
    #[error("zero-length vector")]
    ZeroVector,

    #[error("{parameter} must be positive and finite, got {value}")]
    NonPositive { parameter: &'static str, value: f64 },

    #[error("{parameter} must be non-negative and finite, got {value}")]
    Negative { parameter: &'static str, value: f64 },

    #[error("circle needs at least {min} segments, got {segments}")]
    TooFewSegments { segments: usize, min: usize },

    #[error("degenerate geometry: {0}")]
    Degenerate(String),
}

/// Errors related to surface colors.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum ColorError {
    #[error("{channel} channel = {value} is out of range [0, 1]")]
    ChannelOutOfRange { channel: &'static str, value: f64 },
}

/// Errors related to label values and label text.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum ValueError {
    #[error("value is not finite: {0}")]
    NonFinite(f64),

    #[error("value {0} cannot be represented as a label")]
    Unrepresentable(f64),

    #[error("label text is empty")]
    EmptyText,

    #[error("character {0:?} has no stroke definition")]
    UnsupportedCharacter(char),
}

/// Errors related to alignment input data.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum AlignmentError {
    #[error("vertical segment list is empty")]
    Empty,

    #[error("segment {index} has a non-finite value")]
    NonFinite { index: usize },

    #[error("known slope change {index} has a non-finite value")]
    NonFiniteKnown { index: usize },

    #[error("segment {index} has non-positive length ({start} .. {end})")]
    NonPositiveLength { index: usize, start: f64, end: f64 },

    #[error("segment {index} starts at {start}, before the previous segment start {previous}")]
    Unordered {
        index: usize,
        start: f64,
        previous: f64,
    },

    #[error("segment {index} starts at {start} but the previous segment ends at {previous_end}")]
    Discontinuous {
        index: usize,
        start: f64,
        previous_end: f64,
    },

    #[error("reference point {index} at station {station} precedes station {previous}")]
    UnorderedStations {
        index: usize,
        station: f64,
        previous: f64,
    },
}

/// Convenience type alias for results using [`Error`].
pub type Result<T> = std::result::Result<T, Error>;
