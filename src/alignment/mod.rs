//! Alignment input data: reference points, vertical segments and slope-change events.

pub mod reference;
pub mod segment;
pub mod slope_event;
pub mod vertical_profile;

pub use reference::{check_station_order, ReferencePoint};
pub use segment::{SegmentType, VerticalSegment};
pub use slope_event::{ChangeType, GradeSample, KnownSlopeChange, SlopeChangeEvent};
pub use vertical_profile::VerticalProfile;
