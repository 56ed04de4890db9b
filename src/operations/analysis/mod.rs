mod detect_slope_changes;

pub use detect_slope_changes::DetectSlopeChanges;
