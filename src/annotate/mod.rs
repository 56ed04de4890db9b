//! A full annotation pass over an alignment.
//!
//! Runs the marker builders over every reference point, the slope-change
//! detector over the vertical profile and the arrow sampler, collecting the
//! results in an [`AnnotationStore`]. A marker that fails to build is logged
//! and recorded; it never aborts the pass.

mod store;

pub use store::{AnnotationStore, MarkerFailure, MarkerId};

use tracing::{debug, info, warn};

use crate::alignment::{
    check_station_order, KnownSlopeChange, ReferencePoint, SlopeChangeEvent, VerticalProfile, VerticalSegment,
};
use crate::config::MarkerConfig;
use crate::error::Result;
use crate::markers::{
    classify_within, directional_arrow_marker, intermediate_station_marker, slope_change_marker, station_bounds,
    terminal_station_marker, Marker, MarkerKind, StationClass,
};
use crate::math::Frame;
use crate::operations::DetectSlopeChanges;

/// Builds every marker for an alignment.
pub struct Annotate<'a> {
    points: &'a [ReferencePoint],
    segments: &'a [VerticalSegment],
    known: &'a [KnownSlopeChange],
    config: &'a MarkerConfig,
}

impl<'a> Annotate<'a> {
    /// Creates a pass over `points` (ordered by station) and `segments`
    /// (ordered and contiguous; may be empty).
    #[must_use]
    pub fn new(points: &'a [ReferencePoint], segments: &'a [VerticalSegment], config: &'a MarkerConfig) -> Self {
        Self {
            points,
            segments,
            known: &[],
            config,
        }
    }

    /// Known slope changes merged into the detected ones.
    #[must_use]
    pub fn known(mut self, known: &'a [KnownSlopeChange]) -> Self {
        self.known = known;
        self
    }

    /// Executes the pass.
    ///
    /// # Errors
    ///
    /// Returns an error if the configuration is invalid, the reference points
    /// are not ordered by station, a non-empty segment list is invalid, known
    /// changes are given without segments, or a known change is not finite.
    /// Failures of individual markers are recorded in the store instead.
    pub fn execute(self) -> Result<AnnotationStore> {
        self.config.validate()?;
        check_station_order(self.points)?;

        let mut store = AnnotationStore::new();
        self.station_markers(&mut store);

        if self.segments.is_empty() && self.known.is_empty() {
            info!("no vertical segments, skipping slope analysis");
        } else {
            let events = DetectSlopeChanges::new(self.segments)
                .config(&self.config.detection)
                .known(self.known)
                .execute()?;
            self.slope_markers(&events, &mut store);

            let profile = VerticalProfile::with_tolerance(self.segments, self.config.detection.contiguity_tolerance)?;
            self.arrow_markers(&profile, &mut store);
        }

        info!(
            points = self.points.len(),
            stations = store.count(MarkerKind::IntermediateStation) + store.count(MarkerKind::TerminalStation),
            slope_changes = store.count(MarkerKind::SlopeChange),
            arrows = store.count(MarkerKind::DirectionalArrow),
            failures = store.failures().len(),
            "annotation pass complete"
        );
        Ok(store)
    }

    fn station_markers(&self, store: &mut AnnotationStore) {
        let bounds = station_bounds(self.points.iter().map(|p| p.station));
        for point in self.points {
            let (kind, build): (_, fn(&Frame, f64, &MarkerConfig) -> Result<Marker>) =
                match classify_within(point.station, bounds) {
                    StationClass::Terminal => (MarkerKind::TerminalStation, terminal_station_marker),
                    StationClass::Intermediate => (MarkerKind::IntermediateStation, intermediate_station_marker),
                };
            let result = Frame::from_reference(point).and_then(|frame| build(&frame, point.station, self.config));
            record(store, point.station, kind, result);
        }
    }

    fn slope_markers(&self, events: &[SlopeChangeEvent], store: &mut AnnotationStore) {
        for event in events {
            let Some(point) = nearest_point(self.points, event.station) else {
                warn!(station = event.station, "no reference point for slope change");
                continue;
            };
            debug!(
                station = event.station,
                reference = point.station,
                change_type = %event.change_type,
                "placing slope change marker"
            );
            let result =
                Frame::from_reference(point).and_then(|frame| slope_change_marker(&frame, event, self.config));
            record(store, event.station, MarkerKind::SlopeChange, result);
        }
    }

    fn arrow_markers(&self, profile: &VerticalProfile<'_>, store: &mut AnnotationStore) {
        if self.config.arrow_stride == 0 {
            debug!("directional arrows disabled");
            return;
        }
        let (start, end) = profile.station_range();
        debug!(start, end, stride = self.config.arrow_stride, "sampling directional arrows");
        for point in self.points.iter().step_by(self.config.arrow_stride) {
            let sample = profile.sample(point.station);
            let result =
                Frame::from_reference(point).and_then(|frame| directional_arrow_marker(&frame, sample, self.config));
            record(store, point.station, MarkerKind::DirectionalArrow, result);
        }
    }
}

fn record(store: &mut AnnotationStore, station: f64, kind: MarkerKind, result: Result<Marker>) {
    match result {
        Ok(marker) => {
            store.add_marker(marker);
        }
        Err(error) => {
            warn!(station, kind = %kind, %error, "marker skipped");
            store.add_failure(station, kind, error);
        }
    }
}

/// Reference point closest in station to `station`; ties go to the earlier point.
fn nearest_point(points: &[ReferencePoint], station: f64) -> Option<&ReferencePoint> {
    points
        .iter()
        .min_by(|a, b| (a.station - station).abs().total_cmp(&(b.station - station).abs()))
}
