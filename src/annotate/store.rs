use slotmap::{new_key_type, SlotMap};

use crate::error::Error;
use crate::markers::{Marker, MarkerKind};

new_key_type! {
    /// Handle of a marker in an [`AnnotationStore`].
    pub struct MarkerId;
}

/// A marker that could not be built, with the reason.
#[derive(Debug, Clone, PartialEq)]
pub struct MarkerFailure {
    pub station: f64,
    pub kind: MarkerKind,
    pub error: Error,
}

/// Arena owning the markers of one annotation pass.
///
/// Markers are addressed by generational [`MarkerId`]s. Iteration follows
/// insertion order only until a marker is removed; freed slots are reused.
#[derive(Debug, Default)]
pub struct AnnotationStore {
    markers: SlotMap<MarkerId, Marker>,
    failures: Vec<MarkerFailure>,
}

impl AnnotationStore {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Inserts a marker and returns its ID.
    pub fn add_marker(&mut self, marker: Marker) -> MarkerId {
        self.markers.insert(marker)
    }

    /// Records a marker that failed to build.
    pub fn add_failure(&mut self, station: f64, kind: MarkerKind, error: Error) {
        self.failures.push(MarkerFailure { station, kind, error });
    }

    /// Returns the marker with the given ID, if present.
    #[must_use]
    pub fn marker(&self, id: MarkerId) -> Option<&Marker> {
        self.markers.get(id)
    }

    /// Removes and returns a marker.
    pub fn remove_marker(&mut self, id: MarkerId) -> Option<Marker> {
        self.markers.remove(id)
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.markers.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.markers.is_empty()
    }

    /// Iterates all markers with their IDs.
    pub fn iter(&self) -> impl Iterator<Item = (MarkerId, &Marker)> {
        self.markers.iter()
    }

    /// Iterates the markers of one kind.
    pub fn markers_of(&self, kind: MarkerKind) -> impl Iterator<Item = &Marker> {
        self.markers.values().filter(move |m| m.kind == kind)
    }

    /// Number of markers of one kind.
    #[must_use]
    pub fn count(&self, kind: MarkerKind) -> usize {
        self.markers_of(kind).count()
    }

    /// Iterates the markers placed exactly at `station`.
    #[allow(clippy::float_cmp)]
    pub fn markers_at(&self, station: f64) -> impl Iterator<Item = &Marker> {
        self.markers.values().filter(move |m| m.station == station)
    }

    /// Markers that failed to build, in the order they were attempted.
    #[must_use]
    pub fn failures(&self) -> &[MarkerFailure] {
        &self.failures
    }
}
