use crate::config::MarkerConfig;
use crate::error::Result;
use crate::geometry::{circle, triangle, GeometryBundle};
use crate::math::Frame;
use crate::operations::Extrude;
use crate::text::VectorizeText;

use super::{Attributes, Marker, MarkerKind};

/// Position of a station within the alignment's station set.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum StationClass {
    /// First or last station.
    Terminal,
    Intermediate,
}

/// Lowest and highest of `stations`, or `(inf, -inf)` for an empty set.
#[must_use]
pub fn station_bounds(stations: impl IntoIterator<Item = f64>) -> (f64, f64) {
    stations
        .into_iter()
        .fold((f64::INFINITY, f64::NEG_INFINITY), |(lo, hi), s| (lo.min(s), hi.max(s)))
}

/// Classifies `station` against bounds from [`station_bounds`].
///
/// A station is terminal iff it equals either bound exactly.
#[allow(clippy::float_cmp)]
#[must_use]
pub fn classify_within(station: f64, (min, max): (f64, f64)) -> StationClass {
    if station == min || station == max {
        StationClass::Terminal
    } else {
        StationClass::Intermediate
    }
}

/// Classifies `station` against the full station set.
///
/// Against an empty set every station is intermediate.
#[must_use]
pub fn classify_station(station: f64, stations: &[f64]) -> StationClass {
    classify_within(station, station_bounds(stations.iter().copied()))
}

/// Green triangle marking a station between the ends of the alignment.
///
/// # Errors
///
/// Returns an error if the triangle or text configuration is invalid or the
/// station cannot be labelled.
pub fn intermediate_station_marker(frame: &Frame, station: f64, config: &MarkerConfig) -> Result<Marker> {
    let profile = triangle(config.triangle_half_width, config.triangle_height)?;
    let bundle = Extrude::new(
        profile,
        config.triangle_thickness,
        MarkerKind::IntermediateStation.axis(),
        config.intermediate_color,
    )
    .execute(frame)?;
    labelled(MarkerKind::IntermediateStation, station, bundle, config)
}

/// Red circle marking the first or last station of the alignment.
///
/// # Errors
///
/// Returns an error if the circle or text configuration is invalid or the
/// station cannot be labelled.
pub fn terminal_station_marker(frame: &Frame, station: f64, config: &MarkerConfig) -> Result<Marker> {
    let profile = circle(config.circle_radius, config.circle_segments)?;
    let bundle = Extrude::new(
        profile,
        config.circle_thickness,
        MarkerKind::TerminalStation.axis(),
        config.terminal_color,
    )
    .execute(frame)?;
    labelled(MarkerKind::TerminalStation, station, bundle, config)
}

/// Builds the terminal or intermediate marker for `station`, depending on its
/// class within `stations`.
///
/// # Errors
///
/// See [`terminal_station_marker`] and [`intermediate_station_marker`].
pub fn station_marker(frame: &Frame, station: f64, stations: &[f64], config: &MarkerConfig) -> Result<Marker> {
    match classify_station(station, stations) {
        StationClass::Terminal => terminal_station_marker(frame, station, config),
        StationClass::Intermediate => intermediate_station_marker(frame, station, config),
    }
}

fn labelled(kind: MarkerKind, station: f64, bundle: GeometryBundle, config: &MarkerConfig) -> Result<Marker> {
    let style = config.station_text_style()?;
    let label = VectorizeText::number(station, style).execute()?;

    let attributes = Attributes::new()
        .with("StationValue", station)
        .with("DisplayText", label.text.clone())
        .with("MarkerType", bundle.kind().as_str())
        .with("VertexCount", i64::try_from(bundle.profile.len()).unwrap_or(i64::MAX))
        .with("IsTerminal", kind == MarkerKind::TerminalStation)
        .with("TextHeight", style.height())
        .with("Color", bundle.color.name());

    Ok(Marker {
        kind,
        station,
        bundle,
        label: Some(label),
        label_color: config.text_color,
        attributes,
    })
}
