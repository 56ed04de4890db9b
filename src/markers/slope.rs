use crate::alignment::{GradeSample, SegmentType, SlopeChangeEvent};
use crate::config::MarkerConfig;
use crate::error::Result;
use crate::geometry::{arrow, circle};
use crate::math::Frame;
use crate::operations::Extrude;
use crate::text::VectorizeText;

use super::{Attributes, Marker, MarkerKind};

/// Orange circle at a grade discontinuity, labelled with the outgoing grade in percent.
///
/// # Errors
///
/// Returns an error if the slope marker or slope text configuration is
/// invalid, or a grade or station is not finite.
pub fn slope_change_marker(frame: &Frame, event: &SlopeChangeEvent, config: &MarkerConfig) -> Result<Marker> {
    let label = VectorizeText::number(event.to_grade * 100.0, config.slope_text_style()?).execute()?;

    let profile = circle(config.slope_marker_radius, config.circle_segments)?;
    let bundle = Extrude::new(
        profile,
        config.slope_marker_thickness,
        MarkerKind::SlopeChange.axis(),
        config.slope_marker_color,
    )
    .execute(frame)?;

    let mut attributes = Attributes::new()
        .with("StationNumber", event.station)
        .with("FromGradePercent", event.from_grade * 100.0)
        .with("ToGradePercent", event.to_grade * 100.0)
        .with("FromGradeDecimal", event.from_grade)
        .with("ToGradeDecimal", event.to_grade)
        .with("GradeChange", event.grade_change() * 100.0)
        .with("HeightAboveDatum", event.height)
        .with("ChangeType", event.change_type.as_str())
        .with("MarkerColor", bundle.color.name());
    if let Some(name) = &event.label {
        attributes.set("EventLabel", name.as_str());
    }

    Ok(Marker {
        kind: MarkerKind::SlopeChange,
        station: event.station,
        bundle,
        label: Some(label),
        label_color: config.slope_text_color,
        attributes,
    })
}

/// Arrow pointing along the direction of travel, green for grades `>= 0`
/// and red for negative grades, labelled with the grade in percent.
///
/// # Errors
///
/// Returns an error if the arrow or slope text configuration is invalid, or
/// the grade is not finite.
pub fn directional_arrow_marker(
    frame: &Frame,
    sample: impl Into<GradeSample>,
    config: &MarkerConfig,
) -> Result<Marker> {
    let sample = sample.into();
    let label = VectorizeText::number(sample.grade * 100.0, config.slope_text_style()?).execute()?;

    let upward = sample.grade >= 0.0;
    let color = if upward {
        config.upward_color
    } else {
        config.downward_color
    };

    let profile = arrow(config.arrow_length, config.arrow_width)?;
    let bundle = Extrude::new(profile, config.arrow_thickness, MarkerKind::DirectionalArrow.axis(), color)
        .execute(frame)?;

    let attributes = Attributes::new()
        .with("StationNumber", sample.station)
        .with("GradePercent", sample.grade * 100.0)
        .with("GradeDecimal", sample.grade)
        .with("HeightAboveDatum", sample.height)
        .with("SegmentType", sample.segment_type.map_or("Unknown", SegmentType::as_str))
        .with("SlopeDirection", if upward { "Upward" } else { "Downward" })
        .with("IsUpward", upward)
        .with("ArrowColor", color.name());

    Ok(Marker {
        kind: MarkerKind::DirectionalArrow,
        station: sample.station,
        bundle,
        label: Some(label),
        label_color: config.slope_text_color,
        attributes,
    })
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;
    use crate::alignment::{ChangeType, KnownSlopeChange};
    use crate::geometry::{ProfileKind, Rgb};
    use crate::markers::AttributeValue;
    use crate::math::{ExtrusionAxis, Point3, Vector2, Vector3};
    use crate::Error;
    use approx::assert_relative_eq;

    fn frame() -> Frame {
        Frame::new(Point3::new(0.0, 0.0, 3.0), Vector2::new(1.0, 0.0)).unwrap()
    }

    fn event() -> SlopeChangeEvent {
        SlopeChangeEvent {
            station: 106.86,
            from_grade: 0.0202,
            to_grade: -0.04,
            height: 3.632,
            change_type: ChangeType::CurveBoundary,
            label: None,
        }
    }

    fn real(marker: &Marker, name: &str) -> f64 {
        marker.attributes.get(name).and_then(AttributeValue::as_real).unwrap()
    }

    fn text<'a>(marker: &'a Marker, name: &str) -> &'a str {
        marker.attributes.get(name).and_then(AttributeValue::as_label).unwrap()
    }

    #[test]
    fn slope_change_marker_shape_and_attributes() {
        let config = MarkerConfig::default();
        let marker = slope_change_marker(&frame(), &event(), &config).unwrap();

        assert_eq!(marker.kind, MarkerKind::SlopeChange);
        assert_eq!(marker.bundle.kind(), ProfileKind::Circle);
        assert_eq!(marker.bundle.axis, ExtrusionAxis::Perpendicular);
        assert_eq!(marker.bundle.color, Rgb::ORANGE);
        assert_relative_eq!(marker.bundle.thickness, 0.05);
        assert_relative_eq!(marker.bundle.profile.vertices()[0].x, 0.4);

        assert_relative_eq!(real(&marker, "StationNumber"), 106.86);
        assert_relative_eq!(real(&marker, "FromGradePercent"), 2.02, epsilon = 1e-12);
        assert_relative_eq!(real(&marker, "ToGradePercent"), -4.0, epsilon = 1e-12);
        assert_relative_eq!(real(&marker, "ToGradeDecimal"), -0.04);
        assert_relative_eq!(real(&marker, "GradeChange"), -6.02, epsilon = 1e-12);
        assert_relative_eq!(real(&marker, "HeightAboveDatum"), 3.632);
        assert_eq!(text(&marker, "ChangeType"), "curve-boundary");
        assert_eq!(text(&marker, "MarkerColor"), "Orange");
        assert!(marker.attributes.get("EventLabel").is_none());

        let label = marker.label.as_ref().unwrap();
        assert_eq!(label.text, "-4");
        assert_relative_eq!(label.style.height(), 0.5);
        assert_eq!(marker.label_color, Rgb::DARK_BLUE);
    }

    #[test]
    fn known_event_keeps_its_label() {
        let config = MarkerConfig::default();
        let known: SlopeChangeEvent = KnownSlopeChange::new(28.36, -0.03, 0.0202, 2.93)
            .with_label("sag")
            .into();
        let marker = slope_change_marker(&frame(), &known, &config).unwrap();
        assert_eq!(text(&marker, "ChangeType"), "known");
        assert_eq!(text(&marker, "EventLabel"), "sag");
        assert_eq!(marker.label.unwrap().text, "2.0");
    }

    #[test]
    fn arrow_color_follows_grade_sign() {
        let config = MarkerConfig::default();
        for (grade, color, direction) in [
            (0.0202, Rgb::GREEN, "Upward"),
            (-0.04, Rgb::RED, "Downward"),
            (0.0, Rgb::GREEN, "Upward"),
        ] {
            let marker = directional_arrow_marker(&frame(), GradeSample::new(50.0, grade, 3.0), &config).unwrap();
            assert_eq!(marker.bundle.color, color, "grade {grade}");
            assert_eq!(text(&marker, "SlopeDirection"), direction);
            assert_eq!(marker.attributes.get("IsUpward"), Some(&AttributeValue::Boolean(direction == "Upward")));
        }
    }

    #[test]
    fn arrow_points_along_tangent() {
        let config = MarkerConfig::default();
        let sample = GradeSample {
            segment_type: Some(SegmentType::Curve),
            ..GradeSample::new(120.0, -0.04, 4.1)
        };
        let marker = directional_arrow_marker(&frame(), sample, &config).unwrap();

        assert_eq!(marker.kind, MarkerKind::DirectionalArrow);
        assert_eq!(marker.bundle.kind(), ProfileKind::Arrow);
        assert_eq!(marker.bundle.axis, ExtrusionAxis::Tangent);
        assert_relative_eq!(marker.bundle.direction, Vector3::x());
        assert_relative_eq!(real(&marker, "GradePercent"), -4.0, epsilon = 1e-12);
        assert_relative_eq!(real(&marker, "GradeDecimal"), -0.04);
        assert_eq!(text(&marker, "SegmentType"), "Vertical Curve");
        assert_eq!(text(&marker, "ArrowColor"), "Red");
        assert_eq!(marker.label.unwrap().text, "-4");
    }

    #[test]
    fn arrow_from_event_uses_outgoing_grade() {
        let config = MarkerConfig::default();
        let marker = directional_arrow_marker(&frame(), &event(), &config).unwrap();
        assert_eq!(marker.bundle.color, Rgb::RED);
        assert_eq!(text(&marker, "SegmentType"), "Unknown");
    }

    #[test]
    fn builders_are_idempotent() {
        let config = MarkerConfig::default();
        assert_eq!(
            slope_change_marker(&frame(), &event(), &config).unwrap(),
            slope_change_marker(&frame(), &event(), &config).unwrap()
        );
        let sample = GradeSample::new(10.0, 0.011, 1.2);
        assert_eq!(
            directional_arrow_marker(&frame(), sample, &config).unwrap(),
            directional_arrow_marker(&frame(), sample, &config).unwrap()
        );
    }

    #[test]
    fn non_finite_grade_fails() {
        let config = MarkerConfig::default();
        let err = directional_arrow_marker(&frame(), GradeSample::new(10.0, f64::NAN, 1.0), &config).unwrap_err();
        assert!(matches!(err, Error::InvalidValue(_)));
    }
}
