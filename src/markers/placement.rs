use crate::config::MarkerConfig;
use crate::error::{GeometryError, Result};
use crate::math::{ExtrusionAxis, Frame, Matrix4, Point3, Vector3};

use super::MarkerKind;

/// Local-to-world transform of a marker.
///
/// Local X runs along the marker's extrusion axis, local Z is world up and
/// local Y completes the right-handed basis (`Z x X`). The origin is the
/// frame origin lifted by the marker's height offset.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Placement {
    matrix: Matrix4,
}

impl Placement {
    /// Placement with an explicit reference axis and vertical lift.
    ///
    /// # Errors
    ///
    /// Returns [`GeometryError::Degenerate`] if `axis` is vertical or
    /// `height_offset` is not finite.
    pub fn new(frame: &Frame, axis: ExtrusionAxis, height_offset: f64) -> Result<Self> {
        if axis == ExtrusionAxis::Vertical {
            return Err(GeometryError::Degenerate("placement reference axis cannot be vertical".into()).into());
        }
        if !height_offset.is_finite() {
            return Err(GeometryError::Degenerate(format!("height offset must be finite, got {height_offset}")).into());
        }

        let z = frame.vertical();
        let x = frame.axis(axis);
        let y = z.cross(&x);
        let origin = frame.origin() + z * height_offset;

        Ok(Self {
            matrix: Matrix4::from_columns(&[
                x.to_homogeneous(),
                y.to_homogeneous(),
                z.to_homogeneous(),
                origin.to_homogeneous(),
            ]),
        })
    }

    /// Placement of a marker of `kind`, using its axis and configured height offset.
    ///
    /// # Errors
    ///
    /// Returns [`GeometryError::Degenerate`] if the configured offset is not finite.
    pub fn for_marker(frame: &Frame, kind: MarkerKind, config: &MarkerConfig) -> Result<Self> {
        Self::new(frame, kind.axis(), kind.height_offset(config))
    }

    #[must_use]
    pub fn matrix(&self) -> &Matrix4 {
        &self.matrix
    }

    #[must_use]
    pub fn origin(&self) -> Point3 {
        Point3::new(self.matrix[(0, 3)], self.matrix[(1, 3)], self.matrix[(2, 3)])
    }

    /// Local X axis in world coordinates.
    #[must_use]
    pub fn x_axis(&self) -> Vector3 {
        self.matrix.fixed_view::<3, 1>(0, 0).into_owned()
    }

    /// Local Y axis in world coordinates.
    #[must_use]
    pub fn y_axis(&self) -> Vector3 {
        self.matrix.fixed_view::<3, 1>(0, 1).into_owned()
    }

    /// Local Z axis in world coordinates.
    #[must_use]
    pub fn z_axis(&self) -> Vector3 {
        self.matrix.fixed_view::<3, 1>(0, 2).into_owned()
    }

    /// Maps a point from marker-local to world coordinates.
    #[must_use]
    pub fn transform_point(&self, point: &Point3) -> Point3 {
        self.matrix.transform_point(point)
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;
    use crate::math::Vector2;
    use approx::assert_relative_eq;

    fn frame() -> Frame {
        Frame::new(Point3::new(100.0, 50.0, 3.0), Vector2::new(1.0, 0.0)).unwrap()
    }

    #[test]
    fn station_markers_face_across_the_alignment() {
        let config = MarkerConfig::default();
        let p = Placement::for_marker(&frame(), MarkerKind::IntermediateStation, &config).unwrap();
        assert_relative_eq!(p.origin(), Point3::new(100.0, 50.0, 3.5));
        assert_relative_eq!(p.x_axis(), Vector3::y());
        assert_relative_eq!(p.y_axis(), -Vector3::x());
        assert_relative_eq!(p.z_axis(), Vector3::z());
    }

    #[test]
    fn arrows_point_along_travel() {
        let config = MarkerConfig::default();
        let p = Placement::for_marker(&frame(), MarkerKind::DirectionalArrow, &config).unwrap();
        assert_relative_eq!(p.origin(), Point3::new(100.0, 50.0, 3.8), epsilon = 1e-12);
        assert_relative_eq!(p.x_axis(), Vector3::x());
        assert_relative_eq!(p.y_axis(), Vector3::y());

        // Arrow tip at local (length, 0, 0) lands ahead of the origin.
        let tip = p.transform_point(&Point3::new(0.5, 0.0, 0.0));
        assert_relative_eq!(tip, Point3::new(100.5, 50.0, 3.8), epsilon = 1e-12);
    }

    #[test]
    fn slope_markers_use_their_own_offset() {
        let config = MarkerConfig::default();
        let p = Placement::for_marker(&frame(), MarkerKind::SlopeChange, &config).unwrap();
        assert_relative_eq!(p.origin().z, 4.0);
    }

    #[test]
    fn basis_is_right_handed() {
        let frame = Frame::new(Point3::origin(), Vector2::new(0.3, -0.7)).unwrap();
        let p = Placement::new(&frame, ExtrusionAxis::Perpendicular, 0.0).unwrap();
        assert_relative_eq!(p.x_axis().cross(&p.y_axis()), p.z_axis(), epsilon = 1e-12);
        assert_relative_eq!(p.matrix().determinant(), 1.0, epsilon = 1e-12);
    }

    #[test]
    fn invalid_placements_fail() {
        assert!(Placement::new(&frame(), ExtrusionAxis::Vertical, 0.0).is_err());
        assert!(Placement::new(&frame(), ExtrusionAxis::Tangent, f64::NAN).is_err());
    }
}
