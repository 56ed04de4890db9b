use crate::alignment::ReferencePoint;
use crate::error::{GeometryError, Result};

use super::{Point3, Vector2, Vector3, TOLERANCE};

/// One of the three axes of a [`Frame`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ExtrusionAxis {
    /// Direction of travel along the alignment.
    Tangent,
    /// Horizontal, to the left of the direction of travel.
    Perpendicular,
    /// World up.
    Vertical,
}

/// Local orthonormal basis at a point on the alignment.
///
/// `tangent x perpendicular = vertical`; the tangent and perpendicular
/// always lie in the horizontal plane.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Frame {
    origin: Point3,
    tangent: Vector3,
    perpendicular: Vector3,
}

impl Frame {
    /// Creates a frame at `origin` from a horizontal tangent direction.
    ///
    /// The tangent is normalized; its length does not matter.
    ///
    /// # Errors
    ///
    /// Returns [`GeometryError::ZeroVector`] if the tangent is zero-length or
    /// not finite.
    pub fn new(origin: Point3, tangent: Vector2) -> Result<Self> {
        let len = tangent.norm();
        if !len.is_finite() || len < TOLERANCE {
            return Err(GeometryError::ZeroVector.into());
        }
        let t = tangent / len;
        Ok(Self {
            origin,
            tangent: Vector3::new(t.x, t.y, 0.0),
            perpendicular: Vector3::new(-t.y, t.x, 0.0),
        })
    }

    /// Creates a frame from a 3D direction, ignoring its vertical component.
    ///
    /// # Errors
    ///
    /// Returns [`GeometryError::ZeroVector`] if the horizontal part of the
    /// direction is zero-length.
    pub fn from_direction(origin: Point3, direction: Vector3) -> Result<Self> {
        Self::new(origin, Vector2::new(direction.x, direction.y))
    }

    /// Creates the frame of a reference point.
    ///
    /// # Errors
    ///
    /// Returns [`GeometryError::ZeroVector`] if the point's tangent is zero-length.
    pub fn from_reference(point: &ReferencePoint) -> Result<Self> {
        Self::new(point.position, point.tangent)
    }

    /// Returns the frame origin.
    #[must_use]
    pub fn origin(&self) -> &Point3 {
        &self.origin
    }

    /// Returns the unit tangent.
    #[must_use]
    pub fn tangent(&self) -> &Vector3 {
        &self.tangent
    }

    /// Returns the unit perpendicular (tangent rotated 90 degrees counter-clockwise).
    #[must_use]
    pub fn perpendicular(&self) -> &Vector3 {
        &self.perpendicular
    }

    /// Returns world up.
    #[must_use]
    pub fn vertical(&self) -> Vector3 {
        Vector3::z()
    }

    /// Returns the unit vector of the requested axis.
    #[must_use]
    pub fn axis(&self, axis: ExtrusionAxis) -> Vector3 {
        match axis {
            ExtrusionAxis::Tangent => self.tangent,
            ExtrusionAxis::Perpendicular => self.perpendicular,
            ExtrusionAxis::Vertical => self.vertical(),
        }
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    fn origin() -> Point3 {
        Point3::new(10.0, 20.0, 3.0)
    }

    #[test]
    fn axis_aligned_tangent() {
        let frame = Frame::new(origin(), Vector2::new(1.0, 0.0)).unwrap();
        assert_relative_eq!(*frame.tangent(), Vector3::x());
        assert_relative_eq!(*frame.perpendicular(), Vector3::y());
        assert_relative_eq!(frame.vertical(), Vector3::z());
    }

    #[test]
    fn orthonormal_for_many_directions() {
        for i in 0..72 {
            let angle = f64::from(i) * std::f64::consts::TAU / 72.0;
            let scale = 0.01 + f64::from(i);
            let tangent = Vector2::new(angle.cos() * scale, angle.sin() * scale);
            let frame = Frame::new(origin(), tangent).unwrap();

            assert!(frame.tangent().dot(frame.perpendicular()).abs() < 1e-12);
            assert_relative_eq!(frame.tangent().norm(), 1.0, epsilon = 1e-12);
            assert_relative_eq!(frame.perpendicular().norm(), 1.0, epsilon = 1e-12);
            assert_relative_eq!(
                frame.tangent().cross(frame.perpendicular()),
                frame.vertical(),
                epsilon = 1e-12
            );
        }
    }

    #[test]
    fn perpendicular_rotates_left() {
        let frame = Frame::new(origin(), Vector2::new(0.6, 0.8)).unwrap();
        assert_relative_eq!(*frame.perpendicular(), Vector3::new(-0.8, 0.6, 0.0));
    }

    #[test]
    fn zero_tangent_fails() {
        let err = Frame::new(origin(), Vector2::zeros()).unwrap_err();
        assert_eq!(err, crate::Error::InvalidGeometry(GeometryError::ZeroVector));
    }

    #[test]
    fn non_finite_tangent_fails() {
        assert!(Frame::new(origin(), Vector2::new(f64::NAN, 1.0)).is_err());
        assert!(Frame::new(origin(), Vector2::new(f64::INFINITY, 0.0)).is_err());
    }

    #[test]
    fn vertical_component_is_ignored() {
        let frame = Frame::from_direction(origin(), Vector3::new(0.0, 2.0, 5.0)).unwrap();
        assert_relative_eq!(*frame.tangent(), Vector3::y());
        assert!(Frame::from_direction(origin(), Vector3::new(0.0, 0.0, 1.0)).is_err());
    }

    #[test]
    fn axis_lookup() {
        let frame = Frame::new(origin(), Vector2::new(0.0, 1.0)).unwrap();
        assert_eq!(frame.axis(ExtrusionAxis::Tangent), *frame.tangent());
        assert_eq!(frame.axis(ExtrusionAxis::Perpendicular), *frame.perpendicular());
        assert_eq!(frame.axis(ExtrusionAxis::Vertical), Vector3::z());
    }
}
