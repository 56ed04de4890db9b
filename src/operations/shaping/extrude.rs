use crate::error::{GeometryError, Result};
use crate::geometry::{GeometryBundle, Profile, Rgb};
use crate::math::polygon_2d::is_counter_clockwise;
use crate::math::{require_positive, ExtrusionAxis, Frame, TOLERANCE};

/// Sweeps a profile along one axis of a frame to describe a solid.
///
/// No placement is applied: the resulting bundle keeps the profile in its
/// local coordinates and records only the sweep direction.
pub struct Extrude {
    profile: Profile,
    thickness: f64,
    axis: ExtrusionAxis,
    color: Rgb,
}

impl Extrude {
    /// Creates a new `Extrude` operation.
    #[must_use]
    pub fn new(profile: Profile, thickness: f64, axis: ExtrusionAxis, color: Rgb) -> Self {
        Self {
            profile,
            thickness,
            axis,
            color,
        }
    }

    /// Executes the extrusion in `frame`, producing the geometry bundle.
    ///
    /// # Errors
    ///
    /// Returns [`crate::Error::InvalidGeometry`] if the thickness is not
    /// positive or the profile is not a counter-clockwise polygon, and
    /// [`crate::Error::InvalidColor`] if a color channel is outside `[0, 1]`.
    pub fn execute(self, frame: &Frame) -> Result<GeometryBundle> {
        let thickness = require_positive("extrusion thickness", self.thickness)?;
        self.color.validate()?;

        if !is_counter_clockwise(self.profile.vertices()) {
            return Err(GeometryError::Degenerate(format!(
                "{} profile must be counter-clockwise with non-zero area",
                self.profile.kind().as_str()
            ))
            .into());
        }

        let direction = frame.axis(self.axis);
        if (direction.norm() - 1.0).abs() > TOLERANCE.sqrt() {
            return Err(GeometryError::Degenerate("extrusion axis must be unit length".into()).into());
        }

        Ok(GeometryBundle {
            profile: self.profile,
            thickness,
            axis: self.axis,
            direction,
            color: self.color,
        })
    }
}
