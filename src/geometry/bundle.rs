use crate::math::{ExtrusionAxis, Vector3};

use super::{Profile, ProfileKind, Rgb};

/// Placement-independent description of a marker solid.
///
/// A profile swept by `thickness` along `direction`, the frame axis named
/// by `axis`, with a flat surface color. Built by
/// [`crate::operations::Extrude`]; never mutated afterwards.
#[derive(Debug, Clone, PartialEq)]
pub struct GeometryBundle {
    pub profile: Profile,
    pub thickness: f64,
    pub axis: ExtrusionAxis,
    /// Unit world vector of `axis` in the frame the bundle was built in.
    pub direction: Vector3,
    pub color: Rgb,
}

impl GeometryBundle {
    /// Shape family of the profile.
    #[must_use]
    pub fn kind(&self) -> ProfileKind {
        self.profile.kind()
    }
}
