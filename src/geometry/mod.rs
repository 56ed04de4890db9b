pub mod bundle;
pub mod color;
pub mod profile;

pub use bundle::GeometryBundle;
pub use color::Rgb;
pub use profile::{arrow, circle, triangle, Profile, ProfileKind};
