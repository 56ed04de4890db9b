pub mod analysis;
pub mod shaping;

pub use analysis::DetectSlopeChanges;
pub use shaping::Extrude;
