//! Geometric annotation kernel for 3D road and rail alignment models.
//!
//! Builds station markers, slope-change markers and directional arrows along
//! an alignment: placement-independent extruded shapes, vector-stroked
//! numeric labels and typed attributes. Persisting the markers in a model
//! format is left to the caller.

pub mod alignment;
pub mod annotate;
pub mod config;
pub mod error;
pub mod geometry;
pub mod markers;
pub mod math;
pub mod operations;
pub mod text;

pub use error::{Error, Result};
