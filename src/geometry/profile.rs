use std::f64::consts::TAU;

use crate::error::{GeometryError, Result};
use crate::math::{require_positive, Point2};

/// Default number of polygon segments approximating a circle.
pub const DEFAULT_CIRCLE_SEGMENTS: usize = 16;

/// Fewest segments accepted for a circle approximation.
pub const MIN_CIRCLE_SEGMENTS: usize = 12;

/// Arrow shaft width as a fraction of the arrow width.
const ARROW_SHAFT_WIDTH_RATIO: f64 = 0.4;

/// Arrow head length as a fraction of the arrow length.
const ARROW_HEAD_LENGTH_RATIO: f64 = 0.4;

/// Shape family of a [`Profile`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ProfileKind {
    Triangle,
    Circle,
    Arrow,
}

impl ProfileKind {
    /// Stable name used in marker attributes.
    #[must_use]
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Triangle => "Triangle",
            Self::Circle => "Circle",
            Self::Arrow => "Arrow",
        }
    }
}

/// A closed, counter-clockwise 2D polygon; the last vertex connects back to the first.
#[derive(Debug, Clone, PartialEq)]
pub struct Profile {
    kind: ProfileKind,
    vertices: Vec<Point2>,
}

impl Profile {
    /// Returns the shape family.
    #[must_use]
    pub fn kind(&self) -> ProfileKind {
        self.kind
    }

    /// Returns the polygon vertices in counter-clockwise order.
    #[must_use]
    pub fn vertices(&self) -> &[Point2] {
        &self.vertices
    }

    /// Number of vertices.
    #[must_use]
    pub fn len(&self) -> usize {
        self.vertices.len()
    }

    /// Always `false`; profiles have at least three vertices.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.vertices.is_empty()
    }

    /// Iterates the closed outline as `(start, end)` edges, including the closing edge.
    pub fn edges(&self) -> impl Iterator<Item = (Point2, Point2)> + '_ {
        let n = self.vertices.len();
        (0..n).map(move |i| (self.vertices[i], self.vertices[(i + 1) % n]))
    }
}

/// Isosceles triangle, tip up, base centered on the local origin.
///
/// Vertices: `(-w, 0), (w, 0), (0, h)`.
///
/// # Errors
///
/// Returns [`GeometryError::NonPositive`] if either dimension is not positive.
pub fn triangle(half_width: f64, height: f64) -> Result<Profile> {
    let w = require_positive("triangle half-width", half_width)?;
    let h = require_positive("triangle height", height)?;
    Ok(Profile {
        kind: ProfileKind::Triangle,
        vertices: vec![Point2::new(-w, 0.0), Point2::new(w, 0.0), Point2::new(0.0, h)],
    })
}

/// Regular polygon approximating a circle centered on the local origin.
///
/// Vertex `i` sits at angle `2 * pi * i / segments`, starting on the +x axis.
///
/// # Errors
///
/// Returns an error if the radius is not positive or `segments` is below
/// [`MIN_CIRCLE_SEGMENTS`].
#[allow(clippy::cast_precision_loss)]
pub fn circle(radius: f64, segments: usize) -> Result<Profile> {
    let r = require_positive("circle radius", radius)?;
    if segments < MIN_CIRCLE_SEGMENTS {
        return Err(GeometryError::TooFewSegments {
            segments,
            min: MIN_CIRCLE_SEGMENTS,
        }
        .into());
    }
    let vertices = (0..segments)
        .map(|i| {
            let theta = TAU * i as f64 / segments as f64;
            Point2::new(r * theta.cos(), r * theta.sin())
        })
        .collect();
    Ok(Profile {
        kind: ProfileKind::Circle,
        vertices,
    })
}

/// Forward-pointing dart: a rectangular shaft with a triangular head.
///
/// The tail sits on the local origin and the tip at `(length, 0)`; the
/// shaft is `0.4 * width` wide and the head `0.4 * length` long.
///
/// # Errors
///
/// Returns [`GeometryError::NonPositive`] if either dimension is not positive.
pub fn arrow(length: f64, width: f64) -> Result<Profile> {
    let length = require_positive("arrow length", length)?;
    let width = require_positive("arrow width", width)?;

    let shaft = width * ARROW_SHAFT_WIDTH_RATIO * 0.5;
    let head = width * 0.5;
    let neck = length * (1.0 - ARROW_HEAD_LENGTH_RATIO);

    Ok(Profile {
        kind: ProfileKind::Arrow,
        vertices: vec![
            Point2::new(0.0, -shaft),
            Point2::new(neck, -shaft),
            Point2::new(neck, -head),
            Point2::new(length, 0.0),
            Point2::new(neck, head),
            Point2::new(neck, shaft),
            Point2::new(0.0, shaft),
        ],
    })
}
