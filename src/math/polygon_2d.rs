use super::{Point2, TOLERANCE};

/// Computes the signed area of a closed polygon (shoelace formula).
///
/// Positive for counter-clockwise, negative for clockwise.
#[must_use]
pub fn signed_area(points: &[Point2]) -> f64 {
    let n = points.len();
    if n < 3 {
        return 0.0;
    }
    let mut sum = 0.0;
    for i in 0..n {
        let j = (i + 1) % n;
        sum += points[i].x * points[j].y - points[j].x * points[i].y;
    }
    sum * 0.5
}

/// Returns `true` if the polygon winds counter-clockwise with non-zero area.
#[must_use]
pub fn is_counter_clockwise(points: &[Point2]) -> bool {
    signed_area(points) > TOLERANCE
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    fn square_ccw() -> Vec<Point2> {
        vec![
            Point2::new(0.0, 0.0),
            Point2::new(1.0, 0.0),
            Point2::new(1.0, 1.0),
            Point2::new(0.0, 1.0),
        ]
    }

    #[test]
    fn signed_area_ccw_square() {
        let area = signed_area(&square_ccw());
        assert!((area - 1.0).abs() < TOLERANCE);
        assert!(is_counter_clockwise(&square_ccw()));
    }

    #[test]
    fn signed_area_cw_square() {
        let pts: Vec<Point2> = square_ccw().into_iter().rev().collect();
        let area = signed_area(&pts);
        assert!((area + 1.0).abs() < TOLERANCE);
        assert!(!is_counter_clockwise(&pts));
    }

    #[test]
    fn signed_area_degenerate() {
        assert!(signed_area(&[Point2::new(0.0, 0.0)]).abs() < TOLERANCE);
        assert!(signed_area(&[]).abs() < TOLERANCE);
    }
}
