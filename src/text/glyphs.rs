//! Stroke definitions for the label character set.
//!
//! Each glyph is a list of polylines in a unit box: x and y in `[0, 1]`,
//! origin at the bottom-left, y up.

type Polyline = &'static [(f64, f64)];

const ZERO: &[Polyline] = &[&[(0.0, 0.0), (1.0, 0.0), (1.0, 1.0), (0.0, 1.0), (0.0, 0.0)]];
const ONE: &[Polyline] = &[
    &[(0.5, 0.0), (0.5, 1.0)],
    &[(0.2, 0.8), (0.5, 1.0)],
    &[(0.3, 0.0), (0.7, 0.0)],
];
const TWO: &[Polyline] = &[&[
    (0.0, 0.7),
    (0.0, 1.0),
    (1.0, 1.0),
    (1.0, 0.5),
    (0.0, 0.5),
    (0.0, 0.0),
    (1.0, 0.0),
]];
const THREE: &[Polyline] = &[
    &[(0.0, 1.0), (1.0, 1.0), (1.0, 0.6), (0.5, 0.6)],
    &[(1.0, 0.6), (1.0, 0.0), (0.0, 0.0)],
];
const FOUR: &[Polyline] = &[&[(0.0, 1.0), (0.0, 0.5), (1.0, 0.5)], &[(0.7, 0.0), (0.7, 1.0)]];
const FIVE: &[Polyline] = &[&[
    (1.0, 1.0),
    (0.0, 1.0),
    (0.0, 0.5),
    (1.0, 0.5),
    (1.0, 0.0),
    (0.0, 0.0),
]];
const SIX: &[Polyline] = &[&[
    (1.0, 1.0),
    (0.0, 1.0),
    (0.0, 0.0),
    (1.0, 0.0),
    (1.0, 0.5),
    (0.0, 0.5),
]];
const SEVEN: &[Polyline] = &[&[(0.0, 1.0), (1.0, 1.0), (1.0, 0.0)]];
const EIGHT: &[Polyline] = &[
    &[(0.0, 0.0), (1.0, 0.0), (1.0, 1.0), (0.0, 1.0), (0.0, 0.0)],
    &[(0.0, 0.5), (1.0, 0.5)],
];
const NINE: &[Polyline] = &[&[
    (0.0, 0.0),
    (1.0, 0.0),
    (1.0, 1.0),
    (0.0, 1.0),
    (0.0, 0.5),
    (1.0, 0.5),
]];
const POINT: &[Polyline] = &[&[(0.4, 0.0), (0.6, 0.0), (0.6, 0.2), (0.4, 0.2), (0.4, 0.0)]];
const MINUS: &[Polyline] = &[&[(0.1, 0.5), (0.9, 0.5)]];

/// Returns the unit-box polylines of `ch`, or `None` if it has no definition.
#[must_use]
pub fn polylines(ch: char) -> Option<&'static [Polyline]> {
    let glyph = match ch {
        '0' => ZERO,
        '1' => ONE,
        '2' => TWO,
        '3' => THREE,
        '4' => FOUR,
        '5' => FIVE,
        '6' => SIX,
        '7' => SEVEN,
        '8' => EIGHT,
        '9' => NINE,
        '.' => POINT,
        '-' => MINUS,
        _ => return None,
    };
    Some(glyph)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn every_label_character_is_defined() {
        for ch in "0123456789.-".chars() {
            let glyph = polylines(ch).unwrap_or_default();
            assert!(!glyph.is_empty(), "{ch} has no strokes");
            for line in glyph {
                assert!(line.len() >= 2, "{ch} has a degenerate polyline");
                for &(x, y) in *line {
                    assert!((0.0..=1.0).contains(&x) && (0.0..=1.0).contains(&y));
                }
            }
        }
    }

    #[test]
    fn other_characters_are_rejected() {
        for ch in ['a', ' ', '%', ',', '+'] {
            assert!(polylines(ch).is_none(), "{ch} should have no strokes");
        }
    }
}
