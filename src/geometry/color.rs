use crate::error::{ColorError, Result};

/// Flat surface color with channels in `[0, 1]`.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Rgb {
    pub r: f64,
    pub g: f64,
    pub b: f64,
}

impl Rgb {
    pub const GREEN: Self = Self::new(0.0, 0.8, 0.0);
    pub const RED: Self = Self::new(1.0, 0.0, 0.0);
    pub const ORANGE: Self = Self::new(1.0, 0.5, 0.0);
    pub const BLACK: Self = Self::new(0.0, 0.0, 0.0);
    pub const DARK_BLUE: Self = Self::new(0.0, 0.0, 0.8);

    /// Creates a color without validating its channels; see [`Rgb::validate`].
    #[must_use]
    pub const fn new(r: f64, g: f64, b: f64) -> Self {
        Self { r, g, b }
    }

    /// Checks that every channel lies in `[0, 1]`.
    ///
    /// # Errors
    ///
    /// Returns [`ColorError::ChannelOutOfRange`] for the first offending
    /// channel (NaN included).
    pub fn validate(&self) -> Result<()> {
        for (channel, value) in [("red", self.r), ("green", self.g), ("blue", self.b)] {
            if !(0.0..=1.0).contains(&value) {
                return Err(ColorError::ChannelOutOfRange { channel, value }.into());
            }
        }
        Ok(())
    }

    /// Display name: `"Green"`, `"Red"`, `"Orange"`, `"Black"` or `"DarkBlue"` for
    /// the named colors, `rgb(r, g, b)` otherwise.
    #[must_use]
    pub fn name(&self) -> String {
        const NAMED: [(Rgb, &str); 5] = [
            (Rgb::GREEN, "Green"),
            (Rgb::RED, "Red"),
            (Rgb::ORANGE, "Orange"),
            (Rgb::BLACK, "Black"),
            (Rgb::DARK_BLUE, "DarkBlue"),
        ];
        NAMED
            .iter()
            .find(|(color, _)| color == self)
            .map_or_else(
                || format!("rgb({}, {}, {})", self.r, self.g, self.b),
                |(_, name)| (*name).to_string(),
            )
    }
}
