use crate::error::{Result, ValueError};
use crate::math::Point2;

use super::{format_label, glyphs, Glyph, Stroke, TextGlyphRun, TextStyle};

/// Source of the label text.
enum Source {
    Number(f64),
    Text(String),
}

/// Lays out a label as scaled line strokes.
///
/// Glyph `i` occupies the box `[i * advance, i * advance + char_width] x [0, height]`.
pub struct VectorizeText {
    source: Source,
    style: TextStyle,
}

impl VectorizeText {
    /// Vectorizes `value` formatted with [`format_label`].
    #[must_use]
    pub fn number(value: f64, style: TextStyle) -> Self {
        Self {
            source: Source::Number(value),
            style,
        }
    }

    /// Vectorizes preformatted label text.
    #[must_use]
    pub fn text(text: impl Into<String>, style: TextStyle) -> Self {
        Self {
            source: Source::Text(text.into()),
            style,
        }
    }

    /// Executes the layout.
    ///
    /// # Errors
    ///
    /// Returns [`crate::Error::InvalidValue`] if the number cannot be
    /// formatted, the text is empty, or a character has no stroke definition.
    #[allow(clippy::cast_precision_loss)]
    pub fn execute(self) -> Result<TextGlyphRun> {
        let text = match self.source {
            Source::Number(value) => format_label(value)?,
            Source::Text(text) => text,
        };
        if text.is_empty() {
            return Err(ValueError::EmptyText.into());
        }

        let char_width = self.style.char_width();
        let height = self.style.height();
        let advance = self.style.advance();

        let mut placed = Vec::with_capacity(text.len());
        for (i, ch) in text.chars().enumerate() {
            let lines = glyphs::polylines(ch).ok_or(ValueError::UnsupportedCharacter(ch))?;
            let offset = i as f64 * advance;
            let scale = |(x, y): (f64, f64)| Point2::new(offset + x * char_width, y * height);

            let strokes: Vec<Stroke> = lines
                .iter()
                .flat_map(|line| line.windows(2).map(|pair| [scale(pair[0]), scale(pair[1])]))
                .collect();

            placed.push(Glyph {
                ch,
                offset,
                strokes,
            });
        }

        Ok(TextGlyphRun {
            text,
            style: self.style,
            glyphs: placed,
        })
    }
}
