//! Luminance-to-character lookup table.
//!
//! Luminance is quantized into contiguous buckets of width 12; each bucket
//! threshold (0, 12, .. 252) owns one display character. The table is a
//! fixed-size array indexed directly by `value / 12`, so every 8-bit
//! luminance value resolves to exactly one glyph.

use crate::error::{Error, Result};

/// Width of one luminance bucket.
pub const BUCKET_SIZE: u8 = 12;

/// Highest defined threshold; values in [252, 255] share its glyph.
pub const MAX_THRESHOLD: u8 = 252;

/// Number of buckets covering [0, 255].
pub const GLYPH_COUNT: usize = 256 / BUCKET_SIZE as usize + 1;

/// Glyphs ordered darkest to brightest, one per threshold 0, 12, .. 252.
const GLYPHS: [char; GLYPH_COUNT] = [
    ' ', // 0: darkest
    '.', // 12
    '\'', // 24
    ':', // 36
    ';', // 48
    '!', // 60
    '~', // 72
    '-', // 84
    '=', // 96
    '+', // 108
    '*', // 120
    'i', // 132
    'l', // 144
    't', // 156
    'o', // 168
    'x', // 180
    'e', // 192
    'O', // 204
    'Z', // 216
    '8', // 228
    '%', // 240
    '#', // 252: brightest
];

/// Ordered set of (threshold, character) pairs used for quantization.
///
/// Built once per conversion and passed explicitly to the character mapper;
/// there is no process-wide palette state.
#[derive(Debug, Clone)]
pub struct Palette {
    glyphs: [char; GLYPH_COUNT],
}

impl Default for Palette {
    fn default() -> Self {
        Self { glyphs: GLYPHS }
    }
}

impl Palette {
    /// Quantize a luminance value to its bucket threshold.
    ///
    /// Thresholds ascend in steps of [`BUCKET_SIZE`] and are clamped to
    /// [`MAX_THRESHOLD`]. Idempotent: `bucket(bucket(v)) == bucket(v)`.
    pub fn bucket(value: u8) -> u8 {
        ((value / BUCKET_SIZE) * BUCKET_SIZE).min(MAX_THRESHOLD)
    }

    /// Look up the display character for a luminance value.
    ///
    /// Total over all of [0, 255]; the checked indexing exists so a gap in
    /// the table surfaces as [`Error::PaletteGap`] instead of a panic.
    pub fn glyph(&self, value: u8) -> Result<char> {
        let bucket = Self::bucket(value);
        let index = (bucket / BUCKET_SIZE) as usize;
        self.glyphs
            .get(index)
            .copied()
            .ok_or(Error::PaletteGap { bucket })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_bucket_boundaries() {
        assert_eq!(Palette::bucket(0), 0);
        assert_eq!(Palette::bucket(11), 0);
        assert_eq!(Palette::bucket(12), 12);
        assert_eq!(Palette::bucket(251), 240);
        assert_eq!(Palette::bucket(252), 252);
        assert_eq!(Palette::bucket(255), 252);
    }

    #[test]
    fn test_bucket_idempotent() {
        for v in 0..=255u8 {
            assert_eq!(Palette::bucket(Palette::bucket(v)), Palette::bucket(v));
        }
    }

    #[test]
    fn test_glyph_total_over_all_values() {
        let palette = Palette::default();
        for v in 0..=255u8 {
            assert!(palette.glyph(v).is_ok(), "no glyph for {v}");
        }
    }

    #[test]
    fn test_glyph_darkest_is_space() {
        let palette = Palette::default();
        assert_eq!(palette.glyph(0).unwrap(), ' ');
        assert_eq!(palette.glyph(11).unwrap(), ' ');
    }

    #[test]
    fn test_glyph_brightest_is_hash() {
        let palette = Palette::default();
        assert_eq!(palette.glyph(252).unwrap(), '#');
        assert_eq!(palette.glyph(255).unwrap(), '#');
    }

    #[test]
    fn test_glyphs_are_ascii() {
        let palette = Palette::default();
        for v in 0..=255u8 {
            assert!(palette.glyph(v).unwrap().is_ascii());
        }
    }

    #[test]
    fn test_same_bucket_same_glyph() {
        let palette = Palette::default();
        for v in 0..=255u8 {
            let at_threshold = palette.glyph(Palette::bucket(v)).unwrap();
            assert_eq!(palette.glyph(v).unwrap(), at_threshold);
        }
    }
}
