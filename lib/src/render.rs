//! Character mapping and row assembly.

use image::GrayImage;
use rayon::prelude::*;

use crate::error::Result;
use crate::palette::Palette;

/// Map every luminance cell to its palette glyph and assemble the text.
///
/// Rows are joined by a single `\n` with no trailing newline, so the output
/// has exactly as many lines as the grid has rows and every line is exactly
/// as wide as the grid. Rows are independent, so they are mapped in
/// parallel.
///
/// # Arguments
/// * `gray` - Resized grayscale grid
/// * `palette` - Luminance-to-glyph table
///
/// # Returns
/// The full ASCII rendering as one string
pub fn to_text(gray: &GrayImage, palette: &Palette) -> Result<String> {
    let (width, height) = gray.dimensions();

    let rows = (0..height)
        .into_par_iter()
        .map(|y| {
            let mut line = String::with_capacity(width as usize);
            for x in 0..width {
                line.push(palette.glyph(gray.get_pixel(x, y)[0])?);
            }
            Ok(line)
        })
        .collect::<Result<Vec<String>>>()?;

    Ok(rows.join("\n"))
}
