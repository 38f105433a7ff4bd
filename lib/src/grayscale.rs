//! Grayscale reduction.

use image::{GrayImage, Luma, RgbImage};

/// Collapse each RGB pixel to the mean of its channels.
///
/// The mean is `floor((R + G + B) / 3)`, computed in integer arithmetic.
/// Truncation (rather than round-to-nearest) is the fixed policy: the
/// character mapper buckets values in steps of 12, so behavior at bucket
/// boundaries must not drift.
///
/// # Arguments
/// * `img` - Input RGB image
///
/// # Returns
/// Grayscale image of the same dimensions, values in [0, 255]
pub fn to_grayscale(img: &RgbImage) -> GrayImage {
    let (width, height) = img.dimensions();
    let mut output = GrayImage::new(width, height);

    for y in 0..height {
        for x in 0..width {
            let pixel = img.get_pixel(x, y);
            // Sum fits u16: 3 * 255 = 765
            let sum = pixel[0] as u16 + pixel[1] as u16 + pixel[2] as u16;
            output.put_pixel(x, y, Luma([(sum / 3) as u8]));
        }
    }

    output
}

#[cfg(test)]
mod tests {
    use super::*;
    use image::Rgb;

    #[test]
    fn test_grayscale_black() {
        let img = RgbImage::from_pixel(10, 10, Rgb([0, 0, 0]));
        let gray = to_grayscale(&img);
        assert_eq!(gray.get_pixel(0, 0)[0], 0);
    }

    #[test]
    fn test_grayscale_white() {
        let img = RgbImage::from_pixel(10, 10, Rgb([255, 255, 255]));
        let gray = to_grayscale(&img);
        assert_eq!(gray.get_pixel(0, 0)[0], 255);
    }

    #[test]
    fn test_grayscale_truncates() {
        // (1 + 1 + 2) / 3 = 1.33.. -> 1
        let img = RgbImage::from_pixel(1, 1, Rgb([1, 1, 2]));
        assert_eq!(to_grayscale(&img).get_pixel(0, 0)[0], 1);

        // (11 + 11 + 13) / 3 = 11.66.. -> 11, still in the darkest bucket
        let img = RgbImage::from_pixel(1, 1, Rgb([11, 11, 13]));
        assert_eq!(to_grayscale(&img).get_pixel(0, 0)[0], 11);
    }

    #[test]
    fn test_grayscale_within_channel_bounds() {
        let triples = [
            [0u8, 128, 255],
            [10, 20, 30],
            [200, 100, 50],
            [255, 0, 0],
            [7, 7, 8],
        ];

        for rgb in triples {
            let img = RgbImage::from_pixel(1, 1, Rgb(rgb));
            let gray = to_grayscale(&img).get_pixel(0, 0)[0];
            let min = rgb.iter().copied().min().unwrap();
            let max = rgb.iter().copied().max().unwrap();
            assert!(gray >= min && gray <= max, "{gray} outside [{min}, {max}]");
        }
    }

    #[test]
    fn test_grayscale_preserves_dimensions() {
        let img = RgbImage::new(13, 7);
        let gray = to_grayscale(&img);
        assert_eq!(gray.dimensions(), (13, 7));
    }
}
