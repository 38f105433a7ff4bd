/// Basic example: convert a synthetic test image to ASCII art
///
/// This builds a radial gradient in memory and prints the rendering.
use im2ascii::{RenderConfig, convert_image};
use image::{Rgb, RgbImage};

fn main() {
    let width = 64;
    let height = 64;
    let mut img = RgbImage::new(width, height);

    // Bright disc on a dark background
    let center_x = width as f32 / 2.0;
    let center_y = height as f32 / 2.0;
    let radius = 24.0;

    for y in 0..height {
        for x in 0..width {
            let dx = x as f32 - center_x;
            let dy = y as f32 - center_y;
            let dist = (dx * dx + dy * dy).sqrt();

            let value = if dist < radius {
                (255.0 * (1.0 - dist / radius)) as u8
            } else {
                0
            };
            img.put_pixel(x, y, Rgb([value, value, value]));
        }
    }

    let config = RenderConfig::with_width(64);
    let text = convert_image(&img, &config).expect("conversion failed");

    println!("{text}");
}
