use im2ascii::{RenderConfig, convert_image};
use image::{Rgb, RgbImage};

fn main() {
    // Input shapes with different aspect corrections
    let test_cases = vec![
        (64, 64, "64x64 (square, ratio 1)"),
        (120, 40, "120x40 (wide, ratio 3)"),
        (40, 120, "40x120 (tall, still ratio 1)"),
        (65, 64, "65x64 (barely wide, ratio 2)"),
    ];

    for (width, height, description) in test_cases {
        println!("Input: {description}");

        // Diagonal gradient pattern
        let mut img = RgbImage::new(width, height);
        for y in 0..height {
            for x in 0..width {
                let gray = ((x + y) % 256) as u8;
                img.put_pixel(x, y, Rgb([gray, gray, gray]));
            }
        }

        let config = RenderConfig::with_width(32);
        let text = convert_image(&img, &config).expect("conversion failed");

        let lines = text.split('\n').count();
        println!("  Output grid: 32x{lines}");
        println!();
    }

    println!("Row count is width * ceil(input_width / input_height):");
    println!("wider-than-tall inputs stretch vertically, everything else is square.");
}
