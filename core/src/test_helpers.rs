use std::fs;
use std::path::Path;

use image::{ImageFormat, Rgb, RgbImage, Rgba, RgbaImage};

/// Opaque gradient, saved in `format`.
pub fn write_rgb(path: &Path, format: ImageFormat) {
    let img = RgbImage::from_fn(32, 24, |x, y| Rgb([(x * 8) as u8, (y * 10) as u8, 128]));
    img.save_with_format(path, format).unwrap();
}

/// PNG whose left half is fully transparent and right half opaque.
pub fn write_rgba_png(path: &Path) {
    let img = RgbaImage::from_fn(32, 24, |x, _| {
        let alpha = if x < 16 { 0 } else { 255 };
        Rgba([200, 40, 40, alpha])
    });
    img.save_with_format(path, ImageFormat::Png).unwrap();
}

pub fn write_junk(path: &Path) {
    fs::write(path, b"definitely not an image").unwrap();
}
