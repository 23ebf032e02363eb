use std::path::Path;

use anyhow::{Context, Result};
use image::RgbImage;

use crate::color::Color;

/// Grid step between sampled pixels. Fixed internally; the selection
/// algorithm only needs a representative subset of the image.
pub const SAMPLE_STRIDE: u32 = 5;

/// Load an image and sample its pixels on the fixed stride.
pub fn load_and_sample(path: &Path) -> Result<Vec<Color>> {
    let img = image::open(path).with_context(|| {
        if !path.exists() {
            format!("file not found: {}", path.display())
        } else {
            format!(
                "unsupported or corrupt image: {}. Supported formats: PNG, JPEG, WebP, BMP, TIFF, GIF",
                path.display()
            )
        }
    })?;

    let rgb_img = img.to_rgb8();
    Ok(sample_pixels(&rgb_img, SAMPLE_STRIDE))
}

/// Walk the image on a fixed stride, column-major (x outer, y inner), and
/// collect each visited pixel as a [`Color`]. Alpha has already been dropped
/// by the RGB8 conversion. Output order is what the greedy selection later
/// keys on, so it must stay deterministic.
pub fn sample_pixels(img: &RgbImage, stride: u32) -> Vec<Color> {
    let (width, height) = img.dimensions();
    let capacity = (width / stride + 1) as usize * (height / stride + 1) as usize;
    let mut colors = Vec::with_capacity(capacity);
    for x in (0..width).step_by(stride as usize) {
        for y in (0..height).step_by(stride as usize) {
            let p = img.get_pixel(x, y);
            colors.push(Color::new(p[0], p[1], p[2]));
        }
    }
    colors
}
