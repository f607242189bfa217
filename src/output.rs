//! Writing rendered images to disk.

use anyhow::{Context, Result};
use image::{ImageBuffer, Rgb};
use log::info;
use std::path::Path;

pub type HdrImage = ImageBuffer<Rgb<f32>, Vec<f32>>;

/// Quantize a linear channel for display: clamp to [0, 1] and scale to a byte.
///
/// No gamma curve is applied, colours go to the file as the tracer computed them.
pub fn to_byte(channel: f32) -> u8 {
    (channel.clamp(0.0, 1.0) * 255.0).round() as u8
}

pub fn to_ldr(image: &HdrImage) -> ImageBuffer<Rgb<u8>, Vec<u8>> {
    ImageBuffer::from_fn(image.width(), image.height(), |x, y| {
        let pixel = image.get_pixel(x, y);
        Rgb([to_byte(pixel[0]), to_byte(pixel[1]), to_byte(pixel[2])])
    })
}

/// Save an f32 RGB image as an 8-bit PNG.
pub fn save_image_as_png(image: &HdrImage, output_path: impl AsRef<Path>) -> Result<()> {
    let output_path = output_path.as_ref();
    to_ldr(image)
        .save(output_path)
        .with_context(|| format!("failed to write {}", output_path.display()))?;
    info!("Image saved as {}", output_path.display());
    Ok(())
}
