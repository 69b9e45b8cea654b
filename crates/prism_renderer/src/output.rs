//! Tone mapping and image file output.

use std::fs::File;
use std::io::{BufWriter, Write};
use std::path::Path;

use thiserror::Error;

use crate::renderer::ImageBuffer;
use prism_math::Color;

/// Errors that can occur while writing an image.
#[derive(Error, Debug)]
pub enum OutputError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Image encoding error: {0}")]
    Image(#[from] image::ImageError),

    #[error("Image buffer holds {actual} pixels, expected {expected}")]
    BufferSize { expected: usize, actual: usize },
}

/// Result type for image output.
pub type OutputResult<T> = Result<T, OutputError>;

/// Scale a color down so its brightest channel is at most 1, keeping hue.
#[inline]
pub fn tone_map(color: Color) -> Color {
    let max = color.max_element();
    if max > 1.0 {
        color * (1.0 / max)
    } else {
        color
    }
}

/// Quantize a channel to 0-255.
#[inline]
fn to_byte(value: f32) -> u8 {
    (255.0 * value.clamp(0.0, 1.0)).round() as u8
}

/// Convert a linear color to 8-bit RGB: tone map first, then clamp each channel.
pub fn color_to_rgb(color: Color) -> [u8; 3] {
    let c = tone_map(color);
    [to_byte(c.x), to_byte(c.y), to_byte(c.z)]
}

impl ImageBuffer {
    /// Convert to packed RGB bytes, row-major.
    pub fn to_rgb8(&self) -> OutputResult<Vec<u8>> {
        let expected = (self.width * self.height) as usize;
        if self.pixels.len() != expected {
            return Err(OutputError::BufferSize {
                expected,
                actual: self.pixels.len(),
            });
        }

        let mut bytes = Vec::with_capacity(expected * 3);
        for color in &self.pixels {
            bytes.extend_from_slice(&color_to_rgb(*color));
        }
        Ok(bytes)
    }
}

/// Write the image as a binary PPM (P6).
pub fn write_ppm<W: Write>(image: &ImageBuffer, mut writer: W) -> OutputResult<()> {
    let bytes = image.to_rgb8()?;
    write!(writer, "P6\n{} {}\n255\n", image.width, image.height)?;
    writer.write_all(&bytes)?;
    writer.flush()?;
    Ok(())
}

/// Save the image, choosing the format from the file extension.
///
/// `.ppm` is written directly; every other extension is handed to the
/// `image` crate.
pub fn save_image<P: AsRef<Path>>(image: &ImageBuffer, path: P) -> OutputResult<()> {
    let path = path.as_ref();
    let is_ppm = path
        .extension()
        .and_then(|ext| ext.to_str())
        .is_some_and(|ext| ext.eq_ignore_ascii_case("ppm"));

    if is_ppm {
        let file = File::create(path)?;
        write_ppm(image, BufWriter::new(file))?;
    } else {
        let bytes = image.to_rgb8()?;
        let expected = bytes.len() / 3;
        let rgb = image::RgbImage::from_raw(image.width, image.height, bytes).ok_or(
            OutputError::BufferSize {
                expected,
                actual: image.pixels.len(),
            },
        )?;
        rgb.save(path)?;
    }

    log::debug!("Wrote {}x{} image to {}", image.width, image.height, path.display());
    Ok(())
}
