//! CLI command implementations

pub mod convert;
pub mod render;

use std::fs::File;
use std::io::BufWriter;
use std::path::Path;

use anyhow::{Context, Result};
use flare_color::encode_srgb;
use flare_core::{Canvas, LinearRgb};

/// Quantizes a linear canvas to interleaved 8-bit sRGB.
pub fn to_srgb8(canvas: &Canvas<LinearRgb>) -> Vec<u8> {
    canvas
        .pixels()
        .iter()
        .flat_map(|c| encode_srgb(c.to_array()))
        .map(|v| (v.clamp(0.0, 1.0) * 255.0).round() as u8)
        .collect()
}

/// Writes a linear canvas as an 8-bit sRGB PNG.
pub fn save_png(path: &Path, canvas: &Canvas<LinearRgb>) -> Result<()> {
    let file = File::create(path).with_context(|| format!("Failed to create: {}", path.display()))?;
    let writer = BufWriter::new(file);

    let mut encoder = png::Encoder::new(writer, canvas.width(), canvas.height());
    encoder.set_color(png::ColorType::Rgb);
    encoder.set_depth(png::BitDepth::Eight);
    encoder.set_compression(png::Compression::default());
    encoder.set_source_srgb(png::SrgbRenderingIntent::Perceptual);

    let mut png_writer = encoder
        .write_header()
        .with_context(|| format!("Failed to write PNG header: {}", path.display()))?;
    png_writer
        .write_image_data(&to_srgb8(canvas))
        .with_context(|| format!("Failed to save: {}", path.display()))?;
    png_writer
        .finish()
        .with_context(|| format!("Failed to finish PNG: {}", path.display()))?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use flare_core::Color;

    #[test]
    fn test_quantize() {
        let mut canvas: Canvas<LinearRgb> = Canvas::new(3, 1).unwrap();
        canvas.set(0, 0, Color::new(0.0, 1.0, 2.0)).unwrap();
        canvas.set(0, 1, Color::new(-1.0, 0.2158605, 1.0)).unwrap();
        canvas.set(0, 2, Color::splat(f32::NAN)).unwrap();

        let bytes = to_srgb8(&canvas);
        assert_eq!(&bytes[0..3], &[0, 255, 255]);
        assert_eq!(&bytes[3..6], &[0, 128, 255]);
        assert_eq!(bytes.len(), 9);
    }

    #[test]
    fn test_png_roundtrip() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("out.png");

        let mut canvas: Canvas<LinearRgb> = Canvas::new(4, 2).unwrap();
        canvas.set(1, 3, Color::new(1.0, 0.0, 0.0)).unwrap();
        save_png(&path, &canvas).unwrap();

        let decoder = png::Decoder::new(std::io::BufReader::new(File::open(&path).unwrap()));
        let mut reader = decoder.read_info().unwrap();
        let mut buf = vec![0u8; reader.output_buffer_size().unwrap()];
        let info = reader.next_frame(&mut buf).unwrap();

        assert_eq!((info.width, info.height), (4, 2));
        assert_eq!(info.color_type, png::ColorType::Rgb);
        let last = (7 * 3) as usize;
        assert_eq!(&buf[last..last + 3], &[255, 0, 0]);
        assert!(buf[..last].iter().all(|&b| b == 0));
    }
}
