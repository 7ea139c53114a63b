//! PNG export functionality for heightfields.

use std::fs::File;
use std::io::BufWriter;
use std::path::Path;

use image::codecs::png::{CompressionType, FilterType, PngEncoder};
use image::{ImageBuffer, ImageEncoder, Luma};
use thiserror::Error;

use crate::terrain::HeightField;

/// Errors that can occur during PNG export.
#[derive(Error, Debug)]
pub enum PngExportError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
    #[error("Image encoding error: {0}")]
    Image(#[from] image::ImageError),
    #[error("Invalid height range: min ({0}) >= max ({1})")]
    InvalidHeightRange(f32, f32),
}

/// Options for PNG export.
#[derive(Debug, Clone)]
pub struct PngExportOptions {
    /// Minimum height value for normalization.
    pub min_height: f32,
    /// Maximum height value for normalization.
    pub max_height: f32,
    /// PNG compression type.
    pub compression: CompressionType,
    /// PNG filter type.
    pub filter: FilterType,
}

impl Default for PngExportOptions {
    fn default() -> Self {
        // The default terrain profile spans roughly [-140, 192]: an all-zero
        // octave sum maps to -140, a saturated sum near 126 to 126^1.2 - 140.
        Self {
            min_height: -140.0,
            max_height: 192.0,
            compression: CompressionType::Default,
            filter: FilterType::Adaptive,
        }
    }
}

impl PngExportOptions {
    /// Creates options with the height range auto-detected from the field.
    pub fn auto_range(field: &HeightField) -> Self {
        let (min, max) = field.height_range();
        Self {
            min_height: min,
            max_height: max,
            ..Default::default()
        }
    }
}

/// Exports a heightfield as a 16-bit grayscale PNG.
///
/// Heights are normalized into [0, 1] via the options' range, then scaled to
/// u16; out-of-range heights clamp to the image extremes. The field itself is
/// never modified.
///
/// # Arguments
/// * `field` - The heightfield to export
/// * `path` - Output file path
/// * `options` - Export options including height range for normalization
///
/// # Returns
/// `Ok(())` on success, or an error if export fails
pub fn export_heightfield_png(
    field: &HeightField,
    path: &Path,
    options: &PngExportOptions,
) -> Result<(), PngExportError> {
    let min = options.min_height;
    let max = options.max_height;

    if min >= max {
        return Err(PngExportError::InvalidHeightRange(min, max));
    }

    let size = field.size;
    let range = max - min;

    // 16-bit grayscale image, one pixel per grid vertex
    let mut img: ImageBuffer<Luma<u16>, Vec<u16>> = ImageBuffer::new(size, size);

    for z in 0..size {
        for x in 0..size {
            let height = field.height(x, z);
            let normalized = ((height - min) / range).clamp(0.0, 1.0);
            let value = (normalized * 65535.0) as u16;
            img.put_pixel(x, z, Luma([value]));
        }
    }

    let file = File::create(path)?;
    let writer = BufWriter::new(file);
    let encoder = PngEncoder::new_with_quality(writer, options.compression, options.filter);

    // Convert u16 slice to bytes for the encoder
    let raw_data = img.as_raw();
    let byte_slice: &[u8] = bytemuck::cast_slice(raw_data);

    encoder.write_image(byte_slice, size, size, image::ExtendedColorType::L16)?;

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::noise::TerrainProfile;
    use tempfile::tempdir;

    #[test]
    fn test_export_heightfield_png() {
        let profile = TerrainProfile::default();
        let mut field = HeightField::new(64);
        field.refresh(&profile);

        let dir = tempdir().unwrap();
        let path = dir.path().join("terrain.png");

        let options = PngExportOptions::auto_range(&field);
        export_heightfield_png(&field, &path, &options).unwrap();

        assert!(path.exists());
        let metadata = std::fs::metadata(&path).unwrap();
        assert!(metadata.len() > 0, "exported file should not be empty");
    }

    #[test]
    fn test_invalid_height_range() {
        let field = HeightField::new(8);
        let dir = tempdir().unwrap();
        let path = dir.path().join("bad.png");

        let options = PngExportOptions {
            min_height: 1.0,
            max_height: 1.0,
            ..Default::default()
        };
        let result = export_heightfield_png(&field, &path, &options);
        assert!(matches!(result, Err(PngExportError::InvalidHeightRange(_, _))));
    }

    #[test]
    fn test_exported_image_is_decodable() {
        let profile = TerrainProfile::default();
        let mut field = HeightField::new(16);
        field.scroll(42.0, 17.0);
        field.refresh(&profile);

        let dir = tempdir().unwrap();
        let path = dir.path().join("roundtrip.png");

        let options = PngExportOptions::auto_range(&field);
        export_heightfield_png(&field, &path, &options).unwrap();

        let decoded = image::open(&path).unwrap();
        assert_eq!(decoded.width(), 16);
        assert_eq!(decoded.height(), 16);
    }
}
