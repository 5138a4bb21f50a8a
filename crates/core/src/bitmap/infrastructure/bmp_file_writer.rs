use std::path::Path;

use crate::bitmap::domain::grid_writer::GridWriter;
use crate::shared::pixel_grid::PixelGrid;

/// Writes a grid as a 24-bit bitmap using the `image` crate.
///
/// The format is always BMP regardless of the path's extension.
pub struct BmpFileWriter;

impl BmpFileWriter {
    pub fn new() -> Self {
        Self
    }
}

impl Default for BmpFileWriter {
    fn default() -> Self {
        Self::new()
    }
}

impl GridWriter for BmpFileWriter {
    fn write(&self, path: &Path, grid: &PixelGrid) -> Result<(), Box<dyn std::error::Error>> {
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent)?;
        }

        let img = image::RgbImage::from_raw(
            u32::try_from(grid.width())?,
            u32::try_from(grid.height())?,
            grid.to_rgb_bytes(),
        )
        .ok_or("Failed to create image from grid data")?;

        img.save_with_format(path, image::ImageFormat::Bmp)?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::bitmap::domain::grid_reader::GridReader;
    use crate::bitmap::infrastructure::bmp_file_reader::BmpFileReader;
    use crate::shared::pixel::Pixel;

    #[test]
    fn test_write_creates_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("out.bmp");
        BmpFileWriter::new()
            .write(&path, &PixelGrid::filled(10, 8, Pixel::gray(9)))
            .unwrap();
        assert!(path.exists());
        // 14-byte file header + 40-byte info header at minimum.
        assert!(std::fs::metadata(&path).unwrap().len() > 54);
    }

    #[test]
    fn test_written_file_is_a_bitmap() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("out.bmp");
        BmpFileWriter::new()
            .write(&path, &PixelGrid::new(3, 3))
            .unwrap();
        let bytes = std::fs::read(&path).unwrap();
        assert_eq!(&bytes[..2], b"BM");
    }

    #[test]
    fn test_reader_sees_written_pixels() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("nested").join("out.bmp");
        let mut grid = PixelGrid::filled(5, 4, Pixel::new(50, 100, 200));
        grid.set(3, 4, Pixel::new(1, 2, 3));
        BmpFileWriter::new().write(&path, &grid).unwrap();

        let read_back = BmpFileReader::new().read(&path).unwrap();
        assert_eq!(read_back, grid);
    }

    #[test]
    fn test_write_invalid_path_returns_error() {
        let dir = tempfile::tempdir().unwrap();
        let blocker = dir.path().join("file");
        std::fs::write(&blocker, b"x").unwrap();
        let result = BmpFileWriter::new().write(&blocker.join("out.bmp"), &PixelGrid::new(2, 2));
        assert!(result.is_err());
    }
}
