use std::path::Path;

use crate::bitmap::domain::grid_reader::GridReader;
use crate::shared::pixel_grid::PixelGrid;

/// Decodes bitmap files with the `image` crate.
///
/// Header parsing, bottom-up row order and row padding are handled by the
/// decoder; the result is always converted to 8-bit RGB.
pub struct BmpFileReader;

impl BmpFileReader {
    pub fn new() -> Self {
        Self
    }
}

impl Default for BmpFileReader {
    fn default() -> Self {
        Self::new()
    }
}

impl GridReader for BmpFileReader {
    fn read(&self, path: &Path) -> Result<PixelGrid, Box<dyn std::error::Error>> {
        let img = image::open(path)?.to_rgb8();
        let (width, height) = img.dimensions();
        log::debug!("Decoded {} ({width}x{height})", path.display());
        Ok(PixelGrid::from_rgb_bytes(
            width as usize,
            height as usize,
            img.as_raw(),
        ))
    }
}
