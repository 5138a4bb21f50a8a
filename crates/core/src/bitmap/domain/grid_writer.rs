use std::path::Path;

use crate::shared::pixel_grid::PixelGrid;

/// Encodes a [`PixelGrid`] to an image file.
pub trait GridWriter: Send {
    fn write(&self, path: &Path, grid: &PixelGrid) -> Result<(), Box<dyn std::error::Error>>;
}
