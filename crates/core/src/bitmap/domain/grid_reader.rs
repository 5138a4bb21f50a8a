use std::path::Path;

use crate::shared::pixel_grid::PixelGrid;

/// Decodes an image file into a [`PixelGrid`].
///
/// Implementations own the container format; the engine only ever sees
/// the decoded grid.
pub trait GridReader: Send {
    fn read(&self, path: &Path) -> Result<PixelGrid, Box<dyn std::error::Error>>;
}
