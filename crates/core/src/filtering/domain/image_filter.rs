use ndarray::ArrayViewMut2;

use crate::shared::pixel::Pixel;
use crate::shared::pixel_grid::PixelGrid;
use crate::shared::work_chunk::WorkChunk;

/// Domain interface for a whole-image filter split across column workers.
///
/// `apply_chunk` runs concurrently, once per chunk, with shared read access
/// to the input and exclusive access to the chunk's output columns
/// (`output[[row, col - chunk.left_offset]]`). `finish` runs afterwards on
/// the calling thread with the complete output grid.
pub trait ImageFilter: Send + Sync {
    /// Short name used in logs.
    fn name(&self) -> &'static str;

    fn apply_chunk(&self, input: &PixelGrid, chunk: &WorkChunk, output: ArrayViewMut2<'_, Pixel>);

    /// Sequential pass after every worker has joined. Default: no-op.
    fn finish(&mut self, _output: &mut PixelGrid) {}

    /// Whether [`ImageFilter::finish`] does any work.
    fn has_finishing_pass(&self) -> bool {
        false
    }
}
