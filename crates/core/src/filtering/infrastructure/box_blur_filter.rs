use ndarray::ArrayViewMut2;

use crate::filtering::domain::image_filter::ImageFilter;
use crate::shared::pixel::Pixel;
use crate::shared::pixel_grid::PixelGrid;
use crate::shared::work_chunk::WorkChunk;

use super::stencil::{BorderClass, Stencil};

/// 3x3 box blur with border-aware averaging.
///
/// Every output pixel is the truncated mean of its in-bounds 3x3
/// neighbourhood. Neighbours in adjacent chunks come from the shared input
/// grid through the chunk's halo, so workers never read each other's output.
pub struct BoxBlurFilter;

impl BoxBlurFilter {
    pub fn new() -> Self {
        Self
    }
}

impl Default for BoxBlurFilter {
    fn default() -> Self {
        Self::new()
    }
}

impl ImageFilter for BoxBlurFilter {
    fn name(&self) -> &'static str {
        "box-blur"
    }

    fn apply_chunk(
        &self,
        input: &PixelGrid,
        chunk: &WorkChunk,
        mut output: ArrayViewMut2<'_, Pixel>,
    ) {
        let read = chunk.read_range();
        for col in chunk.output_range() {
            debug_assert!(col == 0 || read.contains(&(col - 1)));
            debug_assert!(col + 1 >= input.width() || read.contains(&(col + 1)));
            let local = col - chunk.left_offset;
            for row in 0..input.height() {
                let stencil = Stencil::gather(input, row, col);
                debug_assert!(
                    input.width() < 2
                        || input.height() < 2
                        || stencil.real_cells()
                            == BorderClass::of(row, col, input.width(), input.height()).divisor()
                );
                output[[row, local]] = stencil.average();
            }
        }
    }
}
