use ndarray::{Array2, ArrayView2, ArrayViewMut2, Axis};

use crate::shared::pixel::Pixel;
use crate::shared::work_chunk::WorkChunk;

/// A `width x height` RGB image addressed by `(row, col)`.
///
/// Stored as an `(height, width)` array. Interleaved byte layouts only
/// appear at codec boundaries via [`PixelGrid::from_rgb_bytes`] and
/// [`PixelGrid::to_rgb_bytes`].
#[derive(Clone, Debug, PartialEq)]
pub struct PixelGrid {
    data: Array2<Pixel>,
}

impl PixelGrid {
    /// Allocates a black grid.
    pub fn new(width: usize, height: usize) -> Self {
        Self::filled(width, height, Pixel::BLACK)
    }

    pub fn filled(width: usize, height: usize, pixel: Pixel) -> Self {
        Self {
            data: Array2::from_elem((height, width), pixel),
        }
    }

    /// Builds a grid from row-major `RGBRGB...` bytes.
    pub fn from_rgb_bytes(width: usize, height: usize, bytes: &[u8]) -> Self {
        debug_assert_eq!(
            bytes.len(),
            width * height * 3,
            "data length must equal width * height * 3"
        );
        let pixels: Vec<Pixel> = bytes
            .chunks_exact(3)
            .map(|rgb| Pixel::new(rgb[0], rgb[1], rgb[2]))
            .collect();
        Self {
            data: Array2::from_shape_vec((height, width), pixels)
                .expect("pixel count must match dimensions"),
        }
    }

    /// Row-major `RGBRGB...` bytes, the inverse of [`PixelGrid::from_rgb_bytes`].
    pub fn to_rgb_bytes(&self) -> Vec<u8> {
        let mut bytes = Vec::with_capacity(self.width() * self.height() * 3);
        for pixel in self.data.iter() {
            bytes.extend_from_slice(&pixel.to_array());
        }
        bytes
    }

    pub fn width(&self) -> usize {
        self.data.ncols()
    }

    pub fn height(&self) -> usize {
        self.data.nrows()
    }

    pub fn is_empty(&self) -> bool {
        self.data.is_empty()
    }

    /// Returns the pixel at `(row, col)`, or `None` when out of bounds.
    ///
    /// Signed coordinates let stencils read one step past the border.
    pub fn get(&self, row: isize, col: isize) -> Option<Pixel> {
        if row < 0 || col < 0 {
            return None;
        }
        self.data.get((row as usize, col as usize)).copied()
    }

    pub fn set(&mut self, row: usize, col: usize, pixel: Pixel) {
        self.data[[row, col]] = pixel;
    }

    pub fn view(&self) -> ArrayView2<'_, Pixel> {
        self.data.view()
    }

    /// Splits the grid into one mutable view per chunk, covering the
    /// chunk's output columns.
    ///
    /// Chunks must be contiguous, in order, and cover `[0, width)`.
    pub fn column_views_mut(&mut self, chunks: &[WorkChunk]) -> Vec<ArrayViewMut2<'_, Pixel>> {
        let width = self.width();
        let mut views = Vec::with_capacity(chunks.len());
        let mut rest = self.data.view_mut();
        let mut consumed = 0;
        for chunk in chunks {
            debug_assert_eq!(chunk.left_offset, consumed, "chunks must be contiguous");
            let (head, tail) = rest.split_at(Axis(1), chunk.len());
            views.push(head);
            rest = tail;
            consumed = chunk.right_offset;
        }
        debug_assert_eq!(consumed, width, "chunks must cover the grid width");
        views
    }
}
