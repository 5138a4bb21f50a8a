use ndarray::ArrayViewMut2;

use crate::filtering::domain::image_filter::ImageFilter;
use crate::shared::constants::TINT_SHIFT;
use crate::shared::pixel::Pixel;
use crate::shared::pixel_grid::PixelGrid;
use crate::shared::work_chunk::WorkChunk;

use super::hole_puncher::{Circle, HolePuncher};

/// Yellow tint applied per chunk, followed by a single-threaded pass that
/// punches random black holes across the whole image.
///
/// Tinting is a pure per-pixel map, so workers ignore the chunk halo and
/// touch only their own output columns.
pub struct SwissCheeseFilter {
    puncher: HolePuncher,
    last_holes: Vec<Circle>,
}

impl SwissCheeseFilter {
    pub fn new(seed: Option<u64>) -> Self {
        Self {
            puncher: HolePuncher::new(seed),
            last_holes: Vec::new(),
        }
    }

    /// Holes drawn by the most recent [`ImageFilter::finish`].
    pub fn last_holes(&self) -> &[Circle] {
        &self.last_holes
    }
}

pub fn tint(pixel: Pixel) -> Pixel {
    pixel.shifted(TINT_SHIFT, TINT_SHIFT, 0)
}

impl ImageFilter for SwissCheeseFilter {
    fn name(&self) -> &'static str {
        "swiss-cheese"
    }

    fn apply_chunk(
        &self,
        input: &PixelGrid,
        chunk: &WorkChunk,
        mut output: ArrayViewMut2<'_, Pixel>,
    ) {
        let source = input.view();
        for col in chunk.output_range() {
            let local = col - chunk.left_offset;
            for row in 0..input.height() {
                output[[row, local]] = tint(source[[row, col]]);
            }
        }
    }

    fn finish(&mut self, output: &mut PixelGrid) {
        self.last_holes = self.puncher.punch(output);
    }

    fn has_finishing_pass(&self) -> bool {
        true
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn tint_whole(input: &PixelGrid, filter: &SwissCheeseFilter) -> PixelGrid {
        let chunk = WorkChunk {
            left_offset: 0,
            right_offset: input.width(),
            left_padding: 0,
            right_padding: 0,
        };
        let mut output = PixelGrid::new(input.width(), input.height());
        for view in output.column_views_mut(&[chunk]) {
            filter.apply_chunk(input, &chunk, view);
        }
        output
    }

    #[test]
    fn test_tint_shifts_red_and_green_only() {
        assert_eq!(tint(Pixel::new(10, 20, 30)), Pixel::new(60, 70, 30));
        assert_eq!(tint(Pixel::new(220, 205, 255)), Pixel::new(255, 255, 255));
        assert_eq!(tint(Pixel::BLACK), Pixel::new(50, 50, 0));
    }

    #[test]
    fn test_apply_chunk_tints_every_pixel() {
        let mut input = PixelGrid::new(4, 3);
        input.set(2, 3, Pixel::new(250, 1, 99));
        let output = tint_whole(&input, &SwissCheeseFilter::new(Some(0)));
        for row in 0..3 {
            for col in 0..4 {
                assert_eq!(
                    output.get(row, col),
                    input.get(row, col).map(tint),
                    "at ({row}, {col})"
                );
            }
        }
        assert_eq!(output.get(2, 3), Some(Pixel::new(255, 51, 99)));
    }

    #[test]
    fn test_apply_chunk_has_no_holes() {
        let input = PixelGrid::filled(200, 200, Pixel::gray(10));
        let output = tint_whole(&input, &SwissCheeseFilter::new(Some(0)));
        assert!(output.view().iter().all(|p| *p == Pixel::new(60, 60, 10)));
    }

    #[test]
    fn test_finish_punches_holes() {
        let mut filter = SwissCheeseFilter::new(Some(11));
        let mut output = PixelGrid::filled(100, 100, Pixel::gray(60));
        filter.finish(&mut output);
        assert_eq!(filter.last_holes().len(), 9);
        let c = filter.last_holes()[0];
        assert_eq!(
            output.get(c.center_y as isize, c.center_x as isize),
            Some(Pixel::BLACK)
        );
    }

    #[test]
    fn test_has_finishing_pass() {
        assert!(SwissCheeseFilter::new(None).has_finishing_pass());
    }
}
