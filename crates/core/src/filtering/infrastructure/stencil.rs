use crate::shared::pixel::Pixel;
use crate::shared::pixel_grid::PixelGrid;

/// Position of a pixel relative to the image border.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum BorderClass {
    Corner,
    Edge,
    Interior,
}

impl BorderClass {
    pub fn of(row: usize, col: usize, width: usize, height: usize) -> Self {
        let row_extreme = row == 0 || row + 1 == height;
        let col_extreme = col == 0 || col + 1 == width;
        match (row_extreme, col_extreme) {
            (true, true) => BorderClass::Corner,
            (false, false) => BorderClass::Interior,
            _ => BorderClass::Edge,
        }
    }

    /// Number of in-bounds cells in a 3x3 window at this position,
    /// assuming the grid is at least 2x2.
    pub fn divisor(self) -> u32 {
        match self {
            BorderClass::Corner => 4,
            BorderClass::Edge => 6,
            BorderClass::Interior => 9,
        }
    }
}

/// Reads a pixel, substituting black for coordinates outside the grid.
pub fn fetch(grid: &PixelGrid, row: isize, col: isize) -> Pixel {
    grid.get(row, col).unwrap_or(Pixel::BLACK)
}

fn in_bounds(grid: &PixelGrid, row: isize, col: isize) -> bool {
    (0..grid.height() as isize).contains(&row) && (0..grid.width() as isize).contains(&col)
}

/// 3x3 neighbourhood around one pixel, with phantom cells zeroed.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Stencil {
    cells: [[Pixel; 3]; 3],
    real_cells: u32,
}

impl Stencil {
    pub fn gather(grid: &PixelGrid, row: usize, col: usize) -> Self {
        let mut cells = [[Pixel::BLACK; 3]; 3];
        let mut real_cells = 0;
        for (dr, cell_row) in cells.iter_mut().enumerate() {
            for (dc, cell) in cell_row.iter_mut().enumerate() {
                let r = row as isize + dr as isize - 1;
                let c = col as isize + dc as isize - 1;
                *cell = fetch(grid, r, c);
                if in_bounds(grid, r, c) {
                    real_cells += 1;
                }
            }
        }
        Self { cells, real_cells }
    }

    pub fn cell(&self, row: usize, col: usize) -> Pixel {
        self.cells[row][col]
    }

    pub fn real_cells(&self) -> u32 {
        self.real_cells
    }

    /// Per-channel mean over the real cells, truncated.
    ///
    /// Phantom cells are summed too but are always zero, so the result is
    /// the exact average of the in-bounds neighbourhood.
    pub fn average(&self) -> Pixel {
        let (mut red, mut green, mut blue) = (0u32, 0u32, 0u32);
        for pixel in self.cells.iter().flatten() {
            red += u32::from(pixel.red);
            green += u32::from(pixel.green);
            blue += u32::from(pixel.blue);
        }
        let divisor = self.real_cells.max(1);
        Pixel::new(
            (red / divisor) as u8,
            (green / divisor) as u8,
            (blue / divisor) as u8,
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    fn ramp(width: usize, height: usize) -> PixelGrid {
        let mut grid = PixelGrid::new(width, height);
        for row in 0..height {
            for col in 0..width {
                let v = (row * width + col) as u8;
                grid.set(row, col, Pixel::new(v, v * 2, 255 - v));
            }
        }
        grid
    }

    #[rstest]
    #[case::top_left(0, 0, BorderClass::Corner)]
    #[case::top_right(0, 4, BorderClass::Corner)]
    #[case::bottom_left(3, 0, BorderClass::Corner)]
    #[case::bottom_right(3, 4, BorderClass::Corner)]
    #[case::top(0, 2, BorderClass::Edge)]
    #[case::bottom(3, 1, BorderClass::Edge)]
    #[case::left(1, 0, BorderClass::Edge)]
    #[case::right(2, 4, BorderClass::Edge)]
    #[case::interior(1, 1, BorderClass::Interior)]
    #[case::interior_far(2, 3, BorderClass::Interior)]
    fn test_border_class(#[case] row: usize, #[case] col: usize, #[case] expected: BorderClass) {
        assert_eq!(BorderClass::of(row, col, 5, 4), expected);
    }

    #[test]
    fn test_divisor_matches_real_cell_count_everywhere() {
        let grid = PixelGrid::new(5, 4);
        for row in 0..4 {
            for col in 0..5 {
                let class = BorderClass::of(row, col, 5, 4);
                let stencil = Stencil::gather(&grid, row, col);
                assert_eq!(stencil.real_cells(), class.divisor(), "at ({row}, {col})");
            }
        }
    }

    #[test]
    fn test_gather_counts_black_in_grid_pixels_as_real() {
        // A black pixel inside the grid is a real cell even though it reads
        // the same as a phantom.
        let grid = PixelGrid::new(3, 3);
        let stencil = Stencil::gather(&grid, 0, 1);
        assert_eq!(stencil.real_cells(), 6);
        assert_eq!(stencil.cell(0, 1), fetch(&grid, -1, 1));
    }

    #[test]
    fn test_divisor_values() {
        assert_eq!(BorderClass::Corner.divisor(), 4);
        assert_eq!(BorderClass::Edge.divisor(), 6);
        assert_eq!(BorderClass::Interior.divisor(), 9);
    }

    #[test]
    fn test_fetch_outside_is_black() {
        let grid = PixelGrid::filled(2, 2, Pixel::gray(9));
        assert_eq!(fetch(&grid, -1, 0), Pixel::BLACK);
        assert_eq!(fetch(&grid, 0, 2), Pixel::BLACK);
        assert_eq!(fetch(&grid, 1, 1), Pixel::gray(9));
    }

    #[test]
    fn test_gather_places_neighbours_and_phantoms() {
        let grid = ramp(3, 3);
        let corner = Stencil::gather(&grid, 0, 0);
        assert_eq!(corner.cell(0, 0), Pixel::BLACK);
        assert_eq!(corner.cell(0, 2), Pixel::BLACK);
        assert_eq!(corner.cell(2, 0), Pixel::BLACK);
        assert_eq!(corner.cell(1, 1), fetch(&grid, 0, 0));
        assert_eq!(corner.cell(2, 2), fetch(&grid, 1, 1));

        let center = Stencil::gather(&grid, 1, 1);
        for r in 0..3 {
            for c in 0..3 {
                assert_eq!(center.cell(r, c), fetch(&grid, r as isize, c as isize));
            }
        }
    }

    #[test]
    fn test_average_corner_uses_four_cells() {
        // Row-major values 0..9; top-left corner sees 0,1,3,4.
        let grid = ramp(3, 3);
        let p = Stencil::gather(&grid, 0, 0).average();
        assert_eq!(u32::from(p.red), (1 + 3 + 4) / 4);
        assert_eq!(u32::from(p.green), (2 + 6 + 8) / 4);
        assert_eq!(u32::from(p.blue), (255 + 254 + 252 + 251) / 4);
    }

    #[test]
    fn test_average_edge_uses_six_cells() {
        // Top edge (0,1) sees 0,1,2,3,4,5.
        let grid = ramp(3, 3);
        let p = Stencil::gather(&grid, 0, 1).average();
        assert_eq!(p.red, 15 / 6);
    }

    #[test]
    fn test_average_interior_uses_nine_cells() {
        let grid = ramp(3, 3);
        let p = Stencil::gather(&grid, 1, 1).average();
        assert_eq!(p.red, 36 / 9);
        assert_eq!(p.green, 72 / 9);
    }

    #[test]
    fn test_average_single_pixel_grid_is_identity() {
        let grid = PixelGrid::filled(1, 1, Pixel::new(200, 100, 3));
        let stencil = Stencil::gather(&grid, 0, 0);
        assert_eq!(stencil.real_cells(), 1);
        assert_eq!(stencil.average(), Pixel::new(200, 100, 3));
    }

    #[test]
    fn test_average_of_bright_pixels_does_not_overflow() {
        let grid = PixelGrid::filled(3, 3, Pixel::gray(255));
        assert_eq!(Stencil::gather(&grid, 1, 1).average(), Pixel::gray(255));
    }
}
