use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

use crate::shared::constants::HOLE_SCALE;
use crate::shared::pixel::Pixel;
use crate::shared::pixel_grid::PixelGrid;

/// A filled disc to blacken, in pixel coordinates.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Circle {
    pub center_x: usize,
    pub center_y: usize,
    pub radius: usize,
}

/// How many holes of one radius to punch.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct HoleClass {
    pub radius: usize,
    pub count: usize,
}

/// Hole sizes and counts for an image, in drawing order:
/// average, large, small.
///
/// `average = min(width, height) / 10`; large and small are half an average
/// above and below it. Average holes are twice as numerous as the others.
pub fn hole_plan(width: usize, height: usize) -> [HoleClass; 3] {
    let average = width.min(height) / HOLE_SCALE;
    let half = average / 2;
    [
        HoleClass {
            radius: average,
            count: average / 2,
        },
        HoleClass {
            radius: average + half,
            count: average / 4,
        },
        HoleClass {
            radius: average - half,
            count: average / 4,
        },
    ]
}

/// Blackens every in-bounds pixel within `circle`, clipping at the border.
pub fn rasterize(grid: &mut PixelGrid, circle: &Circle) {
    let width = grid.width() as isize;
    let height = grid.height() as isize;
    let r = circle.radius as isize;
    let cx = circle.center_x as isize;
    let cy = circle.center_y as isize;
    for dy in -r..=r {
        let y = cy + dy;
        if y < 0 || y >= height {
            continue;
        }
        for dx in -r..=r {
            let x = cx + dx;
            if x < 0 || x >= width || dx * dx + dy * dy > r * r {
                continue;
            }
            grid.set(y as usize, x as usize, Pixel::BLACK);
        }
    }
}

/// Places and draws the Swiss cheese holes.
///
/// Owns the only random generator of a run. It is seeded once, at
/// construction, and drawn from sequentially on the calling thread.
pub struct HolePuncher {
    rng: StdRng,
}

impl HolePuncher {
    /// Seeds from `seed` when given, from OS entropy otherwise.
    pub fn new(seed: Option<u64>) -> Self {
        let rng = match seed {
            Some(seed) => StdRng::seed_from_u64(seed),
            None => StdRng::from_entropy(),
        };
        Self { rng }
    }

    /// Draws centres for every hole in the plan. Does not touch the grid.
    pub fn place(&mut self, width: usize, height: usize) -> Vec<Circle> {
        if width == 0 || height == 0 {
            return Vec::new();
        }
        let mut circles = Vec::new();
        for class in hole_plan(width, height) {
            for _ in 0..class.count {
                let center_x = self.rng.gen_range(0..width);
                let center_y = self.rng.gen_range(0..height);
                circles.push(Circle {
                    center_x,
                    center_y,
                    radius: class.radius,
                });
            }
        }
        circles
    }

    /// Places holes for `grid` and draws them. Returns the circles drawn.
    pub fn punch(&mut self, grid: &mut PixelGrid) -> Vec<Circle> {
        let circles = self.place(grid.width(), grid.height());
        for circle in &circles {
            rasterize(grid, circle);
        }
        log::debug!(
            "Punched {} holes into {}x{} grid",
            circles.len(),
            grid.width(),
            grid.height()
        );
        circles
    }
}
