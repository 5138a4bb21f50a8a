/// Number of worker threads a filter run fans out to unless overridden.
pub const DEFAULT_WORKER_COUNT: usize = 4;

/// Upper bound accepted for `--threads`.
pub const MAX_WORKER_COUNT: usize = 256;

/// Amount added to the red and green channels by the Swiss cheese tint.
pub const TINT_SHIFT: u8 = 50;

/// The average hole radius is the smaller image dimension divided by this.
pub const HOLE_SCALE: usize = 10;

/// Required extension for input files.
pub const BITMAP_EXTENSION: &str = "bmp";
