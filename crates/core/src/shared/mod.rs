pub mod constants;
pub mod error;
pub mod pixel;
pub mod pixel_grid;
pub mod work_chunk;
