pub mod bitmap;
pub mod filtering;
pub mod pipeline;
pub mod shared;
