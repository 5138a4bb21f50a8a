pub mod box_blur_filter;
pub mod filter_factory;
pub mod hole_puncher;
pub mod stencil;
pub mod swiss_cheese_filter;
