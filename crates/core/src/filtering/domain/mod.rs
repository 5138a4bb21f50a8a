pub mod image_filter;
