use crate::filtering::domain::image_filter::ImageFilter;

use super::box_blur_filter::BoxBlurFilter;
use super::swiss_cheese_filter::SwissCheeseFilter;

/// Which filter to run.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum FilterKind {
    BoxBlur,
    SwissCheese,
}

impl FilterKind {
    /// Parses the single-letter command-line code: `b` or `c`.
    pub fn from_code(code: &str) -> Option<Self> {
        match code {
            "b" => Some(FilterKind::BoxBlur),
            "c" => Some(FilterKind::SwissCheese),
            _ => None,
        }
    }
}

/// Builds the filter for `kind`. `seed` only affects hole placement.
pub fn create_filter(kind: FilterKind, seed: Option<u64>) -> Box<dyn ImageFilter> {
    log::info!("Using {:?} filter", kind);
    match kind {
        FilterKind::BoxBlur => Box::new(BoxBlurFilter::new()),
        FilterKind::SwissCheese => Box::new(SwissCheeseFilter::new(seed)),
    }
}
