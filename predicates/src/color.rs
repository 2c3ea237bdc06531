use plane_filter_common::metadata::{MD_COLOR_FORMAT, MD_PLANAR, MD_RGB};
use plane_filter_common::plane::ImagePlaneDetails;

use crate::traits::FilterPredicate;

/// Passes image planes stored as color, interleaved (`RGB`) or planar.
#[derive(Debug, Clone, Copy, Default)]
pub struct IsColorPredicate;

impl IsColorPredicate {
    pub const SYMBOL: &'static str = "iscolor";

    pub fn new() -> Self {
        Self
    }
}

impl FilterPredicate<ImagePlaneDetails> for IsColorPredicate {
    fn symbol(&self) -> &'static str {
        Self::SYMBOL
    }

    fn eval(&self, candidate: &ImagePlaneDetails) -> bool {
        matches!(candidate.get(MD_COLOR_FORMAT), Some(MD_RGB | MD_PLANAR))
    }
}
