use plane_filter_common::metadata::{MD_COLOR_FORMAT, MD_MONOCHROME};
use plane_filter_common::plane::ImagePlaneDetails;

use crate::traits::FilterPredicate;

/// Passes image planes whose color format is monochrome.
///
/// A plane without a color format entry is not monochrome; that is a normal
/// `false`, not an error. The comparison is exact, so `"Monochrome"` fails.
#[derive(Debug, Clone, Copy, Default)]
pub struct IsMonochromePredicate;

impl IsMonochromePredicate {
    pub const SYMBOL: &'static str = "ismonochrome";

    pub fn new() -> Self {
        Self
    }
}

impl FilterPredicate<ImagePlaneDetails> for IsMonochromePredicate {
    fn symbol(&self) -> &'static str {
        Self::SYMBOL
    }

    fn eval(&self, candidate: &ImagePlaneDetails) -> bool {
        candidate.get(MD_COLOR_FORMAT) == Some(MD_MONOCHROME)
    }
}
