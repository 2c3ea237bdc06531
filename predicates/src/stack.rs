use plane_filter_common::metadata::{MD_SIZE_T, MD_SIZE_Z};
use plane_filter_common::plane::ImagePlaneDetails;

use crate::traits::FilterPredicate;

/// Passes image planes that belong to a z-stack or a time series, i.e.
/// whose series has more than one z or t plane.
///
/// A size that doesn't parse as an unsigned integer is treated as missing.
#[derive(Debug, Clone, Copy, Default)]
pub struct IsStackPredicate;

impl IsStackPredicate {
    pub const SYMBOL: &'static str = "isstack";

    pub fn new() -> Self {
        Self
    }
}

fn dimension_above_one(plane: &ImagePlaneDetails, key: &str) -> bool {
    plane
        .get(key)
        .and_then(|v| v.trim().parse::<u64>().ok())
        .is_some_and(|size| size > 1)
}

impl FilterPredicate<ImagePlaneDetails> for IsStackPredicate {
    fn symbol(&self) -> &'static str {
        Self::SYMBOL
    }

    fn eval(&self, candidate: &ImagePlaneDetails) -> bool {
        dimension_above_one(candidate, MD_SIZE_Z) || dimension_above_one(candidate, MD_SIZE_T)
    }
}
