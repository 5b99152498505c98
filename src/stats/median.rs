use log::debug;

use super::sort::sorted_copy;
use crate::error::Result;

/// Median of `sample` as a real number.
///
/// An empty sample yields `0.0` rather than an error, so callers that do not
/// check the size first still get a defined value. Note that this cannot be
/// told apart from a sample whose median really is zero.
///
/// For an even number of values the two central values are summed as `i128`
/// before halving, so extreme inputs never overflow.
pub fn median(sample: &[i64]) -> Result<f64> {
    if sample.is_empty() {
        debug!("median of an empty sample, reporting 0.0");
        return Ok(0.0);
    }

    let sorted = sorted_copy(sample)?;
    let mid = sorted.len() / 2;
    let median = if sorted.len() % 2 == 0 {
        let sum = i128::from(sorted[mid - 1]) + i128::from(sorted[mid]);
        sum as f64 / 2.0
    } else {
        sorted[mid] as f64
    };

    Ok(median)
}
