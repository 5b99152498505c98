use log::trace;

use crate::error::Result;

/// Returns an ascending copy of `sample`, leaving `sample` untouched.
///
/// The copy is reserved up front with [Vec::try_reserve_exact], so running
/// out of memory surfaces as [StatsError::Allocation](crate::error::StatsError::Allocation)
/// instead of aborting the process.
pub fn sorted_copy(sample: &[i64]) -> Result<Vec<i64>> {
    let mut sorted = Vec::new();
    sorted.try_reserve_exact(sample.len())?;
    sorted.extend_from_slice(sample);
    sorted.sort_unstable();

    trace!("sorted a copy of {} values", sorted.len());
    Ok(sorted)
}
