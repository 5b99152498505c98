use std::fmt;

use log::debug;
use serde::Serialize;

use super::sort::sorted_copy;
use crate::error::Result;
use crate::report::ValueList;

/// The most frequent value(s) of a sample.
///
/// `values` is ascending and holds every value tied at `frequency`, however
/// many there are. An empty sample gives no values and a frequency of zero.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct ModeResult {
    pub values: Vec<i64>,
    pub frequency: usize,
}

impl ModeResult {
    pub fn empty() -> Self {
        ModeResult::default()
    }

    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }

    pub fn is_multimodal(&self) -> bool {
        self.values.len() > 1
    }
}

impl fmt::Display for ModeResult {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", ModeDisplay::new(&self.values, self.frequency))
    }
}

/// Renders mode values and their frequency without owning them.
pub(crate) struct ModeDisplay<'a> {
    values: &'a [i64],
    frequency: usize,
}

impl<'a> ModeDisplay<'a> {
    pub(crate) fn new(values: &'a [i64], frequency: usize) -> Self {
        ModeDisplay { values, frequency }
    }
}

impl fmt::Display for ModeDisplay<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.values {
            [] => write!(f, "No mode (empty dataset)"),
            [value] => {
                let suffix = if self.frequency == 1 { "" } else { "s" };
                write!(f, "{} (appears {} time{})", value, self.frequency, suffix)
            }
            values => write!(
                f,
                "{} (each appears {} times)",
                ValueList(values),
                self.frequency
            ),
        }
    }
}

/// Maximal runs of equal values in a sorted slice, as `(value, run length)`.
fn streaks(sorted: &[i64]) -> impl Iterator<Item = (i64, usize)> + '_ {
    sorted
        .chunk_by(|a, b| a == b)
        .map(|run| (run[0], run.len()))
}

/// Mode(s) of `sample`.
///
/// Works on a sorted copy in two passes: the first finds the longest streak,
/// the second collects every streak of that length. When no value repeats,
/// every distinct value is a mode with frequency 1.
pub fn mode(sample: &[i64]) -> Result<ModeResult> {
    if sample.is_empty() {
        debug!("mode of an empty sample, reporting no mode");
        return Ok(ModeResult::empty());
    }

    let sorted = sorted_copy(sample)?;

    let frequency = streaks(&sorted)
        .map(|(_, len)| len)
        .max()
        .unwrap_or_default();

    let values = streaks(&sorted)
        .filter(|&(_, len)| len == frequency)
        .map(|(value, _)| value)
        .collect::<Vec<_>>();

    debug!(
        "found {} mode value(s) with frequency {}",
        values.len(),
        frequency
    );
    Ok(ModeResult { values, frequency })
}
