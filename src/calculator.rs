use std::sync::Arc;

use log::debug;

use crate::error::{Result, StatsError};
use crate::report::Summary;
use crate::stats::{self, ModeResult};

/// A sample shared behind an [Arc], with the statistics computed over it.
///
/// Cloning a [Calculator] is cheap and clones can be sent to other threads.
/// Mutating methods copy the sample first if another clone still holds it,
/// so a clone never sees changes made through a different handle.
#[derive(Debug, Clone, Default)]
pub struct Calculator {
    sample: Arc<Vec<i64>>,
}

impl From<Vec<i64>> for Calculator {
    fn from(sample: Vec<i64>) -> Self {
        Calculator {
            sample: Arc::new(sample),
        }
    }
}

impl Calculator {
    pub fn new(sample: Vec<i64>) -> Self {
        Calculator::from(sample)
    }

    pub fn data(&self) -> &[i64] {
        &self.sample
    }

    pub fn len(&self) -> usize {
        self.sample.len()
    }

    pub fn is_empty(&self) -> bool {
        self.sample.is_empty()
    }

    pub fn add_value(&mut self, value: i64) {
        Arc::make_mut(&mut self.sample).push(value);
    }

    pub fn add_values<I>(&mut self, values: I)
    where
        I: IntoIterator<Item = i64>,
    {
        Arc::make_mut(&mut self.sample).extend(values);
    }

    pub fn clear(&mut self) {
        Arc::make_mut(&mut self.sample).clear();
    }

    pub fn median(&self) -> Result<f64> {
        stats::median(&self.sample)
    }

    pub fn mode(&self) -> Result<ModeResult> {
        stats::mode(&self.sample)
    }

    pub fn summary(&self) -> Result<Summary> {
        let median = self.median()?;
        let mode = self.mode()?;
        debug!("summarised {} values", self.len());
        Ok(Summary::new(&self.sample, median, mode))
    }

    /// Try to take back the inner sample. If there are any other clones
    /// holding it an error is returned.
    pub fn into_inner(self) -> Result<Vec<i64>> {
        Arc::try_unwrap(self.sample).map_err(|_| StatsError::SharedSample)
    }
}
