use std::fmt;

use serde::Serialize;

use crate::error::Result;
use crate::stats::{ModeDisplay, ModeResult};

/// Everything reported for one dataset.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Summary {
    pub data: Vec<i64>,
    pub size: usize,
    pub median: f64,
    pub mode: Vec<i64>,
    pub mode_frequency: usize,
}

impl Summary {
    pub fn new(data: &[i64], median: f64, mode: ModeResult) -> Self {
        Summary {
            data: data.to_vec(),
            size: data.len(),
            median,
            mode: mode.values,
            mode_frequency: mode.frequency,
        }
    }
}

/// `[1, 2, 3]` style list of values.
pub(crate) struct ValueList<'a>(pub(crate) &'a [i64]);

impl fmt::Display for ValueList<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "[")?;
        for (i, value) in self.0.iter().enumerate() {
            if i > 0 {
                write!(f, ", ")?;
            }
            write!(f, "{}", value)?;
        }
        write!(f, "]")
    }
}

/// Renders the summary as text lines, median rounded to `precision` places.
pub fn render(summary: &Summary, precision: usize) -> String {
    let unit = if summary.size == 1 { "element" } else { "elements" };
    format!(
        "Data: {}\nSize: {} {}\nMedian: {:.*}\nMode: {}\n",
        ValueList(&summary.data),
        summary.size,
        unit,
        precision,
        summary.median,
        ModeDisplay::new(&summary.mode, summary.mode_frequency),
    )
}

pub fn render_json(summary: &Summary) -> Result<String> {
    Ok(serde_json::to_string_pretty(summary)?)
}
