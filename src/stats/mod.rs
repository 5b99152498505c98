//! Median and mode over an integer sample.
//!
//! Both computations take the sample by shared reference and work on their
//! own sorted copy, so neither ever reorders the caller's data.

mod median;
mod mode;
mod sort;

pub use median::median;
pub(crate) use mode::ModeDisplay;
pub use mode::{mode, ModeResult};
pub use sort::sorted_copy;
