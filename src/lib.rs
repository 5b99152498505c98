pub mod calculator;
pub mod config;
pub mod error;
pub mod input;
pub mod report;
pub mod session;
pub mod stats;
