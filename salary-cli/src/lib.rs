//! Command-line presenter for the take-home-pay calculator.
//!
//! Collects the salary input, converts it to a monthly amount, runs the
//! calculation and renders the breakdown as plain text.

pub mod app;
pub mod logging;
pub mod report;
pub mod utils;
