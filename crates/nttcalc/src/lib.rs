//! nttcalc library: application logic for the multiplier binary.

pub mod app;
pub mod config;
pub mod errors;
