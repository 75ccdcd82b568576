//! # nttcalc-calibration
//!
//! Measures where the hybrid path overtakes the simple path on this
//! machine and persists the result as a calibration profile.

pub mod adaptive;
pub mod calibration;
pub mod io;
pub mod microbench;
pub mod profile;
pub mod runner;

pub use calibration::{CalibrationEngine, CalibrationMode};
pub use profile::CalibrationProfile;
