//! # nttcalc-cli
//!
//! CLI output, the interactive multiplication session, and shell completion.

pub mod completion;
pub mod output;
pub mod presenter;
pub mod session;
pub mod ui;

pub use presenter::CLIResultPresenter;
pub use session::{run_session, SessionConfig, SessionStats};
