//! Colored console output for preprocessing and evaluation events.
//!
//! Call [`init`] once before building the scenario to see position and
//! evaluation summaries on stdout.

pub use rosterforge_console::{init, RosterConsoleLayer};
