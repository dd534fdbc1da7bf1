//! CLI command handlers, one file per command.

mod check;
mod completions;
mod scan;
mod settings;

pub use check::run_check;
pub use completions::{run_completions, run_man};
pub use scan::run_scan;
pub use settings::run_settings;
