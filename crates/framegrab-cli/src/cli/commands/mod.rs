//! CLI command handlers. Each command is in its own file.

mod animate;
mod completions;
mod fetch;
mod jobs;
mod run;
mod session;

pub use animate::{run_animate, AnimateArgs};
pub use completions::run_completions;
pub use fetch::run_fetch;
pub use jobs::run_jobs;
pub use run::run_named_jobs;
