//! CLI command handlers, one file per command.

mod completions;
mod faces;
mod plan;
mod renew;
mod sync;
mod update;

pub use completions::run_completions;
pub use faces::run_faces;
pub use plan::run_plan;
pub use renew::run_renew;
pub use sync::run_sync;
pub use update::run_update;
