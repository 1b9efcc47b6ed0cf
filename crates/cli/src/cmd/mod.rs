mod deps;
mod info;
mod report;

pub use deps::{DepsArgs, cmd_deps};
pub use info::cmd_info;
pub use report::{ReportArgs, cmd_report};
pub use run_tests::{TestsArgs, cmd_tests};
