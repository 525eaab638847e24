pub mod config;
pub mod logging;
pub mod report;
pub mod state;
pub mod time;

pub use config::ReporterConfig;
pub use report::{CtrfReporter, ReportWriter, Reporter};
pub use state::{Report, TestRecord, TestStatus};
