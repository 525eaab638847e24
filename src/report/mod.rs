// Report module - lifecycle notifications and CTRF output

pub mod ctrf;
pub mod writer;

use crate::state::{TestRecord, TestStatus};
pub use ctrf::CtrfReporter;
pub use writer::ReportWriter;

/// Lifecycle notifications delivered by the host test runner.
///
/// Calls arrive one at a time, in program order. None of them report errors
/// back to the runner.
pub trait Reporter {
    /// Called once before the first test runs
    fn on_run_start(&mut self);

    /// Called when a test concludes with the given outcome
    fn on_test_end(&mut self, test: &TestRecord, status: TestStatus);

    /// Called when a test passes
    fn on_test_passed(&mut self, test: &TestRecord) {
        self.on_test_end(test, TestStatus::Passed);
    }

    /// Called when a test fails
    fn on_test_failed(&mut self, test: &TestRecord) {
        self.on_test_end(test, TestStatus::Failed);
    }

    /// Called when a test is skipped
    fn on_test_skipped(&mut self, test: &TestRecord) {
        self.on_test_end(test, TestStatus::Skipped);
    }

    /// Called once after the last test has concluded
    fn on_run_end(&mut self);
}
