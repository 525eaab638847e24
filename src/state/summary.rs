// Run summary counters and timing

use crate::state::TestStatus;
use serde::{Deserialize, Serialize};

/// Aggregate counters and timing bounds for a run.
///
/// Counters are only changed through [`Summary::record`], so `tests` always
/// equals the sum of the per-status counters.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Summary {
    tests: u64,
    passed: u64,
    failed: u64,
    pending: u64,
    skipped: u64,
    other: u64,
    start: u64,
    stop: u64,
}

impl Summary {
    /// Count one concluded test
    pub fn record(&mut self, status: TestStatus) {
        let counter = match status {
            TestStatus::Passed => &mut self.passed,
            TestStatus::Failed => &mut self.failed,
            TestStatus::Skipped => &mut self.skipped,
            TestStatus::Pending => &mut self.pending,
            TestStatus::Other => &mut self.other,
        };
        *counter += 1;
        self.tests += 1;
    }

    /// Mark the start of the run (epoch milliseconds)
    pub fn set_start(&mut self, start: u64) {
        self.start = start;
    }

    /// Mark the end of the run (epoch milliseconds), never earlier than start
    pub fn set_stop(&mut self, stop: u64) {
        self.stop = stop.max(self.start);
    }

    pub fn tests(&self) -> u64 {
        self.tests
    }

    pub fn passed(&self) -> u64 {
        self.passed
    }

    pub fn failed(&self) -> u64 {
        self.failed
    }

    pub fn pending(&self) -> u64 {
        self.pending
    }

    pub fn skipped(&self) -> u64 {
        self.skipped
    }

    pub fn other(&self) -> u64 {
        self.other
    }

    pub fn start(&self) -> u64 {
        self.start
    }

    pub fn stop(&self) -> u64 {
        self.stop
    }

    /// Get the number of tests for a status
    pub fn count(&self, status: TestStatus) -> u64 {
        match status {
            TestStatus::Passed => self.passed,
            TestStatus::Failed => self.failed,
            TestStatus::Skipped => self.skipped,
            TestStatus::Pending => self.pending,
            TestStatus::Other => self.other,
        }
    }

    /// Wall time between start and stop
    pub fn duration_ms(&self) -> u64 {
        self.stop.saturating_sub(self.start)
    }
}
