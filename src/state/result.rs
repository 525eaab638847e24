// Test result structures

use crate::state::{TestRecord, TestStatus};
use serde::{Deserialize, Serialize};

/// Normalized record of one concluded test
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TestResult {
    pub name: String,
    pub status: TestStatus,
    /// Sum of step durations in milliseconds
    pub duration: u64,
}

impl TestResult {
    pub fn new(name: impl Into<String>, status: TestStatus, duration: u64) -> Self {
        Self {
            name: name.into(),
            status,
            duration,
        }
    }

    /// Build a result from a test notification payload
    pub fn from_record(test: &TestRecord, status: TestStatus) -> Self {
        Self::new(test.title.clone(), status, test.duration())
    }
}
