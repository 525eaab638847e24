// State module - CTRF report document
// The single report owned by a reporter for the lifetime of one run

pub mod environment;
pub mod record;
pub mod result;
pub mod summary;

pub use environment::Environment;
pub use record::{Step, TestRecord};
pub use result::TestResult;
pub use summary::Summary;

use serde::{Deserialize, Serialize};

/// Top-level CTRF document
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Report {
    pub results: Results,
}

impl Report {
    /// Create an empty report for the given test tool
    pub fn new(tool_name: impl Into<String>) -> Self {
        Self {
            results: Results {
                tool: Tool {
                    name: tool_name.into(),
                },
                summary: Summary::default(),
                tests: Vec::new(),
                environment: None,
            },
        }
    }
}

/// Body of the report
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Results {
    pub tool: Tool,
    pub summary: Summary,
    pub tests: Vec<TestResult>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub environment: Option<Environment>,
}

impl Results {
    /// Append a test result and count it in the summary
    pub fn add(&mut self, result: TestResult) {
        self.summary.record(result.status);
        self.tests.push(result);
    }

    /// Get all results in completion order
    pub fn all(&self) -> &[TestResult] {
        &self.tests
    }
}

/// The test runner that produced the results
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Tool {
    pub name: String,
}

/// Test status
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TestStatus {
    Passed,
    Failed,
    Skipped,
    Pending,
    Other,
}

impl TestStatus {
    pub fn as_str(&self) -> &'static str {
        match self {
            TestStatus::Passed => "passed",
            TestStatus::Failed => "failed",
            TestStatus::Skipped => "skipped",
            TestStatus::Pending => "pending",
            TestStatus::Other => "other",
        }
    }
}

impl std::fmt::Display for TestStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}
