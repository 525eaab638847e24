// Test notification payloads as delivered by the host runner

use serde::{Deserialize, Serialize};
use serde_json::Value;

/// One recorded step of a test
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Step {
    /// Step duration in milliseconds
    #[serde(default)]
    pub duration: u64,
}

impl Step {
    pub fn new(duration: u64) -> Self {
        Self { duration }
    }
}

/// A concluded test as reported by the runner
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct TestRecord {
    #[serde(default)]
    pub title: String,
    #[serde(default)]
    pub steps: Vec<Step>,
}

impl TestRecord {
    pub fn new(title: impl Into<String>, steps: Vec<Step>) -> Self {
        Self {
            title: title.into(),
            steps,
        }
    }

    /// Read a runner-supplied JSON object.
    ///
    /// Never fails: a missing or non-string `title` becomes `""`, missing or
    /// non-array `steps` become empty, and a step without a non-negative
    /// integer `duration` counts as 0.
    pub fn from_value(value: &Value) -> Self {
        let title = value
            .get("title")
            .and_then(Value::as_str)
            .unwrap_or_default()
            .to_string();

        let steps = value
            .get("steps")
            .and_then(Value::as_array)
            .map(|steps| {
                steps
                    .iter()
                    .map(|step| {
                        Step::new(
                            step.get("duration")
                                .and_then(Value::as_u64)
                                .unwrap_or_default(),
                        )
                    })
                    .collect()
            })
            .unwrap_or_default();

        Self { title, steps }
    }

    /// Total of all step durations, 0 when there are no steps
    pub fn duration(&self) -> u64 {
        self.steps
            .iter()
            .fold(0u64, |total, step| total.saturating_add(step.duration))
    }
}
