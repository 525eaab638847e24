// Report writer - persists the finished CTRF document as JSON

use crate::state::Report;
use anyhow::{Context, Result};
use std::fs;
use std::path::{Path, PathBuf};
use tracing::{error, info};

/// Writes a report to `<output_dir>/<filename>`
#[derive(Debug, Clone)]
pub struct ReportWriter {
    output_dir: PathBuf,
    filename: String,
}

impl ReportWriter {
    pub fn new(output_dir: impl Into<PathBuf>, filename: impl Into<String>) -> Self {
        Self {
            output_dir: output_dir.into(),
            filename: filename.into(),
        }
    }

    pub fn output_dir(&self) -> &Path {
        &self.output_dir
    }

    pub fn filename(&self) -> &str {
        &self.filename
    }

    pub fn output_path(&self) -> PathBuf {
        self.output_dir.join(&self.filename)
    }

    /// Pretty JSON with two-space indentation and one trailing newline
    pub fn render(report: &Report) -> serde_json::Result<String> {
        let mut json = serde_json::to_string_pretty(report)?;
        json.push('\n');
        Ok(json)
    }

    /// Write the report, returning the path written.
    ///
    /// Failures are logged and swallowed: the report is auxiliary output and
    /// must never fail the run that produced it. Use [`Self::try_persist`] to
    /// observe the error.
    pub fn persist(&self, report: &Report) -> Option<PathBuf> {
        match self.try_persist(report) {
            Ok(path) => {
                info!(
                    "successfully written ctrf json to {}/{}",
                    self.output_dir.display(),
                    self.filename
                );
                Some(path)
            }
            Err(e) => {
                error!(
                    "Error writing ctrf json report to {}/{}: {:#}",
                    self.output_dir.display(),
                    self.filename,
                    e
                );
                None
            }
        }
    }

    /// Write the report, overwriting any existing file
    pub fn try_persist(&self, report: &Report) -> Result<PathBuf> {
        fs::create_dir_all(&self.output_dir).with_context(|| {
            format!(
                "Failed to create report directory: {}",
                self.output_dir.display()
            )
        })?;

        let json = Self::render(report).context("Failed to serialize report to JSON")?;

        let path = self.output_path();
        fs::write(&path, json)
            .with_context(|| format!("Failed to write report file: {}", path.display()))?;

        Ok(path)
    }
}
