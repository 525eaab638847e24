// CTRF reporter - accumulates lifecycle notifications into one report

use super::{ReportWriter, Reporter};
use crate::config::ReporterConfig;
use crate::state::{Environment, Report, TestRecord, TestResult, TestStatus};
use crate::time::{Clock, SystemClock};
use std::fs;
use std::path::{Path, PathBuf};
use tracing::{debug, trace, warn};

/// Builds a CTRF report over a single run and writes it when the run ends
pub struct CtrfReporter {
    config: ReporterConfig,
    report: Report,
    writer: ReportWriter,
    clock: Box<dyn Clock>,
}

impl CtrfReporter {
    /// Create a reporter using the system clock
    pub fn new(config: ReporterConfig) -> Self {
        Self::with_clock(config, SystemClock)
    }

    /// Create a reporter with an explicit time source
    pub fn with_clock(config: ReporterConfig, clock: impl Clock + 'static) -> Self {
        let writer = ReportWriter::new(config.output_dir.clone(), config.filename());

        // The writer creates the directory again at the end of the run
        if let Err(e) = fs::create_dir_all(writer.output_dir()) {
            warn!(
                "Failed to create ctrf report directory {}: {}",
                writer.output_dir().display(),
                e
            );
        }

        Self {
            report: Report::new(config.tool_name.clone()),
            config,
            writer,
            clock: Box::new(clock),
        }
    }

    /// The report as accumulated so far
    pub fn report(&self) -> &Report {
        &self.report
    }

    /// Normalized output file name
    pub fn filename(&self) -> &str {
        self.writer.filename()
    }

    pub fn output_path(&self) -> PathBuf {
        self.writer.output_path()
    }

    pub fn output_dir(&self) -> &Path {
        self.writer.output_dir()
    }
}

impl Reporter for CtrfReporter {
    fn on_run_start(&mut self) {
        let results = &mut self.report.results;
        results.summary.set_start(self.clock.unix_millis());
        results.environment = Environment::from_config(&self.config).into_option();

        debug!(
            "ctrf run started at {} (environment: {})",
            results.summary.start(),
            results.environment.is_some()
        );
    }

    fn on_test_end(&mut self, test: &TestRecord, status: TestStatus) {
        let result = TestResult::from_record(test, status);
        trace!(
            "ctrf test '{}' {} in {}ms",
            result.name, result.status, result.duration
        );
        self.report.results.add(result);
    }

    fn on_run_end(&mut self) {
        let summary = &mut self.report.results.summary;
        summary.set_stop(self.clock.unix_millis());

        debug!(
            "ctrf run finished: {} tests, {} passed, {} failed, {} skipped",
            summary.tests(),
            summary.passed(),
            summary.failed(),
            summary.skipped()
        );

        // Persistence errors are logged inside the writer and not propagated
        self.writer.persist(&self.report);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::state::Step;
    use crate::time::FixedClock;
    use std::sync::Arc;
    use std::sync::atomic::{AtomicU64, Ordering};
    use tempfile::TempDir;

    /// Clock that advances by a fixed amount on every read
    struct SteppingClock {
        now: Arc<AtomicU64>,
        step: u64,
    }

    impl Clock for SteppingClock {
        fn unix_millis(&self) -> u64 {
            self.now.fetch_add(self.step, Ordering::SeqCst)
        }
    }

    fn config_in(dir: &TempDir) -> ReporterConfig {
        ReporterConfig {
            output_dir: dir.path().join("ctrf"),
            ..ReporterConfig::default()
        }
    }

    #[test]
    fn test_new_creates_output_dir_and_normalizes_name() {
        let temp_dir = TempDir::new().expect("Failed to create temp dir");
        let config = ReporterConfig {
            output_file: "results".to_string(),
            output_dir: temp_dir.path().join("a/b/c"),
            ..ReporterConfig::default()
        };

        let reporter = CtrfReporter::new(config);

        assert!(temp_dir.path().join("a/b/c").is_dir());
        assert_eq!(reporter.filename(), "results.json");
        assert_eq!(reporter.output_path(), temp_dir.path().join("a/b/c/results.json"));
    }

    #[test]
    fn test_run_start_sets_start_and_environment() {
        let temp_dir = TempDir::new().expect("Failed to create temp dir");
        let config = ReporterConfig {
            app_version: Some("2.0".to_string()),
            ..config_in(&temp_dir)
        };
        let mut reporter = CtrfReporter::with_clock(config, FixedClock(1_000));

        reporter.on_run_start();

        let results = &reporter.report().results;
        assert_eq!(results.summary.start(), 1_000);
        let env = results.environment.as_ref().expect("environment attached");
        assert_eq!(env.app_version.as_deref(), Some("2.0"));
        assert!(env.app_name.is_none());
    }

    #[test]
    fn test_run_start_without_environment() {
        let temp_dir = TempDir::new().expect("Failed to create temp dir");
        let mut reporter = CtrfReporter::with_clock(config_in(&temp_dir), FixedClock(5));
        reporter.on_run_start();
        assert!(reporter.report().results.environment.is_none());
    }

    #[test]
    fn test_pending_and_other_are_first_class() {
        let temp_dir = TempDir::new().expect("Failed to create temp dir");
        let mut reporter = CtrfReporter::with_clock(config_in(&temp_dir), FixedClock(5));
        let test = TestRecord::new("t", vec![Step::new(2)]);

        reporter.on_test_end(&test, TestStatus::Pending);
        reporter.on_test_end(&test, TestStatus::Other);

        let summary = &reporter.report().results.summary;
        assert_eq!(summary.tests(), 2);
        assert_eq!(summary.pending(), 1);
        assert_eq!(summary.other(), 1);
    }

    #[test]
    fn test_repeated_run_start_overwrites_start() {
        let temp_dir = TempDir::new().expect("Failed to create temp dir");
        let clock = SteppingClock {
            now: Arc::new(AtomicU64::new(100)),
            step: 10,
        };
        let mut reporter = CtrfReporter::with_clock(config_in(&temp_dir), clock);

        reporter.on_run_start();
        reporter.on_run_start();

        assert_eq!(reporter.report().results.summary.start(), 110);
    }

    #[test]
    fn test_run_end_sets_stop_and_writes() {
        let temp_dir = TempDir::new().expect("Failed to create temp dir");
        let clock = SteppingClock {
            now: Arc::new(AtomicU64::new(1_000)),
            step: 250,
        };
        let mut reporter = CtrfReporter::with_clock(config_in(&temp_dir), clock);

        reporter.on_run_start();
        reporter.on_test_passed(&TestRecord::new("A", vec![Step::new(1)]));
        reporter.on_run_end();

        let summary = &reporter.report().results.summary;
        assert_eq!(summary.start(), 1_000);
        assert_eq!(summary.stop(), 1_250);
        assert!(reporter.output_path().is_file());
    }

    #[test]
    fn test_run_end_without_run_start() {
        let temp_dir = TempDir::new().expect("Failed to create temp dir");
        let mut reporter = CtrfReporter::with_clock(config_in(&temp_dir), FixedClock(77));

        reporter.on_run_end();

        let summary = &reporter.report().results.summary;
        assert_eq!(summary.start(), 0);
        assert_eq!(summary.stop(), 77);
        assert!(reporter.output_path().is_file());
    }
}
