// Configuration file handling

use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};
use thiserror::Error;
use tracing::warn;

pub const DEFAULT_OUTPUT_FILE: &str = "ctrf-report.json";
pub const DEFAULT_OUTPUT_DIR: &str = "ctrf";
pub const DEFAULT_TOOL_NAME: &str = "codeceptjs";
pub const JSON_EXTENSION: &str = ".json";

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("failed to read config file {path}: {source}")]
    Read {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("failed to parse config file {path}: {source}")]
    Parse {
        path: PathBuf,
        #[source]
        source: toml::de::Error,
    },
}

/// On-disk layout: options live under a `[reporter]` table
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
struct ConfigFile {
    #[serde(default)]
    reporter: ReporterConfig,
}

/// Reporter options, read once when the reporter is built
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ReporterConfig {
    /// Report file name, `.json` is appended when missing
    #[serde(default = "default_output_file")]
    pub output_file: String,

    /// Directory the report is written to
    #[serde(default = "default_output_dir")]
    pub output_dir: PathBuf,

    /// Name recorded as the producing tool
    #[serde(default = "default_tool_name")]
    pub tool_name: String,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub app_name: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub app_version: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub os_platform: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub os_release: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub os_version: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub build_name: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub build_number: Option<String>,
}

impl Default for ReporterConfig {
    fn default() -> Self {
        Self {
            output_file: default_output_file(),
            output_dir: default_output_dir(),
            tool_name: default_tool_name(),
            app_name: None,
            app_version: None,
            os_platform: None,
            os_release: None,
            os_version: None,
            build_name: None,
            build_number: None,
        }
    }
}

fn default_output_file() -> String {
    String::from(DEFAULT_OUTPUT_FILE)
}

fn default_output_dir() -> PathBuf {
    PathBuf::from(DEFAULT_OUTPUT_DIR)
}

fn default_tool_name() -> String {
    String::from(DEFAULT_TOOL_NAME)
}

/// Append the `.json` extension unless the name already has it
pub fn normalize_filename(name: &str) -> String {
    if name.ends_with(JSON_EXTENSION) {
        name.to_string()
    } else {
        format!("{name}{JSON_EXTENSION}")
    }
}

impl ReporterConfig {
    /// Output file name with the `.json` extension applied
    pub fn filename(&self) -> String {
        normalize_filename(&self.output_file)
    }

    /// Load configuration from default locations, falling back to defaults
    pub fn load() -> Self {
        // Check locations in order:
        // 1. .ctrfrc (current directory)
        // 2. ~/.ctrfrc (home directory)
        // 3. .ctrfrc.toml (current directory)
        // 4. ~/.ctrfrc.toml (home directory)

        let cwd = std::env::current_dir().ok();
        let home = dirs::home_dir();

        let names = [".ctrfrc", ".ctrfrc.toml"];
        let paths = names.iter().flat_map(|name| {
            [cwd.as_ref(), home.as_ref()]
                .into_iter()
                .flatten()
                .map(move |dir| dir.join(name))
        });

        for path in paths {
            if path.exists() {
                return Self::load_from_file(&path).unwrap_or_default();
            }
        }

        Self::default()
    }

    /// Load configuration from a specific file, `None` if it is unusable
    pub fn load_from_file(path: &Path) -> Option<Self> {
        match Self::try_load_from_file(path) {
            Ok(config) => Some(config),
            Err(e) => {
                warn!("{}", e);
                None
            }
        }
    }

    /// Load configuration from a specific file
    pub fn try_load_from_file(path: &Path) -> Result<Self, ConfigError> {
        let content = std::fs::read_to_string(path).map_err(|source| ConfigError::Read {
            path: path.to_path_buf(),
            source,
        })?;
        toml::from_str::<ConfigFile>(&content)
            .map(|file| file.reporter)
            .map_err(|source| ConfigError::Parse {
                path: path.to_path_buf(),
                source,
            })
    }

    /// Parse configuration from TOML string
    pub fn parse(content: &str) -> Option<Self> {
        toml::from_str::<ConfigFile>(content)
            .ok()
            .map(|file| file.reporter)
    }

    /// Render configuration as TOML
    pub fn to_toml(&self) -> String {
        let file = ConfigFile {
            reporter: self.clone(),
        };
        toml::to_string_pretty(&file).unwrap_or_else(|_| String::new())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_config() {
        let toml = r#"
[reporter]
output_file = "results"
output_dir = "reports/ctrf"
tool_name = "playwright"
app_name = "shop"
app_version = "1.2.3"
build_number = "77"
"#;

        let config = ReporterConfig::parse(toml).expect("Failed to parse config");
        assert_eq!(config.output_file, "results");
        assert_eq!(config.filename(), "results.json");
        assert_eq!(config.output_dir, PathBuf::from("reports/ctrf"));
        assert_eq!(config.tool_name, "playwright");
        assert_eq!(config.app_name.as_deref(), Some("shop"));
        assert_eq!(config.app_version.as_deref(), Some("1.2.3"));
        assert_eq!(config.build_number.as_deref(), Some("77"));
        assert!(config.os_platform.is_none());
    }

    #[test]
    fn test_parse_empty_uses_defaults() {
        assert_eq!(ReporterConfig::parse("").unwrap(), ReporterConfig::default());
        assert_eq!(
            ReporterConfig::parse("[reporter]\n").unwrap(),
            ReporterConfig::default()
        );
    }

    #[test]
    fn test_parse_invalid() {
        assert!(ReporterConfig::parse("[reporter]\noutput_file = 3").is_none());
    }

    #[test]
    fn test_normalize_filename() {
        assert_eq!(normalize_filename("report"), "report.json");
        assert_eq!(normalize_filename("report.json"), "report.json");
        assert_eq!(normalize_filename(&normalize_filename("x")), "x.json");
        assert_eq!(normalize_filename("report.JSON"), "report.JSON.json");
    }

    #[test]
    fn test_toml_round_trip() {
        let config = ReporterConfig {
            output_dir: PathBuf::from("out"),
            os_release: Some("6.1".to_string()),
            ..ReporterConfig::default()
        };
        let rendered = config.to_toml();
        assert!(rendered.contains("[reporter]"));
        assert!(!rendered.contains("app_name"));
        assert_eq!(ReporterConfig::parse(&rendered).unwrap(), config);
    }

    #[test]
    fn test_try_load_missing_file() {
        let err = ReporterConfig::try_load_from_file(Path::new("/nonexistent/.ctrfrc"))
            .expect_err("missing file must fail");
        assert!(matches!(err, ConfigError::Read { .. }));
        assert!(err.to_string().contains("/nonexistent/.ctrfrc"));
    }
}
