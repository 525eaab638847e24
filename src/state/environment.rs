// Environment metadata attached to the report

use crate::config::ReporterConfig;
use serde::{Deserialize, Serialize};

/// Describes the system and build under test
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Environment {
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

impl Environment {
    /// Copy the environment fields that were supplied in configuration
    pub fn from_config(config: &ReporterConfig) -> Self {
        Self {
            app_name: config.app_name.clone(),
            app_version: config.app_version.clone(),
            os_platform: config.os_platform.clone(),
            os_release: config.os_release.clone(),
            os_version: config.os_version.clone(),
            build_name: config.build_name.clone(),
            build_number: config.build_number.clone(),
        }
    }

    /// True when no field was supplied
    pub fn is_empty(&self) -> bool {
        self == &Self::default()
    }

    /// `None` for an empty environment so it is left out of the report
    pub fn into_option(self) -> Option<Self> {
        if self.is_empty() { None } else { Some(self) }
    }
}
