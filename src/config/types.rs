use std::path::PathBuf;

use serde::{Deserialize, Serialize};

use crate::form::{CancelPolicy, DEFAULT_COURSES};

/// Root configuration container.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Default)]
#[serde(default)]
pub struct Config {
    pub school: SchoolConfig,
    pub form: FormConfig,
    pub ui: UiConfig,
    pub logging: LoggingConfig,
}

/// Branding shown in the header.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct SchoolConfig {
    pub name: String,
    /// Form heading (e.g., "Higher Secondary Registration Form").
    pub title: String,
}

/// Form behaviour settings.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct FormConfig {
    /// Courses offered in the course selector, in display order.
    pub courses: Vec<String>,
    /// Reset error flags along with the values on Cancel (default: true).
    pub clear_errors_on_cancel: bool,
}

/// Terminal UI settings.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct UiConfig {
    /// Event poll interval in milliseconds (default: 250).
    pub tick_rate_ms: u64,
}

/// Log file settings.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct LoggingConfig {
    pub enabled: bool,
    /// `EnvFilter` directive, e.g. "info" or "regform=debug".
    pub level: String,
    /// Log file path. Defaults to the platform data dir.
    pub file: Option<PathBuf>,
}

impl Default for SchoolConfig {
    fn default() -> Self {
        Self {
            name: "R.R International High School".to_string(),
            title: "Higher Secondary Registration Form".to_string(),
        }
    }
}

impl Default for FormConfig {
    fn default() -> Self {
        Self {
            courses: DEFAULT_COURSES.iter().map(|c| c.to_string()).collect(),
            clear_errors_on_cancel: true,
        }
    }
}

impl FormConfig {
    pub fn cancel_policy(&self) -> CancelPolicy {
        if self.clear_errors_on_cancel {
            CancelPolicy::ClearErrors
        } else {
            CancelPolicy::KeepErrors
        }
    }
}

impl Default for UiConfig {
    fn default() -> Self {
        Self { tick_rate_ms: 250 }
    }
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            enabled: true,
            level: "info".to_string(),
            file: None,
        }
    }
}
