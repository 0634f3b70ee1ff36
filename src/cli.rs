//! Command-line surface.

use std::path::PathBuf;

use clap::Parser;

use crate::config::{Config, ConfigError};

#[derive(Debug, Parser)]
#[command(
    name = "regform",
    version,
    about = "Higher Secondary registration form for the terminal"
)]
pub struct Cli {
    /// Config file to load instead of the default location
    #[arg(long, value_name = "PATH")]
    pub config: Option<PathBuf>,

    /// Write logs to this file
    #[arg(long, value_name = "PATH")]
    pub log_file: Option<PathBuf>,

    /// Log filter, e.g. "debug" or "regform=trace" (RUST_LOG wins if set)
    #[arg(long, value_name = "FILTER")]
    pub log_level: Option<String>,

    /// Disable the log file
    #[arg(long)]
    pub no_log: bool,

    /// Keep inline error hints visible after Cancel
    #[arg(long)]
    pub keep_errors_on_cancel: bool,
}

impl Cli {
    /// Load the config this invocation points at and layer the flags on top.
    pub fn resolve_config(&self) -> Result<Config, ConfigError> {
        let mut config = match &self.config {
            Some(path) => Config::load_existing(path)?,
            None => Config::load()?,
        };
        self.apply(&mut config);
        Ok(config)
    }

    pub fn apply(&self, config: &mut Config) {
        if let Some(path) = &self.log_file {
            config.logging.file = Some(path.clone());
        }
        if let Some(level) = &self.log_level {
            config.logging.level = level.clone();
        }
        if self.no_log {
            config.logging.enabled = false;
        }
        if self.keep_errors_on_cancel {
            config.form.clear_errors_on_cancel = false;
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn flags_override_config() {
        let cli = Cli::parse_from([
            "regform",
            "--log-level",
            "debug",
            "--no-log",
            "--keep-errors-on-cancel",
        ]);
        let mut config = Config::default();
        cli.apply(&mut config);
        assert_eq!(config.logging.level, "debug");
        assert!(!config.logging.enabled);
        assert!(!config.form.clear_errors_on_cancel);
    }

    #[test]
    fn named_config_must_exist() {
        let cli = Cli::parse_from(["regform", "--config", "/nonexistent/typo.toml"]);
        match cli.resolve_config() {
            Err(ConfigError::ReadError { path, source }) => {
                assert_eq!(path, PathBuf::from("/nonexistent/typo.toml"));
                assert_eq!(source.kind(), std::io::ErrorKind::NotFound);
            }
            other => panic!("Expected ReadError, got {other:?}"),
        }
    }

    #[test]
    fn no_flags_keep_config() {
        let cli = Cli::parse_from(["regform"]);
        let mut config = Config::default();
        cli.apply(&mut config);
        assert_eq!(config, Config::default());
    }
}
