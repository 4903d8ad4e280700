// Copyright 2026 Open Nexus OS Contributors
// SPDX-License-Identifier: Apache-2.0

//! Printer configuration: the build-time defaults from cargo features, an
//! optional TOML file that can narrow them, and the process-wide value
//! installed once at startup.

use once_cell::sync::OnceCell;
use serde::Deserialize;
use std::fs;
use std::path::{Path, PathBuf};
use thiserror::Error;

use crate::Severity;

/// Environment variable naming a TOML config file for [`Config::from_env`].
pub const CONFIG_ENV: &str = "FANCY_PRINT_CONFIG";

static ACTIVE: OnceCell<Config> = OnceCell::new();

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("failed to read fancy-print config {path}: {source}")]
    Read {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error("failed to parse fancy-print config {path}: {source}")]
    Parse {
        path: PathBuf,
        #[source]
        source: toml::de::Error,
    },
    #[error("fancy-print config already installed")]
    AlreadyInstalled,
}

/// Which severities print and how lines are rendered.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Config {
    pub debug: bool,
    pub warning: bool,
    pub error: bool,
    pub info: bool,
    pub success: bool,
    /// Column layout with tag and location. When false every line is plain.
    pub fancy: bool,
    /// Wrap fancy lines in ANSI color. Has no effect on plain lines.
    pub color: bool,
}

impl Config {
    /// The configuration selected by this crate's cargo features.
    pub const COMPILED: Config = Config {
        debug: cfg!(feature = "debug-logs"),
        warning: cfg!(feature = "warning-logs"),
        error: cfg!(feature = "error-logs"),
        info: cfg!(feature = "info-logs"),
        success: cfg!(feature = "success-logs"),
        fancy: cfg!(feature = "fancy"),
        color: cfg!(feature = "color"),
    };

    pub const fn severity_enabled(&self, severity: Severity) -> bool {
        match severity {
            Severity::Debug => self.debug,
            Severity::Warning => self.warning,
            Severity::Error => self.error,
            Severity::Info => self.info,
            Severity::Success => self.success,
        }
    }

    pub fn with_severity(mut self, severity: Severity, enabled: bool) -> Self {
        match severity {
            Severity::Debug => self.debug = enabled,
            Severity::Warning => self.warning = enabled,
            Severity::Error => self.error = enabled,
            Severity::Info => self.info = enabled,
            Severity::Success => self.success = enabled,
        }
        self
    }

    /// Keeps only what both `self` and `limit` enable.
    pub const fn restrict_to(self, limit: Config) -> Config {
        Config {
            debug: self.debug && limit.debug,
            warning: self.warning && limit.warning,
            error: self.error && limit.error,
            info: self.info && limit.info,
            success: self.success && limit.success,
            fancy: self.fancy && limit.fancy,
            color: self.color && limit.color,
        }
    }

    /// Parses a TOML document. Absent keys keep their compiled value and the
    /// result never enables anything the build compiled out.
    ///
    /// ```toml
    /// fancy = true
    /// color = false
    ///
    /// [levels]
    /// debug = false
    /// ```
    pub fn from_toml_str(input: &str) -> Result<Config, toml::de::Error> {
        let raw: RawConfig = toml::from_str(input)?;
        Ok(raw.overlay(Config::COMPILED).restrict_to(Config::COMPILED))
    }

    pub fn load(path: &Path) -> Result<Config, ConfigError> {
        let data = fs::read_to_string(path)
            .map_err(|source| ConfigError::Read { path: path.to_path_buf(), source })?;
        Config::from_toml_str(&data)
            .map_err(|source| ConfigError::Parse { path: path.to_path_buf(), source })
    }

    /// Loads the file named by [`CONFIG_ENV`], if the variable is set and
    /// non-empty.
    pub fn from_env() -> Result<Option<Config>, ConfigError> {
        match std::env::var_os(CONFIG_ENV) {
            Some(path) if !path.is_empty() => Config::load(Path::new(&path)).map(Some),
            _ => Ok(None),
        }
    }
}

impl Default for Config {
    fn default() -> Self {
        Config::COMPILED
    }
}

/// Sets the process-wide configuration. Only the first call succeeds; call it
/// before the first log line.
pub fn install(config: Config) -> Result<(), ConfigError> {
    ACTIVE.set(config.restrict_to(Config::COMPILED)).map_err(|_| ConfigError::AlreadyInstalled)
}

/// The installed configuration, or [`Config::COMPILED`] if none was installed.
pub fn active() -> Config {
    ACTIVE.get().copied().unwrap_or(Config::COMPILED)
}

#[derive(Debug, Default, Deserialize)]
#[serde(deny_unknown_fields)]
struct RawConfig {
    fancy: Option<bool>,
    color: Option<bool>,
    #[serde(default)]
    levels: RawLevels,
}

#[derive(Debug, Default, Deserialize)]
#[serde(deny_unknown_fields)]
struct RawLevels {
    debug: Option<bool>,
    warning: Option<bool>,
    error: Option<bool>,
    info: Option<bool>,
    success: Option<bool>,
}

impl RawConfig {
    fn overlay(self, base: Config) -> Config {
        let levels = self.levels;
        Config {
            debug: levels.debug.unwrap_or(base.debug),
            warning: levels.warning.unwrap_or(base.warning),
            error: levels.error.unwrap_or(base.error),
            info: levels.info.unwrap_or(base.info),
            success: levels.success.unwrap_or(base.success),
            fancy: self.fancy.unwrap_or(base.fancy),
            color: self.color.unwrap_or(base.color),
        }
    }
}
