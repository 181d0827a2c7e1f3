//! Configuration snapshot loading.
//!
//! This module provides the [`SettingsLoader`] type for loading per-company
//! settings from YAML files into an immutable [`CompanySettings`] snapshot.

use std::fs;
use std::path::Path;

use crate::error::{EngineError, EngineResult};

use super::types::{
    AllowanceConfig, BreakConfig, CompanySettings, DeductionConfig, OvertimeConfig, PayrollConfig,
    TimeRoundingConfig,
};

/// Loads per-company settings from a snapshot directory.
///
/// Every file is optional: an absent file leaves its section unset and the
/// engines fall back to their documented defaults. A file that exists but
/// does not parse is an error; silently ignoring a malformed section would
/// miscalculate pay.
///
/// # Directory Structure
///
/// ```text
/// settings/acme/
/// ├── payroll.yaml        # Standard days/hours, net rounding policy
/// ├── breaks.yaml         # Break tracking and capping
/// ├── overtime.yaml       # Caps and bucket multipliers
/// ├── allowances.yaml     # Allowance rules
/// ├── deductions.yaml     # Penalties and deduction rules
/// └── time_rounding.yaml  # Check-in/out rounding
/// ```
///
/// # Example
///
/// ```no_run
/// use payroll_engine::config::SettingsLoader;
///
/// let settings = SettingsLoader::load("./settings/acme")?.into_settings();
/// assert!(settings.payroll.is_some());
/// # Ok::<(), payroll_engine::error::EngineError>(())
/// ```
#[derive(Debug, Clone)]
pub struct SettingsLoader {
    settings: CompanySettings,
}

impl SettingsLoader {
    /// Loads settings from the specified directory.
    ///
    /// # Errors
    ///
    /// Returns [`EngineError::ConfigNotFound`] if the directory itself does
    /// not exist, or [`EngineError::ConfigParseError`] if any present file
    /// contains invalid YAML.
    pub fn load<P: AsRef<Path>>(path: P) -> EngineResult<Self> {
        let path = path.as_ref();

        if !path.is_dir() {
            return Err(EngineError::ConfigNotFound {
                path: path.display().to_string(),
            });
        }

        let settings = CompanySettings {
            payroll: Self::load_yaml::<PayrollConfig>(&path.join("payroll.yaml"))?,
            breaks: Self::load_yaml::<BreakConfig>(&path.join("breaks.yaml"))?,
            overtime: Self::load_yaml::<OvertimeConfig>(&path.join("overtime.yaml"))?,
            allowances: Self::load_yaml::<AllowanceConfig>(&path.join("allowances.yaml"))?,
            deductions: Self::load_yaml::<DeductionConfig>(&path.join("deductions.yaml"))?,
            time_rounding: Self::load_yaml::<TimeRoundingConfig>(&path.join("time_rounding.yaml"))?,
        };

        Ok(Self { settings })
    }

    /// Loads and parses one optional YAML file.
    fn load_yaml<T: serde::de::DeserializeOwned>(path: &Path) -> EngineResult<Option<T>> {
        let content = match fs::read_to_string(path) {
            Ok(content) => content,
            Err(_) => return Ok(None),
        };

        serde_yaml::from_str(&content)
            .map(Some)
            .map_err(|e| EngineError::ConfigParseError {
                path: path.display().to_string(),
                message: e.to_string(),
            })
    }

    /// Returns a reference to the loaded settings.
    pub fn settings(&self) -> &CompanySettings {
        &self.settings
    }

    /// Consumes the loader, returning the settings snapshot.
    pub fn into_settings(self) -> CompanySettings {
        self.settings
    }
}
