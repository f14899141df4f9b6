use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use std::{
    fs,
    path::{Path, PathBuf},
};

const ENABLE_LOGS: bool = true;

/// Environment variable naming the settings file when `--settings` is not given.
pub const SETTINGS_ENV: &str = "KIOSK_ADMIN_SETTINGS";

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct DashboardSettings {
    pub store_name: String,
    /// Seed for the mock order details (payment method, options, cancellations).
    pub order_seed: u64,
}

impl Default for DashboardSettings {
    fn default() -> Self {
        Self {
            store_name: "Kiosk Cafe".into(),
            order_seed: 42,
        }
    }
}

/// Read-only settings loaded once at start-up.
pub struct SettingsStore {
    path: Option<PathBuf>,
    data: DashboardSettings,
}

impl SettingsStore {
    pub fn new(path: Option<PathBuf>) -> Result<Self> {
        let data = match &path {
            Some(path) if path.exists() => {
                let contents = fs::read_to_string(path)
                    .with_context(|| format!("Failed to read settings from {}", path.display()))?;
                serde_json::from_str(&contents).unwrap_or_else(|err| {
                    crate::log_warn!(
                        "Ignoring malformed settings in {}: {}",
                        path.display(),
                        err
                    );
                    DashboardSettings::default()
                })
            }
            Some(path) => {
                crate::log_info!("No settings file at {}; using defaults", path.display());
                DashboardSettings::default()
            }
            None => DashboardSettings::default(),
        };

        Ok(Self { path, data })
    }

    /// Path from the `KIOSK_ADMIN_SETTINGS` environment variable, if set.
    pub fn from_env() -> Result<Self> {
        Self::new(std::env::var_os(SETTINGS_ENV).map(PathBuf::from))
    }

    pub fn settings(&self) -> &DashboardSettings {
        &self.data
    }

    pub fn path(&self) -> Option<&Path> {
        self.path.as_deref()
    }
}
