use serde::Deserialize;
use std::path::{Path, PathBuf};

use crate::core::errors::{Result, SecureStoreError};
use crate::core::models::device::{BiometricStatus, BiometryType, DeviceContext};

/// Current format version supported by this build of sealstore.
pub const CURRENT_FORMAT_VERSION: u32 = 1;

/// API level assumed when the host declares no `[device]` section.
const DEFAULT_API_LEVEL: u32 = 34;

/// Top-level sealstore configuration read from `<store_dir>/config.toml`.
#[derive(Debug, Clone, Deserialize)]
pub struct AppConfig {
    pub store: StoreSection,
    pub device: Option<DeviceSection>,
}

impl AppConfig {
    /// Load the configuration from `<store_dir>/config.toml`.
    pub fn load(store_dir: &Path) -> Result<Self> {
        let config_path = store_dir.join("config.toml");
        if !config_path.exists() {
            return Err(SecureStoreError::InvalidConfig {
                detail: "config.toml not found. Run 'sealstore init' first.".into(),
            });
        }
        let content = std::fs::read_to_string(&config_path)?;
        let config: Self = toml::from_str(&content).map_err(|e| SecureStoreError::InvalidConfig {
            detail: format!("Failed to parse config.toml: {e}"),
        })?;

        if config.store.format_version > CURRENT_FORMAT_VERSION {
            return Err(SecureStoreError::InvalidConfig {
                detail: format!(
                    "Store uses format version {}, but this build supports up to {}. \
                     Update sealstore.",
                    config.store.format_version, CURRENT_FORMAT_VERSION
                ),
            });
        }

        Ok(config)
    }

    /// Absolute path of the identity file; relative paths resolve against
    /// the store directory.
    pub fn identity_path(&self, store_dir: &Path) -> PathBuf {
        let configured = Path::new(&self.store.identity_file);
        if configured.is_absolute() {
            configured.to_path_buf()
        } else {
            store_dir.join(configured)
        }
    }

    /// Device snapshot declared by the host, or the default profile when
    /// the `[device]` section is absent: a current API level with no
    /// biometric hardware.
    pub fn device_context(&self) -> DeviceContext {
        match &self.device {
            Some(section) => {
                let mut device = DeviceContext::new(
                    section.api_level,
                    section.biometrics.unwrap_or(BiometricStatus::NoHardware),
                );
                if let Some(biometry_type) = section.biometry_type {
                    device = device.with_biometry_type(biometry_type);
                }
                device
            }
            None => DeviceContext::new(DEFAULT_API_LEVEL, BiometricStatus::NoHardware),
        }
    }
}

/// The `[store]` section.
#[derive(Debug, Clone, Deserialize)]
pub struct StoreSection {
    pub version: String,
    /// Format version for backward compatibility. Defaults to 1 if missing.
    #[serde(default = "default_format_version")]
    pub format_version: u32,
    /// Identity file for the age-file backend.
    pub identity_file: String,
    /// Service namespace CLI commands use when `--service` is not given.
    #[serde(default = "default_service")]
    pub default_service: String,
}

fn default_format_version() -> u32 {
    1
}

fn default_service() -> String {
    "default".to_string()
}

/// The `[device]` section: the host's declared platform profile.
#[derive(Debug, Clone, Deserialize)]
pub struct DeviceSection {
    pub api_level: u32,
    #[serde(default)]
    pub biometrics: Option<BiometricStatus>,
    #[serde(default)]
    pub biometry_type: Option<BiometryType>,
}
