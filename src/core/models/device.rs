use serde::{Deserialize, Serialize};

/// Lowest platform API level that ships the biometric subsystem.
/// Below this, biometric capability queries are not even possible.
pub const BIOMETRIC_MIN_API_LEVEL: u32 = 23;

/// Status reported by the platform biometric manager.
///
/// Only `Available` means the capability is fully usable: hardware
/// present, at least one biometric enrolled, and the sensor unlocked.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum BiometricStatus {
    Available,
    NoHardware,
    NoneEnrolled,
    HardwareUnavailable,
    SecurityUpdateRequired,
}

/// Kind of biometric sensor a device exposes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum BiometryType {
    Fingerprint,
    Face,
    Iris,
}

impl std::fmt::Display for BiometryType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            BiometryType::Fingerprint => write!(f, "Fingerprint"),
            BiometryType::Face => write!(f, "Face"),
            BiometryType::Iris => write!(f, "Iris"),
        }
    }
}

/// Snapshot of the host device, supplied by the embedding application.
///
/// Library hosts construct this from whatever platform probe they have;
/// the CLI builds it from the `[device]` section of `config.toml`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DeviceContext {
    /// Platform API level the device runs.
    pub api_level: u32,
    /// What the platform biometric manager reports right now.
    pub biometric_status: BiometricStatus,
    /// Sensor kind, when the platform reports one.
    pub biometry_type: Option<BiometryType>,
}

impl DeviceContext {
    pub fn new(api_level: u32, biometric_status: BiometricStatus) -> Self {
        Self {
            api_level,
            biometric_status,
            biometry_type: None,
        }
    }

    pub fn with_biometry_type(mut self, biometry_type: BiometryType) -> Self {
        self.biometry_type = Some(biometry_type);
        self
    }
}
