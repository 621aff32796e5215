use crate::core::models::device::{
    BIOMETRIC_MIN_API_LEVEL, BiometricStatus, BiometryType, DeviceContext,
};

/// Whether fingerprint authentication is currently usable on the device.
///
/// Degrades to `false` instead of failing: an absent capability is an
/// expected outcome, not an error. Platforms below
/// `BIOMETRIC_MIN_API_LEVEL` have no biometric subsystem at all, so the
/// manager status is not even consulted there.
pub fn is_fingerprint_auth_available(device: &DeviceContext) -> bool {
    if device.api_level >= BIOMETRIC_MIN_API_LEVEL {
        return device.biometric_status == BiometricStatus::Available;
    }
    false
}

/// The biometry kind usable on this device, if any.
///
/// Devices that report a usable capability without naming the sensor are
/// treated as fingerprint, the baseline sensor of the platform.
pub fn supported_biometry_type(device: &DeviceContext) -> Option<BiometryType> {
    if !is_fingerprint_auth_available(device) {
        return None;
    }
    Some(device.biometry_type.unwrap_or(BiometryType::Fingerprint))
}

/// Whether the host can offer any biometric authentication flow.
pub fn can_check_authentication(device: &DeviceContext) -> bool {
    supported_biometry_type(device).is_some()
}
