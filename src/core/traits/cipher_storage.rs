use crate::core::errors::Result;
use crate::core::models::cipher_result::{DecryptionResult, EncryptionResult};

/// Capability contract every cipher storage backend satisfies.
///
/// Implementations live in `adapters::cipher`. Any number of backends may
/// implement this trait; callers stay polymorphic over it and never assume
/// a concrete backend beyond checking `name()`.
pub trait CipherStorage: Send + Sync {
    /// Encrypt a UTF-8 plaintext value under the given service namespace
    /// and storage key.
    ///
    /// The returned ciphertext is an opaque byte sequence whose structure
    /// is backend-defined. The result carries this backend's `name()` so a
    /// later decrypt can be routed to the matching backend.
    fn encrypt(&self, service: &str, key: &str, value: &str) -> Result<EncryptionResult>;

    /// Recover the plaintext from ciphertext this backend produced earlier.
    ///
    /// Fails with the crypto-failure kind on tampering, key invalidation,
    /// or an algorithm mismatch.
    fn decrypt(&self, service: &str, key: &str, value_bytes: &[u8]) -> Result<DecryptionResult>;

    /// Stable identifier distinguishing backend implementations
    /// (e.g. "age-file"). Recorded alongside every entry a backend writes.
    fn name(&self) -> &'static str;

    /// Lowest platform API level this backend may be selected on.
    /// The selection policy filters candidates by this bound.
    fn min_supported_api_level(&self) -> u32;
}
