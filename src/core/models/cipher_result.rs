/// Outcome of a backend `encrypt` call.
///
/// Carries the storage key, the opaque ciphertext bytes, and the name of
/// the backend that produced them. The name is a routing tag: a later
/// decrypt of `value` must go through the backend it identifies. Fields
/// are fixed at construction.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EncryptionResult {
    key: String,
    value: Vec<u8>,
    cipher_name: String,
}

impl EncryptionResult {
    pub fn new(key: impl Into<String>, value: Vec<u8>, cipher_name: impl Into<String>) -> Self {
        Self {
            key: key.into(),
            value,
            cipher_name: cipher_name.into(),
        }
    }

    /// The storage key this ciphertext belongs to.
    pub fn key(&self) -> &str {
        &self.key
    }

    /// The ciphertext. Structure is backend-defined and opaque to callers.
    pub fn value(&self) -> &[u8] {
        &self.value
    }

    /// Name of the backend that produced this result.
    pub fn cipher_name(&self) -> &str {
        &self.cipher_name
    }
}

/// Outcome of a backend `decrypt` call: the storage key and the recovered
/// plaintext. Fields are fixed at construction.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DecryptionResult {
    key: String,
    value: String,
}

impl DecryptionResult {
    pub fn new(key: impl Into<String>, value: impl Into<String>) -> Self {
        Self {
            key: key.into(),
            value: value.into(),
        }
    }

    /// The storage key this plaintext belongs to.
    pub fn key(&self) -> &str {
        &self.key
    }

    /// The recovered plaintext.
    pub fn value(&self) -> &str {
        &self.value
    }

    /// Consume the result, yielding the plaintext without a copy.
    pub fn into_value(self) -> String {
        self.value
    }
}
