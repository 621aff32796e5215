use base64::Engine as _;
use base64::engine::general_purpose::STANDARD as BASE64;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::core::errors::{Result, SecureStoreError};

/// One persisted secret, as written by a record store.
///
/// The ciphertext is base64-encoded so records serialize as compact JSON
/// strings. `cipher_name` tags the backend that wrote the entry; it is the
/// only backend allowed to read the entry back.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct StoredRecord {
    pub cipher_name: String,
    pub ciphertext: String,
    pub created_at: DateTime<Utc>,
}

impl StoredRecord {
    /// Build a record from a backend's raw ciphertext.
    pub fn new(cipher_name: &str, ciphertext: &[u8]) -> Self {
        Self {
            cipher_name: cipher_name.to_string(),
            ciphertext: BASE64.encode(ciphertext),
            created_at: Utc::now(),
        }
    }

    /// Decode the stored ciphertext back into the bytes the backend wrote.
    pub fn ciphertext_bytes(&self) -> Result<Vec<u8>> {
        BASE64.decode(&self.ciphertext).map_err(|e| {
            SecureStoreError::crypto_with_source("stored ciphertext is not valid base64", e)
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn encode_decode_round_trip() {
        let record = StoredRecord::new("age-file", b"\x00\x01binary\xff");

        assert_eq!(record.cipher_name, "age-file");
        assert_eq!(record.ciphertext_bytes().unwrap(), b"\x00\x01binary\xff");
    }

    #[test]
    fn tampered_encoding_is_a_crypto_failure() {
        let mut record = StoredRecord::new("age-file", b"payload");
        record.ciphertext = "not//valid**base64!!".to_string();

        let err = record.ciphertext_bytes().unwrap_err();
        assert!(matches!(
            err,
            SecureStoreError::CryptoFailed { .. }
        ));
    }

    #[test]
    fn serializes_as_json_object() {
        let record = StoredRecord::new("fake", b"abc");
        let json = serde_json::to_string(&record).unwrap();

        let back: StoredRecord = serde_json::from_str(&json).unwrap();
        assert_eq!(back, record);
    }
}
