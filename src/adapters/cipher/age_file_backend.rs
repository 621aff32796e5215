use std::io::{Read, Write};
use std::path::{Path, PathBuf};

use age::secrecy::ExposeSecret;

use crate::core::errors::{Result, SecureStoreError};
use crate::core::models::cipher_result::{DecryptionResult, EncryptionResult};
use crate::core::traits::cipher_storage::CipherStorage;

/// Portable software backend: age X25519 + ChaCha20-Poly1305 with a local
/// identity file as the key material.
///
/// This is the fallback backend for hosts without a reachable platform
/// keystore; it has no platform API level requirement. Output is binary
/// (the record store base64-encodes payloads for persistence), and the
/// AEAD construction makes any ciphertext tampering a decrypt failure.
pub struct AgeFileBackend {
    /// Path to the age identity (private key) file.
    identity_path: PathBuf,
}

impl AgeFileBackend {
    /// Create a backend reading key material from `identity_path`.
    pub fn new(identity_path: PathBuf) -> Self {
        Self { identity_path }
    }

    /// Default identity file location for the current platform.
    ///
    /// - Linux/macOS: `~/.config/sealstore/identity.txt`
    /// - Windows: `%APPDATA%/sealstore/identity.txt`
    pub fn default_identity_path() -> Result<PathBuf> {
        let config_dir = dirs::config_dir().ok_or_else(|| SecureStoreError::InvalidConfig {
            detail: "Could not determine config directory".into(),
        })?;
        Ok(config_dir.join("sealstore").join("identity.txt"))
    }

    /// Generate a new age X25519 identity, save it to `path`,
    /// and return the public key string.
    pub fn generate_identity(path: &Path) -> Result<String> {
        let identity = age::x25519::Identity::generate();
        let public_key = identity.to_public().to_string();

        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent)?;
        }

        let created = chrono::Utc::now().format("%Y-%m-%dT%H:%M:%SZ");
        let contents = format!(
            "# created: {created}\n# public key: {public_key}\n{}\n",
            identity.to_string().expose_secret()
        );
        std::fs::write(path, contents)?;

        Ok(public_key)
    }

    /// Read the public key from an existing identity file.
    pub fn read_public_key(path: &Path) -> Result<String> {
        // Parse the "# public key: age1..." comment line first; fall back
        // to deriving it from the secret key.
        let content = std::fs::read_to_string(path).map_err(|_| SecureStoreError::IdentityNotFound {
            path: path.to_path_buf(),
        })?;

        for line in content.lines() {
            if let Some(key) = line.strip_prefix("# public key: ") {
                return Ok(key.trim().to_string());
            }
        }

        let identity = Self::parse_identity(path, &content)?;
        Ok(identity.to_public().to_string())
    }

    /// Load the identity from the backend's key file.
    fn load_identity(&self) -> Result<age::x25519::Identity> {
        let content = std::fs::read_to_string(&self.identity_path).map_err(|_| {
            SecureStoreError::IdentityNotFound {
                path: self.identity_path.clone(),
            }
        })?;
        Self::parse_identity(&self.identity_path, &content)
    }

    fn parse_identity(path: &Path, content: &str) -> Result<age::x25519::Identity> {
        content
            .lines()
            .find(|l| l.starts_with("AGE-SECRET-KEY-"))
            .ok_or_else(|| SecureStoreError::crypto(format!(
                "No secret key found in {}",
                path.display()
            )))?
            .parse()
            .map_err(|e| {
                SecureStoreError::crypto(format!("Invalid age key in {}: {e}", path.display()))
            })
    }
}

impl CipherStorage for AgeFileBackend {
    fn encrypt(&self, _service: &str, key: &str, value: &str) -> Result<EncryptionResult> {
        let identity = self.load_identity()?;
        let recipient = identity.to_public();

        let encryptor =
            age::Encryptor::with_recipients(std::iter::once(&recipient as &dyn age::Recipient))
                .map_err(|e| SecureStoreError::crypto_with_source("Encryptor setup failed", e))?;

        let mut ciphertext = Vec::new();
        let mut writer = encryptor
            .wrap_output(&mut ciphertext)
            .map_err(|e| SecureStoreError::crypto_with_source("Encryption stream failed", e))?;

        writer
            .write_all(value.as_bytes())
            .map_err(|e| SecureStoreError::crypto_with_source("Write failed", e))?;

        writer
            .finish()
            .map_err(|e| SecureStoreError::crypto_with_source("Encryption finish failed", e))?;

        Ok(EncryptionResult::new(key, ciphertext, self.name()))
    }

    fn decrypt(&self, _service: &str, key: &str, value_bytes: &[u8]) -> Result<DecryptionResult> {
        let identity = self.load_identity()?;

        let decryptor = age::Decryptor::new(value_bytes)
            .map_err(|e| SecureStoreError::crypto_with_source("Invalid ciphertext header", e))?;

        let mut reader = decryptor
            .decrypt(std::iter::once(&identity as &dyn age::Identity))
            .map_err(|e| SecureStoreError::crypto_with_source("No matching identity", e))?;

        let mut plaintext = Vec::new();
        reader
            .read_to_end(&mut plaintext)
            .map_err(|e| SecureStoreError::crypto_with_source("Ciphertext authentication failed", e))?;

        let value = String::from_utf8(plaintext)
            .map_err(|e| SecureStoreError::crypto_with_source("Plaintext is not valid UTF-8", e))?;

        Ok(DecryptionResult::new(key, value))
    }

    fn name(&self) -> &'static str {
        "age-file"
    }

    fn min_supported_api_level(&self) -> u32 {
        1
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn backend_with_identity() -> (tempfile::TempDir, AgeFileBackend) {
        let dir = tempfile::tempdir().unwrap();
        let identity_path = dir.path().join("identity.txt");
        AgeFileBackend::generate_identity(&identity_path).unwrap();
        (dir, AgeFileBackend::new(identity_path))
    }

    #[test]
    fn generate_and_read_public_key() {
        let dir = tempfile::tempdir().unwrap();
        let identity_path = dir.path().join("identity.txt");

        let public_key = AgeFileBackend::generate_identity(&identity_path).unwrap();
        assert!(public_key.starts_with("age1"));

        let read_back = AgeFileBackend::read_public_key(&identity_path).unwrap();
        assert_eq!(public_key, read_back);
    }

    #[test]
    fn encrypt_decrypt_round_trip() {
        let (_dir, backend) = backend_with_identity();

        let result = backend.encrypt("myservice", "token", "secret123").unwrap();
        assert_eq!(result.key(), "token");
        assert_eq!(result.cipher_name(), "age-file");
        assert!(!result.value().is_empty());
        assert_ne!(result.value(), b"secret123");

        let decrypted = backend
            .decrypt("myservice", "token", result.value())
            .unwrap();
        assert_eq!(decrypted.key(), "token");
        assert_eq!(decrypted.value(), "secret123");
    }

    #[test]
    fn tampered_ciphertext_fails() {
        let (_dir, backend) = backend_with_identity();

        let result = backend.encrypt("svc", "k", "payload").unwrap();
        let mut tampered = result.value().to_vec();
        let last = tampered.len() - 1;
        tampered[last] ^= 0xff;

        let err = backend.decrypt("svc", "k", &tampered).unwrap_err();
        assert!(matches!(err, SecureStoreError::CryptoFailed { .. }));
    }

    #[test]
    fn decrypt_with_wrong_identity_fails() {
        let (_dir1, backend1) = backend_with_identity();
        let (_dir2, backend2) = backend_with_identity();

        let result = backend1.encrypt("svc", "k", "secret").unwrap();
        assert!(backend2.decrypt("svc", "k", result.value()).is_err());
    }

    #[test]
    fn missing_identity_file_is_reported() {
        let dir = tempfile::tempdir().unwrap();
        let backend = AgeFileBackend::new(dir.path().join("nope.txt"));

        let err = backend.encrypt("svc", "k", "v").unwrap_err();
        assert!(matches!(err, SecureStoreError::IdentityNotFound { .. }));
    }
}
