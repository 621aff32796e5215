use crate::core::errors::{Result, SecureStoreError};
use crate::core::models::device::DeviceContext;
use crate::core::models::stored_record::StoredRecord;
use crate::core::traits::cipher_storage::CipherStorage;
use crate::core::traits::record_store::RecordStore;

/// Orchestrates secret storage by combining a `RecordStore` with a
/// registry of `CipherStorage` backends.
///
/// Writes go through the most capable backend the device supports; reads
/// are routed to whichever backend wrote the entry, using the cipher name
/// recorded with it. There is no cross-backend migration: an entry is only
/// ever decrypted by the backend that produced it.
pub struct SecureStorage<R: RecordStore> {
    records: R,
    device: DeviceContext,
    backends: Vec<Box<dyn CipherStorage>>,
}

impl<R: RecordStore> SecureStorage<R> {
    /// Create a storage facade with an empty backend registry.
    pub fn new(records: R, device: DeviceContext) -> Self {
        Self {
            records,
            device,
            backends: Vec::new(),
        }
    }

    /// Register a cipher backend as a selection candidate.
    pub fn register_backend(&mut self, backend: Box<dyn CipherStorage>) {
        self.backends.push(backend);
    }

    /// The device snapshot this facade negotiates capabilities against.
    pub fn device(&self) -> &DeviceContext {
        &self.device
    }

    /// All registered backends, in registration order.
    pub fn backends(&self) -> impl Iterator<Item = &dyn CipherStorage> {
        self.backends.iter().map(|b| b.as_ref())
    }

    /// The backend new writes go through.
    ///
    /// Candidates are filtered by `min_supported_api_level()` against the
    /// device API level; among the eligible ones, the highest minimum wins
    /// (the most capable backend the device can still run). Registration
    /// order breaks ties.
    pub fn current_backend(&self) -> Result<&dyn CipherStorage> {
        let mut best: Option<&dyn CipherStorage> = None;

        for backend in &self.backends {
            let level = backend.min_supported_api_level();
            if level > self.device.api_level {
                continue;
            }
            match best {
                Some(current) if current.min_supported_api_level() >= level => {}
                _ => best = Some(backend.as_ref()),
            }
        }

        best.ok_or(SecureStoreError::NoUsableBackend {
            api_level: self.device.api_level,
        })
    }

    fn backend_named(&self, name: &str) -> Option<&dyn CipherStorage> {
        self.backends
            .iter()
            .map(|b| b.as_ref())
            .find(|b| b.name() == name)
    }

    /// Encrypt `value` and persist it under `(service, key)`.
    ///
    /// An existing entry is overwritten, even one written by a different
    /// backend.
    pub fn set_item(&self, service: &str, key: &str, value: &str) -> Result<()> {
        let backend = self.current_backend()?;
        let result = backend.encrypt(service, key, value)?;
        let record = StoredRecord::new(result.cipher_name(), result.value());
        self.records.put(service, key, &record)
    }

    /// Decrypt and return the value stored under `(service, key)`.
    ///
    /// Absence is `Ok(None)`. An entry tagged with an unregistered backend
    /// name is an error: without the producing backend the ciphertext is
    /// unreadable.
    pub fn get_item(&self, service: &str, key: &str) -> Result<Option<String>> {
        let Some(record) = self.records.get(service, key)? else {
            return Ok(None);
        };

        let backend =
            self.backend_named(&record.cipher_name)
                .ok_or_else(|| SecureStoreError::UnknownCipher {
                    name: record.cipher_name.clone(),
                })?;

        let ciphertext = record.ciphertext_bytes()?;
        let result = backend.decrypt(service, key, &ciphertext)?;
        Ok(Some(result.into_value()))
    }

    /// Delete the entry under `(service, key)`. Returns whether one existed.
    pub fn remove_item(&self, service: &str, key: &str) -> Result<bool> {
        self.records.remove(service, key)
    }

    /// All storage keys present in `service`, sorted.
    pub fn get_all_keys(&self, service: &str) -> Result<Vec<String>> {
        self.records.keys(service)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::models::cipher_result::{DecryptionResult, EncryptionResult};
    use crate::core::models::device::BiometricStatus;
    use std::collections::HashMap;
    use std::sync::Mutex;

    /// In-memory record store for facade tests.
    struct MemoryRecordStore {
        entries: Mutex<HashMap<(String, String), StoredRecord>>,
    }

    impl MemoryRecordStore {
        fn new() -> Self {
            Self {
                entries: Mutex::new(HashMap::new()),
            }
        }
    }

    impl RecordStore for MemoryRecordStore {
        fn put(&self, service: &str, key: &str, record: &StoredRecord) -> Result<()> {
            self.entries
                .lock()
                .unwrap()
                .insert((service.to_string(), key.to_string()), record.clone());
            Ok(())
        }

        fn get(&self, service: &str, key: &str) -> Result<Option<StoredRecord>> {
            Ok(self
                .entries
                .lock()
                .unwrap()
                .get(&(service.to_string(), key.to_string()))
                .cloned())
        }

        fn remove(&self, service: &str, key: &str) -> Result<bool> {
            Ok(self
                .entries
                .lock()
                .unwrap()
                .remove(&(service.to_string(), key.to_string()))
                .is_some())
        }

        fn keys(&self, service: &str) -> Result<Vec<String>> {
            let mut keys: Vec<String> = self
                .entries
                .lock()
                .unwrap()
                .keys()
                .filter(|(s, _)| s == service)
                .map(|(_, k)| k.clone())
                .collect();
            keys.sort();
            Ok(keys)
        }
    }

    /// Reversible obfuscation backend with a one-byte checksum trailer,
    /// enough to detect the corruption cases the facade must surface.
    struct FakeStorage {
        name: &'static str,
        min_api_level: u32,
        mask: u8,
    }

    impl FakeStorage {
        fn new(name: &'static str, min_api_level: u32, mask: u8) -> Self {
            Self {
                name,
                min_api_level,
                mask,
            }
        }
    }

    impl CipherStorage for FakeStorage {
        fn encrypt(&self, _service: &str, key: &str, value: &str) -> Result<EncryptionResult> {
            let mut bytes: Vec<u8> = value.bytes().map(|b| b ^ self.mask).collect();
            let checksum = bytes.iter().fold(0u8, |acc, b| acc.wrapping_add(*b));
            bytes.push(checksum);
            Ok(EncryptionResult::new(key, bytes, self.name))
        }

        fn decrypt(&self, _service: &str, key: &str, value_bytes: &[u8]) -> Result<DecryptionResult> {
            let Some((checksum, payload)) = value_bytes.split_last() else {
                return Err(SecureStoreError::crypto("ciphertext is empty"));
            };
            let expected = payload.iter().fold(0u8, |acc, b| acc.wrapping_add(*b));
            if *checksum != expected {
                return Err(SecureStoreError::crypto("ciphertext integrity check failed"));
            }
            let plain: Vec<u8> = payload.iter().map(|b| b ^ self.mask).collect();
            let value = String::from_utf8(plain)
                .map_err(|e| SecureStoreError::crypto_with_source("plaintext is not UTF-8", e))?;
            Ok(DecryptionResult::new(key, value))
        }

        fn name(&self) -> &'static str {
            self.name
        }

        fn min_supported_api_level(&self) -> u32 {
            self.min_api_level
        }
    }

    fn storage_with(
        api_level: u32,
        backends: Vec<Box<dyn CipherStorage>>,
    ) -> SecureStorage<MemoryRecordStore> {
        let device = DeviceContext::new(api_level, BiometricStatus::NoHardware);
        let mut storage = SecureStorage::new(MemoryRecordStore::new(), device);
        for backend in backends {
            storage.register_backend(backend);
        }
        storage
    }

    #[test]
    fn set_get_round_trip() {
        let storage = storage_with(34, vec![Box::new(FakeStorage::new("fake", 1, 0x5a))]);

        storage.set_item("myservice", "token", "secret123").unwrap();

        let value = storage.get_item("myservice", "token").unwrap();
        assert_eq!(value.as_deref(), Some("secret123"));
    }

    #[test]
    fn stored_bytes_differ_from_plaintext() {
        let backend = FakeStorage::new("fake", 1, 0x5a);
        let result = backend.encrypt("myservice", "token", "secret123").unwrap();

        assert_eq!(result.key(), "token");
        assert!(!result.value().is_empty());
        assert_ne!(result.value(), b"secret123");
        assert_eq!(result.cipher_name(), "fake");
    }

    #[test]
    fn get_absent_key_is_none() {
        let storage = storage_with(34, vec![Box::new(FakeStorage::new("fake", 1, 0x5a))]);
        assert_eq!(storage.get_item("myservice", "missing").unwrap(), None);
    }

    #[test]
    fn selection_picks_highest_eligible_minimum() {
        let storage = storage_with(
            25,
            vec![
                Box::new(FakeStorage::new("legacy", 1, 0x11)),
                Box::new(FakeStorage::new("modern", 23, 0x22)),
                Box::new(FakeStorage::new("future", 30, 0x33)),
            ],
        );

        assert_eq!(storage.current_backend().unwrap().name(), "modern");
    }

    #[test]
    fn selection_ties_go_to_registration_order() {
        let storage = storage_with(
            34,
            vec![
                Box::new(FakeStorage::new("first", 23, 0x11)),
                Box::new(FakeStorage::new("second", 23, 0x22)),
            ],
        );

        assert_eq!(storage.current_backend().unwrap().name(), "first");
    }

    #[test]
    fn no_eligible_backend_is_an_error() {
        let storage = storage_with(10, vec![Box::new(FakeStorage::new("modern", 23, 0x22))]);

        let err = storage.current_backend().err().unwrap();
        assert!(matches!(
            err,
            SecureStoreError::NoUsableBackend { api_level: 10 }
        ));
    }

    #[test]
    fn reads_route_to_the_writing_backend() {
        // Write on an older device profile, then read with a richer
        // registry: the read must still use the original backend.
        let writer = storage_with(20, vec![Box::new(FakeStorage::new("legacy", 1, 0x11))]);
        writer.set_item("svc", "k", "v").unwrap();
        let record = writer.records.get("svc", "k").unwrap().unwrap();

        let reader = storage_with(
            34,
            vec![
                Box::new(FakeStorage::new("legacy", 1, 0x11)),
                Box::new(FakeStorage::new("modern", 23, 0x22)),
            ],
        );
        reader.records.put("svc", "k", &record).unwrap();

        assert_eq!(reader.get_item("svc", "k").unwrap().as_deref(), Some("v"));
        assert_eq!(record.cipher_name, "legacy");
    }

    #[test]
    fn unregistered_cipher_name_is_an_error() {
        let writer = storage_with(34, vec![Box::new(FakeStorage::new("gone", 1, 0x11))]);
        writer.set_item("svc", "k", "v").unwrap();
        let record = writer.records.get("svc", "k").unwrap().unwrap();

        let reader = storage_with(34, vec![Box::new(FakeStorage::new("other", 1, 0x22))]);
        reader.records.put("svc", "k", &record).unwrap();

        let err = reader.get_item("svc", "k").unwrap_err();
        assert!(matches!(err, SecureStoreError::UnknownCipher { name } if name == "gone"));
    }

    #[test]
    fn corrupted_ciphertext_is_a_crypto_failure() {
        let storage = storage_with(34, vec![Box::new(FakeStorage::new("fake", 1, 0x5a))]);
        storage.set_item("svc", "k", "value").unwrap();

        // Flip a payload byte behind the facade's back.
        let record = storage.records.get("svc", "k").unwrap().unwrap();
        let mut bytes = record.ciphertext_bytes().unwrap();
        bytes[0] ^= 0xff;
        let tampered = StoredRecord::new("fake", &bytes);
        storage.records.put("svc", "k", &tampered).unwrap();

        let err = storage.get_item("svc", "k").unwrap_err();
        assert!(matches!(err, SecureStoreError::CryptoFailed { .. }));
    }

    #[test]
    fn remove_and_list() {
        let storage = storage_with(34, vec![Box::new(FakeStorage::new("fake", 1, 0x5a))]);
        storage.set_item("svc", "b", "2").unwrap();
        storage.set_item("svc", "a", "1").unwrap();
        storage.set_item("other", "c", "3").unwrap();

        assert_eq!(storage.get_all_keys("svc").unwrap(), vec!["a", "b"]);

        assert!(storage.remove_item("svc", "a").unwrap());
        assert!(!storage.remove_item("svc", "a").unwrap());
        assert_eq!(storage.get_all_keys("svc").unwrap(), vec!["b"]);
    }
}
