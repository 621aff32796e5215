use std::collections::BTreeMap;
use std::path::{Path, PathBuf};

use sha2::{Digest, Sha256};

use crate::core::errors::{Result, SecureStoreError};
use crate::core::models::stored_record::StoredRecord;
use crate::core::traits::record_store::RecordStore;

/// Record store keeping one JSON document per service under a directory.
///
/// Each file maps storage keys to `StoredRecord` values. A missing file
/// reads as an empty service; malformed JSON is a corruption error, never
/// a silent reset. Writes rewrite the whole service file, which is enough
/// for a single-process host.
#[derive(Clone)]
pub struct JsonRecordStore {
    dir: PathBuf,
}

impl JsonRecordStore {
    /// Create a store rooted at the given directory.
    pub fn new(dir: PathBuf) -> Self {
        Self { dir }
    }

    /// Return the directory this store writes under.
    pub fn dir(&self) -> &Path {
        &self.dir
    }

    /// File path for a service's records.
    ///
    /// Filename-safe service names map directly; anything else gets a
    /// digest-derived name so arbitrary service strings stay usable.
    fn service_path(&self, service: &str) -> PathBuf {
        self.dir.join(format!("{}.json", Self::file_stem(service)))
    }

    fn file_stem(service: &str) -> String {
        let safe = !service.is_empty()
            && service
                .chars()
                .all(|c| c.is_ascii_alphanumeric() || matches!(c, '-' | '_' | '.'));
        if safe {
            return service.to_string();
        }

        let digest = Sha256::digest(service.as_bytes());
        let hex: String = digest[..8].iter().map(|b| format!("{b:02x}")).collect();
        format!("svc-{hex}")
    }

    fn load(&self, service: &str) -> Result<BTreeMap<String, StoredRecord>> {
        let path = self.service_path(service);
        if !path.exists() {
            return Ok(BTreeMap::new());
        }

        let content = std::fs::read_to_string(&path)?;
        serde_json::from_str(&content).map_err(|e| SecureStoreError::StoreCorrupted {
            path,
            detail: e.to_string(),
        })
    }

    fn save(&self, service: &str, records: &BTreeMap<String, StoredRecord>) -> Result<()> {
        let path = self.service_path(service);
        if let Some(parent) = path.parent()
            && !parent.exists()
        {
            std::fs::create_dir_all(parent)?;
        }

        let content = serde_json::to_string_pretty(records).map_err(|e| {
            SecureStoreError::StoreCorrupted {
                path: path.clone(),
                detail: format!("Failed to serialize records: {e}"),
            }
        })?;
        std::fs::write(&path, content)?;
        Ok(())
    }
}

impl RecordStore for JsonRecordStore {
    fn put(&self, service: &str, key: &str, record: &StoredRecord) -> Result<()> {
        let mut records = self.load(service)?;
        records.insert(key.to_string(), record.clone());
        self.save(service, &records)
    }

    fn get(&self, service: &str, key: &str) -> Result<Option<StoredRecord>> {
        Ok(self.load(service)?.remove(key))
    }

    fn remove(&self, service: &str, key: &str) -> Result<bool> {
        let mut records = self.load(service)?;
        let existed = records.remove(key).is_some();
        if existed {
            self.save(service, &records)?;
        }
        Ok(existed)
    }

    fn keys(&self, service: &str) -> Result<Vec<String>> {
        Ok(self.load(service)?.into_keys().collect())
    }
}
