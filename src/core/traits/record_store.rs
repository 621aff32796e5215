use crate::core::errors::Result;
use crate::core::models::stored_record::StoredRecord;

/// Port for persisting encrypted records, namespaced by service.
///
/// A record store never sees plaintext: it moves `StoredRecord` values
/// whose payloads were already sealed by a cipher backend.
pub trait RecordStore: Send + Sync {
    /// Insert or replace the record for `(service, key)`.
    fn put(&self, service: &str, key: &str, record: &StoredRecord) -> Result<()>;

    /// Fetch the record for `(service, key)`, if present.
    fn get(&self, service: &str, key: &str) -> Result<Option<StoredRecord>>;

    /// Delete the record for `(service, key)`. Returns whether one existed.
    fn remove(&self, service: &str, key: &str) -> Result<bool>;

    /// All storage keys currently present in the service, sorted.
    fn keys(&self, service: &str) -> Result<Vec<String>>;
}
