use crate::adapters::cipher::age_file_backend::AgeFileBackend;
use crate::adapters::record_stores::json_record_store::JsonRecordStore;
use crate::config::app_config::AppConfig;
use crate::core::errors::{Result, SecureStoreError};
use crate::core::services::secure_storage::SecureStorage;

/// Load the config and assemble the storage facade the CLI commands use:
/// JSON records under `<store_dir>/records/`, the device profile from
/// config, and the age-file backend registered as the sole candidate.
pub fn open_storage() -> Result<(AppConfig, SecureStorage<JsonRecordStore>)> {
    let store_dir = crate::cli::context::store_dir();
    if !store_dir.exists() {
        return Err(SecureStoreError::InvalidConfig {
            detail: "Store not initialized in this directory. Run 'sealstore init' first.".into(),
        });
    }

    let config = AppConfig::load(store_dir)?;
    let records = JsonRecordStore::new(store_dir.join("records"));

    let mut storage = SecureStorage::new(records, config.device_context());
    storage.register_backend(Box::new(AgeFileBackend::new(config.identity_path(store_dir))));

    Ok((config, storage))
}

/// Service namespace to operate on: the `--service` flag, or the
/// configured default.
pub fn service_name(flag: Option<&str>, config: &AppConfig) -> String {
    flag.map(str::to_string)
        .unwrap_or_else(|| config.store.default_service.clone())
}
