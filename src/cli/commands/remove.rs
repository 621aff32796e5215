use crate::cli::commands::store_helpers;
use crate::cli::output;
use crate::core::errors::{Result, SecureStoreError};

/// Execute the `sealstore remove` command.
pub fn execute(key: &str, service: Option<&str>) -> Result<()> {
    let (config, storage) = store_helpers::open_storage()?;
    let service = store_helpers::service_name(service, &config);

    if storage.remove_item(&service, key)? {
        output::success(&format!("Removed '{key}' from service '{service}'"));
        Ok(())
    } else {
        Err(SecureStoreError::ItemNotFound {
            service,
            key: key.to_string(),
        })
    }
}
