use crate::cli::commands::store_helpers;
use crate::core::errors::{Result, SecureStoreError};

/// Execute the `sealstore get` command.
///
/// Prints the decrypted value on stdout with no decoration, so output can
/// be piped. A missing key is a failure, not empty output.
pub fn execute(key: &str, service: Option<&str>) -> Result<()> {
    let (config, storage) = store_helpers::open_storage()?;
    let service = store_helpers::service_name(service, &config);

    match storage.get_item(&service, key)? {
        Some(value) => {
            println!("{value}");
            Ok(())
        }
        None => Err(SecureStoreError::ItemNotFound {
            service,
            key: key.to_string(),
        }),
    }
}
