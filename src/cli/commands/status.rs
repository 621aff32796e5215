use colored::Colorize;

use crate::adapters::cipher::age_file_backend::AgeFileBackend;
use crate::adapters::record_stores::json_record_store::JsonRecordStore;
use crate::cli::commands::store_helpers;
use crate::cli::output;
use crate::config::app_config::AppConfig;
use crate::core::errors::Result;
use crate::core::services::availability;
use crate::core::services::secure_storage::SecureStorage;

/// Execute the `sealstore status` command.
///
/// Displays the store configuration, the device capability report, the
/// registered cipher backends with the one selected for writes, and a
/// summary of the active service namespace.
pub fn execute(service: Option<&str>) -> Result<()> {
    let (config, storage) = store_helpers::open_storage()?;
    let service = store_helpers::service_name(service, &config);

    output::header(&format!("sealstore v{}", env!("CARGO_PKG_VERSION")));
    output::field("Store", &crate::cli::context::store_dir().display().to_string());
    output::field("Default service", &config.store.default_service);

    print_identity(&config);
    print_device(&storage);
    print_backends(&storage);
    print_service(&storage, &service);

    Ok(())
}

/// Print the identity section showing key material status.
fn print_identity(config: &AppConfig) {
    println!("\n{}", "  Identity".bold());

    let identity_path = config.identity_path(crate::cli::context::store_dir());
    if !identity_path.exists() {
        output::warning(&format!("No identity at {}", identity_path.display()));
        println!("  Run 'sealstore init' in a fresh directory to generate one.");
        return;
    }

    match AgeFileBackend::read_public_key(&identity_path) {
        Ok(public_key) => {
            output::success(&format!("Identity: {}", identity_path.display()));
            output::success(&format!("Public key: {public_key}"));
        }
        Err(_) => {
            output::warning("Could not read public key from identity file");
        }
    }
}

/// Print the device capability report.
fn print_device(storage: &SecureStorage<JsonRecordStore>) {
    let device = storage.device();

    println!("\n{}", "  Device".bold());
    output::field("API level", &device.api_level.to_string());
    output::field("Biometrics", &format!("{:?}", device.biometric_status));

    if availability::is_fingerprint_auth_available(device) {
        output::success("Fingerprint authentication available");
        if let Some(biometry) = availability::supported_biometry_type(device) {
            output::field("Biometry type", &biometry.to_string());
        }
    } else {
        output::warning("Fingerprint authentication not available");
    }
}

/// Print the backend registry and the write selection.
fn print_backends(storage: &SecureStorage<JsonRecordStore>) {
    println!("\n{}", "  Cipher backends".bold());

    let device_level = storage.device().api_level;
    let selected = storage.current_backend().map(|b| b.name()).ok();
    for backend in storage.backends() {
        let level = backend.min_supported_api_level();
        let marker = if selected == Some(backend.name()) {
            "selected".green().to_string()
        } else if level <= device_level {
            "eligible".dimmed().to_string()
        } else {
            "requires newer platform".yellow().to_string()
        };
        println!(
            "  {} {} (min API level {level}) {marker}",
            "•".dimmed(),
            backend.name()
        );
    }

    if selected.is_none() {
        output::warning("No backend is usable on this device profile");
    }
}

/// Print the active service summary.
fn print_service(storage: &SecureStorage<JsonRecordStore>, service: &str) {
    println!("\n{}", format!("  Service '{service}'").bold());

    match storage.get_all_keys(service) {
        Ok(keys) if keys.is_empty() => {
            output::warning("No secrets stored");
        }
        Ok(keys) => {
            output::success(&format!("{} stored keys", keys.len()));
        }
        Err(_) => {
            output::warning("Could not read the record store");
        }
    }
    println!();
}
