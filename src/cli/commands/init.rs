use crate::adapters::cipher::age_file_backend::AgeFileBackend;
use crate::cli::output;
use crate::core::errors::{Result, SecureStoreError};

/// Execute the `sealstore init` command.
///
/// Creates the store directory with a default `config.toml`, generates the
/// age identity, and prepares the records directory.
pub fn execute(verbose: bool) -> Result<()> {
    let store_dir = crate::cli::context::store_dir();

    if store_dir.exists() {
        return Err(SecureStoreError::InvalidConfig {
            detail: format!(
                "sealstore is already initialized here ({} exists)",
                store_dir.display()
            ),
        });
    }

    output::header("sealstore — Initializing store");

    std::fs::create_dir_all(store_dir)?;
    std::fs::create_dir_all(store_dir.join("records"))?;
    output::success(&format!("Created {}/", store_dir.display()));

    let config_content = format!(
        r#"[store]
version = "{}"
identity_file = "identity.txt"
default_service = "default"

# Declare the host platform profile so capability checks and backend
# selection reflect the real device. Without this section, sealstore
# assumes a current API level with no biometric hardware.
#
# [device]
# api_level = 34
# biometrics = "available"
# biometry_type = "fingerprint"
"#,
        env!("CARGO_PKG_VERSION")
    );
    std::fs::write(store_dir.join("config.toml"), config_content)?;
    output::success("Generated config.toml with defaults");

    let identity_path = store_dir.join("identity.txt");
    let public_key = AgeFileBackend::generate_identity(&identity_path)?;
    output::success(&format!("Generated identity at {}", identity_path.display()));
    if verbose {
        output::success(&format!("Public key: {public_key}"));
    }

    println!(
        "\n  Keep {} out of version control: it holds the private key\n  \
         that unlocks every stored secret.\n",
        identity_path.display()
    );
    output::success("Store ready.");
    println!("\n  Next steps:");
    println!("    sealstore set <key>          store a secret");
    println!("    sealstore get <key>          read it back");
    println!("    sealstore status             check device capability\n");

    Ok(())
}
