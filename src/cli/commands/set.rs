use std::io::{self, BufRead};

use crate::cli::commands::store_helpers;
use crate::cli::output;
use crate::core::errors::Result;

/// Execute the `sealstore set` command.
///
/// Encrypts the value with the backend selected for the device profile and
/// persists it under the service namespace. When no value argument is
/// given, one line is read from stdin so secrets can be piped in without
/// landing in shell history.
pub fn execute(key: &str, value: Option<&str>, service: Option<&str>, verbose: bool) -> Result<()> {
    let (config, storage) = store_helpers::open_storage()?;
    let service = store_helpers::service_name(service, &config);

    let value = match value {
        Some(v) => v.to_string(),
        None => read_value_from_stdin()?,
    };

    storage.set_item(&service, key, &value)?;

    output::success(&format!("Stored '{key}' in service '{service}'"));
    if verbose {
        let backend = storage.current_backend()?;
        println!("  Backend: {}", backend.name());
    }

    Ok(())
}

fn read_value_from_stdin() -> Result<String> {
    let mut line = String::new();
    io::stdin().lock().read_line(&mut line)?;
    Ok(line.trim_end_matches(['\r', '\n']).to_string())
}
