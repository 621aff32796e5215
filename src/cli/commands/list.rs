use colored::Colorize;

use crate::cli::commands::store_helpers;
use crate::cli::output;
use crate::core::errors::Result;

/// Execute the `sealstore list` command.
pub fn execute(service: Option<&str>) -> Result<()> {
    let (config, storage) = store_helpers::open_storage()?;
    let service = store_helpers::service_name(service, &config);

    let keys = storage.get_all_keys(&service)?;
    if keys.is_empty() {
        output::warning(&format!("No secrets stored in service '{service}'"));
        println!("  Run 'sealstore set <key>' to store one.");
        return Ok(());
    }

    output::header(&format!("  Service '{service}' ({} keys)", keys.len()));
    for key in &keys {
        println!("  {} {key}", "•".dimmed());
    }

    Ok(())
}
