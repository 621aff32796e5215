pub mod commands;
pub mod context;
pub mod output;

use clap::{Parser, Subcommand};

/// Encrypted key-value storage for application secrets.
#[derive(Parser, Debug)]
#[command(name = "sealstore", version, about, long_about = None)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,

    /// Service namespace for storage commands
    #[arg(long, global = true)]
    pub service: Option<String>,

    /// Path to the store directory (default: .sealstore)
    #[arg(long, global = true)]
    pub store_dir: Option<String>,

    /// Verbose output
    #[arg(short, long, global = true)]
    pub verbose: bool,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Initialize a store in the current directory
    Init,

    /// Encrypt and store a secret value
    Set {
        /// Storage key
        key: String,
        /// Value to store (read from stdin when omitted)
        value: Option<String>,
    },

    /// Decrypt and print a stored secret
    Get {
        /// Storage key
        key: String,
    },

    /// Remove a stored secret
    Remove {
        /// Storage key
        key: String,
    },

    /// List stored keys in the service namespace
    List,

    /// Show device capability and store status
    Status,
}
