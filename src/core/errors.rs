use std::path::PathBuf;

/// All domain errors for sealstore.
///
/// Cryptographic failures are deliberately a single kind: callers cannot
/// meaningfully recover differently from a key-generation failure versus a
/// tampered ciphertext, so the variant carries a message plus the optional
/// underlying error for diagnostics.
#[derive(Debug, thiserror::Error)]
pub enum SecureStoreError {
    /// Any failure inside a cipher backend: key generation, encryption,
    /// decryption, tampering, or an unusable key-management primitive.
    #[error("Cryptographic operation failed: {message}")]
    CryptoFailed {
        message: String,
        #[source]
        source: Option<Box<dyn std::error::Error + Send + Sync>>,
    },

    #[error(
        "Entry was written by cipher backend '{name}', which is not registered\n\n  \
         An entry is only readable by the backend that wrote it.\n  \
         Register the '{name}' backend before reading this entry."
    )]
    UnknownCipher { name: String },

    #[error(
        "No cipher backend is usable on this device (API level {api_level})\n\n  \
         Every registered backend requires a higher platform API level.\n  \
         Register a backend with a lower minimum level, or raise the device profile."
    )]
    NoUsableBackend { api_level: u32 },

    #[error("Record store file {path} is corrupted: {detail}")]
    StoreCorrupted { path: PathBuf, detail: String },

    #[error(
        "Identity file not found: {path}\n\n  \
         Run 'sealstore init' to generate one."
    )]
    IdentityNotFound { path: PathBuf },

    #[error("No value stored for key '{key}' in service '{service}'")]
    ItemNotFound { service: String, key: String },

    #[error("Invalid configuration: {detail}")]
    InvalidConfig { detail: String },

    #[error(transparent)]
    Io(#[from] std::io::Error),
}

impl SecureStoreError {
    /// Crypto failure carrying only a message.
    pub fn crypto(message: impl Into<String>) -> Self {
        Self::CryptoFailed {
            message: message.into(),
            source: None,
        }
    }

    /// Crypto failure wrapping the originating error for diagnostic chaining.
    pub fn crypto_with_source(
        message: impl Into<String>,
        source: impl std::error::Error + Send + Sync + 'static,
    ) -> Self {
        Self::CryptoFailed {
            message: message.into(),
            source: Some(Box::new(source)),
        }
    }
}

/// Convenience alias used throughout the crate.
pub type Result<T> = std::result::Result<T, SecureStoreError>;
