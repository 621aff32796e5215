//! Encrypted key-value storage for application secrets.
//!
//! The core of the crate is the [`CipherStorage`] capability trait: any
//! number of cipher backends implement it, and [`SecureStorage`] stays
//! polymorphic over them — new writes go through the most capable backend
//! the device supports, reads are routed to whichever backend wrote the
//! entry. Device capability checks live in [`availability`].

pub mod adapters;
pub mod cli;
pub mod config;
pub mod core;

pub use crate::core::errors::{Result, SecureStoreError};
pub use crate::core::models::cipher_result::{DecryptionResult, EncryptionResult};
pub use crate::core::models::device::{
    BIOMETRIC_MIN_API_LEVEL, BiometricStatus, BiometryType, DeviceContext,
};
pub use crate::core::models::stored_record::StoredRecord;
pub use crate::core::services::availability;
pub use crate::core::services::secure_storage::SecureStorage;
pub use crate::core::traits::cipher_storage::CipherStorage;
pub use crate::core::traits::record_store::RecordStore;
