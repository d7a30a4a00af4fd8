// src/lib.rs

//! Streaming password-based file encryption in the vault container format.
//!
//! A container is `size field (16 ASCII digits) ‖ IV (16 bytes) ‖ AES-256-CBC
//! ciphertext`, with the key taken as the SHA-256 of the password. The final
//! plaintext chunk is padded with spaces and the padding is dropped on
//! decryption using the recorded size.
//!
//! The format has no salt, no key stretching and no authentication tag. A
//! wrong password decrypts to garbage without any error.

pub mod aliases;
#[cfg(feature = "batch-ops")]
pub mod batch_ops;
pub mod config;
pub mod consts;
pub mod crypto;
pub mod decryptor;
pub mod encryptor;
pub mod error;
pub mod file_ops;
pub mod header;
pub mod utils;

// High-level API
pub use config::CodecConfig;
pub use decryptor::{decrypt, decrypt_with_config};
pub use encryptor::{encrypt, encrypt_with_config, encrypt_with_fixed_iv};
pub use error::VaultError;

pub use crypto::kdf::sha256::{derive_key, derive_key_new};

#[cfg(feature = "batch-ops")]
pub use batch_ops::{decrypt_batch, encrypt_batch};

pub use file_ops::{decrypt_file, decrypt_file_to, encrypt_file, encrypt_file_to};

pub use header::{read_header, ContainerHeader}; // Quick header peek
