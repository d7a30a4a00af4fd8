// src/decryptor/mod.rs

//! High-level decryption facade.
//!
//! Core API: `decrypt(input, output, &password)?` for a full container.
//! Helpers: `read_size_field`, `read_iv`, `decrypt_stream` for custom flows.

pub(crate) mod decrypt;
pub(crate) mod read;
pub(crate) mod stream;

pub use decrypt::{decrypt, decrypt_with_config};
pub use read::{read_exact_span, read_iv, read_size_field};
pub use stream::decrypt_stream;
