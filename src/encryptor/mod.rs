// src/encryptor/mod.rs

//! High-level encryption facade.
//!
//! Core API: `encrypt(input, output, &password)?` for a full container.
//! Utilities: `write_header(writer, &header)?`, `write_octets(writer, bytes)?` for raw writes.

pub(crate) mod encrypt;
pub(crate) mod encrypt_fixed_iv;
pub(crate) mod stream;
pub(crate) mod write;

pub use encrypt::{encrypt, encrypt_with_config};
pub use encrypt_fixed_iv::encrypt_with_fixed_iv;
pub use stream::encrypt_stream;
pub use write::{write_header, write_octets};
