//! # Key Derivation Functions (KDF)
//!
//! Converts a password into the AES-256 key used by the container format.
//!
//! ## Modules
//!
//! - [`sha256`] - single-pass, unsalted SHA-256 of the password bytes
//!
//! For most use cases, use the high-level [`encrypt`](crate::encrypt) and
//! [`decrypt`](crate::decrypt) functions, which derive the key internally.

pub mod sha256;
