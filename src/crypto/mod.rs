// src/crypto/mod.rs

//! Low-level crypto primitives (KDF, RNG).
//!
//! See crate root for re-exports (e.g. `derive_key`).

pub mod kdf;
pub mod rng;
