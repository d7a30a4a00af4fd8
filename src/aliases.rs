//! # Secure-Gate Type Aliases
//!
//! Type aliases over [`secure-gate`](https://github.com/Slurp9187/secure-gate) wrappers.
//! Secrets are zeroized on drop and must be read through an explicit
//! `.expose_secret()` / `.expose_secret_mut()`.
//!
//! ### Generic Secure Buffers
//! - [`SpanBuffer<N>`] - secure stack buffer for any size `N`
//!
//! ### Dynamic Secrets
//! - [`PasswordString`] - user password
//! - [`ChunkBuffer`] - heap buffer for one streaming chunk of plaintext
//!
//! ### Fixed-Size Secrets
//! - [`Aes256Key32`] - 32-byte AES-256 key (SHA-256 of the password)
//! - [`Iv16`] - 16-byte initialization vector
//! - [`Block16`] - one AES block / CBC chain value

use secure_gate::{Dynamic, Fixed};

// ─────────────────────────────────────────────────────────────────────────────
// SpanBuffer: generic secure stack buffer
// ─────────────────────────────────────────────────────────────────────────────
pub type SpanBuffer<const N: usize> = Fixed<[u8; N]>;

pub type Aes256Key32 = SpanBuffer<32>;
pub type Iv16 = SpanBuffer<16>; // stored in the container header
pub type Block16 = SpanBuffer<16>; // one AES block

// ─────────────────────────────────────────────────────────────────────────────
// Dynamic secrets
// ─────────────────────────────────────────────────────────────────────────────
pub type PasswordString = Dynamic<String>;
pub type ChunkBuffer = Dynamic<Vec<u8>>; // zeroized on drop, including error paths
