//! # Constants
//!
//! Container layout, block geometry and codec defaults.
//!
//! ```text
//! offset 0..16   : ASCII decimal original size, zero-padded to 16 chars
//! offset 16..32  : IV, 16 raw bytes
//! offset 32..    : AES-256-CBC ciphertext, multiple-of-16 bytes
//! ```
//!
//! Changing any of these breaks compatibility with existing containers.

/// AES block size in bytes.
pub const BLOCK_SIZE: usize = 16;

/// Length of the AES-256 key (SHA-256 digest length).
pub const KEY_LEN: usize = 32;

/// Length of the initialization vector stored after the size field.
pub const IV_LEN: usize = 16;

/// Length of the zero-padded decimal size field at the start of a container.
pub const SIZE_FIELD_LEN: usize = 16;

/// Total header length: size field + IV.
pub const HEADER_LEN: usize = SIZE_FIELD_LEN + IV_LEN;

/// Largest plaintext length the 16-digit size field can express.
pub const MAX_ORIGINAL_SIZE: u64 = 9_999_999_999_999_999;

/// Byte used to pad the final plaintext chunk up to the block size (ASCII space).
pub const PAD_BYTE: u8 = 0x20;

/// Default streaming chunk size (64 KiB).
///
/// Only affects I/O granularity; containers are identical for any valid chunk size.
pub const DEFAULT_CHUNK_SIZE: usize = 64 * 1024;

/// Extension appended to encrypted files (`report.pdf` → `report.pdf.enc`).
pub const ENCRYPTED_EXTENSION: &str = "enc";

/// Extension used for decrypted output (`report.pdf.enc` → `report.pdf.dec`).
pub const DECRYPTED_EXTENSION: &str = "dec";
