//! tests/common.rs
//! Common constants and utilities shared across test files

use vaultcrypt_rs::aliases::PasswordString;

/// Standard test password used across test files
#[allow(dead_code)] // Used across multiple test files
pub const TEST_PASSWORD: &str = "secret";

/// Common test data strings used across multiple tests
#[allow(dead_code)] // Used across multiple test files
pub const TEST_DATA: &[u8] = b"hello world";

/// Lengths around block and chunk boundaries
#[allow(dead_code)] // Used across multiple test files
pub const BOUNDARY_LENGTHS: &[usize] = &[0, 1, 15, 16, 17, 31, 32, 33, 255, 256, 4095, 4096, 4097];

#[allow(dead_code)] // Used across multiple test files
pub fn password(pw: &str) -> PasswordString {
    PasswordString::new(pw.to_string())
}

/// Deterministic, non-repeating test payload
#[allow(dead_code)] // Used across multiple test files
pub fn patterned(len: usize) -> Vec<u8> {
    (0..len).map(|i| (i * 31 + i / 251) as u8).collect()
}
