//! # Error Types
//!
//! This module defines the error types used throughout the library.
//! All operations return [`Result<T, VaultError>`](VaultError).

use thiserror::Error;

/// The error type for all vault container operations.
///
/// Every error is terminal for the operation that raised it. A partially
/// written destination may remain and is the caller's to clean up.
///
/// A wrong password is **not** an error: the container carries no
/// authentication tag, so decryption with the wrong key succeeds and yields
/// garbage plaintext.
#[derive(Error, Debug)]
pub enum VaultError {
    /// I/O error occurred while reading the source or writing the destination.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// The container is malformed.
    ///
    /// Raised for:
    /// - A size field that is not 16 ASCII digits
    /// - A missing or truncated IV
    /// - Ciphertext whose length is not a multiple of the block size
    /// - Ciphertext shorter than the declared original size
    /// - A plaintext too large for the 16-digit size field
    /// - A source whose length changed while it was being encrypted
    #[error("Format error: {0}")]
    Format(String),

    /// Key material could not be produced (empty password, RNG failure).
    #[error("Crypto error: {0}")]
    Crypto(String),

    /// Invalid codec or file-operation configuration.
    #[error("Config error: {0}")]
    Config(String),
}
