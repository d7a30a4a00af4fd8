//! src/config.rs
//! Streaming codec configuration

use crate::consts::{BLOCK_SIZE, DEFAULT_CHUNK_SIZE};
use crate::error::VaultError;

/// Tuning knobs for the streaming encryptor/decryptor.
///
/// The chunk size only changes I/O granularity: a container encrypted with
/// one chunk size decrypts identically with any other, and encryption
/// produces byte-identical output (for the same IV) regardless of chunk size.
///
/// # Thread Safety
///
/// `CodecConfig` is `Copy` and holds no shared state; one value can be used
/// by any number of concurrent operations.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct CodecConfig {
    chunk_size: usize,
}

impl CodecConfig {
    /// Create a config with the default 64 KiB chunk size.
    #[must_use]
    pub const fn new() -> Self {
        Self {
            chunk_size: DEFAULT_CHUNK_SIZE,
        }
    }

    /// Set the streaming chunk size in bytes.
    ///
    /// Must be a non-zero multiple of 16; checked by [`validate`](Self::validate)
    /// before any I/O happens.
    #[must_use]
    pub const fn with_chunk_size(mut self, chunk_size: usize) -> Self {
        self.chunk_size = chunk_size;
        self
    }

    /// Current chunk size in bytes.
    #[must_use]
    pub const fn chunk_size(&self) -> usize {
        self.chunk_size
    }

    /// Reject chunk sizes the block cipher cannot stream with.
    pub fn validate(&self) -> Result<(), VaultError> {
        if self.chunk_size == 0 {
            return Err(VaultError::Config("chunk size must be non-zero".into()));
        }
        if self.chunk_size % BLOCK_SIZE != 0 {
            return Err(VaultError::Config(format!(
                "chunk size {} is not a multiple of the {BLOCK_SIZE}-byte block size",
                self.chunk_size
            )));
        }
        Ok(())
    }
}

impl Default for CodecConfig {
    fn default() -> Self {
        Self::new()
    }
}
