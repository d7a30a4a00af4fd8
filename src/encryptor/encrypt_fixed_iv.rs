//! src/encryptor/encrypt_fixed_iv.rs
//! Deterministic container encryption with a caller-supplied IV (for testing/fuzzing)

use crate::aliases::{Iv16, PasswordString};
use crate::config::CodecConfig;
use crate::crypto::kdf::sha256::derive_key_new;
use crate::encryptor::stream::encrypt_stream;
use crate::encryptor::write::write_header;
use crate::error::VaultError;
use crate::header::ContainerHeader;
use crate::utils::remaining_len;
use std::io::{Read, Seek, Write};
use tracing::debug;

/// Encrypt plaintext → container with a **fixed** IV.
///
/// Reusing an IV with the same password leaks which leading blocks of two
/// plaintexts are equal. Use [`encrypt`](crate::encrypt) for real data; this
/// exists to produce reproducible containers for tests and vectors.
///
/// The plaintext length is measured from the reader's current position to
/// the end of the stream before anything is written.
///
/// # Errors
///
/// - [`VaultError::Crypto`] - empty password
/// - [`VaultError::Config`] - invalid chunk size
/// - [`VaultError::Format`] - plaintext longer than the 16-digit size field
///   allows (nothing is written), or the source length changed mid-stream
/// - [`VaultError::Io`] - read or write failure
pub fn encrypt_with_fixed_iv<R, W>(
    mut input: R,
    mut output: W,
    password: &PasswordString,
    iv: &Iv16,
    config: &CodecConfig,
) -> Result<u64, VaultError>
where
    R: Read + Seek,
    W: Write,
{
    // Validation
    if password.expose_secret().is_empty() {
        return Err(VaultError::Crypto("password must not be empty".into()));
    }
    config.validate()?;

    let original_size = remaining_len(&mut input)?;
    let header = ContainerHeader {
        original_size,
        iv: *iv.expose_secret(),
    };

    let key = derive_key_new(password)?;

    debug!(
        original_size,
        chunk_size = config.chunk_size(),
        "encrypting container"
    );

    // === Header ===
    write_header(&mut output, &header)?;

    // === Body ===
    let consumed = encrypt_stream(&mut input, &mut output, iv, &key, config.chunk_size())?;
    if consumed != original_size {
        return Err(VaultError::Format(format!(
            "source length changed during encryption: header records {original_size} bytes, read {consumed}"
        )));
    }

    debug!(consumed, "encryption finished");
    Ok(consumed)
}
