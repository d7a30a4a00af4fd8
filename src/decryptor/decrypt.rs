//! src/decryptor/decrypt.rs
//! Container decryption: header, key derivation, streaming body

use crate::aliases::PasswordString;
use crate::config::CodecConfig;
use crate::crypto::kdf::sha256::derive_key_new;
use crate::decryptor::read::{read_iv, read_size_field};
use crate::decryptor::stream::decrypt_stream;
use crate::error::VaultError;
use std::io::{Read, Write};
use tracing::debug;

/// Decrypt a container with the default 64 KiB chunk size.
///
/// Returns the number of plaintext bytes written.
///
/// A wrong password is not detected: the output is the right length but
/// garbage, because the format has no integrity check.
///
/// # Example
///
/// ```
/// use vaultcrypt_rs::aliases::PasswordString;
/// use vaultcrypt_rs::{decrypt, encrypt};
/// use std::io::Cursor;
///
/// let password = PasswordString::new("secret".to_string());
/// let mut container = Vec::new();
/// encrypt(Cursor::new(b"hello world"), &mut container, &password)?;
///
/// let mut plaintext = Vec::new();
/// decrypt(Cursor::new(&container), &mut plaintext, &password)?;
/// assert_eq!(plaintext, b"hello world");
/// # Ok::<(), vaultcrypt_rs::VaultError>(())
/// ```
#[inline]
pub fn decrypt<R, W>(input: R, output: W, password: &PasswordString) -> Result<u64, VaultError>
where
    R: Read,
    W: Write,
{
    decrypt_with_config(input, output, password, &CodecConfig::default())
}

/// Decrypt a container using an explicit [`CodecConfig`].
pub fn decrypt_with_config<R, W>(
    mut input: R,
    mut output: W,
    password: &PasswordString,
    config: &CodecConfig,
) -> Result<u64, VaultError>
where
    R: Read,
    W: Write,
{
    config.validate()?;

    let original_size = read_size_field(&mut input)?;
    let iv = read_iv(&mut input)?;
    let key = derive_key_new(password)?;

    debug!(
        original_size,
        chunk_size = config.chunk_size(),
        "decrypting container"
    );

    let written = decrypt_stream(
        &mut input,
        &mut output,
        &iv,
        &key,
        original_size,
        config.chunk_size(),
    )?;

    debug!(written, "decryption finished");
    Ok(written)
}
