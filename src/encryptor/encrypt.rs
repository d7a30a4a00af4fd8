//! src/encryptor/encrypt.rs
//! Container encryption with a fresh random IV

use crate::aliases::{Iv16, PasswordString};
use crate::config::CodecConfig;
use crate::crypto::rng::SecureRandomExt;
use crate::encryptor::encrypt_fixed_iv::encrypt_with_fixed_iv;
use crate::error::VaultError;
use std::io::{Read, Seek, Write};

/// Encrypt everything from the reader's current position to its end.
///
/// Writes `size field ‖ IV ‖ ciphertext` to `output` using the default
/// 64 KiB chunk size and returns the plaintext length recorded in the header.
///
/// The reader must be seekable because the plaintext length goes into the
/// header before the first ciphertext byte.
///
/// # Errors
///
/// - [`VaultError::Crypto`] - empty password or RNG failure
/// - [`VaultError::Format`] - input longer than 10^16 − 1 bytes, or its
///   length changed while it was being read
/// - [`VaultError::Io`] - read or write failure
///
/// # Example
///
/// ```
/// use vaultcrypt_rs::aliases::PasswordString;
/// use vaultcrypt_rs::encrypt;
/// use std::io::Cursor;
///
/// let password = PasswordString::new("secret".to_string());
/// let mut container = Vec::new();
/// encrypt(Cursor::new(b"hello world"), &mut container, &password)?;
///
/// assert_eq!(&container[..16], b"0000000000000011");
/// assert_eq!(container.len(), 16 + 16 + 16);
/// # Ok::<(), vaultcrypt_rs::VaultError>(())
/// ```
#[inline]
pub fn encrypt<R, W>(input: R, output: W, password: &PasswordString) -> Result<u64, VaultError>
where
    R: Read + Seek,
    W: Write,
{
    encrypt_with_config(input, output, password, &CodecConfig::default())
}

/// Encrypt using an explicit [`CodecConfig`].
pub fn encrypt_with_config<R, W>(
    input: R,
    output: W,
    password: &PasswordString,
    config: &CodecConfig,
) -> Result<u64, VaultError>
where
    R: Read + Seek,
    W: Write,
{
    // Fresh per container, never reused
    let iv = Iv16::random()?;
    encrypt_with_fixed_iv(input, output, password, &iv, config)
}
