//! # File Operations
//!
//! Path-based wrappers over [`encrypt`](crate::encrypt) / [`decrypt`](crate::decrypt)
//! using the vault encryptor's naming: `notes.txt` encrypts to `notes.txt.enc`,
//! which decrypts to `notes.txt.dec`.
//!
//! Each call opens its own source and destination; concurrent calls must not
//! share a destination path. On failure the destination may be left partially
//! written.

use crate::aliases::PasswordString;
use crate::config::CodecConfig;
use crate::consts::{DECRYPTED_EXTENSION, ENCRYPTED_EXTENSION};
use crate::decryptor::decrypt_with_config;
use crate::encryptor::encrypt_with_config;
use crate::error::VaultError;
use std::ffi::OsString;
use std::fs::File;
use std::io::{BufReader, BufWriter, Write};
use std::path::{Path, PathBuf};
use tracing::info;

/// `<path>.enc`
#[must_use]
pub fn encrypted_path_for(path: &Path) -> PathBuf {
    append_extension(path, ENCRYPTED_EXTENSION)
}

/// `x.enc` → `x.dec`; anything else gets `.dec` appended so the source is
/// never the destination.
#[must_use]
pub fn decrypted_path_for(path: &Path) -> PathBuf {
    match path.extension() {
        Some(ext) if ext == ENCRYPTED_EXTENSION && path.file_stem().is_some() => {
            path.with_extension(DECRYPTED_EXTENSION)
        }
        _ => append_extension(path, DECRYPTED_EXTENSION),
    }
}

fn append_extension(path: &Path, ext: &str) -> PathBuf {
    let mut name = OsString::from(path.as_os_str());
    name.push(".");
    name.push(ext);
    PathBuf::from(name)
}

/// Encrypt `path` into `<path>.enc` and return the container path.
pub fn encrypt_file(path: impl AsRef<Path>, password: &PasswordString) -> Result<PathBuf, VaultError> {
    let src = path.as_ref();
    let dst = encrypted_path_for(src);
    encrypt_file_to(src, &dst, password, &CodecConfig::default())?;
    Ok(dst)
}

/// Decrypt `path` into its `.dec` sibling and return the output path.
pub fn decrypt_file(path: impl AsRef<Path>, password: &PasswordString) -> Result<PathBuf, VaultError> {
    let src = path.as_ref();
    let dst = decrypted_path_for(src);
    decrypt_file_to(src, &dst, password, &CodecConfig::default())?;
    Ok(dst)
}

/// Encrypt `src` into `dst`, creating or truncating `dst`.
///
/// Returns the plaintext length.
pub fn encrypt_file_to(
    src: &Path,
    dst: &Path,
    password: &PasswordString,
    config: &CodecConfig,
) -> Result<u64, VaultError> {
    ensure_distinct(src, dst)?;
    config.validate()?;

    let reader = BufReader::with_capacity(config.chunk_size(), File::open(src)?);
    let mut writer = BufWriter::with_capacity(config.chunk_size(), File::create(dst)?);
    let size = encrypt_with_config(reader, &mut writer, password, config)?;
    writer.flush()?;

    info!(src = %src.display(), dst = %dst.display(), bytes = size, "encrypted file");
    Ok(size)
}

/// Decrypt `src` into `dst`, creating or truncating `dst`.
///
/// Returns the plaintext length.
pub fn decrypt_file_to(
    src: &Path,
    dst: &Path,
    password: &PasswordString,
    config: &CodecConfig,
) -> Result<u64, VaultError> {
    ensure_distinct(src, dst)?;
    config.validate()?;

    let reader = BufReader::with_capacity(config.chunk_size(), File::open(src)?);
    let mut writer = BufWriter::with_capacity(config.chunk_size(), File::create(dst)?);
    let size = decrypt_with_config(reader, &mut writer, password, config)?;
    writer.flush()?;

    info!(src = %src.display(), dst = %dst.display(), bytes = size, "decrypted file");
    Ok(size)
}

/// Refuse to stream a file onto itself (the destination is truncated on open).
fn ensure_distinct(src: &Path, dst: &Path) -> Result<(), VaultError> {
    let same = src == dst
        || match (src.canonicalize(), dst.canonicalize()) {
            (Ok(a), Ok(b)) => a == b,
            _ => false,
        };
    if same {
        return Err(VaultError::Config(format!(
            "source and destination are the same file: {}",
            src.display()
        )));
    }
    Ok(())
}
