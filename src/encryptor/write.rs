//! src/encryptor/write.rs
//! Container header write helpers

use crate::error::VaultError;
use crate::header::ContainerHeader;
use std::io::Write;

#[inline]
pub fn write_octets<W: Write>(writer: &mut W, data: &[u8]) -> Result<(), VaultError> {
    writer.write_all(data).map_err(VaultError::Io)
}

/// Write the 32-byte header: zero-padded 16-digit plaintext length, then IV.
///
/// The header is encoded in full before the first byte reaches `writer`, so
/// an oversize length leaves the destination untouched.
#[inline]
pub fn write_header<W: Write>(writer: &mut W, header: &ContainerHeader) -> Result<(), VaultError> {
    write_octets(writer, &header.to_bytes()?)
}
