//! src/decryptor/read.rs
//! Stack-first container header reads

use crate::aliases::Iv16;
use crate::consts::{IV_LEN, SIZE_FIELD_LEN};
use crate::error::VaultError;
use crate::header::parse_size_field;
use std::io::{ErrorKind, Read};

/// Read exactly `N` bytes into a stack-allocated `[u8; N]`.
///
/// Running out of input is a malformed container, not an I/O failure, so
/// EOF maps to [`VaultError::Format`] naming the missing `field`.
#[inline(always)]
pub fn read_exact_span<R, const N: usize>(
    reader: &mut R,
    field: &str,
) -> Result<[u8; N], VaultError>
where
    R: Read,
{
    let mut buf = [0u8; N];
    reader.read_exact(&mut buf).map_err(|e| match e.kind() {
        ErrorKind::UnexpectedEof => {
            VaultError::Format(format!("truncated container: missing {field}"))
        }
        _ => VaultError::Io(e),
    })?;
    Ok(buf)
}

/// Read and decode the 16-digit original-size field.
#[inline(always)]
pub fn read_size_field<R>(reader: &mut R) -> Result<u64, VaultError>
where
    R: Read,
{
    let field = read_exact_span::<_, SIZE_FIELD_LEN>(reader, "size field")?;
    parse_size_field(&field)
}

/// Read the 16-byte IV that follows the size field.
#[inline(always)]
pub fn read_iv<R>(reader: &mut R) -> Result<Iv16, VaultError>
where
    R: Read,
{
    Ok(Iv16::new(read_exact_span::<_, IV_LEN>(reader, "IV")?))
}
