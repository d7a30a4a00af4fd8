//! # Header Parsing
//!
//! The 32-byte container header: a zero-padded 16-digit decimal plaintext
//! length followed by the 16-byte CBC initialization vector.

use crate::consts::{BLOCK_SIZE, HEADER_LEN, IV_LEN, MAX_ORIGINAL_SIZE, SIZE_FIELD_LEN};
use crate::decryptor::read::{read_iv, read_size_field};
use crate::error::VaultError;
use std::io::Read;

/// Parsed view of a container header.
///
/// The IV is public data (it is stored in the clear), so it is held as a
/// plain array here rather than in a secure buffer.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ContainerHeader {
    /// Plaintext length in bytes; the decrypted stream is truncated to this.
    pub original_size: u64,
    /// CBC initialization vector.
    pub iv: [u8; IV_LEN],
}

impl ContainerHeader {
    /// Ciphertext length a well-formed container carries for this header:
    /// `original_size` rounded up to the block size.
    #[must_use]
    pub const fn padded_size(&self) -> u64 {
        self.original_size.div_ceil(BLOCK_SIZE as u64) * BLOCK_SIZE as u64
    }

    /// Serialize to the on-disk 32-byte layout.
    pub fn to_bytes(&self) -> Result<[u8; HEADER_LEN], VaultError> {
        let mut out = [0u8; HEADER_LEN];
        out[..SIZE_FIELD_LEN].copy_from_slice(&encode_size_field(self.original_size)?);
        out[SIZE_FIELD_LEN..].copy_from_slice(&self.iv);
        Ok(out)
    }
}

/// Encode a plaintext length as 16 zero-padded ASCII digits.
///
/// # Errors
///
/// - [`VaultError::Format`] - `size` exceeds [`MAX_ORIGINAL_SIZE`]
pub fn encode_size_field(size: u64) -> Result<[u8; SIZE_FIELD_LEN], VaultError> {
    if size > MAX_ORIGINAL_SIZE {
        return Err(VaultError::Format(format!(
            "plaintext of {size} bytes exceeds the 16-digit size field (max {MAX_ORIGINAL_SIZE})"
        )));
    }
    let mut field = [0u8; SIZE_FIELD_LEN];
    field.copy_from_slice(format!("{size:016}").as_bytes());
    Ok(field)
}

/// Decode the 16-digit size field. Every byte must be an ASCII digit.
pub fn parse_size_field(field: &[u8; SIZE_FIELD_LEN]) -> Result<u64, VaultError> {
    field.iter().enumerate().try_fold(0u64, |acc, (i, &b)| {
        if b.is_ascii_digit() {
            Ok(acc * 10 + u64::from(b - b'0'))
        } else {
            Err(VaultError::Format(format!(
                "size field byte {i} is not an ASCII digit (0x{b:02x})"
            )))
        }
    })
}

/// Read and validate a container header without decrypting anything.
///
/// Useful for inspecting containers or checking a file before handing it
/// to [`decrypt`](crate::decrypt). The reader is left positioned at the
/// first ciphertext byte.
///
/// # Thread Safety
///
/// Pure function over the given reader; safe to call concurrently on
/// different readers.
///
/// # Errors
///
/// - [`VaultError::Format`] - size field is not 16 ASCII digits, or the
///   header is shorter than 32 bytes
/// - [`VaultError::Io`] - any other read failure
///
/// # Example
///
/// ```
/// use vaultcrypt_rs::read_header;
/// use std::io::Cursor;
///
/// let mut bytes = b"0000000000000011".to_vec();
/// bytes.extend_from_slice(&[0x11; 16]);
/// let header = read_header(Cursor::new(bytes))?;
/// assert_eq!(header.original_size, 11);
/// assert_eq!(header.padded_size(), 16);
/// # Ok::<(), vaultcrypt_rs::VaultError>(())
/// ```
pub fn read_header<R: Read>(mut reader: R) -> Result<ContainerHeader, VaultError> {
    let original_size = read_size_field(&mut reader)?;
    let iv = read_iv(&mut reader)?;
    Ok(ContainerHeader {
        original_size,
        iv: *iv.expose_secret(),
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Cursor;

    #[test]
    fn size_field_vectors() {
        let cases: &[(u64, &[u8; 16])] = &[
            (0, b"0000000000000000"),
            (11, b"0000000000000011"),
            (65_536, b"0000000000065536"),
            (MAX_ORIGINAL_SIZE, b"9999999999999999"),
        ];
        for &(size, field) in cases {
            assert_eq!(&encode_size_field(size).unwrap(), field);
            assert_eq!(parse_size_field(field).unwrap(), size);
        }
    }

    #[test]
    fn size_field_overflow() {
        let err = encode_size_field(MAX_ORIGINAL_SIZE + 1).unwrap_err();
        assert!(matches!(err, VaultError::Format(_)));
    }

    #[test]
    fn non_digit_size_field() {
        for field in [b"00000000000000 1", b"-000000000000011", b"000000000000001a"] {
            let err = parse_size_field(field).unwrap_err();
            assert!(matches!(err, VaultError::Format(_)));
        }
    }

    #[test]
    fn header_bytes_layout() {
        let header = ContainerHeader {
            original_size: 42,
            iv: [0xAB; 16],
        };
        let bytes = header.to_bytes().unwrap();
        assert_eq!(&bytes[..16], b"0000000000000042");
        assert_eq!(&bytes[16..], &[0xAB; 16]);
        assert_eq!(read_header(Cursor::new(bytes)).unwrap(), header);
    }

    #[test]
    fn truncated_iv() {
        let mut bytes = b"0000000000000005".to_vec();
        bytes.extend_from_slice(&[1, 2, 3]);
        let err = read_header(Cursor::new(bytes)).unwrap_err();
        assert_eq!(err.to_string(), "Format error: truncated container: missing IV");
    }
}
