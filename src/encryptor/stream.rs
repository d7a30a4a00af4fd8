//! src/encryptor/stream.rs
//! Chunked AES-256-CBC encryption with space padding on the final chunk

use crate::aliases::{Aes256Key32, Block16, ChunkBuffer, Iv16};
use crate::config::CodecConfig;
use crate::consts::{BLOCK_SIZE, PAD_BYTE};
use crate::error::VaultError;
use crate::utils::{padded_len, read_full, xor_in_place};
use aes::cipher::{BlockEncrypt, KeyInit};
use aes::{Aes256Enc, Block as AesBlock};
use std::io::{Read, Write};
use tracing::trace;

/// Encrypt `source` into `destination` as a container body (no header).
///
/// Input is consumed in `chunk_size` pieces; the CBC chain runs across chunk
/// boundaries, so the output does not depend on `chunk_size`. Only the last
/// piece can be short, and it is right-padded with `0x20` up to the block
/// size. Empty input writes nothing.
///
/// Returns the number of plaintext bytes consumed.
///
/// # Errors
///
/// - [`VaultError::Config`] - `chunk_size` is zero or not a multiple of 16
/// - [`VaultError::Io`] - read or write failure
pub fn encrypt_stream<R, W>(
    mut source: R,
    mut destination: W,
    iv: &Iv16,
    key: &Aes256Key32,
    chunk_size: usize,
) -> Result<u64, VaultError>
where
    R: Read,
    W: Write,
{
    CodecConfig::new().with_chunk_size(chunk_size).validate()?;

    let cipher = Aes256Enc::new(key.expose_secret().into());
    let mut chain = Block16::new(*iv.expose_secret());
    let mut buffer = ChunkBuffer::new(vec![0u8; chunk_size]);
    let chunk = buffer.expose_secret_mut();

    let mut total: u64 = 0;
    let mut chunk_index: u64 = 0;

    loop {
        let n = read_full(&mut source, chunk)?;
        if n == 0 {
            break;
        }
        total += n as u64;

        let padded = padded_len(n);
        chunk[n..padded].fill(PAD_BYTE);

        for block in chunk[..padded].chunks_exact_mut(BLOCK_SIZE) {
            xor_in_place(block, chain.expose_secret());
            cipher.encrypt_block(AesBlock::from_mut_slice(block));
            chain.expose_secret_mut().copy_from_slice(block);
        }

        destination.write_all(&chunk[..padded])?;

        trace!(chunk = chunk_index, bytes = n, padded, "encrypted chunk");
        chunk_index += 1;

        if n < chunk_size {
            break;
        }
    }

    Ok(total)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Cursor;

    fn fixture() -> (Iv16, Aes256Key32) {
        (Iv16::new([0x24; 16]), Aes256Key32::new([0x42; 32]))
    }

    #[test]
    fn unaligned_chunk_size_rejected() {
        let (iv, key) = fixture();
        let mut out = Vec::new();
        let err = encrypt_stream(Cursor::new(vec![7u8; 40]), &mut out, &iv, &key, 20).unwrap_err();
        assert!(matches!(err, VaultError::Config(_)));
        assert!(out.is_empty());
    }

    #[test]
    fn zero_chunk_size_rejected() {
        let (iv, key) = fixture();
        let err = encrypt_stream(Cursor::new(b"abc"), Vec::new(), &iv, &key, 0).unwrap_err();
        assert!(matches!(err, VaultError::Config(_)));
    }

    #[test]
    fn output_independent_of_chunk_size() {
        let (iv, key) = fixture();
        let plaintext: Vec<u8> = (0..100u8).collect();

        let mut small = Vec::new();
        let mut large = Vec::new();
        encrypt_stream(Cursor::new(&plaintext), &mut small, &iv, &key, 16).unwrap();
        encrypt_stream(Cursor::new(&plaintext), &mut large, &iv, &key, 4096).unwrap();
        assert_eq!(small.len(), 112);
        assert_eq!(small, large);
    }
}
