//! src/decryptor/stream.rs
//! Chunked AES-256-CBC decryption with exact-length truncation

use crate::aliases::{Aes256Key32, Block16, ChunkBuffer, Iv16};
use crate::config::CodecConfig;
use crate::consts::BLOCK_SIZE;
use crate::error::VaultError;
use crate::utils::{read_full, xor_in_place};
use aes::cipher::{BlockDecrypt, KeyInit};
use aes::{Aes256Dec, Block as AesBlock};
use std::io::{Read, Write};
use tracing::{trace, warn};

/// Decrypt the ciphertext body of a container (everything after the header).
///
/// `source` is read in `chunk_size` pieces until exhausted. Each piece is
/// CBC-decrypted with the chain carried over from the previous one, and only
/// the first `original_size` plaintext bytes are ever written: the space
/// padding added at encryption time is dropped on the fly, so `destination`
/// never needs to support truncation.
///
/// Returns the number of plaintext bytes written (always `original_size`).
///
/// # Errors
///
/// - [`VaultError::Config`] - `chunk_size` is zero or not a multiple of 16
/// - [`VaultError::Format`] - ciphertext length is not a multiple of 16, or
///   holds fewer than `original_size` bytes
/// - [`VaultError::Io`] - read or write failure
///
/// Ciphertext beyond `original_size` rounded up to the block size is read,
/// decrypted and discarded.
pub fn decrypt_stream<R, W>(
    mut source: R,
    mut destination: W,
    iv: &Iv16,
    key: &Aes256Key32,
    original_size: u64,
    chunk_size: usize,
) -> Result<u64, VaultError>
where
    R: Read,
    W: Write,
{
    CodecConfig::new().with_chunk_size(chunk_size).validate()?;

    let cipher = Aes256Dec::new(key.expose_secret().into());
    let mut chain = Block16::new(*iv.expose_secret());
    let mut buffer = ChunkBuffer::new(vec![0u8; chunk_size]);
    let chunk = buffer.expose_secret_mut();

    let mut remaining = original_size;
    let mut ciphertext_len: u64 = 0;
    let mut chunk_index: u64 = 0;

    loop {
        let n = read_full(&mut source, chunk)?;
        if n == 0 {
            break;
        }
        if n % BLOCK_SIZE != 0 {
            return Err(VaultError::Format(format!(
                "ciphertext length {} is not a multiple of {BLOCK_SIZE} bytes",
                ciphertext_len + n as u64
            )));
        }
        ciphertext_len += n as u64;

        for block in chunk[..n].chunks_exact_mut(BLOCK_SIZE) {
            let mut ciphertext = [0u8; BLOCK_SIZE];
            ciphertext.copy_from_slice(block);

            cipher.decrypt_block(AesBlock::from_mut_slice(block));
            xor_in_place(block, chain.expose_secret());

            *chain.expose_secret_mut() = ciphertext;
        }

        let take = remaining.min(n as u64) as usize;
        destination.write_all(&chunk[..take])?;
        remaining -= take as u64;

        trace!(chunk = chunk_index, bytes = n, written = take, "decrypted chunk");
        chunk_index += 1;

        if n < chunk_size {
            break;
        }
    }

    if remaining > 0 {
        return Err(VaultError::Format(format!(
            "truncated container: header declares {original_size} bytes but ciphertext holds {ciphertext_len}"
        )));
    }

    let expected = original_size.div_ceil(BLOCK_SIZE as u64) * BLOCK_SIZE as u64;
    if ciphertext_len > expected {
        warn!(
            ciphertext_len,
            expected, "container carries surplus ciphertext; discarding it"
        );
    }

    Ok(original_size)
}
