//! Utility functions used across the library.

use crate::consts::BLOCK_SIZE;
use std::io::{self, ErrorKind, Read, Seek, SeekFrom};

/// XORs `mask` into `block` in place (CBC chaining step).
///
/// # Panics (by contract)
///
/// Panics if either slice is shorter than 16 bytes. All callers pass
/// `chunks_exact_mut(BLOCK_SIZE)` slices and 16-byte chain values.
#[inline(always)]
pub fn xor_in_place(block: &mut [u8], mask: &[u8]) {
    for i in 0..BLOCK_SIZE {
        block[i] ^= mask[i];
    }
}

/// Rounds `len` up to the next multiple of [`BLOCK_SIZE`].
#[inline(always)]
pub const fn padded_len(len: usize) -> usize {
    len.div_ceil(BLOCK_SIZE) * BLOCK_SIZE
}

/// Reads until `buf` is full or the reader is exhausted.
///
/// Returns the number of bytes placed in `buf`; anything short of `buf.len()`
/// means end of input. Retries on [`ErrorKind::Interrupted`].
pub fn read_full<R: Read + ?Sized>(reader: &mut R, buf: &mut [u8]) -> io::Result<usize> {
    let mut filled = 0;
    while filled < buf.len() {
        match reader.read(&mut buf[filled..]) {
            Ok(0) => break,
            Ok(n) => filled += n,
            Err(e) if e.kind() == ErrorKind::Interrupted => continue,
            Err(e) => return Err(e),
        }
    }
    Ok(filled)
}

/// Number of bytes between the current position and the end of `stream`.
///
/// The stream is left at its original position.
pub fn remaining_len<S: Seek + ?Sized>(stream: &mut S) -> io::Result<u64> {
    let start = stream.stream_position()?;
    let end = stream.seek(SeekFrom::End(0))?;
    if end != start {
        stream.seek(SeekFrom::Start(start))?;
    }
    Ok(end.saturating_sub(start))
}
