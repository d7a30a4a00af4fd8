//! Parallel encryption/decryption of independent streams (feature `batch-ops`).
//!
//! Each `(reader, writer)` pair is a separate container with its own IV; no
//! state is shared between pairs. The first failure aborts the batch, and
//! pairs already processed keep their output.

use rayon::prelude::*;
use std::io::{Read, Seek, Write};

use crate::aliases::PasswordString;
use crate::{decrypt, encrypt, VaultError};

pub fn encrypt_batch<R, W>(batch: &mut [(R, W)], password: &PasswordString) -> Result<(), VaultError>
where
    R: Read + Seek + Send,
    W: Write + Send,
{
    batch
        .par_iter_mut()
        .try_for_each(|(src, dst)| encrypt(src, dst, password).map(|_| ()))
}

pub fn decrypt_batch<R, W>(batch: &mut [(R, W)], password: &PasswordString) -> Result<(), VaultError>
where
    R: Read + Send,
    W: Write + Send,
{
    batch
        .par_iter_mut()
        .try_for_each(|(src, dst)| decrypt(src, dst, password).map(|_| ()))
}
