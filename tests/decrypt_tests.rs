//! tests/decrypt_tests.rs
//! Decryption: malformed containers, silent wrong-password behaviour, tampering

mod common;
use common::{password, patterned, TEST_DATA, TEST_PASSWORD};

use vaultcrypt_rs::consts::HEADER_LEN;
use vaultcrypt_rs::{decrypt, decrypt_with_config, encrypt, CodecConfig, VaultError};
use std::io::{self, Cursor, Write};

fn container_for(data: &[u8]) -> Vec<u8> {
    let mut container = Vec::new();
    encrypt(Cursor::new(data), &mut container, &password(TEST_PASSWORD)).unwrap();
    container
}

fn decrypt_err(container: &[u8]) -> VaultError {
    decrypt(Cursor::new(container), &mut Vec::new(), &password(TEST_PASSWORD)).unwrap_err()
}

#[test]
fn non_numeric_size_field() {
    let mut container = container_for(TEST_DATA);
    container[3] = b'x';
    let err = decrypt_err(&container);
    assert_eq!(
        err.to_string(),
        "Format error: size field byte 3 is not an ASCII digit (0x78)"
    );
}

#[test]
fn truncated_headers() {
    let container = container_for(TEST_DATA);
    let cases = [
        (0usize, "Format error: truncated container: missing size field"),
        (10, "Format error: truncated container: missing size field"),
        (16, "Format error: truncated container: missing IV"),
        (31, "Format error: truncated container: missing IV"),
    ];
    for (len, expected) in cases {
        assert_eq!(decrypt_err(&container[..len]).to_string(), expected, "len {len}");
    }
}

#[test]
fn misaligned_ciphertext() {
    let mut container = container_for(&patterned(40));
    container.pop();
    assert!(matches!(decrypt_err(&container), VaultError::Format(_)));

    let mut container = container_for(TEST_DATA);
    container.push(0);
    assert!(matches!(decrypt_err(&container), VaultError::Format(_)));
}

#[test]
fn ciphertext_shorter_than_size_field() {
    let container = container_for(&patterned(40));
    // Drop the last whole block: still aligned, but 8 bytes short.
    let err = decrypt_err(&container[..container.len() - 16]);
    assert!(matches!(err, VaultError::Format(_)));
}

#[test]
fn surplus_ciphertext_is_discarded() {
    let mut container = container_for(TEST_DATA);
    container.extend_from_slice(&[0xEE; 32]);

    let mut decrypted = Vec::new();
    let n = decrypt(Cursor::new(&container), &mut decrypted, &password(TEST_PASSWORD)).unwrap();
    assert_eq!(n, 11);
    assert_eq!(decrypted, TEST_DATA);
}

#[test]
fn wrong_password_is_silent_garbage() {
    let data = patterned(100);
    let container = container_for(&data);

    let mut decrypted = Vec::new();
    let n = decrypt(Cursor::new(&container), &mut decrypted, &password("not-the-password")).unwrap();
    assert_eq!(n, 100);
    assert_eq!(decrypted.len(), 100);
    assert_ne!(decrypted, data);
}

#[test]
fn tamper_garbles_from_flipped_block() {
    let data = patterned(64);
    let container = container_for(&data);

    for block in 0..4usize {
        let mut tampered = container.clone();
        tampered[HEADER_LEN + block * 16 + 5] ^= 0x01;

        let mut decrypted = Vec::new();
        decrypt(Cursor::new(&tampered), &mut decrypted, &password(TEST_PASSWORD)).unwrap();

        let start = block * 16;
        assert_eq!(decrypted[..start], data[..start], "block {block}: earlier blocks changed");
        assert_ne!(
            decrypted[start..start + 16],
            data[start..start + 16],
            "block {block}: tampered block decrypted cleanly"
        );
        if block < 3 {
            // CBC: the flipped bit propagates into the same offset of the next block.
            assert_eq!(decrypted[start + 16 + 5], data[start + 16 + 5] ^ 0x01);
        }
    }
}

#[test]
fn decrypt_chunk_size_independent() {
    let data = patterned(1000);
    let container = container_for(&data);

    for chunk_size in [16usize, 48, 64, 1024, 64 * 1024] {
        let config = CodecConfig::new().with_chunk_size(chunk_size);
        let mut decrypted = Vec::new();
        decrypt_with_config(
            Cursor::new(&container),
            &mut decrypted,
            &password(TEST_PASSWORD),
            &config,
        )
        .unwrap();
        assert_eq!(decrypted, data, "chunk size {chunk_size}");
    }
}

struct BrokenPipe;

impl Write for BrokenPipe {
    fn write(&mut self, _: &[u8]) -> io::Result<usize> {
        Err(io::Error::new(io::ErrorKind::BrokenPipe, "closed"))
    }
    fn flush(&mut self) -> io::Result<()> {
        Ok(())
    }
}

#[test]
fn writer_failure_is_io_error() {
    let container = container_for(TEST_DATA);
    let err = decrypt(Cursor::new(&container), BrokenPipe, &password(TEST_PASSWORD)).unwrap_err();
    assert!(matches!(err, VaultError::Io(_)));
}
