//! src/crypto/kdf/sha256.rs
//!
//! Password → AES-256 key: the raw SHA-256 digest of the UTF-8 password bytes.
//!
//! There is no salt and no iteration count, so the same password always yields
//! the same key and offers no resistance to offline guessing. This is the
//! container format's derivation and must stay as-is for existing files to
//! decrypt.

use crate::aliases::{Aes256Key32, PasswordString};
use crate::error::VaultError;

use sha2::{Digest, Sha256};

/// Derive the SHA-256 password key directly into a secure key buffer.
///
/// # Errors
///
/// - [`VaultError::Crypto`] - the password is empty
///
/// # Example
///
/// ```
/// use vaultcrypt_rs::aliases::{Aes256Key32, PasswordString};
/// use vaultcrypt_rs::derive_key;
///
/// let password = PasswordString::new("secret".to_string());
/// let mut key = Aes256Key32::new([0u8; 32]);
/// derive_key(&password, &mut key)?;
/// assert_eq!(key.expose_secret()[..4], [0x2bu8, 0xb8, 0x0d, 0x53]);
/// # Ok::<(), vaultcrypt_rs::VaultError>(())
/// ```
#[inline]
pub fn derive_key(password: &PasswordString, out_key: &mut Aes256Key32) -> Result<(), VaultError> {
    let password = password.expose_secret();
    if password.is_empty() {
        return Err(VaultError::Crypto("password must not be empty".into()));
    }

    let digest = Sha256::digest(password.as_bytes());
    out_key.expose_secret_mut().copy_from_slice(digest.as_slice());

    Ok(())
}

/// Convenience: derive and return a fresh secure key.
#[inline]
pub fn derive_key_new(password: &PasswordString) -> Result<Aes256Key32, VaultError> {
    let mut key = Aes256Key32::new([0u8; 32]);
    derive_key(password, &mut key)?;
    Ok(key)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn same_password_same_key() {
        let a = derive_key_new(&PasswordString::new("hunter2".to_string())).unwrap();
        let b = derive_key_new(&PasswordString::new("hunter2".to_string())).unwrap();
        let c = derive_key_new(&PasswordString::new("hunter3".to_string())).unwrap();
        assert_eq!(a.expose_secret(), b.expose_secret());
        assert_ne!(a.expose_secret(), c.expose_secret());
    }

    #[test]
    fn empty_password_rejected() {
        let err = derive_key_new(&PasswordString::new(String::new())).unwrap_err();
        assert!(matches!(err, VaultError::Crypto(_)));
    }
}
