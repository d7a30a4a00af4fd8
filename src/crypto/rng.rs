// src/crypto/rng.rs
//! Secure randomness for fixed-size values.
//!
//! Adds `T::random()` to every `SpanBuffer<N>` alias (`Iv16`, `Aes256Key32`, …),
//! filled straight from the operating system RNG.

use crate::error::VaultError;
use rand::{rngs::OsRng, TryRngCore};
use secure_gate::Fixed;

/// Extension trait – gives `.random()` to all fixed-size secret types
pub trait SecureRandomExt: Sized {
    /// Generate a cryptographically secure random instance of this type.
    ///
    /// Fails only if the operating system RNG is unavailable.
    fn random() -> Result<Self, VaultError>;
}

/// Blanket impl – every `Fixed<[u8; N]>` gets `.random()`
impl<const N: usize> SecureRandomExt for Fixed<[u8; N]> {
    #[inline]
    fn random() -> Result<Self, VaultError> {
        let mut value = Fixed::new([0u8; N]);
        OsRng
            .try_fill_bytes(value.expose_secret_mut())
            .map_err(|e| VaultError::Crypto(format!("OS RNG failure: {e}")))?;
        Ok(value)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::aliases::Iv16;

    #[test]
    fn consecutive_ivs_differ() {
        let a = Iv16::random().unwrap();
        let b = Iv16::random().unwrap();
        assert_ne!(a.expose_secret(), b.expose_secret());
    }
}
