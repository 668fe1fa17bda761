//! Secure random byte generation behind a capability trait.
//!
//! Production code uses [`OsRandom`] (the OS CSPRNG via `getrandom`);
//! tests substitute deterministic fixtures without weakening production
//! randomness.

use crate::error::KeyWrapError;

/// Produces cryptographically secure random bytes.
///
/// Implementations must be safe to share across threads; the OS source
/// serializes its own internal state updates.
pub trait SecureRandom {
    /// Fill `dest` entirely with random bytes.
    ///
    /// # Errors
    ///
    /// Returns [`KeyWrapError::RngFailed`] when the random source is
    /// unavailable.
    fn fill_bytes(&self, dest: &mut [u8]) -> Result<(), KeyWrapError>;
}

/// The operating system's CSPRNG.
#[derive(Debug, Clone, Copy, Default)]
pub struct OsRandom;

impl SecureRandom for OsRandom {
    fn fill_bytes(&self, dest: &mut [u8]) -> Result<(), KeyWrapError> {
        getrandom::getrandom(dest).map_err(|e| KeyWrapError::RngFailed(e.to_string()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn fills_requested_length() {
        let mut buf = [0u8; 32];
        OsRandom.fill_bytes(&mut buf).unwrap();
        // 32 zero bytes from a working CSPRNG is a 2^-256 event.
        assert_ne!(buf, [0u8; 32]);
    }

    #[test]
    fn successive_fills_differ() {
        let mut a = [0u8; 16];
        let mut b = [0u8; 16];
        OsRandom.fill_bytes(&mut a).unwrap();
        OsRandom.fill_bytes(&mut b).unwrap();
        assert_ne!(a, b);
    }
}
