//! Key material capability for wrapping schemes.
//!
//! A scheme either uses one symmetric key for both directions or distinct
//! encrypt/decrypt keys. The AES-GCM scheme in this crate is symmetric;
//! the `Asymmetric` variant exists for schemes configured with separate
//! key pairs. Key bytes are owned here only as opaque material: this crate
//! never generates, derives, or persists them, and wipes its copies on
//! drop.

use zeroize::Zeroizing;

/// Key material for one wrapping scheme, split by direction.
#[derive(Clone)]
pub enum WrappingKeys {
    /// One key serves both wrap and unwrap.
    Symmetric(Zeroizing<Vec<u8>>),
    /// Distinct keys per direction.
    Asymmetric {
        wrapping: Zeroizing<Vec<u8>>,
        unwrapping: Zeroizing<Vec<u8>>,
    },
}

impl WrappingKeys {
    pub fn symmetric(key: &[u8]) -> Self {
        Self::Symmetric(Zeroizing::new(key.to_vec()))
    }

    pub fn asymmetric(wrapping: &[u8], unwrapping: &[u8]) -> Self {
        Self::Asymmetric {
            wrapping: Zeroizing::new(wrapping.to_vec()),
            unwrapping: Zeroizing::new(unwrapping.to_vec()),
        }
    }

    /// Key used when building a wrapping (encrypt-mode) cipher.
    pub fn wrapping_key(&self) -> &[u8] {
        match self {
            Self::Symmetric(key) => key,
            Self::Asymmetric { wrapping, .. } => wrapping,
        }
    }

    /// Key used when building an unwrapping (decrypt-mode) cipher.
    pub fn unwrapping_key(&self) -> &[u8] {
        match self {
            Self::Symmetric(key) => key,
            Self::Asymmetric { unwrapping, .. } => unwrapping,
        }
    }
}

// Key bytes must never end up in logs.
impl std::fmt::Debug for WrappingKeys {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Symmetric(key) => f
                .debug_struct("WrappingKeys::Symmetric")
                .field("len", &key.len())
                .finish(),
            Self::Asymmetric {
                wrapping,
                unwrapping,
            } => f
                .debug_struct("WrappingKeys::Asymmetric")
                .field("wrapping_len", &wrapping.len())
                .field("unwrapping_len", &unwrapping.len())
                .finish(),
        }
    }
}
