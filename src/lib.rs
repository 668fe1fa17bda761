//! AES-GCM data-key wrapping primitives.
//!
//! Wrapping a data key produces a ciphertext+tag and a compact parameter
//! record the caller persists alongside it:
//!
//! ```text
//! [tag length in bits: u32 BE][nonce length: u32 BE][nonce]
//! ```
//!
//! A caller-supplied encryption context (string→string map) is bound into
//! the authentication tag as AAD, so tampering with the context is caught
//! at unwrap. The record carries no algorithm identifier: outer envelope
//! formats identify algorithm and codec out of band.
//!
//! ```no_run
//! use keywrap_crypto::{AesGcmKeyCipher, EncryptionContext};
//!
//! # fn main() -> Result<(), keywrap_crypto::KeyWrapError> {
//! let context: EncryptionContext = [("purpose", "wrap")].into_iter().collect();
//! let cipher = AesGcmKeyCipher::new(&[0u8; 32])?;
//!
//! let wrapped = cipher.build_wrapping_cipher(&context)?;
//! let ciphertext = wrapped.cipher.encrypt(b"data key bytes")?;
//! // persist `wrapped.params` next to `ciphertext`...
//!
//! let plaintext = cipher
//!     .build_unwrapping_cipher(&wrapped.params, 0, &context)?
//!     .decrypt(&ciphertext)?;
//! # Ok(())
//! # }
//! ```
//!
//! This crate does not manage key lifecycle, derive keys, or choose
//! wrapping algorithms; key material is owned by the caller.

pub mod cipher;
pub mod context;
pub mod error;
pub mod keys;
pub mod params;
pub mod rand;
pub mod types;

pub use cipher::{AesGcmKeyCipher, UnwrappingCipher, WrappingCipher, WrappingData};
pub use context::EncryptionContext;
pub use error::KeyWrapError;
pub use keys::WrappingKeys;
pub use params::AeadParams;
pub use rand::{OsRandom, SecureRandom};
pub use types::{MAX_NONCE_LENGTH, NONCE_LENGTH, TAG_LENGTH, TAG_LENGTH_BITS};
