//! AES-GCM wrapping and unwrapping cipher construction.
//!
//! `AesGcmKeyCipher` binds key material, a nonce, a fixed 128-bit tag, and
//! the serialized encryption context into a cipher context configured for
//! exactly one direction. Wrapping generates a fresh random 96-bit nonce
//! per call and returns the encoded parameter record alongside the cipher;
//! unwrapping recovers the nonce from a record the caller stored next to
//! the ciphertext.
//!
//! The two directions are distinct types consumed on use, so a
//! decrypt-configured context cannot be asked to encrypt and no context
//! can be used twice.

use aes_gcm::aead::consts::U12;
use aes_gcm::aead::{Aead, KeyInit, Payload};
use aes_gcm::aes::Aes192;
use aes_gcm::{Aes128Gcm, Aes256Gcm, AesGcm, Nonce};
use tracing::debug;

use crate::context::EncryptionContext;
use crate::error::KeyWrapError;
use crate::keys::WrappingKeys;
use crate::params::AeadParams;
use crate::rand::{OsRandom, SecureRandom};
use crate::types::{
    AES_128_KEY_LENGTH, AES_192_KEY_LENGTH, AES_256_KEY_LENGTH, NONCE_LENGTH, TAG_LENGTH_BITS,
};

type Aes192Gcm = AesGcm<Aes192, U12>;

/// AES-GCM instance selected by key length.
enum GcmBackend {
    Aes128(Aes128Gcm),
    Aes192(Aes192Gcm),
    Aes256(Aes256Gcm),
}

impl core::fmt::Debug for GcmBackend {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        match self {
            Self::Aes128(_) => f.write_str("GcmBackend::Aes128"),
            Self::Aes192(_) => f.write_str("GcmBackend::Aes192"),
            Self::Aes256(_) => f.write_str("GcmBackend::Aes256"),
        }
    }
}

impl GcmBackend {
    fn from_key(key: &[u8]) -> Result<Self, KeyWrapError> {
        let invalid = |_| KeyWrapError::InvalidKeyLength(key.len());
        match key.len() {
            AES_128_KEY_LENGTH => Ok(Self::Aes128(
                Aes128Gcm::new_from_slice(key).map_err(invalid)?,
            )),
            AES_192_KEY_LENGTH => Ok(Self::Aes192(
                Aes192Gcm::new_from_slice(key).map_err(invalid)?,
            )),
            AES_256_KEY_LENGTH => Ok(Self::Aes256(
                Aes256Gcm::new_from_slice(key).map_err(invalid)?,
            )),
            other => Err(KeyWrapError::InvalidKeyLength(other)),
        }
    }

    fn encrypt(&self, nonce: &[u8; NONCE_LENGTH], payload: Payload<'_, '_>) -> Result<Vec<u8>, aes_gcm::Error> {
        let nonce = Nonce::from_slice(nonce);
        match self {
            Self::Aes128(cipher) => cipher.encrypt(nonce, payload),
            Self::Aes192(cipher) => cipher.encrypt(nonce, payload),
            Self::Aes256(cipher) => cipher.encrypt(nonce, payload),
        }
    }

    fn decrypt(&self, nonce: &[u8; NONCE_LENGTH], payload: Payload<'_, '_>) -> Result<Vec<u8>, aes_gcm::Error> {
        let nonce = Nonce::from_slice(nonce);
        match self {
            Self::Aes128(cipher) => cipher.decrypt(nonce, payload),
            Self::Aes192(cipher) => cipher.decrypt(nonce, payload),
            Self::Aes256(cipher) => cipher.decrypt(nonce, payload),
        }
    }
}

/// Encrypt-mode cipher context, fully configured (key, nonce, tag length,
/// AAD). Single-use: [`encrypt`](WrappingCipher::encrypt) consumes it.
pub struct WrappingCipher {
    backend: GcmBackend,
    nonce: [u8; NONCE_LENGTH],
    aad: Vec<u8>,
}

impl WrappingCipher {
    /// Encrypt `plaintext`, returning ciphertext with the 16-byte tag
    /// appended.
    ///
    /// # Errors
    ///
    /// Returns [`KeyWrapError::EncryptionFailed`] on an internal AEAD error
    /// (unreachable with a valid key and nonce).
    pub fn encrypt(self, plaintext: &[u8]) -> Result<Vec<u8>, KeyWrapError> {
        self.backend
            .encrypt(
                &self.nonce,
                Payload {
                    msg: plaintext,
                    aad: &self.aad,
                },
            )
            .map_err(|_| KeyWrapError::EncryptionFailed)
    }
}

/// Decrypt-mode cipher context, fully configured and ready to accept
/// ciphertext plus tag. Single-use: [`decrypt`](UnwrappingCipher::decrypt)
/// consumes it.
pub struct UnwrappingCipher {
    backend: GcmBackend,
    nonce: [u8; NONCE_LENGTH],
    aad: Vec<u8>,
}

impl core::fmt::Debug for UnwrappingCipher {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.debug_struct("UnwrappingCipher")
            .field("backend", &self.backend)
            .field("nonce", &self.nonce)
            .field("aad", &self.aad)
            .finish()
    }
}

impl UnwrappingCipher {
    /// Decrypt `ciphertext_and_tag` and verify the authentication tag.
    ///
    /// # Errors
    ///
    /// Returns [`KeyWrapError::AuthenticationFailed`] when verification
    /// fails. The error does not say whether ciphertext, tag, nonce, or
    /// AAD mismatched.
    pub fn decrypt(self, ciphertext_and_tag: &[u8]) -> Result<Vec<u8>, KeyWrapError> {
        self.backend
            .decrypt(
                &self.nonce,
                Payload {
                    msg: ciphertext_and_tag,
                    aad: &self.aad,
                },
            )
            .map_err(|_| KeyWrapError::AuthenticationFailed)
    }
}

/// Result of building a wrapping cipher: the live encrypt-mode context and
/// the encoded parameter record the caller must persist alongside the
/// ciphertext (it is required for unwrap).
pub struct WrappingData {
    pub cipher: WrappingCipher,
    pub params: Vec<u8>,
}

/// Builds single-direction AES-GCM cipher contexts for data-key wrapping.
///
/// Symmetric scheme: one key serves both directions. The builder holds
/// only key material and the random source; every build call produces a
/// fresh, independent cipher context, so one builder is safely reusable
/// across many operations.
pub struct AesGcmKeyCipher<R: SecureRandom = OsRandom> {
    keys: WrappingKeys,
    rng: R,
}

impl AesGcmKeyCipher<OsRandom> {
    /// Create a cipher builder over a raw AES key (16, 24, or 32 bytes),
    /// drawing nonces from the OS CSPRNG.
    ///
    /// # Errors
    ///
    /// Returns [`KeyWrapError::InvalidKeyLength`] for any other key size.
    pub fn new(key: &[u8]) -> Result<Self, KeyWrapError> {
        Self::with_rng(key, OsRandom)
    }
}

impl<R: SecureRandom> AesGcmKeyCipher<R> {
    /// Like [`AesGcmKeyCipher::new`] with an injected random source.
    pub fn with_rng(key: &[u8], rng: R) -> Result<Self, KeyWrapError> {
        match key.len() {
            AES_128_KEY_LENGTH | AES_192_KEY_LENGTH | AES_256_KEY_LENGTH => Ok(Self {
                keys: WrappingKeys::symmetric(key),
                rng,
            }),
            other => Err(KeyWrapError::InvalidKeyLength(other)),
        }
    }

    /// Build an encrypt-mode cipher with a fresh random nonce and the
    /// context bound as AAD, plus the parameter record describing it.
    ///
    /// Tag length is fixed at 128 bits and the nonce at 12 bytes; the
    /// caller gets no way to weaken either.
    ///
    /// # Errors
    ///
    /// Returns [`KeyWrapError::RngFailed`] when the random source is
    /// unavailable, [`KeyWrapError::OversizedContext`] when the context
    /// cannot be serialized.
    pub fn build_wrapping_cipher(
        &self,
        context: &EncryptionContext,
    ) -> Result<WrappingData, KeyWrapError> {
        let mut nonce = [0u8; NONCE_LENGTH];
        self.rng.fill_bytes(&mut nonce)?;

        let backend = GcmBackend::from_key(self.keys.wrapping_key())?;
        let aad = context.to_aad_bytes()?;
        let params = AeadParams::new(TAG_LENGTH_BITS, nonce.to_vec());

        debug!(
            context_entries = context.len(),
            params_len = params.encoded_len(),
            "built wrapping cipher"
        );
        Ok(WrappingData {
            cipher: WrappingCipher {
                backend,
                nonce,
                aad,
            },
            params: params.to_bytes(),
        })
    }

    /// Build a decrypt-mode cipher from a parameter record embedded in
    /// `params` at `offset`, with the context bound as AAD.
    ///
    /// The context must serialize to the same bytes bound during wrap or
    /// decryption will fail authentication.
    ///
    /// # Errors
    ///
    /// Returns [`KeyWrapError::MalformedParameterRecord`] when the record
    /// does not decode, [`KeyWrapError::UnsupportedTagLength`] or
    /// [`KeyWrapError::UnsupportedNonceLength`] when the decoded
    /// parameters are outside what AES-GCM accepts here (128-bit tag,
    /// 12-byte nonce).
    pub fn build_unwrapping_cipher(
        &self,
        params: &[u8],
        offset: usize,
        context: &EncryptionContext,
    ) -> Result<UnwrappingCipher, KeyWrapError> {
        let decoded = AeadParams::from_bytes(params, offset)?;
        if decoded.tag_length_bits != TAG_LENGTH_BITS {
            return Err(KeyWrapError::UnsupportedTagLength(decoded.tag_length_bits));
        }
        if decoded.nonce.len() != NONCE_LENGTH {
            return Err(KeyWrapError::UnsupportedNonceLength(decoded.nonce.len()));
        }

        let backend = GcmBackend::from_key(self.keys.unwrapping_key())?;
        let aad = context.to_aad_bytes()?;
        let mut nonce = [0u8; NONCE_LENGTH];
        nonce.copy_from_slice(&decoded.nonce);

        debug!(
            context_entries = context.len(),
            offset, "built unwrapping cipher"
        );
        Ok(UnwrappingCipher {
            backend,
            nonce,
            aad,
        })
    }
}
