use thiserror::Error;

#[derive(Debug, Error)]
pub enum KeyWrapError {
    /// The parameter record is truncated or declares an out-of-bounds
    /// nonce length. The wrapped key should be treated as corrupt.
    #[error("malformed parameter record: {0}")]
    MalformedParameterRecord(String),

    #[error("invalid key length: {0} bytes (expected 16, 24, or 32)")]
    InvalidKeyLength(usize),

    #[error("unsupported tag length: {0} bits")]
    UnsupportedTagLength(u32),

    #[error("unsupported nonce length: {0} bytes")]
    UnsupportedNonceLength(usize),

    #[error("random number generation failed: {0}")]
    RngFailed(String),

    #[error("encryption context entry exceeds 65535 bytes")]
    OversizedContext,

    #[error("aead encryption failed")]
    EncryptionFailed,

    // Deliberately does not say which of ciphertext, tag, nonce, or AAD
    // mismatched.
    #[error("authentication failed")]
    AuthenticationFailed,
}
