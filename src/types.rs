/// AES-GCM nonce length in bytes (96 bits per NIST recommendation).
pub const NONCE_LENGTH: usize = 12;

/// AES-GCM authentication tag length in bits.
pub const TAG_LENGTH_BITS: u32 = 128;

/// AES-GCM authentication tag length in bytes.
pub const TAG_LENGTH: usize = 16;

/// Fixed header size of an encoded parameter record:
/// [tag bits: u32 BE][nonce length: u32 BE].
pub const PARAMS_HEADER_LENGTH: usize = 8;

/// Upper bound on the nonce length a parameter record may declare.
///
/// Untrusted records control their own length prefix; this cap stops a
/// hostile prefix from driving an unbounded allocation.
pub const MAX_NONCE_LENGTH: usize = 64;

/// AES-128 key length in bytes.
pub const AES_128_KEY_LENGTH: usize = 16;

/// AES-192 key length in bytes.
pub const AES_192_KEY_LENGTH: usize = 24;

/// AES-256 key length in bytes.
pub const AES_256_KEY_LENGTH: usize = 32;
