//! Binary codec for AEAD parameter records.
//!
//! Wire format, big-endian, no padding:
//!
//! ```text
//! [tag length in bits: u32 BE][nonce length: u32 BE][nonce bytes]
//! ```
//!
//! The record carries no version or algorithm identifier of its own: the
//! caller knows which algorithm and codec apply from an outer envelope.
//! Records embed at an arbitrary offset inside a larger buffer, and the
//! encoded size is always `8 + nonce length`, so outer formats can lay out
//! subsequent fields deterministically.

use crate::error::KeyWrapError;
use crate::types::{MAX_NONCE_LENGTH, PARAMS_HEADER_LENGTH};

/// Decoded AEAD parameters: authentication tag length plus the nonce.
///
/// Constructed fresh on every wrap (new random nonce per call) and
/// reconstructed by parsing on every unwrap. Never mutated after
/// construction.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AeadParams {
    /// Authentication tag length in bits.
    pub tag_length_bits: u32,
    /// Raw nonce bytes.
    pub nonce: Vec<u8>,
}

impl AeadParams {
    pub fn new(tag_length_bits: u32, nonce: Vec<u8>) -> Self {
        Self {
            tag_length_bits,
            nonce,
        }
    }

    /// Size of this record on the wire: `8 + nonce length`.
    pub fn encoded_len(&self) -> usize {
        PARAMS_HEADER_LENGTH + self.nonce.len()
    }

    /// Encode to the wire format. Pure and deterministic: identical inputs
    /// produce byte-identical output.
    pub fn to_bytes(&self) -> Vec<u8> {
        let mut out = Vec::with_capacity(self.encoded_len());
        out.extend_from_slice(&self.tag_length_bits.to_be_bytes());
        out.extend_from_slice(&(self.nonce.len() as u32).to_be_bytes());
        out.extend_from_slice(&self.nonce);
        out
    }

    /// Decode a record embedded in `buf` starting at `offset`.
    ///
    /// # Errors
    ///
    /// Returns [`KeyWrapError::MalformedParameterRecord`] when fewer than 8
    /// bytes are available at `offset`, when the declared nonce length is
    /// zero or exceeds [`MAX_NONCE_LENGTH`], or when the buffer ends before
    /// the declared nonce does.
    pub fn from_bytes(buf: &[u8], offset: usize) -> Result<Self, KeyWrapError> {
        let available = buf.len().saturating_sub(offset);
        if available < PARAMS_HEADER_LENGTH {
            return Err(KeyWrapError::MalformedParameterRecord(format!(
                "need {} header bytes at offset {}, have {}",
                PARAMS_HEADER_LENGTH, offset, available
            )));
        }

        // Length validated above: 8 header bytes are present.
        let tag_length_bits = u32::from_be_bytes(
            buf[offset..offset + 4]
                .try_into()
                .expect("slice is exactly 4 bytes after length check"),
        );
        let nonce_len = u32::from_be_bytes(
            buf[offset + 4..offset + 8]
                .try_into()
                .expect("slice is exactly 4 bytes after length check"),
        ) as usize;

        if nonce_len == 0 {
            return Err(KeyWrapError::MalformedParameterRecord(
                "declared nonce length is zero".to_string(),
            ));
        }
        if nonce_len > MAX_NONCE_LENGTH {
            return Err(KeyWrapError::MalformedParameterRecord(format!(
                "declared nonce length {} exceeds maximum {}",
                nonce_len, MAX_NONCE_LENGTH
            )));
        }
        if available - PARAMS_HEADER_LENGTH < nonce_len {
            return Err(KeyWrapError::MalformedParameterRecord(format!(
                "need {} nonce bytes, have {}",
                nonce_len,
                available - PARAMS_HEADER_LENGTH
            )));
        }

        let start = offset + PARAMS_HEADER_LENGTH;
        Ok(Self {
            tag_length_bits,
            nonce: buf[start..start + nonce_len].to_vec(),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::{NONCE_LENGTH, TAG_LENGTH_BITS};

    fn random_nonce() -> Vec<u8> {
        let mut nonce = vec![0u8; NONCE_LENGTH];
        getrandom::getrandom(&mut nonce).unwrap();
        nonce
    }

    #[test]
    fn round_trip() {
        let params = AeadParams::new(TAG_LENGTH_BITS, random_nonce());
        let bytes = params.to_bytes();
        let decoded = AeadParams::from_bytes(&bytes, 0).unwrap();
        assert_eq!(decoded, params);
    }

    #[test]
    fn encoded_layout() {
        let params = AeadParams::new(128, vec![0xAA; 12]);
        let bytes = params.to_bytes();
        assert_eq!(bytes.len(), 8 + 12);
        assert_eq!(&bytes[..4], &[0x00, 0x00, 0x00, 0x80]);
        assert_eq!(&bytes[4..8], &[0x00, 0x00, 0x00, 0x0C]);
        assert_eq!(&bytes[8..], &[0xAA; 12]);
    }

    #[test]
    fn encode_is_deterministic() {
        let nonce = random_nonce();
        let a = AeadParams::new(128, nonce.clone()).to_bytes();
        let b = AeadParams::new(128, nonce).to_bytes();
        assert_eq!(a, b);
    }

    #[test]
    fn decodes_at_offset() {
        let params = AeadParams::new(TAG_LENGTH_BITS, random_nonce());
        let bytes = params.to_bytes();

        for prefix_len in [1usize, 7, 32] {
            let mut buf = vec![0x5A; prefix_len];
            buf.extend_from_slice(&bytes);
            let decoded = AeadParams::from_bytes(&buf, prefix_len).unwrap();
            assert_eq!(decoded, params);
        }
    }

    #[test]
    fn decode_ignores_trailing_bytes() {
        let params = AeadParams::new(TAG_LENGTH_BITS, random_nonce());
        let mut buf = params.to_bytes();
        buf.extend_from_slice(&[0xFF; 16]);
        let decoded = AeadParams::from_bytes(&buf, 0).unwrap();
        assert_eq!(decoded, params);
    }

    #[test]
    fn encoded_len_matches_wire() {
        let params = AeadParams::new(TAG_LENGTH_BITS, vec![1, 2, 3, 4, 5]);
        assert_eq!(params.encoded_len(), params.to_bytes().len());
    }

    #[test]
    fn rejects_short_header() {
        assert!(AeadParams::from_bytes(&[], 0).is_err());
        assert!(AeadParams::from_bytes(&[0u8; 7], 0).is_err());
        // Buffer long enough in absolute terms but not past the offset.
        assert!(AeadParams::from_bytes(&[0u8; 10], 5).is_err());
    }

    #[test]
    fn rejects_offset_past_end() {
        let bytes = AeadParams::new(128, random_nonce()).to_bytes();
        assert!(AeadParams::from_bytes(&bytes, bytes.len()).is_err());
        assert!(AeadParams::from_bytes(&bytes, bytes.len() + 100).is_err());
    }

    #[test]
    fn rejects_truncated_nonce() {
        let mut bytes = AeadParams::new(128, random_nonce()).to_bytes();
        bytes.truncate(bytes.len() - 1);
        let err = AeadParams::from_bytes(&bytes, 0).unwrap_err();
        assert!(err.to_string().contains("malformed parameter record"));
    }

    #[test]
    fn rejects_zero_nonce_length() {
        let bytes = {
            let mut b = Vec::new();
            b.extend_from_slice(&128u32.to_be_bytes());
            b.extend_from_slice(&0u32.to_be_bytes());
            b
        };
        assert!(AeadParams::from_bytes(&bytes, 0).is_err());
    }

    #[test]
    fn rejects_implausible_nonce_length() {
        // Declares a 4 GiB nonce; must fail before allocating anything.
        let mut bytes = Vec::new();
        bytes.extend_from_slice(&128u32.to_be_bytes());
        bytes.extend_from_slice(&u32::MAX.to_be_bytes());
        bytes.extend_from_slice(&[0u8; 12]);
        let err = AeadParams::from_bytes(&bytes, 0).unwrap_err();
        assert!(err.to_string().contains("exceeds maximum"));
    }

    #[test]
    fn accepts_maximum_nonce_length() {
        let params = AeadParams::new(128, vec![7u8; MAX_NONCE_LENGTH]);
        let decoded = AeadParams::from_bytes(&params.to_bytes(), 0).unwrap();
        assert_eq!(decoded.nonce.len(), MAX_NONCE_LENGTH);
    }

    #[test]
    fn preserves_nonstandard_tag_lengths() {
        // The codec itself is general; only the cipher builder restricts.
        let params = AeadParams::new(96, random_nonce());
        let decoded = AeadParams::from_bytes(&params.to_bytes(), 0).unwrap();
        assert_eq!(decoded.tag_length_bits, 96);
    }
}
