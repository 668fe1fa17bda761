//! Encryption context and its canonical AAD serialization.
//!
//! The context is caller-supplied key-value metadata bound into the AEAD
//! authentication tag as additional authenticated data. Binding makes the
//! context tamper-evident: forwarding the wrapped key with an altered
//! context fails tag verification at unwrap.
//!
//! AAD wire format (empty context serializes to zero bytes):
//!
//! ```text
//! [entry count: u16 BE]
//! per entry, in ascending key order:
//!   [key length: u16 BE][key UTF-8][value length: u16 BE][value UTF-8]
//! ```
//!
//! Serialization must be canonical — the same mapping always produces the
//! same bytes regardless of insertion order, or wrap and unwrap would bind
//! different AAD for the same context.

use std::collections::btree_map;
use std::collections::BTreeMap;

use crate::error::KeyWrapError;

/// Key-value metadata bound to a wrapped key via AAD.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct EncryptionContext {
    entries: BTreeMap<String, String>,
}

impl EncryptionContext {
    pub fn new() -> Self {
        Self::default()
    }

    /// Insert an entry, returning the previous value for the key if any.
    pub fn insert(
        &mut self,
        key: impl Into<String>,
        value: impl Into<String>,
    ) -> Option<String> {
        self.entries.insert(key.into(), value.into())
    }

    pub fn get(&self, key: &str) -> Option<&str> {
        self.entries.get(key).map(String::as_str)
    }

    pub fn remove(&mut self, key: &str) -> Option<String> {
        self.entries.remove(key)
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Entries in ascending key order.
    pub fn iter(&self) -> btree_map::Iter<'_, String, String> {
        self.entries.iter()
    }

    /// Serialize to canonical AAD bytes.
    ///
    /// # Errors
    ///
    /// Returns [`KeyWrapError::OversizedContext`] when the entry count or
    /// any key/value byte length does not fit a u16 prefix.
    pub fn to_aad_bytes(&self) -> Result<Vec<u8>, KeyWrapError> {
        if self.entries.is_empty() {
            return Ok(Vec::new());
        }

        let count: u16 = self
            .entries
            .len()
            .try_into()
            .map_err(|_| KeyWrapError::OversizedContext)?;

        let mut out = Vec::new();
        out.extend_from_slice(&count.to_be_bytes());
        for (key, value) in &self.entries {
            write_field(&mut out, key.as_bytes())?;
            write_field(&mut out, value.as_bytes())?;
        }
        Ok(out)
    }
}

fn write_field(out: &mut Vec<u8>, bytes: &[u8]) -> Result<(), KeyWrapError> {
    let len: u16 = bytes
        .len()
        .try_into()
        .map_err(|_| KeyWrapError::OversizedContext)?;
    out.extend_from_slice(&len.to_be_bytes());
    out.extend_from_slice(bytes);
    Ok(())
}

impl FromIterator<(String, String)> for EncryptionContext {
    fn from_iter<I: IntoIterator<Item = (String, String)>>(iter: I) -> Self {
        Self {
            entries: iter.into_iter().collect(),
        }
    }
}

impl<'a> FromIterator<(&'a str, &'a str)> for EncryptionContext {
    fn from_iter<I: IntoIterator<Item = (&'a str, &'a str)>>(iter: I) -> Self {
        Self {
            entries: iter
                .into_iter()
                .map(|(k, v)| (k.to_string(), v.to_string()))
                .collect(),
        }
    }
}

impl From<BTreeMap<String, String>> for EncryptionContext {
    fn from(entries: BTreeMap<String, String>) -> Self {
        Self { entries }
    }
}
