// src/core/tag.rs
//! Fixed 32-byte HMAC-SHA256 tag

use std::fmt;

use subtle::ConstantTimeEq;

use crate::consts::HMAC_SHA256_LEN;

/// Output of the message authenticator.
///
/// Equality via `==` is constant-time, so tags can be compared directly
/// without leaking the position of the first differing byte.
#[derive(Clone, Copy, Eq)]
pub struct HmacTag([u8; HMAC_SHA256_LEN]);

impl HmacTag {
    pub fn from_bytes(bytes: [u8; HMAC_SHA256_LEN]) -> Self {
        Self(bytes)
    }

    pub fn as_bytes(&self) -> &[u8; HMAC_SHA256_LEN] {
        &self.0
    }

    pub fn into_bytes(self) -> [u8; HMAC_SHA256_LEN] {
        self.0
    }

    /// Lowercase hex encoding
    pub fn to_hex(&self) -> String {
        hex::encode(self.0)
    }

    /// Parse from a 64-character hex string
    pub fn from_hex(s: &str) -> Result<Self, hex::FromHexError> {
        let mut bytes = [0u8; HMAC_SHA256_LEN];
        hex::decode_to_slice(s, &mut bytes)?;
        Ok(Self(bytes))
    }

    /// Constant-time comparison against an arbitrary byte slice.
    ///
    /// Slices of the wrong length compare unequal.
    pub fn ct_eq(&self, other: &[u8]) -> bool {
        other.len() == HMAC_SHA256_LEN && bool::from(self.0.as_slice().ct_eq(other))
    }
}

impl PartialEq for HmacTag {
    fn eq(&self, other: &Self) -> bool {
        self.ct_eq(&other.0)
    }
}

impl AsRef<[u8]> for HmacTag {
    fn as_ref(&self) -> &[u8] {
        &self.0
    }
}

impl From<HmacTag> for [u8; HMAC_SHA256_LEN] {
    fn from(tag: HmacTag) -> Self {
        tag.0
    }
}

impl fmt::Display for HmacTag {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.to_hex())
    }
}

impl fmt::Debug for HmacTag {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "HmacTag({}...)", &self.to_hex()[..8])
    }
}
