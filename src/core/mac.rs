// src/core/mac.rs
//! HMAC-SHA256 message authentication: single call, no streaming

#[cfg(feature = "logging")]
use tracing::debug;

use crate::backend::{CryptoBackend, RustCryptoBackend};
use crate::core::tag::HmacTag;

/// Computes and checks HMAC-SHA256 tags.
///
/// Any key length is accepted (HMAC zero-pads short keys and pre-hashes
/// keys longer than the SHA-256 block). There is no failure path.
#[derive(Debug, Clone, Default)]
pub struct MessageAuthenticator<B = RustCryptoBackend> {
    backend: B,
}

impl MessageAuthenticator<RustCryptoBackend> {
    pub fn new() -> Self {
        Self::with_backend(RustCryptoBackend)
    }
}

impl<B: CryptoBackend> MessageAuthenticator<B> {
    pub fn with_backend(backend: B) -> Self {
        Self { backend }
    }

    pub fn compute(&self, key: &[u8], data: &[u8]) -> HmacTag {
        #[cfg(feature = "logging")]
        debug!(key_len = key.len(), bytes = data.len(), "hmac-sha256");

        self.backend.compute_hmac_sha256(key, data)
    }

    /// Recompute the tag for `data` and compare it to `expected` in constant time.
    ///
    /// An `expected` slice that is not exactly 32 bytes never verifies.
    pub fn verify(&self, key: &[u8], data: &[u8], expected: &[u8]) -> bool {
        self.compute(key, data).ct_eq(expected)
    }
}

/// [`MessageAuthenticator::compute`] with the default backend
pub fn hmac_sha256(key: &[u8], data: &[u8]) -> HmacTag {
    MessageAuthenticator::new().compute(key, data)
}

pub fn verify_hmac_sha256(key: &[u8], data: &[u8], expected: &[u8]) -> bool {
    MessageAuthenticator::new().verify(key, data, expected)
}
