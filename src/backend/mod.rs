// src/backend/mod.rs
//! Capability interface over the cryptographic engine
//!
//! The stream cipher and authenticator never call an engine directly. They
//! go through [`CryptoBackend`], which hands out a fresh [`CtrContext`] for
//! every transform. Contexts are owned by the call that created them and are
//! released when dropped, so no engine state is shared between calls.

mod rustcrypto;

pub use rustcrypto::{RustCryptoBackend, RustCryptoCtrContext};

use crate::core::tag::HmacTag;
use crate::enums::Direction;
use crate::error::Result;

/// A single-use counter-mode engine context.
///
/// Lifecycle: created by [`CryptoBackend::create_ctr_context`], fed once or
/// more through [`update`](CtrContext::update), then consumed by
/// [`finalize`](CtrContext::finalize). Dropping the context at any point
/// releases it.
pub trait CtrContext {
    /// XOR the keystream into `output[..input.len()]`.
    ///
    /// Returns the number of bytes written, which is always `input.len()`.
    /// Fails with `STATUS_BUFFER_TOO_SMALL` when `output` is shorter than
    /// `input`; nothing is written in that case.
    fn update(&mut self, input: &[u8], output: &mut [u8]) -> Result<usize>;

    /// Close the context and return the number of trailing bytes produced.
    ///
    /// Counter mode without padding never holds back a partial block, so a
    /// conforming engine returns `Ok(0)`.
    fn finalize(self) -> Result<usize>;
}

/// Engine capabilities required by this crate.
pub trait CryptoBackend: Send + Sync {
    type Context: CtrContext;

    /// Key schedule + counter setup. `iv` has already been length-checked.
    fn create_ctr_context(
        &self,
        direction: Direction,
        key: &[u8],
        iv: &[u8; 16],
    ) -> Result<Self::Context>;

    /// One-shot HMAC-SHA256 of `data` under `key` (any key length).
    fn compute_hmac_sha256(&self, key: &[u8], data: &[u8]) -> HmacTag;
}
