// src/core/mod.rs
//! Pure cryptographic operations: no I/O, no shared state
//!
//! All functions work exclusively on in-memory buffers.

pub mod mac;
pub mod stream;
pub mod tag;

pub use mac::{hmac_sha256, verify_hmac_sha256, MessageAuthenticator};
pub use stream::{aes_ctr_decrypt, aes_ctr_encrypt, aes_ctr_transform, StreamCipher};
pub use tag::HmacTag;
