// src/lib.rs
//! note-cipher-core: symmetric primitives for note encryption
//!
//! Features:
//! - AES-CTR (128/192/256) encrypt/decrypt over arbitrary-length buffers
//! - HMAC-SHA256 tags with constant-time verification
//! - Pluggable engine via [`backend::CryptoBackend`], RustCrypto by default
//!
//! Key derivation, IV generation and the ciphertext/tag envelope belong to
//! the calling layer.

pub mod aliases;
pub mod backend;
pub mod consts;
pub mod core;
pub mod enums;
pub mod error;

// Re-export everything users need at the crate root
pub use aliases::{Aes128Key, Aes192Key, Aes256Key, MacKey};
pub use backend::{CryptoBackend, CtrContext, RustCryptoBackend};
pub use crate::core::{
    aes_ctr_decrypt, aes_ctr_encrypt, aes_ctr_transform, hmac_sha256, verify_hmac_sha256,
    HmacTag, MessageAuthenticator, StreamCipher,
};
pub use enums::{AesKeySize, Direction};
pub use error::{CryptoError, Result};
