// src/error.rs
//! Public error type for the entire crate

use thiserror::Error;

use crate::consts::{STATUS_INVALID_IV_LENGTH, STATUS_KEY_SIZE_ERROR};

pub type Result<T> = std::result::Result<T, CryptoError>;

/// Failures surfaced by the stream cipher.
///
/// Message authentication has no modeled failure path, so every variant
/// here originates from [`crate::StreamCipher`]. Display strings carry
/// lengths and status codes only, never key or payload bytes.
#[derive(Error, Debug, Clone, Copy, PartialEq, Eq)]
pub enum CryptoError {
    /// IV is not exactly one AES block. Detected before any engine setup.
    #[error("invalid IV length: expected 16 bytes, got {actual}")]
    InvalidIvLength { actual: usize },

    /// Key size is not 16, 24 or 32 bytes.
    #[error("invalid key length: expected 16, 24 or 32 bytes, got {actual}")]
    InvalidKeyLength { actual: usize },

    /// The block-cipher engine reported a non-success status during
    /// setup, update or finalize.
    #[error("cipher engine failure (status {status})")]
    CipherEngineFailure { status: i32 },
}

impl CryptoError {
    /// Nonzero status code for callers that speak integer statuses.
    ///
    /// A bad IV always maps to `-1`, which no engine status uses, so it stays
    /// distinguishable from [`CryptoError::CipherEngineFailure`].
    pub fn status_code(&self) -> i32 {
        match self {
            CryptoError::InvalidIvLength { .. } => STATUS_INVALID_IV_LENGTH,
            CryptoError::InvalidKeyLength { .. } => STATUS_KEY_SIZE_ERROR,
            CryptoError::CipherEngineFailure { status } => *status,
        }
    }

    /// True when the caller can recover by supplying correctly sized inputs.
    pub fn is_caller_error(&self) -> bool {
        matches!(
            self,
            CryptoError::InvalidIvLength { .. } | CryptoError::InvalidKeyLength { .. }
        )
    }
}
