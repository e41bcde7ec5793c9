// src/consts.rs
//! Shared constants: algorithm sizes and engine status codes

/// AES block size in bytes, also the size of a counter-mode IV
pub const AES_BLOCK_SIZE: usize = 16;

/// Required IV length for counter mode (one full counter block)
pub const IV_LEN: usize = AES_BLOCK_SIZE;

/// Key lengths accepted by the stream cipher (AES-128, AES-192, AES-256)
pub const AES_KEY_SIZES: [usize; 3] = [16, 24, 32];

/// Output length of HMAC-SHA256
pub const HMAC_SHA256_LEN: usize = 32;

/// Engine status: operation completed
pub const STATUS_SUCCESS: i32 = 0;

/// Status reported when the IV is not exactly one block long
pub const STATUS_INVALID_IV_LENGTH: i32 = -1;

// Numeric codes below follow the CommonCrypto status table so callers
// that already branch on those values keep working.

/// Output capacity smaller than the input
pub const STATUS_BUFFER_TOO_SMALL: i32 = -4301;

/// Keystream exhausted (counter space overflow)
pub const STATUS_OVERFLOW: i32 = -4306;

/// Engine produced an unexpected byte count
pub const STATUS_UNSPECIFIED_ERROR: i32 = -4308;

/// Key length not supported by the block cipher
pub const STATUS_KEY_SIZE_ERROR: i32 = -4310;
