// src/backend/rustcrypto.rs
//! Default backend on the RustCrypto stack (`aes` + `ctr`, `hmac` + `sha2`)

use aes::cipher::{KeyIvInit, StreamCipher};
use aes::{Aes128, Aes192, Aes256};
use ctr::Ctr128BE;
use hmac::{Hmac, Mac};
use sha2::Sha256;

use super::{CryptoBackend, CtrContext};
use crate::consts::{HMAC_SHA256_LEN, STATUS_BUFFER_TOO_SMALL, STATUS_OVERFLOW};
use crate::core::tag::HmacTag;
use crate::enums::{AesKeySize, Direction};
use crate::error::{CryptoError, Result};

type Aes128Ctr = Ctr128BE<Aes128>;
type Aes192Ctr = Ctr128BE<Aes192>;
type Aes256Ctr = Ctr128BE<Aes256>;
type HmacSha256 = Hmac<Sha256>;

/// Stateless handle; every call builds its own cipher instance.
#[derive(Debug, Clone, Copy, Default)]
pub struct RustCryptoBackend;

/// Per-call AES-CTR state. The `aes` key schedule is zeroized on drop.
pub enum RustCryptoCtrContext {
    Aes128(Aes128Ctr),
    Aes192(Aes192Ctr),
    Aes256(Aes256Ctr),
}

impl RustCryptoCtrContext {
    fn new(key: &[u8], iv: &[u8; 16]) -> Result<Self> {
        let invalid = || CryptoError::InvalidKeyLength { actual: key.len() };
        let size = AesKeySize::from_key_len(key.len()).ok_or_else(invalid)?;

        let ctx = match size {
            AesKeySize::Aes128 => {
                Self::Aes128(Aes128Ctr::new_from_slices(key, iv).map_err(|_| invalid())?)
            }
            AesKeySize::Aes192 => {
                Self::Aes192(Aes192Ctr::new_from_slices(key, iv).map_err(|_| invalid())?)
            }
            AesKeySize::Aes256 => {
                Self::Aes256(Aes256Ctr::new_from_slices(key, iv).map_err(|_| invalid())?)
            }
        };
        Ok(ctx)
    }
}

impl CtrContext for RustCryptoCtrContext {
    fn update(&mut self, input: &[u8], output: &mut [u8]) -> Result<usize> {
        let n = input.len();
        if output.len() < n {
            return Err(CryptoError::CipherEngineFailure {
                status: STATUS_BUFFER_TOO_SMALL,
            });
        }

        let out = &mut output[..n];
        out.copy_from_slice(input);
        let applied = match self {
            Self::Aes128(c) => c.try_apply_keystream(out),
            Self::Aes192(c) => c.try_apply_keystream(out),
            Self::Aes256(c) => c.try_apply_keystream(out),
        };
        if applied.is_err() {
            // Keystream refused: do not leave plaintext-equal bytes behind
            out.fill(0);
            return Err(CryptoError::CipherEngineFailure {
                status: STATUS_OVERFLOW,
            });
        }
        Ok(n)
    }

    fn finalize(self) -> Result<usize> {
        Ok(0)
    }
}

impl CryptoBackend for RustCryptoBackend {
    type Context = RustCryptoCtrContext;

    fn create_ctr_context(
        &self,
        _direction: Direction,
        key: &[u8],
        iv: &[u8; 16],
    ) -> Result<Self::Context> {
        RustCryptoCtrContext::new(key, iv)
    }

    fn compute_hmac_sha256(&self, key: &[u8], data: &[u8]) -> HmacTag {
        // HMAC pads or pre-hashes the key itself; no length is rejected
        let mut mac = <HmacSha256 as Mac>::new_from_slice(key)
            .expect("HMAC-SHA256 accepts keys of any length");
        mac.update(data);

        let mut tag = [0u8; HMAC_SHA256_LEN];
        tag.copy_from_slice(&mac.finalize().into_bytes());
        HmacTag::from_bytes(tag)
    }
}
