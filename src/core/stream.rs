// src/core/stream.rs
//! AES counter-mode transform: no I/O, no state between calls
//!
//! Each call runs the full engine sequence on its own context:
//! validate IV → create context → one bulk update → finalize → drop.
//! The context is owned by the call, so it is released on every path out,
//! including the `?` returns below.

#[cfg(feature = "logging")]
use tracing::{debug, warn};

use crate::backend::{CryptoBackend, CtrContext, RustCryptoBackend};
use crate::consts::{IV_LEN, STATUS_UNSPECIFIED_ERROR};
use crate::enums::Direction;
use crate::error::{CryptoError, Result};

/// AES-CTR over arbitrary-length buffers.
///
/// Encryption and decryption apply the same keystream XOR; `Direction` is
/// passed through to the backend and to logs only.
#[derive(Debug, Clone, Default)]
pub struct StreamCipher<B = RustCryptoBackend> {
    backend: B,
}

impl StreamCipher<RustCryptoBackend> {
    pub fn new() -> Self {
        Self::with_backend(RustCryptoBackend)
    }
}

impl<B: CryptoBackend> StreamCipher<B> {
    pub fn with_backend(backend: B) -> Self {
        Self { backend }
    }

    pub fn backend(&self) -> &B {
        &self.backend
    }

    /// Transform `input` into a freshly allocated buffer of the same length.
    ///
    /// # Errors
    ///
    /// - [`CryptoError::InvalidIvLength`] if `iv` is not 16 bytes (checked first)
    /// - [`CryptoError::InvalidKeyLength`] if `key` is not 16, 24 or 32 bytes
    /// - [`CryptoError::CipherEngineFailure`] if the engine fails
    ///
    /// No partial output is returned on failure.
    pub fn transform(
        &self,
        direction: Direction,
        key: &[u8],
        iv: &[u8],
        input: &[u8],
    ) -> Result<Vec<u8>> {
        let iv = check_iv(iv)?;
        let mut output = vec![0u8; input.len()];
        match self.run(direction, key, iv, input, &mut output) {
            Ok(_) => Ok(output),
            Err(e) => {
                output.fill(0);
                Err(e)
            }
        }
    }

    /// Transform `input` into a caller-supplied buffer.
    ///
    /// `output` must hold at least `input.len()` bytes; a shorter buffer is
    /// reported by the engine as `STATUS_BUFFER_TOO_SMALL`. Exactly
    /// `input.len()` bytes are written and that count is returned; anything
    /// past it is left untouched. On failure the written prefix is zeroed and
    /// must be discarded.
    pub fn transform_into(
        &self,
        direction: Direction,
        key: &[u8],
        iv: &[u8],
        input: &[u8],
        output: &mut [u8],
    ) -> Result<usize> {
        let iv = check_iv(iv)?;
        self.run(direction, key, iv, input, output).inspect_err(|_| {
            let n = input.len().min(output.len());
            output[..n].fill(0);
        })
    }

    pub fn encrypt(&self, key: &[u8], iv: &[u8], plaintext: &[u8]) -> Result<Vec<u8>> {
        self.transform(Direction::Encrypt, key, iv, plaintext)
    }

    pub fn decrypt(&self, key: &[u8], iv: &[u8], ciphertext: &[u8]) -> Result<Vec<u8>> {
        self.transform(Direction::Decrypt, key, iv, ciphertext)
    }

    fn run(
        &self,
        direction: Direction,
        key: &[u8],
        iv: &[u8; IV_LEN],
        input: &[u8],
        output: &mut [u8],
    ) -> Result<usize> {
        let result = self.run_engine(direction, key, iv, input, output);

        #[cfg(feature = "logging")]
        match &result {
            Ok(n) => debug!(
                %direction,
                key_bits = key.len() * 8,
                bytes = n,
                "aes-ctr transform"
            ),
            Err(e) => warn!(
                %direction,
                status = e.status_code(),
                "aes-ctr transform failed: {e}"
            ),
        }

        result
    }

    fn run_engine(
        &self,
        direction: Direction,
        key: &[u8],
        iv: &[u8; IV_LEN],
        input: &[u8],
        output: &mut [u8],
    ) -> Result<usize> {
        let mut ctx = self.backend.create_ctr_context(direction, key, iv)?;
        let written = ctx.update(input, output)?;
        let trailing = ctx.finalize()?;

        // CTR is length-preserving: the update covers everything, finalize adds nothing
        if written != input.len() || trailing != 0 {
            return Err(CryptoError::CipherEngineFailure {
                status: STATUS_UNSPECIFIED_ERROR,
            });
        }
        Ok(written)
    }
}

fn check_iv(iv: &[u8]) -> Result<&[u8; IV_LEN]> {
    iv.try_into().map_err(|_| {
        #[cfg(feature = "logging")]
        warn!(iv_len = iv.len(), "rejected IV before engine setup");

        CryptoError::InvalidIvLength { actual: iv.len() }
    })
}

/// [`StreamCipher::transform`] with the default backend
pub fn aes_ctr_transform(
    direction: Direction,
    key: &[u8],
    iv: &[u8],
    input: &[u8],
) -> Result<Vec<u8>> {
    StreamCipher::new().transform(direction, key, iv, input)
}

pub fn aes_ctr_encrypt(key: &[u8], iv: &[u8], plaintext: &[u8]) -> Result<Vec<u8>> {
    aes_ctr_transform(Direction::Encrypt, key, iv, plaintext)
}

pub fn aes_ctr_decrypt(key: &[u8], iv: &[u8], ciphertext: &[u8]) -> Result<Vec<u8>> {
    aes_ctr_transform(Direction::Decrypt, key, iv, ciphertext)
}
