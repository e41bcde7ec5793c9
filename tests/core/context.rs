// tests/core/context.rs
//! Engine context lifecycle: one context per call, released on every path

use note_cipher_core::consts::{STATUS_BUFFER_TOO_SMALL, STATUS_UNSPECIFIED_ERROR};
use note_cipher_core::{CryptoError, Direction, MessageAuthenticator, StreamCipher};

use crate::support::{CountingBackend, Fault, STATUS_MEMORY_FAILURE};

const KEY: [u8; 32] = [0x6b; 32];
const IV: [u8; 16] = [0x01; 16];

#[test]
fn successful_calls_create_and_release_one_context_each() {
    crate::common::setup();
    let backend = CountingBackend::new(Fault::None);
    let cipher = StreamCipher::with_backend(backend.clone());

    for _ in 0..3 {
        let ct = cipher.encrypt(&KEY, &IV, b"hello").unwrap();
        cipher.decrypt(&KEY, &IV, &ct).unwrap();
    }

    assert_eq!(backend.created(), 6);
    assert_eq!(backend.live(), 0);
}

#[test]
fn iv_rejection_never_creates_a_context() {
    let backend = CountingBackend::new(Fault::None);
    let cipher = StreamCipher::with_backend(backend.clone());

    let err = cipher.encrypt(&KEY, &IV[..15], b"hello").unwrap_err();

    assert!(matches!(err, CryptoError::InvalidIvLength { actual: 15 }));
    assert_eq!(backend.created(), 0);
}

#[test]
fn key_rejection_leaves_nothing_live() {
    let backend = CountingBackend::new(Fault::None);
    let cipher = StreamCipher::with_backend(backend.clone());

    let err = cipher.encrypt(&KEY[..20], &IV, b"hello").unwrap_err();

    assert_eq!(err, CryptoError::InvalidKeyLength { actual: 20 });
    assert_eq!(backend.live(), 0);
}

#[test]
fn update_failure_releases_context_and_discards_output() {
    let backend = CountingBackend::new(Fault::UpdateAfterWrite);
    let cipher = StreamCipher::with_backend(backend.clone());

    let err = cipher.encrypt(&KEY, &IV, b"partial").unwrap_err();
    assert_eq!(
        err,
        CryptoError::CipherEngineFailure {
            status: STATUS_MEMORY_FAILURE
        }
    );
    assert_eq!(err.status_code(), STATUS_MEMORY_FAILURE);

    let mut out = [0xFFu8; 10];
    cipher
        .transform_into(Direction::Encrypt, &KEY, &IV, b"partial", &mut out)
        .unwrap_err();
    assert_eq!(&out[..7], &[0u8; 7], "written prefix is zeroed");
    assert_eq!(&out[7..], &[0xFFu8; 3]);

    assert_eq!(backend.created(), 2);
    assert_eq!(backend.live(), 0);
}

#[test]
fn short_output_buffer_releases_context() {
    let backend = CountingBackend::new(Fault::None);
    let cipher = StreamCipher::with_backend(backend.clone());
    let mut out = [0u8; 4];

    let err = cipher
        .transform_into(Direction::Decrypt, &KEY, &IV, b"too long", &mut out)
        .unwrap_err();

    assert_eq!(err.status_code(), STATUS_BUFFER_TOO_SMALL);
    assert_eq!(backend.created(), 1);
    assert_eq!(backend.live(), 0);
}

#[test]
fn finalize_emitting_bytes_is_an_engine_failure() {
    let backend = CountingBackend::new(Fault::TrailingBytes);
    let cipher = StreamCipher::with_backend(backend.clone());

    let err = cipher.encrypt(&KEY, &IV, b"abc").unwrap_err();

    assert_eq!(
        err,
        CryptoError::CipherEngineFailure {
            status: STATUS_UNSPECIFIED_ERROR
        }
    );
    assert_eq!(backend.live(), 0);
}

#[test]
fn authenticator_uses_the_backend_without_contexts() {
    let backend = CountingBackend::new(Fault::None);
    let mac = MessageAuthenticator::with_backend(backend.clone());

    let tag = mac.compute(b"k", b"d");

    assert!(mac.verify(b"k", b"d", tag.as_bytes()));
    assert_eq!(backend.created(), 0);
}
