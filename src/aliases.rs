// src/aliases.rs
//! Re-exports secure-gate's secret wrappers for key material
//!
//! Keys held in these types are zeroized on drop. The cipher and MAC take
//! plain `&[u8]`; pass `key.expose_secret()` at the call site so the raw
//! bytes never outlive the wrapper.

pub use secure_gate::{dynamic_alias, fixed_alias};

// Fixed-size cipher keys
fixed_alias!(Aes128Key, 16);
fixed_alias!(Aes192Key, 24);
fixed_alias!(Aes256Key, 32);

// HMAC keys may be any length
dynamic_alias!(MacKey, Vec<u8>);
