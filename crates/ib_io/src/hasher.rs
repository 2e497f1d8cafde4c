//! crates/ib_io/src/hasher.rs
//!
//! SHA-256 digests, always lower-case hex.
//! - `sha256_canonical(..)` for JSON values/structs (goes through canonical_json).
//! - `sha256_hex(..)` for raw bytes.

#![forbid(unsafe_code)]

use serde::Serialize;
use sha2::{Digest, Sha256};

use crate::canonical_json::to_canonical_json_bytes;
use crate::{IoError, IoResult};

/// SHA-256 over raw bytes.
pub fn sha256_hex(bytes: &[u8]) -> String {
    hex::encode(Sha256::digest(bytes))
}

/// SHA-256 over the canonical JSON bytes of any serializable value.
pub fn sha256_canonical<T: Serialize>(value: &T) -> IoResult<String> {
    let v = serde_json::to_value(value).map_err(|e| IoError::Hash(e.to_string()))?;
    let bytes = to_canonical_json_bytes(&v)?;
    Ok(sha256_hex(&bytes))
}
