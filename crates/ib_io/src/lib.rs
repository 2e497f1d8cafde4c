//! crates/ib_io/src/lib.rs
//! Local-file I/O for the vote engine.
//!
//! - Shared error type (`IoError`) with `From` conversions used across modules.
//! - Loading is strictly offline: callers pass filesystem paths, never URLs.
//! - Details live in submodules; this file only wires them up.

#![forbid(unsafe_code)]

use thiserror::Error;

use ib_core::errors::CoreError;

/// Unified error for ib_io (used by loader/canonical_json/hasher).
#[derive(Debug, Error)]
pub enum IoError {
    /// Filesystem / path errors (open, read, rename, fsync, etc.)
    #[error("io/path error: {0}")]
    Path(String),

    /// JSON parse or shape errors with a JSON Pointer to the offending node.
    #[error("json error at {pointer}: {msg}")]
    Json { pointer: String, msg: String },

    /// Input exceeded a size cap.
    #[error("limit exceeded: {0}")]
    Limit(String),

    /// Cross-reference / domain violations in otherwise well-formed input.
    #[error("invalid: {0}")]
    Invalid(String),

    #[error("hash error: {0}")]
    Hash(String),
}

pub type IoResult<T> = Result<T, IoError>;

impl From<std::io::Error> for IoError {
    fn from(e: std::io::Error) -> Self {
        IoError::Path(e.to_string())
    }
}

impl From<serde_json::Error> for IoError {
    fn from(e: serde_json::Error) -> Self {
        // serde_json keeps line/column but no pointer; default to root.
        IoError::Json {
            pointer: "/".to_string(),
            msg: e.to_string(),
        }
    }
}

impl From<CoreError> for IoError {
    fn from(e: CoreError) -> Self {
        IoError::Invalid(e.to_string())
    }
}

/// Returns true if `s` looks like a URL (any `<scheme>://`, including `file://`).
#[inline]
pub fn looks_like_url_strict(s: &str) -> bool {
    s.trim().contains("://")
}

pub mod canonical_json;
pub mod hasher;
pub mod loader;

pub use canonical_json::{to_canonical_json_bytes, write_atomic};
pub use hasher::{sha256_canonical, sha256_hex};
pub use loader::{check_snapshot, load_params, load_snapshot, MAX_INPUT_BYTES};
