//! ib_core: Core types, domains, ordering helpers, and integer ratio math.
//!
//! This crate is **I/O-free**. It defines stable types/APIs used across the
//! engine (`ib_algo`, `ib_report`, `ib_io`, `ib_cli`).
//!
//! - Identifiers: `IdeaId`, `VoteId`, `VoterId`, `CategoryId`, `MemberId`, `IssueId`
//! - Entities: `Idea`, `Vote`, `Category`, `Member`, `IssueSnapshot`
//! - Domains: `FilterMode`, `Params` (highlight limit, contested threshold)
//! - Deterministic (stable) ordering helpers
//! - Integer-first ratio helpers (no floats on decision paths)
//!
//! Serialization derives are gated behind the `serde` feature.

#![forbid(unsafe_code)]

pub mod errors {
    use core::fmt;

    /// Minimal error set for core-domain validation & parsing.
    #[derive(Clone, Debug, Eq, PartialEq)]
    pub enum CoreError {
        InvalidRatio,
        UnknownFilterMode(String),
        DomainOutOfRange(&'static str),
    }

    impl fmt::Display for CoreError {
        fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
            match self {
                CoreError::InvalidRatio => write!(f, "invalid ratio"),
                CoreError::UnknownFilterMode(m) => write!(f, "unknown filter mode: {m}"),
                CoreError::DomainOutOfRange(k) => write!(f, "domain out of range: {k}"),
            }
        }
    }

    impl std::error::Error for CoreError {}
}

pub mod determinism;
pub mod entities;
pub mod ids;
pub mod rounding;
pub mod variables;

pub use entities::{Category, Idea, IssueMeta, IssueSnapshot, Member, Vote, VoteType};
pub use errors::CoreError;
pub use ids::{CategoryId, IdError, IdeaId, IssueId, MemberId, VoteId, VoterId};
pub use variables::{FilterMode, Params, Pct};
