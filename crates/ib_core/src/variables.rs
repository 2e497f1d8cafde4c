//! variables.rs: Filter mode token and engine `Params` with safe defaults.
//!
//! Defaults reproduce the live highlight behaviour: top 3, contested when the
//! vote split is within 20% (`|agree - disagree| / total <= 0.2`).

use core::fmt;
use core::str::FromStr;

#[cfg(feature = "serde")]
use serde::{de::Unexpected, Deserialize, Deserializer, Serialize};

use crate::errors::CoreError;

/// Integer percentage 0..=100.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
#[cfg_attr(feature = "serde", derive(Serialize))]
pub struct Pct(u8);

impl Pct {
    pub fn new(v: u8) -> Result<Self, CoreError> {
        if v <= 100 {
            Ok(Self(v))
        } else {
            Err(CoreError::DomainOutOfRange("pct"))
        }
    }

    pub fn as_u8(self) -> u8 {
        self.0
    }
}

#[cfg(feature = "serde")]
impl<'de> Deserialize<'de> for Pct {
    fn deserialize<D: Deserializer<'de>>(d: D) -> Result<Self, D::Error> {
        let v = u8::deserialize(d)?;
        if v <= 100 {
            Ok(Pct(v))
        } else {
            Err(serde::de::Error::invalid_value(
                Unexpected::Unsigned(v as u64),
                &"0..=100",
            ))
        }
    }
}

/// Highlight filter requested by the board or the server query.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum FilterMode {
    #[cfg_attr(feature = "serde", serde(rename = "most-liked"))]
    MostLiked,
    #[cfg_attr(feature = "serde", serde(rename = "need-discussion"))]
    NeedDiscussion,
    #[cfg_attr(feature = "serde", serde(rename = "none"))]
    None,
}

impl FilterMode {
    pub const ALL: [FilterMode; 3] = [
        FilterMode::MostLiked,
        FilterMode::NeedDiscussion,
        FilterMode::None,
    ];

    pub fn as_token(self) -> &'static str {
        match self {
            FilterMode::MostLiked => "most-liked",
            FilterMode::NeedDiscussion => "need-discussion",
            FilterMode::None => "none",
        }
    }
}

impl fmt::Display for FilterMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_token())
    }
}

impl FromStr for FilterMode {
    type Err = CoreError;
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        FilterMode::ALL
            .into_iter()
            .find(|m| m.as_token() == s)
            .ok_or_else(|| CoreError::UnknownFilterMode(s.to_owned()))
    }
}

pub const DEFAULT_HIGHLIGHT_LIMIT: u8 = 3;
pub const DEFAULT_CONTESTED_MAX_PCT: u8 = 20;
pub const DEFAULT_UNCATEGORIZED_TITLE: &str = "미분류";

/// Engine parameters. Every field is optional on the wire.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "serde", serde(default, deny_unknown_fields))]
pub struct Params {
    /// Guaranteed top-N before co-rank extension.
    pub highlight_limit: u8,
    /// Upper bound of `diff / total` (as a percentage) for an idea to count as contested.
    pub contested_max_pct: Pct,
    /// Title of the synthetic bucket for ideas without a category.
    pub uncategorized_title: String,
}

impl Default for Params {
    fn default() -> Self {
        Self {
            highlight_limit: DEFAULT_HIGHLIGHT_LIMIT,
            contested_max_pct: Pct(DEFAULT_CONTESTED_MAX_PCT),
            uncategorized_title: DEFAULT_UNCATEGORIZED_TITLE.to_owned(),
        }
    }
}

/// Domain checks not expressible in the field types.
pub fn validate_domains(p: &Params) -> Result<(), CoreError> {
    if !(1..=100).contains(&p.highlight_limit) {
        return Err(CoreError::DomainOutOfRange("highlight_limit"));
    }
    if p.uncategorized_title.trim().is_empty() {
        return Err(CoreError::DomainOutOfRange("uncategorized_title"));
    }
    Ok(())
}
