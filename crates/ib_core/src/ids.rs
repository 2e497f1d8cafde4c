//! crates/ib_core/src/ids.rs
//! Identifier newtypes for ideas, votes, voters, categories, members and issues.
//! ASCII-only, strict shapes; no I/O.

use core::fmt;
use core::str::FromStr;

#[cfg(feature = "serde")]
use serde::{Deserialize, Deserializer, Serialize};

/// Errors returned when validating or parsing IDs.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum IdError {
    Empty,
    TooLong,
    BadShape,
}

impl fmt::Display for IdError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            IdError::Empty => write!(f, "empty id"),
            IdError::TooLong => write!(f, "id longer than {TOKEN_MAX_LEN} bytes"),
            IdError::BadShape => write!(f, "id must match [A-Za-z0-9_.:-]"),
        }
    }
}

impl std::error::Error for IdError {}

const TOKEN_MAX_LEN: usize = 64;

/// Synthetic bucket id for ideas without a (resolvable) category.
pub const UNCATEGORIZED_ID: &str = "uncategorized";

/// Token: ^[A-Za-z0-9_.:-]{1,64}$ (ASCII only). Covers UUIDs and numeric ids.
#[inline]
pub fn is_valid_token(s: &str) -> bool {
    let len = s.len();
    if len == 0 || len > TOKEN_MAX_LEN {
        return false;
    }
    s.bytes()
        .all(|b| b.is_ascii_alphanumeric() || matches!(b, b'_' | b'.' | b':' | b'-'))
}

fn check_token(s: &str) -> Result<(), IdError> {
    if s.is_empty() {
        return Err(IdError::Empty);
    }
    if s.len() > TOKEN_MAX_LEN {
        return Err(IdError::TooLong);
    }
    if !is_valid_token(s) {
        return Err(IdError::BadShape);
    }
    Ok(())
}

macro_rules! token_newtype {
    ($(#[$m:meta])* $name:ident) => {
        $(#[$m])*
        #[derive(Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Debug)]
        #[cfg_attr(feature = "serde", derive(Serialize))]
        #[cfg_attr(feature = "serde", serde(transparent))]
        pub struct $name(String);

        impl $name {
            #[inline]
            pub fn as_str(&self) -> &str {
                &self.0
            }
        }

        impl fmt::Display for $name {
            #[inline]
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                f.write_str(&self.0)
            }
        }

        impl FromStr for $name {
            type Err = IdError;
            fn from_str(s: &str) -> Result<Self, Self::Err> {
                check_token(s)?;
                Ok($name(s.to_owned()))
            }
        }

        impl TryFrom<&str> for $name {
            type Error = IdError;
            #[inline]
            fn try_from(value: &str) -> Result<Self, Self::Error> {
                value.parse()
            }
        }

        // Shape is enforced on the way in, so a loaded snapshot never holds a malformed id.
        #[cfg(feature = "serde")]
        impl<'de> Deserialize<'de> for $name {
            fn deserialize<D: Deserializer<'de>>(d: D) -> Result<Self, D::Error> {
                let s = String::deserialize(d)?;
                s.parse().map_err(|e: IdError| {
                    serde::de::Error::custom(format!("{}: {e}: {s:?}", stringify!($name)))
                })
            }
        }
    };
}

token_newtype!(
    /// Idea (card) identifier.
    IdeaId
);
token_newtype!(
    /// Vote record identifier.
    VoteId
);
token_newtype!(
    /// Identifier of the user who cast a vote.
    VoterId
);
token_newtype!(
    /// Category identifier; `"uncategorized"` is reserved for the synthetic bucket.
    CategoryId
);
token_newtype!(
    /// Issue member identifier.
    MemberId
);
token_newtype!(
    /// Issue identifier.
    IssueId
);

impl CategoryId {
    /// The synthetic bucket id used for ideas without a category.
    pub fn uncategorized() -> Self {
        CategoryId(UNCATEGORIZED_ID.to_owned())
    }

    #[inline]
    pub fn is_uncategorized(&self) -> bool {
        self.0 == UNCATEGORIZED_ID
    }
}
