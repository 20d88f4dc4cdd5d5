//! Version token found in a documentation URL
//!
//! A token is either a literal version (`5.8`, `9.x`) or the `master` alias,
//! which stands for whatever the newest release line of a locale is.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Deserializer, Serialize, Serializer};

use crate::version::error::VersionError;

/// URL spelling of the latest alias
pub const LATEST_ALIAS: &str = "master";

#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum VersionToken {
    /// A concrete dotted version, e.g. `5.8` or `11.x`
    Literal(String),
    /// The `master` alias
    Latest,
}

impl VersionToken {
    pub fn literal(version: impl Into<String>) -> Self {
        VersionToken::Literal(version.into())
    }

    /// Returns the literal version, or `fallback` for the latest alias.
    pub fn resolve<'a>(&'a self, fallback: &'a str) -> &'a str {
        match self {
            VersionToken::Literal(version) => version,
            VersionToken::Latest => fallback,
        }
    }
}

impl fmt::Display for VersionToken {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            VersionToken::Literal(version) => f.write_str(version),
            VersionToken::Latest => f.write_str(LATEST_ALIAS),
        }
    }
}

impl FromStr for VersionToken {
    type Err = VersionError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let trimmed = s.trim();
        if trimmed.is_empty() {
            return Err(VersionError::Empty);
        }
        if trimmed == LATEST_ALIAS {
            Ok(VersionToken::Latest)
        } else {
            Ok(VersionToken::Literal(trimmed.to_string()))
        }
    }
}

impl Serialize for VersionToken {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_str(self)
    }
}

impl<'de> Deserialize<'de> for VersionToken {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let raw = String::deserialize(deserializer)?;
        raw.parse().map_err(serde::de::Error::custom)
    }
}
