//! # Declaration Reference Codes
//!
//! Human-readable reference codes handed to declarants on submission, of
//! the form `BGTS-<year>-<4-digit suffix>` (e.g. `BGTS-2026-4821`).
//! Suffixes are allocated by the record store; this module owns the
//! format and its validation.

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Prefix shared by every declaration reference.
pub const REFERENCE_PREFIX: &str = "BGTS";

/// Lowest and highest valid reference suffixes (always four digits).
pub const SUFFIX_RANGE: std::ops::RangeInclusive<u16> = 1000..=9999;

/// Malformed reference code.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("malformed reference: {0}")]
pub struct ReferenceError(pub String);

/// A validated declaration reference code.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize)]
pub struct Reference(String);

impl Reference {
    /// Compose a reference from a calendar year and a four-digit suffix.
    ///
    /// Suffixes outside [`SUFFIX_RANGE`] are rejected so composed
    /// references always round-trip through [`Reference::parse`].
    pub fn compose(year: i32, suffix: u16) -> Result<Self, ReferenceError> {
        if !SUFFIX_RANGE.contains(&suffix) {
            return Err(ReferenceError(format!(
                "suffix {suffix} outside {}..={}",
                SUFFIX_RANGE.start(),
                SUFFIX_RANGE.end()
            )));
        }
        Ok(Self(format!("{REFERENCE_PREFIX}-{year}-{suffix:04}")))
    }

    /// Parse and validate a reference string.
    pub fn parse(raw: &str) -> Result<Self, ReferenceError> {
        let mut parts = raw.splitn(3, '-');
        let prefix = parts.next().unwrap_or_default();
        let year = parts.next().unwrap_or_default();
        let suffix = parts.next().unwrap_or_default();

        if prefix != REFERENCE_PREFIX {
            return Err(ReferenceError(format!("bad prefix in {raw:?}")));
        }
        if year.len() != 4 || year.chars().any(|c| !c.is_ascii_digit()) {
            return Err(ReferenceError(format!("bad year in {raw:?}")));
        }
        let parsed_suffix: u16 = suffix
            .parse()
            .map_err(|_| ReferenceError(format!("bad suffix in {raw:?}")))?;
        if suffix.len() != 4 || !SUFFIX_RANGE.contains(&parsed_suffix) {
            return Err(ReferenceError(format!("bad suffix in {raw:?}")));
        }
        Ok(Self(raw.to_string()))
    }

    /// The reference as a string slice.
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// The calendar year segment of the reference.
    pub fn year(&self) -> i32 {
        // Valid by construction; both constructors enforce the format.
        self.0
            .split('-')
            .nth(1)
            .and_then(|y| y.parse().ok())
            .unwrap_or(0)
    }
}

impl std::fmt::Display for Reference {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.0)
    }
}

// Deserializes as a plain string, then routes through `parse()` so that
// invalid values are rejected at deserialization time, not accepted
// silently into the store.
impl<'de> Deserialize<'de> for Reference {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: serde::Deserializer<'de>,
    {
        let raw = String::deserialize(deserializer)?;
        Self::parse(&raw).map_err(serde::de::Error::custom)
    }
}
