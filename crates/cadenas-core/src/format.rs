//! Serialized hash record — `$<version>$<cost:2>$<salt+digest>`.
//!
//! This module provides:
//! - [`Version`] — closed enumeration of recognized scheme tags
//! - [`HashRecord`] — parsed record (version, cost, salt, digest)
//! - [`HashRecord::parse`] / [`HashRecord::render`] — the wire format
//!
//! # Record Layout
//!
//! ```text
//! $2b$10$N9qo8uLOickgx2ZMRZoMyeIjZAgcfl7p92ldGxad68LJZdL17lhWy
//!  |  |  |<-- salt (22) ----->||<------- digest (31) ------->|
//!  |  cost, zero-padded to 2 digits
//!  version tag
//! ```
//!
//! Salt and digest share one contiguous 53-character run; the first 22
//! characters are the salt. A record is self-describing: version, cost, and
//! salt are recoverable from the string alone, with no external state.

use serde::{Deserialize, Serialize};

use crate::encoding;
use crate::error::HashError;

// ---------------------------------------------------------------------------
// Constants
// ---------------------------------------------------------------------------

/// Raw salt length in bytes. Fixed by the scheme, independent of cost.
pub const SALT_LEN: usize = 16;

/// Raw digest length in bytes.
pub const DIGEST_LEN: usize = 23;

/// Encoded salt length — 16 bytes in the bcrypt alphabet.
pub const ENCODED_SALT_LEN: usize = 22;

/// Encoded digest length — 23 bytes in the bcrypt alphabet.
pub const ENCODED_DIGEST_LEN: usize = 31;

/// Minimum supported cost factor.
pub const MIN_COST: u32 = 4;

/// Maximum supported cost factor.
pub const MAX_COST: u32 = 31;

/// Total length of the salt+digest run (53).
const ENCODED_PAYLOAD_LEN: usize = ENCODED_SALT_LEN + ENCODED_DIGEST_LEN;

// ---------------------------------------------------------------------------
// Version tags
// ---------------------------------------------------------------------------

/// Recognized scheme version tags.
///
/// A closed set: unknown tags fail parsing rather than falling through to a
/// default, and new tags require touching every `match` on this type.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum Version {
    /// `$2$` — the original scheme, no minor revision.
    #[serde(rename = "2")]
    Two,
    /// `$2a$` — first revision.
    #[serde(rename = "2a")]
    TwoA,
    /// `$2b$` — current revision.
    #[serde(rename = "2b")]
    TwoB,
    /// `$2x$` — crypt_blowfish sign-extension bug variant, readable for
    /// legacy records only.
    #[serde(rename = "2x")]
    TwoX,
    /// `$2y$` — crypt_blowfish fixed variant.
    #[serde(rename = "2y")]
    TwoY,
}

impl Version {
    /// The tag new records are encoded under.
    pub const CURRENT: Self = Self::TwoB;

    /// String form of the tag as it appears between the first two `$`.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Two => "2",
            Self::TwoA => "2a",
            Self::TwoB => "2b",
            Self::TwoX => "2x",
            Self::TwoY => "2y",
        }
    }

    /// Whether records under this tag should be re-encoded under
    /// [`Version::CURRENT`].
    #[must_use]
    pub const fn is_legacy(self) -> bool {
        !matches!(self, Self::TwoB)
    }

    /// Parse a version tag.
    ///
    /// # Errors
    ///
    /// Returns [`HashError::Malformed`] for tags outside the recognized set.
    pub fn parse(tag: &str) -> Result<Self, HashError> {
        match tag {
            "2" => Ok(Self::Two),
            "2a" => Ok(Self::TwoA),
            "2b" => Ok(Self::TwoB),
            "2x" => Ok(Self::TwoX),
            "2y" => Ok(Self::TwoY),
            other => Err(HashError::Malformed(format!(
                "unrecognized version tag: {other:?}"
            ))),
        }
    }
}

// ---------------------------------------------------------------------------
// Hash record
// ---------------------------------------------------------------------------

/// A parsed hash record.
///
/// The serialized string is the only persisted artifact; this struct is the
/// in-memory view during verification and analysis. Carries no secret beyond
/// what only matches one password, so it is safe to log or store as-is.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct HashRecord {
    /// Scheme version tag.
    pub version: Version,
    /// Cost factor, always inside [`MIN_COST`]..=[`MAX_COST`].
    pub cost: u32,
    /// Raw salt bytes.
    pub salt: [u8; SALT_LEN],
    /// Raw digest bytes.
    pub digest: [u8; DIGEST_LEN],
}

impl HashRecord {
    /// Parse a serialized record.
    ///
    /// Structural checks are exhaustive: segment count, version tag, exactly
    /// two cost digits inside the supported range, and a 53-character
    /// payload in the bcrypt alphabet.
    ///
    /// # Errors
    ///
    /// Returns [`HashError::Malformed`] describing the first check that
    /// failed. Never panics, whatever the input.
    pub fn parse(text: &str) -> Result<Self, HashError> {
        let mut segments = text.split('$');

        if segments.next() != Some("") {
            return Err(HashError::Malformed(
                "record must start with '$'".to_owned(),
            ));
        }

        let version_tag = segments
            .next()
            .ok_or_else(|| HashError::Malformed("missing version segment".to_owned()))?;
        let version = Version::parse(version_tag)?;

        let cost_text = segments
            .next()
            .ok_or_else(|| HashError::Malformed("missing cost segment".to_owned()))?;
        if cost_text.len() != 2 || !cost_text.bytes().all(|b| b.is_ascii_digit()) {
            return Err(HashError::Malformed(format!(
                "cost must be exactly two decimal digits, got {cost_text:?}"
            )));
        }
        let cost: u32 = cost_text
            .parse()
            .map_err(|e| HashError::Malformed(format!("unreadable cost: {e}")))?;
        if !(MIN_COST..=MAX_COST).contains(&cost) {
            return Err(HashError::Malformed(format!(
                "cost {cost} outside supported range {MIN_COST}..={MAX_COST}"
            )));
        }

        let payload = segments
            .next()
            .ok_or_else(|| HashError::Malformed("missing salt+digest segment".to_owned()))?;
        if segments.next().is_some() {
            return Err(HashError::Malformed(
                "unexpected extra '$' segment".to_owned(),
            ));
        }
        if !payload.is_ascii() {
            return Err(HashError::Malformed(
                "salt+digest run contains non-ASCII characters".to_owned(),
            ));
        }
        if payload.len() != ENCODED_PAYLOAD_LEN {
            return Err(HashError::Malformed(format!(
                "salt+digest run is {} characters (expected {ENCODED_PAYLOAD_LEN})",
                payload.len()
            )));
        }

        // All-ASCII payload, so the byte split is a char split.
        let (salt_text, digest_text) = payload.split_at(ENCODED_SALT_LEN);

        let salt: [u8; SALT_LEN] = encoding::decode(salt_text)?
            .try_into()
            .map_err(|_| HashError::Malformed("salt run decoded to wrong length".to_owned()))?;
        let digest: [u8; DIGEST_LEN] = encoding::decode(digest_text)?
            .try_into()
            .map_err(|_| HashError::Malformed("digest run decoded to wrong length".to_owned()))?;

        Ok(Self {
            version,
            cost,
            salt,
            digest,
        })
    }

    /// Serialize the record — `$<version>$<cost:02>$<salt><digest>`.
    #[must_use]
    pub fn render(&self) -> String {
        format!(
            "${}${:02}${}{}",
            self.version.as_str(),
            self.cost,
            encoding::encode(&self.salt),
            encoding::encode(&self.digest)
        )
    }

    /// The 22-character encoded salt run.
    #[must_use]
    pub fn encoded_salt(&self) -> String {
        encoding::encode(&self.salt)
    }
}

// ---------------------------------------------------------------------------
// Unit tests
// ---------------------------------------------------------------------------
