//! Hash analysis — structural validation and security rating.
//!
//! [`analyze`] powers user-facing feedback ("this record is weak, use 12+
//! rounds") without ever running the expensive derivation. Pure and total:
//! no side effects, no panics, no errors.

use serde::{Deserialize, Serialize};

use crate::format::{HashRecord, Version};

/// Cost threshold below which [`Recommendation::IncreaseCost`] is attached.
const RECOMMENDED_MIN_COST: u32 = 12;

// ── Ratings ─────────────────────────────────────────────────────────

/// Security rating derived from a record's cost factor.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum SecurityLevel {
    /// Cost below 10.
    Weak,
    /// Cost 10–11.
    Moderate,
    /// Cost 12–13.
    Strong,
    /// Cost 14 and above.
    VeryStrong,
}

impl SecurityLevel {
    /// Rate a cost factor.
    #[must_use]
    pub const fn from_cost(cost: u32) -> Self {
        match cost {
            0..=9 => Self::Weak,
            10..=11 => Self::Moderate,
            12..=13 => Self::Strong,
            _ => Self::VeryStrong,
        }
    }

    /// Kebab-case form, matching the serialized representation.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Weak => "weak",
            Self::Moderate => "moderate",
            Self::Strong => "strong",
            Self::VeryStrong => "very-strong",
        }
    }
}

/// Advisory attached to an analysis. Additive — several may apply at once.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum Recommendation {
    /// Cost factor below 12 — re-encode with more rounds.
    IncreaseCost,
    /// Version tag is not the current `2b` revision.
    UpgradeVersion,
    /// The string is not a well-formed record at all.
    MalformedRecord,
}

impl Recommendation {
    /// Human-readable advisory text.
    #[must_use]
    pub const fn message(self) -> &'static str {
        match self {
            Self::IncreaseCost => "increase the cost factor to 12 or more rounds",
            Self::UpgradeVersion => "re-encode under the current 2b version tag",
            Self::MalformedRecord => "not a recognized hash record; re-encode the password",
        }
    }
}

// ── Analysis ────────────────────────────────────────────────────────

/// Result of analyzing a serialized record.
#[derive(Clone, Debug, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Analysis {
    /// Whether the string parsed as a well-formed record.
    pub valid: bool,
    /// Version tag, if the record parsed.
    pub version: Option<Version>,
    /// Cost factor, if the record parsed.
    pub cost: Option<u32>,
    /// The 22-character encoded salt run, if the record parsed.
    pub salt: Option<String>,
    /// Rating from the embedded cost; `Weak` for invalid records.
    pub security_level: SecurityLevel,
    /// Advisories, most severe first.
    pub recommendations: Vec<Recommendation>,
}

/// Analyze a serialized record without verifying any password.
///
/// Malformed input yields `valid = false`, a `Weak` rating, and a
/// [`Recommendation::MalformedRecord`] advisory — never a panic.
#[must_use]
pub fn analyze(stored: &str) -> Analysis {
    let Ok(record) = HashRecord::parse(stored) else {
        return Analysis {
            valid: false,
            version: None,
            cost: None,
            salt: None,
            security_level: SecurityLevel::Weak,
            recommendations: vec![Recommendation::MalformedRecord],
        };
    };

    let mut recommendations = Vec::new();
    if record.cost < RECOMMENDED_MIN_COST {
        recommendations.push(Recommendation::IncreaseCost);
    }
    if record.version.is_legacy() {
        recommendations.push(Recommendation::UpgradeVersion);
    }

    Analysis {
        valid: true,
        version: Some(record.version),
        cost: Some(record.cost),
        salt: Some(record.encoded_salt()),
        security_level: SecurityLevel::from_cost(record.cost),
        recommendations,
    }
}

// ── Unit tests ──────────────────────────────────────────────────────
