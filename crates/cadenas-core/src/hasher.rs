//! Hash encoding and verification.
//!
//! This module provides:
//! - [`hash`] / [`hash_with`] — encode a password into a fresh salted record
//! - [`verify`] / [`verify_with`] — check a candidate password against a
//!   stored record
//!
//! Encoding is never deterministic (fresh salt per call); verification is
//! always deterministic (salt and cost come from the record). Neither holds
//! any cross-call state, so concurrent calls are independent.

use std::time::{Duration, Instant};

use rand::rngs::OsRng;
use rand::RngCore;
use serde::{Deserialize, Serialize};

use crate::derive::{CostScaledDerivation, Sha256Derivation};
use crate::error::HashError;
use crate::format::{HashRecord, Version, MAX_COST, MIN_COST, SALT_LEN};

/// Default cost factor for new records.
pub const DEFAULT_COST: u32 = 10;

// ---------------------------------------------------------------------------
// Result types
// ---------------------------------------------------------------------------

/// Result of encoding a password.
#[derive(Clone, Debug, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct HashOutput {
    /// The serialized record — safe to store or transmit as plaintext.
    pub hash: String,
    /// Cost factor the record was encoded with.
    pub cost: u32,
    /// The 22-character encoded salt run.
    pub salt: String,
    /// Wall-clock duration of the derivation.
    pub elapsed: Duration,
}

/// Metadata recovered from a record that parsed successfully.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct HashInfo {
    /// Scheme version tag.
    pub version: Version,
    /// Embedded cost factor.
    pub cost: u32,
    /// The 22-character encoded salt run.
    pub salt: String,
}

/// Outcome of verifying a password against a stored record.
///
/// `matches == false` covers both a wrong password and a record that did not
/// parse; the two are deliberately indistinguishable here. `info` is present
/// whenever the record itself was well-formed.
#[derive(Clone, Debug, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct VerifyOutcome {
    /// Whether the candidate password reproduces the stored digest.
    pub matches: bool,
    /// Parsed record metadata, if the record was well-formed.
    pub info: Option<HashInfo>,
}

// ---------------------------------------------------------------------------
// Encoding
// ---------------------------------------------------------------------------

/// Encode `password` with the built-in derivation.
///
/// # Errors
///
/// Returns [`HashError::InvalidCost`] if `cost` is outside
/// [`MIN_COST`]..=[`MAX_COST`].
pub fn hash(password: &str, cost: u32) -> Result<HashOutput, HashError> {
    hash_with(password, cost, &Sha256Derivation)
}

/// Encode `password` under `cost` with a caller-supplied derivation.
///
/// Draws a fresh 16-byte salt from the OS CSPRNG per call, so two encodings
/// of the same password never serialize identically. Any UTF-8 password is
/// accepted — empty, multi-byte, or arbitrarily long — without truncation.
///
/// # Errors
///
/// Returns [`HashError::InvalidCost`] if `cost` is out of range, checked
/// before any entropy is drawn or work performed. Propagates
/// [`HashError::Derivation`] from the collaborator.
pub fn hash_with(
    password: &str,
    cost: u32,
    derivation: &impl CostScaledDerivation,
) -> Result<HashOutput, HashError> {
    if !(MIN_COST..=MAX_COST).contains(&cost) {
        return Err(HashError::InvalidCost(cost));
    }

    let mut salt = [0u8; SALT_LEN];
    OsRng.fill_bytes(&mut salt);

    let started = Instant::now();
    let digest = derivation.derive(password.as_bytes(), &salt, cost)?;
    let elapsed = started.elapsed();

    let record = HashRecord {
        version: Version::CURRENT,
        cost,
        salt,
        digest,
    };

    Ok(HashOutput {
        hash: record.render(),
        cost,
        salt: record.encoded_salt(),
        elapsed,
    })
}

// ---------------------------------------------------------------------------
// Verification
// ---------------------------------------------------------------------------

/// Verify `password` against a stored record with the built-in derivation.
#[must_use]
pub fn verify(password: &str, stored: &str) -> VerifyOutcome {
    verify_with(password, stored, &Sha256Derivation)
}

/// Verify `password` against a stored record with a caller-supplied
/// derivation.
///
/// Total: a malformed record, an unrecognized version tag, or a failing
/// derivation all surface as `matches = false`. Verification time is
/// dominated by the re-derivation at the record's embedded cost; the digest
/// comparison itself is constant-shape.
#[must_use]
pub fn verify_with(
    password: &str,
    stored: &str,
    derivation: &impl CostScaledDerivation,
) -> VerifyOutcome {
    let Ok(record) = HashRecord::parse(stored) else {
        return VerifyOutcome {
            matches: false,
            info: None,
        };
    };

    let info = HashInfo {
        version: record.version,
        cost: record.cost,
        salt: record.encoded_salt(),
    };

    let Ok(candidate) = derivation.derive(password.as_bytes(), &record.salt, record.cost) else {
        return VerifyOutcome {
            matches: false,
            info: Some(info),
        };
    };

    VerifyOutcome {
        matches: constant_time_eq(&candidate, &record.digest),
        info: Some(info),
    }
}

/// Constant-shape byte comparison for digests.
///
/// Accumulates differences with bitwise OR instead of short-circuiting, so
/// comparison time does not depend on where the first mismatch occurs. Both
/// inputs here are fixed-length digests, so the length check never varies.
fn constant_time_eq(a: &[u8], b: &[u8]) -> bool {
    if a.len() != b.len() {
        return false;
    }
    let mut diff = 0u8;
    for (x, y) in a.iter().zip(b.iter()) {
        diff |= x ^ y;
    }
    diff == 0
}

// ---------------------------------------------------------------------------
// Unit tests
// ---------------------------------------------------------------------------
