//! Error types for `cadenas-core`.

use thiserror::Error;

/// Errors produced by hash encoding and cost estimation.
///
/// Verification and analysis never return an error: a malformed record and a
/// wrong password both surface as a plain "no match" / "invalid" result, so a
/// caller probing stored strings cannot tell the two apart.
#[derive(Debug, Error)]
pub enum HashError {
    /// Cost factor outside the supported range. Rejected before any work is
    /// performed — never silently clamped.
    #[error("invalid cost factor: {0} (must be between 4 and 31)")]
    InvalidCost(u32),

    /// Hash string failed structural parsing (wrong segment count, bad cost
    /// digits, unrecognized version tag, payload of the wrong shape).
    #[error("malformed hash record: {0}")]
    Malformed(String),

    /// The cost-scaled derivation collaborator failed.
    #[error("derivation failed: {0}")]
    Derivation(String),
}
