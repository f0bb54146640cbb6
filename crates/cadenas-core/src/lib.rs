//! `cadenas-core` — password hash contract engine for CADENAS.
//!
//! Pure and stateless: zero network, zero async, no persistence, no CLI.
//! Every operation is a function of its inputs plus (for encoding) a fresh
//! draw from the OS CSPRNG, so concurrent calls never share mutable state.
//!
//! - [`hash`] / [`verify`] — encode a password into a `$2b$...` record and
//!   check a candidate against a stored one
//! - [`analyze`] — parse a record and rate its security
//! - [`estimate_crack_time`] / [`benchmark_rounds`] — brute-force math and
//!   cost-factor selection
//!
//! The expensive derivation behind [`hash`] and [`verify`] is a pluggable
//! collaborator ([`CostScaledDerivation`]); the built-in
//! [`Sha256Derivation`] preserves the wire format and the exponential cost
//! scaling but is not itself a vetted password-hashing primitive.

#![cfg_attr(test, allow(clippy::unwrap_used, clippy::arithmetic_side_effects))]

pub mod error;

pub mod encoding;

pub mod format;

pub mod derive;

pub mod hasher;

pub mod analyze;

pub mod estimate;

pub use analyze::{analyze, Analysis, Recommendation, SecurityLevel};
pub use derive::{CostScaledDerivation, Sha256Derivation};
pub use error::HashError;
pub use estimate::{benchmark_rounds, estimate_crack_time, CrackTimeEstimate, KEYSPACE};
pub use format::{
    HashRecord, Version, DIGEST_LEN, ENCODED_DIGEST_LEN, ENCODED_SALT_LEN, MAX_COST, MIN_COST,
    SALT_LEN,
};
pub use hasher::{
    hash, hash_with, verify, verify_with, HashInfo, HashOutput, VerifyOutcome, DEFAULT_COST,
};
