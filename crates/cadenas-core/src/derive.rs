//! Cost-scaled derivation — the expensive step behind encode and verify.
//!
//! The derivation is a collaborator, not a fixed algorithm: anything
//! deterministic in `(password, salt, cost)` whose work doubles per cost
//! increment satisfies the contract. [`Sha256Derivation`] is the built-in
//! stand-in; a deployment hardening beyond the format contract substitutes a
//! vetted password-hashing primitive behind [`CostScaledDerivation`].

use sha2::{Digest, Sha256};
use zeroize::Zeroize;

use crate::error::HashError;
use crate::format::{DIGEST_LEN, MAX_COST, MIN_COST};

/// The pluggable derivation step.
///
/// Implementations must be pure in their inputs — verification re-runs the
/// derivation with the salt and cost extracted from a stored record and
/// expects a bit-identical digest. Work must scale as `2^cost`; a
/// linear-time "cost" defeats the parameter's purpose.
pub trait CostScaledDerivation {
    /// Derive the record digest for `password` under `salt` and `cost`.
    ///
    /// # Errors
    ///
    /// Returns [`HashError::InvalidCost`] for a cost outside 4..=31, or
    /// [`HashError::Derivation`] if the underlying primitive fails.
    fn derive(
        &self,
        password: &[u8],
        salt: &[u8],
        cost: u32,
    ) -> Result<[u8; DIGEST_LEN], HashError>;
}

/// Iterated SHA-256, `2^cost` rounds.
///
/// Preserves the contract's exponential work scaling and produces digests of
/// the right shape, but is NOT a vetted password-hashing construction — no
/// memory hardness, no per-round key schedule.
#[derive(Clone, Copy, Debug, Default)]
pub struct Sha256Derivation;

impl CostScaledDerivation for Sha256Derivation {
    fn derive(
        &self,
        password: &[u8],
        salt: &[u8],
        cost: u32,
    ) -> Result<[u8; DIGEST_LEN], HashError> {
        if !(MIN_COST..=MAX_COST).contains(&cost) {
            return Err(HashError::InvalidCost(cost));
        }

        // Seed state binds all three inputs before the work loop.
        let mut seed = Sha256::new();
        seed.update(salt);
        seed.update(cost.to_be_bytes());
        seed.update(password);
        let mut state: [u8; 32] = seed.finalize().into();

        // cost <= 31, so the shift fits a u64 with room to spare.
        #[allow(clippy::arithmetic_side_effects)]
        let rounds = 1u64 << cost;

        // Re-absorb the salt every round so the chain cannot collapse into a
        // short password-independent cycle.
        for _ in 0..rounds {
            let mut hasher = Sha256::new();
            hasher.update(state);
            hasher.update(salt);
            state = hasher.finalize().into();
        }

        let mut digest = [0u8; DIGEST_LEN];
        digest.copy_from_slice(&state[..DIGEST_LEN]);
        state.zeroize();
        Ok(digest)
    }
}
