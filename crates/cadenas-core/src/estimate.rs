//! Brute-force crack-time estimation and cost-factor selection.
//!
//! This module provides:
//! - [`estimate_crack_time`] — attacker-throughput math for a cost factor
//!   and password length
//! - [`benchmark_rounds`] — pick the cost factor whose modeled derivation
//!   time best matches a target latency
//!
//! All keyspace arithmetic runs on [`BigUint`]: `94^length` overflows u128
//! for lengths attackers actually face.

use num_bigint::BigUint;
use serde::{Deserialize, Serialize};

use crate::error::HashError;
use crate::format::{MAX_COST, MIN_COST};

// ── Model constants ─────────────────────────────────────────────────

/// Printable-ASCII keyspace assumed per password character.
pub const KEYSPACE: u32 = 94;

/// Modeled attacker throughput extrapolated to cost 0, in hashes per
/// second: 100k hashes/s measured at cost 5, doubled back 5 times.
/// Halves per cost increment.
const COST_ZERO_RATE: u64 = 3_200_000;

/// Cost factor the defender-latency model is anchored at.
const REFERENCE_COST: u32 = 10;

/// Modeled single-derivation latency at [`REFERENCE_COST`], in ms.
const REFERENCE_DERIVATION_MS: f64 = 100.0;

const SECONDS_PER_MINUTE: u64 = 60;
const SECONDS_PER_HOUR: u64 = 3_600;
const SECONDS_PER_DAY: u64 = 86_400;
/// Julian year.
const SECONDS_PER_YEAR: u64 = 31_557_600;
const SECONDS_PER_CENTURY: u64 = 3_155_760_000;

// ── Types ───────────────────────────────────────────────────────────

/// Brute-force estimate for one cost factor and password length.
#[derive(Clone, Debug, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CrackTimeEstimate {
    /// Modeled attacker throughput at this cost factor.
    pub hashes_per_second: f64,
    /// `94^password_length` candidate passwords, as a decimal string in
    /// serialized form.
    #[serde(
        serialize_with = "combinations_as_decimal",
        deserialize_with = "combinations_from_decimal"
    )]
    pub total_combinations: BigUint,
    /// Bucketed human-readable average-case duration.
    pub estimated_time: String,
    /// `2^cost`.
    pub cost_factor: u64,
}

fn combinations_as_decimal<S>(value: &BigUint, serializer: S) -> Result<S::Ok, S::Error>
where
    S: serde::Serializer,
{
    serializer.serialize_str(&value.to_str_radix(10))
}

fn combinations_from_decimal<'de, D>(deserializer: D) -> Result<BigUint, D::Error>
where
    D: serde::Deserializer<'de>,
{
    let text = String::deserialize(deserializer)?;
    text.parse().map_err(serde::de::Error::custom)
}

// ── Estimation ──────────────────────────────────────────────────────

/// Estimate average-case brute-force time against a hash at `cost` for
/// passwords of `password_length` printable characters.
///
/// The attacker model: a fixed baseline throughput halved per cost
/// increment, searching half the keyspace on average. Callers without a
/// concrete length conventionally pass 8.
///
/// # Errors
///
/// Returns [`HashError::InvalidCost`] if `cost` is outside 4..=31.
pub fn estimate_crack_time(
    cost: u32,
    password_length: u32,
) -> Result<CrackTimeEstimate, HashError> {
    if !(MIN_COST..=MAX_COST).contains(&cost) {
        return Err(HashError::InvalidCost(cost));
    }

    // cost <= 31, so the shift fits a u64 with room to spare.
    #[allow(clippy::arithmetic_side_effects)]
    let cost_factor = 1u64 << cost;

    #[allow(clippy::cast_precision_loss)]
    let hashes_per_second = COST_ZERO_RATE as f64 / cost_factor as f64;

    let total_combinations = BigUint::from(KEYSPACE).pow(password_length);

    // average seconds = combinations / 2 / (COST_ZERO_RATE / cost_factor).
    // BigUint arithmetic cannot overflow and the divisor is a nonzero
    // constant, so none of these operations can panic.
    #[allow(clippy::arithmetic_side_effects)]
    let average_seconds = &total_combinations * cost_factor / (2 * COST_ZERO_RATE);

    Ok(CrackTimeEstimate {
        hashes_per_second,
        estimated_time: bucket_duration(&average_seconds),
        total_combinations,
        cost_factor,
    })
}

/// Collapse a second count into the coarse human buckets shown to users.
#[allow(clippy::arithmetic_side_effects)] // divisors are nonzero constants
fn bucket_duration(seconds: &BigUint) -> String {
    if *seconds >= BigUint::from(SECONDS_PER_CENTURY) {
        return "centuries".to_owned();
    }
    // Below one century the count fits u64.
    let secs = u64::try_from(seconds).expect("sub-century second count fits in u64");

    if secs < SECONDS_PER_MINUTE {
        format!("{secs} seconds")
    } else if secs < SECONDS_PER_HOUR {
        format!("{} minutes", secs / SECONDS_PER_MINUTE)
    } else if secs < SECONDS_PER_DAY {
        format!("{} hours", secs / SECONDS_PER_HOUR)
    } else if secs < SECONDS_PER_YEAR {
        format!("{} days", secs / SECONDS_PER_DAY)
    } else {
        format!("{} years", secs / SECONDS_PER_YEAR)
    }
}

// ── Cost-factor selection ───────────────────────────────────────────

/// Modeled single-derivation latency at `cost`, in milliseconds.
#[allow(clippy::cast_possible_wrap)] // cost <= 31 fits i32
fn modeled_derivation_ms(cost: u32) -> f64 {
    REFERENCE_DERIVATION_MS * 2f64.powi(cost as i32 - REFERENCE_COST as i32)
}

/// Pick the cost factor whose modeled derivation time is closest to
/// `target_time_ms`.
///
/// Scans the full 4..=31 range; modeled time doubles per increment, so the
/// distance to the target is unimodal. Ties go to the smaller cost.
#[must_use]
pub fn benchmark_rounds(target_time_ms: u64) -> u32 {
    #[allow(clippy::cast_precision_loss)]
    let target = target_time_ms as f64;

    let mut best_cost = MIN_COST;
    let mut best_distance = f64::INFINITY;
    for cost in MIN_COST..=MAX_COST {
        let distance = (modeled_derivation_ms(cost) - target).abs();
        if distance < best_distance {
            best_distance = distance;
            best_cost = cost;
        }
    }
    best_cost
}

// ── Unit tests ──────────────────────────────────────────────────────
