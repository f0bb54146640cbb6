//! Exponential cost scaling — the scheme's anti-brute-force property.
//!
//! Each cost increment must double the derivation work. Wall-clock time per
//! single call is too noisy to compare at low costs, so each cost is
//! measured over a batch and costs are compared pairwise.

use std::time::{Duration, Instant};

use cadenas_core::{CostScaledDerivation, Sha256Derivation};

/// Derivations per measured batch. Large enough that even cost 4 (16
/// rounds) lands comfortably above timer resolution.
const BATCH: u32 = 500;

const TEST_SALT: &[u8; 16] = b"fixed_test_salt!";

fn batch_once(cost: u32) -> Duration {
    let started = Instant::now();
    for i in 0..BATCH {
        // Vary the password so no intermediate state can be reused.
        let password = format!("timing probe {i}");
        let digest = Sha256Derivation
            .derive(password.as_bytes(), TEST_SALT, cost)
            .expect("derive should succeed");
        std::hint::black_box(digest);
    }
    started.elapsed()
}

/// Minimum of three batches — discards scheduler hiccups.
fn batch_elapsed(cost: u32) -> Duration {
    (0..3).map(|_| batch_once(cost)).min().expect("three runs")
}

#[test]
fn derivation_time_grows_with_cost() {
    // Warm-up pass keeps first-touch effects out of the measurements.
    let _ = batch_elapsed(4);

    let timings: Vec<(u32, Duration)> = (4..=8).map(|cost| (cost, batch_elapsed(cost))).collect();

    for window in timings.windows(2) {
        let (cost_lo, elapsed_lo) = window[0];
        let (cost_hi, elapsed_hi) = window[1];
        assert!(
            elapsed_hi > elapsed_lo,
            "cost {cost_hi} ({elapsed_hi:?}) should take longer than cost {cost_lo} ({elapsed_lo:?})"
        );
    }
}

#[test]
fn four_increments_scale_close_to_sixteen_fold() {
    let _ = batch_elapsed(4);
    let low = batch_elapsed(4);
    let high = batch_elapsed(8);

    // 2^8 / 2^4 = 16. Allow generous scheduling noise; the point is
    // exponential (not linear) growth.
    let ratio = high.as_secs_f64() / low.as_secs_f64();
    assert!(
        ratio > 4.0,
        "expected ~16x work from cost 4 to 8, measured {ratio:.1}x"
    );
}
