//! Estimator contract: attacker math scales with cost, selection lands on
//! the nearest cost factor.

use num_bigint::BigUint;

use cadenas_core::{benchmark_rounds, estimate_crack_time, HashError, KEYSPACE, MAX_COST, MIN_COST};

#[test]
fn cost_factor_doubles_per_increment() {
    let mut previous = estimate_crack_time(MIN_COST, 8)
        .expect("estimate should succeed")
        .cost_factor;
    for cost in (MIN_COST + 1)..=MAX_COST {
        let factor = estimate_crack_time(cost, 8)
            .expect("estimate should succeed")
            .cost_factor;
        assert_eq!(factor, previous * 2, "cost {cost}");
        previous = factor;
    }
}

#[test]
fn throughput_times_cost_factor_is_constant() {
    let a = estimate_crack_time(4, 8).expect("estimate should succeed");
    let b = estimate_crack_time(20, 8).expect("estimate should succeed");
    #[allow(clippy::cast_precision_loss)]
    let product_a = a.hashes_per_second * a.cost_factor as f64;
    #[allow(clippy::cast_precision_loss)]
    let product_b = b.hashes_per_second * b.cost_factor as f64;
    assert!((product_a - product_b).abs() < 1e-3);
}

#[test]
fn combinations_grow_with_length() {
    let short = estimate_crack_time(10, 4).expect("estimate should succeed");
    let long = estimate_crack_time(10, 12).expect("estimate should succeed");
    assert!(long.total_combinations > short.total_combinations);
    assert_eq!(
        short.total_combinations,
        BigUint::from(KEYSPACE).pow(4)
    );
}

#[test]
fn realistic_passwords_rate_centuries() {
    let estimate = estimate_crack_time(10, 8).expect("estimate should succeed");
    assert_eq!(estimate.estimated_time, "centuries");
    let estimate = estimate_crack_time(14, 16).expect("estimate should succeed");
    assert_eq!(estimate.estimated_time, "centuries");
}

#[test]
fn trivial_passwords_rate_in_small_buckets() {
    let estimate = estimate_crack_time(4, 2).expect("estimate should succeed");
    assert!(estimate.estimated_time.ends_with("seconds"));
    let estimate = estimate_crack_time(4, 4).expect("estimate should succeed");
    assert!(estimate.estimated_time.ends_with("minutes"));
}

#[test]
fn boundary_costs_accepted_and_neighbors_rejected() {
    assert!(estimate_crack_time(MIN_COST, 8).is_ok());
    assert!(estimate_crack_time(MAX_COST, 8).is_ok());
    assert!(matches!(
        estimate_crack_time(MIN_COST - 1, 8),
        Err(HashError::InvalidCost(_))
    ));
    assert!(matches!(
        estimate_crack_time(MAX_COST + 1, 8),
        Err(HashError::InvalidCost(_))
    ));
}

#[test]
fn benchmark_returns_costs_within_range() {
    for target in [0, 1, 10, 100, 1_000, 60_000, u64::MAX] {
        let cost = benchmark_rounds(target);
        assert!((MIN_COST..=MAX_COST).contains(&cost), "target {target}");
    }
}

#[test]
fn benchmark_is_monotone_in_target() {
    let mut previous = benchmark_rounds(1);
    for target in [10, 100, 1_000, 10_000, 100_000] {
        let cost = benchmark_rounds(target);
        assert!(cost >= previous, "target {target}");
        previous = cost;
    }
}

#[test]
fn longer_target_buys_more_rounds() {
    assert!(benchmark_rounds(1_000) > benchmark_rounds(50));
}
