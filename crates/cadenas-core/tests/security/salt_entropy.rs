//! Salt quality — fresh, unique, full-length randomness per encoding.

use std::collections::HashSet;

use cadenas_core::hash;

#[test]
fn salts_never_repeat_across_encodings() {
    let salts: HashSet<String> = (0..200)
        .map(|_| hash("same password", 4).expect("hash should succeed").salt)
        .collect();
    assert_eq!(salts.len(), 200, "generated a duplicate salt");
}

#[test]
fn salt_run_is_always_full_length() {
    for _ in 0..50 {
        let output = hash("pw", 4).expect("hash should succeed");
        assert_eq!(output.salt.len(), 22);
    }
}

#[test]
fn salt_spreads_over_the_alphabet() {
    // 100 salts × 22 chars from a 64-symbol alphabet: seeing fewer than half
    // the symbols would mean the generator is badly skewed.
    let mut seen: HashSet<char> = HashSet::new();
    for _ in 0..100 {
        let output = hash("pw", 4).expect("hash should succeed");
        seen.extend(output.salt.chars());
    }
    assert!(
        seen.len() >= 32,
        "salt characters cover only {} symbols",
        seen.len()
    );
}
