//! Analyzer contract: parse fidelity, rating thresholds, total behavior.

use cadenas_core::{
    analyze, hash, HashRecord, Recommendation, SecurityLevel, Version, DIGEST_LEN, SALT_LEN,
};

fn synthetic(version: Version, cost: u32) -> String {
    HashRecord {
        version,
        cost,
        salt: [0x11; SALT_LEN],
        digest: [0x99; DIGEST_LEN],
    }
    .render()
}

#[test]
fn analyze_recovers_encoding_parameters() {
    let output = hash("analyze me", 5).expect("hash should succeed");
    let analysis = analyze(&output.hash);
    assert!(analysis.valid);
    assert_eq!(analysis.cost, Some(5));
    assert_eq!(analysis.version, Some(Version::TwoB));
    assert_eq!(analysis.salt, Some(output.salt));
}

#[test]
fn rating_ladder_matches_policy() {
    let cases = [
        (8, SecurityLevel::Weak),
        (10, SecurityLevel::Moderate),
        (12, SecurityLevel::Strong),
        (14, SecurityLevel::VeryStrong),
    ];
    for (cost, expected) in cases {
        let analysis = analyze(&synthetic(Version::TwoB, cost));
        assert_eq!(
            analysis.security_level, expected,
            "cost {cost} should rate {expected:?}"
        );
    }
}

#[test]
fn weak_record_recommends_more_rounds() {
    let analysis = analyze(&synthetic(Version::TwoB, 8));
    assert!(analysis
        .recommendations
        .contains(&Recommendation::IncreaseCost));
}

#[test]
fn legacy_tag_recommends_version_upgrade() {
    for version in [Version::Two, Version::TwoA, Version::TwoX, Version::TwoY] {
        let analysis = analyze(&synthetic(version, 14));
        assert!(
            analysis
                .recommendations
                .contains(&Recommendation::UpgradeVersion),
            "{version:?} should be flagged as legacy"
        );
    }
}

#[test]
fn strong_current_record_has_no_recommendations() {
    let analysis = analyze(&synthetic(Version::TwoB, 14));
    assert!(analysis.recommendations.is_empty());
}

#[test]
fn malformed_input_never_panics() {
    for input in ["", "not-a-hash", "$argon2id$v=19$...", "$2b$xx$yy", "$$"] {
        let analysis = analyze(input);
        assert!(!analysis.valid, "{input:?} must be invalid");
        assert_eq!(analysis.security_level, SecurityLevel::Weak);
        assert_eq!(
            analysis.recommendations,
            vec![Recommendation::MalformedRecord]
        );
    }
}

#[test]
fn analyze_does_not_consume_input() {
    let stored = synthetic(Version::TwoB, 12);
    let _ = analyze(&stored);
    // Unchanged and reusable — analysis is pure.
    assert_eq!(analyze(&stored).cost, Some(12));
}
