mod common;

use common::*;
use qc_engine::profiles::{CategoryId, CheckId, Defect, ScoringPolicy, Severity};
use qc_engine::scoring::{
    calculate_asset_score, calculate_clip_score, get_score_status, score_clip, ScoreStatus,
};

#[test]
fn zero_defects_score_a_perfect_pass() {
    let score = calculate_clip_score(&[], &clipping_config());
    assert_eq!(score, 100.0);
    assert_eq!(get_score_status(score), ScoreStatus::Pass);
}

#[test]
fn one_error_on_clipping_costs_fifteen_points() {
    let score = calculate_clip_score(&[clipping(Severity::Error)], &clipping_config());
    assert_eq!(score, 85.0);
    assert_eq!(get_score_status(score), ScoreStatus::Review);
}

#[test]
fn disabled_clipping_check_costs_nothing() {
    let mut config = clipping_config();
    config
        .check_mut(&CategoryId::from("audio"), &CheckId::from("clipping"))
        .expect("clipping configured")
        .enabled = false;

    let score = calculate_clip_score(&[clipping(Severity::Error)], &config);
    assert_eq!(score, 100.0);
    assert_eq!(get_score_status(score), ScoreStatus::Pass);
}

#[test]
fn asset_score_is_the_rounded_mean() {
    let asset = calculate_asset_score(&[100.0, 85.0, 60.0, 40.0]);
    assert_eq!(asset, 71.3);
    assert_eq!(get_score_status(asset), ScoreStatus::Review);
}

#[test]
fn missing_policy_always_scores_one_hundred() {
    let mut config = mixed_config();
    config.scoring = None;

    let defects: Vec<Defect> = (0..40).map(|_| clipping(Severity::Error)).collect();
    assert_eq!(calculate_clip_score(&defects, &config), 100.0);
    assert_eq!(calculate_clip_score(&mixed_defects(), &config), 100.0);

    let clip = score_clip(&defects, &config);
    assert!(!clip.policy_applied);
}

#[test]
fn scores_stay_within_bounds() {
    let heavy: Vec<Defect> = (0..25).map(|_| clipping(Severity::Error)).collect();
    assert_eq!(calculate_clip_score(&heavy, &clipping_config()), 0.0);

    let mut bonus = clipping_config();
    bonus
        .check_mut(&CategoryId::from("audio"), &CheckId::from("clipping"))
        .expect("clipping configured")
        .penalty = -50.0;
    assert_eq!(calculate_clip_score(&heavy, &bonus), 100.0);

    let mut extreme = clipping_config();
    extreme
        .check_mut(&CategoryId::from("audio"), &CheckId::from("clipping"))
        .expect("clipping configured")
        .penalty = f64::INFINITY;
    assert_eq!(calculate_clip_score(&heavy, &extreme), 0.0);

    for count in 0..12 {
        let defects: Vec<Defect> = mixed_defects().into_iter().cycle().take(count * 3).collect();
        let score = calculate_clip_score(&defects, &mixed_config());
        assert!((0.0..=100.0).contains(&score), "score {score} out of bounds");
    }
}

#[test]
fn opposing_infinite_penalties_score_zero_instead_of_nan() {
    let mut config = mixed_config();
    config
        .check_mut(&CategoryId::from("audio"), &CheckId::from("clipping"))
        .expect("clipping configured")
        .penalty = f64::INFINITY;
    config
        .check_mut(&CategoryId::from("audio"), &CheckId::from("dropout"))
        .expect("dropout configured")
        .penalty = f64::NEG_INFINITY;

    let defects = vec![
        Defect::new("audio", "clipping", Severity::Error, 1.0, "peak"),
        Defect::new("audio", "dropout", Severity::Error, 2.0, "gap"),
    ];

    let clip = score_clip(&defects, &config);
    assert!(clip.total_penalty.is_nan());
    assert_eq!(clip.score, 0.0);
    assert_eq!(clip.status(), ScoreStatus::Fail);
    assert_eq!(calculate_asset_score(&[clip.score, 100.0]), 50.0);
}

#[test]
fn defect_order_does_not_change_the_score() {
    let config = mixed_config();
    let defects = mixed_defects();
    let expected = calculate_clip_score(&defects, &config);

    for permutation in permutations(&defects) {
        assert_eq!(calculate_clip_score(&permutation, &config), expected);
    }
}

#[test]
fn disabling_never_lowers_a_score() {
    let defects = mixed_defects();
    let baseline = score_clip(&defects, &mixed_config());

    for (category, check) in [("audio", "clipping"), ("audio", "dropout"), ("timing", "overlap")] {
        let mut config = mixed_config();
        config
            .check_mut(&CategoryId::from(category), &CheckId::from(check))
            .expect("check configured")
            .enabled = false;

        let contributed: f64 = baseline
            .penalties
            .iter()
            .filter(|penalty| penalty.check_id.as_str() == check)
            .map(|penalty| penalty.points)
            .sum();
        let disabled = calculate_clip_score(&defects, &config);

        assert!(disabled >= baseline.score);
        if contributed > 0.0 {
            assert!(disabled > baseline.score, "disabling {check} should raise the score");
        }
    }

    let mut config = mixed_config();
    config
        .checks
        .get_mut(&CategoryId::from("timing"))
        .expect("timing configured")
        .enabled = false;
    assert!(calculate_clip_score(&defects, &config) > baseline.score);
}

#[test]
fn missing_multiplier_behaves_like_one() {
    let defects = mixed_defects();

    let mut explicit = mixed_config();
    let policy = explicit.scoring.as_mut().expect("policy present");
    policy.severity_multipliers.insert(Severity::Warning, 1.0);
    policy.category_multipliers.insert(CategoryId::from("audio"), 1.0);

    let mut implicit = mixed_config();
    let policy = implicit.scoring.as_mut().expect("policy present");
    policy.severity_multipliers.remove(&Severity::Warning);
    policy.category_multipliers.remove(&CategoryId::from("audio"));

    assert_eq!(
        calculate_clip_score(&defects, &explicit),
        calculate_clip_score(&defects, &implicit)
    );

    let mut empty_policy = clipping_config();
    empty_policy.scoring = Some(ScoringPolicy::default());
    assert_eq!(calculate_clip_score(&[clipping(Severity::Error)], &empty_policy), 90.0);
}

#[test]
fn unrecognized_defect_severity_uses_a_neutral_multiplier() {
    let score = calculate_clip_score(
        &[clipping(Severity::Unrecognized("CRITICAL".to_string()))],
        &clipping_config(),
    );
    assert_eq!(score, 90.0);
}

#[test]
fn defect_severity_wins_over_the_configured_default() {
    // clipping defaults to ERROR but the detector reported INFO.
    let score = calculate_clip_score(&[clipping(Severity::Info)], &clipping_config());
    assert_eq!(score, 95.0);
}

#[test]
fn mixed_scenario_matches_the_formula() {
    // clipping ERROR 1.0*1.5*10 = 15, overlap WARNING 0.75*1.0*2.0*4 = 6,
    // dropout INFO 0.5*0.5*8 = 2, shot_change INFO 0.25*0.5*2.0*2 = 0.5,
    // overlap ERROR 0.75*1.5*2.0*4 = 9, blocking unconfigured = 0.
    let clip = score_clip(&mixed_defects(), &mixed_config());
    assert_eq!(clip.total_penalty, 32.5);
    assert_eq!(clip.score, 67.5);
    assert_eq!(clip.status(), ScoreStatus::Fail);
}
