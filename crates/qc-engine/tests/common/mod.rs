#![allow(dead_code)]

use qc_engine::profiles::{Category, Check, Defect, LanguageConfig, ScoringPolicy, Severity};

/// Reference policy with the single illustrative `clipping` check (weight 1.0, penalty 10).
pub fn clipping_config() -> LanguageConfig {
    LanguageConfig::default()
        .with_category(
            "audio",
            Category::new("Audio Deficiency")
                .with_check("clipping", Check::new(Severity::Error, 1.0, 10.0)),
        )
        .with_scoring(ScoringPolicy::reference())
}

/// Two categories with distinct multipliers so per-category deductions differ.
pub fn mixed_config() -> LanguageConfig {
    LanguageConfig::default()
        .with_category(
            "audio",
            Category::new("Audio Deficiency")
                .with_check("clipping", Check::new(Severity::Error, 1.0, 10.0))
                .with_check("dropout", Check::new(Severity::Error, 0.5, 8.0)),
        )
        .with_category(
            "timing",
            Category::new("Timing")
                .with_check("overlap", Check::new(Severity::Warning, 0.75, 4.0))
                .with_check("shot_change", Check::new(Severity::Info, 0.25, 2.0)),
        )
        .with_scoring(ScoringPolicy::reference().with_category_multiplier("timing", 2.0))
}

pub fn clipping(severity: Severity) -> Defect {
    Defect::new("audio", "clipping", severity, 1.0, "sample clipped")
}

pub fn mixed_defects() -> Vec<Defect> {
    vec![
        Defect::new("audio", "clipping", Severity::Error, 0.4, "peak"),
        Defect::new("timing", "overlap", Severity::Warning, 1.2, "overlaps next"),
        Defect::new("audio", "dropout", Severity::Info, 2.0, "short gap"),
        Defect::new("timing", "shot_change", Severity::Info, 3.5, "crosses cut"),
        Defect::new("video", "blocking", Severity::Error, 4.0, "not configured"),
        Defect::new("timing", "overlap", Severity::Error, 5.0, "overlaps previous"),
    ]
}

/// Deterministic reorderings: reversed, rotations and adjacent swaps.
pub fn permutations<T: Clone>(items: &[T]) -> Vec<Vec<T>> {
    let mut variants = Vec::new();
    let mut reversed = items.to_vec();
    reversed.reverse();
    variants.push(reversed);
    for shift in 1..items.len() {
        let mut rotated = items.to_vec();
        rotated.rotate_left(shift);
        variants.push(rotated);
    }
    for index in 1..items.len() {
        let mut swapped = items.to_vec();
        swapped.swap(index - 1, index);
        variants.push(swapped);
    }
    variants
}
