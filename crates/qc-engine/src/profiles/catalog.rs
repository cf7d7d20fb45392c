use super::model::{
    Category, Check, LanguageConfig, Product, ProductKind, Profile, ScoringPolicy, Severity,
};

/// Languages the template ships rules for.
pub const TEMPLATE_LANGUAGES: [&str; 3] = ["en", "es", "fr"];

impl Profile {
    /// Designated template profile, cloned when onboarding a new client.
    pub fn template() -> Self {
        let mut profile = Profile::new("template", "Template");
        for kind in ProductKind::ordered() {
            let product = TEMPLATE_LANGUAGES
                .iter()
                .fold(Product::default(), |product, code| {
                    product.with_language(code, standard_language_config(kind))
                });
            profile = profile.with_product(kind, product);
        }
        profile
    }
}

/// Standard rule set for one product kind, scored with the reference policy.
pub fn standard_language_config(kind: ProductKind) -> LanguageConfig {
    match kind {
        ProductKind::DubbedAudio => LanguageConfig::default()
            .with_category("audio_deficiency", audio_deficiency())
            .with_category("sync", dub_sync())
            .with_scoring(ScoringPolicy::reference().with_category_multiplier("sync", 1.2)),
        ProductKind::Subtitles => LanguageConfig::default()
            .with_category("timing", subtitle_timing())
            .with_category("text", subtitle_text())
            .with_scoring(ScoringPolicy::reference()),
        ProductKind::Sdh => LanguageConfig::default()
            .with_category("timing", subtitle_timing())
            .with_category("text", subtitle_text())
            .with_category("sound_description", sound_description())
            .with_scoring(ScoringPolicy::reference().with_category_multiplier("sound_description", 1.25)),
        ProductKind::ClosedCaptions => LanguageConfig::default()
            .with_category("timing", subtitle_timing())
            .with_category("caption_format", caption_format())
            .with_scoring(ScoringPolicy::reference()),
    }
}

fn audio_deficiency() -> Category {
    Category::new("Audio Deficiency")
        .with_check(
            "clipping",
            Check::new(Severity::Error, 1.0, 10.0)
                .labeled("Audio clipping")
                .threshold(-0.1, "dBFS")
                .levels(
                    "Peaks stay below -1 dBFS",
                    "Isolated peaks between -1 and -0.1 dBFS",
                    "Samples at or above -0.1 dBFS",
                ),
        )
        .with_check(
            "dropout",
            Check::new(Severity::Error, 0.9, 12.0)
                .labeled("Signal dropout")
                .threshold(50.0, "ms"),
        )
        .with_check(
            "loudness",
            Check::new(Severity::Warning, 0.6, 6.0)
                .labeled("Integrated loudness")
                .range(-26.0, -22.0, "LUFS"),
        )
        .with_check(
            "background_noise",
            Check::new(Severity::Info, 0.3, 4.0)
                .labeled("Background noise floor")
                .threshold(-60.0, "dBFS"),
        )
}

fn dub_sync() -> Category {
    Category::new("Lip Sync")
        .with_check(
            "sync_drift",
            Check::new(Severity::Error, 0.8, 10.0)
                .labeled("Sync drift against picture")
                .threshold(120.0, "ms"),
        )
        .with_check(
            "missing_line",
            Check::new(Severity::Error, 1.0, 15.0).labeled("Untranslated or missing line"),
        )
}

fn subtitle_timing() -> Category {
    Category::new("Timing")
        .with_check(
            "overlap",
            Check::new(Severity::Error, 1.0, 8.0).labeled("Overlapping events"),
        )
        .with_check(
            "min_duration",
            Check::new(Severity::Warning, 0.7, 5.0)
                .labeled("Minimum display duration")
                .threshold(833.0, "ms"),
        )
        .with_check(
            "reading_speed",
            Check::new(Severity::Warning, 0.6, 5.0)
                .labeled("Reading speed")
                .threshold(17.0, "cps")
                .levels("17 cps or less", "Up to 20 cps", "Above 20 cps"),
        )
        .with_check(
            "shot_change",
            Check::new(Severity::Info, 0.3, 2.0).labeled("Crosses a shot change"),
        )
}

fn subtitle_text() -> Category {
    Category::new("Text")
        .with_check(
            "spelling",
            Check::new(Severity::Warning, 0.5, 4.0).labeled("Spelling"),
        )
        .with_check(
            "line_length",
            Check::new(Severity::Warning, 0.6, 4.0)
                .labeled("Characters per line")
                .threshold(42.0, "chars"),
        )
        .with_check(
            "line_count",
            Check::new(Severity::Error, 0.8, 6.0)
                .labeled("Lines per event")
                .range(1.0, 2.0, "lines"),
        )
}

fn sound_description() -> Category {
    Category::new("Sound Description")
        .with_check(
            "missing_sound_tag",
            Check::new(Severity::Error, 0.9, 8.0).labeled("Missing sound description"),
        )
        .with_check(
            "speaker_id",
            Check::new(Severity::Warning, 0.5, 4.0).labeled("Speaker identification"),
        )
}

fn caption_format() -> Category {
    Category::new("Caption Format")
        .with_check(
            "safe_area",
            Check::new(Severity::Warning, 0.5, 4.0)
                .labeled("Inside title-safe area")
                .percentage(90.0),
        )
        .with_check(
            "roll_up_rows",
            Check::new(Severity::Info, 0.4, 3.0)
                .labeled("Roll-up row count")
                .range(2.0, 4.0, "rows"),
        )
}
