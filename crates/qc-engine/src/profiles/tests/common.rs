use crate::profiles::{
    Category, CategoryId, Check, CheckId, LanguageCode, LanguageConfig, Product, ProductKind,
    Profile, ProfileId, ProfileRepository, RepositorySettings, ScoringPolicy, Severity,
};

pub(super) fn category(id: &str) -> CategoryId {
    CategoryId::from(id)
}

pub(super) fn check(id: &str) -> CheckId {
    CheckId::from(id)
}

pub(super) fn dub_config() -> LanguageConfig {
    LanguageConfig::default()
        .with_category(
            "audio",
            Category::new("Audio Deficiency")
                .with_check("clipping", Check::new(Severity::Error, 1.0, 10.0))
                .with_check("dropout", Check::new(Severity::Warning, 0.5, 8.0)),
        )
        .with_scoring(ScoringPolicy::reference())
}

pub(super) fn client_profile(id: &str, client: &str) -> Profile {
    Profile::new(id, client).with_product(
        ProductKind::DubbedAudio,
        Product::default().with_language("en", dub_config()),
    )
}

pub(super) fn settings() -> RepositorySettings {
    RepositorySettings {
        template_profile_id: ProfileId::from("template"),
        default_product: ProductKind::DubbedAudio,
        default_language: LanguageCode::from("en"),
    }
}

/// Repository holding `acme` and `globex`, with `acme` active on dubbed audio / en.
pub(super) fn loaded_repository() -> ProfileRepository {
    let mut repository = ProfileRepository::new(settings());
    repository.load_profiles(vec![
        client_profile("acme", "Acme Studios"),
        client_profile("globex", "Globex Media"),
    ]);
    repository
}

pub(super) fn active_check(repository: &ProfileRepository, category_id: &str, check_id: &str) -> Check {
    repository
        .active_language_config()
        .and_then(|config| config.checks.get(&category(category_id)))
        .and_then(|category| category.checks.get(&check(check_id)))
        .cloned()
        .expect("check resolves under the active selection")
}
