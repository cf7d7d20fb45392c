use super::common::*;
use crate::profiles::{
    EditOutcome, IgnoredEdit, LanguageCode, MeasurementType, ProductKind, Profile, ProfileId,
    ProfileRepository, ProfileSource, ProfileSourceError, RejectedEdit, Severity,
};

#[test]
fn load_prefers_the_template_profile() {
    let mut repository = ProfileRepository::new(settings());
    repository.load_profiles(vec![client_profile("acme", "Acme Studios"), Profile::template()]);

    assert_eq!(repository.len(), 2);
    assert_eq!(
        repository.active_profile().map(|profile| profile.id.as_str()),
        Some("template")
    );
}

#[test]
fn load_falls_back_to_first_profile_and_keeps_product_and_language() {
    let mut repository = loaded_repository();
    repository.set_active_profile(ProfileId::from("globex"));
    repository.set_active_language(LanguageCode::from("de"));

    repository.load_profiles(vec![client_profile("initech", "Initech")]);

    assert_eq!(repository.selection().profile, Some(ProfileId::from("initech")));
    assert_eq!(repository.selection().product, ProductKind::DubbedAudio);
    assert_eq!(repository.selection().language, LanguageCode::from("de"));
}

#[test]
fn loading_nothing_clears_the_active_profile() {
    let mut repository = loaded_repository();
    repository.load_profiles(Vec::new());

    assert!(repository.is_empty());
    assert!(repository.active_profile().is_none());
    assert!(repository.active_language_config().is_none());
}

#[test]
fn resolution_returns_none_at_each_broken_link() {
    let mut repository = loaded_repository();
    assert!(repository.active_language_config().is_some());

    repository.set_active_language(LanguageCode::from("ja"));
    assert!(repository.active_profile().is_some());
    assert!(repository.active_language_config().is_none());

    repository.set_active_language(LanguageCode::from("en"));
    repository.set_active_product(ProductKind::ClosedCaptions);
    assert!(repository.active_language_config().is_none());

    repository.set_active_product(ProductKind::DubbedAudio);
    repository.set_active_profile(ProfileId::from("missing"));
    assert!(repository.active_profile().is_none());
    assert!(repository.active_language_config().is_none());
}

#[test]
fn setters_mutate_exactly_one_check() {
    let mut repository = loaded_repository();

    assert!(repository
        .set_check_enabled(&category("audio"), &check("clipping"), false)
        .is_applied());
    assert!(repository
        .set_check_severity(&category("audio"), &check("clipping"), Severity::Info)
        .is_applied());
    assert!(repository
        .set_check_weight(&category("audio"), &check("clipping"), 0.25)
        .is_applied());
    assert!(repository
        .set_check_penalty(&category("audio"), &check("clipping"), 4.0)
        .is_applied());
    assert!(repository
        .set_check_measurement_type(&category("audio"), &check("clipping"), MeasurementType::Threshold)
        .is_applied());

    let clipping = active_check(&repository, "audio", "clipping");
    assert!(!clipping.enabled);
    assert_eq!(clipping.severity, Severity::Info);
    assert_eq!(clipping.weight, 0.25);
    assert_eq!(clipping.penalty, 4.0);
    assert_eq!(clipping.measurement_type, MeasurementType::Threshold);

    let dropout = active_check(&repository, "audio", "dropout");
    assert!(dropout.enabled);
    assert_eq!(dropout.weight, 0.5);

    repository.set_active_profile(ProfileId::from("globex"));
    let untouched = active_check(&repository, "audio", "clipping");
    assert!(untouched.enabled);
    assert_eq!(untouched.penalty, 10.0);
}

#[test]
fn setters_ignore_broken_paths_without_touching_state() {
    let mut repository = loaded_repository();
    let before = repository.profiles().to_vec();

    assert_eq!(
        repository.set_check_enabled(&category("audio"), &check("hum"), false),
        EditOutcome::Ignored(IgnoredEdit::CheckMissing(check("hum")))
    );
    assert_eq!(
        repository.set_check_weight(&category("video"), &check("clipping"), 0.5),
        EditOutcome::Ignored(IgnoredEdit::CategoryMissing(category("video")))
    );

    repository.set_active_language(LanguageCode::from("ja"));
    assert_eq!(
        repository.set_check_penalty(&category("audio"), &check("clipping"), 1.0),
        EditOutcome::Ignored(IgnoredEdit::LanguageMissing(LanguageCode::from("ja")))
    );

    repository.set_active_language(LanguageCode::from("en"));
    repository.set_active_product(ProductKind::Sdh);
    assert_eq!(
        repository.set_check_severity(&category("audio"), &check("clipping"), Severity::Info),
        EditOutcome::Ignored(IgnoredEdit::ProductMissing(ProductKind::Sdh))
    );

    repository.set_active_profile(ProfileId::from("nobody"));
    assert_eq!(
        repository.set_check_enabled(&category("audio"), &check("clipping"), false),
        EditOutcome::Ignored(IgnoredEdit::ProfileNotFound(ProfileId::from("nobody")))
    );

    let mut empty = ProfileRepository::new(settings());
    assert_eq!(
        empty.set_check_enabled(&category("audio"), &check("clipping"), false),
        EditOutcome::Ignored(IgnoredEdit::NoActiveProfile)
    );

    assert_eq!(repository.profiles(), before.as_slice());
}

#[test]
fn out_of_range_edits_are_rejected() {
    let mut repository = loaded_repository();

    assert_eq!(
        repository.set_check_weight(&category("audio"), &check("clipping"), 1.5),
        EditOutcome::Rejected(RejectedEdit::WeightOutOfRange(1.5))
    );
    assert_eq!(
        repository.set_check_penalty(&category("audio"), &check("clipping"), -5.0),
        EditOutcome::Rejected(RejectedEdit::NegativePenalty(-5.0))
    );
    assert_eq!(
        repository.set_check_penalty(&category("audio"), &check("clipping"), f64::INFINITY),
        EditOutcome::Rejected(RejectedEdit::NonFinite)
    );

    let clipping = active_check(&repository, "audio", "clipping");
    assert_eq!(clipping.weight, 1.0);
    assert_eq!(clipping.penalty, 10.0);
}

#[test]
fn clone_is_independent_in_both_directions() {
    let mut repository = loaded_repository();

    let outcome = repository.clone_profile(
        &ProfileId::from("acme"),
        ProfileId::from("acme-fr"),
        "Acme Studios (FR)",
    );
    assert!(outcome.is_applied());
    assert_eq!(repository.len(), 3);

    let clone = repository
        .profile(&ProfileId::from("acme-fr"))
        .expect("clone inserted");
    assert_eq!(clone.client, "Acme Studios (FR)");

    repository.set_active_profile(ProfileId::from("acme-fr"));
    repository.set_check_penalty(&category("audio"), &check("clipping"), 2.0);

    repository.set_active_profile(ProfileId::from("acme"));
    assert_eq!(active_check(&repository, "audio", "clipping").penalty, 10.0);

    repository.set_check_enabled(&category("audio"), &check("dropout"), false);

    repository.set_active_profile(ProfileId::from("acme-fr"));
    assert_eq!(active_check(&repository, "audio", "clipping").penalty, 2.0);
    assert!(active_check(&repository, "audio", "dropout").enabled);
}

#[test]
fn clone_of_missing_source_or_taken_id_is_ignored() {
    let mut repository = loaded_repository();

    assert_eq!(
        repository.clone_profile(&ProfileId::from("nobody"), ProfileId::from("copy"), "Copy"),
        EditOutcome::Ignored(IgnoredEdit::ProfileNotFound(ProfileId::from("nobody")))
    );
    assert_eq!(
        repository.clone_profile(&ProfileId::from("acme"), ProfileId::from("globex"), "Clash"),
        EditOutcome::Ignored(IgnoredEdit::DuplicateProfileId(ProfileId::from("globex")))
    );
    assert_eq!(repository.len(), 2);
}

struct FixedSource(Vec<Profile>);

impl ProfileSource for FixedSource {
    fn fetch_profiles(&self) -> Result<Vec<Profile>, ProfileSourceError> {
        Ok(self.0.clone())
    }
}

struct OfflineSource;

impl ProfileSource for OfflineSource {
    fn fetch_profiles(&self) -> Result<Vec<Profile>, ProfileSourceError> {
        Err(ProfileSourceError::Unavailable("storage offline".to_string()))
    }
}

#[test]
fn reload_replaces_profiles_from_a_source() {
    let mut repository = loaded_repository();

    let count = repository
        .reload_from(&FixedSource(vec![Profile::template()]))
        .expect("fixed source loads");
    assert_eq!(count, 1);
    assert_eq!(repository.selection().profile, Some(ProfileId::from("template")));

    assert!(repository.reload_from(&OfflineSource).is_err());
    assert_eq!(repository.len(), 1);
}
