use tracing::{debug, info};

use super::edit::{check_penalty, check_weight, EditOutcome, IgnoredEdit};
use super::model::{
    CategoryId, Check, CheckId, LanguageCode, LanguageConfig, MeasurementType, ProductKind, Profile,
    ProfileId, Severity,
};

/// Construction-time settings for a [`ProfileRepository`].
#[derive(Debug, Clone, PartialEq)]
pub struct RepositorySettings {
    pub template_profile_id: ProfileId,
    pub default_product: ProductKind,
    pub default_language: LanguageCode,
}

impl RepositorySettings {
    pub const DEFAULT_TEMPLATE_ID: &'static str = "template";
}

impl Default for RepositorySettings {
    fn default() -> Self {
        Self {
            template_profile_id: ProfileId::from(Self::DEFAULT_TEMPLATE_ID),
            default_product: ProductKind::Subtitles,
            default_language: LanguageCode::from("en"),
        }
    }
}

/// The active `(profile, product, language)` path edits and resolution follow.
#[derive(Debug, Clone, PartialEq)]
pub struct Selection {
    pub profile: Option<ProfileId>,
    pub product: ProductKind,
    pub language: LanguageCode,
}

/// Boundary to whatever storage or transport supplies profile documents.
pub trait ProfileSource: Send + Sync {
    fn fetch_profiles(&self) -> Result<Vec<Profile>, ProfileSourceError>;
}

#[derive(Debug, thiserror::Error)]
pub enum ProfileSourceError {
    #[error("profile documents unavailable: {0}")]
    Unavailable(String),
    #[error(transparent)]
    Ingest(#[from] crate::ingest::IngestError),
}

/// Owner of the loaded profiles and the current selection.
///
/// Resolution returns `None` at the first broken link and every mutation degrades to an
/// `Ignored` outcome instead of failing, so stale selections never take the caller down.
#[derive(Debug, Clone)]
pub struct ProfileRepository {
    settings: RepositorySettings,
    profiles: Vec<Profile>,
    selection: Selection,
}

impl Default for ProfileRepository {
    fn default() -> Self {
        Self::new(RepositorySettings::default())
    }
}

impl ProfileRepository {
    pub fn new(settings: RepositorySettings) -> Self {
        let selection = Selection {
            profile: None,
            product: settings.default_product,
            language: settings.default_language.clone(),
        };
        Self {
            settings,
            profiles: Vec::new(),
            selection,
        }
    }

    pub fn settings(&self) -> &RepositorySettings {
        &self.settings
    }

    /// Replace the collection and reset the active profile to the template (or the first
    /// loaded profile when no template is present). Product and language are kept.
    pub fn load_profiles(&mut self, profiles: Vec<Profile>) {
        self.profiles = profiles;
        self.selection.profile = self
            .profiles
            .iter()
            .find(|profile| profile.id == self.settings.template_profile_id)
            .or_else(|| self.profiles.first())
            .map(|profile| profile.id.clone());

        info!(
            count = self.profiles.len(),
            active = self.selection.profile.as_ref().map(ProfileId::as_str),
            "profiles loaded"
        );
    }

    pub fn reload_from(&mut self, source: &dyn ProfileSource) -> Result<usize, ProfileSourceError> {
        let profiles = source.fetch_profiles()?;
        let count = profiles.len();
        self.load_profiles(profiles);
        Ok(count)
    }

    pub fn profiles(&self) -> &[Profile] {
        &self.profiles
    }

    pub fn len(&self) -> usize {
        self.profiles.len()
    }

    pub fn is_empty(&self) -> bool {
        self.profiles.is_empty()
    }

    pub fn profile(&self, id: &ProfileId) -> Option<&Profile> {
        self.profiles.iter().find(|profile| profile.id == *id)
    }

    pub fn selection(&self) -> &Selection {
        &self.selection
    }

    pub fn set_active_profile(&mut self, id: ProfileId) {
        self.selection.profile = Some(id);
    }

    pub fn set_active_product(&mut self, product: ProductKind) {
        self.selection.product = product;
    }

    pub fn set_active_language(&mut self, language: LanguageCode) {
        self.selection.language = language;
    }

    pub fn active_profile(&self) -> Option<&Profile> {
        self.selection
            .profile
            .as_ref()
            .and_then(|id| self.profile(id))
    }

    pub fn active_language_config(&self) -> Option<&LanguageConfig> {
        self.active_profile().and_then(|profile| {
            profile.language_config(self.selection.product, &self.selection.language)
        })
    }

    pub fn set_check_enabled(&mut self, category: &CategoryId, check: &CheckId, enabled: bool) -> EditOutcome {
        self.edit_active_check(category, check, |target| {
            target.enabled = enabled;
            Ok(())
        })
    }

    pub fn set_check_severity(&mut self, category: &CategoryId, check: &CheckId, severity: Severity) -> EditOutcome {
        self.edit_active_check(category, check, |target| {
            target.severity = severity;
            Ok(())
        })
    }

    /// Weights outside `0.0..=1.0` are rejected here; bulk-loaded documents are only
    /// reported by validation.
    pub fn set_check_weight(&mut self, category: &CategoryId, check: &CheckId, weight: f64) -> EditOutcome {
        self.edit_active_check(category, check, |target| {
            target.weight = check_weight(weight)?;
            Ok(())
        })
    }

    pub fn set_check_penalty(&mut self, category: &CategoryId, check: &CheckId, penalty: f64) -> EditOutcome {
        self.edit_active_check(category, check, |target| {
            target.penalty = check_penalty(penalty)?;
            Ok(())
        })
    }

    pub fn set_check_measurement_type(
        &mut self,
        category: &CategoryId,
        check: &CheckId,
        measurement_type: MeasurementType,
    ) -> EditOutcome {
        self.edit_active_check(category, check, |target| {
            target.measurement_type = measurement_type;
            Ok(())
        })
    }

    /// Deep-copy `source` under a new id and client name. Ignored when the source is not
    /// loaded or the new id is already taken.
    pub fn clone_profile(&mut self, source: &ProfileId, new_id: ProfileId, new_client: &str) -> EditOutcome {
        if self.profile(&new_id).is_some() {
            debug!(%new_id, "clone skipped, id already taken");
            return EditOutcome::Ignored(IgnoredEdit::DuplicateProfileId(new_id));
        }

        let Some(original) = self.profile(source) else {
            debug!(%source, "clone skipped, source not loaded");
            return EditOutcome::Ignored(IgnoredEdit::ProfileNotFound(source.clone()));
        };

        let mut copy = original.clone();
        copy.id = new_id;
        copy.client = new_client.to_string();

        info!(%source, clone = %copy.id, "profile cloned");
        self.profiles.push(copy);
        EditOutcome::Applied
    }

    fn edit_active_check<F>(&mut self, category: &CategoryId, check: &CheckId, apply: F) -> EditOutcome
    where
        F: FnOnce(&mut Check) -> Result<(), super::edit::RejectedEdit>,
    {
        let outcome = match self.active_check_mut(category, check) {
            Ok(target) => match apply(target) {
                Ok(()) => EditOutcome::Applied,
                Err(rejected) => EditOutcome::Rejected(rejected),
            },
            Err(ignored) => EditOutcome::Ignored(ignored),
        };

        if !outcome.is_applied() {
            debug!(%category, %check, outcome = %outcome.summary(), "check edit not applied");
        }
        outcome
    }

    fn active_check_mut(&mut self, category: &CategoryId, check: &CheckId) -> Result<&mut Check, IgnoredEdit> {
        let selection = &self.selection;
        let profile_id = selection.profile.as_ref().ok_or(IgnoredEdit::NoActiveProfile)?;
        let profile = self
            .profiles
            .iter_mut()
            .find(|profile| profile.id == *profile_id)
            .ok_or_else(|| IgnoredEdit::ProfileNotFound(profile_id.clone()))?;
        let product = profile
            .products
            .get_mut(&selection.product)
            .ok_or(IgnoredEdit::ProductMissing(selection.product))?;
        let language = product
            .languages
            .get_mut(&selection.language)
            .ok_or_else(|| IgnoredEdit::LanguageMissing(selection.language.clone()))?;
        let category_config = language
            .checks
            .get_mut(category)
            .ok_or_else(|| IgnoredEdit::CategoryMissing(category.clone()))?;
        category_config
            .checks
            .get_mut(check)
            .ok_or_else(|| IgnoredEdit::CheckMissing(check.clone()))
    }
}
