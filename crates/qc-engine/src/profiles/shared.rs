use std::sync::{Arc, RwLock, RwLockReadGuard, RwLockWriteGuard};

use super::edit::EditOutcome;
use super::model::{LanguageConfig, Profile, ProfileId};
use super::repository::ProfileRepository;

/// Thread-safe handle over a [`ProfileRepository`] for multi-request deployments.
///
/// Readers receive owned snapshots, so scoring never runs while holding the lock. Every
/// mutation, including `clone_profile`, takes the write lock and therefore sees a
/// consistent source profile.
#[derive(Debug, Clone, Default)]
pub struct SharedProfileRepository {
    inner: Arc<RwLock<ProfileRepository>>,
}

#[derive(Debug, thiserror::Error)]
pub enum SharedRepositoryError {
    #[error("profile repository lock poisoned")]
    Poisoned,
}

impl SharedProfileRepository {
    pub fn new(repository: ProfileRepository) -> Self {
        Self {
            inner: Arc::new(RwLock::new(repository)),
        }
    }

    pub fn read(&self) -> Result<RwLockReadGuard<'_, ProfileRepository>, SharedRepositoryError> {
        self.inner.read().map_err(|_| SharedRepositoryError::Poisoned)
    }

    pub fn write(&self) -> Result<RwLockWriteGuard<'_, ProfileRepository>, SharedRepositoryError> {
        self.inner.write().map_err(|_| SharedRepositoryError::Poisoned)
    }

    pub fn active_language_config(&self) -> Result<Option<LanguageConfig>, SharedRepositoryError> {
        Ok(self.read()?.active_language_config().cloned())
    }

    pub fn profile_snapshot(&self, id: &ProfileId) -> Result<Option<Profile>, SharedRepositoryError> {
        Ok(self.read()?.profile(id).cloned())
    }

    /// Run a mutation under the write lock.
    pub fn edit<F>(&self, apply: F) -> Result<EditOutcome, SharedRepositoryError>
    where
        F: FnOnce(&mut ProfileRepository) -> EditOutcome,
    {
        let mut guard = self.write()?;
        Ok(apply(&mut guard))
    }
}
