//! Profile configuration: the typed rule model, the repository that owns loaded profiles
//! and the active selection, and the strict validation passes.

mod catalog;
pub mod edit;
pub mod model;
pub mod repository;
mod shared;
pub mod validation;

#[cfg(test)]
mod tests;

pub use catalog::{standard_language_config, TEMPLATE_LANGUAGES};
pub use edit::{
    coerce_numeric_input, parse_measurement_type_input, parse_severity_input, EditOutcome,
    IgnoredEdit, RejectedEdit,
};
pub use model::{
    AcceptableLevels, Category, CategoryId, Check, CheckId, Defect, LanguageCode, LanguageConfig,
    MeasurementType, Product, ProductKind, Profile, ProfileId, ScoringPolicy, Severity, SkipReason,
    ValueRange,
};
pub use repository::{
    ProfileRepository, ProfileSource, ProfileSourceError, RepositorySettings, Selection,
};
pub use shared::{SharedProfileRepository, SharedRepositoryError};
pub use validation::{
    validate_defect_references, validate_profile, validate_profiles, CheckLocation,
    ValidationError, ValidationIssue, ValidationReport,
};
