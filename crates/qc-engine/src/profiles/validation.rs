//! Strict, explicitly invoked checks for configuration drift.
//!
//! Scoring silently skips anything it cannot resolve. These passes report the same
//! situations so CI and test suites can fail on them.

use std::fmt;

use serde::Serialize;

use super::model::{
    CategoryId, CheckId, Defect, LanguageCode, LanguageConfig, ProductKind, Profile, ProfileId,
    SkipReason,
};

/// Position of a check inside a profile.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct CheckLocation {
    pub profile: ProfileId,
    pub product: ProductKind,
    pub language: LanguageCode,
    pub category: CategoryId,
    pub check: CheckId,
}

impl fmt::Display for CheckLocation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{}/{}/{}/{}/{}",
            self.profile,
            self.product.key(),
            self.language,
            self.category,
            self.check
        )
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum ValidationIssue {
    UnresolvedDefect {
        index: usize,
        category_id: CategoryId,
        check_id: CheckId,
        reason: SkipReason,
    },
    WeightOutOfRange {
        location: CheckLocation,
        weight: f64,
    },
    InvalidPenalty {
        location: CheckLocation,
        penalty: f64,
    },
    UnrecognizedCheckSeverity {
        location: CheckLocation,
        severity: String,
    },
    UnrecognizedSeverityMultiplier {
        profile: ProfileId,
        product: ProductKind,
        language: LanguageCode,
        severity: String,
    },
    InvalidMultiplier {
        profile: ProfileId,
        product: ProductKind,
        language: LanguageCode,
        key: String,
        value: f64,
    },
    UnknownCategoryMultiplier {
        profile: ProfileId,
        product: ProductKind,
        language: LanguageCode,
        category: CategoryId,
    },
    EmptyProfile {
        profile: ProfileId,
    },
}

impl ValidationIssue {
    pub fn summary(&self) -> String {
        match self {
            ValidationIssue::UnresolvedDefect {
                index,
                category_id,
                check_id,
                reason,
            } => format!(
                "defect #{index} references {category_id}/{check_id}: {}",
                reason.label()
            ),
            ValidationIssue::WeightOutOfRange { location, weight } => {
                format!("{location}: weight {weight} outside 0.0..=1.0")
            }
            ValidationIssue::InvalidPenalty { location, penalty } => {
                format!("{location}: penalty {penalty} must be a non-negative number")
            }
            ValidationIssue::UnrecognizedCheckSeverity { location, severity } => {
                format!("{location}: unrecognized severity '{severity}'")
            }
            ValidationIssue::UnrecognizedSeverityMultiplier {
                profile,
                product,
                language,
                severity,
            } => format!(
                "{profile}/{}/{language}: severity multiplier key '{severity}' never matches",
                product.key()
            ),
            ValidationIssue::InvalidMultiplier {
                profile,
                product,
                language,
                key,
                value,
            } => format!(
                "{profile}/{}/{language}: multiplier '{key}' = {value} must be a non-negative number",
                product.key()
            ),
            ValidationIssue::UnknownCategoryMultiplier {
                profile,
                product,
                language,
                category,
            } => format!(
                "{profile}/{}/{language}: category multiplier for unconfigured category '{category}'",
                product.key()
            ),
            ValidationIssue::EmptyProfile { profile } => {
                format!("{profile}: profile defines no products")
            }
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct ValidationReport {
    pub issues: Vec<ValidationIssue>,
}

impl ValidationReport {
    pub fn is_clean(&self) -> bool {
        self.issues.is_empty()
    }

    pub fn len(&self) -> usize {
        self.issues.len()
    }

    pub fn is_empty(&self) -> bool {
        self.issues.is_empty()
    }

    pub fn merge(&mut self, other: ValidationReport) {
        self.issues.extend(other.issues);
    }

    pub fn into_result(self) -> Result<(), ValidationError> {
        if self.is_clean() {
            Ok(())
        } else {
            Err(ValidationError { report: self })
        }
    }
}

#[derive(Debug, thiserror::Error)]
#[error("{} configuration issue(s) found", .report.len())]
pub struct ValidationError {
    pub report: ValidationReport,
}

/// Report every defect whose category or check is not configured. Disabled rules are not
/// reported; switching a rule off is a deliberate choice, not drift.
pub fn validate_defect_references(defects: &[Defect], config: &LanguageConfig) -> ValidationReport {
    let issues = defects
        .iter()
        .enumerate()
        .filter_map(|(index, defect)| {
            let reason = match config.checks.get(&defect.category_id) {
                None => SkipReason::UnknownCategory,
                Some(category) if !category.checks.contains_key(&defect.check_id) => {
                    SkipReason::UnknownCheck
                }
                Some(_) => return None,
            };
            Some(ValidationIssue::UnresolvedDefect {
                index,
                category_id: defect.category_id.clone(),
                check_id: defect.check_id.clone(),
                reason,
            })
        })
        .collect();

    ValidationReport { issues }
}

pub fn validate_profile(profile: &Profile) -> ValidationReport {
    let mut report = ValidationReport::default();

    if profile.products.is_empty() {
        report.issues.push(ValidationIssue::EmptyProfile {
            profile: profile.id.clone(),
        });
    }

    for (product, language, config) in profile.language_configs() {
        validate_language_config(&profile.id, product, language, config, &mut report);
    }

    report
}

pub fn validate_profiles(profiles: &[Profile]) -> ValidationReport {
    let mut report = ValidationReport::default();
    for profile in profiles {
        report.merge(validate_profile(profile));
    }
    report
}

fn validate_language_config(
    profile: &ProfileId,
    product: ProductKind,
    language: &LanguageCode,
    config: &LanguageConfig,
    report: &mut ValidationReport,
) {
    for (category_id, category) in &config.checks {
        for (check_id, check) in &category.checks {
            let location = || CheckLocation {
                profile: profile.clone(),
                product,
                language: language.clone(),
                category: category_id.clone(),
                check: check_id.clone(),
            };

            if !check.weight.is_finite() || !(0.0..=1.0).contains(&check.weight) {
                report.issues.push(ValidationIssue::WeightOutOfRange {
                    location: location(),
                    weight: check.weight,
                });
            }
            if !check.penalty.is_finite() || check.penalty < 0.0 {
                report.issues.push(ValidationIssue::InvalidPenalty {
                    location: location(),
                    penalty: check.penalty,
                });
            }
            if !check.severity.is_recognized() {
                report.issues.push(ValidationIssue::UnrecognizedCheckSeverity {
                    location: location(),
                    severity: check.severity.to_string(),
                });
            }
        }
    }

    let Some(policy) = &config.scoring else {
        return;
    };

    for (severity, value) in &policy.severity_multipliers {
        if !severity.is_recognized() {
            report.issues.push(ValidationIssue::UnrecognizedSeverityMultiplier {
                profile: profile.clone(),
                product,
                language: language.clone(),
                severity: severity.to_string(),
            });
        }
        if !value.is_finite() || *value < 0.0 {
            report.issues.push(ValidationIssue::InvalidMultiplier {
                profile: profile.clone(),
                product,
                language: language.clone(),
                key: severity.to_string(),
                value: *value,
            });
        }
    }

    for (category, value) in &policy.category_multipliers {
        if !config.checks.contains_key(category) {
            report.issues.push(ValidationIssue::UnknownCategoryMultiplier {
                profile: profile.clone(),
                product,
                language: language.clone(),
                category: category.clone(),
            });
        }
        if !value.is_finite() || *value < 0.0 {
            report.issues.push(ValidationIssue::InvalidMultiplier {
                profile: profile.clone(),
                product,
                language: language.clone(),
                key: category.to_string(),
                value: *value,
            });
        }
    }
}
