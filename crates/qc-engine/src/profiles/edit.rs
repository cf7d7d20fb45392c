use serde::Serialize;

use super::model::{CategoryId, CheckId, LanguageCode, MeasurementType, ProductKind, ProfileId, Severity};

/// Result of a targeted repository mutation.
///
/// Edits never fail loudly: a stale selection or an unknown check leaves the repository
/// untouched and reports `Ignored`, an out-of-range value reports `Rejected`.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "outcome", content = "reason", rename_all = "snake_case")]
pub enum EditOutcome {
    Applied,
    Ignored(IgnoredEdit),
    Rejected(RejectedEdit),
}

impl EditOutcome {
    pub fn is_applied(&self) -> bool {
        matches!(self, EditOutcome::Applied)
    }

    pub fn summary(&self) -> String {
        match self {
            EditOutcome::Applied => "applied".to_string(),
            EditOutcome::Ignored(reason) => format!("ignored: {}", reason.summary()),
            EditOutcome::Rejected(reason) => format!("rejected: {}", reason.summary()),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum IgnoredEdit {
    NoActiveProfile,
    ProfileNotFound(ProfileId),
    ProductMissing(ProductKind),
    LanguageMissing(LanguageCode),
    CategoryMissing(CategoryId),
    CheckMissing(CheckId),
    DuplicateProfileId(ProfileId),
}

impl IgnoredEdit {
    pub fn summary(&self) -> String {
        match self {
            IgnoredEdit::NoActiveProfile => "no active profile selected".to_string(),
            IgnoredEdit::ProfileNotFound(id) => format!("profile '{id}' not loaded"),
            IgnoredEdit::ProductMissing(kind) => {
                format!("profile has no {} product", kind.label())
            }
            IgnoredEdit::LanguageMissing(code) => format!("product has no '{code}' language"),
            IgnoredEdit::CategoryMissing(id) => format!("category '{id}' not configured"),
            IgnoredEdit::CheckMissing(id) => format!("check '{id}' not configured"),
            IgnoredEdit::DuplicateProfileId(id) => format!("profile '{id}' already exists"),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum RejectedEdit {
    NonFinite,
    WeightOutOfRange(f64),
    NegativePenalty(f64),
}

impl RejectedEdit {
    pub fn summary(&self) -> String {
        match self {
            RejectedEdit::NonFinite => "value must be a finite number".to_string(),
            RejectedEdit::WeightOutOfRange(value) => {
                format!("weight {value} outside 0.0..=1.0")
            }
            RejectedEdit::NegativePenalty(value) => format!("penalty {value} is negative"),
        }
    }
}

pub(crate) fn check_weight(weight: f64) -> Result<f64, RejectedEdit> {
    if !weight.is_finite() {
        return Err(RejectedEdit::NonFinite);
    }
    if !(0.0..=1.0).contains(&weight) {
        return Err(RejectedEdit::WeightOutOfRange(weight));
    }
    Ok(weight)
}

pub(crate) fn check_penalty(penalty: f64) -> Result<f64, RejectedEdit> {
    if !penalty.is_finite() {
        return Err(RejectedEdit::NonFinite);
    }
    if penalty < 0.0 {
        return Err(RejectedEdit::NegativePenalty(penalty));
    }
    Ok(penalty)
}

/// Numeric field coercion for editing front-ends: anything that is not a finite number
/// becomes `0.0`.
pub fn coerce_numeric_input(raw: &str) -> f64 {
    raw.trim()
        .parse::<f64>()
        .ok()
        .filter(|value| value.is_finite())
        .unwrap_or(0.0)
}

/// Severity picker input. Exact literals only, so `error` is not `ERROR`.
pub fn parse_severity_input(raw: &str) -> Option<Severity> {
    Some(Severity::from(raw.trim())).filter(Severity::is_recognized)
}

pub fn parse_measurement_type_input(raw: &str) -> Option<MeasurementType> {
    match raw.trim().to_ascii_lowercase().as_str() {
        "binary" => Some(MeasurementType::Binary),
        "threshold" => Some(MeasurementType::Threshold),
        "range" => Some(MeasurementType::Range),
        "percentage" | "percent" => Some(MeasurementType::Percentage),
        _ => None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn coerces_garbage_to_zero() {
        assert_eq!(coerce_numeric_input("0.75"), 0.75);
        assert_eq!(coerce_numeric_input("  12 "), 12.0);
        assert_eq!(coerce_numeric_input("ten"), 0.0);
        assert_eq!(coerce_numeric_input(""), 0.0);
        assert_eq!(coerce_numeric_input("NaN"), 0.0);
        assert_eq!(coerce_numeric_input("inf"), 0.0);
    }

    #[test]
    fn severity_input_is_case_sensitive() {
        assert_eq!(parse_severity_input("ERROR"), Some(Severity::Error));
        assert_eq!(parse_severity_input(" INFO "), Some(Severity::Info));
        assert_eq!(parse_severity_input("error"), None);
    }

    #[test]
    fn weight_and_penalty_bounds() {
        assert_eq!(check_weight(0.0), Ok(0.0));
        assert_eq!(check_weight(1.0), Ok(1.0));
        assert_eq!(check_weight(1.2), Err(RejectedEdit::WeightOutOfRange(1.2)));
        assert_eq!(check_weight(f64::NAN), Err(RejectedEdit::NonFinite));
        assert_eq!(check_penalty(25.0), Ok(25.0));
        assert_eq!(check_penalty(-1.0), Err(RejectedEdit::NegativePenalty(-1.0)));
    }
}
