use std::collections::BTreeMap;
use std::fmt;

use serde::{Deserialize, Serialize};

/// Stable identifier of a profile document.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ProfileId(pub String);

/// Key of a defect category inside a language configuration (e.g. `audio_deficiency`).
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct CategoryId(pub String);

/// Key of an individual check inside a category (e.g. `clipping`).
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct CheckId(pub String);

/// Language tag as supplied by the profile documents; compared verbatim.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct LanguageCode(pub String);

macro_rules! string_key {
    ($name:ident) => {
        impl $name {
            pub fn as_str(&self) -> &str {
                &self.0
            }
        }

        impl From<&str> for $name {
            fn from(value: &str) -> Self {
                Self(value.to_string())
            }
        }

        impl From<String> for $name {
            fn from(value: String) -> Self {
                Self(value)
            }
        }

        impl fmt::Display for $name {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                f.write_str(&self.0)
            }
        }
    };
}

string_key!(ProfileId);
string_key!(CategoryId);
string_key!(CheckId);
string_key!(LanguageCode);

/// Content type a set of language configurations applies to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ProductKind {
    DubbedAudio,
    Subtitles,
    Sdh,
    ClosedCaptions,
}

impl ProductKind {
    pub const fn ordered() -> [Self; 4] {
        [
            Self::DubbedAudio,
            Self::Subtitles,
            Self::Sdh,
            Self::ClosedCaptions,
        ]
    }

    pub const fn key(self) -> &'static str {
        match self {
            Self::DubbedAudio => "dubbed_audio",
            Self::Subtitles => "subtitles",
            Self::Sdh => "sdh",
            Self::ClosedCaptions => "closed_captions",
        }
    }

    pub const fn label(self) -> &'static str {
        match self {
            Self::DubbedAudio => "Dubbed Audio",
            Self::Subtitles => "Subtitles",
            Self::Sdh => "SDH",
            Self::ClosedCaptions => "Closed Captions",
        }
    }

    pub fn from_key(value: &str) -> Option<Self> {
        let value = value.trim();
        Self::ordered()
            .into_iter()
            .find(|kind| kind.key().eq_ignore_ascii_case(value))
    }
}

/// Defect severity. Parsing is an exact, case-sensitive match on `ERROR`, `WARNING` and
/// `INFO`; any other literal is kept as `Unrecognized` so it simply misses the multiplier
/// table instead of failing the whole document.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(from = "String", into = "String")]
pub enum Severity {
    Error,
    Warning,
    Info,
    Unrecognized(String),
}

impl Severity {
    pub fn known() -> [Self; 3] {
        [Self::Error, Self::Warning, Self::Info]
    }

    pub fn as_str(&self) -> &str {
        match self {
            Severity::Error => "ERROR",
            Severity::Warning => "WARNING",
            Severity::Info => "INFO",
            Severity::Unrecognized(raw) => raw,
        }
    }

    /// Queue priority, lower sorts first.
    pub fn rank(&self) -> u8 {
        match self {
            Severity::Error => 0,
            Severity::Warning => 1,
            Severity::Info => 2,
            Severity::Unrecognized(_) => 3,
        }
    }

    pub fn is_recognized(&self) -> bool {
        !matches!(self, Severity::Unrecognized(_))
    }
}

impl From<String> for Severity {
    fn from(value: String) -> Self {
        match value.as_str() {
            "ERROR" => Severity::Error,
            "WARNING" => Severity::Warning,
            "INFO" => Severity::Info,
            _ => Severity::Unrecognized(value),
        }
    }
}

impl From<&str> for Severity {
    fn from(value: &str) -> Self {
        Severity::from(value.to_string())
    }
}

impl From<Severity> for String {
    fn from(value: Severity) -> Self {
        match value {
            Severity::Unrecognized(raw) => raw,
            known => known.as_str().to_string(),
        }
    }
}

impl fmt::Display for Severity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// How the upstream detector decided pass/fail. Carried for display only.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum MeasurementType {
    #[default]
    Binary,
    Threshold,
    Range,
    Percentage,
}

impl MeasurementType {
    pub const fn label(self) -> &'static str {
        match self {
            Self::Binary => "binary",
            Self::Threshold => "threshold",
            Self::Range => "range",
            Self::Percentage => "percentage",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ValueRange {
    pub min: f64,
    pub max: f64,
}

/// Operator-facing descriptions of what pass, warn and fail look like for a check.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AcceptableLevels {
    pub pass: String,
    pub warn: String,
    pub fail: String,
}

fn enabled_by_default() -> bool {
    true
}

/// Atomic configurable rule.
///
/// `severity` is the default assigned to new defects of this check; scoring always uses
/// the severity carried by the observed defect.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Check {
    #[serde(default = "enabled_by_default")]
    pub enabled: bool,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub label: Option<String>,
    pub severity: Severity,
    pub weight: f64,
    pub penalty: f64,
    #[serde(default)]
    pub measurement_type: MeasurementType,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub threshold: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub range: Option<ValueRange>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub unit: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub acceptable_levels: Option<AcceptableLevels>,
}

impl Check {
    pub fn new(severity: Severity, weight: f64, penalty: f64) -> Self {
        Self {
            enabled: true,
            label: None,
            severity,
            weight,
            penalty,
            measurement_type: MeasurementType::Binary,
            threshold: None,
            range: None,
            unit: None,
            acceptable_levels: None,
        }
    }

    pub fn labeled(mut self, label: &str) -> Self {
        self.label = Some(label.to_string());
        self
    }

    pub fn threshold(mut self, threshold: f64, unit: &str) -> Self {
        self.measurement_type = MeasurementType::Threshold;
        self.threshold = Some(threshold);
        self.unit = Some(unit.to_string());
        self
    }

    pub fn range(mut self, min: f64, max: f64, unit: &str) -> Self {
        self.measurement_type = MeasurementType::Range;
        self.range = Some(ValueRange { min, max });
        self.unit = Some(unit.to_string());
        self
    }

    pub fn percentage(mut self, threshold: f64) -> Self {
        self.measurement_type = MeasurementType::Percentage;
        self.threshold = Some(threshold);
        self.unit = Some("%".to_string());
        self
    }

    pub fn levels(mut self, pass: &str, warn: &str, fail: &str) -> Self {
        self.acceptable_levels = Some(AcceptableLevels {
            pass: pass.to_string(),
            warn: warn.to_string(),
            fail: fail.to_string(),
        });
        self
    }

    pub fn disabled(mut self) -> Self {
        self.enabled = false;
        self
    }
}

/// Named group of related checks that can be switched off as a whole.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Category {
    #[serde(default = "enabled_by_default")]
    pub enabled: bool,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub label: Option<String>,
    #[serde(default)]
    pub checks: BTreeMap<CheckId, Check>,
}

impl Category {
    pub fn new(label: &str) -> Self {
        Self {
            enabled: true,
            label: Some(label.to_string()),
            checks: BTreeMap::new(),
        }
    }

    pub fn with_check(mut self, id: &str, check: Check) -> Self {
        self.checks.insert(CheckId::from(id), check);
        self
    }
}

/// Global multiplier tables layered on top of each check's weight and penalty.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ScoringPolicy {
    #[serde(default)]
    pub severity_multipliers: BTreeMap<Severity, f64>,
    #[serde(default)]
    pub category_multipliers: BTreeMap<CategoryId, f64>,
}

impl ScoringPolicy {
    pub const DEFAULT_MULTIPLIER: f64 = 1.0;

    /// `ERROR` 1.5, `WARNING` 1.0, `INFO` 0.5, no category weighting.
    pub fn reference() -> Self {
        let severity_multipliers = BTreeMap::from([
            (Severity::Error, 1.5),
            (Severity::Warning, 1.0),
            (Severity::Info, 0.5),
        ]);
        Self {
            severity_multipliers,
            category_multipliers: BTreeMap::new(),
        }
    }

    pub fn severity_multiplier(&self, severity: &Severity) -> f64 {
        self.severity_multipliers
            .get(severity)
            .copied()
            .unwrap_or(Self::DEFAULT_MULTIPLIER)
    }

    pub fn category_multiplier(&self, category: &CategoryId) -> f64 {
        self.category_multipliers
            .get(category)
            .copied()
            .unwrap_or(Self::DEFAULT_MULTIPLIER)
    }

    pub fn with_category_multiplier(mut self, category: &str, multiplier: f64) -> Self {
        self.category_multipliers
            .insert(CategoryId::from(category), multiplier);
        self
    }
}

/// Why a defect could not be matched to an enabled check.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum SkipReason {
    UnknownCategory,
    CategoryDisabled,
    UnknownCheck,
    CheckDisabled,
}

impl SkipReason {
    pub const fn label(self) -> &'static str {
        match self {
            SkipReason::UnknownCategory => "category not configured",
            SkipReason::CategoryDisabled => "category disabled",
            SkipReason::UnknownCheck => "check not configured",
            SkipReason::CheckDisabled => "check disabled",
        }
    }

    /// Broken references, as opposed to rules an operator switched off.
    pub const fn is_unresolved(self) -> bool {
        matches!(self, SkipReason::UnknownCategory | SkipReason::UnknownCheck)
    }
}

/// Rules and scoring policy for one product in one language.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct LanguageConfig {
    #[serde(default)]
    pub checks: BTreeMap<CategoryId, Category>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub scoring: Option<ScoringPolicy>,
}

impl LanguageConfig {
    pub fn with_category(mut self, id: &str, category: Category) -> Self {
        self.checks.insert(CategoryId::from(id), category);
        self
    }

    pub fn with_scoring(mut self, scoring: ScoringPolicy) -> Self {
        self.scoring = Some(scoring);
        self
    }

    pub fn category(&self, id: &CategoryId) -> Option<&Category> {
        self.checks.get(id)
    }

    /// Follow `category -> check`, reporting the first missing or disabled link.
    pub fn resolve_check(&self, category: &CategoryId, check: &CheckId) -> Result<&Check, SkipReason> {
        let category = self.checks.get(category).ok_or(SkipReason::UnknownCategory)?;
        if !category.enabled {
            return Err(SkipReason::CategoryDisabled);
        }
        let check = category.checks.get(check).ok_or(SkipReason::UnknownCheck)?;
        if !check.enabled {
            return Err(SkipReason::CheckDisabled);
        }
        Ok(check)
    }

    pub fn check_mut(&mut self, category: &CategoryId, check: &CheckId) -> Option<&mut Check> {
        self.checks
            .get_mut(category)
            .and_then(|category| category.checks.get_mut(check))
    }
}

/// Per-product collection of language configurations.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct Product {
    #[serde(default)]
    pub languages: BTreeMap<LanguageCode, LanguageConfig>,
}

impl Product {
    pub fn with_language(mut self, code: &str, config: LanguageConfig) -> Self {
        self.languages.insert(LanguageCode::from(code), config);
        self
    }
}

/// Named configuration root for one client. Unit of cloning and storage.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Profile {
    pub id: ProfileId,
    pub client: String,
    #[serde(default)]
    pub products: BTreeMap<ProductKind, Product>,
}

impl Profile {
    pub fn new(id: &str, client: &str) -> Self {
        Self {
            id: ProfileId::from(id),
            client: client.to_string(),
            products: BTreeMap::new(),
        }
    }

    pub fn with_product(mut self, kind: ProductKind, product: Product) -> Self {
        self.products.insert(kind, product);
        self
    }

    pub fn language_config(&self, product: ProductKind, language: &LanguageCode) -> Option<&LanguageConfig> {
        self.products
            .get(&product)
            .and_then(|product| product.languages.get(language))
    }

    pub fn language_config_mut(
        &mut self,
        product: ProductKind,
        language: &LanguageCode,
    ) -> Option<&mut LanguageConfig> {
        self.products
            .get_mut(&product)
            .and_then(|product| product.languages.get_mut(language))
    }

    /// Every language configuration, tagged with its product and language.
    pub fn language_configs(&self) -> impl Iterator<Item = (ProductKind, &LanguageCode, &LanguageConfig)> {
        self.products.iter().flat_map(|(kind, product)| {
            product
                .languages
                .iter()
                .map(move |(code, config)| (*kind, code, config))
        })
    }
}

/// Defect observed by an upstream detector. References into the configuration are not
/// guaranteed to resolve.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Defect {
    pub category_id: CategoryId,
    pub check_id: CheckId,
    pub severity: Severity,
    /// Offset from the start of the clip, in seconds.
    pub time: f64,
    #[serde(default)]
    pub description: String,
}

impl Defect {
    pub fn new(category: &str, check: &str, severity: Severity, time: f64, description: &str) -> Self {
        Self {
            category_id: CategoryId::from(category),
            check_id: CheckId::from(check),
            severity,
            time,
            description: description.to_string(),
        }
    }
}
