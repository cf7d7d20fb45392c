use crate::profiles::{LanguageCode, ProductKind, ProfileId, RepositorySettings};
use crate::review::ReviewQueueOptions;
use std::env;
use std::fmt;

/// Distinguishes runtime behavior for different stages of the tool.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AppEnvironment {
    Development,
    Test,
    Production,
}

impl AppEnvironment {
    fn from_str(value: &str) -> Self {
        match value.trim().to_ascii_lowercase().as_str() {
            "prod" | "production" => Self::Production,
            "test" | "ci" => Self::Test,
            _ => Self::Development,
        }
    }
}

/// Top-level configuration for the review tooling.
#[derive(Debug, Clone)]
pub struct AppConfig {
    pub environment: AppEnvironment,
    pub telemetry: TelemetryConfig,
    pub repository: RepositorySettings,
    pub review: ReviewQueueOptions,
}

impl AppConfig {
    pub fn load() -> Result<Self, ConfigError> {
        dotenvy::dotenv().ok();

        let environment = AppEnvironment::from_str(
            &env::var("QC_ENV").unwrap_or_else(|_| "development".to_string()),
        );

        let log_level = env::var("QC_LOG_LEVEL").unwrap_or_else(|_| "info".to_string());

        let template_profile_id = env::var("QC_TEMPLATE_PROFILE_ID")
            .unwrap_or_else(|_| RepositorySettings::DEFAULT_TEMPLATE_ID.to_string());
        if template_profile_id.trim().is_empty() {
            return Err(ConfigError::EmptyTemplateId);
        }

        let product_raw = env::var("QC_DEFAULT_PRODUCT").unwrap_or_else(|_| "subtitles".to_string());
        let default_product = ProductKind::from_key(&product_raw)
            .ok_or(ConfigError::UnknownProduct { value: product_raw })?;

        let default_language = env::var("QC_DEFAULT_LANGUAGE").unwrap_or_else(|_| "en".to_string());

        let pass_threshold = match env::var("QC_REVIEW_PASS_THRESHOLD") {
            Ok(raw) => raw
                .trim()
                .parse::<f64>()
                .ok()
                .filter(|value| (0.0..=100.0).contains(value))
                .ok_or(ConfigError::InvalidPassThreshold { value: raw })?,
            Err(_) => ReviewQueueOptions::DEFAULT_PASS_THRESHOLD,
        };

        Ok(Self {
            environment,
            telemetry: TelemetryConfig { log_level },
            repository: RepositorySettings {
                template_profile_id: ProfileId(template_profile_id.trim().to_string()),
                default_product,
                default_language: LanguageCode(default_language.trim().to_string()),
            },
            review: ReviewQueueOptions { pass_threshold },
        })
    }
}

/// Tracing controls.
#[derive(Debug, Clone)]
pub struct TelemetryConfig {
    pub log_level: String,
}

#[derive(Debug)]
pub enum ConfigError {
    EmptyTemplateId,
    UnknownProduct { value: String },
    InvalidPassThreshold { value: String },
}

impl fmt::Display for ConfigError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ConfigError::EmptyTemplateId => {
                write!(f, "QC_TEMPLATE_PROFILE_ID must not be empty")
            }
            ConfigError::UnknownProduct { value } => write!(
                f,
                "QC_DEFAULT_PRODUCT '{value}' must be one of dubbed_audio, subtitles, sdh, closed_captions"
            ),
            ConfigError::InvalidPassThreshold { value } => write!(
                f,
                "QC_REVIEW_PASS_THRESHOLD '{value}' must be a number between 0 and 100"
            ),
        }
    }
}

impl std::error::Error for ConfigError {}
