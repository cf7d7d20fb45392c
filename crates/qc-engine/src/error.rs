use crate::config::ConfigError;
use crate::ingest::IngestError;
use crate::profiles::{SharedRepositoryError, ValidationError};
use crate::telemetry::TelemetryError;
use std::fmt;

#[derive(Debug)]
pub enum AppError {
    Config(ConfigError),
    Telemetry(TelemetryError),
    Io(std::io::Error),
    Ingest(IngestError),
    Validation(ValidationError),
    Repository(SharedRepositoryError),
    Selection(String),
}

impl fmt::Display for AppError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            AppError::Config(err) => write!(f, "configuration error: {}", err),
            AppError::Telemetry(err) => write!(f, "telemetry error: {}", err),
            AppError::Io(err) => write!(f, "io error: {}", err),
            AppError::Ingest(err) => write!(f, "ingest error: {}", err),
            AppError::Validation(err) => write!(f, "validation error: {}", err),
            AppError::Repository(err) => write!(f, "repository error: {}", err),
            AppError::Selection(detail) => write!(f, "selection error: {}", detail),
        }
    }
}

impl std::error::Error for AppError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            AppError::Config(err) => Some(err),
            AppError::Telemetry(err) => Some(err),
            AppError::Io(err) => Some(err),
            AppError::Ingest(err) => Some(err),
            AppError::Validation(err) => Some(err),
            AppError::Repository(err) => Some(err),
            AppError::Selection(_) => None,
        }
    }
}

impl AppError {
    /// Process exit code for command line front-ends.
    pub fn exit_code(&self) -> i32 {
        match self {
            AppError::Validation(_) => 2,
            AppError::Ingest(_) | AppError::Selection(_) => 3,
            AppError::Config(_)
            | AppError::Telemetry(_)
            | AppError::Io(_)
            | AppError::Repository(_) => 1,
        }
    }
}

impl From<ConfigError> for AppError {
    fn from(value: ConfigError) -> Self {
        Self::Config(value)
    }
}

impl From<TelemetryError> for AppError {
    fn from(value: TelemetryError) -> Self {
        Self::Telemetry(value)
    }
}

impl From<std::io::Error> for AppError {
    fn from(value: std::io::Error) -> Self {
        Self::Io(value)
    }
}

impl From<IngestError> for AppError {
    fn from(value: IngestError) -> Self {
        Self::Ingest(value)
    }
}

impl From<ValidationError> for AppError {
    fn from(value: ValidationError) -> Self {
        Self::Validation(value)
    }
}

impl From<SharedRepositoryError> for AppError {
    fn from(value: SharedRepositoryError) -> Self {
        Self::Repository(value)
    }
}
