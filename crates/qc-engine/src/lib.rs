//! QC profile configuration and scoring for subtitle and dub review.
//!
//! Profiles describe which checks apply per client, product and language. The scoring
//! engine turns already-detected defects into a 0-100 quality score, and the review
//! module aggregates those scores into asset summaries and a prioritised queue.

pub mod config;
pub mod error;
pub mod ingest;
pub mod profiles;
pub mod review;
pub mod scoring;
pub mod telemetry;

pub use profiles::{
    Category, CategoryId, Check, CheckId, Defect, EditOutcome, LanguageCode, LanguageConfig,
    MeasurementType, Product, ProductKind, Profile, ProfileId, ProfileRepository, ScoringPolicy,
    Severity,
};
pub use review::{build_review_queue, ReviewQueue, ReviewQueueItem, ScoredClip};
pub use scoring::{calculate_asset_score, calculate_clip_score, get_score_status, ScoreStatus};
