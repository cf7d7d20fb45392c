//! Deterministic scoring of detected defects against a resolved language configuration.

mod engine;
mod status;

pub use engine::{
    calculate_asset_score, calculate_clip_score, defect_penalty, round_to_tenth, score_clip,
    ClipScore, DefectPenalty, ScoringEngine, MAX_SCORE,
};
pub use status::{get_score_status, ScoreStatus, PASS_THRESHOLD, REVIEW_THRESHOLD};
