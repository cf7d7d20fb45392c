use serde::{Deserialize, Serialize};

/// Scores at or above this pass without review.
pub const PASS_THRESHOLD: f64 = 90.0;
/// Scores at or above this (and below [`PASS_THRESHOLD`]) need an operator look.
pub const REVIEW_THRESHOLD: f64 = 70.0;

/// Three-way classification of a clip or asset score.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum ScoreStatus {
    Pass,
    Review,
    Fail,
}

impl ScoreStatus {
    pub fn from_score(score: f64) -> Self {
        if score >= PASS_THRESHOLD {
            ScoreStatus::Pass
        } else if score >= REVIEW_THRESHOLD {
            ScoreStatus::Review
        } else {
            ScoreStatus::Fail
        }
    }

    pub const fn label(self) -> &'static str {
        match self {
            ScoreStatus::Pass => "PASS",
            ScoreStatus::Review => "REVIEW",
            ScoreStatus::Fail => "FAIL",
        }
    }
}

pub fn get_score_status(score: f64) -> ScoreStatus {
    ScoreStatus::from_score(score)
}
