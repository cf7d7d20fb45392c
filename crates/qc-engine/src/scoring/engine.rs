use serde::Serialize;
use tracing::{debug, trace, warn};

use super::status::ScoreStatus;
use crate::profiles::{CategoryId, CheckId, Defect, LanguageConfig, ScoringPolicy, Severity, SkipReason};

pub const MAX_SCORE: f64 = 100.0;

/// Points one defect cost, or why it cost nothing.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct DefectPenalty {
    pub index: usize,
    pub category_id: CategoryId,
    pub check_id: CheckId,
    pub severity: Severity,
    pub points: f64,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub skipped: Option<SkipReason>,
}

/// Clip score together with the per-defect breakdown it was built from.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ClipScore {
    pub score: f64,
    pub total_penalty: f64,
    /// `false` when the configuration carries no scoring policy.
    pub policy_applied: bool,
    pub penalties: Vec<DefectPenalty>,
}

impl ClipScore {
    fn perfect(policy_applied: bool) -> Self {
        Self {
            score: MAX_SCORE,
            total_penalty: 0.0,
            policy_applied,
            penalties: Vec::new(),
        }
    }

    pub fn status(&self) -> ScoreStatus {
        ScoreStatus::from_score(self.score)
    }

    pub fn skipped(&self) -> impl Iterator<Item = &DefectPenalty> {
        self.penalties.iter().filter(|penalty| penalty.skipped.is_some())
    }
}

/// Stateless scorer bound to one resolved language configuration.
#[derive(Debug, Clone)]
pub struct ScoringEngine {
    config: LanguageConfig,
}

impl ScoringEngine {
    pub fn new(config: LanguageConfig) -> Self {
        Self { config }
    }

    pub fn config(&self) -> &LanguageConfig {
        &self.config
    }

    pub fn score(&self, defects: &[Defect]) -> ClipScore {
        score_clip(defects, &self.config)
    }
}

/// `weight × severity multiplier × category multiplier × penalty`, or the reason the
/// defect contributes nothing.
pub fn defect_penalty(defect: &Defect, config: &LanguageConfig, policy: &ScoringPolicy) -> Result<f64, SkipReason> {
    let check = config.resolve_check(&defect.category_id, &defect.check_id)?;
    Ok(check.weight
        * policy.severity_multiplier(&defect.severity)
        * policy.category_multiplier(&defect.category_id)
        * check.penalty)
}

pub fn score_clip(defects: &[Defect], config: &LanguageConfig) -> ClipScore {
    let Some(policy) = &config.scoring else {
        debug!(defects = defects.len(), "no scoring policy configured, clip scores 100");
        return ClipScore::perfect(false);
    };

    let penalties: Vec<DefectPenalty> = defects
        .iter()
        .enumerate()
        .map(|(index, defect)| {
            let (points, skipped) = match defect_penalty(defect, config, policy) {
                Ok(points) if points.is_nan() => {
                    debug!(index, check = %defect.check_id, "non-numeric penalty treated as zero");
                    (0.0, None)
                }
                Ok(points) => (points, None),
                Err(reason) => {
                    trace!(
                        index,
                        category = %defect.category_id,
                        check = %defect.check_id,
                        reason = reason.label(),
                        "defect skipped"
                    );
                    (0.0, Some(reason))
                }
            };
            DefectPenalty {
                index,
                category_id: defect.category_id.clone(),
                check_id: defect.check_id.clone(),
                severity: defect.severity.clone(),
                points,
                skipped,
            }
        })
        .collect();

    let total_penalty: f64 = penalties.iter().map(|penalty| penalty.points).sum();
    let score = if total_penalty.is_nan() {
        // Opposite infinite penalties sum to NaN.
        warn!(defects = defects.len(), "infinite penalties of opposite sign, clip scores 0");
        0.0
    } else {
        round_to_tenth((MAX_SCORE - total_penalty).clamp(0.0, MAX_SCORE))
    };

    debug!(defects = defects.len(), total_penalty, score, "clip scored");

    ClipScore {
        score,
        total_penalty,
        policy_applied: true,
        penalties,
    }
}

/// Clip score in `0.0..=100.0`, one decimal place.
pub fn calculate_clip_score(defects: &[Defect], config: &LanguageConfig) -> f64 {
    score_clip(defects, config).score
}

/// Unweighted mean of clip scores, one decimal place. An asset without clips scores 100.
pub fn calculate_asset_score(clip_scores: &[f64]) -> f64 {
    if clip_scores.is_empty() {
        return MAX_SCORE;
    }
    let mean = clip_scores.iter().sum::<f64>() / clip_scores.len() as f64;
    round_to_tenth(mean)
}

/// Round half-up on the tenths digit, so `-0.25` becomes `-0.2`.
pub fn round_to_tenth(value: f64) -> f64 {
    (value * 10.0 + 0.5).floor() / 10.0
}
