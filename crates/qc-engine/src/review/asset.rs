use serde::Serialize;

use super::grouping::{category_summaries, CategorySummary};
use super::queue::{ReviewQueue, ReviewQueueItem, ReviewQueueOptions, ScoredClip};
use crate::profiles::{Defect, LanguageConfig};
use crate::scoring::{calculate_asset_score, score_clip, ScoreStatus};

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ClipSummary {
    pub index: usize,
    pub score: f64,
    pub status: ScoreStatus,
    pub defect_count: usize,
    pub skipped_defects: usize,
    pub categories: Vec<CategorySummary>,
}

/// Everything the review screen needs for one asset.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct AssetReview {
    pub clips: Vec<ClipSummary>,
    pub asset_score: f64,
    pub status: ScoreStatus,
    pub queue: Vec<ReviewQueueItem>,
}

impl AssetReview {
    pub fn from_clips(clips: &[Vec<Defect>], config: &LanguageConfig, options: ReviewQueueOptions) -> Self {
        let mut summaries = Vec::with_capacity(clips.len());
        let mut scored = Vec::with_capacity(clips.len());

        for (index, defects) in clips.iter().enumerate() {
            let clip = score_clip(defects, config);
            summaries.push(ClipSummary {
                index,
                score: clip.score,
                status: clip.status(),
                defect_count: defects.len(),
                skipped_defects: clip.skipped().count(),
                categories: category_summaries(defects, config),
            });
            scored.push(ScoredClip {
                defects: defects.clone(),
                score: clip.score,
            });
        }

        let clip_scores: Vec<f64> = summaries.iter().map(|clip| clip.score).collect();
        let asset_score = calculate_asset_score(&clip_scores);

        Self {
            clips: summaries,
            asset_score,
            status: ScoreStatus::from_score(asset_score),
            queue: ReviewQueue::build(&scored, options).into_items(),
        }
    }

    pub fn clips_with_status(&self, status: ScoreStatus) -> usize {
        self.clips.iter().filter(|clip| clip.status == status).count()
    }
}
