use serde::Serialize;
use tracing::debug;

use crate::profiles::{Defect, LanguageConfig};
use crate::scoring::{calculate_clip_score, PASS_THRESHOLD};

/// Defects of one clip alongside the score they produced.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ScoredClip {
    pub defects: Vec<Defect>,
    pub score: f64,
}

/// Score every clip against the same configuration, preserving clip order.
pub fn score_clips(clips: Vec<Vec<Defect>>, config: &LanguageConfig) -> Vec<ScoredClip> {
    clips
        .into_iter()
        .map(|defects| {
            let score = calculate_clip_score(&defects, config);
            ScoredClip { defects, score }
        })
        .collect()
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct ReviewQueueOptions {
    /// Clips scoring below this are queued.
    pub pass_threshold: f64,
}

impl ReviewQueueOptions {
    pub const DEFAULT_PASS_THRESHOLD: f64 = PASS_THRESHOLD;
}

impl Default for ReviewQueueOptions {
    fn default() -> Self {
        Self {
            pass_threshold: Self::DEFAULT_PASS_THRESHOLD,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ReviewQueueItem {
    pub clip_index: usize,
    pub clip_score: f64,
    pub defect: Defect,
}

/// Defects from every failing clip, errors first and worst clips first within a
/// severity. Ties keep their original order.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct ReviewQueue {
    items: Vec<ReviewQueueItem>,
}

impl ReviewQueue {
    pub fn build(clips: &[ScoredClip], options: ReviewQueueOptions) -> Self {
        let mut items: Vec<ReviewQueueItem> = clips
            .iter()
            .enumerate()
            .filter(|(_, clip)| clip.score < options.pass_threshold)
            .flat_map(|(clip_index, clip)| {
                clip.defects.iter().map(move |defect| ReviewQueueItem {
                    clip_index,
                    clip_score: clip.score,
                    defect: defect.clone(),
                })
            })
            .collect();

        // Stable: equal keys keep insertion order.
        items.sort_by(|left, right| {
            left.defect
                .severity
                .rank()
                .cmp(&right.defect.severity.rank())
                .then_with(|| left.clip_score.total_cmp(&right.clip_score))
        });

        debug!(
            clips = clips.len(),
            queued = items.len(),
            pass_threshold = options.pass_threshold,
            "review queue built"
        );

        Self { items }
    }

    pub fn items(&self) -> &[ReviewQueueItem] {
        &self.items
    }

    pub fn into_items(self) -> Vec<ReviewQueueItem> {
        self.items
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }
}

/// Queue with the default pass threshold of 90.
pub fn build_review_queue(clips: &[ScoredClip]) -> Vec<ReviewQueueItem> {
    ReviewQueue::build(clips, ReviewQueueOptions::default()).into_items()
}
