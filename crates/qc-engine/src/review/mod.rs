//! Operator-facing aggregation: per-category breakdowns, asset summaries and the
//! prioritised review queue. Stateless; every call works on caller-supplied defects.

mod asset;
mod grouping;
mod queue;

pub use asset::{AssetReview, ClipSummary};
pub use grouping::{
    category_deduction, category_residual_score, category_summaries, group_by_category,
    CategorySummary,
};
pub use queue::{
    build_review_queue, score_clips, ReviewQueue, ReviewQueueItem, ReviewQueueOptions, ScoredClip,
};
