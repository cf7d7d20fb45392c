use std::collections::HashMap;

use serde::Serialize;

use crate::profiles::{CategoryId, Defect, LanguageConfig};
use crate::scoring::{score_clip, ClipScore, MAX_SCORE};

/// Points one category cost a clip.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct CategorySummary {
    pub category_id: CategoryId,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub label: Option<String>,
    pub configured: bool,
    pub enabled: bool,
    pub defect_count: usize,
    pub deduction: f64,
    pub residual_score: f64,
}

/// Group defects by category in order of first appearance, keeping input order inside
/// each group.
pub fn group_by_category(defects: &[Defect]) -> Vec<(CategoryId, Vec<&Defect>)> {
    let mut positions: HashMap<&CategoryId, usize> = HashMap::new();
    let mut groups: Vec<(CategoryId, Vec<&Defect>)> = Vec::new();

    for defect in defects {
        let position = *positions.entry(&defect.category_id).or_insert_with(|| {
            groups.push((defect.category_id.clone(), Vec::new()));
            groups.len() - 1
        });
        groups[position].1.push(defect);
    }

    groups
}

/// Sum of the penalties charged to `category`, using the clip scoring formula.
pub fn category_deduction(category: &CategoryId, defects: &[Defect], config: &LanguageConfig) -> f64 {
    deduction_from(&score_clip(defects, config), category)
}

/// `100 - deduction` for one category. Neither clamped nor rounded, so the deductions of
/// all categories add up to the clip's total penalty.
pub fn category_residual_score(category: &CategoryId, defects: &[Defect], config: &LanguageConfig) -> f64 {
    MAX_SCORE - category_deduction(category, defects, config)
}

/// One summary per category referenced by `defects`, in first-appearance order.
pub fn category_summaries(defects: &[Defect], config: &LanguageConfig) -> Vec<CategorySummary> {
    let clip = score_clip(defects, config);

    group_by_category(defects)
        .into_iter()
        .map(|(category_id, members)| {
            let configured = config.category(&category_id);
            let deduction = deduction_from(&clip, &category_id);
            CategorySummary {
                label: configured.and_then(|category| category.label.clone()),
                configured: configured.is_some(),
                enabled: configured.map(|category| category.enabled).unwrap_or(false),
                defect_count: members.len(),
                deduction,
                residual_score: MAX_SCORE - deduction,
                category_id,
            }
        })
        .collect()
}

fn deduction_from(clip: &ClipScore, category: &CategoryId) -> f64 {
    clip.penalties
        .iter()
        .filter(|penalty| penalty.category_id == *category)
        .map(|penalty| penalty.points)
        .sum()
}
