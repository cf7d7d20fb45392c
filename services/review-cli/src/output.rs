use chrono::{DateTime, Utc};
use qc_engine::profiles::{EditOutcome, ProductKind, ProfileRepository, ValidationReport};
use qc_engine::review::AssetReview;
use serde::Serialize;
use std::io::{self, Write};

/// Machine-readable result of `qc-review score --json`.
#[derive(Debug, Serialize)]
pub(crate) struct ScoreReport {
    pub(crate) generated_at: DateTime<Utc>,
    pub(crate) profile: Option<String>,
    pub(crate) product: ProductKind,
    pub(crate) language: String,
    #[serde(flatten)]
    pub(crate) review: AssetReview,
}

impl ScoreReport {
    pub(crate) fn new(repository: &ProfileRepository, review: AssetReview) -> Self {
        let selection = repository.selection();
        Self {
            generated_at: Utc::now(),
            profile: selection.profile.as_ref().map(|id| id.to_string()),
            product: selection.product,
            language: selection.language.to_string(),
            review,
        }
    }
}

pub(crate) fn write_score_json<W: Write>(mut out: W, report: &ScoreReport) -> io::Result<()> {
    serde_json::to_writer_pretty(&mut out, report)?;
    writeln!(out)
}

pub(crate) fn write_score_report<W: Write>(mut out: W, report: &ScoreReport) -> io::Result<()> {
    let review = &report.review;

    writeln!(
        out,
        "profile {} / {} / {}",
        report.profile.as_deref().unwrap_or("<none>"),
        report.product.label(),
        report.language
    )?;
    writeln!(
        out,
        "asset score {:.1} ({}) across {} clip(s)",
        review.asset_score,
        review.status.label(),
        review.clips.len()
    )?;

    for clip in &review.clips {
        let skipped = if clip.skipped_defects > 0 {
            format!(", {} unresolved", clip.skipped_defects)
        } else {
            String::new()
        };
        writeln!(
            out,
            "  clip {:>3}  {:>5.1}  {:<6}  {} defect(s){}",
            clip.index,
            clip.score,
            clip.status.label(),
            clip.defect_count,
            skipped
        )?;
        for category in clip.categories.iter().filter(|category| category.defect_count > 0) {
            writeln!(
                out,
                "             {:<24} -{:.1}",
                category.label.as_deref().unwrap_or(category.category_id.as_str()),
                category.deduction
            )?;
        }
    }

    if review.queue.is_empty() {
        return writeln!(out, "review queue empty");
    }

    writeln!(out, "review queue ({} item(s))", review.queue.len())?;
    for item in &review.queue {
        writeln!(
            out,
            "  [{:<7}] clip {:>3} ({:.1}) {}/{} @ {:.2}s {}",
            item.defect.severity.as_str(),
            item.clip_index,
            item.clip_score,
            item.defect.category_id,
            item.defect.check_id,
            item.defect.time,
            item.defect.description
        )?;
    }
    Ok(())
}

pub(crate) fn write_validation<W: Write>(mut out: W, report: &ValidationReport) -> io::Result<()> {
    if report.is_clean() {
        return writeln!(out, "no configuration issues found");
    }
    for issue in &report.issues {
        writeln!(out, "  {}", issue.summary())?;
    }
    Ok(())
}

pub(crate) fn write_edit_outcomes<W: Write>(mut out: W, outcomes: &[(&'static str, EditOutcome)]) -> io::Result<()> {
    for (edit, outcome) in outcomes {
        writeln!(out, "{edit}: {}", outcome.summary())?;
    }
    Ok(())
}
