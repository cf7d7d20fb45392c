use std::io::Read;

use serde::Deserialize;
use tracing::debug;

use super::IngestError;
use crate::profiles::{CategoryId, CheckId, Defect, Severity};

pub const DEFECT_CSV_HEADERS: [&str; 6] = ["Clip", "Category", "Check", "Severity", "Time", "Description"];

/// Highest clip index an export may reference.
pub const MAX_CLIP_INDEX: usize = 99_999;

/// Read a detector export and group its rows into clips by the `Clip` column.
///
/// The result is indexed by clip number, so clips without a row come back empty.
pub fn parse_clip_defects<R: Read>(reader: R) -> Result<Vec<Vec<Defect>>, IngestError> {
    let mut csv_reader = csv::ReaderBuilder::new()
        .trim(csv::Trim::All)
        .from_reader(reader);
    let mut clips: Vec<Vec<Defect>> = Vec::new();
    let mut rows = 0;

    for (position, record) in csv_reader.deserialize::<DefectRow>().enumerate() {
        let row = record?;
        // Header is line 1.
        let line = position + 2;
        if !row.time.is_finite() || row.time < 0.0 {
            return Err(IngestError::InvalidRow {
                row: line,
                detail: format!("time {} must be a non-negative number of seconds", row.time),
            });
        }
        if row.category.is_empty() || row.check.is_empty() {
            return Err(IngestError::InvalidRow {
                row: line,
                detail: "category and check are required".to_string(),
            });
        }

        let clip = row.clip;
        let needed = clip
            .checked_add(1)
            .filter(|_| clip <= MAX_CLIP_INDEX)
            .ok_or_else(|| IngestError::InvalidRow {
                row: line,
                detail: format!("clip {clip} exceeds the maximum index {MAX_CLIP_INDEX}"),
            })?;
        if clips.len() < needed {
            clips.resize_with(needed, Vec::new);
        }
        clips[clip].push(row.into_defect());
        rows += 1;
    }

    debug!(rows, clips = clips.len(), "defect export parsed");
    Ok(clips)
}

#[derive(Debug, Deserialize)]
struct DefectRow {
    #[serde(rename = "Clip")]
    clip: usize,
    #[serde(rename = "Category")]
    category: String,
    #[serde(rename = "Check")]
    check: String,
    #[serde(rename = "Severity")]
    severity: String,
    #[serde(rename = "Time")]
    time: f64,
    #[serde(rename = "Description", default)]
    description: String,
}

impl DefectRow {
    fn into_defect(self) -> Defect {
        Defect {
            category_id: CategoryId(self.category),
            check_id: CheckId(self.check),
            severity: Severity::from(self.severity),
            time: self.time,
            description: self.description,
        }
    }
}
