//! Ingress from the excluded storage layer: profile documents (JSON) and detector
//! exports (CSV).

mod defects;
mod profiles;

pub use defects::{parse_clip_defects, DEFECT_CSV_HEADERS, MAX_CLIP_INDEX};
pub use profiles::{load_profiles, load_profiles_from_path, write_profiles, JsonFileProfileSource};

use std::path::PathBuf;

#[derive(Debug, thiserror::Error)]
pub enum IngestError {
    #[error("unable to read {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error("malformed profile document: {0}")]
    Json(#[from] serde_json::Error),
    #[error("malformed defect export: {0}")]
    Csv(#[from] csv::Error),
    #[error("defect row {row}: {detail}")]
    InvalidRow { row: usize, detail: String },
}
