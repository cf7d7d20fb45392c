use std::fs::File;
use std::io::{BufReader, Read, Write};
use std::path::{Path, PathBuf};

use tracing::info;

use super::IngestError;
use crate::profiles::{Profile, ProfileSource, ProfileSourceError};

/// Parse a JSON array of profile documents.
pub fn load_profiles<R: Read>(reader: R) -> Result<Vec<Profile>, IngestError> {
    let profiles: Vec<Profile> = serde_json::from_reader(reader)?;
    Ok(profiles)
}

pub fn load_profiles_from_path(path: &Path) -> Result<Vec<Profile>, IngestError> {
    let file = File::open(path).map_err(|source| IngestError::Io {
        path: path.to_path_buf(),
        source,
    })?;
    let profiles = load_profiles(BufReader::new(file))?;
    info!(path = %path.display(), count = profiles.len(), "profile documents read");
    Ok(profiles)
}

pub fn write_profiles<W: Write>(writer: W, profiles: &[Profile]) -> Result<(), IngestError> {
    serde_json::to_writer_pretty(writer, profiles)?;
    Ok(())
}

/// Profile documents stored as one JSON file on disk.
#[derive(Debug, Clone)]
pub struct JsonFileProfileSource {
    path: PathBuf,
}

impl JsonFileProfileSource {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }
}

impl ProfileSource for JsonFileProfileSource {
    fn fetch_profiles(&self) -> Result<Vec<Profile>, ProfileSourceError> {
        Ok(load_profiles_from_path(&self.path)?)
    }
}
