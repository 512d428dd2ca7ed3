use std::fs;
use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use log::info;
use serde::de::DeserializeOwned;

use crate::domain::{Film, TeamMember};

/// Loader for the static JSON assets the whole application runs on
pub struct AssetStore {
    data_dir: PathBuf,
}

impl AssetStore {
    pub fn new<P: AsRef<Path>>(data_dir: P) -> Self {
        Self {
            data_dir: data_dir.as_ref().to_path_buf(),
        }
    }

    /// Load the full film collection from films.json
    pub fn load_films(&self) -> Result<Vec<Film>> {
        self.load_collection("films")
    }

    /// Load the club roster from members.json
    pub fn load_members(&self) -> Result<Vec<TeamMember>> {
        self.load_collection("members")
    }

    fn load_collection<T: DeserializeOwned>(&self, name: &str) -> Result<Vec<T>> {
        let file_path = self.data_dir.join(format!("{}.json", name));

        let raw = fs::read_to_string(&file_path)
            .with_context(|| format!("Failed to read asset file {}", file_path.display()))?;

        let records: Vec<T> = serde_json::from_str(&raw)
            .with_context(|| format!("Failed to parse asset file {}", file_path.display()))?;

        info!("Loaded {} records from {}", records.len(), file_path.display());
        Ok(records)
    }
}
