// In-memory store, optionally loaded from JSON record files

use super::EntityStore;
use crate::error::{Error, Result};
use crate::model::Individual;
use log::debug;
use serde::Deserialize;
use std::collections::HashMap;
use std::path::Path;
use walkdir::WalkDir;

/// A JSON record file holds either one record or a list of them
#[derive(Deserialize)]
#[serde(untagged)]
enum RecordFile {
    Many(Vec<Individual>),
    One(Box<Individual>),
}

impl RecordFile {
    fn into_records(self) -> Vec<Individual> {
        match self {
            RecordFile::Many(records) => records,
            RecordFile::One(record) => vec![*record],
        }
    }
}

/// HashMap-backed store of individuals keyed by id
#[derive(Debug, Default, Clone)]
pub struct MemoryStore {
    records: HashMap<String, Individual>,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Build a store from records, rejecting duplicate ids
    pub fn from_records(records: impl IntoIterator<Item = Individual>) -> Result<Self> {
        let mut store = Self::new();
        for record in records {
            store.insert(record)?;
        }
        Ok(store)
    }

    /// Load from a JSON file, or from every `*.json` file under a directory
    pub fn load(path: &Path) -> Result<Self> {
        if !path.exists() {
            return Err(Error::PathNotFound(path.to_path_buf()));
        }

        if path.is_dir() {
            Self::load_dir(path)
        } else {
            Self::from_records(read_record_file(path)?)
        }
    }

    fn load_dir(root: &Path) -> Result<Self> {
        let mut store = Self::new();

        let mut files = Vec::new();
        for entry in WalkDir::new(root).follow_links(true) {
            let entry = entry?;
            let path = entry.path();
            if entry.file_type().is_file() && path.extension().is_some_and(|e| e == "json") {
                files.push(path.to_path_buf());
            }
        }
        // Deterministic load order so duplicate-id errors name the same file
        files.sort();

        for file in &files {
            for record in read_record_file(file)? {
                store.insert(record).map_err(|e| {
                    Error::store(format!("{}: {}", file.display(), e))
                })?;
            }
        }

        debug!("Loaded {} records from {} files under {}", store.len(), files.len(), root.display());
        Ok(store)
    }

    /// Add a record. Fails if the id is blank or already present.
    pub fn insert(&mut self, record: Individual) -> Result<()> {
        if record.id.trim().is_empty() {
            return Err(Error::store(format!("record '{}' has an empty id", record.name)));
        }
        if self.records.contains_key(&record.id) {
            return Err(Error::store(format!("duplicate id '{}'", record.id)));
        }
        self.records.insert(record.id.clone(), record);
        Ok(())
    }

    pub fn get(&self, id: &str) -> Option<&Individual> {
        self.records.get(id)
    }

    pub fn contains(&self, id: &str) -> bool {
        self.records.contains_key(id)
    }

    /// All records, sorted by id
    pub fn records(&self) -> Vec<&Individual> {
        let mut all: Vec<&Individual> = self.records.values().collect();
        all.sort_by(|a, b| a.id.cmp(&b.id));
        all
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }
}

impl EntityStore for MemoryStore {
    fn fetch_by_id(&self, id: &str) -> Result<Individual> {
        self.records
            .get(id)
            .cloned()
            .ok_or_else(|| Error::not_found(id))
    }
}

fn read_record_file(path: &Path) -> Result<Vec<Individual>> {
    let contents = std::fs::read_to_string(path)?;
    let file: RecordFile = serde_json::from_str(&contents)?;
    Ok(file.into_records())
}
