// 📒 Inventory Logger - Append-only item log with whole-file JSON persistence
//
// Save always overwrites the full file; there are no incremental updates.

use crate::error::StoreError;
use crate::store::{Keyed, RecordStore};
use anyhow::{Context, Result};
use serde::de::DeserializeOwned;
use serde::Serialize;
use std::fs::{self, File};
use std::io::{BufWriter, Write};
use std::path::{Path, PathBuf};

/// What `load_from_file` found on disk
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LoadOutcome {
    /// File existed; the log now holds this many items
    Loaded(usize),

    /// No file at the configured path; the log was left as it was
    Missing,
}

pub struct InventoryLogger<T> {
    log: Vec<T>,
    file_path: PathBuf,
}

impl<T> InventoryLogger<T>
where
    T: Keyed + Clone + Serialize + DeserializeOwned,
{
    /// Create an empty logger bound to a JSON file
    pub fn new<P: AsRef<Path>>(file_path: P) -> Self {
        InventoryLogger {
            log: Vec::new(),
            file_path: file_path.as_ref().to_path_buf(),
        }
    }

    pub fn file_path(&self) -> &Path {
        &self.file_path
    }

    /// Append an item to the log
    pub fn add(&mut self, item: T) {
        self.log.push(item);
    }

    /// Copy of every logged item, in the order added
    pub fn get_all(&self) -> Vec<T> {
        self.log.clone()
    }

    pub fn len(&self) -> usize {
        self.log.len()
    }

    pub fn is_empty(&self) -> bool {
        self.log.is_empty()
    }

    /// Write the whole log as a JSON array, replacing any existing file
    pub fn save_to_file(&self) -> Result<()> {
        let file = File::create(&self.file_path)
            .with_context(|| format!("Failed to create inventory file: {:?}", self.file_path))?;

        let mut writer = BufWriter::new(file);
        serde_json::to_writer_pretty(&mut writer, &self.log)
            .context("Failed to serialize inventory JSON")?;
        writer
            .flush()
            .with_context(|| format!("Failed to write inventory file: {:?}", self.file_path))?;

        Ok(())
    }

    /// Replace the in-memory log with the file contents.
    ///
    /// Every loaded item must pass its record validation (e.g. no negative
    /// quantity). On any error the current log is kept untouched.
    pub fn load_from_file(&mut self) -> Result<LoadOutcome> {
        if !self.file_path.exists() {
            return Ok(LoadOutcome::Missing);
        }

        let content = fs::read_to_string(&self.file_path)
            .with_context(|| format!("Failed to read inventory file: {:?}", self.file_path))?;

        let items: Vec<T> = serde_json::from_str(&content)
            .context("Failed to parse inventory JSON")?;

        for item in &items {
            item.validate().with_context(|| {
                format!("Invalid item {} in inventory file: {:?}", item.id(), self.file_path)
            })?;
        }

        self.log = items;
        Ok(LoadOutcome::Loaded(self.log.len()))
    }

    /// Copy the logged items into a keyed store (ids unique, items valid)
    pub fn to_store(&self) -> Result<RecordStore<T>, StoreError> {
        RecordStore::from_records(self.log.iter().cloned())
    }
}

// ============================================================================
// TESTS
// ============================================================================
