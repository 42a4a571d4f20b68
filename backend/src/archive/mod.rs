//! Review Archive - keep a JSON snapshot of every scrape
//!
//! Snapshots live in one directory, one file per scrape, and are loaded
//! back on startup so earlier results can be inspected or re-uploaded.

use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use std::fs;
use std::path::{Path, PathBuf};

use crate::config::DEFAULT_ARCHIVE_DIR;
use crate::error::{ArchiveError, ArchiveResult};
use crate::models::Review;

/// One archived scrape
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Snapshot {
    pub id: String,
    /// URL the reviews were scraped from
    pub source: String,
    /// RFC 3339 timestamp
    pub created_at: String,
    pub reviews: Vec<Review>,
}

/// Directory-backed store of scrape snapshots
pub struct ReviewArchive {
    dir: PathBuf,
    snapshots: HashMap<String, Snapshot>,
}

impl ReviewArchive {
    /// Open the default archive directory
    pub fn new() -> Self {
        Self::with_dir(DEFAULT_ARCHIVE_DIR)
    }

    /// Open an archive in a custom directory
    pub fn with_dir(dir: impl AsRef<Path>) -> Self {
        let mut archive = Self {
            dir: dir.as_ref().to_path_buf(),
            snapshots: HashMap::new(),
        };
        archive.load_all();
        archive
    }

    pub fn dir(&self) -> &Path {
        &self.dir
    }

    /// Unreadable files are skipped.
    fn load_all(&mut self) {
        let Ok(entries) = fs::read_dir(&self.dir) else {
            return;
        };

        for entry in entries.flatten() {
            let path = entry.path();
            if path.extension().is_some_and(|e| e == "json") {
                if let Ok(content) = fs::read_to_string(&path) {
                    if let Ok(snapshot) = serde_json::from_str::<Snapshot>(&content) {
                        self.snapshots.insert(snapshot.id.clone(), snapshot);
                    }
                }
            }
        }
    }

    /// All snapshots, newest first
    pub fn list(&self) -> Vec<&Snapshot> {
        let mut all: Vec<&Snapshot> = self.snapshots.values().collect();
        all.sort_by(|a, b| b.created_at.cmp(&a.created_at).then_with(|| b.id.cmp(&a.id)));
        all
    }

    pub fn get(&self, id: &str) -> Option<&Snapshot> {
        self.snapshots.get(id)
    }

    pub fn latest(&self) -> Option<&Snapshot> {
        self.list().into_iter().next()
    }

    /// Write a new snapshot and return its id
    pub fn save(&mut self, source: &str, reviews: &[Review]) -> ArchiveResult<String> {
        fs::create_dir_all(&self.dir)?;

        let now = chrono::Utc::now();
        let id = snapshot_id(source, now.timestamp_millis());
        let snapshot = Snapshot {
            id: id.clone(),
            source: source.to_string(),
            created_at: now.to_rfc3339(),
            reviews: reviews.to_vec(),
        };

        let content = serde_json::to_string_pretty(&snapshot)?;
        fs::write(self.path_for(&id), content)?;

        self.snapshots.insert(id.clone(), snapshot);
        Ok(id)
    }

    pub fn delete(&mut self, id: &str) -> ArchiveResult<()> {
        if !self.snapshots.contains_key(id) {
            return Err(ArchiveError::NotFound(id.to_string()));
        }
        // Disk first: a failed removal keeps the snapshot listed
        fs::remove_file(self.path_for(id))?;
        self.snapshots.remove(id);
        Ok(())
    }

    fn path_for(&self, id: &str) -> PathBuf {
        self.dir.join(format!("{}.json", id))
    }
}

impl Default for ReviewArchive {
    fn default() -> Self {
        Self::new()
    }
}

/// `<host-and-path-slug>-<millis>`
fn snapshot_id(source: &str, millis: i64) -> String {
    let trimmed = source
        .trim_start_matches("https://")
        .trim_start_matches("http://");
    let slug = trimmed
        .to_lowercase()
        .chars()
        .map(|c| if c.is_alphanumeric() { c } else { '-' })
        .collect::<String>()
        .split('-')
        .filter(|s| !s.is_empty())
        .take(6)
        .collect::<Vec<_>>()
        .join("-");

    if slug.is_empty() {
        format!("scrape-{}", millis)
    } else {
        format!("{}-{}", slug, millis)
    }
}
