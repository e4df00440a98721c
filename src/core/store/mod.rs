//! Record store: the roster file on disk and the in-memory roster loaded from it
//!
//! Adds, updates and deletes are written back to the file before they return.

pub mod parser;

pub use parser::{LineOutcome, ParsedRoster, SkipReason, SkippedLine};

use crate::core::models::{RecordUpdate, StudentRecord};
use crate::core::queries::{self, RosterSummary, SortOrder};
use crate::{debug, info, warn};
use std::fs;
use std::io;
use std::path::{Path, PathBuf};
use thiserror::Error;

/// Errors raised by the record store
#[derive(Error, Debug)]
pub enum StoreError {
    /// Reading or writing the roster file failed
    #[error("IO error on {}: {source}", .path.display())]
    Io {
        /// File being accessed
        path: PathBuf,
        /// Underlying error
        #[source]
        source: io::Error,
    },

    /// No record with the requested id
    #[error("Student ID {0} not found")]
    NotFound(i64),
}

/// Result type for store operations
pub type Result<T> = std::result::Result<T, StoreError>;

/// Whether the roster file was present
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LoadStatus {
    /// The file was read
    Loaded,
    /// The file does not exist; the roster starts empty
    NotFound,
}

/// Everything produced by [`load`]
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LoadedRoster {
    /// Valid records in file order
    pub records: Vec<StudentRecord>,
    /// Data lines that were skipped
    pub skipped: Vec<SkippedLine>,
    /// Whether the file existed
    pub status: LoadStatus,
}

/// Read a roster file.
///
/// A missing file is not an error: it yields an empty roster with
/// [`LoadStatus::NotFound`].
///
/// # Errors
/// Returns [`StoreError::Io`] for any other read failure
pub fn load<P: AsRef<Path>>(path: P) -> Result<LoadedRoster> {
    let path = path.as_ref();
    let content = match fs::read_to_string(path) {
        Ok(content) => content,
        Err(e) if e.kind() == io::ErrorKind::NotFound => {
            info!("Roster file not found, starting empty: {}", path.display());
            return Ok(LoadedRoster {
                records: Vec::new(),
                skipped: Vec::new(),
                status: LoadStatus::NotFound,
            });
        }
        Err(source) => {
            return Err(StoreError::Io {
                path: path.to_path_buf(),
                source,
            })
        }
    };

    let ParsedRoster { records, skipped } = parser::parse_roster(&content);
    for skip in &skipped {
        debug!(
            "Skipped line {} of {}: {}",
            skip.line_number,
            path.display(),
            skip.reason
        );
    }
    info!(
        "Loaded {} records from {} ({} skipped)",
        records.len(),
        path.display(),
        skipped.len()
    );

    Ok(LoadedRoster {
        records,
        skipped,
        status: LoadStatus::Loaded,
    })
}

/// Overwrite a roster file with `records`.
///
/// The parent directory is created when missing.
///
/// # Errors
/// Returns [`StoreError::Io`] if the directory or file cannot be written
pub fn save<P: AsRef<Path>>(path: P, records: &[StudentRecord]) -> Result<()> {
    let path = path.as_ref();
    let io_err = |source: io::Error| StoreError::Io {
        path: path.to_path_buf(),
        source,
    };

    for record in records.iter().filter(|r| r.name.contains(',')) {
        warn!(
            "Name of student {} contains a comma and will not reload: '{}'",
            record.id, record.name
        );
    }

    if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
        fs::create_dir_all(parent).map_err(io_err)?;
    }
    fs::write(path, parser::render_roster(records)).map_err(io_err)?;

    info!("Saved {} records to {}", records.len(), path.display());
    Ok(())
}

/// The roster for one session, bound to the file it was loaded from
#[derive(Debug, Clone)]
pub struct RecordStore {
    path: PathBuf,
    records: Vec<StudentRecord>,
}

impl RecordStore {
    /// Load the roster at `path`.
    ///
    /// The returned [`LoadedRoster`] has its records moved into the store; its
    /// `skipped` and `status` tell the caller what happened.
    ///
    /// # Errors
    /// Returns [`StoreError::Io`] if an existing file cannot be read
    pub fn open<P: Into<PathBuf>>(path: P) -> Result<(Self, LoadedRoster)> {
        let path = path.into();
        let mut loaded = load(&path)?;
        let records = std::mem::take(&mut loaded.records);
        Ok((Self { path, records }, loaded))
    }

    /// A store over `records` that has not touched the disk yet
    #[must_use]
    pub fn with_records<P: Into<PathBuf>>(path: P, records: Vec<StudentRecord>) -> Self {
        Self {
            path: path.into(),
            records,
        }
    }

    /// Roster file path
    #[must_use]
    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Records in roster order
    #[must_use]
    pub fn records(&self) -> &[StudentRecord] {
        &self.records
    }

    /// Number of records
    #[must_use]
    pub fn len(&self) -> usize {
        self.records.len()
    }

    /// Whether the roster is empty
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    /// First record with `id`
    #[must_use]
    pub fn find(&self, id: i64) -> Option<&StudentRecord> {
        self.records.iter().find(|r| r.id == id)
    }

    /// Write the roster to its file
    ///
    /// # Errors
    /// Returns [`StoreError::Io`] if the file cannot be written
    pub fn save(&self) -> Result<()> {
        save(&self.path, &self.records)
    }

    /// Append a record and save
    ///
    /// # Errors
    /// Returns [`StoreError::Io`] if saving fails; the record stays in memory
    pub fn add(&mut self, record: StudentRecord) -> Result<()> {
        debug!("Adding student {}", record.id);
        self.records.push(record);
        self.save()
    }

    /// Remove the first record with `id` and save
    ///
    /// # Errors
    /// Returns [`StoreError::NotFound`] (roster untouched) when no record has
    /// `id`, or [`StoreError::Io`] if saving fails
    pub fn delete(&mut self, id: i64) -> Result<StudentRecord> {
        let idx = self
            .records
            .iter()
            .position(|r| r.id == id)
            .ok_or(StoreError::NotFound(id))?;
        let removed = self.records.remove(idx);
        debug!("Deleted student {id}");
        self.save()?;
        Ok(removed)
    }

    /// Apply `update` to the first record with `id` and save
    ///
    /// # Errors
    /// Returns [`StoreError::NotFound`] (roster untouched) when no record has
    /// `id`, or [`StoreError::Io`] if saving fails
    pub fn update(&mut self, id: i64, update: RecordUpdate) -> Result<&StudentRecord> {
        let idx = self
            .records
            .iter()
            .position(|r| r.id == id)
            .ok_or(StoreError::NotFound(id))?;
        self.records[idx].apply(update);
        debug!("Updated student {id}");
        self.save()?;
        Ok(&self.records[idx])
    }

    /// Reorder the in-memory roster by percentage. Not saved.
    pub fn sort_by_percentage(&mut self, order: SortOrder) {
        queries::sort_by_percentage(&mut self.records, order);
    }

    /// Record with the highest percentage (first one on ties)
    #[must_use]
    pub fn highest(&self) -> Option<&StudentRecord> {
        queries::highest(&self.records)
    }

    /// Record with the lowest percentage (first one on ties)
    #[must_use]
    pub fn lowest(&self) -> Option<&StudentRecord> {
        queries::lowest(&self.records)
    }

    /// Count and average percentage
    #[must_use]
    pub fn summary(&self) -> RosterSummary {
        RosterSummary::of(&self.records)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    fn sample_records() -> Vec<StudentRecord> {
        vec![
            StudentRecord::new(1, "Ann".to_string(), 50, 80),
            StudentRecord::new(2, "Ben".to_string(), 30, 50),
            StudentRecord::new(1, "Dup".to_string(), 10, 10),
        ]
    }

    fn store_in(dir: &TempDir) -> RecordStore {
        RecordStore::with_records(dir.path().join("marks.txt"), sample_records())
    }

    #[test]
    fn test_load_missing_file_is_not_fatal() {
        let dir = TempDir::new().expect("temp dir");
        let loaded = load(dir.path().join("absent.txt")).expect("load");
        assert_eq!(loaded.status, LoadStatus::NotFound);
        assert!(loaded.records.is_empty());
    }

    #[test]
    fn test_delete_removes_first_match_and_saves() {
        let dir = TempDir::new().expect("temp dir");
        let mut store = store_in(&dir);

        let removed = store.delete(1).expect("delete");
        assert_eq!(removed.name, "Ann");
        assert_eq!(store.len(), 2);
        assert_eq!(store.find(1).map(|r| r.name.as_str()), Some("Dup"));

        let on_disk = load(store.path()).expect("reload");
        assert_eq!(on_disk.records, store.records());
    }

    #[test]
    fn test_delete_unknown_id_leaves_roster_and_file_alone() {
        let dir = TempDir::new().expect("temp dir");
        let mut store = store_in(&dir);

        let err = store.delete(99).expect_err("should not find 99");
        assert!(matches!(err, StoreError::NotFound(99)));
        assert_eq!(store.records(), sample_records().as_slice());
        assert!(!store.path().exists());
    }

    #[test]
    fn test_update_only_first_duplicate() {
        let dir = TempDir::new().expect("temp dir");
        let mut store = store_in(&dir);

        let updated = store.update(1, RecordUpdate::Exam(100)).expect("update");
        assert_eq!(updated.exam_mark, 100);
        assert_eq!(store.records()[0].exam_mark, 100);
        assert_eq!(store.records()[2].exam_mark, 10);
        assert!(store.path().exists());
    }

    #[test]
    fn test_update_unknown_id() {
        let dir = TempDir::new().expect("temp dir");
        let mut store = store_in(&dir);
        let err = store
            .update(42, RecordUpdate::Name("X".to_string()))
            .expect_err("should not find 42");
        assert!(matches!(err, StoreError::NotFound(42)));
        assert_eq!(store.records(), sample_records().as_slice());
    }

    #[test]
    fn test_add_appends_and_saves() {
        let dir = TempDir::new().expect("temp dir");
        let mut store = RecordStore::with_records(dir.path().join("nested/marks.txt"), Vec::new());

        store
            .add(StudentRecord::from_components(5, "Eve".to_string(), [20, 20, 20], 100))
            .expect("add");

        let content = fs::read_to_string(store.path()).expect("read back");
        assert_eq!(content, "1\n5,Eve,20,20,20,100\n");
    }

    #[test]
    fn test_sort_does_not_save() {
        let dir = TempDir::new().expect("temp dir");
        let mut store = store_in(&dir);
        store.sort_by_percentage(SortOrder::Ascending);
        assert_eq!(store.records()[0].name, "Dup");
        assert!(!store.path().exists());
    }

    #[test]
    fn test_not_found_message() {
        assert_eq!(StoreError::NotFound(7).to_string(), "Student ID 7 not found");
    }
}
