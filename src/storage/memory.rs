//! In-memory file storage for unit tests

use std::cell::RefCell;
use std::collections::{BTreeMap, BTreeSet};
use std::path::{Path, PathBuf};

use super::FileStorage;
use crate::error::{Result, fs as fs_error};

/// File storage that keeps everything in memory and counts writes
#[derive(Debug, Default)]
pub struct MemoryStorage {
    files: RefCell<BTreeMap<PathBuf, Vec<u8>>>,
    dirs: RefCell<BTreeSet<PathBuf>>,
    writes: RefCell<usize>,
}

impl MemoryStorage {
    /// Seed a file without counting it as a write
    pub fn insert(&self, path: impl AsRef<Path>, content: &str) {
        self.files
            .borrow_mut()
            .insert(path.as_ref().to_path_buf(), content.as_bytes().to_vec());
    }

    /// Current content of a file as text
    pub fn get(&self, path: impl AsRef<Path>) -> Option<String> {
        self.files
            .borrow()
            .get(path.as_ref())
            .map(|bytes| String::from_utf8_lossy(bytes).into_owned())
    }

    /// Whether `create_dir` was called for `path`
    pub fn has_dir(&self, path: impl AsRef<Path>) -> bool {
        self.dirs.borrow().contains(path.as_ref())
    }

    /// Number of `write` calls so far
    pub fn write_count(&self) -> usize {
        *self.writes.borrow()
    }
}

impl FileStorage for MemoryStorage {
    fn exists(&self, path: &Path) -> bool {
        self.files.borrow().contains_key(path)
    }

    fn read(&self, path: &Path) -> Result<Vec<u8>> {
        self.files
            .borrow()
            .get(path)
            .cloned()
            .ok_or_else(|| fs_error::not_found(path.display().to_string()))
    }

    fn write(&self, path: &Path, data: &[u8]) -> Result<()> {
        self.files
            .borrow_mut()
            .insert(path.to_path_buf(), data.to_vec());
        *self.writes.borrow_mut() += 1;
        Ok(())
    }

    fn create_dir(&self, path: &Path) -> Result<()> {
        self.dirs.borrow_mut().insert(path.to_path_buf());
        Ok(())
    }
}
