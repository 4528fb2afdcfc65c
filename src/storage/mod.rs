//! File storage collaborator
//!
//! The instructions upsert never touches the file system directly; it goes
//! through [`FileStorage`], which offers whole-file reads and writes, an
//! existence check and directory creation. [`LocalStorage`] is the real
//! implementation; tests use an in-memory one.

use std::path::Path;

use crate::error::{Result, fs as fs_error};

mod local;
#[cfg(test)]
mod memory;

pub use local::LocalStorage;
#[cfg(test)]
pub use memory::MemoryStorage;

/// Whole-file storage operations
pub trait FileStorage {
    /// Whether a file exists at `path`
    fn exists(&self, path: &Path) -> bool;

    /// Read the whole file; fails if it is absent
    fn read(&self, path: &Path) -> Result<Vec<u8>>;

    /// Replace the whole file with `data`
    fn write(&self, path: &Path, data: &[u8]) -> Result<()>;

    /// Create a directory and its parents; succeeds if it already exists
    fn create_dir(&self, path: &Path) -> Result<()>;

    /// Read the whole file as UTF-8 text
    fn read_to_string(&self, path: &Path) -> Result<String> {
        let bytes = self.read(path)?;
        String::from_utf8(bytes).map_err(|e| fs_error::read_failed(path.display().to_string(), e))
    }
}
