//! File storage backed by the local file system

use std::fs;
use std::io::Write;
use std::path::Path;

use tempfile::NamedTempFile;

use super::FileStorage;
use crate::error::{Result, fs as fs_error};

/// Local file system storage with atomic writes
#[derive(Debug, Default, Clone, Copy)]
pub struct LocalStorage;

impl FileStorage for LocalStorage {
    fn exists(&self, path: &Path) -> bool {
        path.is_file()
    }

    fn read(&self, path: &Path) -> Result<Vec<u8>> {
        if !path.exists() {
            return Err(fs_error::not_found(path.display().to_string()));
        }
        fs::read(path).map_err(|e| fs_error::read_failed(path.display().to_string(), e))
    }

    /// Writes through a temporary file in the same directory so a failed
    /// write never leaves a truncated file behind. An existing file keeps its
    /// permissions.
    fn write(&self, path: &Path, data: &[u8]) -> Result<()> {
        let write_failed = |e: std::io::Error| fs_error::write_failed(path.display().to_string(), e);

        let dir = match path.parent() {
            Some(parent) if !parent.as_os_str().is_empty() => parent,
            _ => Path::new("."),
        };
        fs::create_dir_all(dir).map_err(write_failed)?;

        let mut tmp = new_temp_file(dir).map_err(write_failed)?;
        if let Ok(metadata) = fs::metadata(path) {
            tmp.as_file()
                .set_permissions(metadata.permissions())
                .map_err(write_failed)?;
        }
        tmp.write_all(data).map_err(write_failed)?;
        tmp.persist(path).map_err(|e| write_failed(e.error))?;
        Ok(())
    }

    fn create_dir(&self, path: &Path) -> Result<()> {
        fs::create_dir_all(path)
            .map_err(|e| fs_error::write_failed(path.display().to_string(), e))
    }
}

// Temp files default to owner-only; a new file should get the same mode as
// any other file created under the current umask.
#[cfg(unix)]
fn new_temp_file(dir: &Path) -> std::io::Result<NamedTempFile> {
    use std::os::unix::fs::PermissionsExt;

    tempfile::Builder::new()
        .permissions(fs::Permissions::from_mode(0o666))
        .tempfile_in(dir)
}

#[cfg(not(unix))]
fn new_temp_file(dir: &Path) -> std::io::Result<NamedTempFile> {
    NamedTempFile::new_in(dir)
}
