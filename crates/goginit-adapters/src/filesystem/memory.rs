//! In-memory filesystem adapter for testing.

use std::{
    collections::{BTreeMap, BTreeSet},
    path::{Path, PathBuf},
    sync::{Arc, RwLock},
};

use goginit_core::{
    application::{ApplicationError, ports::Filesystem},
    error::GoginitResult,
};

/// In-memory filesystem for testing.
///
/// Clones share the same contents.
#[derive(Debug, Clone)]
pub struct MemoryFilesystem {
    inner: Arc<RwLock<MemoryFilesystemInner>>,
}

#[derive(Debug, Default)]
struct MemoryFilesystemInner {
    files: BTreeMap<PathBuf, String>,
    directories: BTreeSet<PathBuf>,
}

impl MemoryFilesystem {
    /// Create a new empty memory filesystem.
    pub fn new() -> Self {
        Self {
            inner: Arc::new(RwLock::new(MemoryFilesystemInner::default())),
        }
    }

    /// Read a file's content (testing helper).
    pub fn read_file(&self, path: &Path) -> Option<String> {
        let inner = self.inner.read().ok()?;
        inner.files.get(path).cloned()
    }

    /// All files, sorted by path.
    pub fn list_files(&self) -> Vec<PathBuf> {
        self.inner
            .read()
            .map(|inner| inner.files.keys().cloned().collect())
            .unwrap_or_default()
    }

    /// All directories, sorted by path.
    pub fn list_directories(&self) -> Vec<PathBuf> {
        self.inner
            .read()
            .map(|inner| inner.directories.iter().cloned().collect())
            .unwrap_or_default()
    }

    /// Clear all contents.
    pub fn clear(&self) {
        if let Ok(mut inner) = self.inner.write() {
            inner.files.clear();
            inner.directories.clear();
        }
    }

    fn insert_file(&self, path: &Path, content: String) -> GoginitResult<()> {
        let mut inner = self
            .inner
            .write()
            .map_err(|_| ApplicationError::AdapterLockError)?;

        // Parent must exist, like std::fs
        if let Some(parent) = path.parent() {
            if !parent.as_os_str().is_empty() && !inner.directories.contains(parent) {
                return Err(ApplicationError::FilesystemError {
                    path: path.to_path_buf(),
                    reason: "Parent directory does not exist".into(),
                }
                .into());
            }
        }

        inner.files.insert(path.to_path_buf(), content);
        Ok(())
    }
}

impl Default for MemoryFilesystem {
    fn default() -> Self {
        Self::new()
    }
}

impl Filesystem for MemoryFilesystem {
    fn create_dir_all(&self, path: &Path) -> GoginitResult<()> {
        let mut inner = self
            .inner
            .write()
            .map_err(|_| ApplicationError::AdapterLockError)?;

        let mut current = PathBuf::new();
        for component in path.components() {
            current.push(component);
            inner.directories.insert(current.clone());
        }

        Ok(())
    }

    fn write_file(&self, path: &Path, content: &str) -> GoginitResult<()> {
        self.insert_file(path, content.to_string())
    }

    fn create_empty_file(&self, path: &Path) -> GoginitResult<()> {
        self.insert_file(path, String::new())
    }

    fn exists(&self, path: &Path) -> bool {
        self.inner
            .read()
            .map(|inner| inner.files.contains_key(path) || inner.directories.contains(path))
            .unwrap_or(false)
    }
}
