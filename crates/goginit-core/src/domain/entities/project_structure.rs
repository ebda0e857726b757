use std::collections::HashSet;
use std::path::{Path, PathBuf};

use crate::domain::{error::DomainError, value_objects::ProjectName};

/// Optional parts of the generated layout.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct LayoutOptions {
    /// Add `pkg/utils/` with its stub.
    pub include_utils: bool,
}

/// A marker source file written into one package directory.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StubFile {
    /// Path relative to the project root.
    pub path: PathBuf,
    pub content: String,
}

impl StubFile {
    fn for_package(dir: &str, package: &str) -> Self {
        Self {
            path: Path::new(dir).join(format!("{package}.go")),
            content: format!("// {package} package\npackage {package}"),
        }
    }
}

/// The skeleton of a project: every directory and stub file, in write order.
///
/// Entries are kept in `Vec`s rather than maps so that generation output and
/// test assertions are reproducible.
#[derive(Debug, Clone)]
pub struct SkeletonLayout {
    root: PathBuf,
    name: ProjectName,
    directories: Vec<PathBuf>,
    stubs: Vec<StubFile>,
}

const MANIFEST_FILE: &str = "go.mod";
const DB_DIR: &str = "pkg/db";
const DB_SOURCE_FILE: &str = "db.go";
const ENTRY_POINT_FILE: &str = "main.go";

/// `(directory, package)` pairs that receive a stub, in order.
const PACKAGES: &[(&str, &str)] = &[
    ("internal/handlers", "handlers"),
    ("internal/middleware", "middleware"),
    ("internal/routes", "routes"),
    ("pkg/models", "models"),
    (DB_DIR, "db"),
];

const UTILS_PACKAGE: (&str, &str) = ("pkg/utils", "utils");

impl SkeletonLayout {
    /// Lay out a project named `name` under `base` (the project root is
    /// `base/name`).
    pub fn new(base: impl AsRef<Path>, name: &ProjectName, options: LayoutOptions) -> Self {
        let mut packages: Vec<(&str, &str)> = PACKAGES.to_vec();
        if options.include_utils {
            packages.push(UTILS_PACKAGE);
        }

        let mut directories = vec![Path::new("cmd").join(name.as_str())];
        directories.extend(packages.iter().map(|(dir, _)| PathBuf::from(dir)));

        let stubs = packages
            .iter()
            .map(|(dir, package)| StubFile::for_package(dir, package))
            .collect();

        Self {
            root: base.as_ref().join(name.as_str()),
            name: name.clone(),
            directories,
            stubs,
        }
    }

    pub fn root(&self) -> &Path {
        &self.root
    }

    /// Directories relative to the root, in creation order.
    pub fn directories(&self) -> impl Iterator<Item = &Path> {
        self.directories.iter().map(PathBuf::as_path)
    }

    /// Stub files relative to the root, in write order.
    pub fn stubs(&self) -> impl Iterator<Item = &StubFile> {
        self.stubs.iter()
    }

    pub fn manifest_path(&self) -> PathBuf {
        self.root.join(MANIFEST_FILE)
    }

    pub fn entry_point_path(&self) -> PathBuf {
        self.root.join(Self::entry_point_relative(&self.name))
    }

    /// `cmd/<name>/main.go`, relative to a project root.
    pub fn entry_point_relative(name: &ProjectName) -> PathBuf {
        Path::new("cmd").join(name.as_str()).join(ENTRY_POINT_FILE)
    }

    pub fn db_dir(&self) -> PathBuf {
        self.root.join(DB_DIR)
    }

    /// `<root>/pkg/db/<name>.db`
    pub fn db_file_path(&self) -> PathBuf {
        self.db_dir().join(format!("{}.db", self.name))
    }

    pub fn db_source_path(&self) -> PathBuf {
        self.db_dir().join(DB_SOURCE_FILE)
    }

    /// Reject duplicate or absolute entries.
    pub fn validate(&self) -> Result<(), DomainError> {
        let mut seen = HashSet::new();
        let entries = self
            .directories
            .iter()
            .chain(self.stubs.iter().map(|stub| &stub.path));

        for path in entries {
            if path.is_absolute() || !seen.insert(path) {
                return Err(DomainError::InvalidProjectName {
                    name: self.name.to_string(),
                    reason: format!("produces an invalid layout entry '{}'", path.display()),
                });
            }
        }

        Ok(())
    }
}
