//! Generation steps and the report produced by a successful run.

use std::fmt;
use std::path::PathBuf;

use serde::Serialize;

use crate::domain::ProjectSpec;

/// Named stage of project generation, in execution order.
///
/// `BootstrapDatabase` is the generator's announcement of the database
/// phase; failures inside that phase carry the database step that failed.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum GenerationStep {
    CreateDirectories,
    WriteStubs,
    EnsureManifest,
    ResolveFramework,
    FetchDependency,
    WriteEntryPoint,
    BootstrapDatabase,
    RecheckManifest,
    InstallDriver,
    TidyModules,
    EnsureDatabaseDir,
    CreateDatabaseFile,
    RenderDatabaseSource,
}

impl GenerationStep {
    /// Whether a failure at this step ends the process.
    pub fn is_fatal(self) -> bool {
        matches!(
            self,
            Self::BootstrapDatabase
                | Self::RecheckManifest
                | Self::InstallDriver
                | Self::TidyModules
                | Self::EnsureDatabaseDir
                | Self::CreateDatabaseFile
                | Self::RenderDatabaseSource
        )
    }

    /// Short label for spinners and logs.
    pub fn label(self) -> &'static str {
        match self {
            Self::CreateDirectories => "create directories",
            Self::WriteStubs => "write package stubs",
            Self::EnsureManifest => "initialize go.mod",
            Self::ResolveFramework => "resolve framework",
            Self::FetchDependency => "fetch framework dependency",
            Self::WriteEntryPoint => "write entry point",
            Self::BootstrapDatabase => "set up database",
            Self::RecheckManifest => "check go.mod",
            Self::InstallDriver => "install database driver",
            Self::TidyModules => "tidy modules",
            Self::EnsureDatabaseDir => "create database directory",
            Self::CreateDatabaseFile => "create database file",
            Self::RenderDatabaseSource => "write database source",
        }
    }
}

impl fmt::Display for GenerationStep {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// What happened to `go.mod`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case", tag = "status")]
pub enum ManifestOutcome {
    /// `go mod init` ran. The version is absent when `go version` failed.
    Initialized { go_version: Option<String> },
    AlreadyPresent,
}

/// Outcome of the database phase.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct DatabaseReport {
    pub manifest: ManifestOutcome,
    pub driver: String,
    pub database_file: PathBuf,
    pub source_file: PathBuf,
}

/// Outcome of a successful generation run.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct GenerationReport {
    pub spec: ProjectSpec,
    pub root: PathBuf,
    pub completed: Vec<GenerationStep>,
    pub manifest: ManifestOutcome,
    pub files_written: Vec<PathBuf>,
    pub database: Option<DatabaseReport>,
}
