//! Value objects: the validated project name and the finished selection.

use std::fmt;

use serde::Serialize;

use crate::domain::error::DomainError;

/// A validated project name.
///
/// The name is used verbatim as the project directory, the `cmd/<name>`
/// directory, the database file stem, and the Go module path, so it must be a
/// single path segment without whitespace.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize)]
#[serde(transparent)]
pub struct ProjectName(String);

impl ProjectName {
    /// Validate and wrap a raw name. Surrounding whitespace is trimmed.
    pub fn parse(raw: impl AsRef<str>) -> Result<Self, DomainError> {
        let raw = raw.as_ref();
        let name = raw.trim();

        let reject = |reason: &str| DomainError::InvalidProjectName {
            name: raw.into(),
            reason: reason.into(),
        };

        if name.is_empty() {
            return Err(reject("Project name cannot be empty"));
        }
        if name.starts_with('.') {
            return Err(reject("Project name cannot start with '.'"));
        }
        if name.contains(['/', '\\']) {
            return Err(reject("Project name cannot contain path separators"));
        }
        if name.chars().any(char::is_whitespace) {
            return Err(reject("Project name cannot contain whitespace"));
        }

        Ok(Self(name.to_owned()))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for ProjectName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl AsRef<str> for ProjectName {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

/// Everything the generator needs: produced by the wizard (or CLI flags) and
/// handed over by value.
///
/// `framework` is a registry key that has not been resolved yet; resolution
/// is a generation step so that an unknown key surfaces after the skeleton
/// has been laid down.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ProjectSpec {
    name: ProjectName,
    framework: String,
    setup_db: bool,
}

impl ProjectSpec {
    pub fn new(name: ProjectName, framework: impl Into<String>, setup_db: bool) -> Self {
        Self {
            name,
            framework: framework.into(),
            setup_db,
        }
    }

    pub fn name(&self) -> &ProjectName {
        &self.name
    }

    pub fn framework(&self) -> &str {
        &self.framework
    }

    pub fn setup_db(&self) -> bool {
        self.setup_db
    }
}

impl fmt::Display for ProjectSpec {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{} ({}{})",
            self.name,
            self.framework,
            if self.setup_db { ", sqlite" } else { "" }
        )
    }
}
