//! Render context for the parameterized sources the generator writes.
//!
//! Only one source is parameterized (`pkg/db/db.go`) and it uses only one
//! variable, but the context stays a small map so a renderer can report
//! exactly which placeholder it could not resolve.

use std::collections::BTreeMap;

use crate::domain::{templates::PROJECT_NAME_VAR, value_objects::ProjectName};

/// Variables available to `{{VARIABLE}}` placeholders. Immutable after creation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RenderContext {
    variables: BTreeMap<String, String>,
}

impl RenderContext {
    /// Context carrying `PROJECT_NAME`.
    pub fn new(project_name: &ProjectName) -> Self {
        let mut variables = BTreeMap::new();
        variables.insert(PROJECT_NAME_VAR.to_string(), project_name.to_string());
        Self { variables }
    }

    /// An empty context. Rendering anything with a placeholder against it fails.
    pub fn empty() -> Self {
        Self {
            variables: BTreeMap::new(),
        }
    }

    pub fn get(&self, key: &str) -> Option<&str> {
        self.variables.get(key).map(String::as_str)
    }

    pub fn len(&self) -> usize {
        self.variables.len()
    }

    pub fn is_empty(&self) -> bool {
        self.variables.is_empty()
    }
}
