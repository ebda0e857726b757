//! Simple variable substitution renderer.

use goginit_core::{
    application::{ApplicationError, ports::TemplateRenderer},
    domain::RenderContext,
    error::GoginitResult,
};
use thiserror::Error;
use tracing::instrument;

const OPEN: &str = "{{";
const CLOSE: &str = "}}";

/// Renderer replacing `{{VARIABLE}}` placeholders from the context.
///
/// Every placeholder must resolve; leftovers are an error rather than being
/// copied into generated Go source.
pub struct SimpleRenderer;

impl SimpleRenderer {
    /// Create a new simple renderer.
    pub fn new() -> Self {
        Self
    }
}

impl Default for SimpleRenderer {
    fn default() -> Self {
        Self::new()
    }
}

#[derive(Debug, Error, PartialEq, Eq)]
enum SubstitutionError {
    #[error("unresolved placeholder '{{{{{0}}}}}'")]
    Unresolved(String),

    #[error("unterminated placeholder at byte {0}")]
    Unterminated(usize),

    #[error("empty placeholder at byte {0}")]
    Empty(usize),
}

impl From<SubstitutionError> for ApplicationError {
    fn from(e: SubstitutionError) -> Self {
        ApplicationError::RenderingFailed {
            reason: e.to_string(),
        }
    }
}

impl TemplateRenderer for SimpleRenderer {
    #[instrument(skip_all, fields(variables = context.len()))]
    fn render(&self, source: &str, context: &RenderContext) -> GoginitResult<String> {
        substitute(source, context).map_err(|e| ApplicationError::from(e).into())
    }
}

fn substitute(source: &str, context: &RenderContext) -> Result<String, SubstitutionError> {
    let mut out = String::with_capacity(source.len());
    let mut rest = source;
    let mut offset = 0;

    while let Some(start) = rest.find(OPEN) {
        out.push_str(&rest[..start]);
        let after_open = &rest[start + OPEN.len()..];
        let end = after_open
            .find(CLOSE)
            .ok_or(SubstitutionError::Unterminated(offset + start))?;

        let name = after_open[..end].trim();
        if name.is_empty() {
            return Err(SubstitutionError::Empty(offset + start));
        }
        let value = context
            .get(name)
            .ok_or_else(|| SubstitutionError::Unresolved(name.to_string()))?;
        out.push_str(value);

        let consumed = start + OPEN.len() + end + CLOSE.len();
        rest = &rest[consumed..];
        offset += consumed;
    }

    out.push_str(rest);
    Ok(out)
}
