use crate::domain::{entities::SkeletonLayout, error::DomainError, value_objects::ProjectSpec};

/// Centralized domain validation.
///
/// All validation logic lives here, not scattered across services.
pub struct DomainValidator;

impl DomainValidator {
    /// A spec is complete when a framework key was chosen. Whether the key is
    /// known is left to the generator's framework-resolution step.
    pub fn validate_spec(spec: &ProjectSpec) -> Result<(), DomainError> {
        if spec.framework().trim().is_empty() {
            return Err(DomainError::MissingSelection { field: "framework" });
        }
        Ok(())
    }

    pub fn validate_layout(layout: &SkeletonLayout) -> Result<(), DomainError> {
        layout.validate()
    }
}
