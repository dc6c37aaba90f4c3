//! CWL Document Model
//!
//! Plain data structures mirroring the elements of a CWL v1.0 workflow
//! document. These types hold state and enforce local id-uniqueness rules;
//! the wiring logic lives in [`crate::graph`].
//!
//! # Structure
//!
//! - [`workflow`]: The `Workflow` document root
//! - [`step`]: `WorkflowStep` and its input/output ports
//! - [`parameters`]: Workflow-level input and output parameters

pub mod parameters;
pub mod step;
pub mod workflow;

pub use parameters::{InputParameter, OutputSource, WorkflowOutputParameter};
pub use step::{
    CommandLineTool, StepInputSource, StepRun, WorkflowStep, WorkflowStepInput, WorkflowStepOutput,
};
pub use workflow::Workflow;

/// CWL specification version emitted in documents.
pub const CWL_VERSION: &str = "v1.0";

/// Document-level configuration.
///
/// Passed explicitly where it is needed instead of living in process-wide
/// state: [`Workflow::with_config`] picks up the version tag, and
/// [`crate::emit::to_yaml_with`] uses the base URI to resolve relative
/// `run` references.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DocumentConfig {
    /// Value of the document's `cwlVersion` field.
    pub cwl_version: String,

    /// Base URI that relative `run` references are resolved against at
    /// emission time. `None` leaves them untouched.
    pub base_uri: Option<String>,
}

impl Default for DocumentConfig {
    fn default() -> Self {
        Self {
            cwl_version: CWL_VERSION.to_string(),
            base_uri: None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config_targets_v1_0() {
        let config = DocumentConfig::default();
        assert_eq!(config.cwl_version, "v1.0");
        assert!(config.base_uri.is_none());
    }
}
