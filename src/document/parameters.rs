//! Workflow-Level Parameters
//!
//! Input parameters are the workflow's external inputs; output parameters
//! expose step outputs to the outside. Both are keyed by id on the
//! [`Workflow`](super::Workflow) and registered through its
//! uniqueness-checked insertion methods.

use serde::{Deserialize, Serialize};

/// An external input of the workflow.
///
/// Only the id plays a role in graph building. The descriptive fields are
/// carried through to the emitted document untouched.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
pub struct InputParameter {
    /// Unique identifier within the workflow's inputs.
    pub id: String,

    /// Short display name.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub label: Option<String>,

    /// Longer documentation string.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub doc: Option<String>,

    /// CWL type expression, e.g. `File` or `string?`.
    #[serde(rename = "type", default, skip_serializing_if = "Option::is_none")]
    pub parameter_type: Option<String>,

    /// Default value supplied when the input is not given.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub default: Option<serde_json::Value>,
}

impl InputParameter {
    /// Creates an input parameter with just an id.
    pub fn new(id: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            label: None,
            doc: None,
            parameter_type: None,
            default: None,
        }
    }

    /// Sets the display label.
    pub fn with_label(mut self, label: impl Into<String>) -> Self {
        self.label = Some(label.into());
        self
    }

    /// Sets the documentation string.
    pub fn with_doc(mut self, doc: impl Into<String>) -> Self {
        self.doc = Some(doc.into());
        self
    }

    /// Sets the CWL type expression.
    pub fn with_type(mut self, parameter_type: impl Into<String>) -> Self {
        self.parameter_type = Some(parameter_type.into());
        self
    }

    /// Sets the default value.
    pub fn with_default(mut self, default: serde_json::Value) -> Self {
        self.default = Some(default);
        self
    }
}

/// Reference(s) from a workflow output parameter to the step output(s)
/// feeding it, in `"<stepId>/<portId>"` form.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Eq)]
#[serde(untagged)]
pub enum OutputSource {
    Single(String),
    Multiple(Vec<String>),
}

impl From<String> for OutputSource {
    fn from(source: String) -> Self {
        OutputSource::Single(source)
    }
}

impl From<&str> for OutputSource {
    fn from(source: &str) -> Self {
        OutputSource::Single(source.to_string())
    }
}

impl From<Vec<String>> for OutputSource {
    fn from(sources: Vec<String>) -> Self {
        OutputSource::Multiple(sources)
    }
}

/// An external output of the workflow.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
pub struct WorkflowOutputParameter {
    /// Unique identifier within the workflow's outputs.
    pub id: String,

    /// Where this output's data comes from. Set exactly once.
    #[serde(
        rename = "outputSource",
        default,
        skip_serializing_if = "Option::is_none"
    )]
    pub output_source: Option<OutputSource>,
}

impl WorkflowOutputParameter {
    /// Creates an unconnected output parameter.
    pub fn new(id: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            output_source: None,
        }
    }

    /// Points this output at the step output(s) feeding it.
    pub fn set_output_source(&mut self, source: impl Into<OutputSource>) {
        self.output_source = Some(source.into());
    }

    /// True once an output source has been set.
    pub fn is_connected(&self) -> bool {
        self.output_source.is_some()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_input_parameter_id_only() {
        let param = InputParameter::new("wf-input");
        assert_eq!(param.id, "wf-input");
        assert!(param.label.is_none());
        assert!(param.default.is_none());
    }

    #[test]
    fn test_input_parameter_builders() {
        let param = InputParameter::new("reads")
            .with_label("Raw reads")
            .with_doc("FASTQ file with raw sequencing reads")
            .with_type("File")
            .with_default(serde_json::json!("reads.fastq"));

        assert_eq!(param.label.as_deref(), Some("Raw reads"));
        assert_eq!(param.parameter_type.as_deref(), Some("File"));
        assert_eq!(param.default, Some(serde_json::json!("reads.fastq")));
    }

    #[test]
    fn test_optional_fields_skipped_when_unset() {
        let param = InputParameter::new("wf-input");
        let yaml = serde_yaml::to_string(&param).unwrap();
        assert!(yaml.contains("id: wf-input"));
        assert!(!yaml.contains("label"));
        assert!(!yaml.contains("type"));
        assert!(!yaml.contains("default"));
    }

    #[test]
    fn test_output_parameter_connection_state() {
        let mut param = WorkflowOutputParameter::new("wf-output");
        assert!(!param.is_connected());

        param.set_output_source("sorted/sortstep-output");
        assert!(param.is_connected());
        assert_eq!(
            param.output_source,
            Some(OutputSource::Single("sorted/sortstep-output".to_string()))
        );
    }

    #[test]
    fn test_output_source_serializes_as_plain_string() {
        let mut param = WorkflowOutputParameter::new("wf-output");
        param.set_output_source("sorted/sortstep-output");

        let yaml = serde_yaml::to_string(&param).unwrap();
        assert!(yaml.contains("outputSource: sorted/sortstep-output"));
    }

    #[test]
    fn test_output_source_list_form() {
        let source: OutputSource =
            vec!["a/out".to_string(), "b/out".to_string()].into();
        assert_eq!(
            source,
            OutputSource::Multiple(vec!["a/out".to_string(), "b/out".to_string()])
        );
    }
}
