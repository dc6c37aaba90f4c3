//! Workflow Steps and Their Ports
//!
//! A [`WorkflowStep`] is a named unit of work with declared input and output
//! ports and a `run` reference naming (or embedding) its implementation.
//! Port collections grow monotonically through the uniqueness-checked
//! `add_input`/`add_output` methods; connection operations never reassign an
//! existing binding.

use std::rc::Rc;

use serde::{Deserialize, Serialize};

use super::parameters::InputParameter;
use super::workflow::Workflow;
use crate::error::{Result, ValidationError};

/// What feeds a step input.
///
/// Workflow inputs are linked by shared ownership of the parameter object,
/// so the emitted document nests the parameter inline. Step-to-step links
/// are plain `"<stepId>/<portId>"` strings instead: the producing step may
/// not exist yet as an object when a document is assembled in the general
/// case.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
#[serde(untagged)]
pub enum StepInputSource {
    /// A workflow-level input parameter, shared with `workflow.inputs`.
    Parameter(Rc<InputParameter>),
    /// A single `"<stepId>/<portId>"` reference to another step's output.
    Reference(String),
    /// An ordered list of `"<stepId>/<portId>"` references.
    References(Vec<String>),
}

/// A named input port on a step.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
pub struct WorkflowStepInput {
    /// Unique identifier within the step's inputs.
    pub id: String,

    /// What feeds this input. Set once by a connection operation.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub source: Option<StepInputSource>,
}

impl WorkflowStepInput {
    /// Creates an unconnected step input.
    pub fn new(id: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            source: None,
        }
    }

    /// Sets the source feeding this input.
    pub fn set_source(&mut self, source: StepInputSource) {
        self.source = Some(source);
    }
}

/// A named output port a step promises to produce.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Eq)]
pub struct WorkflowStepOutput {
    /// Unique identifier within the step's outputs.
    pub id: String,
}

impl WorkflowStepOutput {
    pub fn new(id: impl Into<String>) -> Self {
        Self { id: id.into() }
    }
}

/// Minimal embedded tool definition.
///
/// Full CWL tool schemas (base command, requirements, bindings) are outside
/// this crate; the holder exists so a step can embed a tool rather than
/// reference one by path.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
#[serde(deny_unknown_fields)]
pub struct CommandLineTool {
    /// Document class tag, always `"CommandLineTool"`.
    pub class: String,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub id: Option<String>,
}

impl CommandLineTool {
    pub fn new(id: impl Into<String>) -> Self {
        Self {
            class: "CommandLineTool".to_string(),
            id: Some(id.into()),
        }
    }
}

/// A step's implementation reference.
///
/// Either an opaque path/URI to an external document, or an embedded
/// process definition.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
#[serde(untagged)]
pub enum StepRun {
    /// Path or URI of an external tool or workflow document.
    Uri(String),
    /// Embedded tool definition.
    Tool(CommandLineTool),
    /// Embedded sub-workflow.
    Workflow(Box<Workflow>),
}

impl StepRun {
    /// True when the reference is a plain path/URI rather than an embedded
    /// definition.
    pub fn is_uri(&self) -> bool {
        matches!(self, StepRun::Uri(_))
    }
}

impl From<String> for StepRun {
    fn from(uri: String) -> Self {
        StepRun::Uri(uri)
    }
}

impl From<&str> for StepRun {
    fn from(uri: &str) -> Self {
        StepRun::Uri(uri.to_string())
    }
}

impl From<CommandLineTool> for StepRun {
    fn from(tool: CommandLineTool) -> Self {
        StepRun::Tool(tool)
    }
}

impl From<Workflow> for StepRun {
    fn from(workflow: Workflow) -> Self {
        StepRun::Workflow(Box::new(workflow))
    }
}

/// A single step in a workflow.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
pub struct WorkflowStep {
    /// Unique identifier within the workflow.
    pub id: String,

    /// Input ports, unique by id within this step.
    #[serde(rename = "in", default)]
    pub inputs: Vec<WorkflowStepInput>,

    /// Output ports, unique by id within this step.
    #[serde(rename = "out", default)]
    pub outputs: Vec<WorkflowStepOutput>,

    /// The step's implementation reference.
    pub run: StepRun,
}

impl WorkflowStep {
    /// Creates a step with an empty run reference.
    ///
    /// # Example
    ///
    /// ```
    /// use cwlgraph::document::WorkflowStep;
    ///
    /// let step = WorkflowStep::new("rev").with_run("revtool.cwl");
    /// assert_eq!(step.id, "rev");
    /// ```
    pub fn new(id: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            inputs: Vec::new(),
            outputs: Vec::new(),
            run: StepRun::Uri(String::new()),
        }
    }

    /// Sets the run reference, builder style.
    pub fn with_run(mut self, run: impl Into<StepRun>) -> Self {
        self.run = run.into();
        self
    }

    /// Sets the run reference in place.
    pub fn set_run(&mut self, run: impl Into<StepRun>) {
        self.run = run.into();
    }

    /// Adds an input port, rejecting duplicate ids.
    ///
    /// This is the one-time-binding check every connection operation relies
    /// on: an input that is already present is already connected.
    pub fn add_input(&mut self, input: WorkflowStepInput) -> Result<()> {
        if self.inputs.iter().any(|i| i.id == input.id) {
            return Err(ValidationError::InputAlreadyBound {
                step: self.id.clone(),
                input: input.id,
            });
        }
        self.inputs.push(input);
        Ok(())
    }

    /// Adds an output port, rejecting duplicate ids.
    pub fn add_output(&mut self, output: WorkflowStepOutput) -> Result<()> {
        if self.outputs.iter().any(|o| o.id == output.id) {
            return Err(ValidationError::OutputAlreadyDeclared {
                step: self.id.clone(),
                output: output.id,
            });
        }
        self.outputs.push(output);
        Ok(())
    }

    /// Looks up an input port by id.
    pub fn input_by_id(&self, id: &str) -> Option<&WorkflowStepInput> {
        self.inputs.iter().find(|i| i.id == id)
    }

    /// Looks up an output port by id.
    pub fn output_by_id(&self, id: &str) -> Option<&WorkflowStepOutput> {
        self.outputs.iter().find(|o| o.id == id)
    }
}
