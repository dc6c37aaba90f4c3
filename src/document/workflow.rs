//! Workflow Document Root
//!
//! The container for steps and workflow-level parameters. Field order
//! matches the emitted document: class tag, version, id, inputs, outputs,
//! steps.

use std::rc::Rc;

use serde::{Deserialize, Serialize};

use super::parameters::{InputParameter, WorkflowOutputParameter};
use super::step::WorkflowStep;
use super::DocumentConfig;
use crate::error::{Result, ValidationError};

fn workflow_class() -> String {
    "Workflow".to_string()
}

/// A CWL workflow document under construction.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
pub struct Workflow {
    /// Document class tag, always `"Workflow"`.
    #[serde(default = "workflow_class")]
    pub class: String,

    /// CWL specification version this document targets.
    #[serde(rename = "cwlVersion")]
    pub cwl_version: String,

    /// Unique identifier of the workflow.
    pub id: String,

    /// Workflow-level input parameters, unique by id.
    ///
    /// Parameters are shared: a step input bound to a workflow input holds
    /// another handle to the same object.
    #[serde(default)]
    pub inputs: Vec<Rc<InputParameter>>,

    /// Workflow-level output parameters, unique by id.
    #[serde(default)]
    pub outputs: Vec<WorkflowOutputParameter>,

    /// Ordered list of steps, unique by id.
    #[serde(default)]
    pub steps: Vec<WorkflowStep>,
}

impl Workflow {
    /// Creates an empty workflow targeting the default CWL version.
    pub fn new(id: impl Into<String>) -> Self {
        Self::with_config(id, &DocumentConfig::default())
    }

    /// Creates an empty workflow with an explicit document configuration.
    pub fn with_config(id: impl Into<String>, config: &DocumentConfig) -> Self {
        Self {
            class: workflow_class(),
            cwl_version: config.cwl_version.clone(),
            id: id.into(),
            inputs: Vec::new(),
            outputs: Vec::new(),
            steps: Vec::new(),
        }
    }

    /// Adds a step, rejecting duplicate step ids.
    ///
    /// Lookups by id return the first match, so a duplicate id would make
    /// every later connection silently target the earlier step. Rejecting
    /// the duplicate up front keeps lookups unambiguous.
    pub fn add_step(&mut self, step: WorkflowStep) -> Result<()> {
        if self.steps.iter().any(|s| s.id == step.id) {
            return Err(ValidationError::DuplicateStepId(step.id));
        }
        self.steps.push(step);
        Ok(())
    }

    /// Gets a step by id.
    pub fn step_by_id(&self, id: &str) -> Option<&WorkflowStep> {
        self.steps.iter().find(|s| s.id == id)
    }

    /// Gets a mutable step by id.
    pub fn step_by_id_mut(&mut self, id: &str) -> Option<&mut WorkflowStep> {
        self.steps.iter_mut().find(|s| s.id == id)
    }

    /// Gets the position of a step by id.
    pub fn step_index(&self, id: &str) -> Option<usize> {
        self.steps.iter().position(|s| s.id == id)
    }

    /// Registers an input parameter, rejecting duplicate ids.
    ///
    /// Returns the shared handle so callers can alias it from step inputs.
    pub fn add_input_parameter(&mut self, parameter: InputParameter) -> Result<Rc<InputParameter>> {
        if self.inputs.iter().any(|p| p.id == parameter.id) {
            return Err(ValidationError::DuplicateInputParameter(parameter.id));
        }
        let parameter = Rc::new(parameter);
        self.inputs.push(Rc::clone(&parameter));
        Ok(parameter)
    }

    /// Looks up an input parameter by id.
    pub fn input_parameter_by_id(&self, id: &str) -> Option<&Rc<InputParameter>> {
        self.inputs.iter().find(|p| p.id == id)
    }

    /// Registers an output parameter, rejecting duplicate ids.
    pub fn add_output_parameter(&mut self, parameter: WorkflowOutputParameter) -> Result<()> {
        if self.outputs.iter().any(|p| p.id == parameter.id) {
            return Err(ValidationError::DuplicateOutputParameter(parameter.id));
        }
        self.outputs.push(parameter);
        Ok(())
    }

    /// Looks up an output parameter by id.
    pub fn output_parameter_by_id(&self, id: &str) -> Option<&WorkflowOutputParameter> {
        self.outputs.iter().find(|p| p.id == id)
    }

    /// Looks up a mutable output parameter by id.
    pub fn output_parameter_by_id_mut(&mut self, id: &str) -> Option<&mut WorkflowOutputParameter> {
        self.outputs.iter_mut().find(|p| p.id == id)
    }
}
