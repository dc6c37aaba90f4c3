//! Connection Operations
//!
//! The three operations that wire a workflow together: workflow input to
//! step inputs, step output to step input, and step output to workflow
//! outputs. Each connection is bound to a fixed ordered list of steps at
//! construction time; construction fails if any step is not a member of the
//! workflow.
//!
//! Multi-target operations are not transactional: targets applied before a
//! failing index stay applied, and the caller is expected to inspect the
//! graph rather than retry blindly.

use std::rc::Rc;

use log::debug;

use crate::document::{
    InputParameter, StepInputSource, Workflow, WorkflowOutputParameter, WorkflowStepInput,
    WorkflowStepOutput,
};
use crate::error::{Result, ValidationError};

/// Resolves step ids against the workflow, in order.
fn resolve_steps(workflow: &Workflow, step_ids: &[&str]) -> Result<Vec<usize>> {
    step_ids
        .iter()
        .map(|id| {
            workflow
                .step_index(id)
                .ok_or_else(|| ValidationError::StepNotFound(id.to_string()))
        })
        .collect()
}

/// Ensures the step has an output port with the given id, creating it if
/// absent. The same output may feed any number of downstream connections.
fn ensure_step_output(workflow: &mut Workflow, step_index: usize, output_id: &str) -> Result<()> {
    let step = &mut workflow.steps[step_index];
    if step.output_by_id(output_id).is_none() {
        step.add_output(WorkflowStepOutput::new(output_id))?;
    }
    Ok(())
}

/// Connects a workflow-level input to inputs of the bound steps.
///
/// The same workflow input may fan out to many steps: the parameter is
/// looked up or created once, while each step input is a strict one-time
/// binding.
#[derive(Debug)]
pub struct WorkflowInputConnection<'w> {
    workflow: &'w mut Workflow,
    steps: Vec<usize>,
}

impl<'w> WorkflowInputConnection<'w> {
    /// Binds the connection to an ordered list of steps.
    pub fn new(workflow: &'w mut Workflow, step_ids: &[&str]) -> Result<Self> {
        let steps = resolve_steps(workflow, step_ids)?;
        Ok(Self { workflow, steps })
    }

    /// Connects the workflow input to one step input per bound step,
    /// positionally.
    pub fn connect(&mut self, workflow_input_id: &str, step_input_ids: &[&str]) -> Result<()> {
        if step_input_ids.len() != self.steps.len() {
            return Err(ValidationError::StepInputArity {
                steps: self.steps.len(),
                inputs: step_input_ids.len(),
            });
        }
        for (&step_index, step_input_id) in self.steps.iter().zip(step_input_ids) {
            connect_single_input(self.workflow, workflow_input_id, step_input_id, step_index)?;
        }
        Ok(())
    }
}

fn connect_single_input(
    workflow: &mut Workflow,
    workflow_input_id: &str,
    step_input_id: &str,
    step_index: usize,
) -> Result<()> {
    // Reuse the parameter when the workflow already has it; the object is
    // shared between workflow.inputs and every step input bound to it.
    let parameter = match workflow.input_parameter_by_id(workflow_input_id).map(Rc::clone) {
        Some(parameter) => parameter,
        None => {
            debug!("registering workflow input parameter '{}'", workflow_input_id);
            workflow.add_input_parameter(InputParameter::new(workflow_input_id))?
        }
    };

    let mut step_input = WorkflowStepInput::new(step_input_id);
    step_input.set_source(StepInputSource::Parameter(parameter));

    // add_input is the one-time-binding check.
    workflow.steps[step_index].add_input(step_input)
}

/// Connects one step's output to another step's input.
///
/// Operates on exactly two steps fixed at construction: the producer first,
/// the consumer second. Fan-out to several consumers takes one call per
/// consumer.
pub struct WorkflowStepConnection<'w> {
    workflow: &'w mut Workflow,
    steps: Vec<usize>,
}

impl<'w> WorkflowStepConnection<'w> {
    /// Binds the connection to `[producer, consumer]`.
    pub fn new(workflow: &'w mut Workflow, step_ids: &[&str]) -> Result<Self> {
        let steps = resolve_steps(workflow, step_ids)?;
        Ok(Self { workflow, steps })
    }

    /// Wires `producer/<step_output_id>` into the consumer's input.
    pub fn connect(&mut self, step_output_id: &str, step_input_id: &str) -> Result<()> {
        if self.steps.len() != 2 {
            return Err(ValidationError::ExactlyTwoSteps(self.steps.len()));
        }
        let (producer, consumer) = (self.steps[0], self.steps[1]);

        ensure_step_output(self.workflow, producer, step_output_id)?;

        let source = format!("{}/{}", self.workflow.steps[producer].id, step_output_id);
        debug!(
            "connecting '{}' to input '{}' of step '{}'",
            source, step_input_id, self.workflow.steps[consumer].id
        );

        let mut step_input = WorkflowStepInput::new(step_input_id);
        step_input.set_source(StepInputSource::Reference(source));
        self.workflow.steps[consumer].add_input(step_input)
    }
}

/// Connects a step's output to workflow-level outputs.
///
/// Bound to exactly one producing step. The same step output may feed
/// several workflow outputs, but each workflow output is sourced exactly
/// once, ever.
pub struct WorkflowOutputConnection<'w> {
    workflow: &'w mut Workflow,
    steps: Vec<usize>,
}

impl<'w> WorkflowOutputConnection<'w> {
    /// Binds the connection to the single producing step.
    pub fn new(workflow: &'w mut Workflow, step_ids: &[&str]) -> Result<Self> {
        let steps = resolve_steps(workflow, step_ids)?;
        Ok(Self { workflow, steps })
    }

    /// Wires the step output into each named workflow output.
    pub fn connect(&mut self, step_output_id: &str, workflow_output_ids: &[&str]) -> Result<()> {
        if self.steps.len() != 1 {
            return Err(ValidationError::SingleOutputStep(self.steps.len()));
        }
        let step_index = self.steps[0];
        for workflow_output_id in workflow_output_ids {
            connect_single_output(self.workflow, workflow_output_id, step_output_id, step_index)?;
        }
        Ok(())
    }
}

fn connect_single_output(
    workflow: &mut Workflow,
    workflow_output_id: &str,
    step_output_id: &str,
    step_index: usize,
) -> Result<()> {
    ensure_step_output(workflow, step_index, step_output_id)?;

    let output_source = format!("{}/{}", workflow.steps[step_index].id, step_output_id);

    if let Some(existing) = workflow.outputs.iter().position(|p| p.id == workflow_output_id) {
        let parameter = &mut workflow.outputs[existing];
        if parameter.is_connected() {
            return Err(ValidationError::OutputAlreadyConnected(
                workflow_output_id.to_string(),
            ));
        }
        parameter.set_output_source(output_source);
        return Ok(());
    }

    debug!(
        "registering workflow output parameter '{}' sourced from '{}'",
        workflow_output_id, output_source
    );
    let mut parameter = WorkflowOutputParameter::new(workflow_output_id);
    parameter.set_output_source(output_source);
    workflow.add_output_parameter(parameter)
}
