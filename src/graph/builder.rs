//! Workflow Graph Builder
//!
//! [`WorkflowGraph`] owns a [`Workflow`] document and layers the connection
//! API on top of it: chaining step addition, the three named connection
//! helpers, and the path-based `connect` dispatcher that routes
//! `"stepId.portId"` / bare-identifier string pairs to the right operation.

use log::info;

use super::connections::{
    WorkflowInputConnection, WorkflowOutputConnection, WorkflowStepConnection,
};
use crate::document::{DocumentConfig, Workflow, WorkflowStep};
use crate::error::{Result, ValidationError};

/// One side of a `connect` call, classified by the `.` separator.
#[derive(Debug, PartialEq, Eq)]
enum PortPath<'a> {
    /// A bare identifier: a workflow-level input or output.
    Bare(&'a str),
    /// A `"<stepId>.<portId>"` pair.
    StepPort { step: &'a str, port: &'a str },
}

impl<'a> PortPath<'a> {
    fn parse(raw: &'a str) -> Self {
        match raw.split_once('.') {
            Some((step, port)) => PortPath::StepPort { step, port },
            None => PortPath::Bare(raw),
        }
    }
}

/// A workflow document under construction.
///
/// # Example
///
/// ```
/// use cwlgraph::graph::WorkflowGraph;
/// use cwlgraph::document::WorkflowStep;
///
/// # fn main() -> Result<(), cwlgraph::ValidationError> {
/// let mut graph = WorkflowGraph::new("revsort")
///     .step(WorkflowStep::new("rev").with_run("revtool.cwl"))?
///     .step(WorkflowStep::new("sorted").with_run("sorttool.cwl"))?;
///
/// graph
///     .connect("wf-input", "rev.revstep-input")?
///     .connect("rev.revstep-output", "sorted.sortstep-input")?
///     .connect("sorted.sortstep-output", "wf-output")?;
/// # Ok(())
/// # }
/// ```
#[derive(Debug, Clone, PartialEq)]
pub struct WorkflowGraph {
    workflow: Workflow,
}

impl WorkflowGraph {
    /// Starts an empty workflow graph.
    pub fn new(id: impl Into<String>) -> Self {
        Self {
            workflow: Workflow::new(id),
        }
    }

    /// Starts an empty workflow graph with an explicit document
    /// configuration.
    pub fn with_config(id: impl Into<String>, config: &DocumentConfig) -> Self {
        Self {
            workflow: Workflow::with_config(id, config),
        }
    }

    /// Wraps an existing workflow document.
    pub fn from_workflow(workflow: Workflow) -> Self {
        Self { workflow }
    }

    /// Adds a step, consuming and returning the graph for chaining.
    pub fn step(mut self, step: WorkflowStep) -> Result<Self> {
        self.add_step(step)?;
        Ok(self)
    }

    /// Adds a step in place.
    pub fn add_step(&mut self, step: WorkflowStep) -> Result<()> {
        info!("adding step '{}' to workflow '{}'", step.id, self.workflow.id);
        self.workflow.add_step(step)
    }

    /// Connects a workflow input to one step's input.
    pub fn connect_input(
        &mut self,
        step_id: &str,
        workflow_input_id: &str,
        step_input_id: &str,
    ) -> Result<&mut Self> {
        WorkflowInputConnection::new(&mut self.workflow, &[step_id])?
            .connect(workflow_input_id, &[step_input_id])?;
        Ok(self)
    }

    /// Connects a producer step's output to a consumer step's input.
    pub fn connect_steps(
        &mut self,
        producer_id: &str,
        consumer_id: &str,
        step_output_id: &str,
        step_input_id: &str,
    ) -> Result<&mut Self> {
        WorkflowStepConnection::new(&mut self.workflow, &[producer_id, consumer_id])?
            .connect(step_output_id, step_input_id)?;
        Ok(self)
    }

    /// Connects a step's output to a workflow output.
    pub fn connect_output(
        &mut self,
        step_id: &str,
        step_output_id: &str,
        workflow_output_id: &str,
    ) -> Result<&mut Self> {
        WorkflowOutputConnection::new(&mut self.workflow, &[step_id])?
            .connect(step_output_id, &[workflow_output_id])?;
        Ok(self)
    }

    /// Routes a `(source, dest)` string pair to the right connection
    /// operation.
    ///
    /// Each side is either a bare identifier (a workflow-level port) or a
    /// `"<stepId>.<portId>"` pair. Wiring a workflow input directly to a
    /// workflow output is not supported.
    pub fn connect(&mut self, source: &str, dest: &str) -> Result<&mut Self> {
        match (PortPath::parse(source), PortPath::parse(dest)) {
            (
                PortPath::StepPort { step: producer, port: output },
                PortPath::StepPort { step: consumer, port: input },
            ) => self.connect_steps(producer, consumer, output, input),
            (PortPath::StepPort { step, port }, PortPath::Bare(workflow_output_id)) => {
                self.connect_output(step, port, workflow_output_id)
            }
            (PortPath::Bare(workflow_input_id), PortPath::StepPort { step, port }) => {
                self.connect_input(step, workflow_input_id, port)
            }
            (PortPath::Bare(_), PortPath::Bare(_)) => Err(ValidationError::UnsupportedConnection {
                src: source.to_string(),
                dest: dest.to_string(),
            }),
        }
    }

    /// The underlying document.
    pub fn workflow(&self) -> &Workflow {
        &self.workflow
    }

    /// Mutable access to the underlying document.
    pub fn workflow_mut(&mut self) -> &mut Workflow {
        &mut self.workflow
    }

    /// Unwraps the finished document for emission.
    pub fn into_workflow(self) -> Workflow {
        self.workflow
    }
}
