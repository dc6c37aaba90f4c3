//! Validation Errors
//!
//! Every failure in this crate is a caller contract violation: a wrong id,
//! a duplicate binding, or a malformed connection request. There is nothing
//! to retry — the caller fixes the call.

use thiserror::Error;

/// The single error type surfaced by all graph-building operations.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ValidationError {
    /// A step id was referenced that is not part of the workflow.
    #[error("step '{0}' is not a part of the workflow")]
    StepNotFound(String),

    /// A step with this id has already been added to the workflow.
    #[error("workflow already has a step with id '{0}'")]
    DuplicateStepId(String),

    /// An input parameter with this id is already registered.
    #[error("workflow already has an input parameter with id '{0}'")]
    DuplicateInputParameter(String),

    /// An output parameter with this id is already registered.
    #[error("workflow already has an output parameter with id '{0}'")]
    DuplicateOutputParameter(String),

    /// A step input may be bound exactly once.
    #[error("step '{step}' already has an input with id '{input}'")]
    InputAlreadyBound { step: String, input: String },

    /// A step output may be declared exactly once.
    #[error("step '{step}' already has an output with id '{output}'")]
    OutputAlreadyDeclared { step: String, output: String },

    /// A workflow output parameter may be sourced exactly once, ever.
    #[error("output parameter '{0}' exists and is already connected")]
    OutputAlreadyConnected(String),

    /// The number of step input ids must match the number of steps bound
    /// to the connection.
    #[error("got {inputs} step input ids for {steps} steps")]
    StepInputArity { steps: usize, inputs: usize },

    /// Step-to-step connections operate on a fixed (producer, consumer) pair.
    #[error("can only connect with two steps, got {0}")]
    ExactlyTwoSteps(usize),

    /// Workflow outputs are fed by a single producing step.
    #[error("cannot connect multiple steps to a single workflow output (got {0} steps)")]
    SingleOutputStep(usize),

    /// The path dispatcher cannot wire a workflow input directly to a
    /// workflow output.
    #[error("cannot connect '{src}' to '{dest}': workflow inputs cannot feed workflow outputs directly")]
    UnsupportedConnection { src: String, dest: String },
}

/// Convenience alias used throughout the crate.
pub type Result<T> = std::result::Result<T, ValidationError>;
