//! Graph Construction Module
//!
//! The connection subsystem: everything that wires workflow inputs, step
//! ports, and workflow outputs together while keeping the document's
//! structural invariants intact.
//!
//! # Structure
//!
//! - [`builder`]: The [`WorkflowGraph`] wrapper and path-based dispatcher
//! - [`connections`]: The three connection operations

pub mod builder;
pub mod connections;

pub use builder::WorkflowGraph;
pub use connections::{WorkflowInputConnection, WorkflowOutputConnection, WorkflowStepConnection};
