//! cwlgraph - Programmatic CWL Workflow Builder
//!
//! A library for constructing Common Workflow Language (CWL) v1.0 workflow
//! documents in memory: steps, their input/output ports, and the workflow's
//! own parameters, wired together through an API that enforces the
//! structural rules of the document format as the graph is built.
//!
//! The crate never executes anything. The end product is a static document
//! graph ready to be emitted as YAML and handed to an external executor.
//!
//! # Architecture
//!
//! The library is organized into three main modules:
//!
//! - [`document`]: Data structures mirroring the CWL document elements
//! - [`graph`]: The connection subsystem and the [`WorkflowGraph`] builder
//! - [`emit`]: Serialization of a finished graph to YAML
//!
//! # Example
//!
//! ```rust
//! use cwlgraph::{WorkflowGraph, WorkflowStep, emit};
//!
//! fn main() -> Result<(), Box<dyn std::error::Error>> {
//!     let mut graph = WorkflowGraph::new("revsort")
//!         .step(WorkflowStep::new("rev").with_run("revtool.cwl"))?
//!         .step(WorkflowStep::new("sorted").with_run("sorttool.cwl"))?;
//!
//!     graph
//!         .connect("wf-input", "rev.revstep-input")?
//!         .connect("rev.revstep-output", "sorted.sortstep-input")?
//!         .connect("sorted.sortstep-output", "wf-output")?;
//!
//!     let yaml = emit::to_yaml(graph.workflow())?;
//!     println!("{}", yaml);
//!     Ok(())
//! }
//! ```

pub mod document;
pub mod emit;
pub mod error;
pub mod graph;

// Re-export commonly used types
pub use document::{
    DocumentConfig, InputParameter, StepRun, Workflow, WorkflowOutputParameter, WorkflowStep,
    WorkflowStepInput, WorkflowStepOutput,
};
pub use error::{Result, ValidationError};
pub use graph::{
    WorkflowGraph, WorkflowInputConnection, WorkflowOutputConnection, WorkflowStepConnection,
};

/// Library version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
