//! Document Emission
//!
//! Serializes a fully-wired [`Workflow`] to its on-disk YAML form. Field
//! order follows the document model: class/version tag, inputs, outputs,
//! steps; each step emits id/in/out/run.

use std::error::Error;
use std::fs;
use std::path::Path;

use log::{debug, info};

use crate::document::{DocumentConfig, StepRun, Workflow};

/// Serializes the workflow to a YAML string.
pub fn to_yaml(workflow: &Workflow) -> Result<String, serde_yaml::Error> {
    serde_yaml::to_string(workflow)
}

/// Serializes the workflow to YAML, resolving relative `run` references
/// against `config.base_uri` in the emitted copy.
///
/// The in-memory graph is left untouched.
pub fn to_yaml_with(
    workflow: &Workflow,
    config: &DocumentConfig,
) -> Result<String, serde_yaml::Error> {
    match &config.base_uri {
        Some(base) => {
            let mut resolved = workflow.clone();
            resolve_run_uris(&mut resolved, base);
            serde_yaml::to_string(&resolved)
        }
        None => to_yaml(workflow),
    }
}

/// Writes the workflow as a YAML document to `path`.
pub fn save_to_file(workflow: &Workflow, path: impl AsRef<Path>) -> Result<(), Box<dyn Error>> {
    let path = path.as_ref();
    info!("saving workflow '{}' to {}", workflow.id, path.display());

    let yaml = to_yaml(workflow)?;
    fs::write(path, &yaml).map_err(|e| {
        format!(
            "Failed to write workflow file '{}': {}. Check that the directory exists and is writable.",
            path.display(),
            e
        )
    })?;

    debug!("wrote {} bytes", yaml.len());
    Ok(())
}

fn is_relative(uri: &str) -> bool {
    !uri.is_empty() && !uri.contains("://") && !uri.starts_with('/')
}

fn resolve_run_uris(workflow: &mut Workflow, base: &str) {
    for step in &mut workflow.steps {
        match &mut step.run {
            StepRun::Uri(uri) if is_relative(uri) => {
                *uri = format!("{}/{}", base.trim_end_matches('/'), uri);
            }
            // Embedded sub-workflows carry their own run references.
            StepRun::Workflow(sub) => resolve_run_uris(sub, base),
            _ => {}
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::document::WorkflowStep;
    use crate::graph::WorkflowGraph;

    /// The revsort document from the CWL v1.0 conformance examples.
    const REVSORT_WORKFLOW: &str = "\
class: Workflow
cwlVersion: v1.0
id: revsort
inputs:
- id: wf-input
- id: wf-reverse_sort
outputs:
- id: wf-output
  outputSource: sorted/sortstep-output
steps:
- id: rev
  in:
  - id: revstep-input
    source:
      id: wf-input
  out:
  - id: revstep-output
  run: revtool.cwl
- id: sorted
  in:
  - id: sortstep-reverse
    source:
      id: wf-reverse_sort
  - id: sortstep-input
    source: rev/revstep-output
  out:
  - id: sortstep-output
  run: sorttool.cwl
";

    fn build_revsort() -> Workflow {
        let mut graph = WorkflowGraph::new("revsort")
            .step(WorkflowStep::new("rev").with_run("revtool.cwl"))
            .unwrap()
            .step(WorkflowStep::new("sorted").with_run("sorttool.cwl"))
            .unwrap();
        graph
            .connect("wf-input", "rev.revstep-input")
            .unwrap()
            .connect("wf-reverse_sort", "sorted.sortstep-reverse")
            .unwrap()
            .connect("rev.revstep-output", "sorted.sortstep-input")
            .unwrap()
            .connect("sorted.sortstep-output", "wf-output")
            .unwrap();
        graph.into_workflow()
    }

    #[test]
    fn test_revsort_emits_reference_document() {
        let yaml = to_yaml(&build_revsort()).unwrap();

        // Compare as parsed values so the assertion is about structure,
        // not formatting.
        let emitted: serde_yaml::Value = serde_yaml::from_str(&yaml).unwrap();
        let expected: serde_yaml::Value = serde_yaml::from_str(REVSORT_WORKFLOW).unwrap();
        assert_eq!(emitted, expected);
    }

    #[test]
    fn test_unset_optional_fields_are_omitted() {
        let yaml = to_yaml(&build_revsort()).unwrap();
        assert!(!yaml.contains("label"));
        assert!(!yaml.contains("outputSource: null"));
    }

    #[test]
    fn test_base_uri_resolves_relative_run_references() {
        let config = DocumentConfig {
            cwl_version: "v1.0".to_string(),
            base_uri: Some("file:///pipelines/revsort".to_string()),
        };
        let workflow = build_revsort();

        let yaml = to_yaml_with(&workflow, &config).unwrap();
        assert!(yaml.contains("run: file:///pipelines/revsort/revtool.cwl"));
        assert!(yaml.contains("run: file:///pipelines/revsort/sorttool.cwl"));

        // Source graph keeps the relative form.
        assert!(matches!(
            &workflow.steps[0].run,
            StepRun::Uri(uri) if uri == "revtool.cwl"
        ));
    }

    #[test]
    fn test_base_uri_leaves_absolute_references_alone() {
        let config = DocumentConfig {
            cwl_version: "v1.0".to_string(),
            base_uri: Some("file:///pipelines".to_string()),
        };
        let mut workflow = Workflow::new("wf");
        workflow
            .add_step(WorkflowStep::new("s").with_run("https://example.org/tool.cwl"))
            .unwrap();

        let yaml = to_yaml_with(&workflow, &config).unwrap();
        assert!(yaml.contains("run: https://example.org/tool.cwl"));
    }

    #[test]
    fn test_save_to_file_round_trips() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("revsort.cwl");

        let workflow = build_revsort();
        save_to_file(&workflow, &path).unwrap();

        let contents = fs::read_to_string(&path).unwrap();
        let emitted: serde_yaml::Value = serde_yaml::from_str(&contents).unwrap();
        assert_eq!(emitted["id"], "revsort");
        assert_eq!(emitted["steps"][0]["id"], "rev");
    }
}
