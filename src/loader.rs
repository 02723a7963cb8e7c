use crate::{
    error::{ErrorLocation, Result, WorkflowError},
    model::Workflow,
};
use serde_json::Value;
use std::{fs, path::Path};
use tracing::{debug, trace};

const INLINE_SOURCE: &str = "<inline>";

/// Parse a workflow from JSON text.
pub fn load_workflow_from_str(json: &str) -> Result<Workflow> {
    load_workflow_from_str_with_source(json, INLINE_SOURCE)
}

pub fn load_workflow_from_str_with_source(
    json: &str,
    source_label: impl Into<String>,
) -> Result<Workflow> {
    let source_label = source_label.into();
    let value = load_workflow_value_with_source(json, source_label.clone(), None)?;
    typed_from_value(value, source_label, None)
}

/// Parse a workflow file into the typed model.
pub fn load_workflow_from_path(path: &Path) -> Result<Workflow> {
    let value = load_workflow_value_from_path(path)?;
    typed_from_value(value, path.display().to_string(), Some(path))
}

/// Parse a workflow from JSON text without imposing any shape.
pub fn load_workflow_value_from_str(json: &str) -> Result<Value> {
    load_workflow_value_from_str_with_source(json, INLINE_SOURCE)
}

pub fn load_workflow_value_from_str_with_source(
    json: &str,
    source_label: impl Into<String>,
) -> Result<Value> {
    load_workflow_value_with_source(json, source_label, None)
}

pub fn load_workflow_value_from_path(path: &Path) -> Result<Value> {
    let content = fs::read_to_string(path).map_err(|source| WorkflowError::Io {
        source,
        location: ErrorLocation::at_source(path.display().to_string())
            .with_source_path(Some(path)),
    })?;
    load_workflow_value_with_source(&content, path.display().to_string(), Some(path))
}

fn load_workflow_value_with_source(
    json: &str,
    source_label: impl Into<String>,
    source_path: Option<&Path>,
) -> Result<Value> {
    let source_label = source_label.into();
    trace!(source = %source_label, bytes = json.len(), "parsing workflow");
    serde_json::from_str(json).map_err(|e| WorkflowError::Json {
        message: e.to_string(),
        location: ErrorLocation::at_source(source_label)
            .with_source_path(source_path)
            .with_position(e.line(), e.column()),
    })
}

fn typed_from_value(
    value: Value,
    source_label: String,
    source_path: Option<&Path>,
) -> Result<Workflow> {
    if !value.get("nodes").is_some_and(Value::is_array) {
        return Err(WorkflowError::MissingNodes {
            location: ErrorLocation::at_source(source_label).with_source_path(source_path),
        });
    }
    let workflow: Workflow = serde_json::from_value(value).map_err(|e| WorkflowError::Json {
        message: e.to_string(),
        location: ErrorLocation::at_source(source_label.clone()).with_source_path(source_path),
    })?;
    debug!(source = %source_label, nodes = workflow.nodes.len(), "loaded workflow");
    Ok(workflow)
}
