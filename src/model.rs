use indexmap::IndexMap;
use serde::{Deserialize, Deserializer, Serialize};
use serde_json::Value;
use tracing::debug;

use crate::normalize::{normalize_to_full_form, normalize_value};

/// The part of a workflow this crate cares about: its nodes. Everything else
/// rides along in `extra` untouched.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Default)]
pub struct Workflow {
    pub nodes: Vec<WorkflowNode>,
    #[serde(flatten, default)]
    pub extra: IndexMap<String, Value>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Default)]
pub struct WorkflowNode {
    /// `None` when the key is absent; a present `null` or non-string is kept as is.
    #[serde(
        rename = "type",
        default,
        deserialize_with = "present_value",
        skip_serializing_if = "Option::is_none"
    )]
    pub node_type: Option<Value>,
    #[serde(flatten, default)]
    pub extra: IndexMap<String, Value>,
}

impl WorkflowNode {
    pub fn name(&self) -> Option<&str> {
        self.extra.get("name").and_then(Value::as_str)
    }

    /// The node type when it is a string.
    pub fn type_str(&self) -> Option<&str> {
        self.node_type.as_ref().and_then(Value::as_str)
    }
}

fn present_value<'de, D>(deserializer: D) -> Result<Option<Value>, D::Error>
where
    D: Deserializer<'de>,
{
    Value::deserialize(deserializer).map(Some)
}

/// Copy of `workflow` with every string node `type` in full form; node order,
/// non-string types and all other fields are preserved.
pub fn normalize_workflow_node_types(workflow: &Workflow) -> Workflow {
    let nodes: Vec<WorkflowNode> = workflow
        .nodes
        .iter()
        .map(|node| WorkflowNode {
            node_type: node.node_type.as_ref().map(normalize_value),
            extra: node.extra.clone(),
        })
        .collect();
    debug!(nodes = nodes.len(), "normalized workflow node types");
    Workflow {
        nodes,
        extra: workflow.extra.clone(),
    }
}

/// Same as [`normalize_workflow_node_types`] for an unchecked JSON value.
///
/// Input that is not an object with a `nodes` array is returned as is. Only
/// string `type` fields on object nodes are rewritten.
pub fn normalize_workflow_value(workflow: &Value) -> Value {
    let Some(nodes) = workflow.get("nodes").and_then(Value::as_array) else {
        return workflow.clone();
    };

    let nodes: Vec<Value> = nodes
        .iter()
        .map(|node| {
            let mut node = node.clone();
            if let Some(map) = node.as_object_mut()
                && let Some(Value::String(node_type)) = map.get_mut("type")
            {
                *node_type = normalize_to_full_form(node_type);
            }
            node
        })
        .collect();

    let mut out = workflow.clone();
    if let Some(map) = out.as_object_mut() {
        map.insert("nodes".to_string(), Value::Array(nodes));
    }
    out
}
