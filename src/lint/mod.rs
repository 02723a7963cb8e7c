mod trigger_present;

pub use trigger_present::TriggerPresentRule;

use crate::{
    classify::is_valid_node_type_format,
    model::{Workflow, WorkflowNode},
    normalize::{is_short_form, normalize_to_full_form},
};

/// Run the per-node type checks.
pub fn lint_node_types(workflow: &Workflow) -> Vec<String> {
    let mut errors = Vec::new();
    for (idx, node) in workflow.nodes.iter().enumerate() {
        let label = node_label(idx, node);
        let Some(node_type) = node.type_str().filter(|t| !t.is_empty()) else {
            errors.push(format!("node_type_present: {label} has no string type"));
            continue;
        };
        if !is_valid_node_type_format(node_type) {
            errors.push(format!(
                "node_type_format: {label} type '{node_type}' is not of the form '<package>.<name>'"
            ));
        }
        if is_short_form(node_type) {
            errors.push(format!(
                "node_type_short_form: {label} type '{node_type}' should be '{}'",
                normalize_to_full_form(node_type)
            ));
        }
    }
    errors
}

/// Run every lint rule against a workflow.
pub fn lint_workflow(workflow: &Workflow) -> Vec<String> {
    let mut errors = lint_node_types(workflow);
    errors.extend(TriggerPresentRule::check(workflow));
    errors
}

pub(crate) fn node_label(idx: usize, node: &WorkflowNode) -> String {
    match node.name() {
        Some(name) => format!("node #{idx} ('{name}')"),
        None => format!("node #{idx}"),
    }
}
