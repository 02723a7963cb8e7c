use crate::{
    classify::is_trigger_node,
    model::{Workflow, WorkflowNode},
};

/// A workflow with nodes needs at least one of them to start it.
#[derive(Clone, Debug, Default)]
pub struct TriggerPresentRule;

impl TriggerPresentRule {
    pub fn check(workflow: &Workflow) -> Vec<String> {
        if workflow.nodes.is_empty() {
            return Vec::new();
        }
        let has_trigger = workflow
            .nodes
            .iter()
            .filter_map(WorkflowNode::type_str)
            .any(is_trigger_node);
        if has_trigger {
            Vec::new()
        } else {
            vec![format!(
                "trigger_present: none of the {} node(s) is a trigger",
                workflow.nodes.len()
            )]
        }
    }
}
