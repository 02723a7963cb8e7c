//! Normalization and classification of n8n node-type identifiers.
//!
//! Every function in [`normalize`] and [`classify`] is total: empty or
//! malformed input comes back unchanged or as a documented sentinel, never as
//! an error. Only reading workflows from text or disk can fail.
#![forbid(unsafe_code)]

pub mod classify;
pub mod error;
pub mod inspect;
pub mod json_output;
pub mod lint;
pub mod loader;
pub mod model;
pub mod normalize;
pub mod util;

pub use classify::{
    UNKNOWN_TRIGGER_TYPE, denormalize_node_type, extract_node_name, get_node_package,
    get_node_type_variations, get_trigger_type_description, is_activatable_trigger,
    is_base_node, is_langchain_node, is_trigger_node, is_valid_node_type_format,
};
pub use inspect::NodeTypeReport;
pub use model::{Workflow, WorkflowNode, normalize_workflow_node_types, normalize_workflow_value};
pub use normalize::{
    NodePackage, NormalizationResult, is_full_form, is_short_form, normalize_batch,
    normalize_to_full_form, normalize_value, normalize_with_details, to_workflow_format,
};

use crate::{error::Result, lint::lint_workflow, loader::load_workflow_from_str};

/// Parse a workflow and return its lint findings.
pub fn load_and_lint(json: &str) -> Result<Vec<String>> {
    let workflow = load_workflow_from_str(json)?;
    Ok(lint_workflow(&workflow))
}
