use serde::Serialize;

use crate::{
    classify::{
        extract_node_name, get_node_package, get_node_type_variations,
        get_trigger_type_description, is_activatable_trigger, is_base_node, is_langchain_node,
        is_trigger_node, is_valid_node_type_format,
    },
    normalize::{NormalizationResult, normalize_with_details},
};

/// Everything the classifier knows about one node type.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct NodeTypeReport {
    #[serde(flatten)]
    pub normalization: NormalizationResult,
    pub node_name: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub package_name: Option<String>,
    pub is_base: bool,
    pub is_langchain: bool,
    pub valid_format: bool,
    pub is_trigger: bool,
    pub is_activatable: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub trigger_description: Option<&'static str>,
    pub variations: Vec<String>,
}

impl NodeTypeReport {
    pub fn new(node_type: &str) -> Self {
        let is_trigger = is_trigger_node(node_type);
        NodeTypeReport {
            normalization: normalize_with_details(node_type),
            node_name: extract_node_name(node_type),
            package_name: get_node_package(node_type),
            is_base: is_base_node(node_type),
            is_langchain: is_langchain_node(node_type),
            valid_format: is_valid_node_type_format(node_type),
            is_trigger,
            is_activatable: is_activatable_trigger(node_type),
            trigger_description: is_trigger.then(|| get_trigger_type_description(node_type)),
            variations: get_node_type_variations(node_type),
        }
    }

    /// Plain-text rendering used by the CLI.
    pub fn to_text(&self) -> String {
        let mut lines = vec![
            format!("original:    {}", self.normalization.original),
            format!("normalized:  {}", self.normalization.normalized),
            format!("package:     {}", self.normalization.package),
            format!("node name:   {}", self.node_name),
            format!("valid:       {}", self.valid_format),
            format!("trigger:     {}", self.is_trigger),
        ];
        if let Some(description) = self.trigger_description {
            lines.push(format!("trigger kind: {description}"));
        }
        for variation in &self.variations {
            lines.push(format!("variation:   {variation}"));
        }
        lines.join("\n")
    }
}
