//! Canonicalization of node-type spellings.
//!
//! Node types reach us in two dialects. The short form (`nodes-base.webhook`,
//! `nodes-langchain.agent`) comes from older storage, the full form
//! (`n8n-nodes-base.webhook`, `@n8n/n8n-nodes-langchain.agent`) is what the
//! workflow API expects. [`normalize_to_full_form`] is the single place that
//! maps one onto the other; everything in [`crate::classify`] goes through it.

use indexmap::IndexMap;
use serde::{Deserialize, Serialize};
use serde_json::Value;

pub const FULL_BASE_PREFIX: &str = "n8n-nodes-base.";
pub const FULL_LANGCHAIN_PREFIX: &str = "@n8n/n8n-nodes-langchain.";
/// Unscoped langchain spelling, accepted as already full.
pub const UNSCOPED_LANGCHAIN_PREFIX: &str = "n8n-nodes-langchain.";
pub const SHORT_BASE_PREFIX: &str = "nodes-base.";
pub const SHORT_LANGCHAIN_PREFIX: &str = "nodes-langchain.";

const FULL_FORM_PREFIXES: [&str; 3] = [
    FULL_BASE_PREFIX,
    FULL_LANGCHAIN_PREFIX,
    UNSCOPED_LANGCHAIN_PREFIX,
];

/// Package family a node type belongs to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum NodePackage {
    Base,
    Langchain,
    Community,
    Unknown,
}

impl NodePackage {
    /// Classify an already-normalized (or raw) node type by prefix.
    pub fn detect(node_type: &str) -> Self {
        if node_type.starts_with(SHORT_BASE_PREFIX) || node_type.starts_with(FULL_BASE_PREFIX) {
            NodePackage::Base
        } else if node_type.starts_with(SHORT_LANGCHAIN_PREFIX)
            || node_type.starts_with(FULL_LANGCHAIN_PREFIX)
            || node_type.starts_with(UNSCOPED_LANGCHAIN_PREFIX)
        {
            NodePackage::Langchain
        } else if node_type.contains('.') {
            NodePackage::Community
        } else {
            NodePackage::Unknown
        }
    }

    pub fn as_str(self) -> &'static str {
        match self {
            NodePackage::Base => "base",
            NodePackage::Langchain => "langchain",
            NodePackage::Community => "community",
            NodePackage::Unknown => "unknown",
        }
    }
}

impl std::fmt::Display for NodePackage {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Snapshot of one normalization, including what changed.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NormalizationResult {
    pub original: String,
    pub normalized: String,
    pub was_normalized: bool,
    pub package: NodePackage,
}

/// Map any accepted spelling to the canonical full form.
///
/// Already-full types, community types and empty input pass through unchanged.
/// Idempotent: a second application never changes the result.
pub fn normalize_to_full_form(node_type: &str) -> String {
    if node_type.is_empty() || is_full_form(node_type) {
        return node_type.to_string();
    }
    if let Some(name) = node_type.strip_prefix(SHORT_BASE_PREFIX) {
        return format!("{FULL_BASE_PREFIX}{name}");
    }
    if let Some(name) = node_type.strip_prefix(SHORT_LANGCHAIN_PREFIX) {
        return format!("{FULL_LANGCHAIN_PREFIX}{name}");
    }
    node_type.to_string()
}

/// Database format to workflow format. Same mapping as [`normalize_to_full_form`].
pub fn to_workflow_format(node_type: &str) -> String {
    normalize_to_full_form(node_type)
}

/// Loosely typed entry point: strings are normalized, any other value is returned as is.
pub fn normalize_value(value: &Value) -> Value {
    match value {
        Value::String(node_type) => Value::String(normalize_to_full_form(node_type)),
        other => other.clone(),
    }
}

pub fn normalize_with_details(node_type: &str) -> NormalizationResult {
    let normalized = normalize_to_full_form(node_type);
    NormalizationResult {
        original: node_type.to_string(),
        was_normalized: node_type != normalized,
        package: NodePackage::detect(&normalized),
        normalized,
    }
}

/// Normalize many types at once, keyed by the original spelling.
pub fn normalize_batch<I, S>(node_types: I) -> IndexMap<String, String>
where
    I: IntoIterator<Item = S>,
    S: AsRef<str>,
{
    let mut out = IndexMap::new();
    for node_type in node_types {
        let node_type = node_type.as_ref();
        out.insert(node_type.to_string(), normalize_to_full_form(node_type));
    }
    out
}

pub fn is_full_form(node_type: &str) -> bool {
    FULL_FORM_PREFIXES
        .iter()
        .any(|prefix| node_type.starts_with(prefix))
}

pub fn is_short_form(node_type: &str) -> bool {
    node_type.starts_with(SHORT_BASE_PREFIX) || node_type.starts_with(SHORT_LANGCHAIN_PREFIX)
}
