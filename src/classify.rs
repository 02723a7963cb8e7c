//! Questions asked about a node type once it has been canonicalized.

use indexmap::IndexSet;

pub use crate::util::is_valid_node_type_format;
use crate::normalize::{
    FULL_BASE_PREFIX, FULL_LANGCHAIN_PREFIX, NodePackage, SHORT_BASE_PREFIX,
    SHORT_LANGCHAIN_PREFIX, UNSCOPED_LANGCHAIN_PREFIX, normalize_to_full_form,
};

pub const UNKNOWN_TRIGGER_TYPE: &str = "Unknown trigger type";

/// Full-form types that start a workflow without "trigger" or "webhook" in the name.
const TRIGGER_ALLOW_LIST: [&str; 3] = [
    "n8n-nodes-base.start",
    "n8n-nodes-base.manualTrigger",
    "n8n-nodes-base.formTrigger",
];

struct TriggerLabel {
    matches: fn(lowered: &str, normalized: &str) -> bool,
    label: &'static str,
}

/// Scanned top to bottom, first match wins.
const TRIGGER_LABELS: &[TriggerLabel] = &[
    TriggerLabel {
        matches: |lowered, _| lowered.contains("executeworkflow"),
        label: "Execute Workflow Trigger (invoked by another workflow)",
    },
    TriggerLabel {
        matches: |lowered, _| lowered.contains("webhook"),
        label: "Webhook Trigger (HTTP requests)",
    },
    TriggerLabel {
        matches: |lowered, _| lowered.contains("schedule") || lowered.contains("cron"),
        label: "Schedule Trigger (time-based)",
    },
    TriggerLabel {
        matches: |lowered, normalized| {
            lowered.contains("manual") || normalized == "n8n-nodes-base.start"
        },
        label: "Manual Trigger (manual execution)",
    },
    TriggerLabel {
        matches: |lowered, _| {
            lowered.contains("email") || lowered.contains("imap") || lowered.contains("gmail")
        },
        label: "Email Trigger (polling)",
    },
    TriggerLabel {
        matches: |lowered, _| lowered.contains("form"),
        label: "Form Trigger (form submissions)",
    },
    TriggerLabel {
        matches: |lowered, _| lowered.contains("trigger"),
        label: "Trigger (event-based)",
    },
];

/// Map a full-form type back to its short spelling.
///
/// `NodePackage::Base` strips the base prefix; every other package strips the
/// scoped langchain prefix. Input without the expected prefix comes back unchanged.
pub fn denormalize_node_type(node_type: &str, package: NodePackage) -> String {
    let (full, short) = match package {
        NodePackage::Base => (FULL_BASE_PREFIX, SHORT_BASE_PREFIX),
        _ => (FULL_LANGCHAIN_PREFIX, SHORT_LANGCHAIN_PREFIX),
    };
    match node_type.strip_prefix(full) {
        Some(name) => format!("{short}{name}"),
        None => node_type.to_string(),
    }
}

/// Last dot-delimited segment of the normalized type, or `""` for empty input.
pub fn extract_node_name(node_type: &str) -> String {
    if node_type.is_empty() {
        return String::new();
    }
    let normalized = normalize_to_full_form(node_type);
    normalized
        .rsplit('.')
        .next()
        .unwrap_or_default()
        .to_string()
}

/// Package segment (`n8n-nodes-base`, `@n8n/n8n-nodes-langchain`, ...) of a dotted type.
///
/// `None` when there is no dot or the segment before it is empty.
pub fn get_node_package(node_type: &str) -> Option<String> {
    if !node_type.contains('.') {
        return None;
    }
    let normalized = normalize_to_full_form(node_type);
    normalized
        .split('.')
        .next()
        .filter(|segment| !segment.is_empty())
        .map(str::to_string)
}

pub fn is_base_node(node_type: &str) -> bool {
    normalize_to_full_form(node_type).starts_with(FULL_BASE_PREFIX)
}

pub fn is_langchain_node(node_type: &str) -> bool {
    let normalized = normalize_to_full_form(node_type);
    normalized.starts_with(FULL_LANGCHAIN_PREFIX)
        || normalized.starts_with(UNSCOPED_LANGCHAIN_PREFIX)
}

/// Every spelling worth trying when looking a node type up.
///
/// A dotted type yields its full form plus the matching short form. A bare
/// name is expanded under both first-party packages in both dialects.
pub fn get_node_type_variations(node_type: &str) -> Vec<String> {
    if node_type.is_empty() {
        return Vec::new();
    }

    let mut variations = IndexSet::new();
    if node_type.contains('.') {
        let normalized = normalize_to_full_form(node_type);
        let short = if let Some(name) = normalized.strip_prefix(FULL_BASE_PREFIX) {
            Some(format!("{SHORT_BASE_PREFIX}{name}"))
        } else {
            normalized
                .strip_prefix(FULL_LANGCHAIN_PREFIX)
                .map(|name| format!("{SHORT_LANGCHAIN_PREFIX}{name}"))
        };
        variations.insert(normalized);
        variations.extend(short);
    } else {
        variations.insert(format!("{FULL_BASE_PREFIX}{node_type}"));
        variations.insert(format!("{SHORT_BASE_PREFIX}{node_type}"));
        variations.insert(format!("{FULL_LANGCHAIN_PREFIX}{node_type}"));
        variations.insert(format!("{SHORT_LANGCHAIN_PREFIX}{node_type}"));
    }
    variations.into_iter().collect()
}

/// Whether the node type can start a workflow.
///
/// "respondToWebhook"-style nodes mention webhooks but only reply to them.
pub fn is_trigger_node(node_type: &str) -> bool {
    let normalized = normalize_to_full_form(node_type);
    let lowered = normalized.to_lowercase();

    if lowered.contains("trigger") {
        return true;
    }
    if lowered.contains("webhook") && !lowered.contains("respond") {
        return true;
    }
    TRIGGER_ALLOW_LIST.contains(&normalized.as_str())
}

/// Whether a workflow built on this trigger can be activated.
///
/// Currently the same set as [`is_trigger_node`].
pub fn is_activatable_trigger(node_type: &str) -> bool {
    is_trigger_node(node_type)
}

/// Human-readable label for the kind of trigger, or [`UNKNOWN_TRIGGER_TYPE`].
pub fn get_trigger_type_description(node_type: &str) -> &'static str {
    let normalized = normalize_to_full_form(node_type);
    let lowered = normalized.to_lowercase();
    TRIGGER_LABELS
        .iter()
        .find(|entry| (entry.matches)(&lowered, &normalized))
        .map(|entry| entry.label)
        .unwrap_or(UNKNOWN_TRIGGER_TYPE)
}
