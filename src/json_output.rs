use crate::error::{ErrorLocation, WorkflowError};
use serde::Serialize;

#[derive(Serialize, Clone, Debug)]
pub struct JsonDiagnostic {
    pub message: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub source_path: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub line: Option<usize>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub col: Option<usize>,
}

impl JsonDiagnostic {
    pub fn from_location(message: String, location: &ErrorLocation) -> Self {
        JsonDiagnostic {
            message,
            source_path: location
                .source_path
                .as_ref()
                .map(|p| p.display().to_string())
                .or_else(|| Some(location.source_label.clone())),
            line: location.line,
            col: location.col,
        }
    }

    pub fn from_message(message: String, source_path: Option<String>) -> Self {
        JsonDiagnostic {
            message,
            source_path,
            line: None,
            col: None,
        }
    }
}

/// Payload emitted by `doctor --json` for a single workflow.
#[derive(Serialize, Clone, Debug)]
pub struct LintJsonOutput {
    pub ok: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub source: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub node_count: Option<usize>,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub errors: Vec<JsonDiagnostic>,
}

impl LintJsonOutput {
    pub fn success(source: Option<String>, node_count: usize) -> Self {
        LintJsonOutput {
            ok: true,
            source,
            node_count: Some(node_count),
            errors: Vec::new(),
        }
    }

    pub fn lint_failure(messages: Vec<String>, source: Option<String>) -> Self {
        let errors = messages
            .into_iter()
            .map(|message| JsonDiagnostic::from_message(message, source.clone()))
            .collect();
        LintJsonOutput {
            ok: false,
            source,
            node_count: None,
            errors,
        }
    }

    pub fn error(err: &WorkflowError, source: Option<String>) -> Self {
        LintJsonOutput {
            ok: false,
            source,
            node_count: None,
            errors: vec![JsonDiagnostic::from_location(
                err.to_string(),
                err.location(),
            )],
        }
    }

    pub fn into_string(self) -> String {
        serde_json::to_string(&self).expect("lint output serialization")
    }
}
