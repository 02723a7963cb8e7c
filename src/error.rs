use std::path::{Path, PathBuf};
use thiserror::Error;

/// Where in a workflow source an error was detected.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ErrorLocation {
    pub source_label: String,
    pub source_path: Option<PathBuf>,
    pub line: Option<usize>,
    pub col: Option<usize>,
}

impl ErrorLocation {
    pub fn at_source(label: impl Into<String>) -> Self {
        Self {
            source_label: label.into(),
            ..Self::default()
        }
    }

    pub fn with_source_path(mut self, path: Option<&Path>) -> Self {
        self.source_path = path.map(Path::to_path_buf);
        self
    }

    pub fn with_position(mut self, line: usize, col: usize) -> Self {
        if line > 0 {
            self.line = Some(line);
            self.col = Some(col);
        }
        self
    }

    pub fn describe(&self) -> String {
        match (self.line, self.col) {
            (Some(line), Some(col)) => format!("{}:{line}:{col}", self.source_label),
            _ => self.source_label.clone(),
        }
    }
}

#[derive(Debug, Error)]
pub enum WorkflowError {
    #[error("JSON parse error at {}: {message}", .location.describe())]
    Json {
        message: String,
        location: ErrorLocation,
    },
    #[error("Workflow at {} must contain a 'nodes' array", .location.describe())]
    MissingNodes { location: ErrorLocation },
    #[error("Failed to read {}: {source}", .location.describe())]
    Io {
        #[source]
        source: std::io::Error,
        location: ErrorLocation,
    },
}

impl WorkflowError {
    pub fn location(&self) -> &ErrorLocation {
        match self {
            WorkflowError::Json { location, .. }
            | WorkflowError::MissingNodes { location }
            | WorkflowError::Io { location, .. } => location,
        }
    }
}

pub type Result<T> = std::result::Result<T, WorkflowError>;
