use crate::extraction::PageFailure;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum TraceSeverity {
    Critical,
    Info,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum TraceWarningKind {
    PageFailed,
    NoNumbers,
}

/// Something the caller should know about that did not stop processing.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TraceWarning {
    pub kind: TraceWarningKind,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub page_number: Option<usize>,
    pub message: String,
    pub severity: TraceSeverity,
}

pub fn page_failed(failure: &PageFailure) -> TraceWarning {
    TraceWarning {
        kind: TraceWarningKind::PageFailed,
        page_number: Some(failure.page_number),
        message: format!(
            "Skipped page {}: {}",
            failure.page_number, failure.reason
        ),
        severity: TraceSeverity::Critical,
    }
}

pub fn no_numbers() -> TraceWarning {
    TraceWarning {
        kind: TraceWarningKind::NoNumbers,
        page_number: None,
        message: "No numbers found in document".into(),
        severity: TraceSeverity::Info,
    }
}
