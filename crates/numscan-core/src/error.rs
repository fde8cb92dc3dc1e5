#[derive(Debug, thiserror::Error)]
pub enum NumscanError {
    #[error("PDF extraction failed: {0}")]
    Extraction(String),

    #[error("{tool} not found. Install poppler: brew install poppler (macOS) or apt install poppler-utils (Linux)")]
    ToolNotFound { tool: &'static str },

    #[error("{tool} failed with exit code {code}: {stderr}")]
    ToolFailed {
        tool: &'static str,
        code: i32,
        stderr: String,
    },

    #[error("could not determine page count: {0}")]
    PageCount(String),

    #[error("invalid number '{raw}': {reason}")]
    InvalidNumber { raw: String, reason: String },

    #[error("invalid page range: first page {first} is after last page {last}")]
    InvalidPageRange { first: usize, last: usize },

    #[error("page numbers start at 1")]
    PageNumberZero,

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}
