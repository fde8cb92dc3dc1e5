pub mod pdftotext;

use crate::error::NumscanError;
use serde::{Deserialize, Serialize};
use std::fmt;

/// Text extracted from a single page of a document.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PageContent {
    pub page_number: usize,
    pub text: String,
}

/// A page whose text could not be extracted.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PageFailure {
    pub page_number: usize,
    pub reason: String,
}

impl fmt::Display for PageFailure {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "page {}: {}", self.page_number, self.reason)
    }
}

/// Extraction outcome for one page. A failed page does not abort the document.
pub type PageOutcome = Result<PageContent, PageFailure>;

/// Inclusive, 1-based selection of pages to process.
///
/// `last: None` means "through the end of the document".
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PageRange {
    pub first: usize,
    pub last: Option<usize>,
}

impl Default for PageRange {
    fn default() -> Self {
        Self {
            first: 1,
            last: None,
        }
    }
}

impl PageRange {
    pub fn new(first: Option<usize>, last: Option<usize>) -> Result<Self, NumscanError> {
        let first = first.unwrap_or(1);
        if first == 0 || last == Some(0) {
            return Err(NumscanError::PageNumberZero);
        }
        if let Some(last) = last {
            if first > last {
                return Err(NumscanError::InvalidPageRange { first, last });
            }
        }
        Ok(Self { first, last })
    }

    pub fn contains(&self, page_number: usize) -> bool {
        page_number >= self.first && self.last.map_or(true, |last| page_number <= last)
    }

    /// Clamp the range to a document of `total_pages` pages.
    pub fn pages(&self, total_pages: usize) -> std::ops::RangeInclusive<usize> {
        let last = self.last.map_or(total_pages, |l| l.min(total_pages));
        self.first..=last
    }
}

/// Trait for PDF text extraction backends.
pub trait PdfExtractor: Send + Sync {
    /// Extract the selected pages, one outcome per page in page order.
    ///
    /// Document-level problems (missing tool, unreadable file) are returned
    /// as `Err`; a single unreadable page is reported as a `PageFailure`.
    fn extract_pages(
        &self,
        pdf_bytes: &[u8],
        range: &PageRange,
    ) -> Result<Vec<PageOutcome>, NumscanError>;

    /// Name of this extraction backend (for diagnostics).
    fn backend_name(&self) -> &str;
}

/// Split text into pages on form feeds, the separator pdftotext emits.
///
/// A trailing form feed does not open an extra empty page.
pub fn split_pages(text: &str, first_page: usize) -> Vec<PageContent> {
    let text = text.strip_suffix('\x0c').unwrap_or(text);
    text.split('\x0c')
        .enumerate()
        .map(|(i, page_text)| PageContent {
            page_number: first_page + i,
            text: page_text.to_string(),
        })
        .collect()
}
