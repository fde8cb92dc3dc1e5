use crate::parsing::scale::ScaleWord;
use crate::trace::TraceWarning;
use serde::{Deserialize, Serialize};

/// A number that was multiplied by the scale word following it.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ScaledNumber {
    /// Numeric part as written ("12.5").
    pub literal: String,
    pub scale: ScaleWord,
    /// Parsed literal times the scale factor.
    pub value: f64,
}

/// Numeric findings for one page. Immutable once built.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PageResult {
    /// 1-based.
    pub page_number: usize,
    /// Length of the page text in characters.
    pub text_chars: usize,
    /// Candidate literals in the order they were recorded.
    pub raw_numbers: Vec<String>,
    pub parsed_numbers: Vec<f64>,
    pub scaled_numbers: Vec<ScaledNumber>,
    /// Scaled values first, then unscaled pass-through values.
    pub contextualized_numbers: Vec<f64>,
    pub max_number: Option<f64>,
    pub max_contextualized_number: Option<f64>,
}

impl PageResult {
    /// Result for a page that produced nothing (or could not be read).
    pub fn empty(page_number: usize) -> Self {
        PageResult {
            page_number,
            text_chars: 0,
            raw_numbers: Vec::new(),
            parsed_numbers: Vec::new(),
            scaled_numbers: Vec::new(),
            contextualized_numbers: Vec::new(),
            max_number: None,
            max_contextualized_number: None,
        }
    }

    pub fn has_numbers(&self) -> bool {
        !self.parsed_numbers.is_empty()
    }
}

/// A maximum value and the page it was first seen on.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct PageMaximum {
    pub value: f64,
    pub page_number: usize,
}

/// All page results of a document plus the global maxima.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DocumentResult {
    pub pages: Vec<PageResult>,
    pub max_number: Option<PageMaximum>,
    pub max_contextualized_number: Option<PageMaximum>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub warnings: Vec<TraceWarning>,
}

impl DocumentResult {
    pub fn summary(&self, document_name: &str) -> DocumentSummary {
        DocumentSummary {
            document_name: document_name.to_string(),
            total_pages: self.pages.len(),
            pages_with_numbers: self.pages.iter().filter(|p| p.has_numbers()).count(),
            total_numbers_found: self.pages.iter().map(|p| p.parsed_numbers.len()).sum(),
            largest_number: self.max_number.map(|m| m.value),
            largest_number_page: self.max_number.map(|m| m.page_number),
            largest_contextualized_number: self.max_contextualized_number.map(|m| m.value),
            largest_contextualized_number_page: self
                .max_contextualized_number
                .map(|m| m.page_number),
            document_text_length: self.pages.iter().map(|p| p.text_chars).sum(),
        }
    }
}

/// Flat processing statistics for reporting.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DocumentSummary {
    pub document_name: String,
    pub total_pages: usize,
    pub pages_with_numbers: usize,
    pub total_numbers_found: usize,
    pub largest_number: Option<f64>,
    pub largest_number_page: Option<usize>,
    pub largest_contextualized_number: Option<f64>,
    pub largest_contextualized_number_page: Option<usize>,
    pub document_text_length: usize,
}
