//! Integration tests for analyze_pdf() end-to-end pipeline.
//!
//! Uses a MockExtractor that returns pre-built page outcomes without
//! invoking pdftotext, so these tests run without poppler-utils.

use numscan_core::error::NumscanError;
use numscan_core::extraction::{PageContent, PageFailure, PageOutcome, PageRange, PdfExtractor};
use numscan_core::model::PageMaximum;
use numscan_core::trace::TraceWarningKind;
use numscan_core::{analyze_pdf, AnalyzeOptions};

struct MockExtractor {
    pages: Vec<PageOutcome>,
}

impl PdfExtractor for MockExtractor {
    fn extract_pages(
        &self,
        _pdf_bytes: &[u8],
        range: &PageRange,
    ) -> Result<Vec<PageOutcome>, NumscanError> {
        Ok(self
            .pages
            .iter()
            .filter(|outcome| {
                let page_number = match outcome {
                    Ok(content) => content.page_number,
                    Err(failure) => failure.page_number,
                };
                range.contains(page_number)
            })
            .cloned()
            .collect())
    }

    fn backend_name(&self) -> &str {
        "mock"
    }
}

struct BrokenExtractor;

impl PdfExtractor for BrokenExtractor {
    fn extract_pages(
        &self,
        _pdf_bytes: &[u8],
        _range: &PageRange,
    ) -> Result<Vec<PageOutcome>, NumscanError> {
        Err(NumscanError::ToolNotFound { tool: "pdftotext" })
    }

    fn backend_name(&self) -> &str {
        "broken"
    }
}

fn page(number: usize, text: &str) -> PageOutcome {
    Ok(PageContent {
        page_number: number,
        text: text.to_string(),
    })
}

fn failed(number: usize, reason: &str) -> PageOutcome {
    Err(PageFailure {
        page_number: number,
        reason: reason.to_string(),
    })
}

// ---------------------------------------------------------------------------
// Test 1: Two pages, raw maximum and contextualized maximum on different pages
// ---------------------------------------------------------------------------
#[test]
fn two_page_document_raw_and_scaled_maxima() {
    let extractor = MockExtractor {
        pages: vec![
            page(1, "Revenue: $5,000 (2024)"),
            page(2, "Growth: 12.5 million"),
        ],
    };

    let doc = analyze_pdf(&[], &extractor, &AnalyzeOptions::default()).unwrap();

    assert_eq!(doc.pages.len(), 2);
    assert_eq!(doc.pages[0].max_number, Some(5000.0));
    assert_eq!(doc.pages[1].max_number, Some(12.5));
    assert_eq!(doc.pages[0].max_contextualized_number, Some(5000.0));
    assert_eq!(doc.pages[1].max_contextualized_number, Some(12_500_000.0));
    assert_eq!(
        doc.max_number,
        Some(PageMaximum {
            value: 5000.0,
            page_number: 1
        })
    );
    assert_eq!(
        doc.max_contextualized_number,
        Some(PageMaximum {
            value: 12_500_000.0,
            page_number: 2
        })
    );
    assert!(doc.warnings.is_empty());
}

// ---------------------------------------------------------------------------
// Test 2: A page that fails to extract does not abort the document
// ---------------------------------------------------------------------------
#[test]
fn failed_page_is_contained() {
    let extractor = MockExtractor {
        pages: vec![
            page(1, "Total 40"),
            failed(2, "pdftotext failed with exit code 1: bad xref"),
            page(3, "Budget $1,250,000"),
        ],
    };

    let doc = analyze_pdf(&[], &extractor, &AnalyzeOptions::default()).unwrap();

    assert_eq!(doc.pages.len(), 3);
    assert!(doc.pages[1].parsed_numbers.is_empty());
    assert_eq!(doc.pages[1].max_number, None);
    assert_eq!(doc.max_number.unwrap().value, 1_250_000.0);
    assert_eq!(doc.max_number.unwrap().page_number, 3);

    assert_eq!(doc.warnings.len(), 1);
    assert_eq!(doc.warnings[0].kind, TraceWarningKind::PageFailed);
    assert_eq!(doc.warnings[0].page_number, Some(2));
    assert!(doc.warnings[0].message.contains("bad xref"));
}

// ---------------------------------------------------------------------------
// Test 3: Equal maxima on two pages resolve to the earlier page
// ---------------------------------------------------------------------------
#[test]
fn equal_maxima_report_earliest_page() {
    let extractor = MockExtractor {
        pages: vec![
            page(1, "Units: 500"),
            page(2, "Units: 500 again, plus 12"),
            page(3, "0.5 thousand"),
        ],
    };

    let doc = analyze_pdf(&[], &extractor, &AnalyzeOptions::default()).unwrap();

    assert_eq!(doc.max_number.unwrap().page_number, 1);
    // "0.5 thousand" is 500 as well, still page 1
    assert_eq!(doc.max_contextualized_number.unwrap().value, 500.0);
    assert_eq!(doc.max_contextualized_number.unwrap().page_number, 1);
}

// ---------------------------------------------------------------------------
// Test 4: No numbers anywhere is a valid outcome, not an error
// ---------------------------------------------------------------------------
#[test]
fn document_without_numbers() {
    let extractor = MockExtractor {
        pages: vec![page(1, "Executive summary"), page(2, "")],
    };

    let doc = analyze_pdf(&[], &extractor, &AnalyzeOptions::default()).unwrap();

    assert_eq!(doc.max_number, None);
    assert_eq!(doc.max_contextualized_number, None);
    assert_eq!(doc.warnings[0].kind, TraceWarningKind::NoNumbers);

    let summary = doc.summary("empty.pdf");
    assert_eq!(summary.total_pages, 2);
    assert_eq!(summary.pages_with_numbers, 0);
    assert_eq!(summary.largest_number, None);
    assert_eq!(summary.largest_number_page, None);
}

// ---------------------------------------------------------------------------
// Test 5: Page range limits what is processed
// ---------------------------------------------------------------------------
#[test]
fn page_range_selects_pages() {
    let extractor = MockExtractor {
        pages: vec![page(1, "999,999"), page(2, "42"), page(3, "7 billion")],
    };
    let options = AnalyzeOptions {
        pages: PageRange::new(Some(2), Some(3)).unwrap(),
    };

    let doc = analyze_pdf(&[], &extractor, &options).unwrap();

    assert_eq!(doc.pages.len(), 2);
    assert_eq!(doc.max_number.unwrap().value, 42.0);
    assert_eq!(doc.max_contextualized_number.unwrap().value, 7e9);
    assert_eq!(doc.max_contextualized_number.unwrap().page_number, 3);
}

// ---------------------------------------------------------------------------
// Test 6: Summary statistics
// ---------------------------------------------------------------------------
#[test]
fn summary_counts() {
    let extractor = MockExtractor {
        pages: vec![
            page(1, "Q1 sales 1,000 and 1000 units"),
            page(2, "nothing here"),
            page(3, "25% of $3 million"),
        ],
    };

    let doc = analyze_pdf(&[], &extractor, &AnalyzeOptions::default()).unwrap();
    let summary = doc.summary("report.pdf");

    assert_eq!(summary.document_name, "report.pdf");
    assert_eq!(summary.total_pages, 3);
    assert_eq!(summary.pages_with_numbers, 2);
    // page 1: "1,000", "1", "1000"; page 3: "$3", "25%"
    assert_eq!(summary.total_numbers_found, 5);
    assert_eq!(summary.largest_number, Some(1000.0));
    assert_eq!(summary.largest_number_page, Some(1));
    assert_eq!(summary.largest_contextualized_number, Some(3_000_000.0));
    assert_eq!(summary.largest_contextualized_number_page, Some(3));
    assert_eq!(summary.document_text_length, 29 + 12 + 17);
}

// ---------------------------------------------------------------------------
// Test 7: Document-level extraction failure is an error
// ---------------------------------------------------------------------------
#[test]
fn extractor_failure_propagates() {
    let result = analyze_pdf(&[], &BrokenExtractor, &AnalyzeOptions::default());
    assert!(matches!(result, Err(NumscanError::ToolNotFound { tool: "pdftotext" })));
}
