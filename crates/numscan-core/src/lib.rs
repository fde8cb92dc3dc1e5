pub mod aggregate;
pub mod error;
pub mod extraction;
pub mod model;
pub mod parsing;
pub mod trace;

use aggregate::aggregate_pages;
use error::NumscanError;
use extraction::{split_pages, PageOutcome, PageRange, PdfExtractor};
use model::{DocumentResult, PageResult};
use parsing::extract_numbers;

/// Options for document analysis.
#[derive(Debug, Clone, Default)]
pub struct AnalyzeOptions {
    /// Pages to process; everything else is never extracted.
    pub pages: PageRange,
}

/// Main API entry point: find the largest numbers in a PDF.
///
/// Fails only when the document as a whole cannot be read. Pages that fail
/// to extract are reported in the result's warnings and count as pages
/// without numbers.
pub fn analyze_pdf(
    pdf_bytes: &[u8],
    extractor: &dyn PdfExtractor,
    options: &AnalyzeOptions,
) -> Result<DocumentResult, NumscanError> {
    log::info!("Extracting pages with {}", extractor.backend_name());
    let outcomes = extractor.extract_pages(pdf_bytes, &options.pages)?;
    Ok(analyze_pages(&outcomes))
}

/// Analyze already-extracted text whose pages are separated by form feeds.
pub fn analyze_text(text: &str, options: &AnalyzeOptions) -> DocumentResult {
    let outcomes: Vec<PageOutcome> = split_pages(text, 1)
        .into_iter()
        .filter(|page| options.pages.contains(page.page_number))
        .map(Ok)
        .collect();
    analyze_pages(&outcomes)
}

/// Run number extraction on every page and aggregate the maxima.
pub fn analyze_pages(outcomes: &[PageOutcome]) -> DocumentResult {
    let mut warnings = Vec::new();

    let pages: Vec<PageResult> = outcomes
        .iter()
        .map(|outcome| match outcome {
            Ok(content) => {
                log::info!("Processing page {}", content.page_number);
                extract_numbers(content.page_number, &content.text)
            }
            Err(failure) => {
                log::error!("Error processing {}", failure);
                warnings.push(trace::page_failed(failure));
                PageResult::empty(failure.page_number)
            }
        })
        .collect();

    aggregate_pages(pages, warnings)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_analyze_text_two_pages() {
        let doc = analyze_text(
            "Revenue: $5,000 (2024)\x0cGrowth: 12.5 million\x0c",
            &AnalyzeOptions::default(),
        );
        assert_eq!(doc.pages.len(), 2);
        assert_eq!(doc.pages[1].max_number, Some(12.5));
        assert_eq!(doc.max_number.unwrap().page_number, 1);
        assert_eq!(doc.max_contextualized_number.unwrap().page_number, 2);
    }

    #[test]
    fn test_analyze_text_page_range() {
        let options = AnalyzeOptions {
            pages: PageRange::new(Some(2), Some(2)).unwrap(),
        };
        let doc = analyze_text("900\x0c5\x0c700", &options);
        assert_eq!(doc.pages.len(), 1);
        assert_eq!(doc.pages[0].page_number, 2);
        assert_eq!(doc.max_number.unwrap().value, 5.0);
    }
}
