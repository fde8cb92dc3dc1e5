use crate::model::{DocumentResult, PageMaximum, PageResult};
use crate::trace::{self, TraceWarning};

/// Running document maxima over page results.
///
/// Pages must be observed in page-number order: a later page only replaces
/// the current maximum when strictly greater, so ties stay with the earliest
/// page.
#[derive(Debug, Clone, Default)]
pub struct MaximumAggregator {
    max_number: Option<PageMaximum>,
    max_contextualized_number: Option<PageMaximum>,
}

impl MaximumAggregator {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn observe(&mut self, page: &PageResult) {
        if let Some(best) = raise(&mut self.max_number, page.max_number, page.page_number) {
            log::info!(
                "New global maximum found: {:.2} on page {}",
                best.value,
                best.page_number
            );
        }
        if let Some(best) = raise(
            &mut self.max_contextualized_number,
            page.max_contextualized_number,
            page.page_number,
        ) {
            log::info!(
                "New global contextualized maximum found: {:.2} on page {}",
                best.value,
                best.page_number
            );
        }
    }

    pub fn max_number(&self) -> Option<PageMaximum> {
        self.max_number
    }

    pub fn max_contextualized_number(&self) -> Option<PageMaximum> {
        self.max_contextualized_number
    }
}

/// Replace `best` if `candidate` is strictly greater; returns the new best.
fn raise(
    best: &mut Option<PageMaximum>,
    candidate: Option<f64>,
    page_number: usize,
) -> Option<PageMaximum> {
    let value = candidate?;
    if matches!(best, Some(b) if value <= b.value) {
        return None;
    }
    *best = Some(PageMaximum { value, page_number });
    *best
}

/// Build the document result from page results.
///
/// Pages are put in page-number order first (stable, so duplicate page
/// numbers keep their given order) and then reduced left to right.
pub fn aggregate_pages(
    mut pages: Vec<PageResult>,
    mut warnings: Vec<TraceWarning>,
) -> DocumentResult {
    log::info!("Finding global maximum numbers across {} pages", pages.len());

    pages.sort_by_key(|p| p.page_number);

    let mut aggregator = MaximumAggregator::new();
    for page in &pages {
        aggregator.observe(page);
    }

    if aggregator.max_number().is_none() {
        log::warn!("No numbers found in document");
        warnings.push(trace::no_numbers());
    }

    DocumentResult {
        pages,
        max_number: aggregator.max_number(),
        max_contextualized_number: aggregator.max_contextualized_number(),
        warnings,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn page(page_number: usize, max: Option<f64>, max_ctx: Option<f64>) -> PageResult {
        PageResult {
            max_number: max,
            max_contextualized_number: max_ctx,
            parsed_numbers: max.into_iter().collect(),
            contextualized_numbers: max_ctx.into_iter().collect(),
            ..PageResult::empty(page_number)
        }
    }

    #[test]
    fn test_tie_keeps_earliest_page() {
        let doc = aggregate_pages(
            vec![page(1, Some(10.0), Some(10.0)), page(2, Some(10.0), Some(10.0))],
            vec![],
        );
        assert_eq!(doc.max_number.unwrap().page_number, 1);
        assert_eq!(doc.max_contextualized_number.unwrap().page_number, 1);
    }

    #[test]
    fn test_raw_and_contextualized_tracked_independently() {
        let doc = aggregate_pages(
            vec![page(1, Some(5000.0), Some(5000.0)), page(2, Some(12.5), Some(12.5e6))],
            vec![],
        );
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
                value: 12.5e6,
                page_number: 2
            })
        );
    }

    #[test]
    fn test_pages_without_numbers_are_skipped() {
        let doc = aggregate_pages(
            vec![page(1, None, None), page(2, Some(3.0), Some(3.0)), page(3, None, None)],
            vec![],
        );
        assert_eq!(doc.max_number.unwrap().page_number, 2);
        assert!(doc.warnings.is_empty());
    }

    #[test]
    fn test_unordered_input_is_reduced_in_page_order() {
        let doc = aggregate_pages(
            vec![page(4, Some(7.0), Some(7.0)), page(2, Some(7.0), Some(7.0))],
            vec![],
        );
        assert_eq!(doc.pages[0].page_number, 2);
        assert_eq!(doc.max_number.unwrap().page_number, 2);
    }

    #[test]
    fn test_no_numbers_is_a_warning_not_an_error() {
        let doc = aggregate_pages(vec![page(1, None, None)], vec![]);
        assert_eq!(doc.max_number, None);
        assert_eq!(doc.max_contextualized_number, None);
        assert_eq!(doc.warnings.len(), 1);
        assert_eq!(doc.warnings[0].kind, trace::TraceWarningKind::NoNumbers);
    }

    #[test]
    fn test_streaming_observe() {
        let mut agg = MaximumAggregator::new();
        assert_eq!(agg.max_number(), None);
        agg.observe(&page(1, Some(1.0), Some(1.0)));
        agg.observe(&page(2, Some(0.5), Some(2.0)));
        assert_eq!(agg.max_number().unwrap().page_number, 1);
        assert_eq!(agg.max_contextualized_number().unwrap().page_number, 2);
    }
}
