pub mod candidates;
pub mod preprocess;
pub mod scale;
pub mod values;

use crate::model::{PageResult, ScaledNumber};
use candidates::{scan_candidates, Candidate};
use preprocess::split_alnum_boundaries;
use scale::find_scale_phrases;
use std::collections::HashSet;
use values::parse_number;

/// Find, parse, and contextualize every number on one page.
///
/// Never fails: candidates that do not convert to a finite number are
/// dropped, and empty text yields an empty result.
pub fn extract_numbers(page_number: usize, text: &str) -> PageResult {
    log::debug!(
        "Processing content for page {} ({} characters)",
        page_number,
        text.chars().count()
    );

    let processed = split_alnum_boundaries(text);
    let candidates = scan_candidates(&processed);

    let parsed_numbers: Vec<f64> = candidates
        .iter()
        .filter_map(|c| parse_candidate(page_number, &c.text))
        .collect();

    let scaled_numbers = apply_scale_words(page_number, &processed);
    let contextualized_numbers = contextualize(page_number, &scaled_numbers, &candidates);

    let result = PageResult {
        page_number,
        text_chars: text.chars().count(),
        max_number: max_of(&parsed_numbers),
        max_contextualized_number: max_of(&contextualized_numbers),
        raw_numbers: candidates.into_iter().map(|c| c.text).collect(),
        parsed_numbers,
        scaled_numbers,
        contextualized_numbers,
    };

    log_page(&result);
    log::trace!("Page {}: text {:?}", page_number, text);

    result
}

/// Parse one candidate, logging instead of failing.
fn parse_candidate(page_number: usize, raw: &str) -> Option<f64> {
    match parse_number(raw) {
        Ok(Some(value)) => {
            log::trace!("Page {}: '{}' -> {}", page_number, raw, value);
            Some(value)
        }
        Ok(None) => None,
        Err(e) => {
            log::debug!("Page {}: dropping candidate: {}", page_number, e);
            None
        }
    }
}

fn apply_scale_words(page_number: usize, text: &str) -> Vec<ScaledNumber> {
    find_scale_phrases(text)
        .into_iter()
        .filter_map(|phrase| {
            let parsed = parse_candidate(page_number, phrase.literal)?;
            let value = parsed * phrase.word.factor();
            if !value.is_finite() {
                log::debug!(
                    "Page {}: dropping '{} {}': scaled value overflows",
                    page_number,
                    phrase.literal,
                    phrase.spelled
                );
                return None;
            }
            log::debug!(
                "Page {}: '{} {}' -> {:.2}",
                page_number,
                phrase.literal,
                phrase.spelled,
                value
            );
            Some(ScaledNumber {
                literal: phrase.literal.to_string(),
                scale: phrase.word,
                value,
            })
        })
        .collect()
}

/// Scaled values, then every candidate whose literal no scale word consumed.
///
/// Consumption is by literal text, so one scaled "3" excludes every plain
/// "3" on the page (candidates are already unique per literal).
fn contextualize(
    page_number: usize,
    scaled: &[ScaledNumber],
    candidates: &[Candidate],
) -> Vec<f64> {
    let consumed: HashSet<&str> = scaled.iter().map(|s| s.literal.as_str()).collect();

    scaled
        .iter()
        .map(|s| s.value)
        .chain(
            candidates
                .iter()
                .filter(|c| !consumed.contains(c.text.as_str()))
                .filter_map(|c| parse_candidate(page_number, &c.text)),
        )
        .collect()
}

fn max_of(values: &[f64]) -> Option<f64> {
    values.iter().copied().reduce(f64::max)
}

fn log_page(page: &PageResult) {
    if page.parsed_numbers.is_empty() {
        log::debug!("Page {}: No valid numbers found", page.page_number);
        return;
    }
    log::debug!(
        "Page {}: Successfully processed {} numbers",
        page.page_number,
        page.parsed_numbers.len()
    );
    log::debug!(
        "Page {}: Numbers found: {:?}",
        page.page_number,
        &page.parsed_numbers[..page.parsed_numbers.len().min(10)]
    );
}
