use numscan_core::model::{DocumentResult, DocumentSummary, PageResult};
use numscan_core::trace::{TraceWarning, TraceWarningKind};
use std::fmt::Write;

pub fn print_summary(summary: &DocumentSummary, warnings: &[TraceWarning]) {
    println!("=== {} ===\n", summary.document_name);
    println!(
        "  Pages: {} ({} with numbers), numbers found: {}\n",
        summary.total_pages, summary.pages_with_numbers, summary.total_numbers_found
    );

    match (summary.largest_number, summary.largest_number_page) {
        (Some(value), Some(page)) => {
            println!(
                "Largest Number: {}; Found on Page: {}",
                format_grouped(value),
                page
            );
            if let (Some(value), Some(page)) = (
                summary.largest_contextualized_number,
                summary.largest_contextualized_number_page,
            ) {
                println!(
                    "Contextualized Largest Number: {}; Found on Page: {}",
                    format_grouped(value),
                    page
                );
            }
        }
        _ => println!("No numbers found in the document"),
    }

    let failed: Vec<&TraceWarning> = warnings
        .iter()
        .filter(|w| w.kind == TraceWarningKind::PageFailed)
        .collect();
    if !failed.is_empty() {
        println!();
        for w in failed {
            println!("  warning: {}", w.message);
        }
    }
}

pub fn format_pages(doc: &DocumentResult, limit: usize) -> String {
    let mut out = String::new();

    for page in &doc.pages {
        format_page(&mut out, page, limit);
    }

    if !doc.warnings.is_empty() {
        out.push_str("Warnings:\n");
        for w in &doc.warnings {
            let _ = writeln!(out, "  - {}", w.message);
        }
    }

    out
}

fn format_page(out: &mut String, page: &PageResult, limit: usize) {
    let _ = writeln!(out, "Page {} ({} chars)", page.page_number, page.text_chars);

    if page.raw_numbers.is_empty() {
        out.push_str("  No numbers found\n\n");
        return;
    }

    let _ = writeln!(out, "  Candidates:     {}", join_limited(&page.raw_numbers, limit));
    let parsed: Vec<String> = page
        .parsed_numbers
        .iter()
        .map(|v| format_grouped(*v))
        .collect();
    let _ = writeln!(out, "  Parsed:         {}", join_limited(&parsed, limit));

    for scaled in &page.scaled_numbers {
        let _ = writeln!(
            out,
            "  Scaled:         {} {} -> {}",
            scaled.literal,
            scaled.scale,
            format_grouped(scaled.value)
        );
    }

    if let Some(max) = page.max_number {
        let _ = writeln!(out, "  Max:            {}", format_grouped(max));
    }
    if let Some(max) = page.max_contextualized_number {
        let _ = writeln!(out, "  Max (scaled):   {}", format_grouped(max));
    }
    out.push('\n');
}

fn join_limited(items: &[String], limit: usize) -> String {
    let shown = items.iter().take(limit).cloned().collect::<Vec<_>>().join(", ");
    if items.len() > limit {
        format!("{} (+{} more)", shown, items.len() - limit)
    } else {
        shown
    }
}

/// Two decimals with comma thousands separators: 12500000 -> "12,500,000.00".
pub fn format_grouped(value: f64) -> String {
    let formatted = format!("{:.2}", value.abs());
    let (int_part, frac_part) = formatted
        .split_once('.')
        .unwrap_or((formatted.as_str(), "00"));

    let mut grouped = String::with_capacity(int_part.len() + int_part.len() / 3);
    for (i, c) in int_part.chars().enumerate() {
        if i > 0 && (int_part.len() - i) % 3 == 0 {
            grouped.push(',');
        }
        grouped.push(c);
    }

    let sign = if value.is_sign_negative() && formatted != "0.00" {
        "-"
    } else {
        ""
    };
    format!("{sign}{grouped}.{frac_part}")
}
