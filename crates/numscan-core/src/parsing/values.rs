use crate::error::NumscanError;

/// Parse a candidate number string into a finite f64.
///
/// Handles formats like:
/// - "1234.56" -> 1234.56
/// - "$1,234.56" / "$ 1,234" -> 1234.56 / 1234
/// - "(1,234)" -> 1234 (financial negatives keep their magnitude)
/// - "25%" -> 0.25
/// - "$", "(", ")", "." or "" -> None
///
/// Anything else that does not convert to a finite number is an error.
pub fn parse_number(raw: &str) -> Result<Option<f64>, NumscanError> {
    let s = raw.trim();

    // Percent conversion runs before any other cleanup
    if let Some(rest) = s.strip_suffix('%') {
        return parse_finite(raw, rest.trim()).map(|v| Some(v / 100.0));
    }

    let s = match s.strip_prefix('$') {
        Some(rest) => rest.trim(),
        None => s,
    };

    let s = match s.strip_prefix('(').and_then(|r| r.strip_suffix(')')) {
        Some(inner) => inner.trim(),
        None => s,
    };

    let cleaned = s.replace(',', "");

    if matches!(cleaned.as_str(), "" | "$" | "(" | ")" | ".") {
        return Ok(None);
    }

    parse_finite(raw, &cleaned).map(Some)
}

fn parse_finite(raw: &str, s: &str) -> Result<f64, NumscanError> {
    let value: f64 = s.parse().map_err(|e: std::num::ParseFloatError| {
        NumscanError::InvalidNumber {
            raw: raw.to_string(),
            reason: e.to_string(),
        }
    })?;

    if !value.is_finite() {
        return Err(NumscanError::InvalidNumber {
            raw: raw.to_string(),
            reason: "not a finite number".into(),
        });
    }

    Ok(value)
}
