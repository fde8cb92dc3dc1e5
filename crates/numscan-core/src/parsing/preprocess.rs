/// Insert a space at every ASCII digit/letter boundary.
///
/// Extracted PDF text often loses the whitespace around inline numbers
/// ("1OPERATINGBUDGET"), which defeats the word-boundary anchors used by the
/// number patterns. Genuine alphanumeric tokens ("A4", "COVID19") get split
/// as well.
pub fn split_alnum_boundaries(text: &str) -> String {
    let mut out = String::with_capacity(text.len() + text.len() / 8);
    let mut prev: Option<char> = None;

    for c in text.chars() {
        if let Some(p) = prev {
            let digit_then_letter = p.is_ascii_digit() && c.is_ascii_alphabetic();
            let letter_then_digit = p.is_ascii_alphabetic() && c.is_ascii_digit();
            if digit_then_letter || letter_then_digit {
                out.push(' ');
            }
        }
        out.push(c);
        prev = Some(c);
    }

    out
}
