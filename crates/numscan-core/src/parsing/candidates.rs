use regex::Regex;
use serde::{Deserialize, Serialize};
use std::collections::{BTreeMap, HashSet};
use std::sync::LazyLock;

/// Surface format that produced a candidate, in priority order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum CandidateKind {
    Currency,
    Parenthetical,
    Grouped,
    Percentage,
    Decimal,
    Integer,
}

/// A text span provisionally identified as a number.
///
/// `start`/`end` are byte offsets into the preprocessed page text.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Candidate {
    pub text: String,
    pub start: usize,
    pub end: usize,
    pub kind: CandidateKind,
}

struct Rule {
    kind: CandidateKind,
    regex: Regex,
    /// Context check the regex engine cannot express (no lookaround).
    accept: fn(&str, usize, usize) -> bool,
}

impl Rule {
    fn new(kind: CandidateKind, pattern: &str, accept: fn(&str, usize, usize) -> bool) -> Self {
        Rule {
            kind,
            regex: Regex::new(pattern).expect("valid number pattern"),
            accept,
        }
    }

    /// Non-overlapping leftmost matches that pass the context check.
    ///
    /// A rejected match resumes the search one character after its start,
    /// the same positions a backtracking engine would try next.
    fn matches(&self, text: &str) -> Vec<(usize, usize)> {
        let mut spans = Vec::new();
        let mut pos = 0;

        while pos <= text.len() {
            let Some(m) = self.regex.find_at(text, pos) else {
                break;
            };
            if (self.accept)(text, m.start(), m.end()) {
                spans.push((m.start(), m.end()));
                pos = if m.end() > m.start() {
                    m.end()
                } else {
                    next_char(text, m.end())
                };
            } else {
                pos = next_char(text, m.start());
            }
        }

        spans
    }
}

static RULES: LazyLock<Vec<Rule>> = LazyLock::new(|| {
    vec![
        // $1,234.56  $ 1,234
        Rule::new(
            CandidateKind::Currency,
            r"\$\s*[0-9]{1,3}(?:,[0-9]{3})*(?:\.[0-9]+)?\b",
            always,
        ),
        // (1,234.56)  ( 1,234 )
        Rule::new(
            CandidateKind::Parenthetical,
            r"\(\s*[0-9]{1,3}(?:,[0-9]{3})*(?:\.[0-9]+)?\s*\)",
            always,
        ),
        // 1,234  1,234.56
        Rule::new(
            CandidateKind::Grouped,
            r"\b[0-9]{1,3}(?:,[0-9]{3})+(?:\.[0-9]+)?\b",
            always,
        ),
        // 25%  12.5%
        Rule::new(
            CandidateKind::Percentage,
            r"\b[0-9]+(?:\.[0-9]+)?%",
            always,
        ),
        // 123.45  .75, but not the tail of "1,23.4"
        Rule::new(
            CandidateKind::Decimal,
            r"\b[0-9]*\.[0-9]+\b",
            |text, start, _| !preceded_by_digit_and(text, start, ','),
        ),
        // 42, but not either half of "3.5"
        Rule::new(CandidateKind::Integer, r"\b[0-9]+\b", |text, start, end| {
            !preceded_by_digit_and(text, start, '.') && !followed_by_and_digit(text, end, '.')
        }),
    ]
});

fn always(_: &str, _: usize, _: usize) -> bool {
    true
}

fn next_char(text: &str, i: usize) -> usize {
    i + text[i..].chars().next().map_or(1, char::len_utf8)
}

/// True if `text[..start]` ends with `<digit><sep>`.
fn preceded_by_digit_and(text: &str, start: usize, sep: char) -> bool {
    let mut before = text[..start].chars().rev();
    before.next() == Some(sep) && before.next().is_some_and(|c| c.is_ascii_digit())
}

/// True if `text[end..]` starts with `<sep><digit>`.
fn followed_by_and_digit(text: &str, end: usize, sep: char) -> bool {
    let mut after = text[end..].chars();
    after.next() == Some(sep) && after.next().is_some_and(|c| c.is_ascii_digit())
}

/// Disjoint byte ranges already owned by an accepted candidate.
#[derive(Debug, Default)]
pub struct ClaimedSpans {
    // start -> end, ranges never overlap
    spans: BTreeMap<usize, usize>,
}

impl ClaimedSpans {
    /// True if no claimed range intersects `start..end`.
    pub fn is_free(&self, start: usize, end: usize) -> bool {
        // Ranges are disjoint, so the last one starting before `end` also
        // ends last among them.
        match self.spans.range(..end).next_back() {
            Some((_, &claimed_end)) => claimed_end <= start,
            None => true,
        }
    }

    pub fn claim(&mut self, start: usize, end: usize) {
        debug_assert!(self.is_free(start, end));
        self.spans.insert(start, end);
    }
}

/// Find every number-like substring in preprocessed page text.
///
/// Rules run in priority order, so an overlap between two formats is won by
/// the higher-priority format regardless of which starts first. Candidates
/// come back in rule-then-position order. A literal already recorded is
/// skipped without claiming its span, leaving that span open to later rules.
pub fn scan_candidates(text: &str) -> Vec<Candidate> {
    let mut claimed = ClaimedSpans::default();
    let mut seen: HashSet<&str> = HashSet::new();
    let mut candidates = Vec::new();

    for rule in RULES.iter() {
        for (start, end) in rule.matches(text) {
            if !claimed.is_free(start, end) {
                continue;
            }
            let literal = text[start..end].trim();
            if literal.is_empty() || !seen.insert(literal) {
                continue;
            }
            claimed.claim(start, end);
            candidates.push(Candidate {
                text: literal.to_string(),
                start,
                end,
                kind: rule.kind,
            });
        }
    }

    candidates
}
