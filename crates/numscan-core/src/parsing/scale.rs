use regex::Regex;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::sync::LazyLock;

/// Word that multiplies the number right before it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ScaleWord {
    Thousand,
    Million,
    Billion,
    Trillion,
}

impl ScaleWord {
    /// Scan order of the scale patterns.
    pub const ALL: [ScaleWord; 4] = [
        ScaleWord::Thousand,
        ScaleWord::Million,
        ScaleWord::Billion,
        ScaleWord::Trillion,
    ];

    pub fn factor(self) -> f64 {
        match self {
            ScaleWord::Thousand => 1e3,
            ScaleWord::Million => 1e6,
            ScaleWord::Billion => 1e9,
            ScaleWord::Trillion => 1e12,
        }
    }

    fn spellings(self) -> &'static str {
        match self {
            ScaleWord::Thousand => "thousands?|k",
            ScaleWord::Million => "millions?|mil",
            ScaleWord::Billion => "billions?|bil",
            ScaleWord::Trillion => "trillions?|tril",
        }
    }
}

impl fmt::Display for ScaleWord {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ScaleWord::Thousand => write!(f, "thousand"),
            ScaleWord::Million => write!(f, "million"),
            ScaleWord::Billion => write!(f, "billion"),
            ScaleWord::Trillion => write!(f, "trillion"),
        }
    }
}

static SCALE_PATTERNS: LazyLock<Vec<(ScaleWord, Regex)>> = LazyLock::new(|| {
    ScaleWord::ALL
        .iter()
        .map(|&word| {
            let pattern = format!(
                r"(?i)\b([0-9]+(?:,[0-9]{{3}})*(?:\.[0-9]+)?)\s+({})\b",
                word.spellings()
            );
            (word, Regex::new(&pattern).expect("valid scale pattern"))
        })
        .collect()
});

/// A number immediately followed by whitespace and a scale word.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ScalePhrase<'a> {
    /// The numeric part exactly as written, e.g. "12.5" or "1,500".
    pub literal: &'a str,
    /// The scale word as written, e.g. "Million" or "k".
    pub spelled: &'a str,
    pub word: ScaleWord,
}

/// Find scale phrases, all thousands first, then millions, and so on.
pub fn find_scale_phrases(text: &str) -> Vec<ScalePhrase<'_>> {
    let mut phrases = Vec::new();

    for (word, regex) in SCALE_PATTERNS.iter() {
        for caps in regex.captures_iter(text) {
            let (Some(number), Some(spelled)) = (caps.get(1), caps.get(2)) else {
                continue;
            };
            phrases.push(ScalePhrase {
                literal: number.as_str(),
                spelled: spelled.as_str(),
                word: *word,
            });
        }
    }

    phrases
}
