// Standalone replacement logic kept separate from document walking so the
// same swap can serve plain text, titles, and tree payloads.

use anyhow::Result;
use regex::{Regex, RegexBuilder};
use serde_json::Value;
use std::borrow::Cow;

/// Casing shape of one matched occurrence of the target word.
///
/// `Other` covers any mixed casing beyond the first three buckets (e.g.
/// "yALE") and substitutes the same literal as `TitleCase`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CasePattern {
    AllUpper,
    AllLower,
    TitleCase,
    Other,
}

/// Classify a matched literal into its casing bucket.
///
/// Order matters: a single-letter match like "Y" equals both its uppercase
/// and lowercase forms, and the uppercase check wins.
pub fn classify(matched: &str) -> CasePattern {
    if matched == matched.to_uppercase() {
        return CasePattern::AllUpper;
    }
    if matched == matched.to_lowercase() {
        return CasePattern::AllLower;
    }
    if let Some(first) = matched.chars().next() {
        let (head, tail) = matched.split_at(first.len_utf8());
        if head == head.to_uppercase() && tail == tail.to_lowercase() {
            return CasePattern::TitleCase;
        }
    }
    CasePattern::Other
}

/// Case-preserving substitution of one target word with one replacement word.
///
/// Matching is case-insensitive, global, and non-overlapping. Each match is
/// substituted with the replacement literal for its [`CasePattern`]; the
/// three literals are precomputed at construction so per-call work is a
/// single scan. Stateless after construction and safe to share across
/// request handlers.
#[derive(Debug, Clone)]
pub struct WordSwap {
    pattern: Regex,
    upper: String,
    lower: String,
    title: String,
}

impl WordSwap {
    /// Build a swap for the given word pair. Fails on an empty target word,
    /// which would match at every position.
    pub fn new(target: &str, replacement: &str) -> Result<Self> {
        if target.is_empty() {
            anyhow::bail!("Target word must not be empty");
        }

        let pattern = RegexBuilder::new(&regex::escape(target))
            .case_insensitive(true)
            .build()?;

        Ok(Self {
            pattern,
            upper: replacement.to_uppercase(),
            lower: replacement.to_lowercase(),
            title: title_case(replacement),
        })
    }

    /// Swap used when no pair is configured: the original's yale → fale.
    pub fn default_pair() -> Result<Self> {
        Self::new("yale", "fale")
    }

    /// Replace every occurrence of the target word, adapting the
    /// replacement's casing to each match.
    ///
    /// Non-matching spans are preserved byte for byte; input with no
    /// occurrence is returned borrowed. The output is deterministic per
    /// casing bucket, not a per-character mirror: "yALE" becomes "Fale".
    pub fn replace<'a>(&self, input: &'a str) -> Cow<'a, str> {
        self.pattern.replace_all(input, |caps: &regex::Captures| {
            match classify(&caps[0]) {
                CasePattern::AllUpper => self.upper.as_str(),
                CasePattern::AllLower => self.lower.as_str(),
                CasePattern::TitleCase | CasePattern::Other => self.title.as_str(),
            }
        })
    }

    /// Boundary wrapper for callers handing over decoded JSON: strings are
    /// replaced, every other value passes through unchanged instead of
    /// erroring.
    pub fn replace_value(&self, value: Value) -> Value {
        match value {
            Value::String(text) => Value::String(self.replace(&text).into_owned()),
            other => other,
        }
    }
}

/// Uppercase first character, lowercase remainder.
fn title_case(word: &str) -> String {
    let mut chars = word.chars();
    match chars.next() {
        Some(first) => {
            let mut titled: String = first.to_uppercase().collect();
            titled.push_str(&chars.as_str().to_lowercase());
            titled
        }
        None => String::new(),
    }
}
