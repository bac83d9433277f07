//! Field-level extractors shared by both strategies.

use std::ops::RangeInclusive;

use regex::Regex;

use super::patterns::PatternTable;
use crate::models::scheme::{LESSON_RANGE, WEEK_RANGE};

/// Cleaned outcomes at or below this many characters are rejected.
const MIN_OUTCOME_CHARS: usize = 10;

/// Week number named in `text`, if any pattern yields one inside 1..=15.
#[must_use]
pub fn week_number(patterns: &PatternTable, text: &str) -> Option<u32> {
    number_in_range(&patterns.week_number, text, &WEEK_RANGE)
}

/// Lesson number named in `text`, if any pattern yields one inside 1..=10.
#[must_use]
pub fn lesson_number(patterns: &PatternTable, text: &str) -> Option<u32> {
    number_in_range(&patterns.lesson_number, text, &LESSON_RANGE)
}

/// Try each pattern in order; the first whose number parses and lies in
/// `range` wins. An out-of-range hit moves on to the next pattern.
fn number_in_range(patterns: &[Regex], text: &str, range: &RangeInclusive<u32>) -> Option<u32> {
    patterns.iter().find_map(|pattern| {
        let caps = pattern.captures(text)?;
        let digits = caps.get(1).or_else(|| caps.get(0))?.as_str();
        digits.parse::<u32>().ok().filter(|n| range.contains(n))
    })
}

/// Strip outcome boilerplate and rewrite a "by the end of ... learner" lead-in.
///
/// Returns `None` when what remains is too short to be an outcome.
#[must_use]
pub fn clean_outcome(patterns: &PatternTable, text: &str) -> Option<String> {
    let stripped = patterns.specific_outcome_label.replace(text, "");
    let stripped = patterns.outcome_label.replace(&stripped, "");
    let rewritten = patterns.end_of_lesson_lead_in.replace(&stripped, "Learner");
    let outcome = rewritten.trim();
    (outcome.chars().count() > MIN_OUTCOME_CHARS).then(|| outcome.to_string())
}

/// Remove the first occurrence of `label` from `line` and trim.
#[must_use]
pub fn strip_label(label: &Regex, line: &str) -> String {
    label.replace(line, "").trim().to_string()
}

/// Upper-case the first letter of every space-separated word.
#[must_use]
pub fn title_case(text: &str) -> String {
    text.split(' ')
        .map(|word| {
            let mut chars = word.chars();
            match chars.next() {
                Some(first) => first.to_uppercase().chain(chars).collect(),
                None => String::new(),
            }
        })
        .collect::<Vec<_>>()
        .join(" ")
}
