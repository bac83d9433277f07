use regex::Regex;

use super::fields::title_case;
use super::normalize::NormalizedDocument;
use super::patterns::PatternTable;
use crate::models::result::HeaderInfo;

/// Header metadata is only looked for in this many leading lines.
const HEADER_LINES: usize = 10;

/// A title line must be longer than this.
const MIN_TITLE_CHARS: usize = 10;

/// Learning areas recognised in the header, in priority order.
const KNOWN_LEARNING_AREAS: &[&str] = &[
    "mathematics",
    "english",
    "kiswahili",
    "science",
    "social studies",
    "creative arts",
    "agriculture",
    "religious education",
    "pre-technical",
    "integrated science",
    "business studies",
    "computer studies",
];

/// Pull title, grade, term, year, learning area, teacher and school from the
/// first lines of the document. Every field is independent and optional.
#[must_use]
pub fn extract_header(patterns: &PatternTable, doc: &NormalizedDocument) -> HeaderInfo {
    let lines: Vec<&str> = doc.lines().take(HEADER_LINES).collect();
    let header_text = lines.join(" ").to_lowercase();

    HeaderInfo {
        title: lines
            .iter()
            .map(|l| l.trim())
            .find(|l| l.chars().count() > MIN_TITLE_CHARS)
            .unwrap_or_default()
            .to_string(),
        teacher_name: captured(&patterns.teacher, &header_text),
        school: captured(&patterns.school, &header_text),
        grade: grade(&patterns.grade, &header_text),
        term: first_capture(&patterns.term, &header_text),
        year: patterns
            .year
            .iter()
            .find_map(|p| p.find(&header_text))
            .map(|m| m.as_str().to_string()),
        learning_area: KNOWN_LEARNING_AREAS
            .iter()
            .find(|area| header_text.contains(*area))
            .map(|area| title_case(area)),
    }
}

/// `Grade N` from a numeric capture, otherwise the literal match upper-cased.
fn grade(patterns: &[Regex], text: &str) -> Option<String> {
    patterns.iter().find_map(|p| {
        let caps = p.captures(text)?;
        Some(match caps.get(1) {
            Some(n) => format!("Grade {}", n.as_str()),
            None => caps.get(0)?.as_str().to_uppercase(),
        })
    })
}

fn first_capture(patterns: &[Regex], text: &str) -> Option<String> {
    patterns.iter().find_map(|p| {
        p.captures(text)
            .and_then(|caps| caps.get(1))
            .map(|m| m.as_str().to_string())
    })
}

/// Trimmed first group of `pattern`; a blank capture counts as absent.
fn captured(pattern: &Regex, text: &str) -> Option<String> {
    let value = pattern.captures(text)?.get(1)?.as_str().trim().to_string();
    (!value.is_empty()).then_some(value)
}
