use super::fields::{clean_outcome, lesson_number, strip_label, week_number};
use super::normalize::NormalizedDocument;
use super::patterns::{matches_any, PatternTable};
use super::ExtractionStrategy;
use crate::models::scheme::{SchemeOfWork, WEEK_RANGE};

/// Sections shorter than this (trimmed, in chars) are noise.
const MIN_SECTION_CHARS: usize = 20;

/// Labelled-field extraction from free text split at `week N` markers.
///
/// Each section yields at most one row, and only when strand, sub-strand and
/// learning outcome were all found.
pub struct SectionStrategy;

impl ExtractionStrategy for SectionStrategy {
    fn name(&self) -> &'static str {
        "sections"
    }

    fn extract(&self, patterns: &PatternTable, doc: &NormalizedDocument) -> Vec<SchemeOfWork> {
        split_sections(patterns, &doc.text)
            .into_iter()
            .enumerate()
            .filter(|(_, section)| section.trim().chars().count() >= MIN_SECTION_CHARS)
            .filter_map(|(index, section)| parse_section(patterns, section, default_week(index)))
            .collect()
    }
}

/// A section's 1-based position, or 1 once that leaves the week range.
fn default_week(index: usize) -> u32 {
    u32::try_from(index + 1)
        .ok()
        .filter(|week| WEEK_RANGE.contains(week))
        .unwrap_or(1)
}

/// Split `text` so that every `week N` match starts a new section.
/// A match at the very start does not produce an empty leading section.
fn split_sections<'a>(patterns: &PatternTable, text: &'a str) -> Vec<&'a str> {
    let mut sections = Vec::new();
    let mut start = 0;
    for m in patterns.week_boundary.find_iter(text) {
        if m.start() > start {
            sections.push(&text[start..m.start()]);
            start = m.start();
        }
    }
    sections.push(&text[start..]);
    sections
}

/// Fields gathered while scanning one section.
#[derive(Default)]
struct SectionFields {
    strand: String,
    sub_strand: String,
    outcome: String,
    experiences: String,
    inquiry: String,
    resources: String,
    assessment: String,
    reflection: Option<String>,
}

fn parse_section(patterns: &PatternTable, section: &str, default_week: u32) -> Option<SchemeOfWork> {
    let mut week = default_week;
    let mut lesson = 1;
    let mut fields = SectionFields::default();

    // Every line is checked against every field; later lines overwrite,
    // week and lesson numbers included.
    for line in section.split('\n').map(str::trim).filter(|l| !l.is_empty()) {
        let lower = line.to_lowercase();

        if let Some(n) = week_number(patterns, line) {
            week = n;
        }
        if let Some(n) = lesson_number(patterns, line) {
            lesson = n;
        }

        let mentions_strand = lower.contains("strand");
        if mentions_strand && !lower.contains("sub") {
            fields.strand = strip_label(&patterns.strand_label, line);
        }
        if mentions_strand && lower.contains("sub") {
            fields.sub_strand = strip_label(&patterns.sub_strand_label, line);
        }
        if matches_any(&patterns.learning_outcome, &lower) {
            fields.outcome = clean_outcome(patterns, line).unwrap_or_default();
        }
        if lower.contains("learning experience") || lower.contains("activities") {
            fields.experiences = strip_label(&patterns.experiences_label, line);
        }
        if lower.contains("key inquiry") || lower.contains("inquiry question") {
            fields.inquiry = strip_label(&patterns.inquiry_label, line);
        }
        if matches_any(&patterns.resource, &lower) {
            fields.resources = strip_label(&patterns.resources_label, line);
        }
        if matches_any(&patterns.assessment, &lower) {
            fields.assessment = strip_label(&patterns.assessment_label, line);
        }
        if lower.contains("reflection") || lower.contains("remark") {
            let reflection = strip_label(&patterns.reflection_label, line);
            fields.reflection = (!reflection.is_empty()).then_some(reflection);
        }
    }

    if fields.strand.is_empty() || fields.sub_strand.is_empty() || fields.outcome.is_empty() {
        tracing::debug!(
            week,
            has_strand = !fields.strand.is_empty(),
            has_sub_strand = !fields.sub_strand.is_empty(),
            has_outcome = !fields.outcome.is_empty(),
            "dropping incomplete section"
        );
        return None;
    }

    Some(SchemeOfWork {
        week,
        lesson,
        strand: fields.strand,
        sub_strand: fields.sub_strand,
        lesson_learning_outcome: fields.outcome,
        learning_experiences: fields.experiences,
        key_inquiry_question: fields.inquiry,
        learning_resources: fields.resources,
        assessment: fields.assessment,
        reflection: fields.reflection,
    })
}
