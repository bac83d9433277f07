use super::fields::{clean_outcome, lesson_number, week_number};
use super::normalize::{collapse_whitespace, NormalizedDocument};
use super::patterns::PatternTable;
use super::ExtractionStrategy;
use crate::models::scheme::SchemeOfWork;

/// Fewest cells a line needs to count as a data row.
const MIN_CELLS: usize = 6;

const DEFAULT_WEEK: u32 = 1;
const DEFAULT_LESSON: u32 = 1;

/// Column-positional extraction from a tab / multi-space table.
///
/// Everything before the first line mentioning both "week" and "lesson" is
/// ignored; that line is the header and is dropped. Every later line is a
/// candidate row, including any repeat of the header.
pub struct TableStrategy;

impl ExtractionStrategy for TableStrategy {
    fn name(&self) -> &'static str {
        "table"
    }

    fn extract(&self, patterns: &PatternTable, doc: &NormalizedDocument) -> Vec<SchemeOfWork> {
        let mut rows = Vec::new();
        let mut in_table = false;

        for line in doc.rows.iter().map(|l| l.trim()).filter(|l| !l.is_empty()) {
            if !in_table {
                let lower = line.to_lowercase();
                in_table = lower.contains("week") && lower.contains("lesson");
                continue;
            }

            let cells: Vec<String> = patterns
                .cell_separator
                .split(line)
                .map(collapse_whitespace)
                .filter(|c| !c.is_empty())
                .collect();

            if cells.len() < MIN_CELLS {
                tracing::trace!(cells = cells.len(), "table line too narrow");
                continue;
            }

            if let Some(row) = row_from_cells(patterns, &cells) {
                rows.push(row);
            }
        }

        rows
    }
}

fn row_from_cells(patterns: &PatternTable, cells: &[String]) -> Option<SchemeOfWork> {
    let cell = |i: usize| cells.get(i).cloned().unwrap_or_default();

    let strand = cell(2);
    let sub_strand = cell(3);
    if strand.trim().is_empty() || sub_strand.trim().is_empty() {
        return None;
    }

    Some(SchemeOfWork {
        week: week_number(patterns, &cells[0]).unwrap_or(DEFAULT_WEEK),
        lesson: lesson_number(patterns, &cells[1]).unwrap_or(DEFAULT_LESSON),
        strand,
        sub_strand,
        lesson_learning_outcome: clean_outcome(patterns, &cell(4)).unwrap_or_default(),
        learning_experiences: cell(5),
        key_inquiry_question: cell(6),
        learning_resources: cell(7),
        assessment: cell(8),
        reflection: cells.get(9).cloned(),
    })
}
