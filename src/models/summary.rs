use serde::Serialize;

use super::result::ParsingResult;

/// Condensed view of a parse: what was found, without the row bodies.
#[derive(Debug, Clone, Default, Serialize)]
pub struct SchemeSummary {
    pub success: bool,
    pub lessons: usize,
    /// Distinct week numbers, ascending.
    pub weeks: Vec<u32>,
    /// Distinct strands in first-seen order.
    pub strands: Vec<String>,
    /// Rows whose learning outcome could not be recovered.
    pub missing_outcomes: usize,
    #[serde(skip_serializing_if = "String::is_empty")]
    pub title: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub grade: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub term: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub year: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub learning_area: Option<String>,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub warnings: Vec<String>,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub errors: Vec<String>,
}

impl SchemeSummary {
    #[must_use]
    pub fn from_result(result: &ParsingResult) -> Self {
        let mut summary = Self {
            success: result.success,
            warnings: result.warnings.clone(),
            errors: result.errors.clone(),
            ..Default::default()
        };

        let Some(data) = &result.data else {
            return summary;
        };

        summary.lessons = data.weeks.len();
        summary.title.clone_from(&data.title);
        summary.grade.clone_from(&data.grade);
        summary.term.clone_from(&data.term);
        summary.year.clone_from(&data.year);
        summary.learning_area.clone_from(&data.learning_area);

        let mut weeks: Vec<u32> = data.weeks.iter().map(|w| w.week).collect();
        weeks.sort_unstable();
        weeks.dedup();
        summary.weeks = weeks;

        for row in &data.weeks {
            if !summary.strands.contains(&row.strand) {
                summary.strands.push(row.strand.clone());
            }
        }

        summary.missing_outcomes = data
            .weeks
            .iter()
            .filter(|w| !w.has_required_fields())
            .count();

        summary
    }
}
