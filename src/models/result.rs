use serde::{Deserialize, Serialize};

use super::scheme::SchemeOfWork;

/// Error reported when neither strategy recovers a single row.
pub const NO_WEEK_DATA: &str = "No valid week data found in the scheme";

pub const GRADE_NOT_DETECTED: &str = "grade not detected";
pub const TERM_NOT_DETECTED: &str = "term not detected";
pub const LEARNING_AREA_NOT_IDENTIFIED: &str = "learning area not clearly identified";

/// Document-level metadata recovered from the first lines of a scheme.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct HeaderInfo {
    pub title: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub teacher_name: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub school: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub grade: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub term: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub year: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub learning_area: Option<String>,
}

impl HeaderInfo {
    /// Warnings for the metadata a lesson plan needs but the header lacked.
    #[must_use]
    pub fn missing_field_warnings(&self) -> Vec<String> {
        let mut warnings = Vec::new();
        if self.grade.is_none() {
            warnings.push(GRADE_NOT_DETECTED.to_string());
        }
        if self.term.is_none() {
            warnings.push(TERM_NOT_DETECTED.to_string());
        }
        if self.learning_area.is_none() {
            warnings.push(LEARNING_AREA_NOT_IDENTIFIED.to_string());
        }
        warnings
    }
}

/// A successfully parsed scheme: header metadata plus rows in document order.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ParsedSchemeData {
    pub title: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub teacher_name: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub school: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub grade: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub term: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub year: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub learning_area: Option<String>,
    pub weeks: Vec<SchemeOfWork>,
}

impl ParsedSchemeData {
    #[must_use]
    pub fn new(header: HeaderInfo, weeks: Vec<SchemeOfWork>) -> Self {
        Self {
            title: header.title,
            teacher_name: header.teacher_name,
            school: header.school,
            grade: header.grade,
            term: header.term,
            year: header.year,
            learning_area: header.learning_area,
            weeks,
        }
    }
}

/// Outcome of a parse. Failures are data, never panics or `Err`s.
///
/// `success` is true exactly when `data` is present, which is exactly when
/// at least one row was extracted.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ParsingResult {
    pub success: bool,
    pub data: Option<ParsedSchemeData>,
    pub errors: Vec<String>,
    pub warnings: Vec<String>,
}

impl ParsingResult {
    /// Build the result for a completed extraction.
    ///
    /// An empty row list degrades to the structural failure.
    #[must_use]
    pub fn assemble(header: HeaderInfo, weeks: Vec<SchemeOfWork>) -> Self {
        if weeks.is_empty() {
            return Self::failure(NO_WEEK_DATA);
        }
        let warnings = header.missing_field_warnings();
        Self {
            success: true,
            data: Some(ParsedSchemeData::new(header, weeks)),
            errors: Vec::new(),
            warnings,
        }
    }

    #[must_use]
    pub fn failure(message: impl Into<String>) -> Self {
        Self {
            success: false,
            data: None,
            errors: vec![message.into()],
            warnings: Vec::new(),
        }
    }

    /// Rows of a successful parse, empty on failure.
    #[must_use]
    pub fn weeks(&self) -> &[SchemeOfWork] {
        self.data.as_ref().map_or(&[], |d| d.weeks.as_slice())
    }
}
