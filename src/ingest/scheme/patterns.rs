//! Label and number patterns shared by every parse.
//!
//! Compiled once per process and reused; a compile failure is kept and
//! reported by every parse instead of panicking.

use std::sync::OnceLock;

use regex::Regex;

use crate::error::{Result, SchemeError};

const GRADE_PATTERNS: &[&str] = &[
    r"(?i)grade\s*([0-9]+)",
    r"(?i)class\s*([0-9]+)",
    r"(?i)standard\s*([0-9]+)",
    r"(?i)form\s*([0-9]+)",
    r"(?i)pp[12]",
];

const TERM_PATTERNS: &[&str] = &[r"(?i)term\s*([123])", r"(?i)semester\s*([12])"];

const YEAR_PATTERNS: &[&str] = &[r"([0-9]{4})", r"20[0-9]{2}"];

const TEACHER_PATTERN: &str = r"(?i)(?:teacher|by|prepared\s+by)\s*:?\s*([a-zA-Z\s]+)";

const SCHOOL_PATTERN: &str = r"(?i)([a-zA-Z\s]+school)";

const WEEK_PATTERNS: &[&str] = &[r"(?i)week\s*([0-9]+)", r"(?i)wk\s*([0-9]+)", r"^([0-9]+)$"];

const LESSON_PATTERNS: &[&str] = &[
    r"(?i)lesson\s*([0-9]+)",
    r"(?i)period\s*([0-9]+)",
    r"^([0-9]+)$",
];

const LEARNING_OUTCOME_PATTERNS: &[&str] = &[
    r"(?i)by\s+the\s+end\s+of.*?learner.*?should\s+be\s+able\s+to",
    r"(?i)learning\s+outcomes?",
    r"(?i)specific\s+learning\s+outcomes?",
    r"(?i)learners?\s+should\s+be\s+able\s+to",
];

const ASSESSMENT_PATTERNS: &[&str] = &[
    r"(?i)assessment",
    r"(?i)evaluation",
    r"(?i)oral\s+questions?",
    r"(?i)written\s+exercise",
    r"(?i)observation",
    r"(?i)practical\s+work",
    r"(?i)group\s+work",
    r"(?i)individual\s+work",
];

const RESOURCE_PATTERNS: &[&str] = &[
    r"(?i)learning\s+resources?",
    r"(?i)resources?",
    r"(?i)materials?",
    r"(?i)textbooks?",
    r"(?i)references?",
];

/// Every regex the scheme parser uses, grouped by what it recognises.
#[derive(Debug)]
pub struct PatternTable {
    pub grade: Vec<Regex>,
    pub term: Vec<Regex>,
    pub year: Vec<Regex>,
    pub teacher: Regex,
    pub school: Regex,

    pub week_number: Vec<Regex>,
    pub lesson_number: Vec<Regex>,
    pub learning_outcome: Vec<Regex>,
    pub assessment: Vec<Regex>,
    pub resource: Vec<Regex>,

    /// Start of a text section (`week 3`).
    pub week_boundary: Regex,
    /// Table column separator: a tab run or two-plus whitespace.
    pub cell_separator: Regex,

    pub strand_label: Regex,
    pub sub_strand_label: Regex,
    pub experiences_label: Regex,
    pub inquiry_label: Regex,
    pub resources_label: Regex,
    pub assessment_label: Regex,
    pub reflection_label: Regex,

    pub specific_outcome_label: Regex,
    pub outcome_label: Regex,
    pub end_of_lesson_lead_in: Regex,
}

impl PatternTable {
    pub fn compile() -> std::result::Result<Self, regex::Error> {
        Ok(Self {
            grade: compile_all(GRADE_PATTERNS)?,
            term: compile_all(TERM_PATTERNS)?,
            year: compile_all(YEAR_PATTERNS)?,
            teacher: Regex::new(TEACHER_PATTERN)?,
            school: Regex::new(SCHOOL_PATTERN)?,

            week_number: compile_all(WEEK_PATTERNS)?,
            lesson_number: compile_all(LESSON_PATTERNS)?,
            learning_outcome: compile_all(LEARNING_OUTCOME_PATTERNS)?,
            assessment: compile_all(ASSESSMENT_PATTERNS)?,
            resource: compile_all(RESOURCE_PATTERNS)?,

            week_boundary: Regex::new(r"(?i)week\s+[0-9]+")?,
            cell_separator: Regex::new(r"\t+|\s{2,}")?,

            strand_label: Regex::new(r"(?i)strand\s*:?\s*")?,
            sub_strand_label: Regex::new(r"(?i)sub[\s\-]*strand\s*:?\s*")?,
            experiences_label: Regex::new(r"(?i)learning\s+experiences?\s*:?\s*")?,
            inquiry_label: Regex::new(r"(?i)key\s+inquiry\s+questions?\s*:?\s*")?,
            resources_label: Regex::new(r"(?i)(?:learning\s+)?resources?\s*:?\s*")?,
            assessment_label: Regex::new(r"(?i)(?:assessment|evaluation)\s*:?\s*")?,
            reflection_label: Regex::new(r"(?i)(?:reflection|remark)s?\s*:?\s*")?,

            specific_outcome_label: Regex::new(r"(?i)specific\s+learning\s+outcomes?\s*:?\s*")?,
            outcome_label: Regex::new(r"(?i)learning\s+outcomes?\s*:?\s*")?,
            end_of_lesson_lead_in: Regex::new(r"(?i)by\s+the\s+end\s+of.*?learner")?,
        })
    }
}

fn compile_all(sources: &[&str]) -> std::result::Result<Vec<Regex>, regex::Error> {
    sources.iter().map(|s| Regex::new(s)).collect()
}

/// The process-wide pattern table.
pub fn patterns() -> Result<&'static PatternTable> {
    static TABLE: OnceLock<std::result::Result<PatternTable, regex::Error>> = OnceLock::new();
    TABLE
        .get_or_init(PatternTable::compile)
        .as_ref()
        .map_err(|e| SchemeError::Pattern {
            detail: e.to_string(),
        })
}

/// True if any of `patterns` matches somewhere in `text`.
#[must_use]
pub fn matches_any(patterns: &[Regex], text: &str) -> bool {
    patterns.iter().any(|p| p.is_match(text))
}
