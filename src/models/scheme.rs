use serde::{Deserialize, Serialize};

/// Lowest and highest week number a scheme row may carry.
pub const WEEK_RANGE: std::ops::RangeInclusive<u32> = 1..=15;
/// Lowest and highest lesson number a scheme row may carry.
pub const LESSON_RANGE: std::ops::RangeInclusive<u32> = 1..=10;

/// One lesson slot of a scheme of work.
///
/// Rows are only built by the extraction strategies, which guarantee that
/// `strand` and `sub_strand` are non-empty and that `week` / `lesson` fall
/// inside [`WEEK_RANGE`] / [`LESSON_RANGE`].
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SchemeOfWork {
    pub week: u32,
    pub lesson: u32,
    pub strand: String,
    pub sub_strand: String,
    pub lesson_learning_outcome: String,
    #[serde(default)]
    pub learning_experiences: String,
    #[serde(default)]
    pub key_inquiry_question: String,
    #[serde(default)]
    pub learning_resources: String,
    #[serde(default)]
    pub assessment: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub reflection: Option<String>,
}

impl SchemeOfWork {
    /// Whether the row carries every field a lesson plan cannot do without.
    #[must_use]
    pub fn has_required_fields(&self) -> bool {
        !self.strand.trim().is_empty()
            && !self.sub_strand.trim().is_empty()
            && !self.lesson_learning_outcome.trim().is_empty()
    }
}
