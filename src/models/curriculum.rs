//! CBC learning-area catalogue by grade level.
//!
//! Levels share their area list within a band (pre-primary, lower primary,
//! upper primary, junior secondary, senior secondary).

use serde::Serialize;

const PRE_PRIMARY: &[&str] = &[
    "Language Activities",
    "Mathematics Activities",
    "Creative Activities",
    "Environmental Activities",
    "Religious Activities",
    "Pastoral Programme of Instruction (PPI)",
];

const LOWER_PRIMARY: &[&str] = &[
    "Indigenous Language",
    "Kiswahili",
    "Mathematics",
    "English",
    "Religious Education",
    "Environmental Activities",
    "Creative Activities",
];

const UPPER_PRIMARY: &[&str] = &[
    "English",
    "Mathematics",
    "Kiswahili",
    "Religious Education",
    "Agriculture and Nutrition",
    "Social Studies",
    "Creative Arts",
    "Science and Technology",
];

const JUNIOR_SECONDARY: &[&str] = &[
    "English",
    "Kiswahili",
    "Mathematics",
    "Integrated Science",
    "Pre-Technical Studies",
    "Agriculture",
    "Social Studies",
    "Creative Arts",
    "Religious Education",
];

/// Subjects every senior-secondary learner takes regardless of pathway.
pub const COMPULSORY_SENIOR_SUBJECTS: &[&str] = &[
    "English",
    "Kiswahili/Kenya Sign Language",
    "ICT Skills",
    "Physical Education",
    "Community Service Learning",
];

const STEM: &[&str] = &[
    "Mathematics",
    "Advanced Mathematics",
    "Biology",
    "Chemistry",
    "Physics",
    "General Science",
    "Computer Studies",
    "Agriculture",
    "Home Science",
    "Drawing and Design",
    "Aviation Technology",
    "Building and Construction",
    "Electrical Technology",
    "Metal Technology",
    "Power Mechanics",
    "Wood Technology",
    "Media Technology",
    "Marine and Fisheries Technology",
];

const SOCIAL_SCIENCES: &[&str] = &[
    "Advanced English",
    "Literature in English",
    "Indigenous Languages",
    "Kiswahili Kipevu",
    "Fasihi ya Kiswahili",
    "Sign Language",
    "Arabic",
    "French",
    "German",
    "Mandarin Chinese",
    "History and Citizenship",
    "Geography",
    "Business Studies",
    "Christian Religious Education",
    "Islamic Religious Education",
    "Hindu Religious Education",
];

const ARTS_AND_SPORTS: &[&str] = &[
    "Sports and Recreation",
    "Music and Dance",
    "Theatre and Film",
    "Fine Arts",
];

const SENIOR_SECONDARY: &[&str] = &[
    "English",
    "Kiswahili/Kenya Sign Language",
    "ICT Skills",
    "Physical Education",
    "Community Service Learning",
    "Mathematics",
    "Advanced Mathematics",
    "Biology",
    "Chemistry",
    "Physics",
    "General Science",
    "Computer Studies",
    "Agriculture",
    "Home Science",
    "Drawing and Design",
    "Aviation Technology",
    "Building and Construction",
    "Electrical Technology",
    "Metal Technology",
    "Power Mechanics",
    "Wood Technology",
    "Media Technology",
    "Marine and Fisheries Technology",
    "Advanced English",
    "Literature in English",
    "Indigenous Languages",
    "Kiswahili Kipevu",
    "Fasihi ya Kiswahili",
    "Sign Language",
    "Arabic",
    "French",
    "German",
    "Mandarin Chinese",
    "History and Citizenship",
    "Geography",
    "Business Studies",
    "Christian Religious Education",
    "Islamic Religious Education",
    "Hindu Religious Education",
    "Sports and Recreation",
    "Music and Dance",
    "Theatre and Film",
    "Fine Arts",
];

/// Grade levels in school order.
const LEVELS: &[(&str, &[&str])] = &[
    ("PP1", PRE_PRIMARY),
    ("PP2", PRE_PRIMARY),
    ("Grade 1", LOWER_PRIMARY),
    ("Grade 2", LOWER_PRIMARY),
    ("Grade 3", LOWER_PRIMARY),
    ("Grade 4", UPPER_PRIMARY),
    ("Grade 5", UPPER_PRIMARY),
    ("Grade 6", UPPER_PRIMARY),
    ("Grade 7", JUNIOR_SECONDARY),
    ("Grade 8", JUNIOR_SECONDARY),
    ("Grade 9", JUNIOR_SECONDARY),
    ("Grade 10", SENIOR_SECONDARY),
    ("Grade 11", SENIOR_SECONDARY),
    ("Grade 12", SENIOR_SECONDARY),
];

/// Senior-secondary pathway.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum Pathway {
    Stem,
    SocialSciences,
    ArtsAndSportsSciences,
}

impl Pathway {
    pub const ALL: [Pathway; 3] = [
        Pathway::Stem,
        Pathway::SocialSciences,
        Pathway::ArtsAndSportsSciences,
    ];

    #[must_use]
    pub fn as_str(&self) -> &'static str {
        match self {
            Pathway::Stem => "STEM",
            Pathway::SocialSciences => "Social Sciences",
            Pathway::ArtsAndSportsSciences => "Arts and Sports Sciences",
        }
    }

    #[must_use]
    pub fn areas(&self) -> &'static [&'static str] {
        match self {
            Pathway::Stem => STEM,
            Pathway::SocialSciences => SOCIAL_SCIENCES,
            Pathway::ArtsAndSportsSciences => ARTS_AND_SPORTS,
        }
    }
}

/// All grade levels in school order.
#[must_use]
pub fn all_levels() -> Vec<&'static str> {
    LEVELS.iter().map(|(level, _)| *level).collect()
}

/// Canonical name for a loosely written level.
///
/// Accepts `"Grade 7"`, `"grade 7"`, `"7"` and `"pp1"`.
#[must_use]
pub fn resolve_level(level: &str) -> Option<&'static str> {
    let wanted = canonical_level(level);
    LEVELS
        .iter()
        .find(|(name, _)| name.eq_ignore_ascii_case(&wanted))
        .map(|(name, _)| *name)
}

/// Learning areas offered at `level`.
#[must_use]
pub fn learning_areas(level: &str) -> Option<&'static [&'static str]> {
    let wanted = canonical_level(level);
    LEVELS
        .iter()
        .find(|(name, _)| name.eq_ignore_ascii_case(&wanted))
        .map(|(_, areas)| *areas)
}

/// Whether `level` is in senior secondary, where pathways apply.
#[must_use]
pub fn is_senior(level: &str) -> bool {
    learning_areas(level).is_some_and(|areas| areas == SENIOR_SECONDARY)
}

/// Pathway a senior-secondary elective belongs to. Compulsory subjects have none.
#[must_use]
pub fn pathway_of(area: &str) -> Option<Pathway> {
    Pathway::ALL
        .into_iter()
        .find(|p| p.areas().iter().any(|a| a.eq_ignore_ascii_case(area.trim())))
}

fn canonical_level(level: &str) -> String {
    let trimmed = level.trim();
    if !trimmed.is_empty() && trimmed.chars().all(|c| c.is_ascii_digit()) {
        format!("Grade {trimmed}")
    } else {
        trimmed.split_whitespace().collect::<Vec<_>>().join(" ")
    }
}
