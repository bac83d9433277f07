//! CBC learning-area catalogue lookups.

use serde::Serialize;

use crate::error::{Result, SchemeError};
use crate::models::curriculum::{self, Pathway, COMPULSORY_SENIOR_SUBJECTS};

/// Learning areas for one grade level.
#[derive(Debug, Clone, Serialize)]
pub struct LevelAreas {
    pub level: &'static str,
    pub areas: Vec<&'static str>,
}

/// Senior-secondary pathway with its electives.
#[derive(Debug, Clone, Serialize)]
pub struct PathwayAreas {
    pub pathway: &'static str,
    pub areas: Vec<&'static str>,
}

#[derive(Debug, Clone, Serialize)]
pub struct AreasResult {
    pub levels: Vec<LevelAreas>,
    /// Present when a senior-secondary level is listed.
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub compulsory: Vec<&'static str>,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub pathways: Vec<PathwayAreas>,
}

/// All levels, or just `level` when given.
pub fn list_areas(level: Option<&str>) -> Result<AreasResult> {
    let names = match level {
        None => curriculum::all_levels(),
        Some(wanted) => {
            let name =
                curriculum::resolve_level(wanted).ok_or_else(|| SchemeError::UnknownLevel {
                    level: wanted.to_string(),
                })?;
            vec![name]
        }
    };

    let has_senior = names.iter().any(|l| curriculum::is_senior(l));
    let levels = names
        .into_iter()
        .map(|l| LevelAreas {
            level: l,
            areas: curriculum::learning_areas(l).unwrap_or_default().to_vec(),
        })
        .collect();

    let (compulsory, pathways) = if has_senior {
        let pathways = Pathway::ALL
            .iter()
            .map(|p| PathwayAreas {
                pathway: p.as_str(),
                areas: p.areas().to_vec(),
            })
            .collect();
        (COMPULSORY_SENIOR_SUBJECTS.to_vec(), pathways)
    } else {
        (Vec::new(), Vec::new())
    };

    Ok(AreasResult {
        levels,
        compulsory,
        pathways,
    })
}
