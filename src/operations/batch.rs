//! Parse every scheme document under a directory, in parallel.

use std::path::Path;

use rayon::prelude::*;
use serde::Serialize;

use crate::config::BatchSettings;
use crate::error::Result;
use crate::ingest::hasher;
use crate::ingest::scanner::{ScannedFile, Scanner, SkipReason, SkippedFile};
use crate::ingest::scheme::SchemeParser;
use crate::operations::parse::parse_bytes;

/// Outcome for one document.
#[derive(Debug, Clone, Serialize)]
pub struct BatchEntry {
    pub path: String,
    /// SHA-256 of the raw file bytes.
    pub hash: String,
    pub success: bool,
    pub lessons: usize,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub warnings: Vec<String>,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub errors: Vec<String>,
}

/// Result of a batch run.
#[derive(Debug, Clone, Default, Serialize)]
pub struct BatchReport {
    /// Whitespace mode every file was parsed with.
    pub mode: &'static str,
    pub files_parsed: usize,
    pub files_failed: usize,
    pub files_skipped: usize,
    pub lessons: usize,
    pub entries: Vec<BatchEntry>,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub skipped: Vec<SkippedFile>,
}

/// Scan `root` with `settings` and parse each selected file.
pub fn run_batch(parser: &SchemeParser, root: &Path, settings: &BatchSettings) -> Result<BatchReport> {
    let scan = Scanner::new(root, &settings.extensions)
        .with_max_file_size(settings.max_file_size_mb)
        .with_excludes(&settings.exclude_patterns)
        .scan()?;

    tracing::info!(
        files = scan.files.len(),
        skipped = scan.skipped.len(),
        bytes = scan.files.iter().map(|f| f.size).sum::<u64>(),
        root = %root.display(),
        "batch scan complete"
    );

    let parsed: Vec<std::result::Result<BatchEntry, SkippedFile>> = scan
        .files
        .par_iter()
        .map(|file| parse_scanned(parser, file))
        .collect();

    Ok(tally(parser, scan.skipped, parsed))
}

/// Fold per-file outcomes into a report. Read failures join the scan's
/// skipped list, which stays sorted by path.
fn tally(
    parser: &SchemeParser,
    skipped: Vec<SkippedFile>,
    parsed: Vec<std::result::Result<BatchEntry, SkippedFile>>,
) -> BatchReport {
    let mut report = BatchReport {
        mode: parser.mode().as_str(),
        skipped,
        ..Default::default()
    };
    for outcome in parsed {
        match outcome {
            Ok(entry) => {
                if entry.success {
                    report.files_parsed += 1;
                } else {
                    report.files_failed += 1;
                }
                report.lessons += entry.lessons;
                report.entries.push(entry);
            }
            Err(skipped) => report.skipped.push(skipped),
        }
    }
    report
        .skipped
        .sort_by(|a, b| a.relative_path.cmp(&b.relative_path));
    report.files_skipped = report.skipped.len();
    report
}

fn parse_scanned(parser: &SchemeParser, file: &ScannedFile) -> std::result::Result<BatchEntry, SkippedFile> {
    let bytes = std::fs::read(&file.path).map_err(|e| {
        tracing::warn!(path = %file.relative_path, error = %e, "cannot read scheme file");
        SkippedFile {
            relative_path: file.relative_path.clone(),
            reason: SkipReason::IoError,
        }
    })?;

    let result = parse_bytes(parser, &bytes);
    Ok(BatchEntry {
        path: file.relative_path.clone(),
        hash: hasher::hash_bytes(&bytes),
        success: result.success,
        lessons: result.weeks().len(),
        warnings: result.warnings,
        errors: result.errors,
    })
}
