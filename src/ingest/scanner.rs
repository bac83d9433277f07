use std::path::{Path, PathBuf};

use ignore::WalkBuilder;
use rayon::prelude::*;
use serde::Serialize;

use crate::error::{Result, SchemeError};

/// Reason a candidate scheme file was left out of a batch.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum SkipReason {
    /// File exceeds the configured `max_file_size_mb` limit.
    TooLarge,
    /// File matched one of the configured exclude patterns.
    Excluded,
    /// Metadata could not be read.
    IoError,
}

/// A scheme file selected for parsing.
#[derive(Debug, Clone)]
pub struct ScannedFile {
    pub path: PathBuf,
    /// Path relative to the scan root, forward slashes.
    pub relative_path: String,
    pub size: u64,
}

/// A candidate that was not selected.
#[derive(Debug, Clone, Serialize)]
pub struct SkippedFile {
    #[serde(rename = "path")]
    pub relative_path: String,
    pub reason: SkipReason,
}

/// Files found under the scan root, both sorted by relative path.
#[derive(Debug, Clone, Default)]
pub struct ScanReport {
    pub files: Vec<ScannedFile>,
    pub skipped: Vec<SkippedFile>,
}

/// Parallel scanner for scheme documents that respects .gitignore.
pub struct Scanner {
    root: PathBuf,
    /// Accepted extensions, lowercase, without dot.
    extensions: Vec<String>,
    /// Substrings of relative paths to leave out.
    exclude_patterns: Vec<String>,
    /// Maximum file size in bytes (0 = unlimited).
    max_file_size_bytes: u64,
}

impl Scanner {
    pub fn new(root: impl Into<PathBuf>, extensions: &[String]) -> Self {
        Self {
            root: root.into(),
            extensions: extensions
                .iter()
                .map(|e| e.trim_start_matches('.').to_lowercase())
                .collect(),
            exclude_patterns: Vec::new(),
            max_file_size_bytes: 0,
        }
    }

    #[must_use]
    pub fn with_max_file_size(mut self, max_size_mb: u32) -> Self {
        self.max_file_size_bytes = u64::from(max_size_mb) * 1024 * 1024;
        self
    }

    #[must_use]
    pub fn with_excludes(mut self, patterns: &[String]) -> Self {
        self.exclude_patterns = patterns
            .iter()
            .map(|p| p.trim_end_matches('/').to_string())
            .filter(|p| !p.is_empty())
            .collect();
        self
    }

    /// Walk the root and sort candidates into selected and skipped.
    pub fn scan(&self) -> Result<ScanReport> {
        if !self.root.is_dir() {
            return Err(SchemeError::FileNotFound {
                path: self.root.to_string_lossy().into_owned(),
            });
        }

        let entries: Vec<PathBuf> = WalkBuilder::new(&self.root)
            .hidden(true)
            .git_ignore(true)
            .git_global(false)
            .git_exclude(true)
            .follow_links(false)
            .filter_entry(|e| {
                let name = e.file_name().to_string_lossy();
                !matches!(
                    name.as_ref(),
                    "node_modules" | "target" | ".scheme" | ".git" | "dist" | "build"
                )
            })
            .build()
            .filter_map(std::result::Result::ok)
            .filter(|e| e.file_type().is_some_and(|ft| ft.is_file()))
            .filter(|e| self.has_accepted_extension(e.path()))
            .map(ignore::DirEntry::into_path)
            .collect();

        let classified: Vec<std::result::Result<ScannedFile, SkippedFile>> = entries
            .par_iter()
            .map(|path| self.classify(path))
            .collect();

        let mut report = ScanReport::default();
        for entry in classified {
            match entry {
                Ok(file) => report.files.push(file),
                Err(skipped) => report.skipped.push(skipped),
            }
        }
        report.files.sort_by(|a, b| a.relative_path.cmp(&b.relative_path));
        report
            .skipped
            .sort_by(|a, b| a.relative_path.cmp(&b.relative_path));
        Ok(report)
    }

    fn classify(&self, path: &Path) -> std::result::Result<ScannedFile, SkippedFile> {
        let relative_path = path
            .strip_prefix(&self.root)
            .unwrap_or(path)
            .to_string_lossy()
            .replace('\\', "/");

        let skip = |reason| SkippedFile {
            relative_path: relative_path.clone(),
            reason,
        };

        if self
            .exclude_patterns
            .iter()
            .any(|p| relative_path.contains(p.as_str()))
        {
            return Err(skip(SkipReason::Excluded));
        }

        let size = match path.metadata() {
            Ok(meta) => meta.len(),
            Err(_) => return Err(skip(SkipReason::IoError)),
        };

        if self.max_file_size_bytes > 0 && size > self.max_file_size_bytes {
            return Err(skip(SkipReason::TooLarge));
        }

        Ok(ScannedFile {
            path: path.to_path_buf(),
            relative_path,
            size,
        })
    }

    fn has_accepted_extension(&self, path: &Path) -> bool {
        path.extension()
            .and_then(|ext| ext.to_str())
            .is_some_and(|ext| self.extensions.iter().any(|e| e.eq_ignore_ascii_case(ext)))
    }
}
