//! Single-document parse operation.

use std::path::Path;

use crate::error::{Result, SchemeError};
use crate::ingest::scheme::SchemeParser;
use crate::models::result::ParsingResult;
use crate::models::summary::SchemeSummary;

/// Read `path` and parse it. Invalid UTF-8 is replaced, not rejected.
///
/// Only I/O problems are `Err`; an unparseable scheme is an unsuccessful
/// `ParsingResult`.
pub fn parse_file(parser: &SchemeParser, path: &Path) -> Result<ParsingResult> {
    if !path.is_file() {
        return Err(SchemeError::FileNotFound {
            path: path.to_string_lossy().into_owned(),
        });
    }
    let bytes = std::fs::read(path)?;
    Ok(parse_bytes(parser, &bytes))
}

/// Parse raw bytes, decoding lossily.
#[must_use]
pub fn parse_bytes(parser: &SchemeParser, bytes: &[u8]) -> ParsingResult {
    let content = String::from_utf8_lossy(bytes);
    let result = parser.parse(&content);
    tracing::debug!(
        success = result.success,
        lessons = result.weeks().len(),
        warnings = result.warnings.len(),
        "parsed scheme"
    );
    result
}

/// Parse `path` and condense the result.
pub fn summarize_file(parser: &SchemeParser, path: &Path) -> Result<SchemeSummary> {
    parse_file(parser, path).map(|r| SchemeSummary::from_result(&r))
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;
    use tempfile::NamedTempFile;

    const SCHEME: &str = "Grade 4 English Scheme of Work\nTerm 1\n\
                          Week 1\nStrand: Listening and Speaking\nSub Strand: Pronunciation\n\
                          Learners should be able to pronounce sounds correctly\n";

    #[test]
    fn parse_file_reads_and_parses() {
        let mut tmp = NamedTempFile::new().unwrap();
        write!(tmp, "{SCHEME}").unwrap();
        let result = parse_file(&SchemeParser::new(), tmp.path()).unwrap();
        assert!(result.success);
        assert_eq!(result.weeks().len(), 1);
    }

    #[test]
    fn parse_file_missing_is_error() {
        let err = parse_file(&SchemeParser::new(), Path::new("/definitely/not/here.txt"));
        assert!(matches!(err, Err(SchemeError::FileNotFound { .. })));
    }

    #[test]
    fn parse_bytes_tolerates_invalid_utf8() {
        let mut bytes = SCHEME.as_bytes().to_vec();
        bytes.extend_from_slice(&[0xff, 0xfe, 0x00]);
        let result = parse_bytes(&SchemeParser::new(), &bytes);
        assert!(result.success);
    }

    #[test]
    fn summarize_file_counts_lessons() {
        let mut tmp = NamedTempFile::new().unwrap();
        write!(tmp, "{SCHEME}").unwrap();
        let summary = summarize_file(&SchemeParser::new(), tmp.path()).unwrap();
        assert_eq!(summary.lessons, 1);
        assert_eq!(summary.strands, vec!["Listening and Speaking"]);
        assert_eq!(summary.grade.as_deref(), Some("Grade 4"));
    }
}
