//! Scheme-of-work parser.
//!
//! `SchemeParser::parse` turns loosely structured text into a
//! [`ParsingResult`]. It normalizes the input, reads header metadata from the
//! first lines, then runs the extraction strategies in order and keeps the
//! rows of the first one that finds any. It never panics on malformed input
//! and never returns `Err`; every failure is reported inside the result.

pub mod fields;
pub mod header;
pub mod normalize;
pub mod patterns;
pub mod sections;
pub mod table;

use crate::error::Result;
use crate::models::result::ParsingResult;
use crate::models::scheme::SchemeOfWork;

pub use normalize::{NormalizedDocument, WhitespaceMode};
pub use patterns::PatternTable;
pub use sections::SectionStrategy;
pub use table::TableStrategy;

/// One way of recovering rows from a normalized document.
pub trait ExtractionStrategy: Send + Sync {
    /// Short identifier used in logs.
    fn name(&self) -> &'static str;

    /// Rows found in document order; empty when the layout is not recognised.
    fn extract(&self, patterns: &PatternTable, doc: &NormalizedDocument) -> Vec<SchemeOfWork>;
}

/// Stateless scheme parser. Cheap to build, safe to share across threads.
pub struct SchemeParser {
    mode: WhitespaceMode,
    strategies: Vec<Box<dyn ExtractionStrategy>>,
}

impl Default for SchemeParser {
    fn default() -> Self {
        Self::new()
    }
}

impl SchemeParser {
    /// Parser with line-preserving normalization.
    #[must_use]
    pub fn new() -> Self {
        Self::with_mode(WhitespaceMode::default())
    }

    /// Parser with the given normalization; table first, sections as fallback.
    #[must_use]
    pub fn with_mode(mode: WhitespaceMode) -> Self {
        Self {
            mode,
            strategies: vec![Box::new(TableStrategy), Box::new(SectionStrategy)],
        }
    }

    #[must_use]
    pub fn mode(&self) -> WhitespaceMode {
        self.mode
    }

    /// Parse `content`. Total: any input yields a result.
    #[must_use]
    pub fn parse(&self, content: &str) -> ParsingResult {
        match self.try_parse(content) {
            Ok(result) => result,
            Err(e) => {
                tracing::error!(error = %e, "scheme parsing failed");
                ParsingResult::failure(format!("Parsing failed: {e}"))
            }
        }
    }

    fn try_parse(&self, content: &str) -> Result<ParsingResult> {
        let patterns = patterns::patterns()?;
        let doc = normalize::normalize(content, self.mode);
        let header = header::extract_header(patterns, &doc);
        let weeks = self.extract_weeks(patterns, &doc);
        Ok(ParsingResult::assemble(header, weeks))
    }

    /// Rows from the first strategy that yields any. Strategies never mix.
    fn extract_weeks(&self, patterns: &PatternTable, doc: &NormalizedDocument) -> Vec<SchemeOfWork> {
        for strategy in &self.strategies {
            let rows = strategy.extract(patterns, doc);
            if !rows.is_empty() {
                tracing::debug!(
                    strategy = strategy.name(),
                    mode = self.mode().as_str(),
                    rows = rows.len(),
                    "rows extracted"
                );
                return rows;
            }
            tracing::debug!(strategy = strategy.name(), "strategy found no rows");
        }
        Vec::new()
    }
}

/// Parse with the default parser.
#[must_use]
pub fn parse(content: &str) -> ParsingResult {
    SchemeParser::new().parse(content)
}
