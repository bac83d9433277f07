// Pedantic lint configuration for the crate.
// Most of these are reasonable but too strict for this codebase:
// - missing_errors_doc: Error handling is self-evident from Result types
// - missing_panics_doc: Panics are rare and documented inline
// - module_name_repetitions: SchemeError, SchemeParser read better than Error, Parser
// - too_many_lines: Extraction heuristics need cohesive logic
// - option_if_let_else: if-let is often clearer
// - fn_params_excessive_bools: CLI flags are naturally boolean
// - needless_pass_by_value: Sometimes clearer semantically
// - case_sensitive_file_extension_comparisons: Extensions are normalized upstream
// - manual_let_else: if-let with early return is often clearer in context
#![allow(
    clippy::missing_errors_doc,
    clippy::missing_panics_doc,
    clippy::module_name_repetitions,
    clippy::too_many_lines,
    clippy::option_if_let_else,
    clippy::fn_params_excessive_bools,
    clippy::needless_pass_by_value,
    clippy::case_sensitive_file_extension_comparisons,
    clippy::manual_let_else
)]

pub mod cli;
pub mod config;
pub mod error;
pub mod ingest;
pub mod models;
pub mod operations;

pub use error::{Result, SchemeError};
pub use ingest::scheme::{parse, SchemeParser, WhitespaceMode};
pub use models::{ParsedSchemeData, ParsingResult, SchemeOfWork};
