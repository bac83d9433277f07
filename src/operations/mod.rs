//! Operations behind the CLI subcommands.
//!
//! Each returns a serializable result; rendering is left to `cli::output`.

pub mod areas;
pub mod batch;
pub mod parse;

pub use areas::{list_areas, AreasResult, LevelAreas, PathwayAreas};
pub use batch::{run_batch, BatchEntry, BatchReport};
pub use parse::{parse_bytes, parse_file, summarize_file};
