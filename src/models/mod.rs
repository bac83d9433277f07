pub mod curriculum;
pub mod result;
pub mod scheme;
pub mod summary;

pub use result::{HeaderInfo, ParsedSchemeData, ParsingResult};
pub use scheme::SchemeOfWork;
pub use summary::SchemeSummary;
