pub mod hasher;
pub mod scanner;
pub mod scheme;

pub use scanner::Scanner;
pub use scheme::{parse, SchemeParser, WhitespaceMode};
