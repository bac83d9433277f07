use thiserror::Error;

#[derive(Error, Debug)]
pub enum SchemeError {
    #[error("io error: {0}")]
    Io(#[from] std::io::Error),

    #[error("file not found: {path}")]
    FileNotFound { path: String },

    #[error("pattern table failed to compile: {detail}")]
    Pattern { detail: String },

    #[error("unknown grade level: {level}")]
    UnknownLevel { level: String },

    #[error("config error: {0}")]
    Config(String),
}

pub type Result<T> = std::result::Result<T, SchemeError>;
