use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

use crate::error::{Result, SchemeError};
use crate::ingest::scheme::WhitespaceMode;

/// Directory holding per-project settings.
const SCHEME_DIR: &str = ".scheme";
/// Config filename.
const CONFIG_FILE: &str = "config.toml";

/// Configuration resolved from a working directory.
#[derive(Debug, Clone)]
pub struct Config {
    /// Directory the tool was pointed at.
    pub root: PathBuf,
    /// Path to the `.scheme/` directory.
    pub scheme_dir: PathBuf,
    /// Path to the config file.
    pub config_path: PathBuf,
    /// Settings loaded from config.toml.
    pub settings: UserSettings,
}

/// User-configurable settings from .scheme/config.toml.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct UserSettings {
    pub parsing: ParsingSettings,
    pub output: OutputSettings,
    pub batch: BatchSettings,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ParsingSettings {
    /// "lines" (default) keeps line structure, "legacy" collapses everything.
    pub whitespace: WhitespaceMode,
}

/// How results are written to stdout.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum OutputFormat {
    #[default]
    Minified,
    Pretty,
    Yaml,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct OutputSettings {
    pub format: OutputFormat,
}

/// Settings for `batch` directory runs.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct BatchSettings {
    /// File extensions treated as scheme documents.
    pub extensions: Vec<String>,
    /// Files larger than this are skipped.
    pub max_file_size_mb: u32,
    /// Relative-path substrings to skip.
    pub exclude_patterns: Vec<String>,
}

impl Default for BatchSettings {
    fn default() -> Self {
        Self {
            extensions: vec!["txt".into(), "md".into(), "csv".into(), "tsv".into()],
            max_file_size_mb: 10,
            exclude_patterns: Vec::new(),
        }
    }
}

impl Config {
    /// Config rooted at `root`, with settings from its config file if present.
    pub fn new(root: impl Into<PathBuf>) -> Self {
        let root = root.into();
        let scheme_dir = root.join(SCHEME_DIR);
        let config_path = scheme_dir.join(CONFIG_FILE);

        let settings = Self::load_settings(&config_path).unwrap_or_default();

        Self {
            root,
            scheme_dir,
            config_path,
            settings,
        }
    }

    pub fn from_cwd() -> Result<Self> {
        let cwd = std::env::current_dir()
            .map_err(|e| SchemeError::Config(format!("cannot get cwd: {e}")))?;
        Ok(Self::new(cwd))
    }

    /// Missing or malformed files yield `None`, and the caller falls back to defaults.
    fn load_settings(config_path: &Path) -> Option<UserSettings> {
        if !config_path.exists() {
            return None;
        }
        let content = std::fs::read_to_string(config_path).ok()?;
        match toml::from_str(&content) {
            Ok(settings) => Some(settings),
            Err(e) => {
                tracing::warn!(path = %config_path.display(), error = %e, "ignoring invalid config");
                None
            }
        }
    }

    /// Write current settings to config.toml.
    pub fn save_settings(&self) -> Result<()> {
        std::fs::create_dir_all(&self.scheme_dir)?;
        let content = toml::to_string_pretty(&self.settings)
            .map_err(|e| SchemeError::Config(format!("failed to serialize settings: {e}")))?;
        std::fs::write(&self.config_path, content)?;
        Ok(())
    }

    /// Path relative to the config root, forward slashes.
    #[must_use]
    pub fn relative_path(&self, abs: &Path) -> String {
        abs.strip_prefix(&self.root)
            .unwrap_or(abs)
            .to_string_lossy()
            .replace('\\', "/")
    }
}
