use serde::Serialize;

use crate::config::OutputFormat;

/// Format a result as minified JSON.
pub fn format_json<T: Serialize>(result: &T) -> String {
    serde_json::to_string(result).unwrap_or_else(|e| format!("{{\"error\":\"{e}\"}}"))
}

/// Format a result as indented JSON.
pub fn format_pretty<T: Serialize>(result: &T) -> String {
    serde_json::to_string_pretty(result).unwrap_or_else(|e| format!("{{\"error\":\"{e}\"}}"))
}

pub fn format_yaml<T: Serialize>(result: &T) -> String {
    serde_yaml_ng::to_string(result).unwrap_or_else(|e| format!("error: {e}\n"))
}

/// Format `result` the way `format` asks.
pub fn render<T: Serialize>(result: &T, format: OutputFormat) -> String {
    match format {
        OutputFormat::Minified => format_json(result),
        OutputFormat::Pretty => format_pretty(result),
        OutputFormat::Yaml => format_yaml(result).trim_end().to_string(),
    }
}

/// Format an error as JSON.
pub fn format_error(err: &dyn std::fmt::Display) -> String {
    serde_json::json!({ "error": err.to_string() }).to_string()
}
