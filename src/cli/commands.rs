use clap::{Parser, Subcommand};

#[derive(Parser)]
#[command(
    name = "cbc-scheme",
    version,
    about = "Extract structured lesson plans from CBC schemes of work",
    after_help = "NOTE: Input is plain text. Convert PDF or Word schemes to text first. \
                  Defaults for whitespace handling, output format and batch selection \
                  can be stored in .scheme/config.toml (see 'cbc-scheme config init')."
)]
pub struct Cli {
    /// Log parser decisions to stderr (overridden by `RUST_LOG`)
    #[arg(short, long, global = true)]
    pub verbose: bool,

    #[command(subcommand)]
    pub command: Command,
}

#[derive(Subcommand)]
pub enum Command {
    /// Parse one scheme of work and print the result.
    ///
    /// A document with no recognisable lessons still prints a result
    /// with `success: false`; only unreadable files are errors.
    Parse {
        /// Text file holding the scheme
        path: String,
        /// Collapse all whitespace before parsing, line breaks included
        #[arg(long)]
        legacy: bool,
        /// Indented JSON
        #[arg(long, conflicts_with = "yaml")]
        pretty: bool,
        /// YAML instead of JSON
        #[arg(long)]
        yaml: bool,
        /// Print counts and header fields instead of every lesson
        #[arg(long)]
        summary: bool,
    },

    /// Parse every scheme under a directory.
    ///
    /// Respects .gitignore and skips hidden files. Extensions, size limit
    /// and exclude patterns come from the [batch] config section.
    Batch {
        /// Directory to scan (default: current directory)
        #[arg(default_value = ".")]
        path: String,
        /// Collapse all whitespace before parsing
        #[arg(long)]
        legacy: bool,
    },

    /// List CBC learning areas by grade level
    Areas {
        /// Only this level (e.g. "Grade 7", "7", "PP1")
        #[arg(short, long)]
        grade: Option<String>,
    },

    /// Show or create .scheme/config.toml
    Config {
        #[command(subcommand)]
        action: ConfigAction,
    },
}

#[derive(Subcommand)]
pub enum ConfigAction {
    /// Print the effective settings
    Show,
    /// Write a config file with the default settings
    Init {
        /// Overwrite an existing config file
        #[arg(long)]
        force: bool,
    },
}
