// Inherit lint configuration from lib.rs for consistency
#![allow(
    clippy::missing_errors_doc,
    clippy::missing_panics_doc,
    clippy::fn_params_excessive_bools,
    clippy::unnecessary_wraps,
    clippy::needless_pass_by_value
)]

use std::path::Path;

use clap::Parser;
use tracing_subscriber::EnvFilter;

use cbc_scheme::cli::commands::{Cli, Command, ConfigAction};
use cbc_scheme::cli::output;
use cbc_scheme::config::{Config, OutputFormat, UserSettings};
use cbc_scheme::ingest::scheme::{SchemeParser, WhitespaceMode};
use cbc_scheme::operations;

fn main() {
    let cli = Cli::parse();
    init_tracing(cli.verbose);

    if let Err(e) = run(cli) {
        eprintln!("{}", output::format_error(&e));
        std::process::exit(1);
    }
}

/// Logs go to stderr so stdout stays parseable.
fn init_tracing(verbose: bool) {
    let default = if verbose { "debug" } else { "warn" };
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_ansi(false)
        .init();
}

fn run(cli: Cli) -> Result<(), Box<dyn std::fmt::Display>> {
    match cli.command {
        Command::Parse {
            path,
            legacy,
            pretty,
            yaml,
            summary,
        } => cmd_parse(&path, legacy, pretty, yaml, summary),
        Command::Batch { path, legacy } => cmd_batch(&path, legacy),
        Command::Areas { grade } => cmd_areas(grade.as_deref()),
        Command::Config { action } => match action {
            ConfigAction::Show => cmd_config_show(),
            ConfigAction::Init { force } => cmd_config_init(force),
        },
    }
}

type CmdResult = Result<(), Box<dyn std::fmt::Display>>;

fn map_err(e: impl std::fmt::Display + 'static) -> Box<dyn std::fmt::Display> {
    Box::new(e.to_string())
}

fn get_config() -> Result<Config, Box<dyn std::fmt::Display>> {
    Config::from_cwd().map_err(map_err)
}

/// `--legacy` wins over the configured mode.
fn build_parser(config: &Config, legacy: bool) -> SchemeParser {
    let mode = if legacy {
        WhitespaceMode::Legacy
    } else {
        config.settings.parsing.whitespace
    };
    SchemeParser::with_mode(mode)
}

fn output_format(config: &Config, pretty: bool, yaml: bool) -> OutputFormat {
    if yaml {
        OutputFormat::Yaml
    } else if pretty {
        OutputFormat::Pretty
    } else {
        config.settings.output.format
    }
}

fn cmd_parse(path: &str, legacy: bool, pretty: bool, yaml: bool, summary: bool) -> CmdResult {
    let config = get_config()?;
    let parser = build_parser(&config, legacy);
    let format = output_format(&config, pretty, yaml);

    let path = Path::new(path);
    let rendered = if summary {
        let summary = operations::summarize_file(&parser, path).map_err(map_err)?;
        output::render(&summary, format)
    } else {
        let result = operations::parse_file(&parser, path).map_err(map_err)?;
        output::render(&result, format)
    };
    println!("{rendered}");
    Ok(())
}

fn cmd_batch(path: &str, legacy: bool) -> CmdResult {
    let config = get_config()?;
    let parser = build_parser(&config, legacy);
    let root = if path == "." {
        config.root.clone()
    } else {
        Path::new(path).to_path_buf()
    };

    let report =
        operations::run_batch(&parser, &root, &config.settings.batch).map_err(map_err)?;
    println!(
        "{}",
        output::render(&report, config.settings.output.format)
    );
    Ok(())
}

fn cmd_areas(grade: Option<&str>) -> CmdResult {
    let config = get_config()?;
    let result = operations::list_areas(grade).map_err(map_err)?;
    println!(
        "{}",
        output::render(&result, config.settings.output.format)
    );
    Ok(())
}

fn cmd_config_show() -> CmdResult {
    let config = get_config()?;
    println!(
        "{}",
        output::render(&config.settings, config.settings.output.format)
    );
    Ok(())
}

fn cmd_config_init(force: bool) -> CmdResult {
    let config = get_config()?;
    if config.config_path.exists() && !force {
        return Err(map_err(format!(
            "config already exists: {} (use --force to overwrite)",
            config.relative_path(&config.config_path)
        )));
    }

    let fresh = Config {
        settings: UserSettings::default(),
        ..config
    };
    fresh.save_settings().map_err(map_err)?;
    println!(
        "{}",
        output::format_json(&serde_json::json!({
            "created": fresh.relative_path(&fresh.config_path),
        }))
    );
    Ok(())
}
