use std::path::PathBuf;
use std::process::ExitCode;

use anyhow::Context;
use clap::{Parser, Subcommand};
use tracing::info;

use pip_dev::config::{self, Config};
use pip_dev::render::render;
use pip_dev::{TableFormat, evaluate, is_member_of, logging};

#[derive(Parser)]
#[command(name = "pip-dev")]
#[command(version, about = "Explore which versions a PEP 440 specifier accepts")]
struct Cli {
    /// Config file (defaults to $XDG_CONFIG_HOME/pip-dev/config.json)
    #[arg(long, global = true)]
    config: Option<PathBuf>,

    /// Write logs to the data directory instead of stderr
    #[arg(long, global = true)]
    log_file: bool,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    /// Check whether a version satisfies a specifier expression
    Check {
        /// Version to test, e.g. 1.2.1
        version: String,
        /// Specifier expression, e.g. "~=1.2,!=1.2.3"
        specifiers: String,
    },
    /// Show which versions around a specifier expression it accepts
    Table {
        /// Specifier expression, e.g. "~=1.2b,<=1.3a,!=1.2.0"
        specifiers: String,
        #[arg(long, value_enum)]
        format: Option<TableFormat>,
        /// Hide rejected versions
        #[arg(long)]
        only_valid: bool,
    },
}

/// Exit status of `check` when the version is rejected
const EXIT_NOT_MEMBER: u8 = 1;
/// Exit status for bad input, config or I/O errors
const EXIT_ERROR: u8 = 2;

fn main() -> ExitCode {
    ExitCode::from(exit_status(run(Cli::parse())))
}

fn run(cli: Cli) -> anyhow::Result<u8> {
    let config_path = cli.config.unwrap_or_else(config::config_path);
    let config = Config::load(&config_path)
        .with_context(|| format!("Failed to load config from {}", config_path.display()))?;
    let log_file = (cli.log_file || config.log.file).then(config::log_path);
    let _guard = logging::init(&config.log, log_file.as_deref())?;

    match cli.command {
        Command::Check {
            version,
            specifiers,
        } => check(&version, &specifiers),
        Command::Table {
            specifiers,
            format,
            only_valid,
        } => {
            let mut table = evaluate(&specifiers)?;
            if only_valid || config.only_valid {
                table.retain_valid();
            }
            if table.is_empty() {
                info!("No candidate versions for '{}'", specifiers);
            }
            print!("{}", render(&table, format.unwrap_or(config.format))?);
            Ok(0)
        }
    }
}

fn check(version: &str, specifiers: &str) -> anyhow::Result<u8> {
    let is_member = is_member_of(version, specifiers)?;
    println!("{is_member}");
    Ok(if is_member { 0 } else { EXIT_NOT_MEMBER })
}

fn exit_status(result: anyhow::Result<u8>) -> u8 {
    result.unwrap_or_else(|e| {
        eprintln!("Error: {e:#}");
        EXIT_ERROR
    })
}
