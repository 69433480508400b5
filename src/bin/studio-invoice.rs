//! Command-line invoice renderer.
//!
//! ```text
//! studio-invoice render invoice.json -o invoice.html --config studio.toml
//! studio-invoice check invoice.json
//! ```
//!
//! ## Log Levels
//! - `RUST_LOG=debug` - Show render details
//! - `-v` - Same as `RUST_LOG=studio_invoice=debug`
//! - Default: warnings only, written to stderr

use std::fs;
use std::io::{self, Write};
use std::path::{Path, PathBuf};
use std::process::ExitCode;

use clap::{Parser, Subcommand};
use tracing::{info, warn};
use tracing_subscriber::EnvFilter;

use studio_invoice::cli::{CONFIG_ENV, OptionOverrides, collect_findings, resolve_options};
use studio_invoice::html::{generate_invoice_html_with, suggested_file_name};
use studio_invoice::json::{from_json, from_json_unchecked};

#[derive(Parser)]
#[command(name = "studio-invoice", version, about = "Render studio invoices as HTML")]
struct Cli {
    /// Enable debug logging
    #[arg(short, long, global = true)]
    verbose: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Render a JSON invoice record to HTML
    Render {
        /// JSON invoice record
        input: PathBuf,
        /// Output file; "-" writes to stdout. Defaults to invoice-<number>.html
        #[arg(short, long)]
        output: Option<PathBuf>,
        /// TOML file with render options and studio profile
        #[arg(short, long)]
        config: Option<PathBuf>,
        /// Currency symbol printed before amounts
        #[arg(long)]
        currency: Option<String>,
        /// Print record text without HTML escaping
        #[arg(long)]
        no_escape: bool,
    },
    /// Report validation and arithmetic findings for a JSON invoice record
    Check {
        /// JSON invoice record
        input: PathBuf,
    },
}

fn main() -> ExitCode {
    let cli = Cli::parse();
    init_tracing(cli.verbose);

    let result = match cli.command {
        Commands::Render {
            input,
            output,
            config,
            currency,
            no_escape,
        } => render(&input, output, config, currency, no_escape),
        Commands::Check { input } => check(&input),
    };

    match result {
        Ok(code) => code,
        Err(e) => {
            eprintln!("error: {e}");
            ExitCode::FAILURE
        }
    }
}

fn init_tracing(verbose: bool) {
    let filter = if verbose {
        EnvFilter::new("studio_invoice=debug")
    } else {
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"))
    };

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(io::stderr)
        .init();
}

fn render(
    input: &Path,
    output: Option<PathBuf>,
    config: Option<PathBuf>,
    currency: Option<String>,
    no_escape: bool,
) -> Result<ExitCode, Box<dyn std::error::Error>> {
    let overrides = OptionOverrides {
        currency,
        no_escape,
    };
    let options = resolve_options(config, std::env::var_os(CONFIG_ENV), &overrides)?;
    if !options.escape_html {
        warn!("HTML escaping disabled; record text is printed verbatim");
    }

    let source = fs::read_to_string(input)?;
    let record = from_json(&source)?;
    let html = generate_invoice_html_with(&record, &options)?;

    let target = output.unwrap_or_else(|| PathBuf::from(suggested_file_name(&record)));
    if target.as_os_str() == "-" {
        io::stdout().write_all(html.as_bytes())?;
    } else {
        fs::write(&target, &html)?;
        info!(path = %target.display(), "wrote invoice");
        eprintln!("{}", target.display());
    }
    Ok(ExitCode::SUCCESS)
}

fn check(input: &Path) -> Result<ExitCode, Box<dyn std::error::Error>> {
    let source = fs::read_to_string(input)?;
    let record = from_json_unchecked(&source)?;

    let findings = collect_findings(&record);

    if findings.is_empty() {
        println!("{}: ok", record.invoice_number);
        return Ok(ExitCode::SUCCESS);
    }
    for finding in &findings {
        println!("{finding}");
    }
    Ok(ExitCode::FAILURE)
}
