//! romsift CLI
//!
//! Builds the include/exclude lists of each requested category and, when a
//! destination is given, mirrors the included files there.

mod cli;
mod error;
mod interactive;

use std::path::PathBuf;

use clap::Parser;
use colored::Colorize;
use romsift_core::{CategoryReport, CreateDirPolicy, Curator, Options};
use tracing_subscriber::{EnvFilter, FmtSubscriber};

use cli::Cli;
use error::{CliError, Result};
use interactive::TerminalConfirmer;

fn main() {
    if let Err(e) = run() {
        eprintln!("{}: {}", "error".red().bold(), e);
        std::process::exit(1);
    }
}

fn run() -> Result<()> {
    let cli = Cli::parse();
    init_tracing(cli.verbose);

    let options = resolve_options(&cli)?;
    let base_dir = resolve_base_dir(&options)?;
    if options.destination_dir.is_none() {
        tracing::warn!("no destination dir specified, lists only, not syncing");
    }

    let policy = if options.initialize {
        CreateDirPolicy::Initialize
    } else {
        CreateDirPolicy::Ask(Box::new(TerminalConfirmer))
    };
    let mut curator = Curator::new(base_dir, options, policy);

    let categories = cli.categories();
    let mut failed = Vec::new();
    for category in &categories {
        println!("{} {}", "=>".blue().bold(), category.bold());
        match curator.process(category) {
            Ok(report) => print_report(&report),
            Err(e) if cli.keep_going => {
                eprintln!("{}: {}: {}", "error".red().bold(), category, e);
                failed.push(category.clone());
            }
            Err(e) => return Err(e.into()),
        }
    }

    if !failed.is_empty() {
        return Err(CliError::user(format!(
            "{} of {} categories failed: {}",
            failed.len(),
            categories.len(),
            failed.join(", ")
        )));
    }
    Ok(())
}

fn init_tracing(verbose: bool) {
    let filter = if verbose {
        EnvFilter::new("debug")
    } else {
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"))
    };
    let subscriber = FmtSubscriber::builder()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(verbose)
        .finish();
    tracing::subscriber::set_global_default(subscriber)
        .expect("Failed to set tracing subscriber");
    tracing::debug!("Verbose mode enabled");
}

/// Apply command-line flags on top of the optional config file.
fn resolve_options(cli: &Cli) -> Result<Options> {
    let file = match &cli.config {
        Some(path) => Options::load(path)?,
        None => Options::default(),
    };
    Ok(file.overlay(cli.options()))
}

fn resolve_base_dir(options: &Options) -> Result<PathBuf> {
    match &options.base_dir {
        Some(dir) => Ok(dir.clone()),
        None => {
            let cwd = std::env::current_dir()?;
            tracing::warn!(
                "no base dir specified, using current directory: {}",
                cwd.display()
            );
            Ok(cwd)
        }
    }
}

fn print_report(report: &CategoryReport) {
    if report.created_source {
        println!("   {} source directory", "created".green());
    }
    println!(
        "   {} {}  {} {}",
        "include:".dimmed(),
        report.lists.include.len(),
        "exclude:".dimmed(),
        report.lists.exclude.len()
    );
    if let Some(sync) = &report.sync {
        println!(
            "   {} {}  {} {}  {} {}",
            "copied:".dimmed(),
            sync.copied(),
            "verified:".dimmed(),
            sync.verified(),
            "deleted:".dimmed(),
            sync.deleted()
        );
    }
    println!("{} {}", "OK".green().bold(), report.category);
}
