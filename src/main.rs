//! `ort-license-report` — aggregate ORT results per ecosystem and check license approval.
//!
//! # Flow
//! 1. Parse CLI arguments ([`cli`]).
//! 2. Load the policy and ecosystem list ([`config::load_config`]).
//! 3. For each ecosystem: load results ([`ort`]), extract licenses and classify
//!    them ([`license`]), driven by [`pipeline::run`].
//! 4. Write the final / skipped / unapproved lists and print the summary ([`report`]).
//! 5. Exit `0`, or `1` with `--strict` when unapproved licenses remain.

mod cli;
mod config;
mod error;
mod license;
mod models;
mod ort;
mod pipeline;
mod report;

use anyhow::{Context, Result};
use clap::Parser;
use tracing_subscriber::EnvFilter;

use cli::Cli;
use config::load_config;

fn main() -> Result<()> {
    let cli = Cli::parse();
    init_tracing(cli.verbose);

    let root = cli.root.canonicalize().unwrap_or_else(|_| cli.root.clone());
    let output_dir = cli.output_dir.clone().unwrap_or_else(|| root.clone());

    let config = load_config(&root, cli.config.as_deref())?;

    let agg = pipeline::run(&config, &root, cli.quiet)
        .context("license aggregation aborted")?;

    let paths = report::files::write_all(&output_dir, &agg)?;
    report::terminal::render(&agg, &paths, cli.verbose, cli.quiet)?;

    if cli.strict && agg.has_unapproved() {
        std::process::exit(1);
    }

    Ok(())
}

/// Log to stderr; `RUST_LOG` wins over `--verbose`.
fn init_tracing(verbose: bool) {
    let default = if verbose { "info" } else { "warn" };
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .init();
}
