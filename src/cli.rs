use std::path::PathBuf;

use clap::Parser;

#[derive(Parser, Debug)]
#[command(
    name = "ort-license-report",
    about = "Aggregate ORT results and check licenses against the approval policy",
    version
)]
pub struct Cli {
    /// Directory that ORT results folders are resolved against
    #[arg(default_value = ".")]
    pub root: PathBuf,

    /// Policy config file [default: <ROOT>/.ort-license-report/config.toml, fallback ~/.config/ort-license-report/config.toml]
    #[arg(long)]
    pub config: Option<PathBuf>,

    /// Directory for the final/skipped/unapproved package lists [default: ROOT]
    #[arg(long, value_name = "DIR")]
    pub output_dir: Option<PathBuf>,

    /// Exit with code 1 when any license is not approved
    #[arg(long)]
    pub strict: bool,

    /// Also list approved packages and log progress
    #[arg(short, long)]
    pub verbose: bool,

    /// Only print totals, found licenses and unapproved packages
    #[arg(short, long, conflicts_with = "verbose")]
    pub quiet: bool,
}
