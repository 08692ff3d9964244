use clap::{ArgAction, Parser};
use std::path::PathBuf;
use update_checker::application::dto::OutputFormat;

/// Check installed software against the vergrabber release catalog
#[derive(Parser, Debug)]
#[command(name = "update-checker")]
#[command(version)]
#[command(
    about = "Check installed software against the vergrabber release catalog",
    long_about = None
)]
pub struct Args {
    /// Inventory snapshot (JSON export of the Windows registry)
    #[arg(short, long, value_name = "FILE", default_value = "inventory.json")]
    pub inventory: PathBuf,

    /// Local vergrabber.json to use instead of downloading the catalog
    #[arg(long, value_name = "FILE", conflicts_with = "catalog_url")]
    pub catalog: Option<PathBuf>,

    /// URL of the vergrabber feed
    #[arg(long, value_name = "URL")]
    pub catalog_url: Option<String>,

    /// Where the downloaded catalog is cached
    #[arg(long, value_name = "FILE")]
    pub cache_file: Option<PathBuf>,

    /// Refresh the cached catalog once it is older than this many days
    #[arg(long, value_name = "DAYS")]
    pub max_age_days: Option<i64>,

    /// Output format: text, markdown or json
    #[arg(short, long)]
    pub format: Option<OutputFormat>,

    /// Output file path (if not specified, outputs to stdout)
    #[arg(short, long, value_name = "FILE")]
    pub output: Option<PathBuf>,

    /// Also list software the catalog has no information about
    #[arg(long)]
    pub show_unknown: bool,

    /// Skip software whose name starts with this prefix.
    /// Can be specified multiple times: --ignore "Microsoft Visual C++" --ignore "Intel"
    #[arg(long = "ignore", value_name = "PREFIX")]
    pub ignore: Vec<String>,

    /// Exit with code 1 when outdated software is found
    #[arg(long)]
    pub fail_on_outdated: bool,

    /// Disable coloured output
    #[arg(long)]
    pub no_color: bool,

    /// Path to a config file (defaults to update-checker.config.yml in the current directory)
    #[arg(short, long, value_name = "FILE")]
    pub config: Option<PathBuf>,

    /// Increase log verbosity (-v: info, -vv: debug)
    #[arg(short, long, action = ArgAction::Count)]
    pub verbose: u8,
}

impl Args {
    pub fn parse_args() -> Self {
        Self::parse()
    }
}
