use clap::{Parser, Subcommand, Args};

const LONG_VERSION: &str = concat!(
    env!("CARGO_PKG_VERSION"),
    " (",
    env!("GIT_HASH"),
    ", built ",
    env!("BUILD_TIMESTAMP"),
    ")"
);

#[derive(Parser)]
#[command(
    name = "vexgen",
    version,
    long_version = LONG_VERSION,
    about = "Generate VEX documents from vulnerability scan results"
)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,

    /// Increase log verbosity (repeat for more)
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    pub verbose: u8,

    /// Only log warnings and errors
    #[arg(short, long, global = true)]
    pub quiet: bool,

    /// Disable colored output
    #[arg(long, global = true)]
    pub no_color: bool,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Print a VEX document for a scan result
    Generate(GenerateArgs),
    /// Validate a configuration file
    Validate(ValidateArgs),
}

#[derive(Args, Clone)]
pub struct GenerateArgs {
    /// Scanner JSON output (reads stdin when omitted or "-")
    pub input: Option<String>,

    /// The scan performed source-level call graph analysis
    #[arg(long)]
    pub source: bool,

    /// YAML configuration file
    #[arg(short, long)]
    pub config: Option<String>,

    /// Document author (overrides the config file)
    #[arg(long)]
    pub author: Option<String>,
}

#[derive(Args, Clone)]
pub struct ValidateArgs {
    /// Config file to validate
    pub config: String,
}
