use clap::Parser;
use tracing_subscriber::EnvFilter;
use vexgen::{cli, errors};

fn main() {
    let cli = cli::Cli::parse();

    let log_level = match (cli.quiet, cli.verbose) {
        (true, _) => "warn",
        (false, 0) => "info",
        (false, 1) => "debug",
        _ => "trace",
    };

    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(log_level));

    // stdout carries the document; logs go to stderr
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .with_ansi(!cli.no_color)
        .with_writer(std::io::stderr)
        .init();

    let result: Result<(), errors::VexError> = match cli.command {
        cli::Commands::Generate(args) => cli::generate::handle_generate(args),
        cli::Commands::Validate(args) => cli::validate::handle_validate(args),
    };

    if let Err(e) = result {
        eprintln!("Error: {}", e);
        std::process::exit(e.exit_code());
    }
}
