mod cli;
mod commands;
mod table;

use clap::Parser;

fn main() {
    let cli = cli::Cli::parse();

    if !cli.quiet {
        tracing_subscriber::fmt()
            .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
            .compact()
            .init();
    }

    if let Err(message) = commands::run(&cli) {
        eprintln!("{message}");
        std::process::exit(1);
    }
}
