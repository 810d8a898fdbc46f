use clap::Parser;
use rollbook::adapter::inbound::cli::output::{self, OutputConfig};
use rollbook::adapter::inbound::cli::run::execute;
use rollbook::adapter::inbound::cli::Cli;
use tracing::error;

fn main() {
    let _ = dotenvy::dotenv();

    let cli = Cli::parse();
    output::configure(OutputConfig::new(cli.json, cli.quiet, cli.color.enabled()));

    if let Err(e) = execute(cli) {
        error!(error = %e, "Fatal error");
        output::error(&e.to_string());
        std::process::exit(1);
    }
}
