//! Entry point wiring: configuration, logging, database, dispatch.

use std::path::Path;

use tracing::info;

use crate::adapter::inbound::cli::command::{Cli, Commands};
use crate::adapter::inbound::cli::{output, records};
use crate::adapter::inbound::console::{stdio_prompt, Session};
use crate::error::{ConfigError, Result};
use crate::infrastructure::bootstrap::open_record_manager;
use crate::infrastructure::config::settings::{Config, DEFAULT_CONFIG_FILE};

/// Load configuration for the parsed command line.
///
/// An explicit `--config` file must exist; the default file is optional.
///
/// # Errors
/// Returns an error if the configuration cannot be read or is invalid.
pub fn resolve_config(cli: &Cli) -> Result<Config> {
    let mut config = match &cli.config {
        Some(path) => Config::load(path)?,
        None => Config::load_or_default(Path::new(DEFAULT_CONFIG_FILE))?,
    }
    .with_database_override(cli.database.clone())?;

    config.logging = config.logging.with_verbosity(cli.verbose, cli.quiet);
    Ok(config)
}

/// Run the parsed command line to completion.
///
/// The database connection opened here is dropped before this returns,
/// whether the command succeeds or fails.
///
/// # Errors
/// Returns the first configuration, database, or I/O error. `--json` is a
/// configuration error for the interactive menu.
pub fn execute(cli: Cli) -> Result<()> {
    let config = resolve_config(&cli)?;
    config.init_logging();
    info!(database = %config.database.path, "rollbook starting");

    let command = cli.command.unwrap_or(Commands::Menu);
    if matches!(command, Commands::Menu) && output::is_json() {
        return Err(ConfigError::InvalidValue {
            field: "--json",
            reason: "the interactive menu has no JSON output; use list, add, edit or delete"
                .to_string(),
        }
        .into());
    }

    let mut manager = open_record_manager(&config)?;

    match command {
        Commands::Menu => {
            output::header(env!("CARGO_PKG_VERSION"));
            Session::new(&mut manager, stdio_prompt()).run()
        }
        Commands::Init => records::init(&manager),
        Commands::Add(args) => records::add(&mut manager, args),
        Commands::List => records::list(&mut manager),
        Commands::Edit(args) => records::edit(&mut manager, &args),
        Commands::Delete(args) => records::delete(&mut manager, &args),
    }
}
