//! Command-line interface definitions.
//!
//! Without a subcommand the binary runs the interactive menu. The remaining
//! subcommands are scripted counterparts of the menu operations.

use clap::{Args, Parser, Subcommand};
use std::io::IsTerminal;
use std::path::PathBuf;

/// Menu-driven student record manager
#[derive(Parser, Debug)]
#[command(name = "rollbook")]
#[command(version, about)]
pub struct Cli {
    /// Path to configuration file [default: rollbook.toml if present]
    #[arg(short, long, global = true)]
    pub config: Option<PathBuf>,

    /// Database file to use (overrides config and ROLLBOOK_DATABASE)
    #[arg(long, global = true)]
    pub database: Option<String>,

    /// Color output mode [auto, always, never]
    #[arg(
        long,
        global = true,
        default_value = "auto",
        hide_possible_values = true
    )]
    pub color: ColorChoice,

    /// JSON output for scripting
    #[arg(long, global = true)]
    pub json: bool,

    /// Decrease output verbosity
    #[arg(short, long, global = true)]
    pub quiet: bool,

    /// Increase output verbosity
    #[arg(short, long, global = true, action = clap::ArgAction::Count)]
    pub verbose: u8,

    #[command(subcommand)]
    pub command: Option<Commands>,
}

/// Color output mode for terminal rendering.
#[derive(Clone, Copy, Debug, Default, clap::ValueEnum)]
pub enum ColorChoice {
    /// Detect automatically
    #[default]
    Auto,
    /// Always use colors
    Always,
    /// Never use colors
    Never,
}

impl ColorChoice {
    /// Resolve to a yes/no answer for stdout.
    #[must_use]
    pub fn enabled(self) -> bool {
        match self {
            ColorChoice::Auto => std::io::stdout().is_terminal(),
            ColorChoice::Always => true,
            ColorChoice::Never => false,
        }
    }
}

/// Top-level subcommands.
#[derive(Subcommand, Debug, Clone, PartialEq, Eq)]
pub enum Commands {
    /// Run the interactive menu (default)
    Menu,

    /// Create the student table if it does not exist
    Init,

    /// Add a student record
    Add(AddArgs),

    /// List all student records
    List,

    /// Change the marks of a student
    Edit(EditArgs),

    /// Delete a student record
    Delete(DeleteArgs),
}

/// Arguments for the `add` subcommand.
#[derive(Args, Debug, Clone, PartialEq, Eq)]
pub struct AddArgs {
    /// Roll number (must be unused)
    #[arg(allow_negative_numbers = true)]
    pub roll: i32,

    /// Student name, at most 50 characters
    pub name: String,

    /// Marks
    #[arg(allow_negative_numbers = true)]
    pub marks: i32,
}

/// Arguments for the `edit` subcommand.
#[derive(Args, Debug, Clone, PartialEq, Eq)]
pub struct EditArgs {
    /// Roll number of the record to change
    #[arg(allow_negative_numbers = true)]
    pub roll: i32,

    /// New marks
    #[arg(allow_negative_numbers = true)]
    pub marks: i32,
}

/// Arguments for the `delete` subcommand.
#[derive(Args, Debug, Clone, PartialEq, Eq)]
pub struct DeleteArgs {
    /// Roll number of the record to delete
    #[arg(allow_negative_numbers = true)]
    pub roll: i32,
}
