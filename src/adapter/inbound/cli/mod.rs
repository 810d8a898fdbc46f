//! CLI module graph.

pub mod command;
pub mod output;
pub mod records;
pub mod run;

pub use command::Cli;
