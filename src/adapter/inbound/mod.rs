//! Inbound adapters: the command line and the interactive console.

pub mod cli;
pub mod console;
