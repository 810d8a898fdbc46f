//! Inbound ports: how operators drive the application.

pub mod prompt;

pub use prompt::Prompt;
