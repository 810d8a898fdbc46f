//! Interactive console front end.

pub mod input;
pub mod menu;
pub mod prompt;
pub mod session;

pub use menu::MenuChoice;
pub use prompt::{stdio_prompt, LinePrompt, PromptStyle};
pub use session::Session;
