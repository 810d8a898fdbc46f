//! Line-oriented input port used by the console session.

use crate::error::Result;

/// Source of operator answers.
pub trait Prompt {
    /// Show `prompt` and read one answer.
    ///
    /// Returns `Ok(None)` once input is exhausted. The returned line has its
    /// trailing newline removed.
    fn ask(&mut self, prompt: &str) -> Result<Option<String>>;
}

impl<P: Prompt + ?Sized> Prompt for &mut P {
    fn ask(&mut self, prompt: &str) -> Result<Option<String>> {
        (**self).ask(prompt)
    }
}

impl<P: Prompt + ?Sized> Prompt for Box<P> {
    fn ask(&mut self, prompt: &str) -> Result<Option<String>> {
        (**self).ask(prompt)
    }
}
