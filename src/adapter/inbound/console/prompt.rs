//! [`Prompt`] implementations over line-oriented streams.
//!
//! Input is always read a line at a time in the terminal's cooked mode, so
//! Ctrl-D at an empty prompt is end of input and Ctrl-C interrupts as usual.

use std::io::{self, BufRead, IsTerminal, Write};

use dialoguer::console;
use dialoguer::theme::{ColorfulTheme, Theme};

use crate::adapter::inbound::cli::output;
use crate::error::Result;
use crate::port::Prompt;

/// How the question text is drawn before each answer is read.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PromptStyle {
    /// Nothing is written; answers are still read.
    Silent,
    /// `Question: `
    Plain,
    /// dialoguer's colorful theme, for an attended terminal.
    Themed,
}

impl PromptStyle {
    /// Pick a style for the given output mode and standard streams.
    ///
    /// The themed style needs both ends on a terminal: the question is drawn
    /// on stdout and answered on stdin.
    #[must_use]
    pub const fn select(quiet: bool, stdin_tty: bool, stdout_tty: bool) -> Self {
        if quiet {
            Self::Silent
        } else if stdin_tty && stdout_tty {
            Self::Themed
        } else {
            Self::Plain
        }
    }
}

/// Prompt over any reader/writer pair.
pub struct LinePrompt<R, W> {
    reader: R,
    writer: W,
    style: PromptStyle,
    theme: ColorfulTheme,
}

impl<R: BufRead, W: Write> LinePrompt<R, W> {
    pub fn new(reader: R, writer: W) -> Self {
        Self::with_style(reader, writer, PromptStyle::Plain)
    }

    pub fn with_style(reader: R, writer: W, style: PromptStyle) -> Self {
        Self {
            reader,
            writer,
            style,
            theme: ColorfulTheme::default(),
        }
    }

    fn render(&self, prompt: &str) -> String {
        match self.style {
            PromptStyle::Silent => String::new(),
            PromptStyle::Plain => format!("{prompt}: "),
            PromptStyle::Themed => {
                let mut text = String::new();
                if self.theme.format_input_prompt(&mut text, prompt, None).is_err() {
                    return format!("{prompt}: ");
                }
                text
            }
        }
    }
}

impl<R: BufRead, W: Write> Prompt for LinePrompt<R, W> {
    fn ask(&mut self, prompt: &str) -> Result<Option<String>> {
        let question = self.render(prompt);
        if !question.is_empty() {
            write!(self.writer, "{question}")?;
            self.writer.flush()?;
        }

        let mut line = String::new();
        if self.reader.read_line(&mut line)? == 0 {
            if !question.is_empty() {
                writeln!(self.writer)?;
            }
            return Ok(None);
        }
        Ok(Some(line.trim_end_matches(&['\r', '\n'][..]).to_string()))
    }
}

/// Prompt bound to the process's stdin/stdout.
pub fn stdio_prompt() -> Box<dyn Prompt> {
    let style = PromptStyle::select(
        output::is_quiet(),
        io::stdin().is_terminal(),
        io::stdout().is_terminal(),
    );
    if style == PromptStyle::Themed {
        console::set_colors_enabled(output::colors_enabled());
    }
    Box::new(LinePrompt::with_style(io::stdin().lock(), io::stdout(), style))
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Cursor;

    #[test]
    fn line_prompt_reads_lines_and_echoes_prompt() {
        let mut out = Vec::new();
        let mut prompt = LinePrompt::new(Cursor::new("12\r\nAlice\n"), &mut out);

        assert_eq!(prompt.ask("Enter Roll No").unwrap(), Some("12".to_string()));
        assert_eq!(prompt.ask("Enter Name").unwrap(), Some("Alice".to_string()));
        assert_eq!(prompt.ask("Enter Marks").unwrap(), None);
        drop(prompt);

        let shown = String::from_utf8(out).unwrap();
        assert!(shown.contains("Enter Roll No: "));
        assert!(shown.contains("Enter Name: "));
    }

    #[test]
    fn line_prompt_keeps_blank_answers() {
        let mut prompt = LinePrompt::new(Cursor::new("\n"), Vec::new());
        assert_eq!(prompt.ask("Enter Name").unwrap(), Some(String::new()));
    }

    #[test]
    fn themed_only_when_both_streams_are_terminals() {
        assert_eq!(PromptStyle::select(false, true, true), PromptStyle::Themed);
        assert_eq!(PromptStyle::select(false, true, false), PromptStyle::Plain);
        assert_eq!(PromptStyle::select(false, false, true), PromptStyle::Plain);
        assert_eq!(PromptStyle::select(false, false, false), PromptStyle::Plain);
    }

    #[test]
    fn quiet_silences_prompts_on_any_stream() {
        assert_eq!(PromptStyle::select(true, true, true), PromptStyle::Silent);
        assert_eq!(PromptStyle::select(true, false, false), PromptStyle::Silent);
    }

    #[test]
    fn silent_prompt_writes_nothing_but_still_reads() {
        let mut out = Vec::new();
        let mut prompt =
            LinePrompt::with_style(Cursor::new("5\n"), &mut out, PromptStyle::Silent);

        assert_eq!(prompt.ask("Enter your choice").unwrap(), Some("5".to_string()));
        assert_eq!(prompt.ask("Enter your choice").unwrap(), None);
        drop(prompt);

        assert!(out.is_empty());
    }

    #[test]
    fn themed_prompt_ends_on_end_of_input() {
        let mut out = Vec::new();
        let mut prompt = LinePrompt::with_style(Cursor::new(""), &mut out, PromptStyle::Themed);

        assert_eq!(prompt.ask("Enter your choice").unwrap(), None);
        drop(prompt);

        let shown = String::from_utf8(out).unwrap();
        assert!(shown.contains("Enter your choice"));
        assert!(shown.ends_with('\n'));
    }
}
