//! Interactive operator prompts.
//!
//! Two [`Confirm`] implementations are provided: [`TerminalConfirm`] reads a
//! single keypress in raw mode when stdin is a terminal, and
//! [`LineConfirm`] reads whole lines when input is piped. Both reject on
//! anything that is not an explicit approval.

use std::io::{BufRead, Write};

use anyhow::{Context, Result, bail};
use colored::Colorize;
use crossterm::{
    event::{self, Event, KeyCode, KeyEvent, KeyEventKind},
    terminal,
};

use crate::core::{Confirm, ConfirmRequest};

const SEPARATOR: &str =
    "--------------------------------------------------------------------------------";

/// Print the question and read one line of answer, without its terminator.
pub fn ask_line<R: BufRead, W: Write>(input: &mut R, out: &mut W, question: &str) -> Result<String> {
    write!(out, "{} ", question.bold())?;
    out.flush()?;

    let mut line = String::new();
    let read = input
        .read_line(&mut line)
        .context("Failed to read from stdin")?;
    if read == 0 {
        bail!("No answer given to: {}", question);
    }
    Ok(line.trim_end_matches(['\r', '\n']).trim().to_string())
}

/// Show the candidate and its location before asking.
pub fn print_request<W: Write>(out: &mut W, request: &ConfirmRequest<'_>) -> Result<()> {
    writeln!(out, "{}", SEPARATOR.cyan())?;
    writeln!(
        out,
        "{} {} {}",
        "File:".cyan(),
        request.file_path,
        format!("[Line {}]", request.line).cyan()
    )?;
    writeln!(out, "{} {}", "Sentence:".magenta(), request.content)?;
    write!(
        out,
        "{} ({}/{} - default: {}) ",
        "Add this sentence to the catalog?".yellow(),
        "Y".green(),
        "n".red(),
        "yes".green()
    )?;
    out.flush()?;
    Ok(())
}

fn print_answer<W: Write>(out: &mut W, approved: bool) -> Result<()> {
    if approved {
        writeln!(out, "{}", "yes".green())?;
    } else {
        writeln!(out, "{}", "no".red())?;
    }
    Ok(())
}

/// Decide a keypress: `y` or Enter approves, everything else rejects.
///
/// Any modifier (Shift, Ctrl, Alt, Super, ...) rejects, even on `y`.
pub fn answer_for_key(key: &KeyEvent) -> bool {
    if !key.modifiers.is_empty() {
        return false;
    }
    matches!(key.code, KeyCode::Char('y') | KeyCode::Enter)
}

/// Decide a typed line: `y` or an empty line approves.
pub fn answer_for_line(line: &str) -> bool {
    matches!(line.trim_end_matches(['\r', '\n']), "y" | "")
}

/// Single-keypress confirmation on a real terminal.
pub struct TerminalConfirm<W: Write> {
    out: W,
}

impl<W: Write> TerminalConfirm<W> {
    pub fn new(out: W) -> Self {
        Self { out }
    }
}

impl<W: Write> Confirm for TerminalConfirm<W> {
    fn confirm(&mut self, request: &ConfirmRequest<'_>) -> Result<bool> {
        print_request(&mut self.out, request)?;
        let approved = read_key_answer()?;
        print_answer(&mut self.out, approved)?;
        Ok(approved)
    }
}

fn read_key_answer() -> Result<bool> {
    terminal::enable_raw_mode().context("Failed to enable raw terminal mode")?;
    let answer = wait_for_key();
    terminal::disable_raw_mode().context("Failed to restore terminal mode")?;
    answer
}

fn wait_for_key() -> Result<bool> {
    loop {
        match event::read().context("Failed to read keypress")? {
            Event::Key(key) if key.kind == KeyEventKind::Press => return Ok(answer_for_key(&key)),
            // Releases, repeats, resizes, focus changes and pastes are not answers.
            _ => continue,
        }
    }
}

/// Line-based confirmation for piped input.
///
/// End of input rejects every remaining candidate.
pub struct LineConfirm<R: BufRead, W: Write> {
    input: R,
    out: W,
}

impl<R: BufRead, W: Write> LineConfirm<R, W> {
    pub fn new(input: R, out: W) -> Self {
        Self { input, out }
    }
}

impl<R: BufRead, W: Write> Confirm for LineConfirm<R, W> {
    fn confirm(&mut self, request: &ConfirmRequest<'_>) -> Result<bool> {
        print_request(&mut self.out, request)?;

        let mut line = String::new();
        let read = self
            .input
            .read_line(&mut line)
            .context("Failed to read from stdin")?;
        let approved = read > 0 && answer_for_line(&line);

        print_answer(&mut self.out, approved)?;
        Ok(approved)
    }
}
