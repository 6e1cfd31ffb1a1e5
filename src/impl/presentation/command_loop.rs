use std::io::{BufRead, Write};

use fractic_server_error::ServerError;
use tracing::debug;

use crate::{errors::TerminalIoFailed, util::BalanceReportUtil};

const COMMAND_PROMPT: &str = "Enter command (money, activations, quit): ";
const EMAIL_PROMPT: &str = "Enter user email: ";

#[derive(Debug, PartialEq, Eq)]
pub(crate) enum Command {
    Money,
    Activations,
    Quit,
    Empty,
    Unknown(String),
}

impl Command {
    pub(crate) fn parse(line: &str) -> Self {
        match line.trim() {
            "money" => Command::Money,
            "activations" => Command::Activations,
            "quit" | "exit" => Command::Quit,
            "" => Command::Empty,
            other => Command::Unknown(other.to_string()),
        }
    }
}

/// Interactive prompt over the report facade.
///
/// Ends successfully on `quit`, `exit` or end of input. Report failures are
/// returned to the caller; unknown commands and unknown users are reported on
/// `output` and the loop continues.
pub(crate) struct CommandLoop<'a, R, W> {
    util: &'a BalanceReportUtil,
    input: R,
    output: W,
}

impl<'a, R: BufRead, W: Write> CommandLoop<'a, R, W> {
    pub(crate) fn new(util: &'a BalanceReportUtil, input: R, output: W) -> Self {
        Self {
            util,
            input,
            output,
        }
    }

    pub(crate) async fn run(mut self) -> Result<(), ServerError> {
        while let Some(line) = self.prompt(COMMAND_PROMPT)? {
            let command = Command::parse(&line);
            debug!(?command, "received command");
            match command {
                Command::Money => {
                    let (_, report) = self.util.money_report().await?;
                    self.write(&report)?;
                }
                Command::Activations => {
                    let Some(email) = self.prompt(EMAIL_PROMPT)? else {
                        break;
                    };
                    match self.util.find_user(&email).await? {
                        Some(user) => self.write(&format!("{}\n", user.record_line()))?,
                        None => self.write(&format!("No user found with email '{}'.\n", email))?,
                    }
                }
                Command::Quit => break,
                Command::Empty => {}
                Command::Unknown(other) => {
                    self.write(&format!("Unknown command: {}\n", other))?;
                }
            }
        }
        Ok(())
    }

    /// Returns `None` at end of input.
    fn prompt(&mut self, prompt: &str) -> Result<Option<String>, ServerError> {
        self.write(prompt)?;
        let mut line = String::new();
        let read = self
            .input
            .read_line(&mut line)
            .map_err(|e| TerminalIoFailed::with_debug(&e))?;
        if read == 0 {
            self.write("\n")?;
            return Ok(None);
        }
        Ok(Some(line.trim().to_string()))
    }

    fn write(&mut self, s: &str) -> Result<(), ServerError> {
        self.output
            .write_all(s.as_bytes())
            .and_then(|_| self.output.flush())
            .map_err(|e| TerminalIoFailed::with_debug(&e))
    }
}
