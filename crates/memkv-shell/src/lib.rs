//! memkv shell — line-oriented front end for a [`memkv_core::Store`].
//!
//! Each input line is parsed into a [`Command`], applied by a [`Session`],
//! and its output lines are written back. Parse errors are reported inline
//! and never end the session; only I/O failures do.

pub mod command;
pub mod session;

pub use command::{Command, ParseError};
pub use session::{Outcome, Session};

use memkv_core::config::ShellConfig;
use std::io::{BufRead, Write};
use thiserror::Error;

#[derive(Debug, Error)]
pub enum ShellError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

/// Drive a session over `input` until end of input or `quit`.
///
/// The prompt is printed only when `interactive` is set. Returns the session
/// so callers can inspect the final store.
pub fn run<R, W>(
    config: &ShellConfig,
    mut input: R,
    mut output: W,
    interactive: bool,
) -> Result<Session, ShellError>
where
    R: BufRead,
    W: Write,
{
    let mut session = Session::new(config);
    let prompt = |output: &mut W| -> std::io::Result<()> {
        if interactive {
            write!(output, "{}", config.prompt)?;
            output.flush()?;
        }
        Ok(())
    };

    prompt(&mut output)?;
    let mut buf = Vec::new();
    loop {
        buf.clear();
        if input.read_until(b'\n', &mut buf)? == 0 {
            break;
        }
        // A line that is not UTF-8 is reported like a parse error.
        let (line, parsed) = match std::str::from_utf8(&buf) {
            Ok(text) => (text.to_string(), Command::parse(text)),
            Err(_) => (
                String::from_utf8_lossy(&buf).into_owned(),
                Err(ParseError::InvalidUtf8),
            ),
        };
        if config.echo_commands && parsed != Err(ParseError::Empty) {
            writeln!(output, "{}{}", config.prompt, line.trim())?;
        }

        match parsed {
            Ok(command) => match session.execute(command) {
                Outcome::Continue(lines) => {
                    for l in lines {
                        writeln!(output, "{l}")?;
                    }
                }
                Outcome::Quit => break,
            },
            Err(ParseError::Empty) => {}
            Err(err) => {
                tracing::debug!(error = %err, line = %line.trim_end(), "shell: parse error");
                writeln!(output, "error: {err}")?;
            }
        }
        prompt(&mut output)?;
    }

    output.flush()?;
    Ok(session)
}
