//! The interactive assistant-bot session.
//!
//! Reads commands line by line, applies them to an in-memory
//! [`AddressBook`], and writes one reply per command. Failures never end
//! the session; they are reported as short fixed sentences and the next
//! command is read.

pub mod command;
pub mod handlers;

pub use command::Command;

use crate::book::AddressBook;
use crate::config::Config;
use crate::error::CommandError;
use std::io::{self, BufRead, Write};

/// The user-facing sentence for a failed command.
///
/// Replies are deliberately coarse: every validation failure maps to one
/// sentence, every failed lookup to another, every missing argument to a
/// third. The precise cause is still logged.
fn error_reply(error: &CommandError) -> &'static str {
    match error {
        CommandError::Validation(_) => "Give me name and phone number please.",
        CommandError::ContactNotFound(_) | CommandError::PhoneNotFound(_) => "Contact not exist.",
        CommandError::MissingArguments { .. } => "Enter the argument for the command.",
    }
}

/// Run the interactive session over the given input and output streams.
///
/// Greets the user, then loops: prompt, read, parse, execute, reply.
/// Blank lines re-prompt without a reply. The session ends on `exit`,
/// `close`, or end of input, each answered with a goodbye.
///
/// # Errors
///
/// Returns an error only when reading the input or writing the output
/// fails.
pub fn run(config: &Config, mut input: impl BufRead, mut output: impl Write) -> io::Result<()> {
    let mut book = AddressBook::new();

    writeln!(output, "Welcome to the assistant bot!")?;
    loop {
        write!(output, "Enter a command: ")?;
        output.flush()?;

        let mut line = String::new();
        if input.read_line(&mut line)? == 0 {
            // End of input behaves like `exit`
            writeln!(output, "{}", handlers::GOODBYE)?;
            break;
        }

        let command = match command::parse(&line) {
            Ok(Some(command)) => command,
            Ok(None) => continue,
            Err(error) => {
                tracing::debug!("Rejected input {:?}: {}", line.trim_end(), error);
                writeln!(output, "{}", error_reply(&error))?;
                continue;
            }
        };

        let exiting = matches!(command, Command::Exit);
        match handlers::execute(&mut book, command, config.birthday_window_days) {
            Ok(reply) => writeln!(output, "{}", reply)?,
            Err(error) => {
                tracing::debug!("Command failed: {}", error);
                writeln!(output, "{}", error_reply(&error))?;
            }
        }

        if exiting {
            break;
        }
    }

    Ok(())
}
