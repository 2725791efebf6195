//! Interactive prompt loop over a [`NoteStore`].
//!
//! The loop reads one command per line, asks for whatever that command needs,
//! and reports the outcome. Missing ids and failed writes are reported and the
//! loop keeps going; only terminal I/O errors end it early.

use std::io::{BufRead, Write};

use super::handlers::{display_time, parse_id, summary_line};
use crate::error::{NoteError, Result};
use crate::storage::{Clock, NoteStore};

const COMMAND_PROMPT: &str = "Enter a command (add, list, view, update, delete, exit): ";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ShellCommand {
    Add,
    List,
    View,
    Update,
    Delete,
    Help,
    Exit,
}

impl std::str::FromStr for ShellCommand {
    type Err = String;

    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "add" | "a" => Ok(ShellCommand::Add),
            "list" | "ls" | "l" => Ok(ShellCommand::List),
            "view" | "show" | "get" | "v" => Ok(ShellCommand::View),
            "update" | "edit" | "u" => Ok(ShellCommand::Update),
            "delete" | "rm" | "d" => Ok(ShellCommand::Delete),
            "help" | "?" => Ok(ShellCommand::Help),
            "exit" | "quit" | "q" => Ok(ShellCommand::Exit),
            _ => Err(format!("Unknown command '{}', try again.", s.trim())),
        }
    }
}

enum Flow {
    Continue,
    Exit,
}

enum IdInput {
    Id(u64),
    /// Already reported to the user.
    Invalid,
    Eof,
}

/// Run the shell until `exit` or end of input.
pub fn run_shell<C, R, W>(store: &mut NoteStore<C>, input: R, output: W) -> Result<()>
where
    C: Clock,
    R: BufRead,
    W: Write,
{
    Session {
        store,
        input,
        output,
    }
    .run()
}

struct Session<'a, C: Clock, R, W> {
    store: &'a mut NoteStore<C>,
    input: R,
    output: W,
}

impl<C: Clock, R: BufRead, W: Write> Session<'_, C, R, W> {
    fn run(&mut self) -> Result<()> {
        writeln!(self.output, "Welcome to NoteOne!")?;

        loop {
            let Some(line) = self.prompt(COMMAND_PROMPT)? else {
                break;
            };
            if line.trim().is_empty() {
                continue;
            }

            let command = match line.parse::<ShellCommand>() {
                Ok(command) => command,
                Err(message) => {
                    writeln!(self.output, "{}", message)?;
                    continue;
                }
            };

            match self.dispatch(command) {
                Ok(Flow::Continue) => {}
                Ok(Flow::Exit) => break,
                Err(e @ NoteError::Persist { .. }) => writeln!(self.output, "Error: {}", e)?,
                Err(e) => return Err(e),
            }
        }

        writeln!(self.output, "Goodbye!")?;
        self.output.flush()?;
        Ok(())
    }

    fn dispatch(&mut self, command: ShellCommand) -> Result<Flow> {
        match command {
            ShellCommand::Add => self.add(),
            ShellCommand::List => self.list(),
            ShellCommand::View => self.view(),
            ShellCommand::Update => self.update(),
            ShellCommand::Delete => self.delete(),
            ShellCommand::Help => {
                writeln!(
                    self.output,
                    "Commands: add, list, view, update, delete, help, exit"
                )?;
                Ok(Flow::Continue)
            }
            ShellCommand::Exit => Ok(Flow::Exit),
        }
    }

    fn add(&mut self) -> Result<Flow> {
        let Some(title) = self.prompt("Title: ")? else {
            return Ok(Flow::Exit);
        };
        let Some(body) = self.prompt("Body: ")? else {
            return Ok(Flow::Exit);
        };

        let id = self.store.add(title, body)?;
        writeln!(self.output, "Note {} added.", id)?;
        Ok(Flow::Continue)
    }

    fn list(&mut self) -> Result<Flow> {
        let notes = self.store.list();
        if notes.is_empty() {
            writeln!(self.output, "No notes found.")?;
        }
        for note in notes {
            writeln!(self.output, "{}", summary_line(note))?;
        }
        Ok(Flow::Continue)
    }

    fn view(&mut self) -> Result<Flow> {
        let id = match self.prompt_id()? {
            IdInput::Id(id) => id,
            IdInput::Invalid => return Ok(Flow::Continue),
            IdInput::Eof => return Ok(Flow::Exit),
        };

        match self.store.get_by_id(id) {
            Some(note) => {
                writeln!(self.output, "{}", note.title)?;
                writeln!(self.output, "{}", note.body)?;
                writeln!(self.output, "{}", display_time(&note.updated_at))?;
            }
            None => self.not_found(id)?,
        }
        Ok(Flow::Continue)
    }

    fn update(&mut self) -> Result<Flow> {
        let id = match self.prompt_id()? {
            IdInput::Id(id) => id,
            IdInput::Invalid => return Ok(Flow::Continue),
            IdInput::Eof => return Ok(Flow::Exit),
        };
        let Some(title) = self.prompt("Title: ")? else {
            return Ok(Flow::Exit);
        };
        let Some(body) = self.prompt("Body: ")? else {
            return Ok(Flow::Exit);
        };

        if self.store.update(id, title, body)? {
            writeln!(self.output, "Note {} updated.", id)?;
        } else {
            self.not_found(id)?;
        }
        Ok(Flow::Continue)
    }

    fn delete(&mut self) -> Result<Flow> {
        let id = match self.prompt_id()? {
            IdInput::Id(id) => id,
            IdInput::Invalid => return Ok(Flow::Continue),
            IdInput::Eof => return Ok(Flow::Exit),
        };

        if self.store.delete(id)? {
            writeln!(self.output, "Note {} deleted.", id)?;
        } else {
            self.not_found(id)?;
        }
        Ok(Flow::Continue)
    }

    fn not_found(&mut self, id: u64) -> Result<()> {
        writeln!(self.output, "Note with id {} not found.", id)?;
        Ok(())
    }

    fn prompt_id(&mut self) -> Result<IdInput> {
        let Some(raw) = self.prompt("Note id: ")? else {
            return Ok(IdInput::Eof);
        };
        match parse_id(&raw) {
            Ok(id) => Ok(IdInput::Id(id)),
            Err(e) => {
                writeln!(self.output, "{}", e)?;
                Ok(IdInput::Invalid)
            }
        }
    }

    /// Returns `None` once input is exhausted.
    fn prompt(&mut self, label: &str) -> Result<Option<String>> {
        write!(self.output, "{}", label)?;
        self.output.flush()?;

        let mut line = String::new();
        if self.input.read_line(&mut line)? == 0 {
            writeln!(self.output)?;
            return Ok(None);
        }
        Ok(Some(line.trim_end_matches(&['\n', '\r'][..]).to_string()))
    }
}
