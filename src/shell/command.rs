//! Shell command parsing.

use crate::domain::ContactId;
use crate::error::{CommandError, CommandResult};
use crate::form::Field;
use std::str::FromStr;

/// One line of shell input.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Command {
    /// `name <text>`, `email <text>`, `phone <text>`; text may be empty
    Set(Field, String),
    /// `edit <id>`
    Edit(ContactId),
    /// `submit`
    Submit,
    /// `delete <id>`
    Delete(ContactId),
    /// `cancel`
    Cancel,
    /// `list`
    List,
    /// `form`
    Form,
    /// `stats`
    Stats,
    /// `help`
    Help,
    /// `quit` or `exit`
    Quit,
}

/// Usage lines shown by `help`.
pub const USAGE: &[&str] = &[
    "name <text>     set the name field",
    "email <text>    set the email field",
    "phone <text>    set the phone field (non-digits are dropped)",
    "edit <id>       load a contact into the form",
    "submit          create or update from the form",
    "delete <id>     delete a contact",
    "cancel          clear the form and leave edit mode",
    "list            show all contacts",
    "form            show the form",
    "stats           show counters",
    "help            show this help",
    "quit            exit",
];

impl Command {
    fn id_argument(command: &'static str, rest: Option<&str>) -> CommandResult<ContactId> {
        let rest = rest.ok_or(CommandError::MissingArgument {
            command,
            argument: "a contact id",
        })?;
        Ok(rest.parse::<ContactId>()?)
    }

    fn no_argument(
        command: &'static str,
        rest: Option<&str>,
        value: Command,
    ) -> CommandResult<Self> {
        match rest {
            None => Ok(value),
            Some(_) => Err(CommandError::UnexpectedArgument(command)),
        }
    }
}

impl FromStr for Command {
    type Err = CommandError;

    fn from_str(line: &str) -> Result<Self, Self::Err> {
        let line = line.trim_end_matches(['\r', '\n']);
        let trimmed = line.trim_start();
        if trimmed.trim().is_empty() {
            return Err(CommandError::Empty);
        }

        let (word, rest) = match trimmed.find(char::is_whitespace) {
            Some(at) => {
                let sep_len = trimmed[at..].chars().next().map_or(1, char::len_utf8);
                (&trimmed[..at], Some(&trimmed[at + sep_len..]))
            }
            None => (trimmed, None),
        };
        // Arguments of value-less commands may only be padding
        let arg = rest.filter(|r| !r.trim().is_empty());

        if let Some(field) = Field::from_name(word) {
            // Field text is taken verbatim after the single separating whitespace
            return Ok(Command::Set(field, rest.unwrap_or_default().to_string()));
        }

        match word {
            "edit" => Ok(Command::Edit(Self::id_argument("edit", arg)?)),
            "delete" => Ok(Command::Delete(Self::id_argument("delete", arg)?)),
            "submit" => Self::no_argument("submit", arg, Command::Submit),
            "cancel" => Self::no_argument("cancel", arg, Command::Cancel),
            "list" => Self::no_argument("list", arg, Command::List),
            "form" => Self::no_argument("form", arg, Command::Form),
            "stats" => Self::no_argument("stats", arg, Command::Stats),
            "help" => Self::no_argument("help", arg, Command::Help),
            "quit" | "exit" => Self::no_argument("quit", arg, Command::Quit),
            other => Err(CommandError::Unknown(other.to_string())),
        }
    }
}
