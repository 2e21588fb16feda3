//! Line commands understood by the console.

use login_form_lib::Field;

use crate::error::CommandError;

pub const HELP: &str = "\
Commands:
  username <text>      set the username
  email <text>         set the email address
  password <text>      set the password
  confirm <text>       set the password confirmation
  set <field> <text>   set any field by name
  status               show validity, prompts and whether login is enabled
  json                 show the same as JSON
  submit               log in (only when every field is valid)
  reset                clear the form
  help                 show this list
  quit                 exit";

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Command {
    Set(Field, String),
    Status,
    Json,
    Submit,
    Reset,
    Help,
    Quit,
}

impl Command {
    /// Parse one input line. Text after the command word (and the single
    /// separating space or tab) is kept as typed, so values may contain
    /// spaces or be empty.
    pub fn parse(line: &str) -> Result<Self, CommandError> {
        let line = line.trim_end_matches(['\r', '\n']);
        let line = line.trim_start();
        if line.trim().is_empty() {
            return Err(CommandError::Empty);
        }

        let (word, rest) = split_word(line);
        match word.to_ascii_lowercase().as_str() {
            "set" => {
                let (name, value) = split_word(rest);
                if name.is_empty() {
                    return Err(CommandError::MissingField);
                }
                Ok(Self::Set(name.parse()?, value.to_string()))
            }
            "status" => Ok(Self::Status),
            "json" => Ok(Self::Json),
            "submit" | "login" => Ok(Self::Submit),
            "reset" | "clear" => Ok(Self::Reset),
            "help" | "?" => Ok(Self::Help),
            "quit" | "exit" => Ok(Self::Quit),
            other => match other.parse::<Field>() {
                Ok(field) => Ok(Self::Set(field, rest.to_string())),
                Err(_) => Err(CommandError::Unknown(word.to_string())),
            },
        }
    }
}

/// Split at the first ASCII whitespace: the word before it and everything
/// after it.
fn split_word(s: &str) -> (&str, &str) {
    s.split_once(|c: char| c.is_ascii_whitespace())
        .unwrap_or((s, ""))
}
