use std::io;

use login_form_lib::ParseFieldError;
use thiserror::Error;

/// Errors that stop the console front-end.
#[derive(Debug, Error)]
pub enum CliError {
    #[error("unknown flag '{0}' (expected --debug, --trace or --raw)")]
    UnknownFlag(String),

    #[error("failed to set up logging: {0}")]
    Logger(#[from] log::SetLoggerError),

    #[error("I/O error: {0}")]
    Io(#[from] io::Error),

    #[error("failed to encode form state: {0}")]
    Json(#[from] serde_json::Error),
}

/// Errors from a single input line; reported and then ignored.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum CommandError {
    #[error("empty command")]
    Empty,

    #[error("unknown command '{0}', type 'help' for a list")]
    Unknown(String),

    #[error("'set' needs a field name")]
    MissingField,

    #[error(transparent)]
    Field(#[from] ParseFieldError),
}
