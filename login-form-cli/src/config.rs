//! Console configuration from command-line flags.

use log::LevelFilter;
use login_form_lib::InputFilter;

use crate::error::CliError;

/// How the console front-end runs.
#[derive(Debug, Clone)]
pub struct ConsoleConfig {
    /// Level written to the log file.
    pub log_level: LevelFilter,

    /// Filters applied to typed text before it reaches the form.
    pub input_filter: InputFilter,
}

impl Default for ConsoleConfig {
    fn default() -> Self {
        Self {
            log_level: LevelFilter::Info,
            input_filter: InputFilter::default(),
        }
    }
}

impl ConsoleConfig {
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the log level.
    pub fn log_level(mut self, level: LevelFilter) -> Self {
        self.log_level = level;
        self
    }

    /// Pass typed text to the form without filtering.
    pub fn raw_input(mut self) -> Self {
        self.input_filter = InputFilter::none();
        self
    }

    /// Build a config from command-line arguments (without the program name).
    pub fn from_args<I, S>(args: I) -> Result<Self, CliError>
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let mut config = Self::new();
        for arg in args {
            config = match arg.as_ref() {
                "--debug" => config.log_level(LevelFilter::Debug),
                "--trace" => config.log_level(LevelFilter::Trace),
                "--raw" => config.raw_input(),
                other => return Err(CliError::UnknownFlag(other.to_string())),
            };
        }
        Ok(config)
    }
}
