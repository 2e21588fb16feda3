//! The console view: reads commands, drives the form, prints its state.

use std::io::{BufRead, Write};

use login_form_lib::{Field, FormValidationModel, InputFilter};

use crate::command::{Command, HELP};
use crate::error::CliError;

pub struct Console {
    form: FormValidationModel,
    filter: InputFilter,
}

impl Console {
    pub fn new(filter: InputFilter) -> Self {
        Self {
            form: FormValidationModel::new(),
            filter,
        }
    }

    pub fn form(&self) -> &FormValidationModel {
        &self.form
    }

    /// Process lines until `quit` or end of input.
    pub fn run<R: BufRead, W: Write>(&mut self, input: R, out: &mut W) -> Result<(), CliError> {
        writeln!(out, "Login form. Type 'help' for commands.")?;
        for line in input.lines() {
            let line = line?;
            match Command::parse(&line) {
                Ok(Command::Quit) => break,
                Ok(command) => self.execute(command, out)?,
                Err(e) => {
                    log::debug!("rejected input line: {}", e);
                    writeln!(out, "error: {}", e)?;
                }
            }
        }
        log::info!("console closed");
        Ok(())
    }

    fn execute<W: Write>(&mut self, command: Command, out: &mut W) -> Result<(), CliError> {
        match command {
            Command::Set(field, raw) => {
                let value = self.filter.apply(field, &raw);
                self.form.set(field, value);
                self.print_field(field, out)?;
                writeln!(out, "login {}", self.login_state())?;
            }
            Command::Status => self.print_status(out)?,
            Command::Json => {
                let json = serde_json::to_string_pretty(&self.form.snapshot())?;
                writeln!(out, "{}", json)?;
            }
            Command::Submit => {
                if self.form.can_submit() {
                    let submission = self.form.submit();
                    writeln!(out, "Logging in {}.", submission.username)?;
                } else {
                    let first = self.form.validate().first_invalid();
                    match first {
                        Some(field) => writeln!(out, "login disabled: check {}", field)?,
                        None => writeln!(out, "login disabled")?,
                    }
                }
            }
            Command::Reset => {
                self.form.reset();
                writeln!(out, "form cleared")?;
            }
            Command::Help => writeln!(out, "{}", HELP)?,
            Command::Quit => {}
        }
        Ok(())
    }

    fn print_field<W: Write>(&self, field: Field, out: &mut W) -> Result<(), CliError> {
        let mark = if self.form.is_valid(field) { "ok" } else { "invalid" };
        let prompt = self.form.prompt(field);
        if prompt.is_empty() {
            writeln!(out, "{:<16} {}", field.name(), mark)?;
        } else {
            writeln!(out, "{:<16} {} - {}", field.name(), mark, prompt)?;
        }
        Ok(())
    }

    fn print_status<W: Write>(&self, out: &mut W) -> Result<(), CliError> {
        for field in Field::ALL {
            self.print_field(field, out)?;
        }
        writeln!(out, "login {}", self.login_state())?;
        Ok(())
    }

    fn login_state(&self) -> &'static str {
        if self.form.can_submit() { "enabled" } else { "disabled" }
    }
}
