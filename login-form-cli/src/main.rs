mod command;
mod config;
mod console;
mod error;
mod paths;

use std::fs::{self, File};
use std::io;

use simplelog::{Config, WriteLogger};

use config::ConsoleConfig;
use console::Console;
use error::CliError;

fn init_logging(config: &ConsoleConfig) -> Result<(), CliError> {
    let Some(path) = paths::log_file() else {
        return Ok(());
    };
    if let Some(dir) = path.parent() {
        fs::create_dir_all(dir)?;
    }
    paths::rotate_logs();

    let log_file = File::create(&path)?;
    WriteLogger::init(config.log_level, Config::default(), log_file)?;
    log::info!("logging to {}", path.display());
    Ok(())
}

fn run() -> Result<(), CliError> {
    let config = ConsoleConfig::from_args(std::env::args().skip(1))?;
    init_logging(&config)?;

    let mut console = Console::new(config.input_filter);
    let stdin = io::stdin();
    let mut stdout = io::stdout();
    console.run(stdin.lock(), &mut stdout)?;
    log::debug!("final form state: {:?}", console.form().snapshot());
    Ok(())
}

fn main() {
    if let Err(e) = run() {
        eprintln!("Error: {}", e);
        std::process::exit(1);
    }
}
