use std::io;
use std::process::ExitCode;

use clap::Parser;

use csvdoc::cli::CliArgs;
use csvdoc::commands;
use csvdoc::config::CsvdocConfig;

fn main() -> ExitCode {
    csvdoc::tracing::init();

    let args = CliArgs::parse();
    let settings = match args.into_config() {
        Ok(settings) => settings,
        Err(e) => {
            eprintln!("Error: {}", e);
            return ExitCode::from(2);
        }
    };

    let config = CsvdocConfig::load();
    if let Some(log_file) = csvdoc::config_paths::log_file() {
        tracing::debug!("Logging to {}", log_file.display());
    }

    let stdout = io::stdout();
    let mut out = stdout.lock();
    match commands::run(&settings, &config, &mut out) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            tracing::error!("{:#}", e);
            eprintln!("Error: {:#}", e);
            ExitCode::FAILURE
        }
    }
}
