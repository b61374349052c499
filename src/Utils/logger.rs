use log::{SetLoggerError, info};
use simplelog::*;
use std::fs::File;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum LoggerError {
    #[error("cannot create log file {path}: {source}")]
    LogFile {
        path: String,
        source: std::io::Error,
    },
    #[error("a global logger is already installed")]
    AlreadyInstalled(#[from] SetLoggerError),
}

/// Initialize the logger: terminal output and/or a log file, at the same level.
///
/// The console sink is still installed when the log file cannot be created, the error reports
/// the file. Nothing is installed when both sinks are disabled.
pub fn init_logger(
    level: LevelFilter,
    log_to_console: bool,
    log_to_file: Option<&str>,
) -> Result<(), LoggerError> {
    let mut loggers: Vec<Box<dyn SharedLogger>> = Vec::new();

    // Console logger
    if log_to_console {
        loggers.push(TermLogger::new(
            level,
            Config::default(),
            TerminalMode::Stderr,
            ColorChoice::Auto,
        ));
    }

    // File logger
    let mut file_failed = None;
    if let Some(filename) = log_to_file {
        match File::create(filename) {
            Ok(file) => loggers.push(WriteLogger::new(level, Config::default(), file)),
            Err(source) => {
                file_failed = Some(LoggerError::LogFile {
                    path: filename.to_string(),
                    source,
                })
            }
        }
    }

    if loggers.is_empty() {
        return file_failed.map_or(Ok(()), Err);
    }
    let installed = CombinedLogger::init(loggers);
    if let Some(e) = file_failed {
        return Err(e);
    }
    installed?;
    info!("logging at level {}", level);
    Ok(())
}
