#![allow(non_snake_case)]
use RustedSymDiff::Utils::config::DiffConfig;
use RustedSymDiff::Utils::logger::init_logger;
use RustedSymDiff::symbolic::symbolic_engine_derivatives::{
    differentiate_batch, differentiate_with_depth,
};
use argh::FromArgs;
use log::{LevelFilter, error, info};
use std::fs::File;
use std::io::{self, BufRead, BufReader, Write};
use std::process::ExitCode;

#[derive(FromArgs)]
/// Symbolic derivative with respect to x: reads formulas like `3*x^4 + y` and prints their derivative
struct Options {
    #[argh(option, short = 'c')]
    /// TOML config file (prompt, max_depth, log_level, log_file, console_log)
    config: Option<String>,

    #[argh(option, short = 'f')]
    /// differentiate every non-empty line of this file instead of reading the terminal
    file: Option<String>,

    #[argh(switch, short = 'v')]
    /// verbose output
    verbose: bool,
}

fn main() -> ExitCode {
    let options: Options = argh::from_env();
    let mut config = match &options.config {
        Some(path) => match DiffConfig::from_file(path) {
            Ok(config) => config,
            Err(e) => {
                eprintln!("error: {}", e);
                return ExitCode::FAILURE;
            }
        },
        None => DiffConfig::default(),
    };
    if options.verbose {
        config.log_level = LevelFilter::Debug;
    }
    let log_file = config.log_file.as_deref();
    if let Err(e) = init_logger(config.log_level, config.console_log, log_file) {
        eprintln!("warning: {}", e);
    }

    let outcome = match &options.file {
        Some(path) => File::open(path).and_then(|file| {
            info!("reading formulas from {}", path);
            run_batch(BufReader::new(file), &mut io::stdout().lock(), &config)
        }),
        None => run_interactive(io::stdin().lock(), &mut io::stdout(), &config),
    };
    match outcome {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            error!("{}", e);
            eprintln!("error: {}", e);
            ExitCode::FAILURE
        }
    }
}

/// ask, parse, derive, print - until the input ends
fn run_interactive<R: BufRead, W: Write>(
    input: R,
    output: &mut W,
    config: &DiffConfig,
) -> io::Result<()> {
    let mut lines = input.lines();
    loop {
        write!(output, "{}", config.prompt)?;
        output.flush()?;
        let Some(line) = lines.next() else {
            writeln!(output)?;
            info!("end of input");
            return Ok(());
        };
        let line = line?;
        match differentiate_with_depth(&line, config.max_depth) {
            Ok(derivative) => writeln!(output, "{}", derivative)?,
            Err(e) => writeln!(output, "error: {}", e)?,
        }
    }
}

/// one derivative (or error) per non-empty input line
fn run_batch<R: BufRead, W: Write>(
    input: R,
    output: &mut W,
    config: &DiffConfig,
) -> io::Result<()> {
    let lines = input.lines().collect::<io::Result<Vec<String>>>()?;
    let formulas: Vec<&str> = lines
        .iter()
        .map(|line| line.trim())
        .filter(|line| !line.is_empty())
        .collect();
    info!("read {} formulas", formulas.len());
    for result in differentiate_batch(&formulas, config.max_depth) {
        match result {
            Ok(derivative) => writeln!(output, "{}", derivative)?,
            Err(e) => writeln!(output, "error: {}", e)?,
        }
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Cursor;

    fn output_of<F>(run: F) -> String
    where
        F: FnOnce(&mut Vec<u8>) -> io::Result<()>,
    {
        let mut out = Vec::new();
        run(&mut out).unwrap();
        String::from_utf8(out).unwrap()
    }

    #[test]
    fn test_interactive_prints_error_and_continues() {
        let config = DiffConfig::default();
        let input = Cursor::new("x + y\nx/2\n3*x^4\n");
        let printed = output_of(|out| run_interactive(input, out, &config));
        assert_eq!(
            printed,
            "> 1\n> error: cannot parse 'x/2': no grammar alternative matches\n> 12 * x ^ 3\n> \n"
        );
    }

    #[test]
    fn test_interactive_uses_configured_prompt() {
        let config = DiffConfig {
            prompt: "d/dx> ".to_string(),
            ..DiffConfig::default()
        };
        let printed = output_of(|out| run_interactive(Cursor::new(""), out, &config));
        assert_eq!(printed, "d/dx> \n");
    }

    #[test]
    fn test_batch_skips_blank_lines() {
        let config = DiffConfig::default();
        let input = Cursor::new("x^3\n\n   \nx - 1\n  4*x + 3*y  \n");
        let printed = output_of(|out| run_batch(input, out, &config));
        assert_eq!(
            printed,
            "3 * x ^ 2\nerror: cannot parse 'x-1': no grammar alternative matches\n4\n"
        );
    }
}
