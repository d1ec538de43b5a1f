//! Command-line interface for man2rst
//! Converts a troff man page into restructured text and prints it to stdout.
//!
//! Usage:
//!   man2rst -i `<man_file>`                    - Convert and print to stdout
//!   man2rst -i `<man_file>` -o `<rst_file>`    - Accepted, but nothing is written
//!   man2rst -i `<man_file>` -c `<config>`      - Layer a TOML config over the defaults
//!
//! Exit codes: 0 on success or Ctrl-C, 1 when the input cannot be read, 2 on any
//! other error.

use clap::{value_parser, Arg, ArgAction, ArgMatches, Command};
use man2rst::man2rst::config::{ConvertConfig, Loader};
use man2rst::man2rst::loader::{DocumentLoader, LoaderError};
use std::fmt;
use std::io::{self, Write};
use std::path::Path;
use std::process::ExitCode;

const PROGRAM: &str = "man2rst";

/// Failures surfaced to the user, each mapped to an exit code
#[derive(Debug)]
enum CliError {
    /// No `-i` given
    MissingInput,
    Load(LoaderError),
    Config(config::ConfigError),
    Output(io::Error),
}

impl fmt::Display for CliError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            CliError::MissingInput => write!(f, "Cannot load input file: no input file given"),
            CliError::Load(err) => write!(f, "{}", err),
            CliError::Config(err) => write!(f, "Configuration error: {}", err),
            CliError::Output(err) => write!(f, "Cannot write output: {}", err),
        }
    }
}

impl From<LoaderError> for CliError {
    fn from(err: LoaderError) -> Self {
        CliError::Load(err)
    }
}

impl From<config::ConfigError> for CliError {
    fn from(err: config::ConfigError) -> Self {
        CliError::Config(err)
    }
}

impl From<io::Error> for CliError {
    fn from(err: io::Error) -> Self {
        CliError::Output(err)
    }
}

fn cli() -> Command {
    Command::new(PROGRAM)
        .version(env!("CARGO_PKG_VERSION"))
        .about("man2rst -- generate restructured text from man pages")
        .arg(
            Arg::new("input")
                .long("input")
                .short('i')
                .value_name("man_file")
                .help("Man input file to convert"),
        )
        .arg(
            Arg::new("output")
                .long("output")
                .short('o')
                .value_name("rst_file")
                .help("Path to output file. If no path is given, output is printed to stdout"),
        )
        .arg(
            Arg::new("config")
                .long("config")
                .short('c')
                .value_name("toml_file")
                .help("Configuration file layered over the built-in defaults"),
        )
        .arg(
            Arg::new("indent-width")
                .long("indent-width")
                .value_name("columns")
                .value_parser(value_parser!(usize))
                .help("Columns of indentation per .RS level"),
        )
        .arg(
            Arg::new("strict")
                .long("strict")
                .help("Fail when .RE closes more levels than .RS opened")
                .action(ArgAction::SetTrue),
        )
        .arg(
            Arg::new("verbose")
                .long("verbose")
                .short('v')
                .help("Print debug logging to stderr")
                .action(ArgAction::SetTrue),
        )
}

fn init_logging(verbose: bool) {
    let mut builder =
        env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("warn"));
    if verbose {
        builder.filter_level(log::LevelFilter::Debug);
    }
    builder.init();
}

/// Built-in defaults, then `--config`, then flag overrides
fn load_config(matches: &ArgMatches) -> Result<ConvertConfig, config::ConfigError> {
    let mut loader = Loader::new();
    if let Some(path) = matches.get_one::<String>("config") {
        loader = loader.with_file(path);
    }
    if let Some(width) = matches.get_one::<usize>("indent-width") {
        let width = i64::try_from(*width).unwrap_or(i64::MAX);
        loader = loader.set_override("convert.indent_width", width)?;
    }
    if matches.get_flag("strict") {
        loader = loader.set_override("convert.strict_nesting", true)?;
    }
    Ok(loader.build()?.convert)
}

fn run(matches: &ArgMatches) -> Result<(), CliError> {
    let config = load_config(matches)?;
    let input = matches
        .get_one::<String>("input")
        .ok_or(CliError::MissingInput)?;

    let rst = DocumentLoader::from_path(input)?.convert_with(&config)?;

    if let Some(output) = matches.get_one::<String>("output") {
        // Writing to a file is not supported; the flag is accepted for compatibility.
        log::warn!("output file '{}' ignored, nothing written", output);
        return Ok(());
    }

    let mut stdout = io::stdout().lock();
    writeln!(stdout, "{}", rst)?;
    stdout.flush()?;
    Ok(())
}

/// Base name this binary was invoked as
fn program_name() -> String {
    std::env::args()
        .next()
        .as_deref()
        .and_then(|arg0| Path::new(arg0).file_name())
        .and_then(|name| name.to_str())
        .map(str::to_string)
        .unwrap_or_else(|| PROGRAM.to_string())
}

fn main() -> ExitCode {
    let matches = cli().get_matches();
    init_logging(matches.get_flag("verbose"));

    // A user interrupt ends the run cleanly, whatever it was blocked on.
    if let Err(err) = ctrlc::set_handler(|| std::process::exit(0)) {
        log::warn!("cannot install interrupt handler: {}", err);
    }

    match run(&matches) {
        Ok(()) => ExitCode::SUCCESS,
        Err(err @ CliError::MissingInput) => {
            eprintln!("{}", err);
            ExitCode::from(1)
        }
        Err(err @ CliError::Load(LoaderError::Io { .. })) => {
            if let CliError::Load(LoaderError::Io { message, .. }) = &err {
                log::debug!("read failed: {}", message);
            }
            eprintln!("{}", err);
            ExitCode::from(1)
        }
        // The reader went away or we were interrupted mid-write: not an error.
        Err(CliError::Output(err))
            if matches!(
                err.kind(),
                io::ErrorKind::BrokenPipe | io::ErrorKind::Interrupted
            ) =>
        {
            ExitCode::SUCCESS
        }
        Err(err) => {
            let name = program_name();
            eprintln!("{}: {:?}", name, err);
            eprintln!("{}  for help use --help", " ".repeat(name.len()));
            ExitCode::from(2)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn cli_definition_is_valid() {
        cli().debug_assert();
    }

    #[test]
    fn flags_override_config() {
        let matches = cli().get_matches_from([PROGRAM, "--indent-width", "6", "--strict"]);
        let config = load_config(&matches).unwrap();
        assert_eq!(config.indent_width, 6);
        assert!(config.strict_nesting);
    }

    #[test]
    fn oversized_indent_width_is_rejected() {
        let matches = cli().get_matches_from([PROGRAM, "--indent-width", "100000"]);
        assert!(load_config(&matches).is_err());
    }

    #[test]
    fn missing_input_is_reported() {
        let matches = cli().get_matches_from([PROGRAM]);
        assert!(matches!(run(&matches), Err(CliError::MissingInput)));
    }
}
