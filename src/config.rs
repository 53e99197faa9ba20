//! Runtime configuration: command line plus logging from the environment.
//!
//! `.env` is loaded by the binary before anything here runs, so both
//! variables can be set per directory.

use crate::cli::Cli;
use crate::input::Input;
use crate::output::OutputMode;
use clap::Parser;
use log::LevelFilter;
use log4rs::append::console::{ConsoleAppender, Target};
use log4rs::config::{Appender, Config as LogConfig, Root};
use log4rs::encode::pattern::PatternEncoder;
use std::env;
use std::error::Error;
use std::ffi::OsString;
use std::path::Path;
use std::str::FromStr;

/// Path of a log4rs YAML file, used when it exists.
pub const LOG_CONFIG_VAR: &str = "CIDR_LOG_CONFIG";
/// Level for the built-in stderr logger when there is no log4rs file.
pub const LOG_LEVEL_VAR: &str = "CIDR_LOG_LEVEL";

const DEFAULT_LOG_CONFIG: &str = "log4rs.yml";
const LOG_PATTERN: &str = "{d(%H:%M:%S)} {h({l})} {t} - {m}{n}";

/// Everything a run needs.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Config {
    pub mode: OutputMode,
    /// Sources in read order, never empty.
    pub inputs: Vec<Input>,
}

impl Config {
    /// Parse command-line arguments, program name first.
    pub fn from_args<I, T>(args: I) -> Result<Config, clap::Error>
    where
        I: IntoIterator<Item = T>,
        T: Into<OsString> + Clone,
    {
        Ok(Config::from(Cli::try_parse_from(args)?))
    }
}

impl From<Cli> for Config {
    fn from(cli: Cli) -> Config {
        let mode = cli.mode();
        let inputs = if cli.files.is_empty() {
            vec![Input::Stdin]
        } else {
            cli.files.into_iter().map(Input::File).collect()
        };
        Config { mode, inputs }
    }
}

/// Set up log4rs. Logs only ever go to stderr, stdout carries results.
pub fn init_logging() -> Result<(), Box<dyn Error>> {
    let file = env::var(LOG_CONFIG_VAR).unwrap_or_else(|_| DEFAULT_LOG_CONFIG.to_string());
    if Path::new(&file).exists() {
        log4rs::init_file(&file, Default::default())?;
        log::debug!("logging configured from {file}");
        return Ok(());
    }

    let level_var = env::var(LOG_LEVEL_VAR).ok();
    let level = log_level(level_var.as_deref());
    let stderr = ConsoleAppender::builder()
        .target(Target::Stderr)
        .encoder(Box::new(PatternEncoder::new(LOG_PATTERN)))
        .build();
    let config = LogConfig::builder()
        .appender(Appender::builder().build("stderr", Box::new(stderr)))
        .build(Root::builder().appender("stderr").build(level))?;
    log4rs::init_config(config)?;

    if let Some(value) = level_var.filter(|v| LevelFilter::from_str(v).is_err()) {
        log::warn!("ignoring unknown {LOG_LEVEL_VAR}={value:?}, using {level}");
    }
    Ok(())
}

fn log_level(value: Option<&str>) -> LevelFilter {
    value
        .and_then(|v| LevelFilter::from_str(v).ok())
        .unwrap_or(LevelFilter::Warn)
}
