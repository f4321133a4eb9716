//! log4rs setup.
//!
//! One console appender on stderr; stdout carries only generated output.

use crate::error::{Error, Result};
use log::LevelFilter;
use log4rs::append::console::{ConsoleAppender, Target};
use log4rs::config::{Appender, Config, Root};
use log4rs::encode::pattern::PatternEncoder;

const STDERR_APPENDER: &str = "stderr";
const PATTERN: &str = "{h({l})} {M} - {m}{n}";

/// Root level for the `--verbose` flag.
pub fn level(verbose: bool) -> LevelFilter {
    if verbose {
        LevelFilter::Debug
    } else {
        LevelFilter::Info
    }
}

/// Build the log4rs config for the given verbosity.
pub fn build_config(verbose: bool) -> Result<Config> {
    let stderr = ConsoleAppender::builder()
        .target(Target::Stderr)
        .encoder(Box::new(PatternEncoder::new(PATTERN)))
        .build();

    Config::builder()
        .appender(Appender::builder().build(STDERR_APPENDER, Box::new(stderr)))
        .build(Root::builder().appender(STDERR_APPENDER).build(level(verbose)))
        .map_err(|e| Error::Logging(e.to_string()))
}

/// Install the global logger. Call once, first thing in `main`.
pub fn logging_setup(verbose: bool) -> Result<()> {
    log4rs::init_config(build_config(verbose)?).map_err(|e| Error::Logging(e.to_string()))?;
    Ok(())
}
