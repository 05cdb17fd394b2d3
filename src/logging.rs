use log4rs::append::console::ConsoleAppender;
use log4rs::append::file::FileAppender;
use log4rs::config::{Appender, Config as LogConfig, Root};
use log4rs::encode::pattern::PatternEncoder;
use crate::config::General;
use crate::errors::LoggingError;

const LOG_PATTERN: &str = "{d(%Y-%m-%d %H:%M:%S)} {h({l}):<5} {t} - {m}{n}";

/// Builds the log4rs configuration given the general settings.
///
/// Logs to stdout when neither a log file nor stdout is configured.
///
/// # Arguments
///
/// * 'general' - log path, level and whether to log to stdout
pub fn log_config(general: &General) -> Result<LogConfig, LoggingError> {
    let mut builder = LogConfig::builder();
    let mut root = Root::builder();

    if let Some(log_path) = &general.log_path {
        let file = FileAppender::builder()
            .encoder(Box::new(PatternEncoder::new(LOG_PATTERN)))
            .build(log_path)?;
        builder = builder.appender(Appender::builder().build("file", Box::new(file)));
        root = root.appender("file");
    }

    if general.log_to_stdout || general.log_path.is_none() {
        let stdout = ConsoleAppender::builder()
            .encoder(Box::new(PatternEncoder::new(LOG_PATTERN)))
            .build();
        builder = builder.appender(Appender::builder().build("stdout", Box::new(stdout)));
        root = root.appender("stdout");
    }

    Ok(builder.build(root.build(general.log_level))?)
}

/// Installs the global logger
///
/// # Arguments
///
/// * 'general' - log path, level and whether to log to stdout
pub fn setup_logger(general: &General) -> Result<(), LoggingError> {
    let config = log_config(general)?;
    log4rs::init_config(config)?;

    Ok(())
}
