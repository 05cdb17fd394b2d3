use std::fs;
use chrono_tz::Tz;
use log::LevelFilter;
use serde::Deserialize;
use crate::errors::ConfigError;
use crate::parser::REPORT_TIME_ZONE;

/// The grid region the report covers and how its records are labeled
#[derive(Deserialize, Debug, Clone)]
#[serde(default)]
pub struct Region {
    pub code: String,
    pub source: String,
    pub time_zone: Tz,
}

impl Default for Region {
    fn default() -> Self {
        Region {
            code: "US_CA".to_string(),
            source: "content.caiso.com".to_string(),
            time_zone: REPORT_TIME_ZONE,
        }
    }
}

/// Where to find the daily report and how long to wait for it
#[derive(Deserialize, Debug, Clone)]
#[serde(default)]
pub struct ReportParameters {
    pub base_url: String,
    pub file_suffix: String,
    pub timeout_secs: u64,
    pub days_back: u64,
}

impl Default for ReportParameters {
    fn default() -> Self {
        ReportParameters {
            base_url: "http://content.caiso.com/green/renewrpt".to_string(),
            file_suffix: "DailyRenewablesWatch.txt".to_string(),
            timeout_secs: 30,
            days_back: 1,
        }
    }
}

#[derive(Deserialize, Debug, Clone)]
#[serde(default)]
pub struct General {
    pub log_path: Option<String>,
    pub log_level: LevelFilter,
    pub log_to_stdout: bool,
}

impl Default for General {
    fn default() -> Self {
        General { log_path: None, log_level: LevelFilter::Info, log_to_stdout: true }
    }
}

#[derive(Deserialize, Debug, Clone, Default)]
#[serde(default)]
pub struct Config {
    pub region: Region,
    pub report: ReportParameters,
    pub general: General,
}

/// Loads the configuration file and returns a struct with all configuration items
///
/// # Arguments
///
/// * 'config_path' - path to the configuration file
pub fn load_config(config_path: &str) -> Result<Config, ConfigError> {
    let toml = fs::read_to_string(config_path)?;

    parse_config(&toml)
}

/// Parses a toml configuration document, any missing item gets its default value
///
/// # Arguments
///
/// * 'toml' - the configuration document
pub fn parse_config(toml: &str) -> Result<Config, ConfigError> {
    let config: Config = toml::from_str(toml)?;

    if config.report.base_url.is_empty() {
        return Err(ConfigError::from("report base_url must not be empty"));
    }
    if config.report.timeout_secs == 0 {
        return Err(ConfigError::from("report timeout_secs must be greater than zero"));
    }

    Ok(config)
}
