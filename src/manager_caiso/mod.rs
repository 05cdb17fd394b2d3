pub mod errors;

use std::time::Duration;
use chrono::NaiveDate;
use log::info;
use ureq::Agent;
use crate::config::ReportParameters;
use crate::manager_caiso::errors::FetchError;

/// Something that can deliver the raw text of a daily report
pub trait ReportFetcher {
    /// Returns the raw report covering the given local date
    ///
    /// # Arguments
    ///
    /// * 'date' - the local calendar date of the report
    fn fetch(&self, date: NaiveDate) -> Result<String, FetchError>;
}

/// Fetches CAISO's Daily Renewables Watch reports over http
pub struct Caiso {
    agent: Agent,
    base_url: String,
    file_suffix: String,
}

impl Caiso {
    /// Returns a new instance of the Caiso struct
    ///
    /// # Arguments
    ///
    /// * 'config' - report location and request timeout
    pub fn new(config: &ReportParameters) -> Self {
        let agent_config = Agent::config_builder()
            .timeout_global(Some(Duration::from_secs(config.timeout_secs)))
            .build();

        let agent = agent_config.into();

        Self {
            agent,
            base_url: config.base_url.trim_end_matches('/').to_string(),
            file_suffix: config.file_suffix.to_string(),
        }
    }

    /// Returns the url of the report for the given date, e.g. `<base>/20240115_DailyRenewablesWatch.txt`
    ///
    /// # Arguments
    ///
    /// * 'date' - the local calendar date of the report
    pub fn report_url(&self, date: NaiveDate) -> String {
        format!("{}/{}_{}", self.base_url, date.format("%Y%m%d"), self.file_suffix)
    }
}

impl ReportFetcher for Caiso {
    fn fetch(&self, date: NaiveDate) -> Result<String, FetchError> {
        let url = self.report_url(date);
        info!("fetching {}", url);

        let text = self.agent
            .get(&url)
            .call()?
            .body_mut()
            .read_to_string()?;

        if text.trim().is_empty() {
            return Err(FetchError(format!("empty report from {}", url)));
        }

        Ok(text)
    }
}
