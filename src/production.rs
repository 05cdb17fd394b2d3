use chrono::NaiveDate;
use log::{error, info};
use crate::config::Region;
use crate::errors::ProductionError;
use crate::manager_caiso::ReportFetcher;
use crate::models::production_record::HourlyProductionRecord;
use crate::parser::parse_in_zone;

/// Fetches the daily report for the given date and returns its 24 hourly production records.
///
/// Nothing is returned for the day unless both fetching and parsing succeed.
///
/// # Arguments
///
/// * 'fetcher' - delivers the raw report text
/// * 'date' - the local calendar date of the report
/// * 'region' - region code, source label and time zone for the records
pub fn fetch_production<F: ReportFetcher>(fetcher: &F, date: NaiveDate, region: &Region)
    -> Result<Vec<HourlyProductionRecord>, ProductionError> {

    let raw = fetcher.fetch(date).inspect_err(|e| error!("{}: {}", date, e))?;

    let records = parse_in_zone(&raw, date, region.time_zone, &region.code, &region.source)
        .inspect_err(|e| error!("{}", e))?;

    info!("{} hourly records for {} in {}", records.len(), date, region.code);

    Ok(records)
}
