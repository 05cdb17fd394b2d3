use chrono::{DateTime, Days, NaiveDate, Utc};
use chrono_tz::Tz;
use crate::errors::ReportDateError;

/// Returns the date of the latest complete report, i.e. yesterday in the region's local calendar
///
/// # Arguments
///
/// * 'now' - the current instant
/// * 'time_zone' - the region's local time zone
pub fn report_date(now: DateTime<Utc>, time_zone: Tz) -> Result<NaiveDate, ReportDateError> {
    report_date_back(now, time_zone, 1)
}

/// Returns the local calendar date that lies the given number of days before now
///
/// # Arguments
///
/// * 'now' - the current instant
/// * 'time_zone' - the region's local time zone
/// * 'days_back' - number of days to step back from the local date of now
pub fn report_date_back(now: DateTime<Utc>, time_zone: Tz, days_back: u64) -> Result<NaiveDate, ReportDateError> {
    let local_date = now.with_timezone(&time_zone).date_naive();

    local_date
        .checked_sub_days(Days::new(days_back))
        .ok_or_else(|| ReportDateError(format!("{} days before {} is out of range", days_back, local_date)))
}

/// Parses a report date given as `YYYY-MM-DD`
///
/// # Arguments
///
/// * 'date' - the date text, surrounding whitespace is ignored
pub fn parse_report_date(date: &str) -> Result<NaiveDate, ReportDateError> {
    NaiveDate::parse_from_str(date.trim(), "%Y-%m-%d")
        .map_err(|e| ReportDateError(format!("invalid report date '{}': {}", date, e)))
}
