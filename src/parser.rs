use std::fmt;
use std::fmt::Formatter;
use chrono::{DateTime, LocalResult, NaiveDate, NaiveDateTime, NaiveTime, Offset, TimeDelta, TimeZone};
use chrono_tz::Tz;
use log::debug;
use thiserror::Error;
use crate::models::production_record::{HourlyProductionRecord, Production, Storage};

/// Time zone the daily renewables report is published in
pub const REPORT_TIME_ZONE: Tz = chrono_tz::US::Pacific;

/// Number of hourly data rows in each block of the report
pub const HOURS_PER_REPORT: usize = 24;

/// Line index of the first data row in the renewables block
const PRIMARY_BLOCK_START: usize = 2;

/// Line index of the first data row in the total production block
const SECONDARY_BLOCK_START: usize = 30;

/// Tab-split positions within a data row. Rows start with a tab, so position 0 is always empty.
mod column {
    pub const GEOTHERMAL: usize = 3;
    /// Biomass and unknown are both read from here. Looks like an upstream labeling quirk,
    /// left as is until checked against a published report.
    pub const BIOMASS: usize = 5;
    pub const UNKNOWN: usize = 5;
    pub const GAS: usize = 7;
    pub const HYDRO: usize = 9;
    pub const WIND: usize = 11;
    pub const SOLAR_PV: usize = 13;
    pub const SOLAR_THERMAL: usize = 15;

    pub const NUCLEAR: usize = 5;
    pub const SMALL_HYDRO: usize = 11;
}

/// The two row blocks of the report
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Block {
    Primary,
    Secondary,
}

impl Block {
    fn start(&self) -> usize {
        match self {
            Block::Primary => PRIMARY_BLOCK_START,
            Block::Secondary => SECONDARY_BLOCK_START,
        }
    }
}

/// Implementation of the Display Trait for pretty print
impl fmt::Display for Block {
    fn fmt(&self, f: &mut Formatter) -> fmt::Result {
        match self {
            Block::Primary => write!(f, "primary"),
            Block::Secondary => write!(f, "secondary"),
        }
    }
}

/// The report doesn't follow the known two block layout
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum MalformedReportError {
    #[error("report for {date}: {block} block has {found} of {} data rows", HOURS_PER_REPORT)]
    TooFewRows { date: NaiveDate, block: Block, found: usize },
    #[error("report for {date}: {block} block row {row} has no column {column}")]
    MissingField { date: NaiveDate, block: Block, row: usize, column: usize },
    #[error("report for {date}: {block} block row {row} column {column} is not an integer: '{value}'")]
    InvalidField { date: NaiveDate, block: Block, row: usize, column: usize, value: String },
    #[error("report for {date}: {block} block row {row} column {column} overflows its category total")]
    Overflow { date: NaiveDate, block: Block, row: usize, column: usize },
    #[error("report for {date}: hour {hour} is outside the day")]
    InvalidHour { date: NaiveDate, hour: usize },
}

/// Parses a daily renewables report into 24 hourly records, stamped in the report's own time zone
///
/// # Arguments
///
/// * 'raw_text' - the full report document
/// * 'target_date' - the local calendar date the report covers
/// * 'region_code' - region identifier put on every record
/// * 'source' - provenance label put on every record
pub fn parse(raw_text: &str, target_date: NaiveDate, region_code: &str, source: &str)
    -> Result<Vec<HourlyProductionRecord>, MalformedReportError> {
    parse_in_zone(raw_text, target_date, REPORT_TIME_ZONE, region_code, source)
}

/// Parses a daily renewables report into 24 hourly records.
///
/// The report carries two blocks of 24 tab separated rows at fixed line offsets. Every record
/// combines row `i` of both blocks, and any missing row or unparseable field fails the whole
/// report so that no partial day is ever returned.
///
/// # Arguments
///
/// * 'raw_text' - the full report document
/// * 'target_date' - the local calendar date the report covers
/// * 'time_zone' - time zone the hours of the report are given in
/// * 'region_code' - region identifier put on every record
/// * 'source' - provenance label put on every record
pub fn parse_in_zone(raw_text: &str, target_date: NaiveDate, time_zone: Tz, region_code: &str, source: &str)
    -> Result<Vec<HourlyProductionRecord>, MalformedReportError> {

    let lines = raw_text.lines().collect::<Vec<&str>>();
    let primary = block_rows(&lines, Block::Primary, target_date)?;
    let secondary = block_rows(&lines, Block::Secondary, target_date)?;

    let mut records: Vec<HourlyProductionRecord> = Vec::with_capacity(HOURS_PER_REPORT);

    for hour in 0..HOURS_PER_REPORT {
        let p = Row::new(primary[hour], Block::Primary, hour, target_date);
        let s = Row::new(secondary[hour], Block::Secondary, hour, target_date);

        let production = Production {
            biomass: Some(p.int(column::BIOMASS)?),
            coal: None,
            gas: Some(p.int(column::GAS)?),
            hydro: Some(p.int(column::HYDRO)?.checked_add(s.int(column::SMALL_HYDRO)?)
                .ok_or_else(|| s.overflow(column::SMALL_HYDRO))?),
            nuclear: Some(s.int(column::NUCLEAR)?),
            oil: None,
            solar: Some(p.int(column::SOLAR_PV)?.checked_add(p.int(column::SOLAR_THERMAL)?)
                .ok_or_else(|| p.overflow(column::SOLAR_THERMAL))?),
            wind: Some(p.int(column::WIND)?),
            geothermal: Some(p.int(column::GEOTHERMAL)?),
            unknown: Some(p.int(column::UNKNOWN)?),
        };

        records.push(HourlyProductionRecord {
            region_code: region_code.to_string(),
            timestamp: end_of_hour(target_date, hour as u32, time_zone)
                .ok_or(MalformedReportError::InvalidHour { date: target_date, hour })?,
            production,
            storage: Storage::default(),
            source: source.to_string(),
        });
    }

    debug!("parsed {} hourly records for {}", records.len(), target_date);

    Ok(records)
}

/// Returns the 24 data rows of a block
///
/// # Arguments
///
/// * 'lines' - all lines of the report
/// * 'block' - the block to get rows for
/// * 'date' - report date, for error context
fn block_rows<'l, 'a>(lines: &'l [&'a str], block: Block, date: NaiveDate)
    -> Result<&'l [&'a str], MalformedReportError> {
    let start = block.start();
    let found = lines.len().saturating_sub(start).min(HOURS_PER_REPORT);
    if found < HOURS_PER_REPORT {
        return Err(MalformedReportError::TooFewRows { date, block, found });
    }

    Ok(&lines[start..start + HOURS_PER_REPORT])
}

/// A single tab separated data row together with where it came from
struct Row<'a> {
    fields: Vec<&'a str>,
    block: Block,
    row: usize,
    date: NaiveDate,
}

impl<'a> Row<'a> {
    fn new(line: &'a str, block: Block, row: usize, date: NaiveDate) -> Row<'a> {
        Row { fields: line.split('\t').collect(), block, row, date }
    }

    /// Reads the given column as an integer
    ///
    /// # Arguments
    ///
    /// * 'column' - tab split position of the field
    fn int(&self, column: usize) -> Result<i64, MalformedReportError> {
        let value = self.fields.get(column)
            .ok_or_else(|| MalformedReportError::MissingField {
                date: self.date, block: self.block, row: self.row, column
            })?
            .trim();

        value.parse::<i64>().map_err(|_| MalformedReportError::InvalidField {
            date: self.date, block: self.block, row: self.row, column, value: value.to_string(),
        })
    }

    /// Returns the error for a column whose value can't be added to its category total
    ///
    /// # Arguments
    ///
    /// * 'column' - tab split position of the field being added
    fn overflow(&self, column: usize) -> MalformedReportError {
        MalformedReportError::Overflow { date: self.date, block: self.block, row: self.row, column }
    }
}

/// Returns the instant at `hour:59:00` local time on the given date, None if hour isn't 0-23.
///
/// On the fall back day the earlier of the two candidates is used. On the spring forward day
/// the skipped hour keeps its wall clock reading but carries the offset in force before the gap.
///
/// # Arguments
///
/// * 'date' - the local date
/// * 'hour' - hour of the day (0-23)
/// * 'time_zone' - the local time zone
fn end_of_hour(date: NaiveDate, hour: u32, time_zone: Tz) -> Option<DateTime<Tz>> {
    let naive = NaiveDateTime::new(date, NaiveTime::from_hms_opt(hour, 59, 0)?);

    let dt = match time_zone.from_local_datetime(&naive) {
        LocalResult::Single(dt) => dt,
        LocalResult::Ambiguous(earliest, _) => earliest,
        LocalResult::None => {
            let before = naive - TimeDelta::hours(1);
            let offset = time_zone.offset_from_local_datetime(&before).earliest()
                .unwrap_or_else(|| time_zone.offset_from_utc_datetime(&before));
            let utc = naive - TimeDelta::seconds(offset.fix().local_minus_utc() as i64);
            DateTime::from_naive_utc_and_offset(utc, offset)
        }
    };

    Some(dt)
}
