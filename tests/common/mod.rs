//! Shared report fixtures for integration tests.

#![allow(dead_code)]

use chrono::NaiveDate;

pub const REGION: &str = "US_CA";
pub const SOURCE: &str = "content.caiso.com";

/// Line index of the first data row of each block in a daily report.
pub const PRIMARY_START: usize = 2;
pub const SECONDARY_START: usize = 30;

pub fn report_date() -> NaiveDate {
    NaiveDate::from_ymd_opt(2024, 1, 15).unwrap()
}

/// A data row as published: a leading tab, then the fields separated by tabs.
///
/// `fields[0]` ends up at tab-split position 1.
pub fn data_row(fields: &[&str]) -> String {
    format!("\t{}", fields.join("\t"))
}

/// Primary block row with geothermal, biomass, gas, hydro, wind, solar pv and solar thermal.
pub fn primary_row(hour: usize, values: [i64; 7]) -> String {
    let [geo, bio, gas, hydro, wind, pv, thermal] = values.map(|v| v.to_string());
    let hour = (hour + 1).to_string();
    data_row(&[hour.as_str(), "", geo.as_str(), "", bio.as_str(), "", gas.as_str(), "",
        hydro.as_str(), "", wind.as_str(), "", pv.as_str(), "", thermal.as_str()])
}

/// Secondary block row with nuclear and small hydro, the other columns filled with filler values.
pub fn secondary_row(hour: usize, nuclear: i64, small_hydro: i64) -> String {
    let hour = (hour + 1).to_string();
    let nuclear = nuclear.to_string();
    let small_hydro = small_hydro.to_string();
    data_row(&[hour.as_str(), "", "4100", "", nuclear.as_str(), "", "12000", "", "6500", "",
        small_hydro.as_str()])
}

/// Builds a whole report from the rows of both blocks, padded with headers and blank lines.
pub fn build_report(primary: &[String], secondary: &[String]) -> String {
    let mut lines: Vec<String> = vec![
        "01/15/24\t\t\tHourly Breakdown of Renewable Resources (MW)".to_string(),
        "\tHour\t\tGEOTHERMAL\t\tBIOMASS\t\tBIOGAS\t\tSMALL HYDRO\t\tWIND TOTAL\t\tSOLAR PV\t\tSOLAR THERMAL".to_string(),
    ];
    lines.extend(primary.iter().cloned());
    while lines.len() < SECONDARY_START - 2 {
        lines.push(String::new());
    }
    lines.push("\t\t\tHourly Breakdown of Total Production by Resource Type (MW)".to_string());
    lines.push("\tHour\t\tRENEWABLES\t\tNUCLEAR\t\tTHERMAL\t\tIMPORTS\t\tHYDRO".to_string());
    lines.extend(secondary.iter().cloned());
    lines.join("\r\n")
}

/// A full report where every value depends on the hour, so rows can't be mixed up unnoticed.
pub fn hourly_report() -> String {
    let primary = (0..24)
        .map(|h| {
            let h = h as i64;
            primary_row(h as usize, [900 + h, 300 + h, 200 + h, 150 + h, 2000 + h, 10 * h, h])
        })
        .collect::<Vec<String>>();
    let secondary = (0..24)
        .map(|h| secondary_row(h, 2200 + h as i64, 1800 + h as i64))
        .collect::<Vec<String>>();

    build_report(&primary, &secondary)
}
