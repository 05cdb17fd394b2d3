use std::env;
use std::path::Path;
use anyhow::{Context, Result};
use chrono::Utc;
use log::{debug, info};
use gridmix::config::{load_config, Config};
use gridmix::logging::setup_logger;
use gridmix::manager_caiso::Caiso;
use gridmix::production::fetch_production;
use gridmix::report_date::{parse_report_date, report_date_back};

const DEFAULT_CONFIG_PATH: &str = "config/gridmix.toml";

/// Prints the production mix of the latest daily report, or of the date given as second argument.
///
/// Usage: gridmix [config path] [YYYY-MM-DD]
///
/// Both can also be given as GRIDMIX_CONFIG and GRIDMIX_DATE, the arguments take precedence.
fn main() -> Result<()> {
    let args: Vec<String> = env::args().collect();

    let config_path = args.get(1).cloned()
        .or_else(|| env::var("GRIDMIX_CONFIG").ok());

    let config = match config_path {
        Some(path) => load_config(&path).with_context(|| format!("loading config {}", path))?,
        None if Path::new(DEFAULT_CONFIG_PATH).exists() => load_config(DEFAULT_CONFIG_PATH)?,
        None => Config::default(),
    };

    setup_logger(&config.general)?;
    info!("gridmix version: {}", env!("CARGO_PKG_VERSION"));

    let date_arg = args.get(2).cloned()
        .or_else(|| env::var("GRIDMIX_DATE").ok());

    let date = match date_arg {
        Some(d) => parse_report_date(&d)?,
        None => report_date_back(Utc::now(), config.region.time_zone, config.report.days_back)?,
    };

    let caiso = Caiso::new(&config.report);
    let records = fetch_production(&caiso, date, &config.region)
        .with_context(|| format!("production for {}", date))?;

    for r in &records {
        debug!("{}", r);
    }
    println!("{}", serde_json::to_string_pretty(&records)?);

    Ok(())
}
