//! Hourly production mix from CAISO's Daily Renewables Watch report.

pub mod config;
pub mod errors;
pub mod logging;
pub mod manager_caiso;
pub mod models;
pub mod parser;
pub mod production;
pub mod report_date;
