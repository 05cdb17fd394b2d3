use std::fmt;
use std::fmt::Formatter;
use chrono::DateTime;
use chrono_tz::Tz;
use serde::Serialize;

/// Generation in MW per fuel category, `None` meaning the report doesn't carry it
#[derive(Serialize, Clone, Debug, Default, PartialEq, Eq)]
pub struct Production {
    pub biomass: Option<i64>,
    pub coal: Option<i64>,
    pub gas: Option<i64>,
    pub hydro: Option<i64>,
    pub nuclear: Option<i64>,
    pub oil: Option<i64>,
    pub solar: Option<i64>,
    pub wind: Option<i64>,
    pub geothermal: Option<i64>,
    pub unknown: Option<i64>,
}

/// Signed storage flow in MW, negative when charging
#[derive(Serialize, Clone, Debug, Default, PartialEq, Eq)]
pub struct Storage {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub hydro: Option<i64>,
}

/// One hour of the production mix for a region.
///
/// The timestamp marks the end of the hour, i.e. hour `h` is stamped `h:59:00` local time.
#[derive(Serialize, Clone, Debug, PartialEq)]
pub struct HourlyProductionRecord {
    #[serde(rename = "regionCode")]
    pub region_code: String,
    pub timestamp: DateTime<Tz>,
    pub production: Production,
    pub storage: Storage,
    pub source: String,
}

/// Implementation of the Display Trait for pretty print
impl fmt::Display for HourlyProductionRecord {
    fn fmt(&self, f: &mut Formatter) -> fmt::Result {
        let p = &self.production;
        write!(f, "{} {} ", self.region_code, self.timestamp.format("%Y-%m-%d %H:%M %Z"))?;
        write!(f, "biomass: {:>6}, gas: {:>6}, hydro: {:>6}, nuclear: {:>6}, solar: {:>6}, wind: {:>6}, geothermal: {:>6}, unknown: {:>6}",
               mw(p.biomass), mw(p.gas), mw(p.hydro), mw(p.nuclear),
               mw(p.solar), mw(p.wind), mw(p.geothermal), mw(p.unknown))?;
        if let Some(hydro) = self.storage.hydro {
            write!(f, ", storage hydro: {:>6}", hydro)?;
        }
        write!(f, " ({})", self.source)
    }
}

fn mw(value: Option<i64>) -> String {
    value.map_or("-".to_string(), |v| v.to_string())
}
