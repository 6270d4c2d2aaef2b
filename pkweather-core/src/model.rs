use chrono::{DateTime, FixedOffset, Local, NaiveDateTime, TimeZone, Utc};
use serde::{Deserialize, Serialize};

use crate::codes::describe;

/// Current conditions for one city, as returned by a single fetch.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct WeatherReading {
    pub temperature_c: f64,
    /// Wall-clock time of the observation in the city's own timezone.
    pub observed_at: NaiveDateTime,
    pub weather_code: u16,
    /// Offset of `observed_at` from UTC, when the upstream reported one.
    pub utc_offset_seconds: Option<i32>,
}

impl WeatherReading {
    pub fn description(&self) -> &'static str {
        describe(i64::from(self.weather_code))
    }

    /// Absolute instant of the observation, if the offset is known.
    pub fn observed_at_utc(&self) -> Option<DateTime<Utc>> {
        let offset = FixedOffset::east_opt(self.utc_offset_seconds?)?;
        offset
            .from_local_datetime(&self.observed_at)
            .single()
            .map(|dt| dt.with_timezone(&Utc))
    }

    /// The observation converted to the caller's timezone, if the offset is known.
    pub fn observed_at_local(&self) -> Option<DateTime<Local>> {
        self.observed_at_utc().map(|dt| dt.with_timezone(&Local))
    }
}
