use chrono::NaiveDateTime;
use pkweather_core::{CityEntry, WeatherReading};
use serde_json::json;

/// "Lahore, Pakistan"
pub fn heading(city: &CityEntry) -> String {
    format!("{}, Pakistan", city.display_name())
}

/// "Monday, January 1, 2024 • 12:00 PM"
pub fn timestamp_line(at: &NaiveDateTime) -> String {
    format!("{} • {}", at.format("%A, %B %-d, %Y"), at.format("%I:%M %p"))
}

/// Whole degrees, as shown to the user. Halves round up, so -2.5 shows as -2.
fn rounded_celsius(temperature_c: f64) -> f64 {
    let rounded = (temperature_c + 0.5).floor();
    // -0 prints as "-0".
    if rounded == 0.0 { 0.0 } else { rounded }
}

pub fn render(city: &CityEntry, reading: &WeatherReading) -> String {
    format!(
        "{}\n{}°C  {}\n{}",
        heading(city),
        rounded_celsius(reading.temperature_c),
        reading.description(),
        timestamp_line(&reading.observed_at),
    )
}

pub fn render_json(city: &CityEntry, reading: &WeatherReading) -> serde_json::Value {
    json!({
        "city": city,
        "reading": reading,
        "description": reading.description(),
        "observed_at_utc": reading.observed_at_utc(),
    })
}
