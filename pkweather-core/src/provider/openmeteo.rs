use std::time::Duration;

use async_trait::async_trait;
use chrono::NaiveDateTime;
use reqwest::Client;
use serde::Deserialize;
use tracing::{debug, instrument, warn};

use crate::{directory::CityEntry, error::WeatherError, model::WeatherReading};

use super::WeatherProvider;

pub const DEFAULT_BASE_URL: &str = "https://api.open-meteo.com/v1";

/// Client for the keyless Open-Meteo forecast API.
#[derive(Debug, Clone)]
pub struct OpenMeteoProvider {
    base_url: String,
    http: Client,
}

impl OpenMeteoProvider {
    /// Provider against a custom base URL, with an optional request timeout.
    pub fn with_options(
        base_url: impl Into<String>,
        timeout: Option<Duration>,
    ) -> Result<Self, WeatherError> {
        let mut builder = Client::builder();
        if let Some(timeout) = timeout {
            builder = builder.timeout(timeout);
        }

        Ok(Self {
            base_url: base_url.into().trim_end_matches('/').to_string(),
            http: builder.build()?,
        })
    }

    fn forecast_url(&self) -> String {
        format!("{}/forecast", self.base_url)
    }
}

#[derive(Debug, Deserialize)]
struct OmCurrentWeather {
    temperature: f64,
    time: String,
    weathercode: u16,
}

#[derive(Debug, Deserialize)]
struct OmResponse {
    utc_offset_seconds: Option<i32>,
    current_weather: OmCurrentWeather,
}

#[async_trait]
impl WeatherProvider for OpenMeteoProvider {
    #[instrument(skip(self, city), fields(city = city.name))]
    async fn current_weather(&self, city: &CityEntry) -> Result<WeatherReading, WeatherError> {
        let url = self.forecast_url();
        debug!(%url, lat = city.latitude, lng = city.longitude, "Requesting current weather");

        let res = self
            .http
            .get(&url)
            .query(&[
                ("latitude", city.latitude.to_string()),
                ("longitude", city.longitude.to_string()),
                ("current_weather", "true".to_string()),
                ("timezone", "auto".to_string()),
            ])
            .send()
            .await?;

        let status = res.status();
        let body = res.text().await?;

        if !status.is_success() {
            warn!(%status, body = %truncate_body(&body), "Open-Meteo request failed");
            return Err(WeatherError::WeatherUnavailable { status });
        }

        parse_response(&body)
    }
}

fn parse_response(body: &str) -> Result<WeatherReading, WeatherError> {
    let parsed: OmResponse = serde_json::from_str(body)
        .map_err(|e| WeatherError::MalformedResponse(format!("invalid JSON body: {e}")))?;

    let current = parsed.current_weather;

    Ok(WeatherReading {
        temperature_c: current.temperature,
        observed_at: parse_local_time(&current.time)?,
        weather_code: current.weathercode,
        utc_offset_seconds: parsed.utc_offset_seconds,
    })
}

/// Open-Meteo reports ISO-8601 local time without an offset, usually without seconds.
fn parse_local_time(s: &str) -> Result<NaiveDateTime, WeatherError> {
    ["%Y-%m-%dT%H:%M", "%Y-%m-%dT%H:%M:%S"]
        .iter()
        .find_map(|fmt| NaiveDateTime::parse_from_str(s, fmt).ok())
        .ok_or_else(|| WeatherError::MalformedResponse(format!("invalid timestamp '{s}'")))
}

fn truncate_body(body: &str) -> String {
    const MAX: usize = 200;
    if body.chars().count() > MAX {
        format!("{}...", body.chars().take(MAX).collect::<String>())
    } else {
        body.to_string()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_minimal_body() {
        let body = r#"{
            "current_weather": {
                "temperature": 21.4,
                "time": "2024-01-01T12:00:00",
                "weathercode": 3
            }
        }"#;
        let reading = parse_response(body).expect("valid body");

        assert_eq!(reading.temperature_c, 21.4);
        assert_eq!(reading.weather_code, 3);
        assert_eq!(reading.observed_at.to_string(), "2024-01-01 12:00:00");
        assert_eq!(reading.utc_offset_seconds, None);
    }

    #[test]
    fn parses_offset_and_minute_precision_time() {
        let body = r#"{
            "latitude": 31.5,
            "longitude": 74.375,
            "utc_offset_seconds": 18000,
            "timezone": "Asia/Karachi",
            "current_weather": {
                "temperature": 9.0,
                "windspeed": 3.1,
                "time": "2024-01-01T07:45",
                "weathercode": 45
            }
        }"#;
        let reading = parse_response(body).expect("valid body");

        assert_eq!(reading.utc_offset_seconds, Some(18000));
        assert_eq!(reading.observed_at.to_string(), "2024-01-01 07:45:00");
        assert_eq!(reading.description(), "Foggy");
    }

    #[test]
    fn missing_fields_are_malformed() {
        let err = parse_response(r#"{"current_weather":{"temperature":1.0}}"#).unwrap_err();
        assert!(matches!(err, WeatherError::MalformedResponse(_)));

        let err = parse_response(r#"{"hourly":{}}"#).unwrap_err();
        assert!(matches!(err, WeatherError::MalformedResponse(_)));
    }

    #[test]
    fn non_json_is_malformed() {
        let err = parse_response("<html>oops</html>").unwrap_err();
        assert!(matches!(err, WeatherError::MalformedResponse(_)));
    }

    #[test]
    fn bad_timestamp_is_malformed() {
        let body = r#"{"current_weather":{"temperature":1.0,"time":"yesterday","weathercode":0}}"#;
        let err = parse_response(body).unwrap_err();
        assert!(err.to_string().contains("invalid timestamp 'yesterday'"));
    }

    #[test]
    fn base_url_trailing_slash_is_dropped() {
        let provider =
            OpenMeteoProvider::with_options("http://localhost:1234/v1/", None).expect("client");
        assert_eq!(provider.forecast_url(), "http://localhost:1234/v1/forecast");

        let provider = OpenMeteoProvider::with_options(DEFAULT_BASE_URL, None).expect("client");
        assert_eq!(provider.forecast_url(), "https://api.open-meteo.com/v1/forecast");
    }

    #[test]
    fn truncate_body_respects_char_boundaries() {
        let long = "é".repeat(300);
        let cut = truncate_body(&long);
        assert!(cut.ends_with("..."));
        assert_eq!(cut.chars().count(), 203);
        assert_eq!(truncate_body("short"), "short");
    }
}
