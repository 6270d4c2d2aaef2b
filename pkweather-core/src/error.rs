use reqwest::StatusCode;
use thiserror::Error;

use crate::directory;

/// Errors raised while fetching weather for a city.
#[derive(Debug, Error)]
pub enum WeatherError {
    /// The normalized name is not a directory key.
    #[error("City not found. Try: {}", .valid.join(", "))]
    CityNotFound {
        name: String,
        valid: Vec<&'static str>,
    },

    /// Upstream answered with a non-success status.
    #[error("Weather data not available (HTTP {status})")]
    WeatherUnavailable { status: StatusCode },

    /// Body did not match the expected schema.
    #[error("Malformed weather response: {0}")]
    MalformedResponse(String),

    #[error("Failed to reach weather service: {0}")]
    Http(#[from] reqwest::Error),
}

impl WeatherError {
    pub(crate) fn city_not_found(name: impl Into<String>) -> Self {
        Self::CityNotFound {
            name: name.into(),
            valid: directory::city_names().collect(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn city_not_found_lists_every_key_in_order() {
        let err = WeatherError::city_not_found("sialkot");
        let msg = err.to_string();

        assert!(msg.starts_with("City not found. Try: islamabad, karachi, lahore"));
        assert!(msg.ends_with("dera ismail khan, d i khan, abbottabad"));
        for name in directory::city_names() {
            assert!(msg.contains(name), "missing {name} in {msg}");
        }
    }

    #[test]
    fn unavailable_mentions_status() {
        let err = WeatherError::WeatherUnavailable {
            status: StatusCode::SERVICE_UNAVAILABLE,
        };
        assert_eq!(
            err.to_string(),
            "Weather data not available (HTTP 503 Service Unavailable)"
        );
    }
}
