use crate::{
    Config, WeatherReading, directory::CityEntry, error::WeatherError,
    provider::openmeteo::OpenMeteoProvider,
};
use async_trait::async_trait;
use std::{fmt::Debug, time::Duration};

pub mod openmeteo;

/// Source of current weather for a resolved city.
#[async_trait]
pub trait WeatherProvider: Send + Sync + Debug {
    async fn current_weather(&self, city: &CityEntry) -> Result<WeatherReading, WeatherError>;
}

/// Construct the Open-Meteo provider from config, honouring base URL and timeout overrides.
pub fn provider_from_config(config: &Config) -> anyhow::Result<Box<dyn WeatherProvider>> {
    let base_url = config.base_url.as_deref().unwrap_or(openmeteo::DEFAULT_BASE_URL);
    let timeout = config.timeout_secs.map(Duration::from_secs);

    let provider = OpenMeteoProvider::with_options(base_url, timeout)
        .map_err(|e| anyhow::anyhow!("Failed to build HTTP client: {e}"))?;

    Ok(Box::new(provider))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::Config;

    #[test]
    fn provider_from_default_config() {
        let cfg = Config::default();
        let provider = provider_from_config(&cfg).expect("default config builds a provider");
        assert!(format!("{provider:?}").contains("api.open-meteo.com"));
    }

    #[test]
    fn provider_from_config_uses_base_url_override() {
        let cfg = Config {
            base_url: Some("http://127.0.0.1:9/v1".to_string()),
            timeout_secs: Some(3),
            ..Config::default()
        };

        let provider = provider_from_config(&cfg).expect("override builds a provider");
        assert!(format!("{provider:?}").contains("127.0.0.1:9"));
    }
}
