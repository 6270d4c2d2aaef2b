use tracing::debug;

use crate::{
    directory::{self, CityEntry},
    error::WeatherError,
    model::WeatherReading,
    provider::WeatherProvider,
};

/// Resolve `city_name` against the directory and fetch its current weather.
///
/// The name is normalized before lookup. Unknown names fail with
/// [`WeatherError::CityNotFound`] before any request is made. Every call hits
/// the provider exactly once; nothing is cached or retried.
pub async fn fetch_weather(
    provider: &dyn WeatherProvider,
    city_name: &str,
) -> Result<WeatherReading, WeatherError> {
    fetch_city_weather(provider, city_name)
        .await
        .map(|(_, reading)| reading)
}

/// Like [`fetch_weather`], also returning the directory entry the name resolved to.
pub async fn fetch_city_weather(
    provider: &dyn WeatherProvider,
    city_name: &str,
) -> Result<(&'static CityEntry, WeatherReading), WeatherError> {
    let key = directory::normalize(city_name);
    let city = directory::lookup(&key).ok_or_else(|| WeatherError::city_not_found(key.as_str()))?;

    debug!(city = city.name, "Resolved city");
    let reading = provider.current_weather(city).await?;

    Ok((city, reading))
}
