//! Core library for the `pkweather` CLI.
//!
//! This crate defines:
//! - The fixed directory of supported Pakistani cities
//! - Weather code descriptions
//! - Fetching current weather through a provider abstraction (Open-Meteo)
//! - Configuration handling
//!
//! It is used by `pkweather-cli`, but can also be reused by other binaries or services.

pub mod codes;
pub mod config;
pub mod directory;
pub mod error;
pub mod fetch;
pub mod model;
pub mod provider;

pub use codes::describe;
pub use config::Config;
pub use directory::CityEntry;
pub use error::WeatherError;
pub use fetch::{fetch_city_weather, fetch_weather};
pub use model::WeatherReading;
pub use provider::{WeatherProvider, openmeteo::OpenMeteoProvider, provider_from_config};
