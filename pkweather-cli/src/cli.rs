use anyhow::{Context, bail};
use clap::{Parser, Subcommand};
use inquire::{Select, Text};
use pkweather_core::{
    Config, describe, directory, fetch_city_weather, provider::openmeteo::DEFAULT_BASE_URL,
    provider_from_config,
};
use tracing::info;

use crate::output;

/// Top-level CLI struct.
#[derive(Debug, Parser)]
#[command(name = "pkweather", version, about = "Current weather for Pakistani cities")]
pub struct Cli {
    /// Increase log verbosity (-v info, -vv debug, -vvv trace).
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    pub verbose: u8,

    #[command(subcommand)]
    pub command: Command,
}

#[derive(Debug, Subcommand)]
pub enum Command {
    /// Show current weather for a city.
    Show {
        /// City name, e.g. "Lahore" or "d i khan". Falls back to the configured default.
        city: Option<String>,

        /// Print the reading as JSON.
        #[arg(long)]
        json: bool,
    },

    /// List supported cities.
    Cities,

    /// Print the description for a WMO weather code.
    Describe {
        #[arg(allow_negative_numbers = true)]
        code: i64,
    },

    /// Interactively set the default city and API base URL.
    Configure,
}

impl Cli {
    pub async fn run(self) -> anyhow::Result<()> {
        match self.command {
            Command::Show { city, json } => {
                let config = Config::load()?;
                let name = match city_argument(city, &config) {
                    Some(name) => name,
                    None => pick_city(None)?.to_string(),
                };
                let name = non_empty(&name)?;

                let provider = provider_from_config(&config)?;
                let (city, reading) = fetch_city_weather(provider.as_ref(), name).await?;

                if json {
                    let value = output::render_json(city, &reading);
                    println!("{}", serde_json::to_string_pretty(&value)?);
                } else {
                    println!("{}", output::render(city, &reading));
                }
            }
            Command::Cities => {
                for city in directory::cities() {
                    println!("{:<18} {:>8.4} {:>8.4}", city.name, city.latitude, city.longitude);
                }
            }
            Command::Describe { code } => {
                println!("{}", describe(code));
            }
            Command::Configure => {
                let mut config = Config::load()?;

                let city = pick_city(config.default_city())?;
                config.set_default_city(city)?;

                let current_url =
                    config.base_url.clone().unwrap_or_else(|| DEFAULT_BASE_URL.to_string());
                let base_url = Text::new("Open-Meteo base URL:")
                    .with_default(&current_url)
                    .prompt()
                    .context("Failed to read base URL")?;
                config.base_url = Some(base_url.trim().to_string()).filter(|url| !url.is_empty());

                config.save()?;
                info!(path = %Config::config_file_path()?.display(), "Saved configuration");
                println!("Default city set to {city}.");
            }
        }

        Ok(())
    }
}

/// City from the command line, else the configured default.
fn city_argument(arg: Option<String>, config: &Config) -> Option<String> {
    arg.or_else(|| config.default_city().map(str::to_string))
}

fn non_empty(name: &str) -> anyhow::Result<&str> {
    if name.trim().is_empty() {
        bail!("Please enter a city name");
    }
    Ok(name)
}

fn pick_city(current: Option<&str>) -> anyhow::Result<&'static str> {
    let names: Vec<&'static str> = directory::city_names().collect();
    let cursor = current.and_then(|c| names.iter().position(|n| *n == c)).unwrap_or(0);

    Select::new("City:", names)
        .with_starting_cursor(cursor)
        .prompt()
        .context("No city selected")
}
