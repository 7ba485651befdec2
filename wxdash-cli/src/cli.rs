use anyhow::Context;
use clap::{Parser, Subcommand};
use inquire::{Select, Text};
use log::info;
use wxdash_core::{
    BatchFetcher, Config, CurrentWeather, FetchOutcome, Units, WeatherClient, WeatherReading,
};

/// Top-level CLI struct.
#[derive(Debug, Parser)]
#[command(name = "wxdash", version, about = "Weather dashboard CLI")]
pub struct Cli {
    #[command(subcommand)]
    pub command: Command,
}

#[derive(Debug, Subcommand)]
pub enum Command {
    /// Store the OpenWeatherMap API key and unit system.
    Configure,

    /// Fetch and render the default-city tiles.
    Dashboard,

    /// Show current weather for a single searched city.
    Show {
        /// City name, e.g. "Hawassa".
        city: String,
    },
}

impl Cli {
    pub async fn run(self) -> anyhow::Result<()> {
        match self.command {
            Command::Configure => configure(),
            Command::Dashboard => dashboard().await,
            Command::Show { city } => show(&city).await,
        }
    }
}

fn configure() -> anyhow::Result<()> {
    let mut config = Config::load()?;

    let api_key = Text::new("OpenWeatherMap API key:")
        .prompt()
        .context("Failed to read API key")?;

    let units = Select::new("Unit system:", Units::all().to_vec())
        .prompt()
        .context("Failed to read unit system")?;

    config.set_api_key(api_key.trim().to_string());
    config.set_units(units);
    config.save()?;

    println!("Saved configuration to {}", Config::config_file_path()?.display());
    Ok(())
}

async fn dashboard() -> anyhow::Result<()> {
    let config = Config::load()?;
    let client_config = config.client_config()?;
    let units = client_config.units;
    let cities = config.dashboard_cities();

    info!("loading dashboard for {} cities", cities.len());

    let batch = BatchFetcher::new(WeatherClient::new(client_config));
    let results = batch.fetch_all(&cities).await;

    for (city, outcome) in cities.iter().zip(&results) {
        render_tile(city, outcome, units);
        println!();
    }

    Ok(())
}

async fn show(city: &str) -> anyhow::Result<()> {
    let config = Config::load()?;
    let client_config = config.client_config()?;
    let units = client_config.units;

    let client = WeatherClient::new(client_config);
    let outcome = client.fetch_one(city).await;

    render_tile(city.trim(), &outcome, units);
    Ok(())
}

/// One dashboard tile: a heading plus either the reading or the error.
fn render_tile(city: &str, outcome: &FetchOutcome, units: Units) {
    match outcome {
        Ok(reading) => print_reading(reading, units),
        Err(err) => {
            println!("== {city} ==");
            println!("   {err}");
        }
    }
}

fn print_reading(reading: &WeatherReading, units: Units) {
    let (temp_unit, wind_unit) = unit_labels(units);

    println!("== {} ==", reading.location_name);
    println!("   {} ({})", reading.condition, icon_url(&reading.condition_code));
    println!("   temperature: {}{temp_unit}", reading.temperature_c);
    println!("   humidity:    {}%", reading.humidity_pct);
    println!("   wind:        {} {wind_unit}", reading.wind_speed_mps);
    println!("   observed at: {}", reading.observed_at.format("%Y-%m-%d %H:%M UTC"));
}

/// Display labels matching what the upstream API returns for each unit system.
fn unit_labels(units: Units) -> (&'static str, &'static str) {
    match units {
        Units::Metric => ("°C", "m/s"),
        Units::Imperial => ("°F", "mph"),
        Units::Standard => ("K", "m/s"),
    }
}

/// Icon URL construction is purely presentational and lives here, not in core.
fn icon_url(condition_code: &str) -> String {
    format!("https://openweathermap.org/img/wn/{condition_code}@2x.png")
}
