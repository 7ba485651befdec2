use async_trait::async_trait;
use chrono::{DateTime, Utc};
use log::{debug, warn};
use reqwest::{Client, StatusCode};
use serde::Deserialize;

use crate::{
    config::ClientConfig,
    error::FetchError,
    model::{FetchOutcome, WeatherReading},
};

/// The fetch seam: anything that can turn a city name into an outcome.
///
/// [`WeatherClient`] is the production implementation; tests substitute fakes
/// with scripted outcomes and latencies.
#[async_trait]
pub trait CurrentWeather: Send + Sync {
    async fn fetch_one(&self, city: &str) -> FetchOutcome;
}

/// HTTP client for the OpenWeatherMap current-weather endpoint.
///
/// One network call per invocation. No retries, no caching, no timeout
/// beyond the transport default; every failure comes back as a
/// [`FetchError`] value rather than crossing the boundary as an error type
/// the caller could forget to handle.
#[derive(Debug, Clone)]
pub struct WeatherClient {
    config: ClientConfig,
    http: Client,
}

impl WeatherClient {
    pub fn new(config: ClientConfig) -> Self {
        Self {
            config,
            http: Client::new(),
        }
    }

    async fn fetch_current(&self, city: &str) -> FetchOutcome {
        let url = format!("{}/weather", self.config.api_base_url);

        debug!("requesting current weather for '{city}'");

        let res = self
            .http
            .get(&url)
            .query(&[
                ("q", city),
                ("units", self.config.units.as_str()),
                ("appid", self.config.api_key.as_str()),
            ])
            .send()
            .await
            .map_err(|e| FetchError::network(e.to_string()))?;

        let status = res.status();
        if let Some(err) = classify_status(status, city) {
            warn!("weather request for '{city}' failed with status {status}");
            return Err(err);
        }

        let body = res
            .text()
            .await
            .map_err(|e| FetchError::network(e.to_string()))?;

        parse_current_body(&body)
    }
}

#[async_trait]
impl CurrentWeather for WeatherClient {
    async fn fetch_one(&self, city: &str) -> FetchOutcome {
        let city = city.trim();
        if city.is_empty() {
            // Reject before any request goes out.
            return Err(FetchError::EmptyQuery);
        }

        self.fetch_current(city).await
    }
}

/// Map a non-success status to its failure kind; `None` means proceed.
fn classify_status(status: StatusCode, city: &str) -> Option<FetchError> {
    if status.is_success() {
        return None;
    }

    if status == StatusCode::NOT_FOUND {
        Some(FetchError::NotFound { city: city.to_string() })
    } else {
        Some(FetchError::invalid_response(format!(
            "unexpected status {status}"
        )))
    }
}

/// Parse a 2xx body into a normalized reading.
fn parse_current_body(body: &str) -> FetchOutcome {
    let parsed: OwCurrentResponse = serde_json::from_str(body)
        .map_err(|e| FetchError::invalid_response(format!("malformed body: {e}")))?;

    let condition = parsed
        .weather
        .first()
        .ok_or_else(|| FetchError::invalid_response("empty weather condition list"))?;

    let observed_at = parsed
        .dt
        .and_then(|ts| DateTime::from_timestamp(ts, 0))
        .unwrap_or_else(Utc::now);

    Ok(WeatherReading {
        location_name: parsed.name,
        temperature_c: parsed.main.temp,
        humidity_pct: parsed.main.humidity,
        wind_speed_mps: parsed.wind.speed,
        condition_code: condition.icon.clone(),
        condition: condition.description.clone(),
        observed_at,
    })
}

#[derive(Debug, Deserialize)]
struct OwMain {
    temp: f64,
    humidity: u8,
}

#[derive(Debug, Deserialize)]
struct OwWeather {
    icon: String,
    description: String,
}

#[derive(Debug, Deserialize)]
struct OwWind {
    speed: f64,
}

#[derive(Debug, Deserialize)]
struct OwCurrentResponse {
    name: String,
    dt: Option<i64>,
    main: OwMain,
    weather: Vec<OwWeather>,
    wind: OwWind,
}
