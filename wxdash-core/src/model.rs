use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::error::FetchError;

/// Normalized current-weather record for a single location.
///
/// Temperature and wind units follow the configured unit system; values are
/// passed through from the upstream API unconverted.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct WeatherReading {
    pub location_name: String,
    pub temperature_c: f64,
    pub humidity_pct: u8,
    pub wind_speed_mps: f64,
    /// Upstream icon identifier, e.g. "01d".
    pub condition_code: String,
    /// Human-readable condition, e.g. "clear sky".
    pub condition: String,
    pub observed_at: DateTime<Utc>,
}

/// Terminal result of one weather lookup.
pub type FetchOutcome = Result<WeatherReading, FetchError>;

/// Ordered outcomes of a batch lookup, index-aligned with the input cities.
pub type BatchResult = Vec<FetchOutcome>;
