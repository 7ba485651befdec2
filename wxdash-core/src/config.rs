use anyhow::{Context, Result, anyhow};
use directories::ProjectDirs;
use serde::{Deserialize, Serialize};
use std::{fs, path::PathBuf};

pub const DEFAULT_API_BASE_URL: &str = "https://api.openweathermap.org/data/2.5";

/// Cities shown on the dashboard when the user has not configured their own.
pub const DEFAULT_CITIES: &[&str] = &[
    "Addis Ababa",
    "Shashemene",
    "Hawassa",
    "Bahir Dar",
    "Gondar",
    "Dire Dawa",
    "Mekele",
    "Harar",
];

/// Unit system forwarded to the upstream API via the `units` query parameter.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum Units {
    #[default]
    Metric,
    Imperial,
    Standard,
}

impl Units {
    pub fn as_str(&self) -> &'static str {
        match self {
            Units::Metric => "metric",
            Units::Imperial => "imperial",
            Units::Standard => "standard",
        }
    }

    pub const fn all() -> &'static [Units] {
        &[Units::Metric, Units::Imperial, Units::Standard]
    }
}

impl std::fmt::Display for Units {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

impl TryFrom<&str> for Units {
    type Error = anyhow::Error;

    fn try_from(value: &str) -> Result<Self, Self::Error> {
        let lower = value.to_lowercase();

        match lower.as_str() {
            "metric" => Ok(Units::Metric),
            "imperial" => Ok(Units::Imperial),
            "standard" => Ok(Units::Standard),
            _ => Err(anyhow!(
                "Unknown unit system '{value}'. Supported: metric, imperial, standard."
            )),
        }
    }
}

/// Everything the weather client needs for one request: base URL, credential
/// and unit system. Built per call site, never read from globals, so tests
/// can run against fake values.
#[derive(Debug, Clone)]
pub struct ClientConfig {
    pub api_base_url: String,
    pub api_key: String,
    pub units: Units,
}

impl ClientConfig {
    pub fn new(api_key: impl Into<String>) -> Self {
        Self {
            api_base_url: DEFAULT_API_BASE_URL.to_string(),
            api_key: api_key.into(),
            units: Units::default(),
        }
    }

    pub fn with_units(mut self, units: Units) -> Self {
        self.units = units;
        self
    }

    pub fn with_base_url(mut self, base_url: impl Into<String>) -> Self {
        self.api_base_url = base_url.into();
        self
    }
}

/// Top-level configuration stored on disk.
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
pub struct Config {
    /// OpenWeatherMap API key. Required before any fetch can run.
    pub api_key: Option<String>,

    /// Unit system as string, e.g. "metric". Absent means metric.
    pub units: Option<String>,

    /// Override for the API base URL; normally absent.
    pub api_base_url: Option<String>,

    /// Cities fetched by the dashboard at startup. Empty means the built-in
    /// default list.
    #[serde(default)]
    pub default_cities: Vec<String>,
}

impl Config {
    /// Resolve the dashboard's startup city list.
    pub fn dashboard_cities(&self) -> Vec<String> {
        if self.default_cities.is_empty() {
            DEFAULT_CITIES.iter().map(|c| (*c).to_string()).collect()
        } else {
            self.default_cities.clone()
        }
    }

    /// Build a [`ClientConfig`] from the stored values.
    pub fn client_config(&self) -> Result<ClientConfig> {
        let api_key = self.api_key.as_ref().ok_or_else(|| {
            anyhow!(
                "No API key configured.\n\
                 Hint: run `wxdash configure` and enter your OpenWeatherMap API key."
            )
        })?;

        let units = match self.units.as_deref() {
            Some(s) => Units::try_from(s)?,
            None => Units::default(),
        };

        let mut cfg = ClientConfig::new(api_key.clone()).with_units(units);
        if let Some(base) = &self.api_base_url {
            cfg = cfg.with_base_url(base.clone());
        }

        Ok(cfg)
    }

    pub fn set_api_key(&mut self, api_key: String) {
        self.api_key = Some(api_key);
    }

    pub fn set_units(&mut self, units: Units) {
        self.units = Some(units.as_str().to_string());
    }

    /// Load config from disk, or return an empty default if it doesn't exist yet.
    pub fn load() -> Result<Self> {
        let path = Self::config_file_path()?;
        if !path.exists() {
            // First run: no config file, return empty.
            return Ok(Self::default());
        }

        let contents = fs::read_to_string(&path)
            .with_context(|| format!("Failed to read config file: {}", path.display()))?;

        let cfg: Config = toml::from_str(&contents)
            .with_context(|| format!("Failed to parse config file: {}", path.display()))?;

        Ok(cfg)
    }

    /// Save config to disk, creating parent directories as needed.
    pub fn save(&self) -> Result<()> {
        let path = Self::config_file_path()?;

        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent).with_context(|| {
                format!("Failed to create config directory: {}", parent.display())
            })?;
        }

        let toml =
            toml::to_string_pretty(self).context("Failed to serialize configuration to TOML")?;

        fs::write(&path, toml)
            .with_context(|| format!("Failed to write config file: {}", path.display()))?;

        Ok(())
    }

    /// Path to the config file.
    pub fn config_file_path() -> Result<PathBuf> {
        let dirs = ProjectDirs::from("dev", "wxdash", "wxdash")
            .ok_or_else(|| anyhow!("Could not determine platform config directory"))?;

        Ok(dirs.config_dir().join("config.toml"))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn units_as_str_roundtrip() {
        for units in Units::all() {
            let s = units.as_str();
            let parsed = Units::try_from(s).expect("roundtrip should succeed");
            assert_eq!(*units, parsed);
        }
    }

    #[test]
    fn unknown_units_error() {
        let err = Units::try_from("kelvinish").unwrap_err();
        assert!(err.to_string().contains("Unknown unit system"));
    }

    #[test]
    fn client_config_errors_when_api_key_missing() {
        let cfg = Config::default();
        let err = cfg.client_config().unwrap_err();

        let msg = err.to_string();
        assert!(msg.contains("No API key configured"));
        assert!(msg.contains("Hint: run `wxdash configure`"));
    }

    #[test]
    fn client_config_picks_up_stored_values() {
        let mut cfg = Config::default();
        cfg.set_api_key("KEY".to_string());
        cfg.set_units(Units::Imperial);

        let client = cfg.client_config().expect("key is set");
        assert_eq!(client.api_key, "KEY");
        assert_eq!(client.units, Units::Imperial);
        assert_eq!(client.api_base_url, DEFAULT_API_BASE_URL);
    }

    #[test]
    fn client_config_honors_base_url_override() {
        let cfg = Config {
            api_key: Some("KEY".to_string()),
            api_base_url: Some("http://localhost:9000/data/2.5".to_string()),
            ..Config::default()
        };

        let client = cfg.client_config().expect("key is set");
        assert_eq!(client.api_base_url, "http://localhost:9000/data/2.5");
    }

    #[test]
    fn dashboard_cities_fall_back_to_builtin_list() {
        let cfg = Config::default();
        let cities = cfg.dashboard_cities();

        assert_eq!(cities.len(), 8);
        assert_eq!(cities[0], "Addis Ababa");
        assert_eq!(cities[2], "Hawassa");
    }

    #[test]
    fn dashboard_cities_prefer_configured_list() {
        let cfg = Config {
            default_cities: vec!["Oslo".to_string(), "Bergen".to_string()],
            ..Config::default()
        };

        assert_eq!(cfg.dashboard_cities(), vec!["Oslo", "Bergen"]);
    }
}
