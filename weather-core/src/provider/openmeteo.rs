use async_trait::async_trait;
use reqwest::Client;
use serde::de::DeserializeOwned;
use tracing::debug;

use crate::{
    Config, Location,
    error::{Result, WeatherError},
    model::{
        CurrentConditions, CurrentResponse, DailyForecastEntry, FORECAST_DAYS, ForecastResponse,
    },
};

use super::WeatherProvider;

pub const DEFAULT_BASE_URL: &str = "https://api.open-meteo.com/v1";
pub const DEFAULT_TIMEZONE: &str = "America/New_York";

const CURRENT_FIELDS: &str =
    "temperature_2m,relative_humidity_2m,apparent_temperature,wind_speed_10m,weather_code";
const DAILY_FIELDS: &str =
    "temperature_2m_max,temperature_2m_min,precipitation_probability_max,wind_speed_10m_max";

/// Client for the Open-Meteo forecast endpoint (no API key required).
#[derive(Debug, Clone)]
pub struct OpenMeteoProvider {
    base_url: String,
    location: Location,
    timezone: String,
    http: Client,
}

impl OpenMeteoProvider {
    pub fn new(base_url: impl Into<String>, location: Location, timezone: impl Into<String>) -> Self {
        Self {
            base_url: base_url.into(),
            location,
            timezone: timezone.into(),
            http: Client::new(),
        }
    }

    pub fn from_config(config: &Config) -> Self {
        Self::new(config.base_url.clone(), config.location, config.timezone.clone())
    }

    fn forecast_url(&self) -> String {
        format!("{}/forecast", self.base_url.trim_end_matches('/'))
    }

    fn current_query(&self) -> Vec<(&'static str, String)> {
        vec![
            ("latitude", self.location.latitude.to_string()),
            ("longitude", self.location.longitude.to_string()),
            ("current", CURRENT_FIELDS.to_string()),
            ("temperature_unit", "fahrenheit".to_string()),
            ("wind_speed_unit", "mph".to_string()),
        ]
    }

    fn daily_query(&self) -> Vec<(&'static str, String)> {
        vec![
            ("latitude", self.location.latitude.to_string()),
            ("longitude", self.location.longitude.to_string()),
            ("daily", DAILY_FIELDS.to_string()),
            ("temperature_unit", "fahrenheit".to_string()),
            ("wind_speed_unit", "mph".to_string()),
            ("timezone", self.timezone.clone()),
        ]
    }

    /// One GET, status check, then JSON decode of the whole body.
    async fn get_json<T: DeserializeOwned>(&self, query: &[(&'static str, String)]) -> Result<T> {
        let url = self.forecast_url();
        debug!(url = %url, ?query, "Requesting Open-Meteo");

        let network = |source| WeatherError::Network {
            url: url.clone(),
            source,
        };

        let res = self.http.get(&url).query(query).send().await.map_err(network)?;

        let status = res.status();
        let body = res.text().await.map_err(network)?;

        if !status.is_success() {
            return Err(WeatherError::Status {
                status,
                body: truncate_body(&body),
            });
        }

        serde_json::from_str(&body).map_err(WeatherError::parse)
    }
}

#[async_trait]
impl WeatherProvider for OpenMeteoProvider {
    async fn current(&self) -> Result<CurrentConditions> {
        let parsed: CurrentResponse = self.get_json(&self.current_query()).await?;
        Ok(parsed.current)
    }

    async fn forecast(&self) -> Result<Vec<DailyForecastEntry>> {
        let parsed: ForecastResponse = self.get_json(&self.daily_query()).await?;
        parsed.daily.entries(FORECAST_DAYS)
    }
}

fn truncate_body(body: &str) -> String {
    const MAX: usize = 200;
    match body.char_indices().nth(MAX) {
        Some((idx, _)) => format!("{}...", &body[..idx]),
        None => body.to_string(),
    }
}
