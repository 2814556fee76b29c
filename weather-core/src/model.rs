use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use crate::error::{Result, WeatherError};

/// Number of daily entries the forecast view shows (today + 6).
pub const FORECAST_DAYS: usize = 7;

/// The single location the dashboard reports on.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Location {
    pub latitude: f64,
    pub longitude: f64,
}

impl Location {
    pub const MIAMI: Location = Location {
        latitude: 25.7617,
        longitude: -80.1918,
    };

    pub fn is_valid(&self) -> bool {
        (-90.0..=90.0).contains(&self.latitude) && (-180.0..=180.0).contains(&self.longitude)
    }
}

impl Default for Location {
    fn default() -> Self {
        Self::MIAMI
    }
}

/// Observation for a single instant, read from the `current` object.
///
/// Temperatures are Fahrenheit and wind speed is mph, as requested from the API.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CurrentConditions {
    #[serde(rename = "temperature_2m")]
    pub temperature: f64,
    pub apparent_temperature: f64,
    #[serde(rename = "relative_humidity_2m")]
    pub relative_humidity: f64,
    #[serde(rename = "wind_speed_10m")]
    pub wind_speed: f64,
    pub weather_code: i64,
}

/// One day of the forecast.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct DailyForecastEntry {
    pub date: NaiveDate,
    pub temperature_max: f64,
    pub temperature_min: f64,
    /// Missing when the API has no probability for that day.
    pub precipitation_probability_max: Option<f64>,
    pub wind_speed_max: f64,
}

/// The `daily` object: parallel arrays indexed by day.
#[derive(Debug, Clone, Deserialize)]
pub struct DailySeries {
    pub time: Vec<String>,
    pub temperature_2m_max: Vec<f64>,
    pub temperature_2m_min: Vec<f64>,
    pub precipitation_probability_max: Vec<Option<f64>>,
    pub wind_speed_10m_max: Vec<f64>,
}

impl DailySeries {
    /// Zip the first `days` indices into entries.
    ///
    /// Every array must hold at least `days` values; anything shorter, or a
    /// date that does not parse, rejects the whole series.
    pub fn entries(&self, days: usize) -> Result<Vec<DailyForecastEntry>> {
        let shortest = [
            self.time.len(),
            self.temperature_2m_max.len(),
            self.temperature_2m_min.len(),
            self.precipitation_probability_max.len(),
            self.wind_speed_10m_max.len(),
        ]
        .into_iter()
        .min()
        .unwrap_or(0);

        if shortest < days {
            return Err(WeatherError::Parse(format!(
                "daily series holds {shortest} entries, expected at least {days}"
            )));
        }

        (0..days)
            .map(|i| {
                let date = NaiveDate::parse_from_str(&self.time[i], "%Y-%m-%d")
                    .map_err(|e| WeatherError::Parse(format!("invalid date '{}': {e}", self.time[i])))?;

                Ok(DailyForecastEntry {
                    date,
                    temperature_max: self.temperature_2m_max[i],
                    temperature_min: self.temperature_2m_min[i],
                    precipitation_probability_max: self.precipitation_probability_max[i],
                    wind_speed_max: self.wind_speed_10m_max[i],
                })
            })
            .collect()
    }
}

/// Envelope of the current-conditions endpoint; other fields are ignored.
#[derive(Debug, Deserialize)]
pub(crate) struct CurrentResponse {
    pub current: CurrentConditions,
}

/// Envelope of the daily-forecast endpoint.
#[derive(Debug, Deserialize)]
pub(crate) struct ForecastResponse {
    pub daily: DailySeries,
}
