//! Data-to-view-model mapping.
//!
//! Cards hold the exact strings a presentation layer displays, so the
//! formatting rules can be checked without any rendering environment.

use serde::Serialize;

use crate::{
    model::{CurrentConditions, DailyForecastEntry},
    weather_code,
};

/// Summary card for the current-conditions view.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct CurrentCard {
    pub condition: String,
    pub temperature: String,
    pub feels_like: String,
    pub humidity: String,
    pub wind_speed: String,
}

/// One day in the forecast grid.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ForecastCard {
    pub date: String,
    pub high: String,
    pub low: String,
    pub precipitation: String,
    pub wind_speed: String,
}

pub fn current_card(current: &CurrentConditions) -> CurrentCard {
    CurrentCard {
        condition: weather_code::describe(current.weather_code).to_string(),
        temperature: format!("{}°F", round(current.temperature)),
        feels_like: format!("Feels like {}°F", round(current.apparent_temperature)),
        humidity: format!("{}%", current.relative_humidity),
        wind_speed: format!("{} mph", round(current.wind_speed)),
    }
}

/// One card per entry, in the order given.
pub fn forecast_cards(entries: &[DailyForecastEntry]) -> Vec<ForecastCard> {
    entries.iter().map(forecast_card).collect()
}

fn forecast_card(entry: &DailyForecastEntry) -> ForecastCard {
    let precipitation = match entry.precipitation_probability_max {
        Some(p) => format!("{p}%"),
        None => "n/a".to_string(),
    };

    ForecastCard {
        // en-US short weekday, short month, numeric day: "Mon, Jan 15"
        date: entry.date.format("%a, %b %-d").to_string(),
        high: format!("{}°", round(entry.temperature_max)),
        low: format!("Low: {}°", round(entry.temperature_min)),
        precipitation,
        wind_speed: format!("{} mph", round(entry.wind_speed_max)),
    }
}

/// Nearest whole number, halves toward positive infinity (72.5 -> 73, -2.5 -> -2).
fn round(value: f64) -> i64 {
    (value + 0.5).floor() as i64
}
