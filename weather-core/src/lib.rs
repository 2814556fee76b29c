//! Core library for the `weather` dashboard.
//!
//! This crate defines:
//! - Configuration (location, API root, forecast timezone)
//! - The Open-Meteo provider behind the `WeatherProvider` trait
//! - Weather-code labels and the data-to-view-model mapping
//! - The dashboard: navigation state and load-once loaders per view
//!
//! It is used by `weather-cli`, but has no terminal dependencies of its own.

pub mod config;
pub mod dashboard;
pub mod error;
pub mod model;
pub mod provider;
pub mod view;
pub mod weather_code;

pub use config::Config;
pub use dashboard::{Dashboard, DashboardSnapshot, Panel, PanelContent, View, ViewState};
pub use error::WeatherError;
pub use model::{CurrentConditions, DailyForecastEntry, Location};
pub use provider::{WeatherProvider, openmeteo::OpenMeteoProvider, provider_from_config};
pub use view::{CurrentCard, ForecastCard};
