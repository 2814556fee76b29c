use async_trait::async_trait;
use std::fmt::Debug;

use crate::{
    Config, CurrentConditions, DailyForecastEntry, error::Result,
    provider::openmeteo::OpenMeteoProvider,
};

pub mod openmeteo;

/// Source of the two datasets the dashboard shows.
///
/// Each call is a single all-or-nothing request: no retries, no partial data.
#[async_trait]
pub trait WeatherProvider: Send + Sync + Debug {
    /// Conditions at the configured location right now.
    async fn current(&self) -> Result<CurrentConditions>;

    /// Daily aggregates for today and the following six days, in date order.
    async fn forecast(&self) -> Result<Vec<DailyForecastEntry>>;
}

#[async_trait]
impl<P: WeatherProvider + ?Sized> WeatherProvider for Box<P> {
    async fn current(&self) -> Result<CurrentConditions> {
        (**self).current().await
    }

    async fn forecast(&self) -> Result<Vec<DailyForecastEntry>> {
        (**self).forecast().await
    }
}

/// Construct the provider described by the config.
pub fn provider_from_config(config: &Config) -> Result<Box<dyn WeatherProvider>> {
    config.validate()?;
    Ok(Box::new(OpenMeteoProvider::from_config(config)))
}
