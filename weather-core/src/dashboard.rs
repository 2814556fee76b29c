//! Navigation controller and per-view loaders.
//!
//! The dashboard owns all UI state: which view is active, whether each view
//! has loaded, and what each view's panel currently shows. A presentation
//! layer only reads [`Panel`]s and calls [`Dashboard::navigate`].

use serde::Serialize;
use std::{fmt, str::FromStr};
use tracing::{error, info};

use crate::{
    error::WeatherError,
    provider::WeatherProvider,
    view::{self, CurrentCard, ForecastCard},
};

pub const CURRENT_ERROR: &str = "Unable to load current weather. Please try again later.";
pub const FORECAST_ERROR: &str = "Unable to load forecast. Please try again later.";

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum View {
    #[default]
    Current,
    Forecast,
}

impl View {
    pub fn as_str(&self) -> &'static str {
        match self {
            View::Current => "current",
            View::Forecast => "forecast",
        }
    }

    pub const fn all() -> &'static [View] {
        &[View::Current, View::Forecast]
    }
}

impl fmt::Display for View {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for View {
    type Err = WeatherError;

    fn from_str(value: &str) -> Result<Self, Self::Err> {
        match value.to_lowercase().as_str() {
            "current" => Ok(View::Current),
            "forecast" => Ok(View::Forecast),
            _ => Err(WeatherError::UnknownView(value.to_string())),
        }
    }
}

/// Which view is shown and which views already hold data.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize)]
pub struct ViewState {
    pub active: View,
    pub current_loaded: bool,
    pub forecast_loaded: bool,
}

impl ViewState {
    pub fn is_active(&self, view: View) -> bool {
        self.active == view
    }

    pub fn is_loaded(&self, view: View) -> bool {
        match view {
            View::Current => self.current_loaded,
            View::Forecast => self.forecast_loaded,
        }
    }

    fn mark_loaded(&mut self, view: View) {
        match view {
            View::Current => self.current_loaded = true,
            View::Forecast => self.forecast_loaded = true,
        }
    }
}

/// Placeholder shown until the panel's first content arrives.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct LoadingIndicator {
    pub visible: bool,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "kind", content = "data", rename_all = "lowercase")]
pub enum PanelContent {
    Current(CurrentCard),
    Forecast(Vec<ForecastCard>),
    Error(String),
}

/// A view's content container together with its own loading indicator.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Panel {
    pub indicator: LoadingIndicator,
    pub content: Option<PanelContent>,
}

impl Panel {
    fn new() -> Self {
        Self {
            indicator: LoadingIndicator { visible: true },
            content: None,
        }
    }

    pub fn is_loading(&self) -> bool {
        self.indicator.visible
    }
}

/// Serializable copy of the whole dashboard.
#[derive(Debug, Clone, Serialize)]
pub struct DashboardSnapshot {
    pub state: ViewState,
    pub current: Panel,
    pub forecast: Panel,
}

#[derive(Debug)]
pub struct Dashboard<P> {
    provider: P,
    state: ViewState,
    current: Panel,
    forecast: Panel,
}

impl<P: WeatherProvider> Dashboard<P> {
    pub fn new(provider: P) -> Self {
        Self {
            provider,
            state: ViewState::default(),
            current: Panel::new(),
            forecast: Panel::new(),
        }
    }

    pub fn state(&self) -> &ViewState {
        &self.state
    }

    pub fn panel(&self, view: View) -> &Panel {
        match view {
            View::Current => &self.current,
            View::Forecast => &self.forecast,
        }
    }

    pub fn active_panel(&self) -> &Panel {
        self.panel(self.state.active)
    }

    pub fn snapshot(&self) -> DashboardSnapshot {
        DashboardSnapshot {
            state: self.state,
            current: self.current.clone(),
            forecast: self.forecast.clone(),
        }
    }

    /// Make `view` the active one. Calling it again with the same view is a no-op.
    pub fn switch_view(&mut self, view: View) {
        self.state.active = view;
    }

    /// Switch to `view` and load it unless it has loaded before.
    pub async fn navigate(&mut self, view: View) {
        self.switch_view(view);
        if !self.state.is_loaded(view) {
            self.load(view).await;
        }
    }

    /// Initial load of the default view.
    pub async fn start(&mut self) {
        let view = self.state.active;
        self.navigate(view).await;
    }

    pub async fn load(&mut self, view: View) {
        match view {
            View::Current => self.load_current().await,
            View::Forecast => self.load_forecast().await,
        }
    }

    pub async fn load_current(&mut self) {
        match self.provider.current().await {
            Ok(current) => {
                let card = view::current_card(&current);
                self.show_content(View::Current, PanelContent::Current(card));
                self.state.mark_loaded(View::Current);
                info!(condition = current.weather_code, "Current weather loaded");
            }
            Err(err) => {
                self.display_error(View::Current, CURRENT_ERROR);
                error!(error = %err, "Error fetching current weather");
            }
        }
    }

    pub async fn load_forecast(&mut self) {
        match self.provider.forecast().await {
            Ok(entries) => {
                let cards = view::forecast_cards(&entries);
                info!(days = cards.len(), "Forecast loaded");
                self.show_content(View::Forecast, PanelContent::Forecast(cards));
                self.state.mark_loaded(View::Forecast);
            }
            Err(err) => {
                self.display_error(View::Forecast, FORECAST_ERROR);
                error!(error = %err, "Error fetching forecast");
            }
        }
    }

    /// Replace the panel's content and hide its loading indicator.
    pub fn show_content(&mut self, view: View, content: PanelContent) {
        let panel = match view {
            View::Current => &mut self.current,
            View::Forecast => &mut self.forecast,
        };
        panel.content = Some(content);
        panel.indicator.visible = false;
    }

    pub fn display_error(&mut self, view: View, message: &str) {
        self.show_content(view, PanelContent::Error(message.to_string()));
    }
}
