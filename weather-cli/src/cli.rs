use anyhow::Context;
use clap::{Parser, Subcommand};
use inquire::{CustomType, InquireError, Select, Text};
use std::fmt;
use tracing::debug;

use weather_core::{Config, Dashboard, Location, View, WeatherProvider, provider_from_config};

use crate::render;

/// Top-level CLI struct.
#[derive(Debug, Parser)]
#[command(name = "weather", version, about = "Current conditions and 7-day forecast")]
pub struct Cli {
    /// Log requests and load outcomes to stderr.
    #[arg(short, long, global = true)]
    pub verbose: bool,

    #[command(subcommand)]
    pub command: Command,
}

#[derive(Debug, Subcommand)]
pub enum Command {
    /// Show one view and exit.
    Show {
        /// "current" or "forecast".
        #[arg(default_value = "current")]
        view: String,

        /// Print the panel as JSON instead of text.
        #[arg(long)]
        json: bool,
    },

    /// Switch between views interactively.
    Interactive,

    /// Set the location and forecast timezone.
    Configure,

    /// List the weather codes and their labels.
    Codes,
}

impl Cli {
    pub async fn run(self) -> anyhow::Result<()> {
        match self.command {
            Command::Show { view, json } => {
                let view: View = view.parse()?;
                let mut dashboard = Dashboard::new(load_provider()?);
                dashboard.navigate(view).await;

                if json {
                    let out = serde_json::to_string_pretty(dashboard.active_panel())
                        .context("Failed to serialize panel to JSON")?;
                    println!("{out}");
                } else {
                    print!("{}", render::panel(view, dashboard.active_panel()));
                }
            }
            Command::Interactive => {
                let mut dashboard = Dashboard::new(load_provider()?);
                dashboard.start().await;
                interactive(&mut dashboard).await?;
            }
            Command::Configure => configure()?,
            Command::Codes => print!("{}", render::codes()),
        }

        Ok(())
    }
}

fn load_provider() -> anyhow::Result<Box<dyn WeatherProvider>> {
    let config = Config::load()?;
    debug!(?config, "Loaded configuration");
    provider_from_config(&config).context("Failed to set up weather provider")
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum MenuItem {
    Show(View),
    Quit,
}

impl MenuItem {
    fn all() -> Vec<MenuItem> {
        vec![MenuItem::Show(View::Current), MenuItem::Show(View::Forecast), MenuItem::Quit]
    }
}

impl fmt::Display for MenuItem {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            MenuItem::Show(View::Current) => f.write_str("Current"),
            MenuItem::Show(View::Forecast) => f.write_str("Forecast"),
            MenuItem::Quit => f.write_str("Quit"),
        }
    }
}

async fn interactive<P: WeatherProvider>(dashboard: &mut Dashboard<P>) -> anyhow::Result<()> {
    loop {
        let active = dashboard.state().active;
        print!("{}", render::panel(active, dashboard.active_panel()));

        let cursor = MenuItem::all()
            .iter()
            .position(|item| *item == MenuItem::Show(active))
            .unwrap_or(0);

        let prompt = Select::new("View:", MenuItem::all()).with_starting_cursor(cursor);

        let choice = match prompt.prompt() {
            Ok(choice) => choice,
            Err(InquireError::OperationCanceled | InquireError::OperationInterrupted) => {
                return Ok(());
            }
            Err(err) => return Err(err).context("Failed to read menu selection"),
        };

        match choice {
            MenuItem::Show(view) => dashboard.navigate(view).await,
            MenuItem::Quit => return Ok(()),
        }
    }
}

fn configure() -> anyhow::Result<()> {
    let mut config = Config::load()?;

    let latitude = CustomType::<f64>::new("Latitude:")
        .with_default(config.location.latitude)
        .with_error_message("Please enter a number")
        .prompt()
        .context("Failed to read latitude")?;

    let longitude = CustomType::<f64>::new("Longitude:")
        .with_default(config.location.longitude)
        .with_error_message("Please enter a number")
        .prompt()
        .context("Failed to read longitude")?;

    let timezone = Text::new("Forecast timezone:")
        .with_default(&config.timezone)
        .prompt()
        .context("Failed to read timezone")?;

    config.location = Location { latitude, longitude };
    config.timezone = timezone.trim().to_string();
    config.validate()?;
    config.save()?;

    println!("Saved configuration to {}", Config::config_file_path()?.display());
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn show_defaults_to_current() {
        let cli = Cli::try_parse_from(["weather", "show"]).unwrap();
        match cli.command {
            Command::Show { view, json } => {
                assert_eq!(view, "current");
                assert!(!json);
            }
            other => panic!("unexpected command: {other:?}"),
        }
    }

    #[test]
    fn show_accepts_forecast_json() {
        let cli = Cli::try_parse_from(["weather", "-v", "show", "forecast", "--json"]).unwrap();
        assert!(cli.verbose);
        assert!(matches!(cli.command, Command::Show { ref view, json: true } if view == "forecast"));
    }

    #[tokio::test]
    async fn show_rejects_unknown_view() {
        let cli = Cli::try_parse_from(["weather", "show", "radar"]).unwrap();
        let err = cli.run().await.unwrap_err();
        assert!(err.to_string().contains("Unknown view 'radar'"));
    }

    #[test]
    fn menu_labels() {
        let labels: Vec<_> = MenuItem::all().iter().map(ToString::to_string).collect();
        assert_eq!(labels, ["Current", "Forecast", "Quit"]);
    }
}
