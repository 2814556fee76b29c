use std::fmt::Write;

use weather_core::{CurrentCard, ForecastCard, Panel, PanelContent, View, weather_code};

pub fn panel(view: View, panel: &Panel) -> String {
    let mut out = String::new();
    let _ = writeln!(out, "{}", heading(view));

    if panel.is_loading() {
        out.push_str("Loading...\n");
        return out;
    }

    match &panel.content {
        Some(PanelContent::Current(card)) => current(&mut out, card),
        Some(PanelContent::Forecast(cards)) => forecast(&mut out, cards),
        Some(PanelContent::Error(message)) => {
            let _ = writeln!(out, "! {message}");
        }
        None => {}
    }

    out
}

fn heading(view: View) -> &'static str {
    match view {
        View::Current => "== Current Weather ==",
        View::Forecast => "== 7-Day Forecast ==",
    }
}

fn current(out: &mut String, card: &CurrentCard) {
    let _ = writeln!(out, "{}", card.condition);
    let _ = writeln!(out, "  {}", card.temperature);
    let _ = writeln!(out, "  {}", card.feels_like);
    let _ = writeln!(out, "  Humidity:    {}", card.humidity);
    let _ = writeln!(out, "  Wind Speed:  {}", card.wind_speed);
    let _ = writeln!(out, "  Temperature: {}", card.temperature);
}

fn forecast(out: &mut String, cards: &[ForecastCard]) {
    for card in cards {
        let _ = writeln!(
            out,
            "{:<12} {:>5}  {:<10} rain {:>5}  wind {:>7}",
            card.date, card.high, card.low, card.precipitation, card.wind_speed
        );
    }
}

/// The weather-code table, one code per line.
pub fn codes() -> String {
    weather_code::KNOWN_CODES
        .iter()
        .map(|code| format!("{code:>3}  {}\n", weather_code::describe(*code)))
        .collect()
}
