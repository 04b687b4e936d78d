//! Thin rendering adapter: turns the derived view models into printable
//! text cards. All functions build strings; printing stays in `main`.

use crate::api::{Condition, CurrentWeather, ForecastEntry};
use crate::forecast::HourlySegment;
use crate::format;

const RULE: &str = "────────────────────────────────────────";

/// Light/dark rendering style; affects styling only, never the data.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Theme {
    #[default]
    Light,
    Dark,
}

impl Theme {
    pub fn toggled(self) -> Self {
        match self {
            Self::Light => Self::Dark,
            Self::Dark => Self::Light,
        }
    }

    pub fn name(self) -> &'static str {
        match self {
            Self::Light => "light",
            Self::Dark => "dark",
        }
    }

    fn heading(self, text: &str) -> String {
        match self {
            Self::Light => format!("\x1b[1m{}\x1b[0m", text),
            Self::Dark => format!("\x1b[1;36m{}\x1b[0m", text),
        }
    }
}

fn condition_line(conditions: &[Condition]) -> String {
    match conditions.first() {
        Some(c) => format!("{} ({})", c.main, format::capitalize(&c.description)),
        None => String::new(),
    }
}

/// The current-conditions card. `is_favorite` drives the star marker.
pub fn current_card(weather: &CurrentWeather, is_favorite: bool, theme: Theme) -> String {
    let star = if is_favorite { "★" } else { "☆" };
    let mut card = String::new();
    card.push_str(RULE);
    card.push('\n');
    card.push_str(&format!("{} {}\n", theme.heading(&weather.name), star));
    card.push_str(&format!("{}\n", condition_line(&weather.weather)));
    card.push_str(&format!(
        "🌡️ {}°C   💧 Humidity: {}%\n",
        format::round_degrees(weather.main.temp),
        weather.main.humidity
    ));
    card.push_str(RULE);
    card
}

/// The visible daily cards plus the "load more" hint when pages remain.
pub fn daily_cards(visible: &[ForecastEntry], has_more: bool, theme: Theme) -> String {
    let mut out = String::new();
    out.push_str(&theme.heading("5-Day Forecast"));
    out.push('\n');

    for entry in visible {
        let label = entry
            .timestamp()
            .map(format::date_label)
            .unwrap_or_else(|| entry.dt_txt.clone());
        out.push_str(&format!("  {}\n", theme.heading(&label)));
        out.push_str(&format!("    {}\n", condition_line(&entry.weather)));
        out.push_str(&format!(
            "    {}°C   💧 {}%\n",
            format::round_degrees(entry.main.temp),
            entry.main.humidity
        ));
        if let Some(c) = entry.weather.first() {
            out.push_str(&format!("    {}\n", format::icon_url_large(&c.icon)));
        }
    }

    if has_more {
        out.push_str("  (type `more` for more days)\n");
    }
    out
}

/// The hourly strip: one line per 4-hour segment, near to far, with the
/// signed delta against the previous segment.
pub fn hourly_strip(segments: &[HourlySegment], theme: Theme) -> String {
    let mut out = String::new();
    out.push_str(&theme.heading("Next 24 Hours"));
    out.push('\n');

    for segment in segments {
        let hour = segment
            .entry
            .timestamp()
            .map(format::hour_label)
            .unwrap_or_else(|| segment.entry.dt_txt.clone());
        let icon = segment
            .entry
            .weather
            .first()
            .map(|c| format::icon_url_small(&c.icon))
            .unwrap_or_default();
        out.push_str(&format!(
            "  {}  {}°  {:>4}  {}\n",
            hour,
            format::round_degrees(segment.entry.main.temp),
            format::delta_label(segment.delta),
            icon
        ));
    }
    out
}

/// The favorites bar listed with 1-indexed positions for `go <n>`.
pub fn favorites_bar<'a>(cities: impl Iterator<Item = &'a str>) -> String {
    let listed: Vec<String> = cities
        .enumerate()
        .map(|(i, city)| format!("  {}. {}", i + 1, city))
        .collect();
    if listed.is_empty() {
        "No favorites saved yet.".to_string()
    } else {
        listed.join("\n")
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::api::Measurements;

    fn weather() -> CurrentWeather {
        CurrentWeather {
            name: "London".to_string(),
            main: Measurements {
                temp: 15.6,
                humidity: 72,
            },
            weather: vec![Condition {
                main: "Clouds".to_string(),
                description: "scattered clouds".to_string(),
                icon: "03d".to_string(),
            }],
        }
    }

    #[test]
    fn current_card_shows_rounded_temp_and_capitalized_description() {
        let card = current_card(&weather(), false, Theme::Light);
        assert!(card.contains("16°C"));
        assert!(card.contains("Humidity: 72%"));
        assert!(card.contains("Clouds (Scattered clouds)"));
        assert!(card.contains('☆'));
    }

    #[test]
    fn current_card_marks_favorites() {
        let card = current_card(&weather(), true, Theme::Dark);
        assert!(card.contains('★'));
    }

    #[test]
    fn daily_cards_hint_at_more_pages_only_when_they_remain() {
        let visible = Vec::new();
        assert!(daily_cards(&visible, true, Theme::Light).contains("more"));
        assert!(!daily_cards(&visible, false, Theme::Light).contains("(type"));
    }

    #[test]
    fn favorites_bar_is_one_indexed() {
        let bar = favorites_bar(["Paris", "Oslo"].into_iter());
        assert!(bar.contains("1. Paris"));
        assert!(bar.contains("2. Oslo"));
    }

    #[test]
    fn empty_favorites_bar_has_a_notice() {
        assert_eq!(favorites_bar(std::iter::empty()), "No favorites saved yet.");
    }
}
