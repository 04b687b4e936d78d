//! Pure presentation rules shared by the renderer and the derivation
//! logic. No I/O here.

use chrono::{Datelike, NaiveDateTime, Timelike};

// Hosted icon set keyed by the feed's icon identifier
const ICON_BASE: &str = "https://openweathermap.org/img/wn";

/// Round a temperature to the nearest whole degree.
pub fn round_degrees(temp: f64) -> i64 {
    temp.round() as i64
}

/// Uppercase the first character only, leaving the rest unchanged.
pub fn capitalize(text: &str) -> String {
    let mut chars = text.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().collect::<String>() + chars.as_str(),
        None => String::new(),
    }
}

/// Date label in the form "Wed, Dec 24" (day-of-month not zero-padded).
pub fn date_label(timestamp: NaiveDateTime) -> String {
    format!(
        "{}, {} {}",
        timestamp.format("%a"),
        timestamp.format("%b"),
        timestamp.day()
    )
}

/// Zero-padded 24-hour label, "HH:00".
pub fn hour_label(timestamp: NaiveDateTime) -> String {
    format!("{:02}:00", timestamp.hour())
}

/// Signed whole-degree delta label: "" for no delta, "0°" for flat,
/// "+N°"/"-N°" otherwise.
pub fn delta_label(delta: Option<i64>) -> String {
    match delta {
        None => String::new(),
        Some(0) => "0°".to_string(),
        Some(d) if d > 0 => format!("+{}°", d),
        Some(d) => format!("{}°", d),
    }
}

/// 2x icon used on the daily cards.
pub fn icon_url_large(icon: &str) -> String {
    format!("{}/{}@2x.png", ICON_BASE, icon)
}

/// 1x icon used on the hourly strip.
pub fn icon_url_small(icon: &str) -> String {
    format!("{}/{}.png", ICON_BASE, icon)
}
