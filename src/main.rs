mod api;
mod config;
mod error;
mod favorites;
mod forecast;
mod format;
mod render;

use std::io::Write;

use chrono::Utc;
use tracing::debug;
use tracing_subscriber::EnvFilter;

use crate::api::ForecastEntry;
use crate::config::Config;
use crate::error::AppError;
use crate::favorites::Favorites;
use crate::forecast::{NOON_HOUR, Pager, SortMode};
use crate::render::Theme;

/// UI-bound state of the session, owned by the controller and passed
/// explicitly. The daily summary, page cursor and sort mode are fully
/// replaced on every successful search; theme survives across searches.
#[derive(Debug, Default)]
struct Session {
    /// Last successfully searched city, as the user typed it
    city: Option<String>,
    /// Daily summary derived from the most recent forecast fetch
    daily: Vec<ForecastEntry>,
    pager: Pager,
    sort: SortMode,
    theme: Theme,
}

/// One user action per input line. Anything that is not a known command
/// word is treated as a city search.
#[derive(Debug, PartialEq)]
enum Command<'a> {
    Search(&'a str),
    More,
    Sort(&'a str),
    ToggleFavorite,
    ListFavorites,
    Go(&'a str),
    Theme,
    Help,
    Exit,
}

fn parse_command(line: &str) -> Command<'_> {
    let trimmed = line.trim();
    let (word, rest) = match trimmed.split_once(char::is_whitespace) {
        Some((word, rest)) => (word, rest.trim()),
        None => (trimmed, ""),
    };

    match (word.to_ascii_lowercase().as_str(), rest) {
        ("exit", "") | ("quit", "") => Command::Exit,
        ("more", "") => Command::More,
        ("sort", mode) => Command::Sort(mode),
        ("fav", "") => Command::ToggleFavorite,
        ("favorites", "") | ("favs", "") => Command::ListFavorites,
        ("go", index) => Command::Go(index),
        ("theme", "") => Command::Theme,
        ("help", "") => Command::Help,
        // command words shadow same-named cities
        _ => Command::Search(trimmed),
    }
}

/// City names must be non-empty after trimming and limited to letters,
/// whitespace and hyphens. Anything else is rejected before any
/// network call.
fn validate_city(city: &str) -> Result<(), AppError> {
    let trimmed = city.trim();
    if trimmed.is_empty() {
        return Err(AppError::EmptyCity);
    }
    if !trimmed
        .chars()
        .all(|c| c.is_ascii_alphabetic() || c.is_whitespace() || c == '-')
    {
        return Err(AppError::InvalidCity);
    }
    Ok(())
}

/// The full search flow: validate, drop the previous results, fetch
/// both endpoints concurrently, derive the views and render. An error
/// anywhere leaves favorites and theme untouched and renders nothing;
/// error and render are mutually exclusive outcomes.
async fn run_search(
    client: &reqwest::Client,
    config: &Config,
    favorites: &Favorites,
    session: &mut Session,
    city: &str,
) -> Result<(), AppError> {
    validate_city(city)?;

    session.city = None;
    session.daily.clear();
    session.pager.reset();
    session.sort = SortMode::default();

    let (weather, forecast) = api::fetch_both(client, config, city).await?;

    let now = Utc::now().naive_utc();
    let hourly = forecast::hourly_segments(&forecast.list, now);
    session.daily = forecast::daily_forecast(&forecast.list, NOON_HOUR);
    session.city = Some(city.trim().to_string());
    debug!(
        "Derived {} daily entries and {} hourly segments from {} samples",
        session.daily.len(),
        hourly.len(),
        forecast.list.len()
    );

    println!();
    println!(
        "{}",
        render::current_card(&weather, favorites.contains(city.trim()), session.theme)
    );
    println!();
    println!("{}", render::hourly_strip(&hourly, session.theme));
    print_daily(session);
    Ok(())
}

fn print_daily(session: &Session) {
    let visible = forecast::visible_daily(&session.daily, session.pager, session.sort);
    println!(
        "{}",
        render::daily_cards(
            &visible,
            session.pager.has_more(session.daily.len()),
            session.theme
        )
    );
}

fn print_help() {
    println!("Type a city name to look up current conditions and the 5-day forecast.");
    println!(
        "Commands: more | sort <date|temp-asc|temp-desc> | fav | favorites | go <n> | theme | help | exit"
    );
}

/// The main function initializes the tracing subscriber, loads the
/// configuration and favorites, and enters a read loop dispatching one
/// command per line until the user inputs "exit". Searches are
/// serialized by the loop: a submission completes or fails before the
/// next line is read, so overlapping searches cannot occur.
#[tokio::main]
async fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .init();

    let config = Config::from_env()?;
    let mut favorites = Favorites::load(config::favorites_path())?;
    let client = reqwest::Client::new();
    let mut session = Session::default();

    print_help();

    let mut buffer = String::new();
    loop {
        print!("> ");
        std::io::stdout().flush()?;

        buffer.clear();
        if std::io::stdin().read_line(&mut buffer)? == 0 {
            break;
        }
        let line = buffer.trim();
        if line.is_empty() {
            continue;
        }

        match parse_command(line) {
            Command::Exit => break,
            Command::Help => print_help(),
            Command::Search(city) => {
                if let Err(err) = run_search(&client, &config, &favorites, &mut session, city).await
                {
                    println!("{}", err);
                }
            }
            Command::More => {
                if session.daily.is_empty() {
                    println!("Search for a city first.");
                } else if !session.pager.has_more(session.daily.len()) {
                    println!("No more forecast days.");
                } else {
                    session.pager.advance();
                    print_daily(&session);
                }
            }
            Command::Sort(mode) => match SortMode::parse(mode) {
                Some(sort) => {
                    session.sort = sort;
                    if session.daily.is_empty() {
                        println!("Sort mode set.");
                    } else {
                        print_daily(&session);
                    }
                }
                None => println!("Sort modes: date, temp-asc, temp-desc"),
            },
            Command::ToggleFavorite => match session.city.clone() {
                Some(city) => {
                    if favorites.toggle(&city)? {
                        println!("Added {} to favorites.", city);
                    } else {
                        println!("Removed {} from favorites.", city);
                    }
                }
                None => println!("Search for a city first."),
            },
            Command::ListFavorites => println!("{}", render::favorites_bar(favorites.iter())),
            Command::Go(index) => match index.parse::<usize>().ok().and_then(|n| n.checked_sub(1)) {
                None => println!("Usage: go <number> (see `favorites`)"),
                Some(i) => match favorites.get(i).map(str::to_string) {
                    None => println!("{}", AppError::UnknownFavorite(i + 1)),
                    Some(city) => {
                        if let Err(err) =
                            run_search(&client, &config, &favorites, &mut session, &city).await
                        {
                            println!("{}", err);
                        }
                    }
                },
            },
            Command::Theme => {
                session.theme = session.theme.toggled();
                println!("Theme: {}", session.theme.name());
            }
        }
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_city_is_rejected() {
        assert!(matches!(validate_city(""), Err(AppError::EmptyCity)));
        assert!(matches!(validate_city("   "), Err(AppError::EmptyCity)));
    }

    #[test]
    fn plain_and_hyphenated_names_pass() {
        assert!(validate_city("New York").is_ok());
        assert!(validate_city("Los Angeles").is_ok());
        assert!(validate_city("Winston-Salem").is_ok());
    }

    #[test]
    fn names_with_other_punctuation_are_rejected() {
        assert!(matches!(validate_city("Sao_Paulo"), Err(AppError::InvalidCity)));
        assert!(matches!(validate_city("Paris;"), Err(AppError::InvalidCity)));
        assert!(matches!(validate_city("City123"), Err(AppError::InvalidCity)));
    }

    #[test]
    fn bare_words_parse_as_searches() {
        assert_eq!(parse_command("London"), Command::Search("London"));
        assert_eq!(parse_command("  New York "), Command::Search("New York"));
    }

    #[test]
    fn command_words_parse_as_commands() {
        assert_eq!(parse_command("more"), Command::More);
        assert_eq!(parse_command("sort temp-asc"), Command::Sort("temp-asc"));
        assert_eq!(parse_command("fav"), Command::ToggleFavorite);
        assert_eq!(parse_command("favorites"), Command::ListFavorites);
        assert_eq!(parse_command("go 2"), Command::Go("2"));
        assert_eq!(parse_command("theme"), Command::Theme);
        assert_eq!(parse_command("EXIT"), Command::Exit);
    }

    #[test]
    fn command_words_with_stray_arguments_fall_back_to_search() {
        assert_eq!(parse_command("more please"), Command::Search("more please"));
    }
}
