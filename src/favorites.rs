use std::fs;
use std::io::ErrorKind;
use std::path::PathBuf;

use tracing::debug;

use crate::error::AppError;

/// Ordered set of favorite city names, persisted as a JSON array.
/// Membership is exact-string; insertion order is preserved.
#[derive(Debug)]
pub struct Favorites {
    path: PathBuf,
    cities: Vec<String>,
}

impl Favorites {
    /// Load the list from `path`. A missing file means an empty list;
    /// an unreadable or corrupt file is an error, not a silent reset.
    pub fn load(path: PathBuf) -> Result<Self, AppError> {
        let cities = match fs::read_to_string(&path) {
            Ok(raw) => serde_json::from_str(&raw)?,
            Err(err) if err.kind() == ErrorKind::NotFound => Vec::new(),
            Err(err) => return Err(err.into()),
        };
        debug!("Loaded {} favorite cities from {}", cities.len(), path.display());
        Ok(Self { path, cities })
    }

    /// Remove the city if present, append it otherwise; persist
    /// immediately. Returns whether the city is now a favorite.
    pub fn toggle(&mut self, city: &str) -> Result<bool, AppError> {
        let added = match self.cities.iter().position(|c| c == city) {
            Some(index) => {
                self.cities.remove(index);
                false
            }
            None => {
                self.cities.push(city.to_string());
                true
            }
        };
        self.persist()?;
        Ok(added)
    }

    pub fn contains(&self, city: &str) -> bool {
        self.cities.iter().any(|c| c == city)
    }

    /// 0-indexed lookup, used by the `go <n>` command (1-indexed there).
    pub fn get(&self, index: usize) -> Option<&str> {
        self.cities.get(index).map(String::as_str)
    }

    pub fn iter(&self) -> impl Iterator<Item = &str> {
        self.cities.iter().map(String::as_str)
    }

    pub fn is_empty(&self) -> bool {
        self.cities.is_empty()
    }

    fn persist(&self) -> Result<(), AppError> {
        if let Some(parent) = self.path.parent() {
            fs::create_dir_all(parent)?;
        }
        fs::write(&self.path, serde_json::to_string(&self.cities)?)?;
        debug!(
            "Persisted {} favorite cities to {}",
            self.cities.len(),
            self.path.display()
        );
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn store(dir: &tempfile::TempDir) -> Favorites {
        Favorites::load(dir.path().join("favorites.json")).unwrap()
    }

    #[test]
    fn missing_file_loads_an_empty_list() {
        let dir = tempfile::tempdir().unwrap();
        assert!(store(&dir).is_empty());
    }

    #[test]
    fn toggle_twice_restores_the_original_set() {
        let dir = tempfile::tempdir().unwrap();
        let mut favorites = store(&dir);

        assert!(favorites.toggle("Paris").unwrap());
        assert!(favorites.contains("Paris"));

        assert!(!favorites.toggle("Paris").unwrap());
        assert!(!favorites.contains("Paris"));
        assert!(favorites.is_empty());
    }

    #[test]
    fn every_toggle_is_persisted_immediately() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("favorites.json");

        let mut favorites = Favorites::load(path.clone()).unwrap();
        favorites.toggle("Paris").unwrap();
        favorites.toggle("London").unwrap();

        let reloaded = Favorites::load(path.clone()).unwrap();
        assert!(reloaded.contains("Paris"));
        assert!(reloaded.contains("London"));

        favorites.toggle("Paris").unwrap();
        let reloaded = Favorites::load(path).unwrap();
        assert!(!reloaded.contains("Paris"));
        assert!(reloaded.contains("London"));
    }

    #[test]
    fn insertion_order_is_preserved() {
        let dir = tempfile::tempdir().unwrap();
        let mut favorites = store(&dir);
        for city in ["Oslo", "Lima", "Cairo"] {
            favorites.toggle(city).unwrap();
        }
        let listed: Vec<&str> = favorites.iter().collect();
        assert_eq!(listed, vec!["Oslo", "Lima", "Cairo"]);
        assert_eq!(favorites.get(1), Some("Lima"));
    }

    #[test]
    fn corrupt_file_is_an_error_not_a_reset() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("favorites.json");
        fs::write(&path, "not json").unwrap();
        assert!(matches!(Favorites::load(path), Err(AppError::JsonError(_))));
    }
}
