use std::fs;
use std::path::PathBuf;

use crate::location::Location;

/// Session file holding the current location string.
///
/// The navigation store is the sole writer. Read failures mean "no stored
/// location"; write failures are logged and swallowed. Losing a shareable
/// location must never disturb the session itself.
pub struct LocationCarrier {
    path: PathBuf,
}

impl LocationCarrier {
    /// Carrier at `<state dir>/moviedeck/location` (data dir when the
    /// platform has no state dir, current dir as a last resort).
    pub fn at_default_path() -> Self {
        let base = dirs::state_dir()
            .or_else(dirs::data_dir)
            .unwrap_or_else(|| PathBuf::from("."));
        Self {
            path: base.join("moviedeck").join("location"),
        }
    }

    pub fn at(path: PathBuf) -> Self {
        Self { path }
    }

    pub fn load(&self) -> Option<Location> {
        let content = fs::read_to_string(&self.path).ok()?;
        let trimmed = content.trim();
        if trimmed.is_empty() {
            return None;
        }
        Some(Location::parse(trimmed))
    }

    pub fn store(&self, location: &Location) {
        if let Some(parent) = self.path.parent() {
            if let Err(err) = fs::create_dir_all(parent) {
                tracing::warn!(%err, path = %self.path.display(), "cannot create location dir");
                return;
            }
        }
        if let Err(err) = fs::write(&self.path, location.encode()) {
            tracing::warn!(%err, path = %self.path.display(), "cannot store location");
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn store_then_load_round_trips() {
        let dir = tempfile::TempDir::new().unwrap();
        let carrier = LocationCarrier::at(dir.path().join("location"));

        carrier.store(&Location::details(42));
        assert_eq!(carrier.load(), Some(Location::details(42)));
    }

    #[test]
    fn missing_file_loads_nothing() {
        let dir = tempfile::TempDir::new().unwrap();
        let carrier = LocationCarrier::at(dir.path().join("absent"));
        assert!(carrier.load().is_none());
    }

    #[test]
    fn empty_file_loads_nothing() {
        let dir = tempfile::TempDir::new().unwrap();
        let path = dir.path().join("location");
        fs::write(&path, "  \n").unwrap();
        assert!(LocationCarrier::at(path).load().is_none());
    }

    #[test]
    fn store_overwrites_previous_location() {
        let dir = tempfile::TempDir::new().unwrap();
        let carrier = LocationCarrier::at(dir.path().join("location"));

        carrier.store(&Location::details(1));
        carrier.store(&Location::home());
        assert_eq!(carrier.load(), Some(Location::home()));
    }
}
