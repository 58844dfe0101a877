use std::fs;
use std::io;
use std::path::{Path, PathBuf};

use crate::leaderboard::Standings;

const APP_DIR_NAME: &str = "snake-arcade";
const STANDINGS_FILE_NAME: &str = "standings.json";

/// Returns the platform-correct standings file path.
#[must_use]
pub fn standings_path() -> PathBuf {
    let mut base = dirs::data_local_dir().unwrap_or_else(|| PathBuf::from("."));
    base.push(APP_DIR_NAME);
    base.push(STANDINGS_FILE_NAME);
    base
}

/// Loads standings from disk.
///
/// Returns empty standings when the file does not yet exist (first run).
/// Returns `Err` when the file exists but cannot be read or parsed, so the
/// caller can surface a warning before entering raw terminal mode.
pub fn load_standings() -> io::Result<Standings> {
    load_standings_from_path(&standings_path())
}

/// Saves standings to disk, creating parent directories when needed.
pub fn save_standings(standings: &Standings) -> io::Result<()> {
    save_standings_to_path(&standings_path(), standings)
}

pub fn load_standings_from_path(path: &Path) -> io::Result<Standings> {
    let raw = match fs::read_to_string(path) {
        Ok(raw) => raw,
        Err(e) if e.kind() == io::ErrorKind::NotFound => return Ok(Standings::default()),
        Err(e) => return Err(e),
    };

    serde_json::from_str::<Standings>(&raw).map_err(|e| io::Error::new(io::ErrorKind::InvalidData, e))
}

pub fn save_standings_to_path(path: &Path, standings: &Standings) -> io::Result<()> {
    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent)?;
    }

    let json = serde_json::to_string_pretty(standings)
        .map_err(|error| io::Error::new(io::ErrorKind::InvalidData, error))?;

    fs::write(path, json)
}
