// web_app/api/config.rs - Host configuration
//
// Values come from the process environment, optionally seeded from a `.env`
// file. Leptos' own site settings are read separately from Cargo.toml.

use std::env;
use std::path::PathBuf;

/// Environment variable naming the roster file
pub const MENTORS_FILE_VAR: &str = "MENTORS_FILE";

/// Roster file used when `MENTORS_FILE` is unset
pub const DEFAULT_MENTORS_FILE: &str = "data/mentors.json";

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct HostConfig {
    /// JSON file holding `{"mentors": [...]}`
    pub mentors_file: PathBuf,
}

impl HostConfig {
    /// Load `.env` (if present) and read the configuration
    pub fn from_env() -> Self {
        dotenv::dotenv().ok();
        Self::from_lookup(|key| env::var(key).ok())
    }

    /// Build the configuration from an arbitrary variable lookup
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Self {
        let mentors_file = lookup(MENTORS_FILE_VAR)
            .filter(|value| !value.trim().is_empty())
            .unwrap_or_else(|| DEFAULT_MENTORS_FILE.to_string());

        HostConfig {
            mentors_file: PathBuf::from(mentors_file),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_mentors_file() {
        let config = HostConfig::from_lookup(|_| None);
        assert_eq!(config.mentors_file, PathBuf::from("data/mentors.json"));
    }

    #[test]
    fn test_blank_value_uses_default() {
        let config = HostConfig::from_lookup(|_| Some("  ".to_string()));
        assert_eq!(config.mentors_file, PathBuf::from(DEFAULT_MENTORS_FILE));
    }

    #[test]
    fn test_override() {
        let config = HostConfig::from_lookup(|key| {
            (key == MENTORS_FILE_VAR).then(|| "/srv/roster.json".to_string())
        });
        assert_eq!(config.mentors_file, PathBuf::from("/srv/roster.json"));
    }
}
