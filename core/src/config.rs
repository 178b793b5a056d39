//! Configuration loading for settings and scenarios
//!
//! Two layers of configuration:
//! - **Settings**: gift amount, keybinds, scenario path. Persisted through
//!   confy in the platform config directory.
//! - **Scenario**: the roster of timed entities. Plain TOML files loaded
//!   from disk, with a built-in roster used when no file is given.

use std::fs;
use std::path::{Path, PathBuf};

use hashbrown::HashSet;
use serde::{Deserialize, Serialize};
use thiserror::Error;
use tracing::{info, warn};

use tempo_types::{EntityConfig, Keybind};

/// Fill duration of the built-in player bar, in milliseconds
pub const DEFAULT_PLAYER_SEGMENT_MS: f64 = 5000.0;

/// Action point cap of the built-in player
pub const DEFAULT_PLAYER_MAX_AP: u32 = 10;

/// Action points moved per gift unless settings say otherwise
pub const DEFAULT_GIFT_AMOUNT: u32 = 1;

/// Errors that can occur during config loading
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("io error reading {path:?}: {source}")]
    Io {
        path: PathBuf,
        source: std::io::Error,
    },
    #[error("parse error in {path:?}: {source}")]
    Parse {
        path: PathBuf,
        source: toml::de::Error,
    },
    #[error("duplicate entity ids: {ids:?}")]
    DuplicateIds { ids: Vec<String> },
    #[error("settings store error: {0}")]
    Settings(#[from] confy::ConfyError),
}

// ─────────────────────────────────────────────────────────────────────────────
// Scenario
// ─────────────────────────────────────────────────────────────────────────────

/// A roster of timed entities: the player, opposing entities, and party
/// members. Every id must be unique across all three groups.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Scenario {
    pub player: EntityConfig,
    #[serde(default)]
    pub entities: Vec<EntityConfig>,
    #[serde(default)]
    pub party: Vec<EntityConfig>,
}

impl Default for Scenario {
    fn default() -> Self {
        Self {
            player: EntityConfig::new(
                "player",
                "Player",
                DEFAULT_PLAYER_MAX_AP,
                DEFAULT_PLAYER_SEGMENT_MS,
            ),
            entities: vec![
                EntityConfig {
                    slow_bar: Some(0.5),
                    color: [178, 34, 34, 255],
                    ..EntityConfig::new("grunt", "Grunt", 5, 3000.0)
                },
                EntityConfig {
                    fast_bar: Some(1.25),
                    color: [255, 140, 0, 255],
                    ..EntityConfig::new("brute", "Brute", 8, 6000.0)
                },
                EntityConfig {
                    stop_fill_ms: 1500.0,
                    color: [148, 0, 211, 255],
                    ..EntityConfig::new("warden", "Warden", 6, 4500.0)
                },
            ],
            party: vec![
                EntityConfig {
                    color: [34, 139, 34, 255],
                    ..EntityConfig::new("ranger", "Ranger", 6, 4000.0)
                },
                EntityConfig {
                    slow_bar: Some(0.8),
                    color: [70, 130, 180, 255],
                    ..EntityConfig::new("cleric", "Cleric", 4, 6000.0)
                },
            ],
        }
    }
}

impl Scenario {
    /// Load and validate a scenario from a TOML file
    pub fn load_file(path: &Path) -> Result<Self, ConfigError> {
        let contents = fs::read_to_string(path).map_err(|e| ConfigError::Io {
            path: path.to_path_buf(),
            source: e,
        })?;

        let scenario: Self = toml::from_str(&contents).map_err(|e| ConfigError::Parse {
            path: path.to_path_buf(),
            source: e,
        })?;
        scenario.validate()?;

        info!(
            path = %path.display(),
            entities = scenario.entities.len(),
            party = scenario.party.len(),
            "[CONFIG] Loaded scenario"
        );
        Ok(scenario)
    }

    /// Parse a scenario from TOML text without validating ids
    pub fn from_toml_str(toml_str: &str) -> Result<Self, toml::de::Error> {
        toml::from_str(toml_str)
    }

    /// Reject rosters where the same id appears twice
    pub fn validate(&self) -> Result<(), ConfigError> {
        let mut seen = HashSet::new();
        let mut duplicates = Vec::new();

        for config in self.all_configs() {
            if !seen.insert(config.id.as_str()) {
                duplicates.push(config.id.clone());
            }
        }

        if duplicates.is_empty() {
            Ok(())
        } else {
            Err(ConfigError::DuplicateIds { ids: duplicates })
        }
    }

    fn all_configs(&self) -> impl Iterator<Item = &EntityConfig> {
        std::iter::once(&self.player)
            .chain(self.entities.iter())
            .chain(self.party.iter())
    }
}

// ─────────────────────────────────────────────────────────────────────────────
// App Settings
// ─────────────────────────────────────────────────────────────────────────────

/// Persisted application settings
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AppSettings {
    /// Action points moved by one gift command
    pub gift_amount: u32,
    /// Scenario file to load on startup; `None` means the built-in roster
    pub scenario_path: Option<PathBuf>,
    /// Saved keybind overrides; actions not listed keep their defaults
    #[serde(default)]
    pub keybinds: Vec<Keybind>,
}

impl Default for AppSettings {
    fn default() -> Self {
        Self {
            gift_amount: DEFAULT_GIFT_AMOUNT,
            scenario_path: None,
            keybinds: Vec::new(),
        }
    }
}

impl AppSettings {
    /// Load settings from the platform config directory, falling back to
    /// defaults when missing or unreadable
    pub fn load() -> Self {
        match confy::load("tempo", None) {
            Ok(settings) => settings,
            Err(e) => {
                warn!(error = %e, "[CONFIG] Failed to load settings, using defaults");
                Self::default()
            }
        }
    }

    /// Persist settings to the platform config directory
    pub fn store(&self) -> Result<(), ConfigError> {
        confy::store("tempo", None, self)?;
        info!("[CONFIG] Settings saved");
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_scenario_toml() {
        let toml = r#"
[player]
id = "player"
name = "Hero"
max_ap = 12
segment_ms = 4000.0

[[entities]]
id = "ogre"
name = "Ogre"
max_ap = 5
segment_ms = 7000.0
slow_bar = 0.6

[[party]]
id = "bard"
name = "Bard"
max_ap = 8
segment_ms = 3500.0
stop_fill_ms = 1000.0
"#;

        let scenario = Scenario::from_toml_str(toml).unwrap();
        assert_eq!(scenario.player.name, "Hero");
        assert_eq!(scenario.player.max_ap, 12);
        assert_eq!(scenario.entities.len(), 1);
        assert_eq!(scenario.entities[0].slow_bar, Some(0.6));
        assert_eq!(scenario.party.len(), 1);
        assert_eq!(scenario.party[0].stop_fill_ms, 1000.0);
    }

    #[test]
    fn test_parse_scenario_player_only() {
        let toml = r#"
[player]
id = "player"
name = "Solo"
max_ap = 10
segment_ms = 5000.0
"#;

        let scenario = Scenario::from_toml_str(toml).unwrap();
        assert!(scenario.entities.is_empty());
        assert!(scenario.party.is_empty());
        assert!(scenario.validate().is_ok());
    }

    #[test]
    fn test_default_roster_validates() {
        let scenario = Scenario::default();
        assert!(scenario.validate().is_ok());
        assert_eq!(scenario.player.max_ap, DEFAULT_PLAYER_MAX_AP);
        assert_eq!(scenario.player.segment_ms, DEFAULT_PLAYER_SEGMENT_MS);
        assert!(!scenario.entities.is_empty());
        assert!(!scenario.party.is_empty());
    }

    #[test]
    fn test_duplicate_ids_rejected() {
        let toml = r#"
[player]
id = "dup"
name = "Player"
max_ap = 10
segment_ms = 5000.0

[[party]]
id = "dup"
name = "Copycat"
max_ap = 5
segment_ms = 3000.0
"#;

        let scenario = Scenario::from_toml_str(toml).unwrap();
        let err = scenario.validate().unwrap_err();
        match err {
            ConfigError::DuplicateIds { ids } => assert_eq!(ids, vec!["dup".to_string()]),
            other => panic!("expected DuplicateIds, got {other:?}"),
        }
    }

    #[test]
    fn test_settings_toml_round_trip() {
        let settings = AppSettings {
            gift_amount: 3,
            scenario_path: Some(PathBuf::from("rosters/arena.toml")),
            keybinds: Vec::new(),
        };

        let toml_str = toml::to_string(&settings).unwrap();
        let parsed: AppSettings = toml::from_str(&toml_str).unwrap();
        assert_eq!(parsed.gift_amount, 3);
        assert_eq!(parsed.scenario_path, settings.scenario_path);
    }

    #[test]
    fn test_settings_defaults() {
        let settings = AppSettings::default();
        assert_eq!(settings.gift_amount, DEFAULT_GIFT_AMOUNT);
        assert!(settings.scenario_path.is_none());
        assert!(settings.keybinds.is_empty());
    }
}
