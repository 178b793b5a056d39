//! Key chord and keybind configuration types.
//!
//! Chords round-trip through a canonical `"Ctrl+Shift+G"` form so they can
//! live in settings files as plain strings. Binding state and dispatch live
//! in the core registry; these are the shared shapes.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// A bindable interface action.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ActionId {
    PausePlayerTime,
    StopEntityTime,
    StopPartyTime,
    SpendAp,
    GiftAp,
}

impl ActionId {
    /// All bindable actions, in settings display order.
    pub const ALL: [ActionId; 5] = [
        ActionId::PausePlayerTime,
        ActionId::StopEntityTime,
        ActionId::StopPartyTime,
        ActionId::SpendAp,
        ActionId::GiftAp,
    ];

    /// Stable settings-file name (matches the serde representation).
    pub fn key(&self) -> &'static str {
        match self {
            ActionId::PausePlayerTime => "pause_player_time",
            ActionId::StopEntityTime => "stop_entity_time",
            ActionId::StopPartyTime => "stop_party_time",
            ActionId::SpendAp => "spend_ap",
            ActionId::GiftAp => "gift_ap",
        }
    }

    /// Human-readable label for settings display.
    pub fn label(&self) -> &'static str {
        match self {
            ActionId::PausePlayerTime => "Pause Player Time",
            ActionId::StopEntityTime => "Stop Entity Time",
            ActionId::StopPartyTime => "Stop Party Time",
            ActionId::SpendAp => "Spend Action Point",
            ActionId::GiftAp => "Gift Action Points",
        }
    }

    pub fn category(&self) -> KeybindCategory {
        match self {
            ActionId::PausePlayerTime | ActionId::StopEntityTime | ActionId::StopPartyTime => {
                KeybindCategory::Timing
            }
            ActionId::SpendAp | ActionId::GiftAp => KeybindCategory::Resource,
        }
    }
}

impl fmt::Display for ActionId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.key())
    }
}

impl FromStr for ActionId {
    type Err = ChordParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "pause_player_time" => Ok(ActionId::PausePlayerTime),
            "stop_entity_time" => Ok(ActionId::StopEntityTime),
            "stop_party_time" => Ok(ActionId::StopPartyTime),
            "spend_ap" => Ok(ActionId::SpendAp),
            "gift_ap" => Ok(ActionId::GiftAp),
            other => Err(ChordParseError::new(format!("unknown action: {other}"))),
        }
    }
}

/// Settings-display grouping for keybinds.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum KeybindCategory {
    Timing,
    Resource,
}

impl fmt::Display for KeybindCategory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            KeybindCategory::Timing => f.write_str("Timing"),
            KeybindCategory::Resource => f.write_str("Resource"),
        }
    }
}

/// A parsed key chord: modifier set plus one key name.
///
/// Keys are stored lowercase so `"Ctrl+G"` and `"ctrl+g"` compare equal;
/// `Display` re-emits the canonical `Ctrl+Alt+Shift+Key` order.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct Chord {
    pub ctrl: bool,
    pub alt: bool,
    pub shift: bool,
    key: String,
}

impl Chord {
    /// Bare key with no modifiers.
    pub fn bare(key: &str) -> Self {
        Self {
            ctrl: false,
            alt: false,
            shift: false,
            key: key.to_lowercase(),
        }
    }

    /// Ctrl + key.
    pub fn ctrl(key: &str) -> Self {
        Self {
            ctrl: true,
            ..Self::bare(key)
        }
    }

    pub fn key(&self) -> &str {
        &self.key
    }
}

impl fmt::Display for Chord {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.ctrl {
            f.write_str("Ctrl+")?;
        }
        if self.alt {
            f.write_str("Alt+")?;
        }
        if self.shift {
            f.write_str("Shift+")?;
        }
        // Single letters display uppercase, longer key names capitalized
        let mut chars = self.key.chars();
        match chars.next() {
            Some(first) => {
                for c in first.to_uppercase() {
                    write!(f, "{c}")?;
                }
                f.write_str(chars.as_str())
            }
            None => Ok(()),
        }
    }
}

impl FromStr for Chord {
    type Err = ChordParseError;

    /// Parse a `"Ctrl+Shift+G"` style chord string.
    ///
    /// Modifier names are case-insensitive (`ctrl`/`control` both work);
    /// exactly one non-modifier key must appear, conventionally last.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let mut ctrl = false;
        let mut alt = false;
        let mut shift = false;
        let mut key: Option<String> = None;

        for part in s.split('+') {
            let part = part.trim();
            if part.is_empty() {
                return Err(ChordParseError::new(format!("empty segment in chord: {s:?}")));
            }
            match part.to_lowercase().as_str() {
                "ctrl" | "control" => ctrl = true,
                "alt" => alt = true,
                "shift" => shift = true,
                k => {
                    if key.is_some() {
                        return Err(ChordParseError::new(format!(
                            "chord has more than one key: {s:?}"
                        )));
                    }
                    key = Some(k.to_string());
                }
            }
        }

        let Some(key) = key else {
            return Err(ChordParseError::new(format!("chord has no key: {s:?}")));
        };

        Ok(Chord {
            ctrl,
            alt,
            shift,
            key,
        })
    }
}

impl TryFrom<String> for Chord {
    type Error = ChordParseError;

    fn try_from(s: String) -> Result<Self, Self::Error> {
        s.parse()
    }
}

impl From<Chord> for String {
    fn from(chord: Chord) -> String {
        chord.to_string()
    }
}

/// Failure to parse a chord or action name.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ChordParseError {
    message: String,
}

impl ChordParseError {
    fn new(message: String) -> Self {
        Self { message }
    }
}

impl fmt::Display for ChordParseError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.message)
    }
}

impl std::error::Error for ChordParseError {}

/// One configured binding: action, chord, and its settings category.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Keybind {
    pub action: ActionId,
    pub chord: Chord,
    pub category: KeybindCategory,
}

impl Keybind {
    pub fn new(action: ActionId, chord: Chord) -> Self {
        Self {
            action,
            chord,
            category: action.category(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_chord_parse_basic() {
        let chord: Chord = "Ctrl+Shift+G".parse().unwrap();
        assert!(chord.ctrl);
        assert!(chord.shift);
        assert!(!chord.alt);
        assert_eq!(chord.key(), "g");
    }

    #[test]
    fn test_chord_parse_case_insensitive() {
        let a: Chord = "ctrl+g".parse().unwrap();
        let b: Chord = "CONTROL+G".parse().unwrap();
        assert_eq!(a, b);
    }

    #[test]
    fn test_chord_display_canonical_order() {
        let chord: Chord = "shift+ctrl+f5".parse().unwrap();
        assert_eq!(chord.to_string(), "Ctrl+Shift+F5");
        let bare: Chord = "space".parse().unwrap();
        assert_eq!(bare.to_string(), "Space");
    }

    #[test]
    fn test_chord_rejects_malformed() {
        assert!("".parse::<Chord>().is_err());
        assert!("Ctrl+".parse::<Chord>().is_err());
        assert!("Ctrl+Shift".parse::<Chord>().is_err(), "modifier-only chord");
        assert!("Ctrl+A+B".parse::<Chord>().is_err(), "two keys");
    }

    #[test]
    fn test_chord_roundtrip_through_string() {
        let original: Chord = "Alt+Shift+P".parse().unwrap();
        let displayed = original.to_string();
        let reparsed: Chord = displayed.parse().unwrap();
        assert_eq!(original, reparsed);
    }

    #[test]
    fn test_chord_serde_as_string() {
        #[derive(Serialize, Deserialize)]
        struct Settings {
            chord: Chord,
        }

        let settings = Settings {
            chord: "ctrl+shift+g".parse().unwrap(),
        };
        let toml_str = toml::to_string(&settings).unwrap();
        assert!(toml_str.contains("\"Ctrl+Shift+G\""), "serialized form: {toml_str}");

        let back: Settings = toml::from_str(&toml_str).unwrap();
        assert_eq!(back.chord, settings.chord);
    }

    #[test]
    fn test_action_id_roundtrip() {
        for action in ActionId::ALL {
            let parsed: ActionId = action.key().parse().unwrap();
            assert_eq!(parsed, action);
        }
        assert!("jump".parse::<ActionId>().is_err());
    }

    #[test]
    fn test_keybind_carries_category() {
        let bind = Keybind::new(ActionId::GiftAp, Chord::ctrl("g"));
        assert_eq!(bind.category, KeybindCategory::Resource);
        let bind = Keybind::new(ActionId::PausePlayerTime, Chord::bare("p"));
        assert_eq!(bind.category, KeybindCategory::Timing);
    }
}
