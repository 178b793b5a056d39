//! Persisted keybind management.
//!
//! Reads and writes the saved bind list through [`AppSettings`]; the
//! registry supplies defaults for actions with no saved override.

use tempo_core::{AppSettings, KeybindRegistry};
use tempo_types::{ActionId, Chord};

pub fn list() -> Result<(), String> {
    let settings = AppSettings::load();
    let registry = KeybindRegistry::from_binds(&settings.keybinds);

    println!("{:<24} {:<10} Chord", "Action", "Category");
    for bind in registry.binds() {
        println!(
            "{:<24} {:<10} {}",
            bind.action.label(),
            bind.category.to_string(),
            bind.chord,
        );
    }
    Ok(())
}

pub fn set(action: &str, chord: &str) -> Result<(), String> {
    let action: ActionId = action.parse().map_err(|e| format!("error: {e}"))?;
    let chord: Chord = chord.parse().map_err(|e| format!("error: {e}"))?;

    let mut settings = AppSettings::load();
    let mut registry = KeybindRegistry::from_binds(&settings.keybinds);
    registry.bind(action, chord.clone());
    settings.keybinds = registry.binds();
    settings.store().map_err(|e| e.to_string())?;

    println!("{} bound to {}", action.label(), chord);
    Ok(())
}

pub fn reset() -> Result<(), String> {
    let mut settings = AppSettings::load();
    settings.keybinds.clear();
    settings.store().map_err(|e| e.to_string())?;

    println!("Keybinds reset to defaults");
    Ok(())
}
