//! Keybind registry
//!
//! Maps chords to interface actions and gates resolution behind a global
//! enable flag. Rebinding overwrites without unbinding the previous holder,
//! so two actions may share a chord; resolution then picks the first holder
//! in declaration order.

use hashbrown::HashMap;
use tracing::{info, warn};

use tempo_types::{ActionId, Chord, Keybind};

/// Built-in binds applied when no saved binds exist for an action.
fn default_chord(action: ActionId) -> Chord {
    match action {
        ActionId::PausePlayerTime => Chord::bare("space"),
        ActionId::StopEntityTime => Chord::bare("e"),
        ActionId::StopPartyTime => Chord::bare("r"),
        ActionId::SpendAp => Chord::bare("s"),
        ActionId::GiftAp => Chord::ctrl("g"),
    }
}

/// Chord-to-action lookup with a global enable gate.
#[derive(Debug, Clone)]
pub struct KeybindRegistry {
    binds: HashMap<ActionId, Keybind>,
    enabled: bool,
}

impl Default for KeybindRegistry {
    fn default() -> Self {
        Self::with_defaults()
    }
}

impl KeybindRegistry {
    /// Registry with the built-in bind for every action
    pub fn with_defaults() -> Self {
        let mut binds = HashMap::new();
        for action in ActionId::ALL {
            binds.insert(action, Keybind::new(action, default_chord(action)));
        }
        Self {
            binds,
            enabled: true,
        }
    }

    /// Registry seeded from saved binds; actions not covered keep their default
    pub fn from_binds(saved: &[Keybind]) -> Self {
        let mut registry = Self::with_defaults();
        for keybind in saved {
            registry
                .binds
                .insert(keybind.action, Keybind::new(keybind.action, keybind.chord.clone()));
        }
        registry
    }

    // --- Mutation ---

    /// Bind `action` to `chord`, overwriting its previous chord.
    ///
    /// Collisions with another action's chord are allowed: the other action
    /// keeps its bind and resolution order decides which one fires.
    pub fn bind(&mut self, action: ActionId, chord: Chord) {
        if let Some(holder) = self.holder_of(&chord) {
            if holder != action {
                warn!(
                    chord = %chord,
                    holder = holder.key(),
                    "[KEYBIND] Chord already bound to another action"
                );
            }
        }
        info!(action = action.key(), chord = %chord, "[KEYBIND] Bound action");
        self.binds.insert(action, Keybind::new(action, chord));
    }

    pub fn set_enabled(&mut self, enabled: bool) {
        self.enabled = enabled;
    }

    // --- Lookup ---

    /// Resolve a chord to an action. Always `None` while the registry
    /// is disabled.
    pub fn resolve(&self, chord: &Chord) -> Option<ActionId> {
        if !self.enabled {
            return None;
        }
        self.holder_of(chord)
    }

    /// First action bound to `chord`, in declaration order, ignoring the
    /// enable gate.
    pub fn holder_of(&self, chord: &Chord) -> Option<ActionId> {
        ActionId::ALL
            .into_iter()
            .find(|action| self.binds.get(action).is_some_and(|kb| &kb.chord == chord))
    }

    pub fn chord_for(&self, action: ActionId) -> Option<&Chord> {
        self.binds.get(&action).map(|kb| &kb.chord)
    }

    pub fn is_enabled(&self) -> bool {
        self.enabled
    }

    /// All binds in declaration order, for display and persistence
    pub fn binds(&self) -> Vec<Keybind> {
        ActionId::ALL
            .into_iter()
            .filter_map(|action| self.binds.get(&action).cloned())
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults_cover_every_action() {
        let registry = KeybindRegistry::with_defaults();
        for action in ActionId::ALL {
            assert!(
                registry.chord_for(action).is_some(),
                "missing default bind for {action:?}"
            );
        }
    }

    #[test]
    fn test_resolve_default_bind() {
        let registry = KeybindRegistry::with_defaults();
        assert_eq!(
            registry.resolve(&Chord::bare("space")),
            Some(ActionId::PausePlayerTime)
        );
        assert_eq!(registry.resolve(&Chord::ctrl("g")), Some(ActionId::GiftAp));
        assert_eq!(registry.resolve(&Chord::bare("z")), None);
    }

    #[test]
    fn test_rebind_overwrites() {
        let mut registry = KeybindRegistry::with_defaults();
        registry.bind(ActionId::SpendAp, Chord::bare("x"));

        assert_eq!(registry.resolve(&Chord::bare("x")), Some(ActionId::SpendAp));
        // Old chord no longer resolves to anything
        assert_eq!(registry.resolve(&Chord::bare("s")), None);
    }

    #[test]
    fn test_collision_keeps_both_binds() {
        let mut registry = KeybindRegistry::with_defaults();
        // "e" already belongs to StopEntityTime
        registry.bind(ActionId::SpendAp, Chord::bare("e"));

        assert_eq!(registry.chord_for(ActionId::SpendAp), Some(&Chord::bare("e")));
        assert_eq!(
            registry.chord_for(ActionId::StopEntityTime),
            Some(&Chord::bare("e"))
        );
        // Declaration order breaks the tie
        assert_eq!(
            registry.resolve(&Chord::bare("e")),
            Some(ActionId::StopEntityTime)
        );
    }

    #[test]
    fn test_disabled_registry_resolves_nothing() {
        let mut registry = KeybindRegistry::with_defaults();
        registry.set_enabled(false);

        assert_eq!(registry.resolve(&Chord::bare("space")), None);
        // Binds survive the gate
        assert_eq!(
            registry.chord_for(ActionId::PausePlayerTime),
            Some(&Chord::bare("space"))
        );

        registry.set_enabled(true);
        assert_eq!(
            registry.resolve(&Chord::bare("space")),
            Some(ActionId::PausePlayerTime)
        );
    }

    #[test]
    fn test_from_binds_overlays_defaults() {
        let saved = vec![Keybind::new(ActionId::GiftAp, Chord::bare("f1"))];
        let registry = KeybindRegistry::from_binds(&saved);

        assert_eq!(registry.chord_for(ActionId::GiftAp), Some(&Chord::bare("f1")));
        // Unsaved actions keep their defaults
        assert_eq!(
            registry.chord_for(ActionId::SpendAp),
            Some(&Chord::bare("s"))
        );
    }

    #[test]
    fn test_binds_in_declaration_order() {
        let registry = KeybindRegistry::with_defaults();
        let actions: Vec<ActionId> = registry.binds().iter().map(|kb| kb.action).collect();
        assert_eq!(actions, ActionId::ALL.to_vec());
    }
}
