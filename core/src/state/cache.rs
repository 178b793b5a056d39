//! Interface state storage.

use tempo_types::EntityConfig;

/// Pure storage for interface state.
/// Routing logic lives in the engine's command dispatch.
#[derive(Debug, Clone)]
pub struct InterfaceState {
    // Player resource bar configuration (id "player")
    player: EntityConfig,

    // Fixed rosters; the sets never change within a session
    entities: Vec<EntityConfig>,
    party: Vec<EntityConfig>,

    // Group stop flags, each gating only its own bar group
    pub player_time_paused: bool,
    pub entity_time_stopped: bool,
    pub party_time_stopped: bool,

    /// Requested size for AP gifts to party members.
    pub gift_amount: u32,
}

impl InterfaceState {
    pub fn new(
        player: EntityConfig,
        entities: Vec<EntityConfig>,
        party: Vec<EntityConfig>,
        gift_amount: u32,
    ) -> Self {
        Self {
            player,
            entities,
            party,
            player_time_paused: false,
            entity_time_stopped: false,
            party_time_stopped: false,
            gift_amount,
        }
    }

    // --- Player ---

    pub fn player(&self) -> &EntityConfig {
        &self.player
    }

    pub fn player_mut(&mut self) -> &mut EntityConfig {
        &mut self.player
    }

    pub fn player_ap(&self) -> u32 {
        self.player.ap
    }

    pub fn max_player_ap(&self) -> u32 {
        self.player.max_ap
    }

    // --- Rosters ---

    pub fn entities(&self) -> &[EntityConfig] {
        &self.entities
    }

    pub fn party(&self) -> &[EntityConfig] {
        &self.party
    }

    pub fn entity(&self, id: &str) -> Option<&EntityConfig> {
        self.entities.iter().find(|e| e.id == id)
    }

    pub fn entity_mut(&mut self, id: &str) -> Option<&mut EntityConfig> {
        self.entities.iter_mut().find(|e| e.id == id)
    }

    pub fn party_member(&self, id: &str) -> Option<&EntityConfig> {
        self.party.iter().find(|m| m.id == id)
    }

    pub fn party_member_mut(&mut self, id: &str) -> Option<&mut EntityConfig> {
        self.party.iter_mut().find(|m| m.id == id)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn make_state() -> InterfaceState {
        InterfaceState::new(
            EntityConfig::new("player", "Player", 10, 5000.0),
            vec![EntityConfig::new("grunt", "Grunt", 5, 3000.0)],
            vec![EntityConfig::new("ranger", "Ranger", 6, 4000.0)],
            1,
        )
    }

    #[test]
    fn test_roster_lookup() {
        let mut state = make_state();
        assert!(state.entity("grunt").is_some());
        assert!(state.entity("ranger").is_none(), "party is a separate group");
        assert!(state.party_member("ranger").is_some());

        if let Some(grunt) = state.entity_mut("grunt") {
            grunt.ap = 2;
        }
        assert_eq!(state.entity("grunt").map(|e| e.ap), Some(2));
    }

    #[test]
    fn test_flags_start_cleared() {
        let state = make_state();
        assert!(!state.player_time_paused);
        assert!(!state.entity_time_stopped);
        assert!(!state.party_time_stopped);
    }
}
