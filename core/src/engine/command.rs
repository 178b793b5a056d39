use tempo_types::{ActionId, Chord};

/// Commands accepted by the engine.
///
/// All interface mutations flow through [`Command`] dispatch so that every
/// state change produces its signals in one place. Reads go through
/// [`crate::Engine`] accessors or a [`crate::StateSnapshot`].
#[derive(Debug, Clone, PartialEq)]
pub enum Command {
    /// Grant action points to the player, clamped at the cap
    GainPlayerAp(u32),
    /// Spend player action points; rejected without mutation when short
    SpendPlayerAp(u32),
    /// Grant action points to a named entity, clamped at its cap
    GainEntityAp { entity_id: String, amount: u32 },
    /// Grant action points to a named party member, clamped at its cap
    GainPartyMemberAp { member_id: String, amount: u32 },
    /// Move up to the configured gift amount from the player to a party member
    GiveApToPartyMember { member_id: String },
    /// Flip the pause flag for the player's time bar
    TogglePlayerTimePause,
    /// Flip the stop flag shared by all entity time bars
    ToggleEntityTimeStop,
    /// Flip the stop flag shared by all party member time bars
    TogglePartyTimeStop,
    /// Change how many action points a single gift moves
    SetGiftAmount(u32),
    /// Rebind an action to a new chord, overwriting any previous binding
    ChangeKeybind { action: ActionId, chord: Chord },
    /// Enable or disable chord resolution globally
    SetKeybindsEnabled(bool),
}
