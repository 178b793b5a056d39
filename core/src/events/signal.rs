use tempo_types::{ActionId, Chord};

/// Signals emitted by the engine for cross-cutting concerns.
/// These represent "interesting things that happened" at a higher level
/// than raw commands: every variant reflects a state change that has
/// already landed.
#[derive(Debug, Clone, PartialEq)]
pub enum InterfaceSignal {
    // Resource changes
    PlayerApChanged {
        ap: u32,
        max_ap: u32,
    },
    EntityApChanged {
        entity_id: String,
        ap: u32,
        max_ap: u32,
    },
    PartyMemberApChanged {
        member_id: String,
        ap: u32,
        max_ap: u32,
    },
    ApTransferred {
        member_id: String,
        amount: u32,
    },

    // Group stop flags
    PlayerTimePauseToggled {
        paused: bool,
    },
    EntityTimeStopToggled {
        stopped: bool,
    },
    PartyTimeStopToggled {
        stopped: bool,
    },

    // Settings
    GiftAmountChanged {
        amount: u32,
    },
    KeybindChanged {
        action: ActionId,
        chord: Chord,
    },
    KeybindsEnabledChanged {
        enabled: bool,
    },
}
