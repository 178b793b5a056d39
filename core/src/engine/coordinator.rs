//! Central coordinator for interface state, time bars, and keybinds.
//!
//! All mutation flows through [`Engine::execute`]; reads go through the
//! accessors or a snapshot. Listeners registered on the engine see every
//! signal after the mutation that produced it has landed.

use hashbrown::HashMap;
use tracing::{debug, info, warn};

use tempo_types::{ActionId, Chord};

use crate::config::{AppSettings, Scenario};
use crate::events::{InterfaceSignal, SignalListener};
use crate::keybinds::KeybindRegistry;
use crate::state::InterfaceState;
use crate::timebar::{FillInputs, TickOutcome, TimeBar};

use super::command::Command;

/// Owns all interface state and routes every mutation.
///
/// The engine holds one [`TimeBar`] per roster entry. Bars never read state
/// themselves; the engine assembles [`FillInputs`] for each bar on every
/// tick, so pause flags and caps always reflect the current moment.
pub struct Engine {
    state: InterfaceState,
    player_bar: TimeBar,
    entity_bars: HashMap<String, TimeBar>,
    party_bars: HashMap<String, TimeBar>,
    registry: KeybindRegistry,
    listeners: Vec<Box<dyn SignalListener>>,
}

impl std::fmt::Debug for Engine {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Engine")
            .field("entities", &self.entity_bars.keys().collect::<Vec<_>>())
            .field("party", &self.party_bars.keys().collect::<Vec<_>>())
            .field("listeners", &self.listeners.len())
            .finish()
    }
}

impl Engine {
    pub fn new(scenario: Scenario, settings: &AppSettings) -> Self {
        let player_bar = TimeBar::from_config(&scenario.player);
        let entity_bars = scenario
            .entities
            .iter()
            .map(|config| (config.id.clone(), TimeBar::from_config(config)))
            .collect();
        let party_bars = scenario
            .party
            .iter()
            .map(|config| (config.id.clone(), TimeBar::from_config(config)))
            .collect();

        Self {
            state: InterfaceState::new(
                scenario.player,
                scenario.entities,
                scenario.party,
                settings.gift_amount,
            ),
            player_bar,
            entity_bars,
            party_bars,
            registry: KeybindRegistry::from_binds(&settings.keybinds),
            listeners: Vec::new(),
        }
    }

    /// Engine over the built-in roster with default settings
    pub fn with_defaults() -> Self {
        Self::new(Scenario::default(), &AppSettings::default())
    }

    // --- Listeners ---

    pub fn add_listener(&mut self, listener: Box<dyn SignalListener>) {
        self.listeners.push(listener);
    }

    fn publish(&mut self, signals: Vec<InterfaceSignal>) {
        for signal in &signals {
            for listener in &mut self.listeners {
                listener.handle_signal(signal);
            }
        }
    }

    // --- Command Dispatch ---

    /// Apply a command and notify listeners of every resulting signal
    pub fn execute(&mut self, command: Command) {
        let signals = self.apply(command);
        self.publish(signals);
    }

    fn apply(&mut self, command: Command) -> Vec<InterfaceSignal> {
        match command {
            Command::GainPlayerAp(amount) => self.gain_player_ap(amount),
            Command::SpendPlayerAp(amount) => self.spend_quiet(amount).1,
            Command::GainEntityAp { entity_id, amount } => self.gain_entity_ap(&entity_id, amount),
            Command::GainPartyMemberAp { member_id, amount } => {
                self.gain_party_member_ap(&member_id, amount)
            }
            Command::GiveApToPartyMember { member_id } => {
                self.give_ap_to_party_member(&member_id)
            }
            Command::TogglePlayerTimePause => {
                self.state.player_time_paused = !self.state.player_time_paused;
                info!(
                    paused = self.state.player_time_paused,
                    "[ENGINE] Player time pause toggled"
                );
                vec![InterfaceSignal::PlayerTimePauseToggled {
                    paused: self.state.player_time_paused,
                }]
            }
            Command::ToggleEntityTimeStop => {
                self.state.entity_time_stopped = !self.state.entity_time_stopped;
                info!(
                    stopped = self.state.entity_time_stopped,
                    "[ENGINE] Entity time stop toggled"
                );
                vec![InterfaceSignal::EntityTimeStopToggled {
                    stopped: self.state.entity_time_stopped,
                }]
            }
            Command::TogglePartyTimeStop => {
                self.state.party_time_stopped = !self.state.party_time_stopped;
                info!(
                    stopped = self.state.party_time_stopped,
                    "[ENGINE] Party time stop toggled"
                );
                vec![InterfaceSignal::PartyTimeStopToggled {
                    stopped: self.state.party_time_stopped,
                }]
            }
            Command::SetGiftAmount(amount) => {
                self.state.gift_amount = amount;
                vec![InterfaceSignal::GiftAmountChanged { amount }]
            }
            Command::ChangeKeybind { action, chord } => {
                self.registry.bind(action, chord.clone());
                vec![InterfaceSignal::KeybindChanged { action, chord }]
            }
            Command::SetKeybindsEnabled(enabled) => {
                self.registry.set_enabled(enabled);
                info!(enabled, "[ENGINE] Keybinds toggled");
                vec![InterfaceSignal::KeybindsEnabledChanged { enabled }]
            }
        }
    }

    // --- Resources ---

    fn gain_player_ap(&mut self, amount: u32) -> Vec<InterfaceSignal> {
        let max_ap = self.state.max_player_ap();
        let player = self.state.player_mut();
        let before = player.ap;
        player.ap = player.ap.saturating_add(amount).min(max_ap);
        if player.ap == before {
            return Vec::new();
        }
        vec![InterfaceSignal::PlayerApChanged {
            ap: player.ap,
            max_ap,
        }]
    }

    /// Spend without publishing. Shared by the command path and transfers,
    /// which interleave spends with their own signals.
    fn spend_quiet(&mut self, amount: u32) -> (bool, Vec<InterfaceSignal>) {
        if amount == 0 {
            return (true, Vec::new());
        }
        let max_ap = self.state.max_player_ap();
        let player = self.state.player_mut();
        if player.ap < amount {
            debug!(
                requested = amount,
                available = player.ap,
                "[ENGINE] Spend rejected, insufficient action points"
            );
            return (false, Vec::new());
        }
        player.ap -= amount;
        (
            true,
            vec![InterfaceSignal::PlayerApChanged {
                ap: player.ap,
                max_ap,
            }],
        )
    }

    /// Spend player action points. Returns `false` and leaves state
    /// untouched when the player holds fewer points than requested.
    pub fn spend_player_ap(&mut self, amount: u32) -> bool {
        let (ok, signals) = self.spend_quiet(amount);
        self.publish(signals);
        ok
    }

    fn gain_entity_ap(&mut self, entity_id: &str, amount: u32) -> Vec<InterfaceSignal> {
        let Some(entity) = self.state.entity_mut(entity_id) else {
            warn!(entity_id, "[ENGINE] Gain for unknown entity");
            return Vec::new();
        };
        let before = entity.ap;
        entity.ap = entity.ap.saturating_add(amount).min(entity.max_ap);
        if entity.ap == before {
            return Vec::new();
        }
        vec![InterfaceSignal::EntityApChanged {
            entity_id: entity.id.clone(),
            ap: entity.ap,
            max_ap: entity.max_ap,
        }]
    }

    fn gain_party_member_ap(&mut self, member_id: &str, amount: u32) -> Vec<InterfaceSignal> {
        let Some(member) = self.state.party_member_mut(member_id) else {
            warn!(member_id, "[ENGINE] Gain for unknown party member");
            return Vec::new();
        };
        let before = member.ap;
        member.ap = member.ap.saturating_add(amount).min(member.max_ap);
        if member.ap == before {
            return Vec::new();
        }
        vec![InterfaceSignal::PartyMemberApChanged {
            member_id: member.id.clone(),
            ap: member.ap,
            max_ap: member.max_ap,
        }]
    }

    /// Move up to `gift_amount` points from the player to a party member,
    /// one point at a time. Each step re-checks the spend so a concurrent
    /// shortfall stops the transfer at however many points actually moved.
    fn give_ap_to_party_member(&mut self, member_id: &str) -> Vec<InterfaceSignal> {
        let gift_amount = self.state.gift_amount;
        let player_ap = self.state.player_ap();
        let Some(member) = self.state.party_member(member_id) else {
            warn!(member_id, "[ENGINE] Gift for unknown party member");
            return Vec::new();
        };

        let transferable = gift_amount.min(player_ap).min(member.headroom());
        if transferable == 0 {
            info!(member_id, "[ENGINE] Gift skipped, nothing to transfer");
            return Vec::new();
        }

        let mut signals = Vec::new();
        let mut moved = 0;
        for _ in 0..transferable {
            let (ok, mut spend_signals) = self.spend_quiet(1);
            if !ok {
                break;
            }
            signals.append(&mut spend_signals);

            let Some(member) = self.state.party_member_mut(member_id) else {
                break;
            };
            member.ap = member.ap.saturating_add(1).min(member.max_ap);
            signals.push(InterfaceSignal::PartyMemberApChanged {
                member_id: member.id.clone(),
                ap: member.ap,
                max_ap: member.max_ap,
            });
            moved += 1;
        }

        if moved > 0 {
            info!(member_id, amount = moved, "[ENGINE] Gifted action points");
            signals.push(InterfaceSignal::ApTransferred {
                member_id: member_id.to_string(),
                amount: moved,
            });
        }
        signals
    }

    // --- Simulation ---

    /// Advance every bar by `delta_ms` and apply completion gains.
    ///
    /// Bars step player first, then entities, then party members, in roster
    /// order. Gains from a group's completions land after that group has
    /// finished stepping, so no bar sees a mid-tick cap change from a
    /// sibling in the same group.
    pub fn tick(&mut self, delta_ms: f64) {
        let mut signals = Vec::new();

        let inputs = FillInputs {
            stop_fill: self.state.player_time_paused,
            ap: self.state.player_ap(),
            max_ap: self.state.max_player_ap(),
        };
        if self.player_bar.advance(delta_ms, inputs) == TickOutcome::Completed {
            signals.extend(self.gain_player_ap(1));
        }

        let mut completed: Vec<String> = Vec::new();
        for config in self.state.entities() {
            let Some(bar) = self.entity_bars.get_mut(&config.id) else {
                continue;
            };
            let inputs = FillInputs {
                stop_fill: self.state.entity_time_stopped,
                ap: config.ap,
                max_ap: config.max_ap,
            };
            if bar.advance(delta_ms, inputs) == TickOutcome::Completed {
                completed.push(config.id.clone());
            }
        }
        for id in completed.drain(..) {
            signals.extend(self.gain_entity_ap(&id, 1));
        }

        for config in self.state.party() {
            let Some(bar) = self.party_bars.get_mut(&config.id) else {
                continue;
            };
            let inputs = FillInputs {
                stop_fill: self.state.party_time_stopped,
                ap: config.ap,
                max_ap: config.max_ap,
            };
            if bar.advance(delta_ms, inputs) == TickOutcome::Completed {
                completed.push(config.id.clone());
            }
        }
        for id in completed.drain(..) {
            signals.extend(self.gain_party_member_ap(&id, 1));
        }

        self.publish(signals);
    }

    // --- Keybinds ---

    /// Resolve a chord and run its action. Returns the action that fired,
    /// or `None` when the chord is unbound or keybinds are disabled.
    pub fn press(&mut self, chord: &Chord) -> Option<ActionId> {
        let action = self.registry.resolve(chord)?;
        let command = match action {
            ActionId::PausePlayerTime => Command::TogglePlayerTimePause,
            ActionId::StopEntityTime => Command::ToggleEntityTimeStop,
            ActionId::StopPartyTime => Command::TogglePartyTimeStop,
            ActionId::SpendAp => Command::SpendPlayerAp(1),
            ActionId::GiftAp => {
                // Gift targets the first party member with headroom
                let target = self
                    .state
                    .party()
                    .iter()
                    .find(|member| !member.is_capped())
                    .or_else(|| self.state.party().first())
                    .map(|member| member.id.clone());
                let Some(member_id) = target else {
                    info!("[ENGINE] Gift pressed with no party members");
                    return Some(action);
                };
                Command::GiveApToPartyMember { member_id }
            }
        };
        self.execute(command);
        Some(action)
    }

    // --- Accessors ---

    pub fn state(&self) -> &InterfaceState {
        &self.state
    }

    pub fn registry(&self) -> &KeybindRegistry {
        &self.registry
    }

    pub fn player_bar(&self) -> &TimeBar {
        &self.player_bar
    }

    pub fn entity_bar(&self, id: &str) -> Option<&TimeBar> {
        self.entity_bars.get(id)
    }

    pub fn party_bar(&self, id: &str) -> Option<&TimeBar> {
        self.party_bars.get(id)
    }
}
