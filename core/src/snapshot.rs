//! Read-only snapshots of engine state.
//!
//! These types define the contract for external consumers: the render
//! loop, machine-readable simulation output, and anything else that wants
//! the whole interface in one stable shape.

use serde::{Deserialize, Serialize};

use tempo_types::{EntityConfig, Keybind};

use crate::engine::Engine;
use crate::timebar::{FillInputs, TimeBar};

/// One bar's worth of display state
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct BarSnapshot {
    pub id: String,
    pub name: String,
    pub color: [u8; 4],
    pub ap: u32,
    pub max_ap: u32,
    /// Fill percentage, 0.0 through 100.0
    pub fill: f64,
    /// True when the bar is currently held still, whatever the reason
    pub paused: bool,
    /// Milliseconds until the next completion at the current speed
    pub remaining_ms: f64,
}

impl BarSnapshot {
    fn from_parts(config: &EntityConfig, bar: &TimeBar, inputs: FillInputs) -> Self {
        Self {
            id: config.id.clone(),
            name: config.name.clone(),
            color: config.color,
            ap: config.ap,
            max_ap: config.max_ap,
            fill: bar.fill(),
            paused: bar.is_paused(inputs),
            remaining_ms: bar.remaining_ms(),
        }
    }
}

/// Full interface state at one instant
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct StateSnapshot {
    pub player: BarSnapshot,
    pub entities: Vec<BarSnapshot>,
    pub party: Vec<BarSnapshot>,
    pub player_time_paused: bool,
    pub entity_time_stopped: bool,
    pub party_time_stopped: bool,
    pub keybinds_enabled: bool,
    pub gift_amount: u32,
    pub keybinds: Vec<Keybind>,
}

impl StateSnapshot {
    pub fn from_engine(engine: &Engine) -> Self {
        let state = engine.state();

        let player = BarSnapshot::from_parts(
            state.player(),
            engine.player_bar(),
            FillInputs {
                stop_fill: state.player_time_paused,
                ap: state.player_ap(),
                max_ap: state.max_player_ap(),
            },
        );

        let entities = state
            .entities()
            .iter()
            .filter_map(|config| {
                engine.entity_bar(&config.id).map(|bar| {
                    BarSnapshot::from_parts(
                        config,
                        bar,
                        FillInputs {
                            stop_fill: state.entity_time_stopped,
                            ap: config.ap,
                            max_ap: config.max_ap,
                        },
                    )
                })
            })
            .collect();

        let party = state
            .party()
            .iter()
            .filter_map(|config| {
                engine.party_bar(&config.id).map(|bar| {
                    BarSnapshot::from_parts(
                        config,
                        bar,
                        FillInputs {
                            stop_fill: state.party_time_stopped,
                            ap: config.ap,
                            max_ap: config.max_ap,
                        },
                    )
                })
            })
            .collect();

        Self {
            player,
            entities,
            party,
            player_time_paused: state.player_time_paused,
            entity_time_stopped: state.entity_time_stopped,
            party_time_stopped: state.party_time_stopped,
            keybinds_enabled: engine.registry().is_enabled(),
            gift_amount: state.gift_amount,
            keybinds: engine.registry().binds(),
        }
    }

    /// Serialize to a single JSON line
    pub fn to_json(&self) -> Result<String, serde_json::Error> {
        serde_json::to_string(self)
    }
}
