//! Console announcements for engine signals.
//!
//! One listener instance is registered by the interactive session; it
//! prints a timestamped line per signal, combat-log style.

use chrono::Local;

use tempo_core::{InterfaceSignal, SignalListener};
use tempo_types::formatting::format_ap;

#[derive(Debug, Default)]
pub struct Announcer;

impl Announcer {
    pub fn new() -> Self {
        Self::default()
    }

    fn say(&self, text: &str) {
        println!("[{}] {}", Local::now().format("%H:%M:%S"), text);
    }
}

impl SignalListener for Announcer {
    fn handle_signal(&mut self, signal: &InterfaceSignal) {
        match signal {
            InterfaceSignal::PlayerApChanged { ap, max_ap } => {
                self.say(&format!("Player AP {}", format_ap(*ap, *max_ap)));
            }
            InterfaceSignal::ApTransferred { member_id, amount } => {
                self.say(&format!("Gifted {amount} AP to {member_id}"));
            }
            InterfaceSignal::PlayerTimePauseToggled { paused } => {
                self.say(if *paused {
                    "Player time paused"
                } else {
                    "Player time resumed"
                });
            }
            InterfaceSignal::EntityTimeStopToggled { stopped } => {
                self.say(if *stopped {
                    "Entity time stopped"
                } else {
                    "Entity time resumed"
                });
            }
            InterfaceSignal::PartyTimeStopToggled { stopped } => {
                self.say(if *stopped {
                    "Party time stopped"
                } else {
                    "Party time resumed"
                });
            }
            InterfaceSignal::GiftAmountChanged { amount } => {
                self.say(&format!("Gift amount set to {amount}"));
            }
            InterfaceSignal::KeybindChanged { action, chord } => {
                self.say(&format!("{} bound to {}", action.label(), chord));
            }
            InterfaceSignal::KeybindsEnabledChanged { enabled } => {
                self.say(if *enabled {
                    "Keybinds enabled"
                } else {
                    "Keybinds disabled"
                });
            }
            // Per-bar gains land every few seconds; the status view covers them
            InterfaceSignal::EntityApChanged { .. } | InterfaceSignal::PartyMemberApChanged { .. } => {}
        }
    }
}
