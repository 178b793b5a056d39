pub mod config;
pub mod engine;
pub mod events;
pub mod keybinds;
pub mod snapshot;
pub mod state;
pub mod timebar;

// Re-exports for convenience
pub use config::{AppSettings, ConfigError, Scenario};
pub use engine::{Command, Engine};
pub use events::{InterfaceSignal, SignalListener};
pub use keybinds::KeybindRegistry;
pub use snapshot::{BarSnapshot, StateSnapshot};
pub use state::InterfaceState;
pub use timebar::{FillInputs, TickOutcome, TimeBar};
