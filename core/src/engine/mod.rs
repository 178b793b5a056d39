//! Interface engine
//!
//! This module provides:
//! - **Commands**: Every mutation of interface state, as plain data
//! - **Coordinator**: Owns the state, the time bars, and the keybind
//!   registry; dispatches commands and steps the simulation
//!
//! # Architecture
//!
//! ```text
//! ┌──────────────────────────────────────────────────────────┐
//! │                  Command (user intent)                   │
//! │   "Spend 2 AP", "Toggle party stop", "Rebind gift key"   │
//! └──────────────────────────────────────────────────────────┘
//!                             │
//!                      Engine::execute
//!                             │
//!                             ▼
//! ┌──────────────────────────────────────────────────────────┐
//! │            InterfaceState + TimeBars (storage)           │
//! │   "Player 7/10 AP, grunt bar 43% filled, party stopped"  │
//! └──────────────────────────────────────────────────────────┘
//!                             │
//!                             ▼
//!                 InterfaceSignal → listeners
//! ```
//!
//! `Engine::tick` drives the bars on a caller-chosen timestep; completions
//! feed back through the same gain paths commands use.

mod command;
pub mod coordinator;


pub use command::Command;
pub use coordinator::Engine;
