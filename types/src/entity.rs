//! Static configuration for actors with an action-point bar.
//!
//! Entities are declared once (scenario file or built-in defaults) and the
//! set is fixed for the life of a session. Only `ap` changes at runtime,
//! and only through engine commands.

use serde::{Deserialize, Serialize};

/// One actor with an action-point resource bar.
///
/// `ap` counts whole resource units and never leaves `0..=max_ap`.
/// `segment_ms` is the time to fill one segment (one AP unit) at speed 1;
/// the engine clamps non-positive values at bar construction.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct EntityConfig {
    /// Unique identifier, stable for the entity's lifetime.
    pub id: String,
    /// Display label.
    pub name: String,
    /// RGBA display color, forwarded to snapshots untouched.
    #[serde(default = "default_color")]
    pub color: [u8; 4],
    /// Current action points.
    #[serde(default)]
    pub ap: u32,
    /// Action-point cap for this entity.
    pub max_ap: u32,
    /// Milliseconds to fill one segment at speed multiplier 1.
    pub segment_ms: f64,
    /// Optional slowdown multiplier; active when `0 < slow_bar < 1`.
    #[serde(default)]
    pub slow_bar: Option<f64>,
    /// Optional speedup multiplier; active when `fast_bar > 1`.
    #[serde(default)]
    pub fast_bar: Option<f64>,
    /// Rest countdown (ms) seeded when the bar pauses itself at the AP cap.
    /// Zero disables the countdown.
    #[serde(default)]
    pub stop_fill_ms: f64,
}

fn default_color() -> [u8; 4] {
    [255, 255, 255, 255]
}

impl EntityConfig {
    pub fn new(id: impl Into<String>, name: impl Into<String>, max_ap: u32, segment_ms: f64) -> Self {
        Self {
            id: id.into(),
            name: name.into(),
            color: default_color(),
            ap: 0,
            max_ap,
            segment_ms,
            slow_bar: None,
            fast_bar: None,
            stop_fill_ms: 0.0,
        }
    }

    /// Remaining AP capacity for this entity.
    pub fn headroom(&self) -> u32 {
        self.max_ap.saturating_sub(self.ap)
    }

    /// Whether the entity sits at its AP cap.
    pub fn is_capped(&self) -> bool {
        self.ap >= self.max_ap
    }
}
