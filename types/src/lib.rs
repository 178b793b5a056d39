pub mod entity;
pub mod formatting;
pub mod keybind;

// Re-exports for convenience
pub use entity::EntityConfig;
pub use keybind::{ActionId, Chord, ChordParseError, Keybind, KeybindCategory};
