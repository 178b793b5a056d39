pub mod cache;

pub use cache::InterfaceState;
