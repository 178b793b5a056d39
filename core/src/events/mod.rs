pub mod handler;
pub mod signal;

pub use handler::SignalListener;
pub use signal::InterfaceSignal;
