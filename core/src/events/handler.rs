use super::signal::InterfaceSignal;

/// Trait for components that react to engine signals.
///
/// Listeners are registered on the engine and receive every signal after
/// the mutation that produced it has been applied. Handlers must not
/// assume any ordering between listeners.
pub trait SignalListener {
    fn handle_signal(&mut self, signal: &InterfaceSignal);
}
