use stepwise_core::State;

/// Event emitted by the Euler solver for each time sample.
///
/// Step 0 is the initial condition before any integration.
/// Steps 1..N are emitted after each sample is computed.
#[derive(Debug, Clone, Copy)]
pub struct Event<'a> {
    /// The sample index (0 for the initial condition).
    pub step: usize,

    /// Mesh time of this sample.
    pub time: f64,

    /// State values at this sample.
    pub state: &'a State,
}
