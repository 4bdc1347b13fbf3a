//! Observers that end a run early.

use stepwise_core::Observer;

use crate::traits::{CanStopEarly, HasIteration, HasObjective};

/// Stops a solver once an event reports the given iteration.
///
/// For the Euler integrator the counter is the step index, so
/// `StopAfter::new(5)` keeps samples `0..=5`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct StopAfter {
    limit: usize,
}

impl StopAfter {
    #[must_use]
    pub fn new(limit: usize) -> Self {
        Self { limit }
    }
}

impl<E: HasIteration, A: CanStopEarly> Observer<E, A> for StopAfter {
    fn observe(&mut self, event: &E) -> Option<A> {
        (event.iteration() >= self.limit).then(A::stop_early)
    }
}

/// Stops a solver once the objective falls below a target.
///
/// The event's objective is the value at the start of the iteration, so the
/// solver still takes that iteration's step before stopping.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ObjectiveBelow {
    target: f64,
}

impl ObjectiveBelow {
    #[must_use]
    pub fn new(target: f64) -> Self {
        Self { target }
    }
}

impl<E: HasObjective, A: CanStopEarly> Observer<E, A> for ObjectiveBelow {
    fn observe(&mut self, event: &E) -> Option<A> {
        (event.objective() < self.target).then(A::stop_early)
    }
}
