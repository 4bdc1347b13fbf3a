//! Capability traits for cross-solver observers.
//!
//! These traits abstract over solver-specific event and action types, enabling
//! observers to work generically across different solvers.
//!
//! # Event traits
//!
//! - [`HasIteration`]: events that carry a step or iteration counter
//! - [`HasTime`]: events that carry a simulation time
//! - [`HasObjective`]: events that carry an objective value
//!
//! # Action traits
//!
//! - [`CanStopEarly`]: actions that can signal early termination
//!
//! # Example
//!
//! ```rust
//! use stepwise_core::Observer;
//! use stepwise_observers::traits::{CanStopEarly, HasTime};
//!
//! struct Deadline {
//!     t_max: f64,
//! }
//!
//! impl<E: HasTime, A: CanStopEarly> Observer<E, A> for Deadline {
//!     fn observe(&mut self, event: &E) -> Option<A> {
//!         (event.time() >= self.t_max).then(A::stop_early)
//!     }
//! }
//! ```

use stepwise_solvers::{optimization::descent, transient::euler};

/// An event that carries a step or iteration counter.
pub trait HasIteration {
    /// Returns the counter for this event.
    fn iteration(&self) -> usize;
}

/// An event that carries a simulation time.
pub trait HasTime {
    /// Returns the time for this event.
    fn time(&self) -> f64;
}

/// An event that carries an objective value.
pub trait HasObjective {
    /// Returns the objective for this event.
    fn objective(&self) -> f64;
}

/// An action type that can signal early termination.
pub trait CanStopEarly {
    /// Returns the action that stops the solver early.
    fn stop_early() -> Self;
}

// --- euler ---

impl HasIteration for euler::Event<'_> {
    fn iteration(&self) -> usize {
        self.step
    }
}

impl HasTime for euler::Event<'_> {
    fn time(&self) -> f64 {
        self.time
    }
}

impl CanStopEarly for euler::Action {
    fn stop_early() -> Self {
        Self::StopEarly
    }
}

// --- descent ---

impl HasIteration for descent::Event<'_> {
    fn iteration(&self) -> usize {
        self.iter
    }
}

impl HasObjective for descent::Event<'_> {
    fn objective(&self) -> f64 {
        self.objective
    }
}

impl CanStopEarly for descent::Action {
    fn stop_early() -> Self {
        Self::StopEarly
    }
}
