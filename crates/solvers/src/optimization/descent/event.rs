use ndarray::Array1;

use crate::optimization::line_search::Step;

/// Event emitted by the descent solver once per iteration.
///
/// Emitted after the line search has chosen the next point but before the
/// solver moves to it.
#[derive(Debug, Clone, Copy)]
pub struct Event<'a> {
    /// The iteration number, starting at 1.
    pub iter: usize,

    /// The point at the start of the iteration.
    pub x: &'a Array1<f64>,

    /// Objective value at `x`.
    pub objective: f64,

    /// Gradient at `x`, zero on fixed components.
    pub gradient: &'a Array1<f64>,

    /// The step chosen by the line search.
    pub step: &'a Step,

    /// Relative change of the objective from the previous iteration.
    pub rel_change: f64,
}
