use ndarray::Array1;

/// Indicates whether the solver converged or hit the iteration limit.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Status {
    /// The relative change of the objective fell below `rel_tol`.
    Converged,

    /// Reached the iteration limit without converging.
    MaxIters,

    /// Stopped early due to an observer decision.
    StoppedByObserver,
}

/// The result of a steepest descent run.
#[derive(Debug, Clone)]
pub struct Solution {
    /// Final solver status.
    pub status: Status,

    /// The last accepted point.
    pub x: Array1<f64>,

    /// Objective value at the start of the last iteration.
    ///
    /// This is the value at the point the final step was taken from, not at
    /// `x`. Evaluate the objective at `x` if the value there is needed.
    pub objective: f64,

    /// Iteration count when the solver finished.
    pub iters: usize,
}
