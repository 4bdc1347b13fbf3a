use ndarray::{Array1, ArrayD};

/// Indicates how the solver terminated.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Status {
    /// Filled every sample of the time mesh.
    Complete,

    /// Stopped early due to an observer action.
    StoppedByObserver,
}

/// The result of an Euler integration.
#[derive(Debug, Clone)]
pub struct Solution {
    /// How the solver terminated.
    pub status: Status,

    /// Mesh times of the returned samples.
    pub times: Array1<f64>,

    /// One trajectory per state entry, in order.
    ///
    /// Each trajectory's leading axis indexes the samples in `times` and its
    /// remaining axes match the entry's shape. Sample 0 is the initial
    /// condition.
    pub trajectories: Vec<ArrayD<f64>>,

    /// Number of integration steps completed.
    pub steps: usize,

    /// End of the last step interval on the full mesh, `t_start + n_steps * dt`.
    ///
    /// This may exceed the requested stop time.
    pub final_time: f64,
}
