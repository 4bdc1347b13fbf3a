use ndarray::Array1;
use thiserror::Error;

/// A uniform time mesh for fixed-step integration.
///
/// The mesh holds `n_steps = ceil((t_stop - t_start) / dt)` samples at
/// `t_start + i * dt`. Rounding up means the integration always reaches or
/// passes `t_stop`; the mesh is never shortened to land on it exactly.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct TimeMesh {
    t_start: f64,
    dt: f64,
    n_steps: usize,
}

/// Errors that can occur when building a [`TimeMesh`].
#[derive(Debug, Error, Clone, Copy, PartialEq)]
pub enum MeshError {
    #[error("time step must be finite and positive, got {0}")]
    Step(f64),

    #[error("start and stop times must be finite")]
    NonFinite,

    #[error("stop time {t_stop} must be greater than start time {t_start}")]
    Interval { t_start: f64, t_stop: f64 },

    #[error("mesh would need more samples than can be allocated")]
    TooManySteps,
}

impl TimeMesh {
    /// Creates a mesh covering `[t_start, t_stop]` with step `dt`.
    ///
    /// # Errors
    ///
    /// Returns an error if `dt` is not finite and positive, if either bound
    /// is not finite, or if `t_stop <= t_start`.
    pub fn new(t_start: f64, t_stop: f64, dt: f64) -> Result<Self, MeshError> {
        if !dt.is_finite() || dt <= 0.0 {
            return Err(MeshError::Step(dt));
        }
        if !t_start.is_finite() || !t_stop.is_finite() {
            return Err(MeshError::NonFinite);
        }
        if t_stop <= t_start {
            return Err(MeshError::Interval { t_start, t_stop });
        }

        let steps = ((t_stop - t_start) / dt).ceil();
        if !steps.is_finite() || steps >= usize::MAX as f64 {
            return Err(MeshError::TooManySteps);
        }

        #[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
        let n_steps = steps as usize;

        Ok(Self {
            t_start,
            dt,
            n_steps,
        })
    }

    /// Returns the start time.
    #[must_use]
    pub fn t_start(&self) -> f64 {
        self.t_start
    }

    /// Returns the time step.
    #[must_use]
    pub fn dt(&self) -> f64 {
        self.dt
    }

    /// Returns the number of samples in the mesh.
    #[must_use]
    pub fn n_steps(&self) -> usize {
        self.n_steps
    }

    /// Returns `t_start + n_steps * dt`, which may exceed the requested stop time.
    #[must_use]
    pub fn final_time(&self) -> f64 {
        self.time(self.n_steps)
    }

    /// Returns the time of sample `index`.
    #[must_use]
    #[allow(clippy::cast_precision_loss)]
    pub fn time(&self, index: usize) -> f64 {
        self.t_start + index as f64 * self.dt
    }

    /// Returns every sample time, in order.
    #[must_use]
    pub fn times(&self) -> Array1<f64> {
        Array1::from_shape_fn(self.n_steps, |i| self.time(i))
    }
}
