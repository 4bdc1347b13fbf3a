use thiserror::Error;

use crate::optimization::line_search;

/// Configuration for the steepest descent solver.
///
/// Every option has a default; use the `with_*` methods to override one.
#[derive(Debug, Clone, PartialEq)]
pub struct Config {
    max_iters: usize,
    rel_tol: f64,
    fd_step: f64,
    objective_seed: f64,
    control_mask: Option<Vec<bool>>,
    line_search: line_search::Params,
}

/// Errors that can occur when validating a descent solver config.
#[derive(Debug, Error, Clone, Copy, PartialEq, Eq)]
pub enum ConfigError {
    #[error("max_iters must be at least 1")]
    MaxIters,

    #[error("rel_tol must be finite and non-negative")]
    RelTol,

    #[error("fd_step must be finite and positive")]
    FdStep,

    #[error("objective_seed must be finite and non-zero")]
    ObjectiveSeed,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            max_iters: 1_000_000,
            rel_tol: 1e-10,
            fd_step: 1e-4,
            objective_seed: 1e-6,
            control_mask: None,
            line_search: line_search::Params::default(),
        }
    }
}

impl Config {
    /// Creates a config with the given iteration limit and tolerance.
    ///
    /// All other options keep their defaults.
    ///
    /// # Errors
    ///
    /// Returns an error if `max_iters` is zero or `rel_tol` is negative or
    /// non-finite.
    pub fn new(max_iters: usize, rel_tol: f64) -> Result<Self, ConfigError> {
        if max_iters == 0 {
            return Err(ConfigError::MaxIters);
        }
        if !rel_tol.is_finite() || rel_tol < 0.0 {
            return Err(ConfigError::RelTol);
        }

        Ok(Self {
            max_iters,
            rel_tol,
            ..Self::default()
        })
    }

    /// Sets the finite difference step used when no analytic gradient is given.
    ///
    /// # Errors
    ///
    /// Returns an error if `fd_step` is not finite and positive.
    pub fn with_fd_step(self, fd_step: f64) -> Result<Self, ConfigError> {
        if !fd_step.is_finite() || fd_step <= 0.0 {
            return Err(ConfigError::FdStep);
        }
        Ok(Self { fd_step, ..self })
    }

    /// Sets the previous-objective value assumed before the first iteration.
    ///
    /// The first relative change is measured against this seed, so it should
    /// differ clearly from any plausible first objective value; otherwise the
    /// solver may report convergence after one iteration.
    ///
    /// # Errors
    ///
    /// Returns an error if `seed` is zero or non-finite.
    pub fn with_objective_seed(self, seed: f64) -> Result<Self, ConfigError> {
        if !seed.is_finite() || seed == 0.0 {
            return Err(ConfigError::ObjectiveSeed);
        }
        Ok(Self {
            objective_seed: seed,
            ..self
        })
    }

    /// Marks which components of `x` may move; `false` fixes a component.
    ///
    /// The mask length is checked against `x` when the solver starts.
    #[must_use]
    pub fn with_control_mask(self, mask: Vec<bool>) -> Self {
        Self {
            control_mask: Some(mask),
            ..self
        }
    }

    /// Sets the line search parameters.
    #[must_use]
    pub fn with_line_search(self, line_search: line_search::Params) -> Self {
        Self {
            line_search,
            ..self
        }
    }

    /// Returns the maximum number of iterations.
    #[must_use]
    pub fn max_iters(&self) -> usize {
        self.max_iters
    }

    /// Returns the convergence tolerance on the relative objective change.
    #[must_use]
    pub fn rel_tol(&self) -> f64 {
        self.rel_tol
    }

    /// Returns the finite difference step.
    #[must_use]
    pub fn fd_step(&self) -> f64 {
        self.fd_step
    }

    /// Returns the seeded previous-objective value.
    #[must_use]
    pub fn objective_seed(&self) -> f64 {
        self.objective_seed
    }

    /// Returns the control mask, if one is set.
    #[must_use]
    pub fn control_mask(&self) -> Option<&[bool]> {
        self.control_mask.as_deref()
    }

    /// Returns the line search parameters.
    #[must_use]
    pub fn line_search(&self) -> &line_search::Params {
        &self.line_search
    }
}
