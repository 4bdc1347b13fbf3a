//! Backtracking line search on the Armijo condition.
//!
//! Starting from `alpha = 1`, the step is shrunk by `tau` until
//!
//! ```text
//! f(x + alpha d) <= f(x) + alpha * beta * <g, d>
//! ```
//!
//! holds, or until `alpha` falls to the floor `alpha_min`. The floor bounds
//! the number of trials even when the condition can never hold, for example
//! on a flat objective or when `d` is not a descent direction. A step taken at
//! the floor is accepted as is and may not decrease the objective; the
//! returned [`Status`] tells the two endings apart.
//!
//! A trial value of `+inf` is rejected and the step shrunk, so a first step
//! that overflows the objective is not fatal. Any other non-finite value is
//! an error, as is `+inf` at the floor.

use ndarray::Array1;
use thiserror::Error;

use stepwise_core::Objective;

use super::EvalError;

/// Default floor for `alpha`: a hundred times the smallest positive normal `f64`.
pub const DEFAULT_ALPHA_MIN: f64 = 1e2 * f64::MIN_POSITIVE;

/// Validated line search parameters.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Params {
    beta: f64,
    tau: f64,
    alpha_min: f64,
}

/// Errors that can occur when validating line search parameters.
#[derive(Debug, Error, Clone, Copy, PartialEq, Eq)]
pub enum ParamsError {
    #[error("beta must lie strictly between 0 and 1")]
    Beta,

    #[error("tau must lie strictly between 0 and 1")]
    Tau,

    #[error("alpha_min must be finite and positive")]
    AlphaMin,
}

impl Default for Params {
    fn default() -> Self {
        Self {
            beta: 1e-3,
            tau: 0.5,
            alpha_min: DEFAULT_ALPHA_MIN,
        }
    }
}

impl Params {
    /// Creates validated parameters.
    ///
    /// `beta` scales the required decrease (typically `1e-1` to `1e-3`) and
    /// `tau` is the shrink factor. `alpha_min` of `None` uses
    /// [`DEFAULT_ALPHA_MIN`].
    ///
    /// # Errors
    ///
    /// Returns an error if `beta` or `tau` is outside `(0, 1)`, or if
    /// `alpha_min` is not finite and positive.
    pub fn new(beta: f64, tau: f64, alpha_min: Option<f64>) -> Result<Self, ParamsError> {
        if !(beta > 0.0 && beta < 1.0) {
            return Err(ParamsError::Beta);
        }
        if !(tau > 0.0 && tau < 1.0) {
            return Err(ParamsError::Tau);
        }
        let alpha_min = alpha_min.unwrap_or(DEFAULT_ALPHA_MIN);
        if !alpha_min.is_finite() || alpha_min <= 0.0 {
            return Err(ParamsError::AlphaMin);
        }

        Ok(Self {
            beta,
            tau,
            alpha_min,
        })
    }

    /// Returns the sufficient decrease constant.
    #[must_use]
    pub fn beta(&self) -> f64 {
        self.beta
    }

    /// Returns the shrink factor.
    #[must_use]
    pub fn tau(&self) -> f64 {
        self.tau
    }

    /// Returns the floor for `alpha`.
    #[must_use]
    pub fn alpha_min(&self) -> f64 {
        self.alpha_min
    }
}

/// How the line search ended.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Status {
    /// The Armijo condition holds at the returned step.
    SufficientDecrease,

    /// `alpha` reached the floor without satisfying the Armijo condition.
    AlphaFloor,
}

/// The accepted step.
#[derive(Debug, Clone, PartialEq)]
pub struct Step {
    /// The new point, `x + alpha * direction`.
    pub x: Array1<f64>,

    /// The accepted step length.
    pub alpha: f64,

    /// Objective value at the new point.
    pub objective: f64,

    /// How the search ended.
    pub status: Status,

    /// Number of objective evaluations performed.
    pub trials: usize,
}

/// Errors that can occur during a line search.
#[derive(Debug, Error)]
pub enum LineSearchError<E> {
    #[error("length mismatch: x has {x}, gradient {gradient}, direction {direction}")]
    Length {
        x: usize,
        gradient: usize,
        direction: usize,
    },

    #[error(transparent)]
    Eval(#[from] EvalError<E>),
}

/// Searches along `direction` from `x` for a step with sufficient decrease.
///
/// `gradient` is the gradient at `x` and `current` is the objective at `x`.
///
/// # Errors
///
/// Returns an error if the vector lengths differ, if any objective
/// evaluation fails, or if a trial value is NaN, `-inf`, or `+inf` at the
/// floor.
pub fn search<O, P>(
    objective: &O,
    params: &P,
    x: &Array1<f64>,
    gradient: &Array1<f64>,
    direction: &Array1<f64>,
    current: f64,
    config: &Params,
) -> Result<Step, LineSearchError<O::Error>>
where
    O: Objective<P>,
    P: ?Sized,
{
    if gradient.len() != x.len() || direction.len() != x.len() {
        return Err(LineSearchError::Length {
            x: x.len(),
            gradient: gradient.len(),
            direction: direction.len(),
        });
    }

    let slope = gradient.dot(direction);
    let mut alpha = 1.0;
    let mut trials = 0;

    loop {
        let trial = x + &(direction * alpha);
        let value = objective
            .value(&trial, params)
            .map_err(EvalError::Objective)?;
        trials += 1;

        // An overflowing trial fails the Armijo test like any other increase.
        if value.is_infinite() && value > 0.0 && alpha > config.alpha_min {
            alpha *= config.tau;
            continue;
        }
        if !value.is_finite() {
            return Err(EvalError::NonFinite { value }.into());
        }

        let status = if value <= current + alpha * config.beta * slope {
            Status::SufficientDecrease
        } else if alpha <= config.alpha_min {
            log::debug!("line search: alpha floor {alpha:e} reached after {trials} trials");
            Status::AlphaFloor
        } else {
            alpha *= config.tau;
            continue;
        };

        return Ok(Step {
            x: trial,
            alpha,
            objective: value,
            status,
            trials,
        });
    }
}
