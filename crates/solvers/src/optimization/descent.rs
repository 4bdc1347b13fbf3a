//! Steepest descent for unconstrained minimization.
//!
//! # Algorithm
//!
//! Each iteration:
//!
//! 1. Evaluates the objective `f` at the current `x`.
//! 2. Computes the gradient, either by central finite differences (see
//!    [`gradient`](super::gradient)) or from a caller-supplied [`Gradient`].
//! 3. Runs a backtracking Armijo [`line_search`](super::line_search) along
//!    `-gradient` and moves to the point it returns.
//! 4. Stops when `|f - f_prev| / |f_prev| < rel_tol`.
//!
//! Before the first iteration `f_prev` is the configured objective seed
//! (`1e-6` by default), so the first relative change is large unless the
//! initial objective happens to sit near the seed.
//!
//! # Control mask
//!
//! A [`Config`] may carry a control mask. Components marked `false` receive a
//! zero gradient and never move, whichever gradient source is used.
//!
//! # Reported objective
//!
//! [`Solution::objective`] is the value at the start of the last iteration,
//! that is, at the point the final step was taken from. No extra evaluation
//! is made at the returned `x`.
//!
//! # Observer Events
//!
//! The solver emits one [`Event`] per iteration, after the line search.
//! Observers can return [`Action::StopEarly`] to halt after that iteration.

mod action;
mod config;
mod error;
mod event;
mod search;
mod solution;
mod source;


pub use action::Action;
pub use config::{Config, ConfigError};
pub use error::Error;
pub use event::Event;
pub use solution::{Solution, Status};

use ndarray::Array1;

use stepwise_core::{Gradient, Objective, Observer};

use search::search;
use source::{Analytic, FiniteDifference};

/// Minimizes the objective using finite-difference steepest descent.
///
/// The observer receives an [`Event`] for each iteration.
///
/// # Errors
///
/// Returns an error if the control mask length differs from `x0`, if the
/// objective fails or returns a non-finite value, or if the relative change
/// becomes undefined because a zero objective was followed by a different one.
pub fn minimize<O, P, Obs>(
    objective: &O,
    params: &P,
    x0: Array1<f64>,
    config: &Config,
    observer: Obs,
) -> Result<Solution, Error>
where
    O: Objective<P>,
    P: ?Sized,
    Obs: for<'a> Observer<Event<'a>, Action>,
{
    let source = FiniteDifference {
        objective,
        step: config.fd_step(),
        mask: config.control_mask(),
    };
    search(objective, &source, params, x0, config, observer)
}

/// Minimizes the objective without observer support.
///
/// This is a convenience wrapper around [`minimize`] that uses a no-op observer.
///
/// # Errors
///
/// Returns an error if the solver fails. See [`minimize`].
pub fn minimize_unobserved<O, P>(
    objective: &O,
    params: &P,
    x0: Array1<f64>,
    config: &Config,
) -> Result<Solution, Error>
where
    O: Objective<P>,
    P: ?Sized,
{
    minimize(objective, params, x0, config, ())
}

/// Minimizes the objective using an analytic gradient.
///
/// Identical to [`minimize`] except that `gradient` replaces the finite
/// difference estimate. The control mask still applies.
///
/// # Errors
///
/// Returns an error for the same reasons as [`minimize`], or if the gradient
/// fails, has the wrong length, or contains non-finite entries.
pub fn minimize_with_gradient<O, G, P, Obs>(
    objective: &O,
    gradient: &G,
    params: &P,
    x0: Array1<f64>,
    config: &Config,
    observer: Obs,
) -> Result<Solution, Error>
where
    O: Objective<P>,
    G: Gradient<P>,
    P: ?Sized,
    Obs: for<'a> Observer<Event<'a>, Action>,
{
    let source = Analytic {
        gradient,
        mask: config.control_mask(),
    };
    search(objective, &source, params, x0, config, observer)
}

/// Minimizes the objective using an analytic gradient, without observer support.
///
/// This is a convenience wrapper around [`minimize_with_gradient`].
///
/// # Errors
///
/// Returns an error if the solver fails. See [`minimize_with_gradient`].
pub fn minimize_with_gradient_unobserved<O, G, P>(
    objective: &O,
    gradient: &G,
    params: &P,
    x0: Array1<f64>,
    config: &Config,
) -> Result<Solution, Error>
where
    O: Objective<P>,
    G: Gradient<P>,
    P: ?Sized,
{
    minimize_with_gradient(objective, gradient, params, x0, config, ())
}
