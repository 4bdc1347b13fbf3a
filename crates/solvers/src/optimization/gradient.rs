//! Central finite-difference gradient.
//!
//! Each controlled component `i` is perturbed by `±h` on its own and the
//! gradient is estimated as
//!
//! ```text
//! g_i = (f(x + h e_i) - f(x - h e_i)) / (2 h)
//! ```
//!
//! which is second-order accurate in `h`. Components excluded by the control
//! mask are never perturbed and get a gradient of exactly zero, so a descent
//! step never moves them.

use ndarray::Array1;
use thiserror::Error;

use stepwise_core::Objective;

use super::{EvalError, evaluate};

/// Errors that can occur when estimating a gradient.
#[derive(Debug, Error)]
pub enum GradientError<E> {
    #[error("finite difference step must be finite and positive, got {0}")]
    Step(f64),

    #[error("control mask has {mask} entries but x has {x}")]
    MaskLength { mask: usize, x: usize },

    #[error(transparent)]
    Eval(#[from] EvalError<E>),
}

/// Estimates the gradient of `objective` at `x` by central differences.
///
/// `mask[i] == false` marks component `i` as fixed. `None` leaves every
/// component free. The objective is called twice per free component.
///
/// # Errors
///
/// Returns an error if `step` is not finite and positive, if the mask length
/// differs from `x`, or if any objective evaluation fails or is not finite.
pub fn central_difference<O, P>(
    objective: &O,
    params: &P,
    x: &Array1<f64>,
    step: f64,
    mask: Option<&[bool]>,
) -> Result<Array1<f64>, GradientError<O::Error>>
where
    O: Objective<P>,
    P: ?Sized,
{
    if !step.is_finite() || step <= 0.0 {
        return Err(GradientError::Step(step));
    }
    if let Some(mask) = mask {
        if mask.len() != x.len() {
            return Err(GradientError::MaskLength {
                mask: mask.len(),
                x: x.len(),
            });
        }
    }

    let mut gradient = Array1::zeros(x.len());
    let mut probe = x.clone();

    for i in 0..x.len() {
        if mask.is_some_and(|mask| !mask[i]) {
            continue;
        }

        probe[i] = x[i] + step;
        let forward = evaluate(objective, params, &probe)?;
        probe[i] = x[i] - step;
        let backward = evaluate(objective, params, &probe)?;
        probe[i] = x[i];

        gradient[i] = (forward - backward) / (2.0 * step);
    }

    Ok(gradient)
}
