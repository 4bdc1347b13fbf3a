use ndarray::Array1;

use stepwise_core::{Objective, Observer};

use crate::optimization::{evaluate, line_search};

use super::{Action, Config, Error, Event, Solution, Status, source::GradientSource};

/// Core steepest descent loop shared by the public entry points.
///
/// Each iteration evaluates the objective at `x`, takes the gradient from
/// `source`, searches along the negative gradient, and measures the relative
/// change of the objective against the previous iteration (or the configured
/// seed on the first one).
pub(super) fn search<O, P, S, Obs>(
    objective: &O,
    source: &S,
    params: &P,
    x0: Array1<f64>,
    config: &Config,
    mut observer: Obs,
) -> Result<Solution, Error>
where
    O: Objective<P>,
    P: ?Sized,
    S: GradientSource<P>,
    Obs: for<'a> Observer<Event<'a>, Action>,
{
    if let Some(mask) = config.control_mask() {
        if mask.len() != x0.len() {
            return Err(Error::MaskLength {
                mask: mask.len(),
                x: x0.len(),
            });
        }
    }

    log::debug!(
        "descent: {} parameters, rel_tol = {:e}, max_iters = {}",
        x0.len(),
        config.rel_tol(),
        config.max_iters()
    );

    let mut x = x0;
    let mut previous = config.objective_seed();

    for iter in 1..=config.max_iters() {
        let current = evaluate(objective, params, &x)?;

        let gradient = source.gradient(&x, params)?;
        if let Some(index) = gradient.iter().position(|g| !g.is_finite()) {
            return Err(Error::NonFiniteGradient(index));
        }
        let direction = -&gradient;

        let step = line_search::search(
            objective,
            params,
            &x,
            &gradient,
            &direction,
            current,
            config.line_search(),
        )?;

        let rel_change = relative_change(current, previous)?;
        log::trace!(
            "descent: iter {iter}, objective {current:e}, alpha {:e}, rel_change {rel_change:e}",
            step.alpha
        );

        let event = Event {
            iter,
            x: &x,
            objective: current,
            gradient: &gradient,
            step: &step,
            rel_change,
        };
        let action = observer.observe(&event);

        x = step.x;
        previous = current;

        if let Some(Action::StopEarly) = action {
            return Ok(Solution {
                status: Status::StoppedByObserver,
                x,
                objective: current,
                iters: iter,
            });
        }

        if rel_change < config.rel_tol() {
            return Ok(Solution {
                status: Status::Converged,
                x,
                objective: current,
                iters: iter,
            });
        }
    }

    log::warn!(
        "descent: no convergence within {} iterations (objective {previous:e})",
        config.max_iters()
    );

    Ok(Solution {
        status: Status::MaxIters,
        x,
        objective: previous,
        iters: config.max_iters(),
    })
}

/// Returns `|current - previous| / |previous|`.
///
/// An unchanged objective is zero change, including when both are zero.
#[allow(clippy::float_cmp)]
fn relative_change(current: f64, previous: f64) -> Result<f64, Error> {
    if current == previous {
        return Ok(0.0);
    }
    if previous == 0.0 {
        return Err(Error::ZeroPreviousObjective(current));
    }
    Ok(((current - previous) / previous).abs())
}
