//! Forward Euler solver for systems of first-order ODEs.
//!
//! The solver advances every state entry with explicit Euler on a uniform
//! [`TimeMesh`]:
//!
//! ```text
//! state_{i+1} = state_i + derivative_i * dt
//! ```
//!
//! Entries are independently shaped arrays, so a single system can mix
//! scalars, vectors, and higher-rank tensors.
//!
//! # Algebraic coupling
//!
//! [`solve_coupled`] resolves a set of algebraic variables before each
//! derivative evaluation. At step `i > 0` the [`AlgebraicRelation`] is called
//! with the current state, the mesh time, the constants, and the algebraic
//! values from step `i - 1`. The relation is never called at step 0; the
//! derivative at step 0 receives the algebraic initial conditions as given.
//!
//! # Example
//!
//! ```ignore
//! use stepwise_solvers::transient::euler::{self, TimeMesh};
//!
//! let mesh = TimeMesh::new(0.0, 1.0, 0.1)?;
//! let solution = euler::solve_unobserved(&derivative, &constants, &initial, &mesh)?;
//!
//! for (t, x) in solution.times.iter().zip(solution.trajectories[0].outer_iter()) {
//!     println!("t={t}: {x}");
//! }
//! ```

mod action;
mod error;
mod event;
mod mesh;
mod solution;

pub use action::Action;
pub use error::Error;
pub use event::Event;
pub use mesh::{MeshError, TimeMesh};
pub use solution::{Solution, Status};

use ndarray::{ArrayD, Axis, Slice};
use stepwise_core::{AlgebraicRelation, Derivative, Observer, State, StepIntegrable};

/// Integrates an ODE system using forward Euler.
///
/// # Algorithm
///
/// 1. Allocate one trajectory per state entry and store the initial condition
///    at sample 0.
/// 2. For each sample `i` in `0..n_steps - 1`:
///    - Evaluate the derivative at the current state and `t_i`.
///    - Step the state forward: `state + derivative * dt`.
///    - Store the result at sample `i + 1` and emit an [`Event`].
/// 3. Return the solution with the time mesh and every trajectory.
///
/// A mesh with a single sample performs no integration.
///
/// # Observer
///
/// The observer receives an [`Event`] for the initial condition and after
/// each step, and may return [`Action::StopEarly`] to end the run.
///
/// # Errors
///
/// Returns an error if `initial` is empty, if a trajectory is too large to
/// allocate, if the derivative fails, or if it returns entries that do not
/// match the state's shapes.
pub fn solve<D, C, Obs>(
    derivative: &D,
    constants: &C,
    initial: &State,
    mesh: &TimeMesh,
    observer: Obs,
) -> Result<Solution, Error>
where
    D: Derivative<C>,
    C: ?Sized,
    Obs: for<'a> Observer<Event<'a>, Action>,
{
    integrate(
        derivative,
        constants,
        initial,
        mesh,
        None::<(Resolver, &State)>,
        observer,
    )
}

/// Integrates an ODE system using forward Euler without observation.
///
/// This is a convenience wrapper around [`solve`] that discards events.
///
/// # Errors
///
/// Returns an error if the integration fails. See [`solve`].
pub fn solve_unobserved<D, C>(
    derivative: &D,
    constants: &C,
    initial: &State,
    mesh: &TimeMesh,
) -> Result<Solution, Error>
where
    D: Derivative<C>,
    C: ?Sized,
{
    solve(derivative, constants, initial, mesh, ())
}

/// Integrates an ODE system coupled to algebraic variables.
///
/// Behaves like [`solve`], except that before each derivative evaluation at
/// step `i > 0` the algebraic variables are recomputed by `relation` and the
/// derivative receives them. See the [module docs](self) for the step-0 rule.
///
/// If `algebraic_initial` is empty the system is treated as uncoupled and
/// `relation` is never called.
///
/// # Errors
///
/// Returns an error for the same reasons as [`solve`], if the relation fails,
/// or if it returns entries that do not match the algebraic initial conditions.
pub fn solve_coupled<D, A, C, Obs>(
    derivative: &D,
    relation: &A,
    constants: &C,
    initial: &State,
    algebraic_initial: &State,
    mesh: &TimeMesh,
    observer: Obs,
) -> Result<Solution, Error>
where
    D: Derivative<C>,
    A: AlgebraicRelation<C>,
    C: ?Sized,
    Obs: for<'a> Observer<Event<'a>, Action>,
{
    let resolve = |state: &State, t: f64, previous: &State| {
        relation
            .resolve(state, t, constants, previous)
            .map_err(Error::algebraic)
    };

    integrate(
        derivative,
        constants,
        initial,
        mesh,
        Some((resolve, algebraic_initial)),
        observer,
    )
}

/// Integrates a coupled ODE system without observation.
///
/// This is a convenience wrapper around [`solve_coupled`] that discards events.
///
/// # Errors
///
/// Returns an error if the integration fails. See [`solve_coupled`].
pub fn solve_coupled_unobserved<D, A, C>(
    derivative: &D,
    relation: &A,
    constants: &C,
    initial: &State,
    algebraic_initial: &State,
    mesh: &TimeMesh,
) -> Result<Solution, Error>
where
    D: Derivative<C>,
    A: AlgebraicRelation<C>,
    C: ?Sized,
{
    solve_coupled(
        derivative,
        relation,
        constants,
        initial,
        algebraic_initial,
        mesh,
        (),
    )
}

/// Placeholder resolver type for uncoupled systems.
type Resolver = fn(&State, f64, &State) -> Result<State, Error>;

fn integrate<D, C, R, Obs>(
    derivative: &D,
    constants: &C,
    initial: &State,
    mesh: &TimeMesh,
    coupling: Option<(R, &State)>,
    mut observer: Obs,
) -> Result<Solution, Error>
where
    D: Derivative<C>,
    C: ?Sized,
    R: Fn(&State, f64, &State) -> Result<State, Error>,
    Obs: for<'a> Observer<Event<'a>, Action>,
{
    if initial.is_empty() {
        return Err(Error::EmptyState);
    }

    let (resolve, mut algebraic) = match coupling {
        Some((resolve, algebraic_initial)) if !algebraic_initial.is_empty() => {
            (Some(resolve), algebraic_initial.clone())
        }
        _ => (None, State::empty()),
    };
    let algebraic_template = algebraic.clone();

    let n_steps = mesh.n_steps();
    log::debug!(
        "euler: {} entries, {} algebraic, {} samples, dt = {}",
        initial.len(),
        algebraic.len(),
        n_steps,
        mesh.dt()
    );

    check_capacity(initial, n_steps)?;
    let mut trajectories: Vec<ArrayD<f64>> = initial
        .iter()
        .map(|entry| allocate_trajectory(entry, n_steps))
        .collect();
    let mut state = initial.clone();

    let event = Event {
        step: 0,
        time: mesh.time(0),
        state: &state,
    };
    if let Some(Action::StopEarly) = observer.observe(&event) {
        return Ok(stopped(mesh, trajectories, 0));
    }

    for i in 0..n_steps.saturating_sub(1) {
        let t = mesh.time(i);

        if let Some(resolve) = &resolve {
            if i > 0 {
                let resolved = resolve(&state, t, &algebraic)?;
                check_shapes(&algebraic_template, &resolved).map_err(Mismatch::into_algebraic)?;
                algebraic = resolved;
            }
        }

        let rate = derivative
            .derivative(&state, t, constants, &algebraic)
            .map_err(Error::derivative)?;
        check_shapes(&state, &rate).map_err(Mismatch::into_derivative)?;

        state = state.step(rate, mesh.dt());
        for (trajectory, entry) in trajectories.iter_mut().zip(state.iter()) {
            trajectory.index_axis_mut(Axis(0), i + 1).assign(entry);
        }

        let event = Event {
            step: i + 1,
            time: mesh.time(i + 1),
            state: &state,
        };
        if let Some(Action::StopEarly) = observer.observe(&event) {
            log::debug!("euler: stopped by observer after {} steps", i + 1);
            return Ok(stopped(mesh, trajectories, i + 1));
        }
    }

    Ok(Solution {
        status: Status::Complete,
        times: mesh.times(),
        trajectories,
        steps: n_steps.saturating_sub(1),
        final_time: mesh.final_time(),
    })
}

/// Checks that every trajectory's element count fits in an `isize`.
fn check_capacity(initial: &State, n_steps: usize) -> Result<(), Error> {
    for (index, entry) in initial.iter().enumerate() {
        let fits = n_steps
            .checked_mul(entry.len())
            .is_some_and(|total| total <= isize::MAX as usize);
        if !fits {
            return Err(Error::TrajectoryTooLarge {
                index,
                samples: n_steps,
                elements: entry.len(),
            });
        }
    }
    Ok(())
}

/// Allocates a zeroed `(n_steps, ..shape)` array with `entry` at sample 0.
fn allocate_trajectory(entry: &ArrayD<f64>, n_steps: usize) -> ArrayD<f64> {
    let mut shape = Vec::with_capacity(entry.ndim() + 1);
    shape.push(n_steps);
    shape.extend_from_slice(entry.shape());

    let mut trajectory = ArrayD::zeros(shape);
    trajectory.index_axis_mut(Axis(0), 0).assign(entry);
    trajectory
}

/// Builds a solution holding only the samples computed through `steps`.
fn stopped(mesh: &TimeMesh, trajectories: Vec<ArrayD<f64>>, steps: usize) -> Solution {
    let samples = Slice::from(..=steps);

    Solution {
        status: Status::StoppedByObserver,
        times: mesh.times().slice_axis(Axis(0), samples).to_owned(),
        trajectories: trajectories
            .iter()
            .map(|trajectory| trajectory.slice_axis(Axis(0), samples).to_owned())
            .collect(),
        steps,
        final_time: mesh.final_time(),
    }
}

enum Mismatch {
    Count {
        expected: usize,
        found: usize,
    },
    Shape {
        index: usize,
        expected: Vec<usize>,
        found: Vec<usize>,
    },
}

impl Mismatch {
    fn into_derivative(self) -> Error {
        match self {
            Self::Count { expected, found } => Error::DerivativeCount { expected, found },
            Self::Shape {
                index,
                expected,
                found,
            } => Error::DerivativeShape {
                index,
                expected,
                found,
            },
        }
    }

    fn into_algebraic(self) -> Error {
        match self {
            Self::Count { expected, found } => Error::AlgebraicCount { expected, found },
            Self::Shape {
                index,
                expected,
                found,
            } => Error::AlgebraicShape {
                index,
                expected,
                found,
            },
        }
    }
}

fn check_shapes(expected: &State, found: &State) -> Result<(), Mismatch> {
    if expected.len() != found.len() {
        return Err(Mismatch::Count {
            expected: expected.len(),
            found: found.len(),
        });
    }

    match expected
        .iter()
        .zip(found.iter())
        .position(|(a, b)| a.shape() != b.shape())
    {
        Some(index) => Err(Mismatch::Shape {
            index,
            expected: expected[index].shape().to_vec(),
            found: found[index].shape().to_vec(),
        }),
        None => Ok(()),
    }
}

#[cfg(test)]
mod tests;
