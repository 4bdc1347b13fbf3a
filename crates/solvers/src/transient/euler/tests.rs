use std::cell::RefCell;
use std::convert::Infallible;

use approx::assert_relative_eq;
use ndarray::{ArrayD, arr0, array};

use stepwise_core::State;

use super::{
    Action, Error, Event, Status, TimeMesh, solve, solve_coupled_unobserved, solve_unobserved,
};

fn scalar(value: f64) -> ArrayD<f64> {
    arr0(value).into_dyn()
}

/// Every entry changes at a constant rate of `c` per unit time.
fn constant_rate(state: &State, _t: f64, c: &f64, _alg: &State) -> Result<State, Infallible> {
    Ok(state.iter().map(|entry| entry.mapv(|_| *c)).collect())
}

/// dx/dt = -k x for every entry.
fn decay(state: &State, _t: f64, k: &f64, _alg: &State) -> Result<State, Infallible> {
    Ok(state.iter().map(|entry| entry * -*k).collect())
}

#[derive(Debug, thiserror::Error)]
#[error("evaluated at t = {0}")]
struct Evaluated(f64);

#[test]
fn trajectories_have_sample_axis_and_keep_initial_condition() {
    let initial = State::new(vec![
        scalar(1.5),
        array![1.0, 2.0, 3.0].into_dyn(),
        array![[1.0, -1.0], [0.5, 2.0]].into_dyn(),
    ]);
    let mesh = TimeMesh::new(0.0, 1.0, 0.1).unwrap();

    let solution = solve_unobserved(&decay, &0.5, &initial, &mesh).expect("should solve");

    assert_eq!(solution.status, Status::Complete);
    assert_eq!(solution.times.len(), mesh.n_steps());
    assert_eq!(solution.trajectories.len(), 3);
    for (trajectory, entry) in solution.trajectories.iter().zip(initial.iter()) {
        let mut expected = vec![mesh.n_steps()];
        expected.extend_from_slice(entry.shape());
        assert_eq!(trajectory.shape(), expected.as_slice());
        assert_eq!(&trajectory.index_axis(ndarray::Axis(0), 0), entry);
    }
}

#[test]
fn constant_derivative_is_integrated_exactly() {
    let initial = State::new(vec![scalar(0.0)]);
    let mesh = TimeMesh::new(0.0, 1.0, 0.1).unwrap();

    let solution = solve_unobserved(&constant_rate, &1.0, &initial, &mesh).expect("should solve");

    assert_eq!(mesh.n_steps(), 10);
    assert_eq!(solution.steps, 9);
    let x = &solution.trajectories[0];
    for (i, t) in solution.times.iter().enumerate() {
        assert_relative_eq!(x[[i]], 0.1 * i as f64, epsilon = 1e-12);
        assert_relative_eq!(x[[i]], *t, epsilon = 1e-12);
    }
}

#[test]
fn mesh_overshoots_stop_time() {
    let initial = State::new(vec![scalar(0.0)]);
    let mesh = TimeMesh::new(0.0, 1.0, 0.3).unwrap();

    let solution = solve_unobserved(&constant_rate, &2.0, &initial, &mesh).expect("should solve");

    assert_eq!(solution.times.len(), 4);
    assert_relative_eq!(solution.final_time, 1.2, epsilon = 1e-12);
    assert_relative_eq!(solution.times[3], 0.9, epsilon = 1e-12);
    assert_relative_eq!(solution.trajectories[0][[3]], 1.8, epsilon = 1e-12);
}

#[test]
fn euler_decay_matches_closed_form() {
    // Forward Euler on dx/dt = -k x gives x_n = x_0 (1 - k dt)^n.
    let initial = State::new(vec![array![1.0, -4.0].into_dyn()]);
    let mesh = TimeMesh::new(0.0, 2.0, 0.25).unwrap();
    let k = 0.8;

    let solution = solve_unobserved(&decay, &k, &initial, &mesh).expect("should solve");

    let x = &solution.trajectories[0];
    for n in 0..mesh.n_steps() {
        let factor = (1.0 - k * 0.25_f64).powi(i32::try_from(n).unwrap());
        assert_relative_eq!(x[[n, 0]], factor, epsilon = 1e-12);
        assert_relative_eq!(x[[n, 1]], -4.0 * factor, epsilon = 1e-12);
    }
}

#[test]
fn single_sample_mesh_never_evaluates() {
    let failing = |_: &State, t: f64, _: &(), _: &State| Err::<State, _>(Evaluated(t));
    let initial = State::new(vec![array![3.0].into_dyn()]);
    let mesh = TimeMesh::new(0.0, 0.5, 1.0).unwrap();

    let solution = solve_unobserved(&failing, &(), &initial, &mesh).expect("nothing to integrate");

    assert_eq!(solution.steps, 0);
    assert_eq!(solution.trajectories[0], array![[3.0]].into_dyn());
}

#[test]
fn derivative_errors_propagate() {
    let failing = |_: &State, t: f64, _: &(), _: &State| Err::<State, _>(Evaluated(t));
    let initial = State::new(vec![scalar(0.0)]);
    let mesh = TimeMesh::new(0.0, 1.0, 0.5).unwrap();

    let error = solve_unobserved(&failing, &(), &initial, &mesh).unwrap_err();

    assert!(matches!(error, Error::Derivative(_)));
    assert_eq!(error.to_string(), "derivative error: evaluated at t = 0");
}

#[test]
fn mismatched_derivative_is_rejected() {
    let initial = State::new(vec![scalar(0.0), array![1.0, 2.0].into_dyn()]);
    let mesh = TimeMesh::new(0.0, 1.0, 0.5).unwrap();

    let wrong_shape = |_: &State, _: f64, _: &(), _: &State| {
        Ok::<State, Infallible>(State::new(vec![scalar(1.0), array![1.0].into_dyn()]))
    };
    let error = solve_unobserved(&wrong_shape, &(), &initial, &mesh).unwrap_err();
    assert!(matches!(
        error,
        Error::DerivativeShape { index: 1, ref expected, ref found }
            if expected == &vec![2] && found == &vec![1]
    ));

    let too_few = |_: &State, _: f64, _: &(), _: &State| {
        Ok::<State, Infallible>(State::new(vec![scalar(1.0)]))
    };
    let error = solve_unobserved(&too_few, &(), &initial, &mesh).unwrap_err();
    assert!(matches!(
        error,
        Error::DerivativeCount {
            expected: 2,
            found: 1
        }
    ));
}

#[test]
fn empty_initial_conditions_are_rejected() {
    let mesh = TimeMesh::new(0.0, 1.0, 0.5).unwrap();

    let error = solve_unobserved(&constant_rate, &1.0, &State::empty(), &mesh).unwrap_err();

    assert!(matches!(error, Error::EmptyState));
}

#[test]
fn algebraic_relation_skips_step_zero() {
    // dx/dt = y, with y = 2x resolved from step 1 onward and y(0) = 5.
    let calls = RefCell::new(Vec::new());
    let derivative = |_: &State, _: f64, _: &(), alg: &State| Ok::<State, Infallible>(alg.clone());
    let relation = |state: &State, t: f64, _: &(), _previous: &State| {
        calls.borrow_mut().push(t);
        Ok::<State, Infallible>(state.iter().map(|x| x * 2.0).collect())
    };

    let initial = State::new(vec![scalar(1.0)]);
    let algebraic = State::new(vec![scalar(5.0)]);
    let mesh = TimeMesh::new(0.0, 2.0, 0.5).unwrap();

    let solution =
        solve_coupled_unobserved(&derivative, &relation, &(), &initial, &algebraic, &mesh)
            .expect("should solve");

    let x = &solution.trajectories[0];
    assert_relative_eq!(x[[0]], 1.0);
    assert_relative_eq!(x[[1]], 3.5);
    assert_relative_eq!(x[[2]], 7.0);
    assert_relative_eq!(x[[3]], 14.0);
    assert_eq!(*calls.borrow(), vec![0.5, 1.0]);
}

#[test]
fn algebraic_relation_sees_previous_values() {
    // y_i = y_{i-1} + 1 with y(0) = 0, and dx/dt = y.
    let derivative = |_: &State, _: f64, _: &(), alg: &State| Ok::<State, Infallible>(alg.clone());
    let relation = |_: &State, _: f64, _: &(), previous: &State| {
        Ok::<State, Infallible>(previous.iter().map(|y| y + 1.0).collect())
    };

    let initial = State::new(vec![scalar(0.0)]);
    let algebraic = State::new(vec![scalar(0.0)]);
    let mesh = TimeMesh::new(0.0, 4.0, 1.0).unwrap();

    let solution =
        solve_coupled_unobserved(&derivative, &relation, &(), &initial, &algebraic, &mesh)
            .expect("should solve");

    assert_eq!(solution.trajectories[0], array![0.0, 0.0, 1.0, 3.0].into_dyn());
}

#[test]
fn algebraic_shapes_are_checked() {
    let derivative = |state: &State, _: f64, _: &(), _: &State| Ok::<State, Infallible>(state.clone());
    let relation = |_: &State, _: f64, _: &(), _: &State| {
        Ok::<State, Infallible>(State::new(vec![array![1.0, 2.0].into_dyn()]))
    };

    let initial = State::new(vec![scalar(1.0)]);
    let algebraic = State::new(vec![scalar(0.0)]);
    let mesh = TimeMesh::new(0.0, 1.0, 0.25).unwrap();

    let error = solve_coupled_unobserved(&derivative, &relation, &(), &initial, &algebraic, &mesh)
        .unwrap_err();

    assert!(matches!(error, Error::AlgebraicShape { index: 0, .. }));

    let extra = |_: &State, _: f64, _: &(), _: &State| {
        Ok::<State, Infallible>(State::new(vec![scalar(1.0), scalar(2.0)]))
    };

    let error = solve_coupled_unobserved(&derivative, &extra, &(), &initial, &algebraic, &mesh)
        .unwrap_err();

    assert!(matches!(
        error,
        Error::AlgebraicCount {
            expected: 1,
            found: 2
        }
    ));
}

#[test]
fn oversized_trajectories_are_rejected() {
    let initial = State::new(vec![scalar(0.0), ArrayD::zeros(vec![10])]);
    let mesh = TimeMesh::new(0.0, 1e18, 1.0).unwrap();

    let error = solve_unobserved(&constant_rate, &1.0, &initial, &mesh).unwrap_err();

    assert!(matches!(
        error,
        Error::TrajectoryTooLarge {
            index: 1,
            elements: 10,
            ..
        }
    ));
}

#[test]
fn empty_algebraic_initial_conditions_mean_uncoupled() {
    let relation = |_: &State, t: f64, _: &f64, _: &State| Err::<State, _>(Evaluated(t));

    let initial = State::new(vec![scalar(0.0)]);
    let mesh = TimeMesh::new(0.0, 1.0, 0.25).unwrap();

    let solution = solve_coupled_unobserved(
        &constant_rate,
        &relation,
        &1.0,
        &initial,
        &State::empty(),
        &mesh,
    )
    .expect("relation should not be called");

    assert_relative_eq!(solution.trajectories[0][[3]], 0.75);
}

#[test]
fn observer_can_stop_early() {
    let initial = State::new(vec![array![0.0, 0.0].into_dyn()]);
    let mesh = TimeMesh::new(0.0, 10.0, 0.1).unwrap();

    let observer = |event: &Event<'_>| (event.step >= 5).then_some(Action::StopEarly);

    let solution = solve(&constant_rate, &1.0, &initial, &mesh, observer).expect("should stop");

    assert_eq!(solution.status, Status::StoppedByObserver);
    assert_eq!(solution.steps, 5);
    assert_eq!(solution.times.len(), 6);
    assert_eq!(solution.trajectories[0].shape(), &[6, 2]);
    assert_relative_eq!(solution.trajectories[0][[5, 1]], 0.5, epsilon = 1e-12);
}

#[test]
fn events_cover_every_sample() {
    let initial = State::new(vec![scalar(0.0)]);
    let mesh = TimeMesh::new(0.0, 1.0, 0.25).unwrap();

    let mut seen = Vec::new();
    solve(&constant_rate, &4.0, &initial, &mesh, |event: &Event<'_>| {
        seen.push((event.step, event.time, event.state[0].sum()));
        None::<Action>
    })
    .expect("should solve");

    assert_eq!(seen.len(), 4);
    for (i, (step, time, x)) in seen.into_iter().enumerate() {
        assert_eq!(step, i);
        assert_relative_eq!(time, 0.25 * i as f64);
        assert_relative_eq!(x, time, epsilon = 1e-12);
    }
}
