use std::error::Error as StdError;

use crate::State;

/// Computes the time derivative of every state entry.
///
/// The returned state must have exactly one entry per state entry, each with
/// the same shape as its counterpart. `constants` carries whatever fixed
/// coefficients the system needs and is passed through untouched by solvers.
///
/// `algebraic` holds the current algebraic variables when the system is
/// coupled to an [`AlgebraicRelation`], and is empty otherwise.
///
/// Closures with the signature
/// `Fn(&State, f64, &C, &State) -> Result<State, E>` implement this trait.
pub trait Derivative<C: ?Sized> {
    type Error: StdError + Send + Sync + 'static;

    /// Evaluates the derivative at `state` and time `t`.
    ///
    /// # Errors
    ///
    /// Returns [`Self::Error`] if the derivative cannot be computed.
    fn derivative(
        &self,
        state: &State,
        t: f64,
        constants: &C,
        algebraic: &State,
    ) -> Result<State, Self::Error>;
}

/// Resolves algebraic variables from the current state.
///
/// Algebraic variables are not integrated. They are recomputed at each step
/// from the current state, the time, the constants, and their own values at
/// the previous step, then handed to the [`Derivative`].
///
/// Closures with the signature
/// `Fn(&State, f64, &C, &State) -> Result<State, E>` implement this trait.
pub trait AlgebraicRelation<C: ?Sized> {
    type Error: StdError + Send + Sync + 'static;

    /// Computes the algebraic variables at `state` and time `t`.
    ///
    /// # Errors
    ///
    /// Returns [`Self::Error`] if the variables cannot be resolved.
    fn resolve(
        &self,
        state: &State,
        t: f64,
        constants: &C,
        previous: &State,
    ) -> Result<State, Self::Error>;
}

impl<C, F, E> Derivative<C> for F
where
    C: ?Sized,
    F: Fn(&State, f64, &C, &State) -> Result<State, E>,
    E: StdError + Send + Sync + 'static,
{
    type Error = E;

    fn derivative(
        &self,
        state: &State,
        t: f64,
        constants: &C,
        algebraic: &State,
    ) -> Result<State, E> {
        self(state, t, constants, algebraic)
    }
}

impl<C, F, E> AlgebraicRelation<C> for F
where
    C: ?Sized,
    F: Fn(&State, f64, &C, &State) -> Result<State, E>,
    E: StdError + Send + Sync + 'static,
{
    type Error = E;

    fn resolve(
        &self,
        state: &State,
        t: f64,
        constants: &C,
        previous: &State,
    ) -> Result<State, E> {
        self(state, t, constants, previous)
    }
}
