use crate::State;

/// A trait for types that can be stepped using their derivative.
///
/// Implementing this trait lets the time-stepping solvers advance the type by
/// `derivative * delta`, where the derivative is taken with respect to `Delta`.
/// `Delta` is usually time, but any independent variable works.
pub trait StepIntegrable<Delta> {
    /// The derivative of the type with respect to `Delta`.
    type Derivative;

    /// Returns the value after stepping with a derivative and step size.
    #[must_use]
    fn step(&self, derivative: Self::Derivative, delta: Delta) -> Self;
}

/// Type alias for the derivative of a `StepIntegrable` type.
pub type DerivativeOf<T, Delta> = <T as StepIntegrable<Delta>>::Derivative;

/// Explicit Euler update applied entry by entry.
///
/// Each entry keeps its own shape, so the derivative must match `self`
/// entry for entry (see [`State::has_shapes_of`]). Mismatched shapes panic
/// inside `ndarray`; solvers validate before stepping.
impl StepIntegrable<f64> for State {
    type Derivative = State;

    fn step(&self, derivative: State, delta: f64) -> Self {
        self.iter()
            .zip(derivative.into_inner())
            .map(|(value, rate)| value + &(rate * delta))
            .collect()
    }
}
