use ndarray::Array1;
use thiserror::Error;

use stepwise_core::Objective;

/// Errors that can occur when evaluating an objective.
#[derive(Debug, Error)]
pub enum EvalError<E> {
    /// The objective returned an error.
    #[error("objective evaluation failed")]
    Objective(#[source] E),

    /// The objective returned NaN or an infinity.
    #[error("objective is not finite: {value}")]
    NonFinite { value: f64 },
}

/// Evaluates the objective at `x`, rejecting non-finite values.
///
/// # Errors
///
/// Returns an error if the objective fails or its value is not finite.
pub fn evaluate<O, P>(objective: &O, params: &P, x: &Array1<f64>) -> Result<f64, EvalError<O::Error>>
where
    O: Objective<P>,
    P: ?Sized,
{
    let value = objective.value(x, params).map_err(EvalError::Objective)?;
    if value.is_finite() {
        Ok(value)
    } else {
        Err(EvalError::NonFinite { value })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    use std::convert::Infallible;

    use ndarray::array;

    #[test]
    fn passes_finite_values_through() {
        let objective = |x: &Array1<f64>, offset: &f64| Ok::<_, Infallible>(x.sum() + offset);

        let value = evaluate(&objective, &0.5, &array![1.0, 2.0]).unwrap();

        assert!((value - 3.5).abs() < f64::EPSILON);
    }

    #[test]
    fn rejects_non_finite_values() {
        let objective = |x: &Array1<f64>, _: &()| Ok::<_, Infallible>(x[0].ln());

        let error = evaluate(&objective, &(), &array![-1.0]).unwrap_err();

        assert!(matches!(error, EvalError::NonFinite { value } if value.is_nan()));
    }
}
