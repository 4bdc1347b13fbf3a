use std::error::Error as StdError;

use ndarray::Array1;

/// A scalar objective over a flat vector of free parameters.
///
/// `params` carries any extra data the objective needs and is passed through
/// untouched by solvers. Solvers search for the `x` that minimizes the value.
///
/// Closures with the signature `Fn(&Array1<f64>, &P) -> Result<f64, E>`
/// implement this trait.
pub trait Objective<P: ?Sized> {
    type Error: StdError + Send + Sync + 'static;

    /// Evaluates the objective at `x`.
    ///
    /// # Errors
    ///
    /// Returns [`Self::Error`] if the objective cannot be computed.
    fn value(&self, x: &Array1<f64>, params: &P) -> Result<f64, Self::Error>;
}

/// An analytic gradient of an [`Objective`].
///
/// The returned vector must have the same length as `x`.
///
/// Closures with the signature
/// `Fn(&Array1<f64>, &P) -> Result<Array1<f64>, E>` implement this trait.
pub trait Gradient<P: ?Sized> {
    type Error: StdError + Send + Sync + 'static;

    /// Evaluates the gradient at `x`.
    ///
    /// # Errors
    ///
    /// Returns [`Self::Error`] if the gradient cannot be computed.
    fn gradient(&self, x: &Array1<f64>, params: &P) -> Result<Array1<f64>, Self::Error>;
}

impl<P, F, E> Objective<P> for F
where
    P: ?Sized,
    F: Fn(&Array1<f64>, &P) -> Result<f64, E>,
    E: StdError + Send + Sync + 'static,
{
    type Error = E;

    fn value(&self, x: &Array1<f64>, params: &P) -> Result<f64, E> {
        self(x, params)
    }
}

impl<P, F, E> Gradient<P> for F
where
    P: ?Sized,
    F: Fn(&Array1<f64>, &P) -> Result<Array1<f64>, E>,
    E: StdError + Send + Sync + 'static,
{
    type Error = E;

    fn gradient(&self, x: &Array1<f64>, params: &P) -> Result<Array1<f64>, E> {
        self(x, params)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    use std::convert::Infallible;

    use approx::assert_relative_eq;
    use ndarray::array;

    /// Weighted sum of squares; the weights are the extra parameters.
    struct WeightedSquares;

    impl Objective<[f64]> for WeightedSquares {
        type Error = Infallible;

        fn value(&self, x: &Array1<f64>, weights: &[f64]) -> Result<f64, Self::Error> {
            Ok(x.iter().zip(weights).map(|(xi, w)| w * xi * xi).sum())
        }
    }

    #[test]
    fn struct_objective_with_unsized_params() {
        let value = WeightedSquares
            .value(&array![1.0, 2.0], &[3.0, 0.5][..])
            .unwrap();

        assert_relative_eq!(value, 5.0);
    }

    #[test]
    fn closure_objective_and_gradient() {
        let objective = |x: &Array1<f64>, _: &()| Ok::<_, Infallible>(x.dot(x));
        let gradient = |x: &Array1<f64>, _: &()| Ok::<_, Infallible>(x * 2.0);

        let x = array![1.0, -2.0];

        assert_relative_eq!(objective.value(&x, &()).unwrap(), 5.0);
        assert_eq!(gradient.gradient(&x, &()).unwrap(), array![2.0, -4.0]);
    }
}
