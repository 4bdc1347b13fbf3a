use ndarray::Array1;

use stepwise_core::{Gradient, Objective};

use crate::optimization::gradient::central_difference;

use super::Error;

/// Where the descent solver gets its gradient from.
pub(super) trait GradientSource<P: ?Sized> {
    fn gradient(&self, x: &Array1<f64>, params: &P) -> Result<Array1<f64>, Error>;
}

/// Central finite differences of the objective.
pub(super) struct FiniteDifference<'a, O> {
    pub(super) objective: &'a O,
    pub(super) step: f64,
    pub(super) mask: Option<&'a [bool]>,
}

impl<O, P> GradientSource<P> for FiniteDifference<'_, O>
where
    O: Objective<P>,
    P: ?Sized,
{
    fn gradient(&self, x: &Array1<f64>, params: &P) -> Result<Array1<f64>, Error> {
        Ok(central_difference(
            self.objective,
            params,
            x,
            self.step,
            self.mask,
        )?)
    }
}

/// A caller-supplied gradient, zeroed on fixed components.
pub(super) struct Analytic<'a, G> {
    pub(super) gradient: &'a G,
    pub(super) mask: Option<&'a [bool]>,
}

impl<G, P> GradientSource<P> for Analytic<'_, G>
where
    G: Gradient<P>,
    P: ?Sized,
{
    fn gradient(&self, x: &Array1<f64>, params: &P) -> Result<Array1<f64>, Error> {
        let mut gradient = self
            .gradient
            .gradient(x, params)
            .map_err(|e| Error::Gradient(Box::new(e)))?;

        if gradient.len() != x.len() {
            return Err(Error::GradientLength {
                expected: x.len(),
                found: gradient.len(),
            });
        }

        if let Some(mask) = self.mask {
            for (g, free) in gradient.iter_mut().zip(mask) {
                if !free {
                    *g = 0.0;
                }
            }
        }

        Ok(gradient)
    }
}
