use std::error::Error as StdError;

/// Errors that can occur during Euler integration.
#[derive(Debug, thiserror::Error)]
pub enum Error {
    #[error("initial conditions must contain at least one entry")]
    EmptyState,

    #[error("trajectory for entry {index} would hold {samples} samples of {elements} elements")]
    TrajectoryTooLarge {
        index: usize,
        samples: usize,
        elements: usize,
    },

    #[error("derivative returned {found} entries for {expected} state entries")]
    DerivativeCount { expected: usize, found: usize },

    #[error("derivative entry {index} has shape {found:?}, expected {expected:?}")]
    DerivativeShape {
        index: usize,
        expected: Vec<usize>,
        found: Vec<usize>,
    },

    #[error("algebraic relation returned {found} entries for {expected} variables")]
    AlgebraicCount { expected: usize, found: usize },

    #[error("algebraic entry {index} has shape {found:?}, expected {expected:?}")]
    AlgebraicShape {
        index: usize,
        expected: Vec<usize>,
        found: Vec<usize>,
    },

    #[error("derivative error: {0}")]
    Derivative(#[source] Box<dyn StdError + Send + Sync>),

    #[error("algebraic relation error: {0}")]
    Algebraic(#[source] Box<dyn StdError + Send + Sync>),
}

impl Error {
    pub(crate) fn derivative<E: StdError + Send + Sync + 'static>(err: E) -> Self {
        Self::Derivative(Box::new(err))
    }

    pub(crate) fn algebraic<E: StdError + Send + Sync + 'static>(err: E) -> Self {
        Self::Algebraic(Box::new(err))
    }
}
