use std::error::Error as StdError;

use thiserror::Error;

use crate::optimization::{EvalError, gradient::GradientError, line_search::LineSearchError};

use super::ConfigError;

/// Errors that can occur during steepest descent.
#[derive(Debug, Error)]
pub enum Error {
    #[error("invalid config: {0}")]
    InvalidConfig(#[from] ConfigError),

    #[error("control mask has {mask} entries but x has {x}")]
    MaskLength { mask: usize, x: usize },

    #[error("gradient has {found} entries but x has {expected}")]
    GradientLength { expected: usize, found: usize },

    #[error("objective is not finite: {0}")]
    NonFiniteObjective(f64),

    #[error("gradient entry {0} is not finite")]
    NonFiniteGradient(usize),

    #[error("relative change is undefined: previous objective is zero, current is {0}")]
    ZeroPreviousObjective(f64),

    #[error("objective error: {0}")]
    Objective(#[source] Box<dyn StdError + Send + Sync>),

    #[error("gradient error: {0}")]
    Gradient(#[source] Box<dyn StdError + Send + Sync>),
}

impl<E> From<EvalError<E>> for Error
where
    E: StdError + Send + Sync + 'static,
{
    fn from(err: EvalError<E>) -> Self {
        match err {
            EvalError::Objective(e) => Self::Objective(Box::new(e)),
            EvalError::NonFinite { value } => Self::NonFiniteObjective(value),
        }
    }
}

impl<E> From<GradientError<E>> for Error
where
    E: StdError + Send + Sync + 'static,
{
    fn from(err: GradientError<E>) -> Self {
        match err {
            GradientError::Step(_) => Self::InvalidConfig(ConfigError::FdStep),
            GradientError::MaskLength { mask, x } => Self::MaskLength { mask, x },
            GradientError::Eval(e) => e.into(),
        }
    }
}

impl<E> From<LineSearchError<E>> for Error
where
    E: StdError + Send + Sync + 'static,
{
    fn from(err: LineSearchError<E>) -> Self {
        match err {
            LineSearchError::Length { x, gradient, .. } => Self::GradientLength {
                expected: x,
                found: gradient,
            },
            LineSearchError::Eval(e) => e.into(),
        }
    }
}
