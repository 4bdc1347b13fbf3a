//! Core traits and types for Stepwise.
//!
//! This crate defines the shared abstractions that the solvers and observers
//! build on:
//!
//! - [`State`]: an ordered set of independently shaped arrays
//! - [`StepIntegrable`]: types that can be advanced by `derivative * delta`
//! - [`Observer`]: receives solver events and optionally returns control actions
//! - [`Derivative`], [`AlgebraicRelation`], [`Objective`], [`Gradient`]:
//!   the caller-supplied functions that the solvers iterate over

mod observer;
mod problems;
mod state;
mod step;

pub use observer::Observer;
pub use problems::{AlgebraicRelation, Derivative, Gradient, Objective};
pub use state::State;
pub use step::{DerivativeOf, StepIntegrable};
