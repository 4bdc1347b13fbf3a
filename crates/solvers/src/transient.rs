//! Solvers for transient problems: advancing a system of first-order ODEs
//! through time.
//!
//! A system is described by a [`Derivative`] over a [`State`] whose entries
//! may each have a different shape, optionally coupled to an
//! [`AlgebraicRelation`] that is resolved before each derivative evaluation
//! after the first.
//!
//! # Solvers
//!
//! - [`euler`]: fixed-step explicit (forward) Euler
//!
//! [`Derivative`]: stepwise_core::Derivative
//! [`AlgebraicRelation`]: stepwise_core::AlgebraicRelation
//! [`State`]: stepwise_core::State

pub mod euler;
