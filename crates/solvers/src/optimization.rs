//! Solvers for optimization problems: minimizing a scalar objective over a
//! flat vector of free parameters.
//!
//! An [`Objective`] maps `x: Array1<f64>` and caller-owned parameters to a
//! scalar. The building blocks in this module can be used on their own or
//! through the [`descent`] driver.
//!
//! # Building blocks
//!
//! - [`gradient`]: central finite-difference gradient with a control mask
//! - [`line_search`]: backtracking line search on the Armijo condition
//!
//! # Solvers
//!
//! - [`descent`]: steepest descent with a finite-difference or analytic
//!   gradient
//!
//! [`Objective`]: stepwise_core::Objective

mod evaluate;

pub use evaluate::{EvalError, evaluate};

pub mod descent;
pub mod gradient;
pub mod line_search;
