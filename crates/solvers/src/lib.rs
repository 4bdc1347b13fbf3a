//! Numerical solvers for Stepwise.
//!
//! - [`transient`]: fixed-step time integration of ODE systems
//! - [`optimization`]: unconstrained minimization of scalar objectives

pub mod optimization;
pub mod transient;
