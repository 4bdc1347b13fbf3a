pub mod ode;
pub mod optimization;

pub use ode::{AlgebraicRelation, Derivative};
pub use optimization::{Gradient, Objective};
