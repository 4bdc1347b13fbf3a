//! Reusable observers for the Stepwise solvers.
//!
//! This crate provides [`Observer`] implementations and capability traits that
//! work across the transient and optimization solvers.
//!
//! # Modules
//!
//! - [`traits`]: capability traits for cross-solver observers
//!   ([`HasIteration`], [`HasTime`], [`HasObjective`], [`CanStopEarly`])
//! - [`stop`]: observers that end a run early
//!
//! [`Observer`]: stepwise_core::Observer
//! [`HasIteration`]: traits::HasIteration
//! [`HasTime`]: traits::HasTime
//! [`HasObjective`]: traits::HasObjective
//! [`CanStopEarly`]: traits::CanStopEarly

pub mod stop;
pub mod traits;

pub use stop::{ObjectiveBelow, StopAfter};
