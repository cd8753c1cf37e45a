//! lab-reduce: pendulum-period reduction to an estimate of g.
//!
//! Provides:
//! - Sample table loading (`time`, `nattempts` columns)
//! - Mean / sample standard deviation of the per-swing period
//! - g and its propagated uncertainty

pub mod error;
pub mod gravity;
pub mod table;

pub use error::{ReduceError, ReduceResult};
pub use gravity::{
    GravityConfig, GravityEstimate, GravityReport, estimate_from_periods, estimate_gravity,
    gravity_from_period, gravity_uncertainty,
};
pub use table::{Sample, SampleTable};
