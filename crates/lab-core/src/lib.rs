//! lab-core: shared foundation for the pendulab demonstrations.
//!
//! Contains:
//! - units (uom SI types + constructors)
//! - numeric (Real + tolerances + float helpers)
//! - error (shared error types)

pub mod error;
pub mod numeric;
pub mod units;

pub use error::{LabError, LabResult};
pub use numeric::*;
pub use units::*;
