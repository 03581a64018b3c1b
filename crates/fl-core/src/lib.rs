//! fl-core: numeric foundation for frictionloss.
//!
//! Contains:
//! - units (uom SI types + constructors for the calculator's input units)
//! - numeric (Real + float helpers)
//! - error (shared error types)

pub mod error;
pub mod numeric;
pub mod units;

pub use error::{CoreError, CoreResult};
pub use numeric::*;
pub use units::*;
