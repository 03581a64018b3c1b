//! Common guards for intermediate quantities.

use crate::error::{DomainError, EngineResult};
use fl_core::numeric::ensure_finite;

/// Ensure a value is finite, returning DomainError if not.
pub fn check_finite(value: f64, what: &'static str) -> EngineResult<f64> {
    Ok(ensure_finite(value, what)?)
}

/// Ensure a value is finite and strictly positive.
pub fn check_positive(value: f64, what: &'static str) -> EngineResult<f64> {
    let value = check_finite(value, what)?;
    if value > 0.0 {
        Ok(value)
    } else {
        Err(DomainError::NonPhysical { what, value })
    }
}
