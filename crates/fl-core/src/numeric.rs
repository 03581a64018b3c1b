use crate::{CoreError, CoreResult};

/// Floating point type used throughout system
pub type Real = f64;

/// Relative difference `|a - b| / max(|a|, |b|)`, zero when both are zero.
pub fn relative_difference(a: Real, b: Real) -> Real {
    let scale = a.abs().max(b.abs());
    if scale == 0.0 {
        0.0
    } else {
        (a - b).abs() / scale
    }
}

pub fn ensure_finite(v: Real, what: &'static str) -> CoreResult<Real> {
    if v.is_finite() {
        Ok(v)
    } else {
        Err(CoreError::NonFinite { what, value: v })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn relative_difference_handles_zero() {
        assert_eq!(relative_difference(0.0, 0.0), 0.0);
        assert!((relative_difference(100.0, 99.0) - 0.01).abs() < 1e-12);
    }

    #[test]
    fn ensure_finite_detects_nan() {
        let err = ensure_finite(Real::NAN, "test").unwrap_err();
        let msg = format!("{err}");
        assert!(msg.contains("Non-finite"));
    }
}

#[cfg(test)]
mod proptests {
    use super::*;
    use proptest::prelude::*;

    proptest! {
        #[test]
        fn relative_difference_is_symmetric(a in -1e6_f64..1e6, b in -1e6_f64..1e6) {
            prop_assert_eq!(relative_difference(a, b), relative_difference(b, a));
            prop_assert!(relative_difference(a, b) <= 2.0);
        }
    }
}
