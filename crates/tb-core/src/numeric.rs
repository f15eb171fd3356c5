use crate::CoreError;

/// Floating point type used throughout the system
pub type Real = f64;

/// One tolerance for everything
#[derive(Clone, Copy, Debug)]
pub struct Tolerances {
    pub abs: Real,
    pub rel: Real,
}

impl Default for Tolerances {
    fn default() -> Self {
        Self {
            abs: 1e-12,
            rel: 1e-9,
        }
    }
}

pub fn nearly_equal(a: Real, b: Real, tol: Tolerances) -> bool {
    let diff = (a - b).abs();
    if diff <= tol.abs {
        return true;
    }
    diff <= tol.rel * a.abs().max(b.abs())
}

pub fn ensure_finite(v: Real, what: &'static str) -> Result<Real, CoreError> {
    if v.is_finite() {
        Ok(v)
    } else {
        Err(CoreError::NonFinite { what, value: v })
    }
}

/// Map the "unset" NaN sentinel to zero, leaving set values untouched.
///
/// Experiment tables leave setpoint cells empty when a zone is inactive;
/// those cells arrive here as NaN and must read as zero, not as an error.
pub fn unset_to_zero(v: Real) -> Real {
    if v.is_nan() { 0.0 } else { v }
}


#[cfg(test)]
mod proptests {
    use super::*;
    use proptest::prelude::*;

    proptest! {
        #[test]
        fn unset_to_zero_preserves_finite(v in -1e9_f64..1e9_f64) {
            prop_assert_eq!(unset_to_zero(v), v);
        }

        #[test]
        fn nearly_equal_is_symmetric(a in -1e6_f64..1e6_f64, b in -1e6_f64..1e6_f64) {
            let tol = Tolerances::default();
            prop_assert_eq!(nearly_equal(a, b, tol), nearly_equal(b, a, tol));
        }
    }
}
