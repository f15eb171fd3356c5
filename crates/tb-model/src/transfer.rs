//! Continuous transfer-function models.

use crate::error::{ModelError, ModelResult};
use tb_core::{Real, ensure_finite};

/// A continuous-time transfer function given as coefficient lists,
/// highest power of `s` first.
///
/// Coefficients are normalized at construction so the denominator is monic;
/// the numerator is padded on the left with zeros to the denominator length.
/// Only proper ratios are accepted: the denominator must carry at least as
/// many coefficients as the numerator, and its leading coefficient must be
/// nonzero.
#[derive(Debug, Clone, PartialEq)]
pub struct TransferFunction {
    num: Vec<Real>,
    den: Vec<Real>,
}

impl TransferFunction {
    /// Build a transfer function from raw coefficient lists.
    ///
    /// # Errors
    ///
    /// Fails if either list is empty, any coefficient is non-finite, the
    /// leading denominator coefficient is zero, or the numerator is longer
    /// than the denominator (improper ratio).
    pub fn new(numerator: Vec<Real>, denominator: Vec<Real>) -> ModelResult<Self> {
        if numerator.is_empty() {
            return Err(ModelError::InvalidArg {
                what: "numerator must not be empty",
            });
        }
        if denominator.is_empty() {
            return Err(ModelError::InvalidArg {
                what: "denominator must not be empty",
            });
        }
        for &c in &numerator {
            ensure_finite(c, "numerator coefficient")?;
        }
        for &c in &denominator {
            ensure_finite(c, "denominator coefficient")?;
        }
        if numerator.len() > denominator.len() {
            return Err(ModelError::Improper {
                num_len: numerator.len(),
                den_len: denominator.len(),
            });
        }
        let lead = denominator[0];
        if lead == 0.0 {
            return Err(ModelError::InvalidArg {
                what: "leading denominator coefficient must be nonzero",
            });
        }

        // Monic denominator, zero-padded numerator of equal length.
        let den: Vec<Real> = denominator.iter().map(|c| c / lead).collect();
        let mut num = vec![0.0; den.len() - numerator.len()];
        num.extend(numerator.iter().map(|c| c / lead));

        Ok(Self { num, den })
    }

    /// Numerator coefficients after normalization (same length as the denominator).
    pub fn numerator(&self) -> &[Real] {
        &self.num
    }

    /// Monic denominator coefficients.
    pub fn denominator(&self) -> &[Real] {
        &self.den
    }

    /// System order: degree of the denominator.
    pub fn order(&self) -> usize {
        self.den.len() - 1
    }

    /// Steady-state gain (`s -> 0` limit), if the denominator has a nonzero
    /// constant term. A pure integrator has no finite DC gain.
    pub fn dc_gain(&self) -> Option<Real> {
        let a0 = *self.den.last()?;
        if a0 == 0.0 {
            return None;
        }
        Some(self.num.last()? / a0)
    }
}
