//! Continuous-time state-space realization.

use crate::transfer::TransferFunction;
use nalgebra::DMatrix;
use tb_core::Real;

/// Continuous-time state-space system `x' = Ax + Bu`, `y = Cx + Du`.
///
/// Produced from a [`TransferFunction`] in controllable canonical form. The
/// realization order equals the transfer function's denominator degree; the
/// initial state of any system built from it is the zero vector.
#[derive(Debug, Clone, PartialEq)]
pub struct ContinuousStateSpace {
    pub a: DMatrix<Real>,
    pub b: DMatrix<Real>,
    pub c: DMatrix<Real>,
    pub d: DMatrix<Real>,
}

impl ContinuousStateSpace {
    /// Realize a transfer function in controllable canonical form.
    ///
    /// The companion matrix carries the negated denominator coefficients in
    /// its first row, the input enters the first state, and the output row
    /// is formed from the numerator residuals against the feedthrough term.
    pub fn from_transfer(tf: &TransferFunction) -> Self {
        let n = tf.order();
        let num = tf.numerator();
        let den = tf.denominator();
        let b0 = num[0];

        let a = DMatrix::from_fn(n, n, |i, j| {
            if i == 0 {
                -den[j + 1]
            } else if j + 1 == i {
                1.0
            } else {
                0.0
            }
        });
        let b = DMatrix::from_fn(n, 1, |i, _| if i == 0 { 1.0 } else { 0.0 });
        let c = DMatrix::from_fn(1, n, |_, j| num[j + 1] - den[j + 1] * b0);
        let d = DMatrix::from_element(1, 1, b0);

        Self { a, b, c, d }
    }

    /// Duplicate the single input across `channels` input columns.
    ///
    /// Each column is scaled by `1 / channels`, so driving every channel
    /// with the same scalar reproduces the single-input response exactly.
    /// This keeps the duplicated command a genuine multi-input system with
    /// one shared state vector instead of parallel per-channel trackers.
    ///
    /// # Panics
    ///
    /// Panics if the system does not have exactly one input or if
    /// `channels` is zero.
    pub fn split_input(self, channels: usize) -> Self {
        assert_eq!(self.b.ncols(), 1, "input splitting requires a single input");
        assert!(channels > 0, "channel count must be positive");

        let scale = 1.0 / channels as Real;
        let n = self.a.nrows();
        let p = self.c.nrows();
        let b = DMatrix::from_fn(n, channels, |i, _| self.b[(i, 0)] * scale);
        let d = DMatrix::from_fn(p, channels, |i, _| self.d[(i, 0)] * scale);

        Self { b, d, ..self }
    }

    /// Number of state variables.
    pub fn order(&self) -> usize {
        self.a.nrows()
    }

    /// Number of input channels.
    pub fn inputs(&self) -> usize {
        self.b.ncols()
    }

    /// Number of outputs.
    pub fn outputs(&self) -> usize {
        self.c.nrows()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn second_order_plant() -> TransferFunction {
        TransferFunction::new(vec![1.0], vec![1.0, 2.0, 1.0]).unwrap()
    }

    #[test]
    fn canonical_form_of_second_order_plant() {
        let ss = ContinuousStateSpace::from_transfer(&second_order_plant());
        assert_eq!(ss.order(), 2);
        assert_eq!(ss.inputs(), 1);
        assert_eq!(ss.outputs(), 1);

        assert_eq!(ss.a[(0, 0)], -2.0);
        assert_eq!(ss.a[(0, 1)], -1.0);
        assert_eq!(ss.a[(1, 0)], 1.0);
        assert_eq!(ss.a[(1, 1)], 0.0);
        assert_eq!(ss.b[(0, 0)], 1.0);
        assert_eq!(ss.b[(1, 0)], 0.0);
        assert_eq!(ss.c[(0, 0)], 0.0);
        assert_eq!(ss.c[(0, 1)], 1.0);
        assert_eq!(ss.d[(0, 0)], 0.0);
    }

    #[test]
    fn biproper_ratio_gets_feedthrough() {
        // (s + 3) / (s + 1): D = 1, C = [3 - 1] = [2]
        let tf = TransferFunction::new(vec![1.0, 3.0], vec![1.0, 1.0]).unwrap();
        let ss = ContinuousStateSpace::from_transfer(&tf);
        assert_eq!(ss.d[(0, 0)], 1.0);
        assert_eq!(ss.c[(0, 0)], 2.0);
    }

    #[test]
    fn split_input_halves_columns() {
        let ss = ContinuousStateSpace::from_transfer(&second_order_plant()).split_input(2);
        assert_eq!(ss.inputs(), 2);
        assert_eq!(ss.b[(0, 0)], 0.5);
        assert_eq!(ss.b[(0, 1)], 0.5);
        assert_eq!(ss.b[(1, 0)], 0.0);
        assert_eq!(ss.d[(0, 0)], 0.0);
        assert_eq!(ss.d[(0, 1)], 0.0);
    }

    #[test]
    fn zero_order_plant_is_pure_gain() {
        let tf = TransferFunction::new(vec![3.0], vec![2.0]).unwrap();
        let ss = ContinuousStateSpace::from_transfer(&tf);
        assert_eq!(ss.order(), 0);
        assert_eq!(ss.d[(0, 0)], 1.5);
    }
}
