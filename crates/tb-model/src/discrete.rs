//! Discretization of continuous state-space systems.
//!
//! A [`ContinuousStateSpace`] is converted once, at controller construction,
//! into a [`DiscreteStateSpace`] at a fixed sampling interval. The transform
//! is selected by [`DiscretizeMethod`]; Tustin is the default and the only
//! method that can fail (its bilinear map requires a matrix inverse).

use crate::error::{ModelError, ModelResult};
use crate::statespace::ContinuousStateSpace;
use nalgebra::{DMatrix, DVector};
use serde::{Deserialize, Serialize};
use tb_core::Real;

/// Discretization transform selection.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum DiscretizeMethod {
    /// Bilinear (Tustin) transform. Matches the continuous frequency
    /// response at low frequencies and preserves stability.
    #[default]
    #[serde(alias = "bilinear")]
    Tustin,
    /// Zero-order hold: exact for piecewise-constant inputs.
    Zoh,
    /// Forward Euler: first-order, cheapest, can destabilize stiff plants.
    Euler,
}

impl ContinuousStateSpace {
    /// Discretize at sampling interval `dt` (seconds) with the given method.
    ///
    /// # Errors
    ///
    /// Fails if `dt` is not strictly positive, or if the Tustin transform
    /// hits a singular `I - (T/2)A`.
    pub fn discretize(&self, dt: Real, method: DiscretizeMethod) -> ModelResult<DiscreteStateSpace> {
        if !(dt > 0.0) {
            return Err(ModelError::InvalidArg {
                what: "sampling interval must be positive",
            });
        }
        let (a, b, c, d) = match method {
            DiscretizeMethod::Tustin => self.tustin(dt)?,
            DiscretizeMethod::Zoh => self.zoh(dt),
            DiscretizeMethod::Euler => self.euler(dt),
        };
        Ok(DiscreteStateSpace { a, b, c, d, dt })
    }

    /// Bilinear transform:
    /// `Ad = (I - (T/2)A)^-1 (I + (T/2)A)`, `Bd = (I - (T/2)A)^-1 T B`,
    /// `Cd = C (I - (T/2)A)^-1`, `Dd = D + (T/2) C (I - (T/2)A)^-1 B`.
    ///
    /// The feedthrough term folds the already-scaled `Bd` back in as
    /// `Dd = D + C Bd / 2`, which keeps the discrete DC gain identical to
    /// the continuous one (z = 1 maps onto s = 0).
    fn tustin(&self, dt: Real) -> ModelResult<Matrices> {
        let n = self.order();
        let eye = DMatrix::identity(n, n);
        let half_a = &self.a * (0.5 * dt);

        let inv = (&eye - &half_a)
            .lu()
            .try_inverse()
            .ok_or(ModelError::SingularMatrix {
                what: "I - (T/2)A is not invertible",
            })?;

        let ad = &inv * (&eye + &half_a);
        let bd = &inv * (&self.b * dt);
        let cd = &self.c * &inv;
        let dd = &self.d + (&self.c * &bd) * 0.5;
        Ok((ad, bd, cd, dd))
    }

    /// Zero-order hold via the augmented matrix exponential
    /// `exp([[A, B], [0, 0]] T)`, whose top blocks are `Ad` and `Bd`.
    /// Avoids inverting `A`, which may legitimately be singular.
    fn zoh(&self, dt: Real) -> Matrices {
        let n = self.order();
        let m = self.inputs();

        let mut aug = DMatrix::zeros(n + m, n + m);
        aug.view_mut((0, 0), (n, n)).copy_from(&self.a);
        aug.view_mut((0, n), (n, m)).copy_from(&self.b);

        let e = (aug * dt).exp();
        let ad = e.view((0, 0), (n, n)).into_owned();
        let bd = e.view((0, n), (n, m)).into_owned();
        (ad, bd, self.c.clone(), self.d.clone())
    }

    /// Forward Euler: `Ad = I + T A`, `Bd = T B`.
    fn euler(&self, dt: Real) -> Matrices {
        let n = self.order();
        let ad = DMatrix::identity(n, n) + &self.a * dt;
        let bd = &self.b * dt;
        (ad, bd, self.c.clone(), self.d.clone())
    }
}

type Matrices = (DMatrix<Real>, DMatrix<Real>, DMatrix<Real>, DMatrix<Real>);

/// Discrete-time state-space system `x[k+1] = Ad x[k] + Bd u[k]`,
/// `y[k] = Cd x[k] + Dd u[k]`, sampled at a fixed interval.
///
/// Immutable once built. The dynamical memory (the state vector) lives with
/// the caller; see [`DiscreteStateSpace::zero_state`] and
/// [`DiscreteStateSpace::step`].
#[derive(Debug, Clone, PartialEq)]
pub struct DiscreteStateSpace {
    a: DMatrix<Real>,
    b: DMatrix<Real>,
    c: DMatrix<Real>,
    d: DMatrix<Real>,
    dt: Real,
}

impl DiscreteStateSpace {
    /// State transition matrix `Ad`.
    pub fn a(&self) -> &DMatrix<Real> {
        &self.a
    }

    /// Input matrix `Bd`.
    pub fn b(&self) -> &DMatrix<Real> {
        &self.b
    }

    /// Output matrix `Cd`.
    pub fn c(&self) -> &DMatrix<Real> {
        &self.c
    }

    /// Feedthrough matrix `Dd`.
    pub fn d(&self) -> &DMatrix<Real> {
        &self.d
    }

    /// Sampling interval (seconds) the system was discretized at.
    pub fn dt(&self) -> Real {
        self.dt
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

    /// The all-zero initial state vector.
    pub fn zero_state(&self) -> DVector<Real> {
        DVector::zeros(self.order())
    }

    /// Advance one tick: returns the output at the current state and the
    /// successor state.
    pub fn step(&self, x: &DVector<Real>, u: &DVector<Real>) -> (DVector<Real>, DVector<Real>) {
        debug_assert_eq!(x.len(), self.order());
        debug_assert_eq!(u.len(), self.inputs());
        let y = &self.c * x + &self.d * u;
        let x_next = &self.a * x + &self.b * u;
        (y, x_next)
    }

    /// Forced response: drive the system with an input sequence from `x0`,
    /// returning the output trajectory and the final state.
    pub fn forced_response(
        &self,
        x0: &DVector<Real>,
        inputs: &[DVector<Real>],
    ) -> (Vec<DVector<Real>>, DVector<Real>) {
        let mut x = x0.clone();
        let mut outputs = Vec::with_capacity(inputs.len());
        for u in inputs {
            let (y, x_next) = self.step(&x, u);
            outputs.push(y);
            x = x_next;
        }
        (outputs, x)
    }
}
