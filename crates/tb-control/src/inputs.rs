//! Per-call input frames: setpoints and measured temperatures.

use crate::error::{ControlError, ControlResult};
use tb_core::{Real, unset_to_zero};

/// Setpoint frame for one control tick.
///
/// Built from an ordered slice of at least [`Setpoints::MIN_LEN`] values:
/// absolute setpoint 1, absolute setpoint 2, relative setpoint 1, relative
/// setpoint 2. NaN entries mean "unset" and read as zero.
///
/// Only `heater1_rel` drives the shipped control law; the absolute
/// setpoints and `heater2_rel` are carried for future zone-2 and absolute
/// control laws.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Setpoints {
    /// Absolute target for heater zone 1.
    pub heater1_abs: Real,
    /// Absolute target for heater zone 2.
    pub heater2_abs: Real,
    /// Target rise of zone 1 over ambient.
    pub heater1_rel: Real,
    /// Target rise of zone 2 over ambient.
    pub heater2_rel: Real,
}

impl Setpoints {
    /// Minimum number of values a setpoint slice must carry.
    pub const MIN_LEN: usize = 4;

    /// Parse a setpoint slice, substituting zero for NaN entries.
    ///
    /// # Errors
    ///
    /// Fails if the slice is shorter than [`Setpoints::MIN_LEN`]. There is
    /// no implicit padding beyond the NaN substitution.
    pub fn from_slice(values: &[Real]) -> ControlResult<Self> {
        if values.len() < Self::MIN_LEN {
            return Err(ControlError::ShortInput {
                what: "setpoints",
                needed: Self::MIN_LEN,
                got: values.len(),
            });
        }
        Ok(Self {
            heater1_abs: unset_to_zero(values[0]),
            heater2_abs: unset_to_zero(values[1]),
            heater1_rel: unset_to_zero(values[2]),
            heater2_rel: unset_to_zero(values[3]),
        })
    }
}

/// Temperature frame for one control tick: heater 1, heater 2, ambient.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Temperatures {
    /// Heater zone 1 sensor.
    pub heater1: Real,
    /// Heater zone 2 sensor.
    pub heater2: Real,
    /// Ambient sensor.
    pub ambient: Real,
}

impl Temperatures {
    /// Minimum number of values a temperature slice must carry.
    pub const MIN_LEN: usize = 3;

    /// Parse a temperature slice.
    ///
    /// # Errors
    ///
    /// Fails if the slice is shorter than [`Temperatures::MIN_LEN`].
    pub fn from_slice(values: &[Real]) -> ControlResult<Self> {
        if values.len() < Self::MIN_LEN {
            return Err(ControlError::ShortInput {
                what: "temperatures",
                needed: Self::MIN_LEN,
                got: values.len(),
            });
        }
        Ok(Self {
            heater1: values[0],
            heater2: values[1],
            ambient: values[2],
        })
    }

    /// Mean of the two heater sensors.
    pub fn heater_average(&self) -> Real {
        0.5 * (self.heater1 + self.heater2)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn nan_setpoints_read_as_zero() {
        let sp = Setpoints::from_slice(&[Real::NAN, Real::NAN, 5.0, Real::NAN]).unwrap();
        assert_eq!(sp.heater1_abs, 0.0);
        assert_eq!(sp.heater2_abs, 0.0);
        assert_eq!(sp.heater1_rel, 5.0);
        assert_eq!(sp.heater2_rel, 0.0);
    }

    #[test]
    fn extra_setpoint_values_are_ignored() {
        let sp = Setpoints::from_slice(&[1.0, 2.0, 3.0, 4.0, 99.0]).unwrap();
        assert_eq!(sp.heater1_rel, 3.0);
    }

    #[test]
    fn short_setpoint_slice_is_an_error() {
        let err = Setpoints::from_slice(&[1.0, 2.0, 3.0]).unwrap_err();
        assert!(matches!(
            err,
            ControlError::ShortInput {
                needed: 4,
                got: 3,
                ..
            }
        ));
    }

    #[test]
    fn short_temperature_slice_is_an_error() {
        let err = Temperatures::from_slice(&[20.0, 21.0]).unwrap_err();
        assert!(matches!(
            err,
            ControlError::ShortInput {
                needed: 3,
                got: 2,
                ..
            }
        ));
    }

    #[test]
    fn heater_average() {
        let temps = Temperatures::from_slice(&[30.0, 40.0, 25.0]).unwrap();
        assert_eq!(temps.heater_average(), 35.0);
    }
}

#[cfg(test)]
mod proptests {
    use super::*;
    use proptest::prelude::*;

    fn maybe_unset() -> impl Strategy<Value = Real> {
        prop_oneof![Just(Real::NAN), -100.0_f64..100.0_f64]
    }

    proptest! {
        // A NaN-bearing slice must parse exactly like the slice with each
        // NaN replaced by zero up front.
        #[test]
        fn nan_substitution_matches_explicit_zeros(
            values in prop::collection::vec(maybe_unset(), 4..8)
        ) {
            let substituted: Vec<Real> =
                values.iter().map(|&v| if v.is_nan() { 0.0 } else { v }).collect();
            let parsed = Setpoints::from_slice(&values).unwrap();
            let expected = Setpoints::from_slice(&substituted).unwrap();
            prop_assert_eq!(parsed, expected);
        }
    }
}
