//! Controller configuration.

use serde::{Deserialize, Serialize};
use tb_core::Real;
use tb_model::DiscretizeMethod;

/// Which sensors feed the tracking error.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ErrorSource {
    /// Mean of the two heater sensors (canonical).
    #[default]
    HeaterAverage,
    /// Heater 1 sensor alone (single-sensor rigs).
    Heater1,
}

/// Construction-time configuration for a [`StateSpaceController`].
///
/// Deserializable from the orchestrator's JSON configuration; every field
/// has a default matching the stock rig controller, so a config file only
/// names what it overrides.
///
/// [`StateSpaceController`]: crate::StateSpaceController
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ControllerConfig {
    /// Transfer-function numerator coefficients, highest power first.
    pub numerator: Vec<Real>,
    /// Transfer-function denominator coefficients, highest power first.
    /// Must be at least as long as the numerator.
    pub denominator: Vec<Real>,
    /// Sampling interval in seconds (> 0).
    pub sampling_time: Real,
    /// Discretization method ("tustin"/"bilinear", "zoh", "euler").
    pub method: DiscretizeMethod,
    /// Polling ticks between recomputed actions (>= 1).
    pub period: u32,
    /// Sensor selection for the tracking error.
    pub error_source: ErrorSource,
}

impl Default for ControllerConfig {
    fn default() -> Self {
        Self {
            numerator: vec![1.0],
            denominator: vec![1.0, 2.0, 1.0],
            sampling_time: 0.2,
            method: DiscretizeMethod::Tustin,
            period: 1,
            error_source: ErrorSource::HeaterAverage,
        }
    }
}
