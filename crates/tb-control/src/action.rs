//! Actuator command types.

use serde::{Deserialize, Serialize};
use tb_core::Real;

/// Duty-cycle command for the rig's three actuators.
///
/// Values are fractional PWM duties; the orchestrator owns clamping,
/// disturbance injection and the actual write to the board.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct ControlAction {
    /// Heater 1 duty.
    pub heater1: Real,
    /// Heater 2 duty.
    pub heater2: Real,
    /// Cooler duty. The shipped control law does not model cooling and
    /// always commands zero here.
    pub cooler: Real,
}

/// Whether a call produced a freshly computed action or repeated the cache.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum ActionFlag {
    /// The action was recomputed on this call.
    New,
    /// The cached action from an earlier call was returned unchanged.
    Unchanged,
}

impl ActionFlag {
    /// True if the action was recomputed on this call.
    pub fn is_new(self) -> bool {
        matches!(self, Self::New)
    }
}
