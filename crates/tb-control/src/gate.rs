//! Gating of control-action recomputation.
//!
//! Controllers recompute once every `period` polling ticks and hold the
//! cached action in between. The gate counts polling ticks, not seconds:
//! the caller's loop cadence (one call per sampling interval) is what ties
//! logical ticks to wall-clock time.

use crate::error::{ControlError, ControlResult};
use serde::{Deserialize, Serialize};

/// Tick-counting gate with two logical states.
///
/// The gate is IDLE while fewer than `period` ticks have elapsed since the
/// last action. The tick that completes a window fires the gate (one action
/// is due) and resets the counter in the same call, so there is no
/// multi-tick firing phase. A freshly built gate fires on its first tick.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct UpdateGate {
    period: u32,
    ticks: u32,
}

impl UpdateGate {
    /// Create a gate that fires once every `period` ticks.
    ///
    /// # Errors
    ///
    /// Fails if `period` is zero.
    pub fn new(period: u32) -> ControlResult<Self> {
        if period == 0 {
            return Err(ControlError::InvalidArg {
                what: "gate period must be at least 1",
            });
        }
        // Primed so the very first tick fires.
        Ok(Self {
            period,
            ticks: period - 1,
        })
    }

    /// Configured period in polling ticks.
    pub fn period(&self) -> u32 {
        self.period
    }

    /// Ticks elapsed since the last fired action.
    pub fn ticks_since_action(&self) -> u32 {
        self.ticks
    }

    /// Count one polling tick. Returns `true` when an action is due.
    pub fn tick(&mut self) -> bool {
        self.ticks += 1;
        if self.ticks >= self.period {
            self.ticks = 0;
            true
        } else {
            false
        }
    }
}


#[cfg(test)]
mod proptests {
    use super::*;
    use proptest::prelude::*;

    proptest! {
        // Over any span of whole windows, exactly one tick per window fires,
        // and it is always the first tick of the window.
        #[test]
        fn exactly_one_fire_per_window(period in 1u32..20, windows in 1usize..10) {
            let mut gate = UpdateGate::new(period).unwrap();
            for _ in 0..windows {
                let fires: Vec<bool> =
                    (0..period).map(|_| gate.tick()).collect();
                prop_assert_eq!(fires.iter().filter(|&&f| f).count(), 1);
                prop_assert!(fires[0]);
            }
        }
    }
}
