//! Controller implementations.
//!
//! Provides the rig's controller types:
//! - **StateSpaceController**: discrete state-space feedback on the
//!   relative zone-1 setpoint
//! - **NullController**: gated do-nothing controller for hardware dry-runs
//!
//! Both controllers validate their per-call inputs before touching any
//! internal state and share the same gating semantics.

use crate::action::{ActionFlag, ControlAction};
use crate::config::{ControllerConfig, ErrorSource};
use crate::error::ControlResult;
use crate::gate::UpdateGate;
use crate::inputs::{Setpoints, Temperatures};
use nalgebra::DVector;
use tb_core::Real;
use tb_model::{ContinuousStateSpace, DiscreteStateSpace, TransferFunction};

/// The scalar tracking error is fed to this many input channels.
const INPUT_CHANNELS: usize = 2;

/// Discrete-time state-space feedback controller.
///
/// Owns an immutable [`DiscreteStateSpace`] built once at construction and
/// the mutable pieces that live for the controller's whole lifetime: the
/// state vector (dynamical memory, initially zero), the update gate, and
/// the last computed action. Nothing here is ever reset short of building a
/// new controller.
#[derive(Debug, Clone)]
pub struct StateSpaceController {
    system: DiscreteStateSpace,
    state: DVector<Real>,
    gate: UpdateGate,
    last_action: ControlAction,
    error_source: ErrorSource,
}

impl StateSpaceController {
    /// Build a controller from configuration.
    ///
    /// Runs the whole model pipeline (transfer function, controllable
    /// canonical realization, input duplication, discretization) exactly
    /// once. This constructor is the only way a controller comes into
    /// existence; loading a configuration file must not build one
    /// implicitly.
    ///
    /// # Errors
    ///
    /// Fails on malformed coefficients (improper ratio, zero leading
    /// denominator coefficient, non-finite values), a non-positive sampling
    /// interval, a singular Tustin map, or a zero gate period. No partial
    /// controller is produced on failure.
    pub fn new(config: &ControllerConfig) -> ControlResult<Self> {
        let tf = TransferFunction::new(config.numerator.clone(), config.denominator.clone())?;
        let system = ContinuousStateSpace::from_transfer(&tf)
            .split_input(INPUT_CHANNELS)
            .discretize(config.sampling_time, config.method)?;
        let gate = UpdateGate::new(config.period)?;
        let state = system.zero_state();

        tracing::debug!(
            order = system.order(),
            dt = system.dt(),
            method = ?config.method,
            period = config.period,
            "state-space controller ready"
        );

        Ok(Self {
            system,
            state,
            gate,
            last_action: ControlAction::default(),
            error_source: config.error_source,
        })
    }

    /// Run one polling tick of the control law.
    ///
    /// Validates the input frames, counts a gate tick, and either computes
    /// a new action (flag [`ActionFlag::New`]) or returns the cached one
    /// (flag [`ActionFlag::Unchanged`]). With period 1 every call
    /// recomputes.
    ///
    /// A new action is computed as:
    /// error = relative setpoint 1 − (sensed − ambient), where `sensed` is
    /// the heater average (or heater 1 alone, per [`ErrorSource`]); the
    /// discrete system advances one tick with that error on both input
    /// channels, and its output drives both heaters symmetrically. Cooling
    /// is not modeled: the cooler duty is always zero.
    ///
    /// # Errors
    ///
    /// Fails if `set_points` has fewer than 4 or `temperatures` fewer than
    /// 3 values. A failed call consumes no gate tick and leaves the state
    /// vector untouched.
    pub fn compute(
        &mut self,
        set_points: &[Real],
        temperatures: &[Real],
    ) -> ControlResult<(ControlAction, ActionFlag)> {
        let setpoints = Setpoints::from_slice(set_points)?;
        let temps = Temperatures::from_slice(temperatures)?;

        if !self.gate.tick() {
            return Ok((self.last_action, ActionFlag::Unchanged));
        }

        let sensed = match self.error_source {
            ErrorSource::HeaterAverage => temps.heater_average(),
            ErrorSource::Heater1 => temps.heater1,
        };
        let error = setpoints.heater1_rel - (sensed - temps.ambient);

        let u = DVector::from_element(self.system.inputs(), error);
        let (output, next_state) = self.system.step(&self.state, &u);
        self.state = next_state;

        let duty = output[0];
        self.last_action = ControlAction {
            heater1: duty,
            heater2: duty,
            cooler: 0.0,
        };
        tracing::trace!(error, duty, "new control action");

        Ok((self.last_action, ActionFlag::New))
    }

    /// The discrete system the controller steps.
    pub fn system(&self) -> &DiscreteStateSpace {
        &self.system
    }

    /// Current state vector (dynamical memory).
    pub fn state(&self) -> &DVector<Real> {
        &self.state
    }

    /// Most recently computed action.
    pub fn last_action(&self) -> ControlAction {
        self.last_action
    }

    /// Sampling interval (seconds) the model was discretized at.
    pub fn sampling_time(&self) -> Real {
        self.system.dt()
    }

    /// Polling ticks between recomputed actions.
    pub fn period(&self) -> u32 {
        self.gate.period()
    }
}

/// Do-nothing controller: same inputs, same gating, all-zero actions.
///
/// Lets the orchestrator exercise the full polling loop against real
/// hardware without driving the heaters.
#[derive(Debug, Clone)]
pub struct NullController {
    gate: UpdateGate,
    last_action: ControlAction,
}

impl NullController {
    /// Create a null controller recomputing every `period` ticks.
    pub fn new(period: u32) -> ControlResult<Self> {
        Ok(Self {
            gate: UpdateGate::new(period)?,
            last_action: ControlAction::default(),
        })
    }

    /// Run one polling tick; the computed action is always all-zero.
    pub fn compute(
        &mut self,
        set_points: &[Real],
        temperatures: &[Real],
    ) -> ControlResult<(ControlAction, ActionFlag)> {
        Setpoints::from_slice(set_points)?;
        Temperatures::from_slice(temperatures)?;

        if self.gate.tick() {
            self.last_action = ControlAction::default();
            Ok((self.last_action, ActionFlag::New))
        } else {
            Ok((self.last_action, ActionFlag::Unchanged))
        }
    }
}
