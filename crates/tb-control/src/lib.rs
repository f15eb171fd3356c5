//! Discrete-time feedback control engine for the thermobench rig.
//!
//! This crate owns the controller that turns setpoints and measured
//! temperatures into heater/cooler duty commands. The engine is a pure
//! computation unit: an external polling loop calls
//! [`StateSpaceController::compute`] once per iteration, and the engine
//! decides internally, through its [`UpdateGate`], whether the tick
//! produces a freshly computed action or repeats the cached one.
//!
//! # Architecture
//!
//! - The dynamic model (transfer function → state-space → discrete system)
//!   is built exactly once, at construction, by `tb-model`
//! - Dynamical memory is a single state vector that persists across calls
//! - All timing is logical (polling ticks); the caller owns the cadence
//! - No I/O, no timers, no locking: one engine instance per control loop
//!
//! # Design Principles
//!
//! - **Construction is explicit**: controllers are built by a caller-invoked
//!   constructor, never as a side effect of loading configuration
//! - **Fail before mutate**: malformed per-call inputs leave the gate and
//!   the state vector untouched
//! - **NaN means unset**: missing setpoints read as zero, not as errors

pub mod action;
pub mod config;
pub mod controller;
pub mod error;
pub mod gate;
pub mod inputs;

pub use action::{ActionFlag, ControlAction};
pub use config::{ControllerConfig, ErrorSource};
pub use controller::{NullController, StateSpaceController};
pub use error::{ControlError, ControlResult};
pub use gate::UpdateGate;
pub use inputs::{Setpoints, Temperatures};
