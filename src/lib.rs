//! # Capsim
//!
//! A simulator for solar-charged capacitive energy buffers driving an
//! intermittent load.
//!
//! This library provides:
//! - A closed-form node-voltage solve for a solar cell feeding a storage
//!   capacitor (with equivalent series resistance) and a constant-power load
//! - Mode switching for the load and the solar source (threshold cutoff,
//!   charge-to-full resume, source cutoff at open-circuit voltage)
//! - A fixed-step simulation loop producing a voltage-vs-time trace
//!
//! ## Architecture
//!
//! The library is organized into several modules:
//!
//! - [`circuit`] - Pure circuit equations (solar current, discriminant, node voltage)
//! - [`sim`] - Simulation parameters, state, and the stepping loop
//! - [`trace`] - The ordered (time, voltage) sample sequence
//! - [`output`] - CSV emission (CLI only)
//!
//! ## Usage
//!
//! ```bash
//! capsim 0.01 0.2 4.0 0.001 1.0 0.002 0.001 3.0 0.1 1.0
//! ```
//!
//! writes the trace to `./log.csv` with a `t_s,volts` header.
//!
//! ## Simulation Method
//!
//! Each time step balances the load power against the capacitor charge and
//! injected solar current across the ESR, yielding a quadratic whose positive
//! root is the node voltage:
//!
//! 1. Discharge/charge the capacitor by the net current over dt
//! 2. Evaluate the quadratic discriminant; a negative discriminant means the
//!    load power is unreachable, so the load is switched off for that step
//! 3. Take the positive root as the node voltage and apply the switching
//!    rules for the next step

pub mod circuit;
pub mod error;
pub mod sim;
pub mod trace;

#[cfg(feature = "cli")]
pub mod output;

// Re-export main types for convenience
pub use error::{CapsimError, Result};
pub use sim::{Parameters, SimulationState, Simulator};
pub use trace::{Sample, Trace};

/// Solar irradiance at the array, in W/m².
pub const SOLAR_IRRADIANCE_W_M2: f64 = 1336.1;
