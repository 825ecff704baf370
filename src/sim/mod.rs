//! Simulation loop for the solar/capacitor/load system.
//!
//! The loop is a fixed-step hybrid automaton: continuous state (capacitor
//! charge) advanced by explicit integration, plus three guarded mode
//! transitions evaluated every step in a fixed order:
//!
//! 1. Source cutoff - the array stops injecting current once the node
//!    voltage reaches its open-circuit voltage
//! 2. Load-on resume - the load switches back on once the capacitor has
//!    charged to the open-circuit voltage
//! 3. Load cutoff - the load switches off below the operating threshold
//!
//! A negative discriminant in the power-balance solve (the load asking for
//! more power than the node can deliver) switches the load off for that
//! step and re-solves; this is normal operation, not an error.

mod params;
mod simulator;
mod state;

pub use params::Parameters;
pub use simulator::Simulator;
pub use state::{Mode, SimulationState};
