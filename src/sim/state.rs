//! Mutable simulation state and operating modes.

/// On/off state of the load or the solar source.
///
/// The switching rules treat load power and source current as
/// magnitude-or-zero values. Keeping the mode explicit and recovering the
/// magnitude through [`Mode::scaled`] preserves that arithmetic while
/// making the flag visible in the state.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Mode {
    On,
    Off,
}

impl Mode {
    /// The magnitude this mode contributes: `magnitude` when on, 0 when off.
    pub fn scaled(self, magnitude: f64) -> f64 {
        match self {
            Mode::On => magnitude,
            Mode::Off => 0.0,
        }
    }

    /// Check if the mode is on.
    pub fn is_on(self) -> bool {
        self == Mode::On
    }
}

/// Continuous and discrete state advanced by the simulation loop.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SimulationState {
    /// Capacitor charge (C); clamped at zero, never negative
    pub charge_c: f64,
    /// Solar source mode (injects the short-circuit current when on)
    pub source: Mode,
    /// Load mode (draws the configured power when on)
    pub load: Mode,
    /// Node voltage from the most recent solve (V)
    pub voltage_v: f64,
    /// Elapsed time (s); advances by dt each step
    pub time_s: f64,
}
