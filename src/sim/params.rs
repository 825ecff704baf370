//! Run parameters.

/// The ten inputs describing one simulation run.
///
/// Read once at startup and immutable thereafter. No range validation is
/// performed: out-of-range or non-finite values propagate into the physics
/// as-is.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Parameters {
    /// Solar cell surface area (m²)
    pub area_m2: f64,
    /// Solar cell efficiency (nominally 0-1)
    pub efficiency: f64,
    /// Solar array open-circuit voltage (V)
    pub voc_v: f64,
    /// Energy buffer capacitance (F)
    pub capacitance_f: f64,
    /// Capacitor equivalent series resistance (Ω)
    pub esr_ohm: f64,
    /// Initial capacitor charge (C)
    pub initial_charge_c: f64,
    /// Load power draw while operating (W)
    pub load_power_w: f64,
    /// Voltage threshold below which the load powers off (V)
    pub v_thresh_v: f64,
    /// Simulation time step (s)
    pub dt_s: f64,
    /// Simulation duration (s)
    pub duration_s: f64,
}
