//! The main simulation loop.

use crate::circuit;
use crate::trace::{Sample, Trace};
use crate::SOLAR_IRRADIANCE_W_M2;

use super::{Mode, Parameters, SimulationState};

/// Fixed-step simulator for the solar/capacitor/load node.
///
/// Owns the run parameters, the mutable [`SimulationState`], and the growing
/// [`Trace`]. Each [`step`](Simulator::step) advances the charge by one dt,
/// re-solves the node voltage, applies the switching rules, and appends one
/// sample.
///
/// The sample appended by each step carries the time value from *before*
/// that step's advance, so the first loop sample repeats `t = 0` with the
/// second computed voltage. This matches the established output format and
/// is kept for compatibility.
pub struct Simulator {
    params: Parameters,
    /// Short-circuit current of the array (A), fixed for the run
    isc_a: f64,
    state: SimulationState,
    trace: Trace,
}

impl Simulator {
    /// Create a simulator and perform the initial solve.
    ///
    /// The source and load both start on; the infeasible-load fallback and
    /// the source-clamp/threshold corrections are applied so the mode flags
    /// are consistent with the initial voltage before the first step.
    pub fn new(params: Parameters) -> Self {
        let isc_a = circuit::solar_current(
            SOLAR_IRRADIANCE_W_M2,
            params.area_m2,
            params.efficiency,
            params.voc_v,
        );

        let state = SimulationState {
            charge_c: params.initial_charge_c,
            source: Mode::On,
            load: Mode::On,
            voltage_v: 0.0,
            time_s: 0.0,
        };

        let mut sim = Self {
            params,
            isc_a,
            state,
            trace: Trace::new(),
        };

        let voltage = sim.solve_node();
        sim.state.voltage_v = voltage;
        sim.trace.push(Sample {
            time_s: sim.state.time_s,
            voltage_v: voltage,
        });

        // The array cannot inject current at or above its open-circuit voltage
        if voltage >= sim.params.voc_v && sim.state.source.is_on() {
            sim.state.source = Mode::Off;
        }

        // The load cannot operate below the threshold
        if voltage < sim.params.v_thresh_v {
            sim.state.load = Mode::Off;
        }

        sim
    }

    /// Solve for the node voltage under the current charge and modes.
    ///
    /// A negative discriminant means the load's requested power is
    /// unreachable: the load is switched off and the solve repeated. With
    /// zero load power the squared term dominates, so the retry cannot go
    /// negative again.
    fn solve_node(&mut self) -> f64 {
        let source_a = self.state.source.scaled(self.isc_a);
        let power_w = self.state.load.scaled(self.params.load_power_w);

        let mut disc = circuit::voltage_discriminant(
            self.state.charge_c,
            self.params.capacitance_f,
            source_a,
            self.params.esr_ohm,
            power_w,
        );

        if disc < 0.0 {
            self.state.load = Mode::Off;
            disc = circuit::voltage_discriminant(
                self.state.charge_c,
                self.params.capacitance_f,
                source_a,
                self.params.esr_ohm,
                0.0,
            );
        }

        circuit::node_voltage(
            disc,
            self.state.charge_c,
            self.params.capacitance_f,
            source_a,
            self.params.esr_ohm,
        )
    }

    /// Advance the simulation by one step, appending one sample.
    ///
    /// The load-current division uses the previous step's voltage and is
    /// intentionally unguarded at zero volts; IEEE semantics propagate.
    pub fn step(&mut self) {
        let p = self.params;

        // Load current drawn at the previous step's voltage
        let load_a = self.state.load.scaled(p.load_power_w) / self.state.voltage_v;
        let source_a = self.state.source.scaled(self.isc_a);

        self.state.charge_c += (source_a - load_a) * p.dt_s;
        if self.state.charge_c < 0.0 {
            self.state.charge_c = 0.0;
        }

        // The array injects only while the node sits below open-circuit voltage
        self.state.source = if self.state.voltage_v >= 0.0 && self.state.voltage_v < p.voc_v {
            Mode::On
        } else {
            Mode::Off
        };

        // The load resumes once the capacitor has charged to open-circuit voltage
        if !self.state.load.is_on() && self.state.voltage_v >= p.voc_v {
            self.state.load = Mode::On;
        }

        let voltage = self.solve_node();
        self.state.voltage_v = voltage;

        if voltage >= p.voc_v && self.state.source.is_on() {
            self.state.source = Mode::Off;
        }

        if voltage < p.v_thresh_v {
            self.state.load = Mode::Off;
        }

        // Sample time is the pre-advance value, see the type-level note
        self.trace.push(Sample {
            time_s: self.state.time_s,
            voltage_v: voltage,
        });
        self.state.time_s += p.dt_s;
    }

    /// Run to completion and return the finished trace.
    ///
    /// Steps until the last appended sample's time reaches the configured
    /// duration.
    pub fn run(mut self) -> Trace {
        while self
            .trace
            .last_time()
            .is_some_and(|t| t < self.params.duration_s)
        {
            self.step();
        }
        self.trace
    }

    /// The array's short-circuit current for this run (A).
    pub fn short_circuit_current(&self) -> f64 {
        self.isc_a
    }

    /// The current simulation state.
    pub fn state(&self) -> &SimulationState {
        &self.state
    }

    /// The trace accumulated so far.
    pub fn trace(&self) -> &Trace {
        &self.trace
    }

    /// The run parameters.
    pub fn params(&self) -> &Parameters {
        &self.params
    }
}
