//! Capsim - Solar-Charged Capacitor Energy Buffer Simulator
//!
//! Simulates a solar cell charging a storage capacitor that drives a
//! duty-cycled load, and writes the voltage-vs-time trace to `./log.csv`.
//!
//! # Usage
//!
//! ```bash
//! capsim sa_m2 eff voc c_f r_esr q0_c p_on_w v_thresh dt_s dur_s
//! ```

use clap::Parser;
use capsim::{error::Result, output, Parameters, Simulator};

/// Solar-charged capacitor energy buffer simulator
#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
struct Args {
    /// Solar cell surface area in square meters
    #[arg(value_name = "SA_M2")]
    sa_m2: f64,

    /// Solar cell efficiency
    #[arg(value_name = "EFF")]
    eff: f64,

    /// Solar array open-circuit voltage in volts
    #[arg(value_name = "VOC")]
    voc: f64,

    /// Energy buffer capacitance in farads
    #[arg(value_name = "C_F")]
    c_f: f64,

    /// Capacitor equivalent series resistance in ohms
    #[arg(value_name = "R_ESR")]
    r_esr: f64,

    /// Initial charge of the capacitor in coulombs
    #[arg(value_name = "Q0_C")]
    q0_c: f64,

    /// Power draw during operation in watts
    #[arg(value_name = "P_ON_W")]
    p_on_w: f64,

    /// Voltage threshold for power off in volts
    #[arg(value_name = "V_THRESH")]
    v_thresh: f64,

    /// Simulation time step in seconds
    #[arg(value_name = "DT_S")]
    dt_s: f64,

    /// Simulation duration in seconds
    #[arg(value_name = "DUR_S")]
    dur_s: f64,
}

fn main() -> Result<()> {
    let args = Args::parse();

    let params = Parameters {
        area_m2: args.sa_m2,
        efficiency: args.eff,
        voc_v: args.voc,
        capacitance_f: args.c_f,
        esr_ohm: args.r_esr,
        initial_charge_c: args.q0_c,
        load_power_w: args.p_on_w,
        v_thresh_v: args.v_thresh,
        dt_s: args.dt_s,
        duration_s: args.dur_s,
    };

    // Run the simulation
    let trace = Simulator::new(params).run();

    // Write the trace
    output::write_csv_file(&trace, output::LOG_PATH)?;

    Ok(())
}
