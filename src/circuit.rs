//! Pure circuit equations for the solar/capacitor/load node.
//!
//! The node sits between the solar array (a current source up to its
//! open-circuit voltage), the storage capacitor behind its equivalent series
//! resistance, and a constant-power load. Power balance across the ESR gives
//! a quadratic in the node voltage:
//!
//! ```text
//! v^2 - (q/C + i*R) * v + p*R = 0
//! ```
//!
//! whose discriminant decides feasibility and whose larger root is the
//! physical operating voltage.
//!
//! These functions are stateless and never clamp or branch on operating
//! mode; all switching policy lives in [`crate::sim::Simulator`].

/// Short-circuit current of the solar array under the given irradiance.
///
/// `i_sc = irradiance * area * efficiency / voc`. Constant for a whole run,
/// since it depends only on fixed parameters.
pub fn solar_current(irradiance_w_m2: f64, area_m2: f64, efficiency: f64, voc_v: f64) -> f64 {
    irradiance_w_m2 * area_m2 * efficiency / voc_v
}

/// Discriminant of the quadratic power-balance equation.
///
/// `disc = (q/C + i*R)^2 - 4*p*R`. A negative discriminant means the
/// requested load power is physically unreachable at this charge/current
/// combination; the caller decides how to recover.
pub fn voltage_discriminant(
    charge_c: f64,
    capacitance_f: f64,
    current_a: f64,
    esr_ohm: f64,
    power_w: f64,
) -> f64 {
    (charge_c / capacitance_f + current_a * esr_ohm).powi(2) - 4.0 * power_w * esr_ohm
}

/// Node voltage from the power-balance quadratic.
///
/// Returns the larger (physically meaningful) root
/// `v = (q/C + i*R + sqrt(disc)) / 2`. The caller guarantees `disc >= 0`.
pub fn node_voltage(
    disc: f64,
    charge_c: f64,
    capacitance_f: f64,
    current_a: f64,
    esr_ohm: f64,
) -> f64 {
    (charge_c / capacitance_f + current_a * esr_ohm + disc.sqrt()) / 2.0
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    #[test]
    fn test_solar_current() {
        // 1336.1 W/m² on 0.01 m² at 20% efficiency, 4 V open circuit
        let i = solar_current(1336.1, 0.01, 0.2, 4.0);
        assert_relative_eq!(i, 0.668_05, epsilon = 1e-12);
    }

    #[test]
    fn test_discriminant_sign() {
        // Light load on a charged capacitor: feasible
        let disc = voltage_discriminant(0.002, 0.001, 0.0, 1.0, 0.001);
        assert!(disc > 0.0);

        // Heavy load the node cannot supply: infeasible
        let disc = voltage_discriminant(0.002, 0.001, 0.0, 1.0, 10.0);
        assert!(disc < 0.0);
    }

    #[test]
    fn test_node_voltage_satisfies_power_balance() {
        let (q, c, i, r, p) = (0.002, 0.001, 0.5, 1.0, 0.001);
        let disc = voltage_discriminant(q, c, i, r, p);
        let v = node_voltage(disc, q, c, i, r);

        // v^2 - (q/C + i*R)*v + p*R = 0 at the root
        let residual = v * v - (q / c + i * r) * v + p * r;
        assert_relative_eq!(residual, 0.0, epsilon = 1e-12);
    }

    #[test]
    fn test_node_voltage_zero_load() {
        // With no load the voltage is the open-circuit node value q/C + i*R
        let (q, c, i, r) = (0.003, 0.001, 0.25, 2.0);
        let disc = voltage_discriminant(q, c, i, r, 0.0);
        let v = node_voltage(disc, q, c, i, r);
        assert_relative_eq!(v, q / c + i * r, epsilon = 1e-12);
    }
}
