//! Multi-scenario comparison of the two stepping schemes.
//!
//! Runs a set of initial-condition tuples through both integrators and
//! tabulates the final states side by side, so the discretization-error
//! gap between Euler and RK4 can be read off directly.

use serde::Serialize;

use crate::inputs::SimulationInputs;
use crate::integrator::IntegrationMethod;
use crate::solver::SimulationSolver;

/// Final states of one scenario under both schemes.
#[derive(Debug, Clone, Serialize)]
pub struct ComparisonRow {
    pub scenario: usize,
    pub dt: f64,
    pub tf: f64,
    pub vx0: f64,
    pub vz0: f64,
    pub euler_x: f64,
    pub euler_z: f64,
    pub rk4_x: f64,
    pub rk4_z: f64,
    pub euler_vx: f64,
    pub euler_vz: f64,
    pub rk4_vx: f64,
    pub rk4_vz: f64,
}

/// The canonical comparison set: the reference launch under the standard
/// step, a finer and a coarser step, a high-speed launch at two step
/// sizes, and a long run.
pub fn comparison_scenarios() -> Vec<SimulationInputs> {
    let base = SimulationInputs::default();
    vec![
        base,
        SimulationInputs { dt: 0.001, ..base },
        SimulationInputs { dt: 0.1, ..base },
        SimulationInputs {
            vx: 100.0,
            vz: 100.0,
            ..base
        },
        SimulationInputs {
            vx: 100.0,
            vz: 100.0,
            dt: 0.001,
            ..base
        },
        SimulationInputs { tf: 100.0, ..base },
    ]
}

/// Run every scenario under both schemes and collect the final states.
pub fn run_comparison(scenarios: &[SimulationInputs]) -> Vec<ComparisonRow> {
    scenarios
        .iter()
        .enumerate()
        .map(|(i, inputs)| {
            let euler = SimulationSolver::new(*inputs, IntegrationMethod::Euler).run();
            let rk4 = SimulationSolver::new(*inputs, IntegrationMethod::Rk4).run();

            ComparisonRow {
                scenario: i + 1,
                dt: inputs.dt,
                tf: inputs.tf,
                vx0: inputs.vx,
                vz0: inputs.vz,
                euler_x: euler.state.x,
                euler_z: euler.state.z,
                rk4_x: rk4.state.x,
                rk4_z: rk4.state.z,
                euler_vx: euler.state.vx,
                euler_vz: euler.state.vz,
                rk4_vx: rk4.state.vx,
                rk4_vz: rk4.state.vz,
            }
        })
        .collect()
}

const TABLE_RULE: &str = "━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━";

/// Render rows as a fixed-width comparison table.
pub fn format_table(rows: &[ComparisonRow]) -> String {
    let mut out = String::new();
    out.push_str(TABLE_RULE);
    out.push('\n');
    out.push_str(
        " #  |    dt    |   tf   |  vx0  |  vz0  |  Euler (x, z)      |  RK4 (x, z)\n",
    );
    out.push_str(TABLE_RULE);
    out.push('\n');

    for row in rows {
        out.push_str(&format!(
            " {:<2} | {:>8} | {:>6} | {:>5} | {:>5} | ({:>8.2}, {:>6.2}) | ({:>8.2}, {:>6.2})\n",
            row.scenario, row.dt, row.tf, row.vx0, row.vz0, row.euler_x, row.euler_z, row.rk4_x,
            row.rk4_z,
        ));
    }

    out.push_str(TABLE_RULE);
    out.push('\n');
    out.push_str(
        " #  |  Euler (vx, vz)    |  RK4 (vx, vz)      |  Δx (RK4−Euler) |  Δz (RK4−Euler)\n",
    );
    out.push_str(TABLE_RULE);
    out.push('\n');

    for row in rows {
        out.push_str(&format!(
            " {:<2} | ({:>7.2}, {:>7.2}) | ({:>7.2}, {:>7.2}) | {:>15.6} | {:>15.6}\n",
            row.scenario,
            row.euler_vx,
            row.euler_vz,
            row.rk4_vx,
            row.rk4_vz,
            row.rk4_x - row.euler_x,
            row.rk4_z - row.euler_z,
        ));
    }

    out.push_str(TABLE_RULE);
    out.push('\n');
    out
}

/// Render rows as CSV with a header line.
pub fn to_csv(rows: &[ComparisonRow]) -> String {
    let mut out = String::from(
        "scenario,dt,tf,vx0,vz0,euler_x,euler_z,rk4_x,rk4_z,euler_vx,euler_vz,rk4_vx,rk4_vz\n",
    );
    for row in rows {
        out.push_str(&format!(
            "{},{},{},{},{},{},{},{},{},{},{},{},{}\n",
            row.scenario,
            row.dt,
            row.tf,
            row.vx0,
            row.vz0,
            row.euler_x,
            row.euler_z,
            row.rk4_x,
            row.rk4_z,
            row.euler_vx,
            row.euler_vz,
            row.rk4_vx,
            row.rk4_vz,
        ));
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_canonical_set_has_six_scenarios() {
        let scenarios = comparison_scenarios();
        assert_eq!(scenarios.len(), 6);
        assert_eq!(scenarios[1].dt, 0.001);
        assert_eq!(scenarios[3].vx, 100.0);
        assert_eq!(scenarios[5].tf, 100.0);
    }

    #[test]
    fn test_rows_track_scenarios() {
        let scenarios = comparison_scenarios();
        let rows = run_comparison(&scenarios[..2]);

        assert_eq!(rows.len(), 2);
        assert_eq!(rows[0].scenario, 1);
        assert_eq!(rows[0].dt, 0.01);
        assert_eq!(rows[1].dt, 0.001);
        // Both schemes end below the launch height on the reference run.
        assert!(rows[0].euler_z < 0.0);
        assert!(rows[0].rk4_z < 0.0);
    }

    #[test]
    fn test_csv_shape() {
        let rows = run_comparison(&comparison_scenarios()[..1]);
        let csv = to_csv(&rows);
        let mut lines = csv.lines();

        assert!(lines.next().unwrap().starts_with("scenario,dt,"));
        let data = lines.next().unwrap();
        assert_eq!(data.split(',').count(), 13);
    }
}
