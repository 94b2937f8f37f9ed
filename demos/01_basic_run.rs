/// Basic Simulation Example
///
/// Runs the default launch scenario under both integrators and prints
/// the final states side by side.

use projectile_sim::{IntegrationMethod, SimulationInputs, SimulationSolver};

fn main() {
    println!("=== Basic Simulation Example ===\n");

    let inputs = SimulationInputs::default();

    println!("Initial Parameters:");
    println!("  Position: ({}, {}) m", inputs.x, inputs.z);
    println!("  Velocity: ({}, {}) m/s", inputs.vx, inputs.vz);
    println!("  Drag coefficient: {}", inputs.u);
    println!("  Time step: {} s over {} s", inputs.dt, inputs.tf);
    println!();

    for method in [IntegrationMethod::Euler, IntegrationMethod::Rk4] {
        let result = SimulationSolver::new(inputs, method).run();

        println!("{} Results ({} steps):", method, result.steps());
        println!(
            "  Final position: ({:.4}, {:.4}) m",
            result.state.x, result.state.z
        );
        println!(
            "  Final velocity: ({:.4}, {:.4}) m/s",
            result.state.vx, result.state.vz
        );
        println!("  Final speed: {:.4} m/s", result.final_speed());
        println!("  Final time: {:.2} s", result.final_time());
        println!();
    }
}
