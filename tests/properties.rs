//! Numerical properties of the two integration schemes.

use nalgebra::Vector2;

use projectile_sim::{
    drag_acceleration, IntegrationMethod, SimulationInputs, SimulationParameters, SimulationSolver,
};

fn run(inputs: SimulationInputs, method: IntegrationMethod) -> projectile_sim::SimulationResult {
    SimulationSolver::new(inputs, method).run()
}

#[test]
fn test_determinism_bit_identical_reruns() {
    let inputs = SimulationInputs::default();

    for method in [IntegrationMethod::Euler, IntegrationMethod::Rk4] {
        let a = run(inputs, method);
        let b = run(inputs, method);

        assert_eq!(a.history.x(), b.history.x());
        assert_eq!(a.history.z(), b.history.z());
        assert_eq!(a.history.vx(), b.history.vx());
        assert_eq!(a.history.vz(), b.history.vz());
        assert_eq!(a.history.t(), b.history.t());
    }
}

#[test]
fn test_step_count_is_floor_tf_over_dt() {
    let cases = [
        (0.01, 5.0, 500),
        (0.001, 5.0, 5000),
        (0.1, 5.0, 50),
        (0.25, 1.0, 4),
        (0.3, 1.0, 3), // truncation: covers only 0.9 s
    ];

    for (dt, tf, expected_steps) in cases {
        let inputs = SimulationInputs {
            dt,
            tf,
            ..SimulationInputs::default()
        };
        let result = run(inputs, IntegrationMethod::Euler);
        assert_eq!(
            result.history.t().len(),
            expected_steps + 1,
            "dt={} tf={}",
            dt,
            tf
        );
    }
}

#[test]
fn test_zero_drag_matches_closed_form() {
    let inputs = SimulationInputs {
        u: 0.0,
        x: 1.0,
        z: 2.0,
        vx: 3.0,
        vz: 10.0,
        dt: 0.001,
        tf: 2.0,
        ..SimulationInputs::default()
    };
    let g = inputs.g;

    // Euler: x and vz recurrences are exact (constant derivatives); z
    // carries the scheme's O(dt) error.
    let euler = run(inputs, IntegrationMethod::Euler);
    let t = euler.final_time();
    assert!((euler.state.x - (1.0 + 3.0 * t)).abs() < 1e-9);
    assert!((euler.state.vz - (10.0 - g * t)).abs() < 1e-9);
    let z_exact = 2.0 + 10.0 * t - 0.5 * g * t * t;
    let euler_z_err = (euler.state.z - z_exact).abs();
    assert!(euler_z_err < 0.05, "Euler z error {}", euler_z_err);
    assert!(euler_z_err > 1e-6, "Euler should show O(dt) error");

    // RK4 reproduces the quadratic exactly, up to rounding.
    let rk4 = run(inputs, IntegrationMethod::Rk4);
    let t = rk4.final_time();
    let z_exact = 2.0 + 10.0 * t - 0.5 * g * t * t;
    assert!((rk4.state.x - (1.0 + 3.0 * t)).abs() < 1e-9);
    assert!((rk4.state.z - z_exact).abs() < 1e-9);
    assert!((rk4.state.vz - (10.0 - g * t)).abs() < 1e-9);
}

#[test]
fn test_convergence_order_euler_2x_rk4_16x() {
    // A descending launch: vz starts below the (negative) terminal
    // velocity and never crosses zero, so the drag term stays smooth
    // along the whole trajectory and both schemes show their clean
    // asymptotic orders.
    let scenario = |dt: f64| SimulationInputs {
        vx: 10.0,
        vz: -5.0,
        dt,
        tf: 1.0,
        ..SimulationInputs::default()
    };

    let reference = run(scenario(1e-4), IntegrationMethod::Rk4);
    let ref_pos = Vector2::new(reference.state.x, reference.state.z);

    let final_error = |inputs: SimulationInputs, method: IntegrationMethod| {
        let result = run(inputs, method);
        (Vector2::new(result.state.x, result.state.z) - ref_pos).norm()
    };

    let euler_coarse = final_error(scenario(0.02), IntegrationMethod::Euler);
    let euler_fine = final_error(scenario(0.01), IntegrationMethod::Euler);
    let euler_ratio = euler_coarse / euler_fine;
    assert!(
        euler_ratio > 1.5 && euler_ratio < 3.0,
        "Euler halving ratio {} (errors {} / {})",
        euler_ratio,
        euler_coarse,
        euler_fine
    );

    let rk4_coarse = final_error(scenario(0.02), IntegrationMethod::Rk4);
    let rk4_fine = final_error(scenario(0.01), IntegrationMethod::Rk4);
    let rk4_ratio = rk4_coarse / rk4_fine;
    assert!(
        rk4_ratio > 8.0,
        "RK4 halving ratio {} (errors {} / {})",
        rk4_ratio,
        rk4_coarse,
        rk4_fine
    );

    // And fourth order beats first order outright at the same step.
    assert!(rk4_coarse < euler_coarse / 100.0);
}

#[test]
fn test_zero_horizontal_velocity_keeps_x_constant() {
    let inputs = SimulationInputs {
        u: 0.0,
        x: 5.0,
        vx: 0.0,
        ..SimulationInputs::default()
    };

    for method in [IntegrationMethod::Euler, IntegrationMethod::Rk4] {
        let result = run(inputs, method);
        assert!(
            result.history.x().iter().all(|&x| x == 5.0),
            "{} drifted horizontally",
            method
        );
        assert!(result.history.vx().iter().all(|&vx| vx == 0.0));
    }
}

#[test]
fn test_reference_scenario_final_state() {
    let inputs = SimulationInputs::default(); // (0, 0, 10, 10, 0.5, 0.01, 5, 1, 9.8)

    let euler = run(inputs, IntegrationMethod::Euler);
    let rk4 = run(inputs, IntegrationMethod::Rk4);

    for result in [&euler, &rk4] {
        assert_eq!(result.steps(), 500);
        assert_eq!(format!("{:.2}", result.final_time()), "5.00");
        assert!(result.state.z < 0.0, "projectile should fall below launch height");
    }

    // The inter-scheme gap shrinks with the step size.
    let gap_coarse = (rk4.state.z - euler.state.z).abs();

    let fine = SimulationInputs {
        dt: 0.001,
        ..inputs
    };
    let euler_fine = run(fine, IntegrationMethod::Euler);
    let rk4_fine = run(fine, IntegrationMethod::Rk4);
    let gap_fine = (rk4_fine.state.z - euler_fine.state.z).abs();

    assert!(
        gap_coarse > gap_fine,
        "gap at dt=0.01 ({}) should exceed gap at dt=0.001 ({})",
        gap_coarse,
        gap_fine
    );
}

#[test]
fn test_rest_state_is_stable_under_drag() {
    let params = SimulationParameters {
        u: 3.0,
        dt: 0.01,
        tf: 1.0,
        m: 1.0,
        g: 9.8,
    };

    // No division or sign artifact at zero velocity.
    let accel = drag_acceleration(Vector2::zeros(), &params);
    assert_eq!(accel.x, 0.0);
    assert_eq!(accel.y, -9.8);

    // One Euler step from rest leaves the horizontal axis untouched.
    let inputs = SimulationInputs {
        vx: 0.0,
        vz: 0.0,
        u: 3.0,
        ..SimulationInputs::default()
    };
    let result = run(inputs, IntegrationMethod::Euler);
    assert_eq!(result.history.x()[1], 0.0);
    assert_eq!(result.history.vx()[1], 0.0);
}

#[test]
fn test_rk4_step_cost_is_four_evaluations() {
    assert_eq!(IntegrationMethod::Euler.evals_per_step(), 1);
    assert_eq!(IntegrationMethod::Rk4.evals_per_step(), 4);
}
