//! Fixed-step time integrators advancing `PhysicalState` by one `dt`.
//!
//! Both schemes are built on the same derivative model; they differ only
//! in how many derivative evaluations they spend per step and how the
//! stage results are combined.

use nalgebra::Vector2;

use crate::derivatives::drag_acceleration;
use crate::inputs::SimulationParameters;
use crate::state::PhysicalState;

/// Stepping scheme selector.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum IntegrationMethod {
    Euler,
    Rk4,
}

impl IntegrationMethod {
    pub fn from_str(s: &str) -> Option<Self> {
        match s.to_lowercase().as_str() {
            "euler" => Some(IntegrationMethod::Euler),
            "rk4" | "runge-kutta" => Some(IntegrationMethod::Rk4),
            _ => None,
        }
    }

    /// Advance `state` by one time step in place.
    pub fn step(self, state: &mut PhysicalState, params: &SimulationParameters) {
        match self {
            IntegrationMethod::Euler => euler_step(state, params),
            IntegrationMethod::Rk4 => rk4_step(state, params),
        }
    }

    /// Derivative evaluations spent per step.
    pub fn evals_per_step(self) -> usize {
        match self {
            IntegrationMethod::Euler => 1,
            IntegrationMethod::Rk4 => 4,
        }
    }
}

impl std::fmt::Display for IntegrationMethod {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            IntegrationMethod::Euler => write!(f, "Euler"),
            IntegrationMethod::Rk4 => write!(f, "RK4"),
        }
    }
}

/// One explicit (first-order) Euler step.
///
/// The derivative is evaluated once at the pre-step velocity, and the
/// position update also uses the pre-step velocity. That ordering is part
/// of the scheme: it is what gives explicit Euler its first-order error
/// behavior.
pub fn euler_step(state: &mut PhysicalState, params: &SimulationParameters) {
    let dt = params.dt;
    let accel = drag_acceleration(state.velocity(), params);

    state.x += state.vx * dt;
    state.z += state.vz * dt;
    state.vx += accel.x * dt;
    state.vz += accel.y * dt;
}

/// One classical fourth-order Runge–Kutta step.
///
/// Position and velocity are advanced together: since `x' = v` and
/// `v' = f(v)`, each position stage samples the velocity at the same
/// offset the velocity stage was evaluated at — half of `K1`/`K2` for the
/// middle stages and the full `K3` increment for the last. All four
/// stages are computed from the pre-step state before anything is
/// written back.
pub fn rk4_step(state: &mut PhysicalState, params: &SimulationParameters) {
    let dt = params.dt;
    let vel = state.velocity();

    let k1_v = drag_acceleration(vel, params) * dt;
    let k1_p = vel * dt;

    let k2_v = drag_acceleration(vel + k1_v / 2.0, params) * dt;
    let k2_p = (vel + k1_v / 2.0) * dt;

    let k3_v = drag_acceleration(vel + k2_v / 2.0, params) * dt;
    let k3_p = (vel + k2_v / 2.0) * dt;

    let k4_v = drag_acceleration(vel + k3_v, params) * dt;
    let k4_p = (vel + k3_v) * dt;

    let dp: Vector2<f64> = (k1_p + 2.0 * k2_p + 2.0 * k3_p + k4_p) / 6.0;
    let dv: Vector2<f64> = (k1_v + 2.0 * k2_v + 2.0 * k3_v + k4_v) / 6.0;

    state.x += dp.x;
    state.z += dp.y;
    state.vx += dv.x;
    state.vz += dv.y;
}
