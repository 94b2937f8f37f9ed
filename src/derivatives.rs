//! Derivative model: instantaneous acceleration from the current velocity.

use nalgebra::Vector2;

use crate::inputs::SimulationParameters;

/// Sign with the numpy convention: `sign(0) = 0`.
///
/// `f64::signum` maps ±0.0 to ±1.0, which would leave the drag term
/// discontinuous at rest; with this convention drag vanishes exactly at
/// zero velocity.
fn sign(v: f64) -> f64 {
    if v > 0.0 {
        1.0
    } else if v < 0.0 {
        -1.0
    } else {
        0.0
    }
}

/// Compute the acceleration acting on the projectile at velocity `vel`.
///
/// `vel` carries the (horizontal, vertical) velocity components; the
/// returned vector carries `(ax, az)`:
///
/// ```text
/// ax = -sign(vx) * u * vx² / m
/// az = -g - sign(vz) * u * vz² / m
/// ```
///
/// Drag always opposes the direction of motion on each axis; gravity acts
/// only on the vertical axis. Pure function, total over finite inputs.
pub fn drag_acceleration(vel: Vector2<f64>, params: &SimulationParameters) -> Vector2<f64> {
    let ax = -sign(vel.x) * params.u * vel.x * vel.x / params.m;
    let az = -params.g - sign(vel.y) * params.u * vel.y * vel.y / params.m;
    Vector2::new(ax, az)
}
