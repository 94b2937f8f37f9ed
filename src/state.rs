//! Core state types for the projectile simulation.
//!
//! `PhysicalState` is the minimal set of scalars needed to resume the
//! simulation at any instant; `SimulationHistory` is the recorded time
//! series produced by a full run.

use nalgebra::Vector2;

/// Planar state of the projectile: position (m) and velocity (m/s).
///
/// Created once from the initial conditions and mutated in place by each
/// integrator step. All components are finite for any finite inputs.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PhysicalState {
    pub x: f64,  // horizontal position
    pub z: f64,  // vertical position
    pub vx: f64, // horizontal velocity
    pub vz: f64, // vertical velocity
}

impl PhysicalState {
    pub fn new(x: f64, z: f64, vx: f64, vz: f64) -> Self {
        Self { x, z, vx, vz }
    }

    /// Velocity as a (horizontal, vertical) vector.
    pub fn velocity(&self) -> Vector2<f64> {
        Vector2::new(self.vx, self.vz)
    }

    /// Speed magnitude (m/s).
    pub fn speed(&self) -> f64 {
        self.velocity().norm()
    }
}

/// Recorded trajectory of one run: four state sequences plus elapsed
/// time, all index-aligned and of length `steps + 1` (the initial sample
/// at t = 0 is included).
#[derive(Debug, Clone)]
pub struct SimulationHistory {
    x: Vec<f64>,
    z: Vec<f64>,
    vx: Vec<f64>,
    vz: Vec<f64>,
    t: Vec<f64>,
}

impl SimulationHistory {
    /// History seeded with the initial state at t = 0.
    pub fn seeded(initial: &PhysicalState) -> Self {
        Self {
            x: vec![initial.x],
            z: vec![initial.z],
            vx: vec![initial.vx],
            vz: vec![initial.vz],
            t: vec![0.0],
        }
    }

    /// Append the post-step state and the new elapsed time.
    ///
    /// Called exactly once per completed step, strictly after the
    /// integrator has advanced the state. Time accumulates as
    /// `previous + dt` rather than `step * dt`, matching the recorded
    /// series the rest of the system consumes.
    pub fn record(&mut self, state: &PhysicalState, dt: f64) {
        self.x.push(state.x);
        self.z.push(state.z);
        self.vx.push(state.vx);
        self.vz.push(state.vz);
        let last = *self.t.last().unwrap_or(&0.0);
        self.t.push(last + dt);
    }

    /// Number of recorded samples (steps + 1).
    pub fn len(&self) -> usize {
        self.t.len()
    }

    pub fn is_empty(&self) -> bool {
        self.t.is_empty()
    }

    pub fn x(&self) -> &[f64] {
        &self.x
    }

    pub fn z(&self) -> &[f64] {
        &self.z
    }

    pub fn vx(&self) -> &[f64] {
        &self.vx
    }

    pub fn vz(&self) -> &[f64] {
        &self.vz
    }

    pub fn t(&self) -> &[f64] {
        &self.t
    }

    /// Elapsed time of the last recorded sample.
    pub fn final_time(&self) -> f64 {
        *self.t.last().unwrap_or(&0.0)
    }
}
