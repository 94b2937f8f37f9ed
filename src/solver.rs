//! Simulation driver: owns the fixed-iteration-count loop and the
//! recorded results of a run.

use serde::Serialize;

use crate::inputs::SimulationInputs;
use crate::integrator::IntegrationMethod;
use crate::state::{PhysicalState, SimulationHistory};

/// Runs one simulation from a set of inputs with a chosen stepping
/// scheme.
pub struct SimulationSolver {
    inputs: SimulationInputs,
    method: IntegrationMethod,
}

impl SimulationSolver {
    pub fn new(inputs: SimulationInputs, method: IntegrationMethod) -> Self {
        Self { inputs, method }
    }

    /// Execute the run to completion.
    ///
    /// The step count is `floor(tf / dt)`; when `tf` is not an exact
    /// multiple of `dt` the simulated duration is truncated to
    /// `steps * dt` seconds rather than padded with a partial step.
    /// Termination is purely count-based; there is no ground-impact or
    /// other early exit.
    pub fn run(&self) -> SimulationResult {
        let params = self.inputs.parameters();
        let mut state = self.inputs.initial_state();
        let mut history = SimulationHistory::seeded(&state);

        let steps = (params.tf / params.dt).floor() as usize;
        for _ in 0..steps {
            self.method.step(&mut state, &params);
            history.record(&state, params.dt);
        }

        SimulationResult {
            method: self.method,
            state,
            history,
        }
    }
}

/// Completed run: the final state plus the full recorded trajectory.
#[derive(Debug, Clone)]
pub struct SimulationResult {
    pub method: IntegrationMethod,
    pub state: PhysicalState,
    pub history: SimulationHistory,
}

impl SimulationResult {
    pub fn final_time(&self) -> f64 {
        self.history.final_time()
    }

    pub fn final_speed(&self) -> f64 {
        self.state.speed()
    }

    /// Number of integration steps taken.
    pub fn steps(&self) -> usize {
        self.history.len() - 1
    }

    /// Flat summary of the run for reporting and serialization.
    pub fn summary(&self) -> RunSummary {
        RunSummary {
            method: self.method.to_string(),
            steps: self.steps(),
            final_x: self.state.x,
            final_z: self.state.z,
            final_vx: self.state.vx,
            final_vz: self.state.vz,
            final_speed: self.final_speed(),
            final_time: self.final_time(),
        }
    }
}

/// Serializable summary of a completed run.
#[derive(Debug, Clone, Serialize)]
pub struct RunSummary {
    pub method: String,
    pub steps: usize,
    pub final_x: f64,
    pub final_z: f64,
    pub final_vx: f64,
    pub final_vz: f64,
    pub final_speed: f64,
    pub final_time: f64,
}
