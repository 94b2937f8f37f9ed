//! # Projectile Sim
//!
//! Planar projectile motion under gravity and velocity-squared drag,
//! advanced by explicit Euler or classical RK4 on a fixed time step.

// Re-export the main types and functions
pub use comparison::{comparison_scenarios, format_table, run_comparison, to_csv, ComparisonRow};
pub use derivatives::drag_acceleration;
pub use inputs::{InputSource, SimError, SimulationInputs, SimulationParameters};
pub use integrator::{euler_step, rk4_step, IntegrationMethod};
pub use solver::{RunSummary, SimulationResult, SimulationSolver};
pub use state::{PhysicalState, SimulationHistory};

// Module declarations
mod comparison;
mod constants;
mod derivatives;
mod inputs;
mod integrator;
mod solver;
mod state;
