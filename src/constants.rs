/// Physical constants and default initial conditions

/// Gravitational acceleration (m/s²) used when no value is supplied
pub const DEFAULT_GRAVITY: f64 = 9.8;

/// Default launch position (m)
pub const DEFAULT_X: f64 = 0.0;
pub const DEFAULT_Z: f64 = 0.0;

/// Default launch velocity components (m/s)
pub const DEFAULT_VX: f64 = 10.0;
pub const DEFAULT_VZ: f64 = 10.0;

/// Default drag coefficient (kg/m), multiplies velocity squared
pub const DEFAULT_DRAG: f64 = 0.5;

/// Default integration time step (s)
pub const DEFAULT_DT: f64 = 0.01;

/// Default total simulated time (s)
pub const DEFAULT_TF: f64 = 5.0;

/// Default projectile mass (kg)
pub const DEFAULT_MASS: f64 = 1.0;

/// Number of values in an initial-condition tuple:
/// (x, z, vx, vz, u, dt, tf, m, g)
pub const INPUT_VALUE_COUNT: usize = 9;
