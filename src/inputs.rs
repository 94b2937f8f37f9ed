//! Initial-condition handling: the 9-value input tuple, its three
//! sources (file, positional values, built-in defaults), and validation.

use std::error::Error;
use std::fmt;
use std::fs;

use crate::constants::{
    DEFAULT_DRAG, DEFAULT_DT, DEFAULT_GRAVITY, DEFAULT_MASS, DEFAULT_TF, DEFAULT_VX, DEFAULT_VZ,
    DEFAULT_X, DEFAULT_Z, INPUT_VALUE_COUNT,
};
use crate::state::PhysicalState;

/// Error type for input handling.
#[derive(Debug)]
pub struct SimError {
    message: String,
}

impl fmt::Display for SimError {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "{}", self.message)
    }
}

impl Error for SimError {}

impl From<String> for SimError {
    fn from(msg: String) -> Self {
        SimError { message: msg }
    }
}

impl From<&str> for SimError {
    fn from(msg: &str) -> Self {
        SimError {
            message: msg.to_string(),
        }
    }
}

/// Fixed parameters of one simulation run.
///
/// All values must be strictly positive except `u`, which may be zero
/// (no drag). The input layer enforces this before a run is constructed;
/// the core itself performs no validation.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SimulationParameters {
    pub u: f64,  // drag coefficient (kg/m)
    pub dt: f64, // time step (s)
    pub tf: f64, // total simulated time (s)
    pub m: f64,  // mass (kg)
    pub g: f64,  // gravitational acceleration (m/s²)
}

/// Where a resolved input tuple came from.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum InputSource {
    File(String),
    Values,
    Defaults,
}

/// The full 9-value initial-condition tuple `(x, z, vx, vz, u, dt, tf, m, g)`.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SimulationInputs {
    pub x: f64,
    pub z: f64,
    pub vx: f64,
    pub vz: f64,
    pub u: f64,
    pub dt: f64,
    pub tf: f64,
    pub m: f64,
    pub g: f64,
}

impl Default for SimulationInputs {
    fn default() -> Self {
        Self {
            x: DEFAULT_X,
            z: DEFAULT_Z,
            vx: DEFAULT_VX,
            vz: DEFAULT_VZ,
            u: DEFAULT_DRAG,
            dt: DEFAULT_DT,
            tf: DEFAULT_TF,
            m: DEFAULT_MASS,
            g: DEFAULT_GRAVITY,
        }
    }
}

impl SimulationInputs {
    /// Build inputs from a slice of at least 9 numeric values; extra
    /// values are ignored.
    pub fn from_values(values: &[f64]) -> Result<Self, SimError> {
        if values.len() < INPUT_VALUE_COUNT {
            return Err(format!(
                "expected {} values (x z vx vz u dt tf m g), got {}",
                INPUT_VALUE_COUNT,
                values.len()
            )
            .into());
        }

        let inputs = Self {
            x: values[0],
            z: values[1],
            vx: values[2],
            vz: values[3],
            u: values[4],
            dt: values[5],
            tf: values[6],
            m: values[7],
            g: values[8],
        };
        inputs.validate()?;
        Ok(inputs)
    }

    /// Read inputs from a text file with one floating-point value per
    /// line. The first 9 lines are used; extra lines are ignored; fewer
    /// than 9 lines is an error.
    pub fn from_file(path: &str) -> Result<Self, SimError> {
        let contents =
            fs::read_to_string(path).map_err(|e| format!("error reading {}: {}", path, e))?;

        let mut values = Vec::with_capacity(INPUT_VALUE_COUNT);
        for (i, line) in contents.lines().take(INPUT_VALUE_COUNT).enumerate() {
            let value: f64 = line
                .trim()
                .parse()
                .map_err(|_| format!("{}: line {} is not a number: {:?}", path, i + 1, line))?;
            values.push(value);
        }
        if values.len() < INPUT_VALUE_COUNT {
            return Err(format!(
                "{}: file does not contain enough values ({} of {})",
                path,
                values.len(),
                INPUT_VALUE_COUNT
            )
            .into());
        }

        Self::from_values(&values)
    }

    /// Resolve inputs from command-line operands: a single filename, 9
    /// numeric values, or nothing (built-in defaults).
    pub fn resolve(args: &[String]) -> Result<(Self, InputSource), SimError> {
        match args.len() {
            0 => Ok((Self::default(), InputSource::Defaults)),
            1 => {
                let inputs = Self::from_file(&args[0])?;
                Ok((inputs, InputSource::File(args[0].clone())))
            }
            INPUT_VALUE_COUNT => {
                let values: Vec<f64> = args
                    .iter()
                    .map(|s| {
                        s.parse::<f64>()
                            .map_err(|_| SimError::from(format!("not a number: {:?}", s)))
                    })
                    .collect::<Result<_, _>>()?;
                let inputs = Self::from_values(&values)?;
                Ok((inputs, InputSource::Values))
            }
            n => Err(format!(
                "expected a filename, {} values, or no operands; got {} operands",
                INPUT_VALUE_COUNT, n
            )
            .into()),
        }
    }

    /// The initial physical state (position and velocity).
    pub fn initial_state(&self) -> PhysicalState {
        PhysicalState::new(self.x, self.z, self.vx, self.vz)
    }

    /// The fixed run parameters.
    pub fn parameters(&self) -> SimulationParameters {
        SimulationParameters {
            u: self.u,
            dt: self.dt,
            tf: self.tf,
            m: self.m,
            g: self.g,
        }
    }

    fn validate(&self) -> Result<(), SimError> {
        let all = [
            self.x, self.z, self.vx, self.vz, self.u, self.dt, self.tf, self.m, self.g,
        ];
        if all.iter().any(|v| !v.is_finite()) {
            return Err("all input values must be finite".into());
        }
        if self.u < 0.0 {
            return Err(format!("drag coefficient u must be >= 0, got {}", self.u).into());
        }
        if self.dt <= 0.0 {
            return Err(format!("time step dt must be > 0, got {}", self.dt).into());
        }
        if self.tf <= 0.0 {
            return Err(format!("total time tf must be > 0, got {}", self.tf).into());
        }
        if self.m <= 0.0 {
            return Err(format!("mass m must be > 0, got {}", self.m).into());
        }
        if self.g <= 0.0 {
            return Err(format!("gravity g must be > 0, got {}", self.g).into());
        }
        Ok(())
    }
}
