//! Command-line interface for the projectile simulator.

use clap::{Parser, Subcommand, ValueEnum};
use serde::Serialize;
use std::error::Error;

use projectile_sim::{
    comparison_scenarios, format_table, run_comparison, to_csv, InputSource, IntegrationMethod,
    RunSummary, SimulationInputs, SimulationResult, SimulationSolver,
};

#[derive(Parser)]
#[command(name = "projectile-sim")]
#[command(version = "0.1.0")]
#[command(about = "Planar projectile simulation with velocity-squared drag", long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Run one simulation from a file, 9 values, or built-in defaults
    Simulate {
        /// A filename (one value per line) or 9 values: x z vx vz u dt tf m g
        #[arg(allow_negative_numbers = true)]
        values: Vec<String>,

        /// Integration method
        #[arg(short = 'm', long, default_value = "rk4")]
        method: MethodChoice,

        /// Output format
        #[arg(short = 'o', long, default_value = "table")]
        output: OutputFormat,

        /// Include the full recorded trajectory in the output
        #[arg(long)]
        full: bool,
    },

    /// Run the canonical scenario set under both methods and tabulate
    Compare {
        /// Output format
        #[arg(short = 'o', long, default_value = "table")]
        output: OutputFormat,
    },

    /// Display simulator information
    Info,
}

#[derive(Debug, Clone, Copy, ValueEnum)]
enum MethodChoice {
    Euler,
    Rk4,
    Both,
}

impl MethodChoice {
    fn methods(self) -> Vec<IntegrationMethod> {
        match self {
            MethodChoice::Euler => vec![IntegrationMethod::Euler],
            MethodChoice::Rk4 => vec![IntegrationMethod::Rk4],
            MethodChoice::Both => vec![IntegrationMethod::Euler, IntegrationMethod::Rk4],
        }
    }
}

#[derive(Debug, Clone, Copy, ValueEnum)]
enum OutputFormat {
    Table,
    Json,
    Csv,
}

#[derive(Serialize)]
struct RunReport<'a> {
    #[serde(flatten)]
    summary: RunSummary,
    #[serde(skip_serializing_if = "Option::is_none")]
    x: Option<&'a [f64]>,
    #[serde(skip_serializing_if = "Option::is_none")]
    z: Option<&'a [f64]>,
    #[serde(skip_serializing_if = "Option::is_none")]
    vx: Option<&'a [f64]>,
    #[serde(skip_serializing_if = "Option::is_none")]
    vz: Option<&'a [f64]>,
    #[serde(skip_serializing_if = "Option::is_none")]
    t: Option<&'a [f64]>,
}

fn main() -> Result<(), Box<dyn Error>> {
    let cli = Cli::parse();

    match cli.command {
        Commands::Simulate {
            values,
            method,
            output,
            full,
        } => {
            let (inputs, source) = SimulationInputs::resolve(&values)?;

            if matches!(output, OutputFormat::Table) {
                if source == InputSource::Defaults {
                    println!("Missing input data. Using default values.");
                }
                print_initial_conditions(&inputs);
            }

            let results: Vec<SimulationResult> = method
                .methods()
                .into_iter()
                .map(|m| SimulationSolver::new(inputs, m).run())
                .collect();

            display_results(&results, output, full)?;
        }

        Commands::Compare { output } => {
            let rows = run_comparison(&comparison_scenarios());
            match output {
                OutputFormat::Table => print!("{}", format_table(&rows)),
                OutputFormat::Json => println!("{}", serde_json::to_string_pretty(&rows)?),
                OutputFormat::Csv => print!("{}", to_csv(&rows)),
            }
        }

        Commands::Info => {
            println!("╔════════════════════════════════════════╗");
            println!("║        PROJECTILE SIM v0.1.0           ║");
            println!("╠════════════════════════════════════════╣");
            println!("║ Planar projectile motion under gravity ║");
            println!("║ and velocity-squared drag.             ║");
            println!("╠════════════════════════════════════════╣");
            println!("║ Features:                              ║");
            println!("║ • Explicit Euler integration           ║");
            println!("║ • Classical RK4 integration            ║");
            println!("║ • Scenario comparison table            ║");
            println!("║ • Table / JSON / CSV output            ║");
            println!("╚════════════════════════════════════════╝");
        }
    }

    Ok(())
}

fn print_initial_conditions(inputs: &SimulationInputs) {
    println!("Initial Conditions:");
    println!("x = {} m", inputs.x);
    println!("z = {} m", inputs.z);
    println!("vx = {} m/s", inputs.vx);
    println!("vz = {} m/s", inputs.vz);
    println!("Drag coefficient (u) = {}", inputs.u);
    println!("Time step (dt) = {} s", inputs.dt);
    println!("Total time (tf) = {} s", inputs.tf);
    println!("Mass (m) = {} kg", inputs.m);
    println!("Gravitational acceleration (g) = {} m/s²", inputs.g);
}

fn display_results(
    results: &[SimulationResult],
    output: OutputFormat,
    full: bool,
) -> Result<(), Box<dyn Error>> {
    match output {
        OutputFormat::Table => {
            for result in results {
                print_summary(result);
                if full {
                    print_trajectory(result);
                }
            }
            if let [a, b] = results {
                println!("-----------------------------------------");
                println!("Difference ({} - {})", b.method, a.method);
                println!("-----------------------------------------");
                println!(
                    "Δx = {:.6} m, Δz = {:.6} m",
                    b.state.x - a.state.x,
                    b.state.z - a.state.z
                );
                println!(
                    "Δvx = {:.6} m/s, Δvz = {:.6} m/s",
                    b.state.vx - a.state.vx,
                    b.state.vz - a.state.vz
                );
            }
        }
        OutputFormat::Json => {
            let reports: Vec<RunReport> = results
                .iter()
                .map(|r| RunReport {
                    summary: r.summary(),
                    x: full.then(|| r.history.x()),
                    z: full.then(|| r.history.z()),
                    vx: full.then(|| r.history.vx()),
                    vz: full.then(|| r.history.vz()),
                    t: full.then(|| r.history.t()),
                })
                .collect();
            println!("{}", serde_json::to_string_pretty(&reports)?);
        }
        OutputFormat::Csv => {
            // CSV always carries the full recorded series.
            println!("method,t,x,z,vx,vz");
            for result in results {
                let h = &result.history;
                for i in 0..h.len() {
                    println!(
                        "{},{},{},{},{},{}",
                        result.method,
                        h.t()[i],
                        h.x()[i],
                        h.z()[i],
                        h.vx()[i],
                        h.vz()[i]
                    );
                }
            }
        }
    }
    Ok(())
}

fn print_summary(result: &SimulationResult) {
    println!("-----------------------------------------");
    println!("{} method simulation", result.method);
    println!("-----------------------------------------");
    println!(
        "Final position: (x, z) = ({:.2}, {:.2})",
        result.state.x, result.state.z
    );
    println!(
        "Final velocity: (vx, vz) = ({:.2}, {:.2})",
        result.state.vx, result.state.vz
    );
    println!("Final speed: {:.2} m/s", result.final_speed());
    println!("Final time: {:.2} seconds", result.final_time());
}

fn print_trajectory(result: &SimulationResult) {
    let h = &result.history;
    println!("  Time (s) |   X (m)  |   Z (m)  | Vx (m/s) | Vz (m/s)");
    println!("  ---------|----------|----------|----------|---------");
    for i in 0..h.len() {
        println!(
            "  {:8.3} | {:8.3} | {:8.3} | {:8.3} | {:8.3}",
            h.t()[i],
            h.x()[i],
            h.z()[i],
            h.vx()[i],
            h.vz()[i]
        );
    }
}
