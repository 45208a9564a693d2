//! Heat diffusion simulator
//!
//! Discretizes the n-dimensional heat equation with backward Euler and
//! advances it in time, solving one CG system per step. At the end the
//! numerical state is compared against the analytic single-mode decay.
//!
//! Usage:
//!   cargo run --release --bin heat-simulator -- --dimension 1 --grid-points 100
//!   cargo run --release --bin heat-simulator -- --config configs/heat_1d.json
//!   cargo run --release --bin heat-simulator -- --help

use clap::Parser;
use fdm::{HeatConfig, HeatSolver, SimulationReport, num_steps};
use std::path::PathBuf;
use std::process::ExitCode;
use std::time::Instant;

#[derive(Parser, Debug)]
#[command(name = "heat-simulator")]
#[command(about = "Implicit finite-difference heat equation solver")]
struct Args {
    /// JSON configuration file; flags below are ignored when given
    #[arg(long)]
    config: Option<PathBuf>,

    /// Number of spatial dimensions
    #[arg(long, default_value_t = 1)]
    dimension: usize,

    /// Interior grid points per axis
    #[arg(long, default_value_t = 100)]
    grid_points: usize,

    /// Diffusion coefficient
    #[arg(long, default_value_t = 0.05)]
    diffusivity: f64,

    /// Time step
    #[arg(long, default_value_t = 0.005)]
    time_step: f64,

    /// Total simulated time
    #[arg(long, default_value_t = 5.0)]
    total_time: f64,

    /// Write the recorded trajectory to this JSON file
    #[arg(long)]
    output: Option<PathBuf>,

    /// Record every Nth snapshot into the report (0 = final state only)
    #[arg(long, default_value_t = 0)]
    record_interval: usize,
}

fn run(args: &Args) -> Result<(), fdm::HeatError> {
    let config = match &args.config {
        Some(path) => HeatConfig::from_file(path)?,
        None => {
            let config = HeatConfig {
                dimension: args.dimension,
                grid_points: args.grid_points,
                diffusivity: args.diffusivity,
                time_step: args.time_step,
                total_time: Some(args.total_time),
            };
            config.validate()?;
            config
        }
    };

    let assemble_start = Instant::now();
    let solver = HeatSolver::new(config.clone())?;
    println!(
        "[heat] {}D grid, {} points, {} nnz, assembly {:.1}ms",
        config.dimension,
        solver.grid().num_points(),
        solver.matrix().nnz(),
        assemble_start.elapsed().as_secs_f64() * 1000.0
    );

    let total_time = config.total_time.expect("total_time is always set here");
    let steps = num_steps(total_time, config.time_step);

    let mut report = SimulationReport::new(solver.grid());
    report.record(0.0, solver.initial_state());

    let solve_start = Instant::now();
    let mut state = solver.initial_state().clone();
    for step in 1..=steps {
        state = solver.step(&state)?;
        if args.record_interval > 0 && step % args.record_interval == 0 {
            report.record(step as f64 * config.time_step, &state);
        }
    }
    let solve_time = solve_start.elapsed();
    report.record(total_time, &state);

    let analytic = solver.exact_at(total_time);
    let error = state.try_sub(&analytic)?.norm();
    println!(
        "[heat] {} steps in {:.1}ms, |numerical - exact| = {:.6e} (field magnitude {:.6e})",
        steps,
        solve_time.as_secs_f64() * 1000.0,
        error,
        analytic.norm()
    );

    if let Some(path) = &args.output {
        report.write_json(path)?;
        println!("[heat] wrote {} snapshots to {}", report.len(), path.display());
    }

    Ok(())
}

fn main() -> ExitCode {
    env_logger::init();
    let args = Args::parse();

    match run(&args) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("error: {e}");
            ExitCode::FAILURE
        }
    }
}
