//! Tumble Box entry point
//!
//! Headless driver: runs the simulation at a fixed frame rate and logs what
//! happens. Usage: `tumble-box [tuning.json] [seed] [seconds]`

use std::process::ExitCode;

use tumble_box::PhysicsTuning;
use tumble_box::consts::FRAME_DT;
use tumble_box::hud::format_elapsed;
use tumble_box::renderer::frame_vertices;
use tumble_box::sim::{LogObserver, Simulation};

/// Simulated seconds to run when none are given
const DEFAULT_RUN_SECONDS: f32 = 30.0;

fn main() -> ExitCode {
    env_logger::init();
    log::info!("Tumble Box (headless) starting...");

    let mut args = std::env::args().skip(1);

    let tuning = match args.next().filter(|a| a != "-") {
        Some(path) => match PhysicsTuning::load(&path) {
            Ok(tuning) => tuning,
            Err(e) => {
                log::error!("{}", e);
                eprintln!("tumble-box: {}", e);
                return ExitCode::FAILURE;
            }
        },
        None => PhysicsTuning::default(),
    };

    let seed = match args.next().map(|s| s.parse::<u64>()) {
        Some(Ok(seed)) => seed,
        Some(Err(e)) => {
            eprintln!("tumble-box: invalid seed: {}", e);
            return ExitCode::FAILURE;
        }
        None => default_seed(),
    };

    let seconds = match args.next().map(|s| s.parse::<f32>()) {
        Some(Ok(s)) if s.is_finite() && s > 0.0 => s,
        Some(_) => {
            eprintln!("tumble-box: run length must be a positive number of seconds");
            return ExitCode::FAILURE;
        }
        None => DEFAULT_RUN_SECONDS,
    };

    let mut sim = Simulation::with_tuning(seed, tuning);
    log::info!(
        "Simulation initialized with seed {} ({} particles)",
        seed,
        sim.particles.len()
    );

    let frames = (seconds / FRAME_DT).ceil() as u64;
    let mut observer = LogObserver;
    for _ in 0..frames {
        sim.tick(FRAME_DT, &mut observer);
        if sim.frame % 60 == 0 {
            log::debug!(
                "{} angle={:.3} phase={:?}",
                format_elapsed(sim.elapsed_ms()),
                sim.box_state.angle,
                sim.box_state.phase()
            );
        }
    }

    let frame = frame_vertices(&sim);
    println!(
        "{}  angle {:.3} rad  {:?}  {} outline / {} particle vertices",
        format_elapsed(sim.elapsed_ms()),
        sim.box_state.angle,
        sim.box_state.phase(),
        frame.outline.len(),
        frame.particles.len()
    );
    for batch in frame.batches() {
        log::debug!(
            "{:?}: {} vertices, {} bytes",
            batch.topology,
            batch.vertices.len(),
            batch.bytes().len()
        );
    }

    ExitCode::SUCCESS
}

/// Seed from wall-clock time when none is given
fn default_seed() -> u64 {
    std::time::SystemTime::now()
        .duration_since(std::time::UNIX_EPOCH)
        .map(|d| d.as_secs())
        .unwrap_or(0)
}
