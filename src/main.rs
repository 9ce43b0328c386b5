//! Rumor Diffusion Simulation
//!
//! Headless runner: drives the engine for a fixed number of ticks and
//! reports how belief spreads through the population.

use clap::Parser;
use std::path::PathBuf;
use std::time::Duration;

use rumor_sim::config::{Config, DEFAULT_TUNING_PATH};
use rumor_sim::output::write_history;
use rumor_sim::{Engine, TICK_INTERVAL_MS};

/// Command line arguments for the simulation
#[derive(Parser, Debug)]
#[command(name = "rumor_sim")]
#[command(about = "An agent-based rumor diffusion simulation")]
struct Args {
    /// Random seed for reproducibility
    #[arg(long, default_value_t = 42)]
    seed: u64,

    /// Number of ticks to simulate (defaults to the tuning file value)
    #[arg(long)]
    ticks: Option<u64>,

    /// Number of opinion leaders
    #[arg(long, value_parser = clap::value_parser!(u8).range(0..=5))]
    kols: Option<u8>,

    /// Diffusion speed setting, 1-100
    #[arg(long)]
    speed: Option<f32>,

    /// Acceptance multiplier for wise agents, 0.1-1.0
    #[arg(long)]
    wise_effect: Option<f32>,

    /// Acceptance multiplier for gullible agents, 1.0-3.0
    #[arg(long)]
    gullible_effect: Option<f32>,

    /// Pace ticks at the nominal 50ms interval instead of running flat out
    #[arg(long)]
    real_time: bool,

    /// Write the diffusion history as JSON on completion
    #[arg(long)]
    output: Option<PathBuf>,

    /// Tuning file path
    #[arg(long, default_value = DEFAULT_TUNING_PATH)]
    tuning: PathBuf,
}

fn main() {
    let args = Args::parse();

    let mut config = if args.tuning.exists() {
        match Config::load(&args.tuning) {
            Ok(config) => config,
            Err(e) => {
                eprintln!("Could not load {}: {}", args.tuning.display(), e);
                std::process::exit(1);
            }
        }
    } else {
        Config::default()
    };

    // CLI flags override tuning file defaults
    if let Some(kols) = args.kols {
        config.sliders.kols = kols as usize;
    }
    if let Some(speed) = args.speed {
        config.sliders.speed = speed;
    }
    if let Some(effect) = args.wise_effect {
        config.sliders.wise_effect = effect;
    }
    if let Some(effect) = args.gullible_effect {
        config.sliders.gullible_effect = effect;
    }

    let ticks = args.ticks.unwrap_or(config.simulation.default_ticks);
    let report_interval = config.simulation.report_interval.max(1);

    println!("Rumor Diffusion Simulation");
    println!("==========================");
    println!("Seed: {}", args.seed);
    println!("Ticks: {}", ticks);
    println!("Agents: {}", config.simulation.total_agents);
    println!("Opinion leaders: {}", config.sliders.kols);
    println!("Speed: {}", config.sliders.speed);
    println!(
        "Effects: wise {} / normal {} / gullible {}",
        config.sliders.wise_effect, config.sliders.normal_effect, config.sliders.gullible_effect
    );
    println!();

    let mut engine = match Engine::new(&config, args.seed) {
        Ok(engine) => engine,
        Err(e) => {
            eprintln!("Could not initialize simulation: {}", e);
            std::process::exit(1);
        }
    };

    println!("Starting simulation...");
    println!();

    engine.start();
    let interval = Duration::from_millis(TICK_INTERVAL_MS);

    for tick in 1..=ticks {
        engine.step();

        if args.real_time {
            std::thread::sleep(interval);
        }

        if tick % report_interval == 0 {
            let counts = engine.population().counts();
            println!(
                "[Tick {:>4}] t={:>6.1}s  uninformed: {:>3}  believers: {:>3}  disbelievers: {:>3}",
                tick,
                engine.elapsed_secs(),
                counts.uninformed,
                counts.believers,
                counts.disbelievers
            );
        }
    }
    engine.pause();

    let counts = engine.population().counts();
    println!();
    println!(
        "Simulation complete. Ran {} ticks ({:.1}s of simulated time).",
        ticks,
        engine.elapsed_secs()
    );
    println!(
        "Final split: {} uninformed, {} believers, {} disbelievers ({} leaders).",
        counts.uninformed,
        counts.believers,
        counts.disbelievers,
        engine.leader_count()
    );

    if let Some(path) = args.output {
        match write_history(engine.history(), &path) {
            Ok(()) => println!("Wrote diffusion history to {}", path.display()),
            Err(e) => eprintln!("Warning: Could not write history: {}", e),
        }
    }
}
