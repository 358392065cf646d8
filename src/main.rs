use ant_forage::colony::{parse_script, Script};
use ant_forage::prelude::*;
use clap::Parser;
use colored::Colorize;
use std::process::ExitCode;

fn main() -> ExitCode {
    let _ = tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .with_writer(std::io::stderr)
        .try_init();

    let args = Args::parse();
    match run(&args) {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            eprintln!("{} {}", "error:".red().bold(), err);
            ExitCode::FAILURE
        }
    }
}

fn run(args: &Args) -> Result<()> {
    let config = args.config()?;
    let mut rng = if let Some(seed) = args.seed {
        fastrand::Rng::with_seed(seed)
    } else {
        fastrand::Rng::new()
    };

    let script = match &args.script {
        Some(path) => parse_script(path)?,
        None => Script::default(),
    };

    // Found the colony and run
    let mut colony = Colony::new(config, &mut rng)?;
    let mut engine = SimulationEngine::new(script);
    let stats = engine.run_simulation(&mut colony, args, &mut rng)?;

    engine.print_summary(&colony, &stats);

    Ok(())
}
