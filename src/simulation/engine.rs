use crate::cli::Args;
use crate::colony::{Colony, Event, InputController, RawInput, Script, ScriptAction, TickReport};
use crate::error::{Result, SimError};
use colored::Colorize;
use std::fs::File;
use std::io::{BufWriter, Write};
use std::time::{Duration, Instant};
use tracing::{debug, info, warn};

/// Totals gathered over a run
#[derive(Clone, Debug, Default, PartialEq)]
pub struct RunStats {
    pub ticks: u64,
    pub deliveries: u64,
    pub events_applied: usize,
    pub events_rejected: usize,
    pub elapsed: Duration,
}

/// Drives a colony tick by tick, feeding it scripted input
pub struct SimulationEngine {
    script: Script,
    input: InputController,
}

impl SimulationEngine {
    /// Create a new simulation engine for the given script
    pub fn new(script: Script) -> Self {
        Self {
            script,
            input: InputController::new(),
        }
    }

    /// Events produced by everything scheduled for `tick`
    pub fn capture(&mut self, tick: u64) -> Vec<Event> {
        let mut events = Vec::new();
        for entry in self.script.at(tick) {
            match entry.action {
                ScriptAction::Event(event) => events.push(event),
                ScriptAction::Input(input) => {
                    if let RawInput::Key(key) = input {
                        debug!(tick, key = %key.as_char(), "key pressed");
                    }
                    events.extend(self.input.handle(input));
                }
            }
        }
        events
    }

    /// Run the whole simulation
    pub fn run_simulation(
        &mut self,
        colony: &mut Colony,
        args: &Args,
        rng: &mut fastrand::Rng,
    ) -> Result<RunStats> {
        let mut snapshots = match &args.snapshots {
            Some(path) => Some(BufWriter::new(File::create(path)?)),
            None => None,
        };
        if let Some(last) = self.script.last_tick().filter(|&t| t > args.ticks) {
            warn!(last, ticks = args.ticks, "script runs past the end of the simulation");
        }
        let mut stats = RunStats::default();
        let sim_start = Instant::now();

        // tick 0 entries set the stage before anything moves
        for event in self.capture(0) {
            match colony.apply_event(event, rng) {
                Ok(()) => stats.events_applied += 1,
                Err(err) => {
                    stats.events_rejected += 1;
                    self.log_rejection(args, 0, &err);
                }
            }
        }

        if let Some(out) = snapshots.as_mut() {
            writeln!(out, "{}", colony.snapshot().to_json()?)?;
        }

        info!(ticks = args.ticks, ants = colony.population(), "simulation started");
        for _ in 0..args.ticks {
            let events = self.capture(colony.tick() + 1);
            let report = colony.step(&events, rng);

            stats.ticks += 1;
            stats.deliveries += report.deliveries.len() as u64;
            stats.events_applied += report.applied.len();
            stats.events_rejected += report.rejected.len();
            self.log_report(args, &report, colony.population());

            if let Some(out) = snapshots.as_mut() {
                if report.tick % args.snapshot_every == 0 {
                    let line = colony.snapshot().to_json()?;
                    writeln!(out, "{}", line)?;
                }
            }
            if args.delay_ms > 0 {
                std::thread::sleep(Duration::from_millis(args.delay_ms));
            }
        }

        if let Some(mut out) = snapshots {
            out.flush()?;
        }
        stats.elapsed = sim_start.elapsed();
        info!(
            ticks = stats.ticks,
            population = colony.population(),
            deliveries = stats.deliveries,
            "simulation finished"
        );
        Ok(stats)
    }

    /// Narrate what happened during one tick
    fn log_report(&self, args: &Args, report: &TickReport, population: usize) {
        if args.suppress_events {
            return;
        }
        for delivery in &report.deliveries {
            println!(
                "{} {} {} {} {}",
                format!("[{:>5}]", report.tick).dimmed(),
                "🐜".green(),
                format!("ant {} brought food home to {}", delivery.ant_id, delivery.nest).green(),
                "->".dimmed(),
                format!("ant {} hatched (population {})", delivery.spawned_id, population).yellow()
            );
        }
        if report.pheromone_expired {
            println!(
                "{} {}",
                format!("[{:>5}]", report.tick).dimmed(),
                "pheromone faded away".dimmed()
            );
        }
        for event in &report.applied {
            println!(
                "{} {}",
                format!("[{:>5}]", report.tick).dimmed(),
                event.to_string().cyan()
            );
        }
        for err in &report.rejected {
            self.log_rejection(args, report.tick, err);
        }
    }

    /// Report an event the colony refused
    #[inline]
    fn log_rejection(&self, args: &Args, tick: u64, err: &SimError) {
        if args.suppress_events {
            return;
        }
        println!(
            "{} {} {}",
            format!("[{:>5}]", tick).dimmed(),
            "⚠️".red(),
            err.to_string().bright_red()
        );
    }

    /// Print simulation summary
    pub fn print_summary(&self, colony: &Colony, stats: &RunStats) {
        println!(
            "\n{}\n{} {:.3} ms {} {} {} {} {} {} {}",
            "===".bright_blue().bold(),
            "⏱️  Simulation time:".green().bold(),
            stats.elapsed.as_secs_f64() * 1000.0,
            "|".dimmed(),
            format!("ticks={}", stats.ticks).cyan(),
            format!("population={}", colony.population()).cyan(),
            format!("carrying={}", colony.carrying()).cyan(),
            format!("deliveries={}", stats.deliveries).cyan(),
            format!("nests={}", colony.nests().len()).cyan(),
            format!("food={}", colony.food_sources().len()).cyan(),
        );
        if stats.events_rejected > 0 {
            println!(
                "{}",
                format!("rejected events={}", stats.events_rejected).red()
            );
        }
    }
}
