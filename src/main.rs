use std::env;
use std::process;

use plateau_rover::{BatchSummary, ConsoleSink, Mission, RoverInterpreter, run_all};

fn main() {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("warn")).init();

    let mission = match env::args().nth(1) {
        Some(path) => match Mission::load(&path) {
            Ok(mission) => mission,
            Err(err) => {
                eprintln!("Error: could not load mission from {path}: {err}");
                process::exit(1);
            }
        },
        None => Mission::sample(),
    };

    log::info!(
        "plateau {}x{}, {} rover(s)",
        mission.plateau.max_x(),
        mission.plateau.max_y(),
        mission.rovers.len()
    );

    let interpreter = RoverInterpreter::default();
    let outcomes = run_all(
        &interpreter,
        &mission.rovers,
        &mission.plateau,
        &mut ConsoleSink,
    );

    let summary = BatchSummary::from_outcomes(&outcomes);
    log::info!(
        "{} of {} rover(s) completed, {} failed",
        summary.succeeded,
        summary.total(),
        summary.failed
    );
}
