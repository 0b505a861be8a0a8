// External crates
use clap::Parser;
use log::info;
use mpi::topology::SimpleCommunicator;
use mpi::traits::*;

// Local modules
use cli::Cli;
use coordinator::CoordinatorOutcome;
use error::TtpError;

mod bootstrap;
mod cli;
mod coordinator;
mod domain;
mod enumerator;
mod error;
mod frontier;
mod logging;
mod oracle;
mod report;
mod streak;

fn run() -> Result<(), TtpError> {
    let cli = Cli::parse();
    cli.validate()?;

    let universe = mpi::initialize()
        .ok_or_else(|| TtpError::Communication("failed to initialize the MPI environment".to_string()))?;
    let world = universe.world();
    let rank = world.rank();

    logging::init_logger("log.txt", cli.log_enabled, rank);
    info!("logger initialized");

    let num_teams = cli.num_teams as usize;
    let max = cli.max.unwrap_or(u64::MAX);

    if rank == 0 {
        info!(
            "starting search: N={} K={} max={} mode={:?} oracle={:?} world_size={}",
            num_teams,
            cli.bfs_plies,
            max,
            cli.mode,
            cli.oracle,
            world.size()
        );
    }

    let start = std::time::Instant::now();

    let root = bootstrap::build_root(num_teams);
    let root = bootstrap::apply_symmetry_breaking(root, num_teams);

    let outcome: CoordinatorOutcome = coordinator::run(
        &world,
        cli.mode,
        root,
        num_teams,
        cli.bfs_plies as u32,
        max,
        cli.oracle,
    );

    let elapsed = start.elapsed();
    let per_rank_counts = gather_local_counts(&world, outcome.local_count);

    if rank == 0 {
        let global_count = outcome
            .global_count
            .expect("rank 0 always receives the globally reduced count");
        info!("final schedule count (N={}): {}", num_teams, global_count);
        info!("time taken: {:.3}s", elapsed.as_secs_f64());
        report::log_summary(&per_rank_counts);

        if cli.log_enabled {
            let run_report = report::RunReport {
                num_teams,
                bfs_plies: cli.bfs_plies as u32,
                total_tasks: outcome.total_tasks,
                global_count,
                elapsed_seconds: elapsed.as_secs_f64(),
                per_rank_counts: per_rank_counts.clone(),
            };
            match run_report.to_json() {
                Ok(json) => println!("{json}"),
                Err(e) => log::warn!("failed to serialize run report: {e}"),
            }
        }
    }

    Ok(())
}

/// Gathers every rank's local leaf count onto rank 0, purely for the
/// end-of-run report. Not part of the count itself — that's already been
/// summed by the coordinator's reduction.
fn gather_local_counts(world: &SimpleCommunicator, local_count: u64) -> Vec<u64> {
    let size = world.size() as usize;
    if size == 1 {
        return vec![local_count];
    }

    if world.rank() == 0 {
        let mut counts = vec![0u64; size];
        world.process_at_rank(0).gather_into_root(&local_count, &mut counts[..]);
        counts
    } else {
        world.process_at_rank(0).gather_into(&local_count);
        Vec::new()
    }
}

fn main() {
    if let Err(e) = run() {
        eprintln!("error: {e}");
        std::process::exit(1);
    }
}
