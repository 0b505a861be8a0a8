//! The Distributed Coordinator: divides the task frontier across worker
//! nodes (static partitioning or a master/worker pull model), runs the
//! Sequential Enumerator per task, and reduces local counts into a global
//! total on rank 0.

use log::{debug, info};
use mpi::collective::SystemOperation;
use mpi::topology::SimpleCommunicator;
use mpi::traits::*;

use crate::domain::WorkItem;
use crate::enumerator::count_recursive;
use crate::frontier::build_frontier;
use crate::oracle::OracleKind;
use crate::report::ProgressBarLog;

/// Which dispatch protocol the coordinator should use across nodes.
#[derive(Clone, Copy, Debug, PartialEq, Eq, clap::ValueEnum)]
pub enum DistMode {
    /// Every node recomputes the frontier and takes a fixed, precomputed
    /// slice of it.
    Static,
    /// Node 0 hands out task indices to workers on request as they finish.
    Dynamic,
}

/// What a single rank contributes to the run: its own local leaf count, and
/// (on rank 0 only) the globally reduced total.
pub struct CoordinatorOutcome {
    pub rank: i32,
    pub size: i32,
    pub total_tasks: usize,
    pub local_count: u64,
    pub global_count: Option<u64>,
}

/// Runs the full search: builds the frontier, dispatches it across
/// `world` under `mode`, and reduces local counts to rank 0.
pub fn run(
    world: &SimpleCommunicator,
    mode: DistMode,
    root: WorkItem,
    num_teams: usize,
    bfs_plies: u32,
    max: u64,
    oracle: OracleKind,
) -> CoordinatorOutcome {
    let rank = world.rank();
    let size = world.size();

    // Every node recomputes the identical, deterministic frontier, so the
    // leaves the BFS already counted along the way must only be kept once —
    // not once per rank.
    let frontier = build_frontier(root, num_teams, bfs_plies, oracle);
    let mut local_count = if rank == 0 { frontier.companion_leaves } else { 0 };
    let tasks = frontier.tasks;
    let total_tasks = tasks.len();

    if rank == 0 {
        info!(
            "frontier built: {} tasks, {} leaves already counted during BFS",
            total_tasks, local_count
        );
    }

    if size == 1 {
        run_all_tasks_locally(tasks, num_teams, max, oracle, &mut local_count);
        return CoordinatorOutcome {
            rank,
            size,
            total_tasks,
            local_count,
            global_count: Some(local_count),
        };
    }

    match mode {
        DistMode::Static => run_static(world, tasks, num_teams, max, oracle, &mut local_count),
        DistMode::Dynamic => run_dynamic(world, tasks, num_teams, max, oracle, &mut local_count),
    }

    info!("rank {}: {} schedules found locally", rank, local_count);

    let root_process = world.process_at_rank(0);
    if rank == 0 {
        let mut global_count = 0u64;
        root_process.reduce_into_root(&local_count, &mut global_count, SystemOperation::sum());
        CoordinatorOutcome {
            rank,
            size,
            total_tasks,
            local_count,
            global_count: Some(global_count),
        }
    } else {
        root_process.reduce_into(&local_count, SystemOperation::sum());
        CoordinatorOutcome {
            rank,
            size,
            total_tasks,
            local_count,
            global_count: None,
        }
    }
}

/// The single-process path (`W = 1`): run every frontier task on the lone
/// rank, no message passing involved.
fn run_all_tasks_locally(tasks: Vec<WorkItem>, num_teams: usize, max: u64, oracle: OracleKind, local_count: &mut u64) {
    let progress = ProgressBarLog::new(tasks.len() as u64);
    for task in tasks {
        if *local_count >= max {
            break;
        }
        let mut item = task;
        count_recursive(&mut item, num_teams, max, oracle, local_count);
        progress.inc();
    }
    progress.finish();
}

/// Static partitioning: node `r` takes a fixed, contiguous slice of the
/// frontier sized to balance remainders across ranks.
fn run_static(
    world: &SimpleCommunicator,
    tasks: Vec<WorkItem>,
    num_teams: usize,
    max: u64,
    oracle: OracleKind,
    local_count: &mut u64,
) {
    let rank = world.rank() as usize;
    let size = world.size() as usize;
    let total = tasks.len();

    let chunk = total / size;
    let remainder = total % size;
    let start = rank * chunk + rank.min(remainder);
    let end = (rank + 1) * chunk + (rank + 1).min(remainder);

    let progress = ProgressBarLog::new((end - start) as u64);
    progress.set_message(&format!("rank {rank}"));
    for task in tasks.into_iter().take(end).skip(start) {
        if *local_count >= max {
            break;
        }
        let mut item = task;
        count_recursive(&mut item, num_teams, max, oracle, local_count);
        progress.inc();
    }
    progress.finish();
}

/// Dynamic master/worker dispatch: rank 0 owns no tasks and hands out task
/// indices to whichever worker asks next; workers exit on the `-1`
/// sentinel.
fn run_dynamic(
    world: &SimpleCommunicator,
    tasks: Vec<WorkItem>,
    num_teams: usize,
    max: u64,
    oracle: OracleKind,
    local_count: &mut u64,
) {
    let rank = world.rank();
    let size = world.size();
    let total_tasks = tasks.len() as i32;

    if rank == 0 {
        let mut next_task = 0i32;
        let mut sentinels_sent = 0i32;

        while next_task < total_tasks || sentinels_sent < size - 1 {
            let (requesting_rank, _status) = world.any_process().receive::<i32>();

            if next_task < total_tasks {
                world.process_at_rank(requesting_rank).send(&next_task);
                next_task += 1;
            } else {
                let no_more_tasks: i32 = -1;
                world.process_at_rank(requesting_rank).send(&no_more_tasks);
                sentinels_sent += 1;
            }
        }
    } else {
        let master = world.process_at_rank(0);
        loop {
            master.send(&rank);
            let (task_id, _status) = master.receive::<i32>();
            if task_id < 0 {
                break;
            }

            debug!("rank {}: processing task {}", rank, task_id);
            let mut item = tasks[task_id as usize].clone();
            count_recursive(&mut item, num_teams, max, oracle, local_count);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::bootstrap;

    /// The static-partitioning index math must cover every task exactly
    /// once across all ranks and never go out of bounds.
    #[test]
    fn static_partition_covers_every_task_exactly_once() {
        for total in 0..37usize {
            for size in 1..9usize {
                let mut covered = vec![0u32; total];
                for rank in 0..size {
                    let chunk = total / size;
                    let remainder = total % size;
                    let start = rank * chunk + rank.min(remainder);
                    let end = (rank + 1) * chunk + (rank + 1).min(remainder);
                    assert!(end <= total);
                    for slot in covered.iter_mut().take(end).skip(start) {
                        *slot += 1;
                    }
                }
                assert!(covered.iter().all(|&c| c == 1), "total={total} size={size}");
            }
        }
    }

    #[test]
    fn single_process_path_matches_plain_sequential_count() {
        let n = 4;
        let root = bootstrap::apply_symmetry_breaking(bootstrap::build_root(n), n);
        let frontier = build_frontier(root, n, 2, OracleKind::Optimized);
        let mut via_all_tasks = frontier.companion_leaves;
        run_all_tasks_locally(frontier.tasks, n, u64::MAX, OracleKind::Optimized, &mut via_all_tasks);

        let root2 = bootstrap::apply_symmetry_breaking(bootstrap::build_root(n), n);
        let mut direct = 0u64;
        let mut item = root2;
        count_recursive(&mut item, n, u64::MAX, OracleKind::Optimized, &mut direct);

        assert_eq!(via_all_tasks, direct);
    }
}
