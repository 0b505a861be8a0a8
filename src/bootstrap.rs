//! Builds the root work item: the full matchup universe and zeroed streak
//! state for `N` teams, then the symmetry-breaking first round.
//!
//! This is deliberately thin — it performs no constraint checking of its
//! own; rejecting candidates is the Constraint Oracle's job.

use itertools::Itertools;

use crate::domain::{Matchup, TeamState, WorkItem};
use crate::streak;

/// Builds the root work item: every ordered pair of distinct teams as a
/// remaining matchup, an empty schedule, and zeroed per-team streak state.
pub fn build_root(num_teams: usize) -> WorkItem {
    let remaining = (0..num_teams)
        .permutations(2)
        .map(|pair| Matchup::new(pair[0], pair[1]))
        .collect();

    WorkItem {
        remaining,
        schedule: Vec::new(),
        streaks: vec![TeamState::fresh(num_teams); num_teams],
    }
}

/// Fixes the first round to the canonical pairing `(0,1), (2,3), ...,
/// (N-2, N-1)`, removing those matchups from `remaining` and applying them
/// to the streak state. Collapses the first round's relabeling symmetry;
/// the resulting count is the "normalized" count.
pub fn apply_symmetry_breaking(mut item: WorkItem, num_teams: usize) -> WorkItem {
    for home in (0..num_teams).step_by(2) {
        let m = Matchup::new(home, home + 1);
        let pos = item
            .remaining
            .iter()
            .position(|x| *x == m)
            .expect("canonical first-round matchup missing from the universe");
        item.remaining.remove(pos);
        item.schedule.push(m);
        streak::apply(&mut item.streaks, m);
    }
    item
}
