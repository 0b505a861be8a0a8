//! The Constraint Oracle: pure predicates deciding whether a candidate
//! matchup may legally extend a partial schedule.
//!
//! `Base` implements C1-C4. `Optimized` additionally applies the C5/C6
//! lookahead pruning. Neither variant mutates its inputs.

use crate::domain::{Location, Matchup, TeamId, TeamState};

/// Which flavor of oracle to run. `Optimized` is a strict superset of
/// `Base`'s rejections.
#[derive(Clone, Copy, Debug, PartialEq, Eq, clap::ValueEnum)]
pub enum OracleKind {
    Base,
    Optimized,
}

/// Returns the suffix of `schedule` belonging to the round currently being
/// filled, i.e. the last `schedule.len() % round_size` matchups.
fn current_round_suffix(schedule: &[Matchup], round_size: usize) -> &[Matchup] {
    let index = schedule.len() % round_size;
    &schedule[schedule.len() - index..]
}

/// The immediately preceding, already-completed round, if one exists.
fn previous_round(schedule: &[Matchup], round_size: usize) -> Option<&[Matchup]> {
    let index = schedule.len() % round_size;
    if schedule.len() < round_size + index {
        return None;
    }
    let end = schedule.len() - index;
    let start = end - round_size;
    Some(&schedule[start..end])
}

/// C1 — `a` or `b` already appears in the round currently being filled.
fn violates_round_repeat(current: &[Matchup], a: TeamId, b: TeamId) -> bool {
    current
        .iter()
        .any(|p| p.home == a || p.away == a || p.home == b || p.away == b)
}

/// C2 — candidates within a round must be appended in non-decreasing order
/// of their home team's id.
fn violates_canonical_order(current: &[Matchup], a: TeamId) -> bool {
    current.iter().any(|p| a < p.home)
}

/// C3 — the previous round may not contain the reverse of `m`.
fn violates_no_repeat(prev_round: &[Matchup], a: TeamId, b: TeamId) -> bool {
    prev_round.iter().any(|p| p.home == b && p.away == a)
}

/// C4 — appending `m` would extend either team's streak to four.
fn violates_max_streak(streaks: &[TeamState], a: TeamId, b: TeamId) -> bool {
    let home_maxed = streaks[a].streak.length == 3 && streaks[a].streak.last_location == Location::Home;
    let away_maxed = streaks[b].streak.length == 3 && streaks[b].streak.last_location == Location::Away;
    home_maxed || away_maxed
}

/// C5 — lookahead: would this team be left unable to break its majority
/// streak often enough to finish the schedule?
fn violates_future_max_streak(streaks: &[TeamState], m: Matchup) -> bool {
    team_infeasible_after(streaks, m.home, Location::Home) || team_infeasible_after(streaks, m.away, Location::Away)
}

fn team_infeasible_after(streaks: &[TeamState], team: TeamId, location_just_played: Location) -> bool {
    let state = &streaks[team];
    let (home_after, away_after) = match location_just_played {
        Location::Home => (state.home_remaining.saturating_sub(1), state.away_remaining),
        Location::Away => (state.home_remaining, state.away_remaining.saturating_sub(1)),
    };

    let x = home_after.max(away_after);
    let y = home_after.min(away_after);

    let continuing_in_majority = match location_just_played {
        Location::Home => state.streak.last_location == Location::Home && home_after > away_after,
        Location::Away => state.streak.last_location == Location::Away && away_after > home_after,
    };
    let s = if continuing_in_majority { state.streak.length as u32 } else { 0 };

    (x + s) / 3 > y + 1
}

/// C6 — with exactly two rounds left to place after `m`, reject if the
/// remaining matchups (inclusive of `m`) contain a mirrored pair.
fn violates_two_round_tail(schedule_len_before: usize, remaining: &[Matchup], num_teams: usize) -> bool {
    let round_size = num_teams / 2;
    let trigger_len = num_teams * (num_teams - 1) - num_teams;
    if schedule_len_before != trigger_len {
        return false;
    }
    debug_assert_eq!(remaining.len(), 2 * round_size);
    remaining
        .iter()
        .any(|m| remaining.iter().any(|p| *p == m.mirror()))
}

impl OracleKind {
    /// Returns `true` iff appending `m` to this partial schedule must be
    /// rejected under this oracle's constraint set.
    pub fn reject(
        self,
        schedule: &[Matchup],
        remaining: &[Matchup],
        streaks: &[TeamState],
        num_teams: usize,
        m: Matchup,
    ) -> bool {
        let round_size = num_teams / 2;
        let current = current_round_suffix(schedule, round_size);

        if violates_round_repeat(current, m.home, m.away) {
            return true;
        }
        if violates_canonical_order(current, m.home) {
            return true;
        }
        if let Some(prev) = previous_round(schedule, round_size) {
            if violates_no_repeat(prev, m.home, m.away) {
                return true;
            }
        }
        if violates_max_streak(streaks, m.home, m.away) {
            return true;
        }

        if self == OracleKind::Optimized {
            if violates_future_max_streak(streaks, m) {
                return true;
            }
            if violates_two_round_tail(schedule.len(), remaining, num_teams) {
                return true;
            }
        }

        false
    }
}
