//! Core value types for the TTP feasibility search: teams, matchups, the
//! per-team streak state, and the work item that ties them together at a
//! single node of the search tree.

use serde::Serialize;

/// A team is identified by its position in `[0, N)`.
pub type TeamId = usize;

/// Where a team played in a given game.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize)]
pub enum Location {
    Home,
    Away,
}

/// An ordered (home, away) pairing of two distinct teams. One game.
///
/// Equality and hashing are structural on both fields: `(0, 1) != (1, 0)`.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize)]
pub struct Matchup {
    pub home: TeamId,
    pub away: TeamId,
}

impl Matchup {
    pub fn new(home: TeamId, away: TeamId) -> Self {
        Matchup { home, away }
    }

    /// The reverse pairing `(away, home)`.
    pub fn mirror(&self) -> Matchup {
        Matchup {
            home: self.away,
            away: self.home,
        }
    }
}

/// The current run of consecutive games a team played at the same location.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct StreakEntry {
    pub length: u8,
    pub last_location: Location,
}

impl StreakEntry {
    fn fresh() -> Self {
        StreakEntry {
            length: 0,
            last_location: Location::Home,
        }
    }
}

/// Per-team bookkeeping: games left to schedule at home/away, and the
/// team's current consecutive-location streak.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct TeamState {
    pub home_remaining: u32,
    pub away_remaining: u32,
    pub streak: StreakEntry,
}

impl TeamState {
    /// The zeroed state for a team at the start of a search with `num_teams` teams.
    pub fn fresh(num_teams: usize) -> Self {
        let games = (num_teams - 1) as u32;
        TeamState {
            home_remaining: games,
            away_remaining: games,
            streak: StreakEntry::fresh(),
        }
    }
}

/// The complete state at one node of the search tree: the matchups still to
/// be placed, the partial schedule built so far, and every team's streak
/// state. Owned exclusively by whichever worker is exploring this node.
#[derive(Clone, Debug)]
pub struct WorkItem {
    pub remaining: Vec<Matchup>,
    pub schedule: Vec<Matchup>,
    pub streaks: Vec<TeamState>,
}

impl WorkItem {
    pub fn is_leaf(&self) -> bool {
        self.remaining.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn mirror_swaps_home_and_away() {
        let m = Matchup::new(2, 5);
        assert_eq!(m.mirror(), Matchup::new(5, 2));
        assert_ne!(m, m.mirror());
    }

    #[test]
    fn fresh_team_state_has_n_minus_one_games_each_way() {
        let s = TeamState::fresh(8);
        assert_eq!(s.home_remaining, 7);
        assert_eq!(s.away_remaining, 7);
        assert_eq!(s.streak.length, 0);
    }
}
