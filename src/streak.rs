//! The Streak Tracker: forward application of a matchup onto the per-team
//! streak state, with a minimal reversible snapshot for backtracking.
//!
//! Only the two teams named in a matchup are ever touched by `apply`, so a
//! snapshot only needs to keep their prior entries around for `restore` to
//! undo in O(1).

use crate::domain::{Location, Matchup, TeamId, TeamState};

/// The prior state of the two teams touched by an `apply`, sufficient to
/// undo it exactly.
pub struct Snapshot {
    home_id: TeamId,
    home_prev: TeamState,
    away_id: TeamId,
    away_prev: TeamState,
}

/// Applies `m` to `streaks` in place. The home team extends or restarts its
/// streak at `Home`; the away team does the same at `Away`.
pub fn apply(streaks: &mut [TeamState], m: Matchup) {
    let home = &mut streaks[m.home];
    home.streak.length = if home.streak.last_location == Location::Home {
        home.streak.length + 1
    } else {
        1
    };
    home.streak.last_location = Location::Home;
    home.home_remaining -= 1;

    let away = &mut streaks[m.away];
    away.streak.length = if away.streak.last_location == Location::Away {
        away.streak.length + 1
    } else {
        1
    };
    away.streak.last_location = Location::Away;
    away.away_remaining -= 1;
}

/// Snapshots the two affected entries, then applies `m`.
pub fn save_and_apply(streaks: &mut [TeamState], m: Matchup) -> Snapshot {
    let snapshot = Snapshot {
        home_id: m.home,
        home_prev: streaks[m.home],
        away_id: m.away,
        away_prev: streaks[m.away],
    };
    apply(streaks, m);
    snapshot
}

/// Restores the two entries captured by `snapshot`, undoing the matching
/// `save_and_apply` call exactly.
pub fn restore(streaks: &mut [TeamState], snapshot: Snapshot) {
    streaks[snapshot.home_id] = snapshot.home_prev;
    streaks[snapshot.away_id] = snapshot.away_prev;
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn apply_then_restore_is_identity() {
        let mut streaks = vec![TeamState::fresh(4); 4];
        let before = streaks.clone();

        let m = Matchup::new(0, 1);
        let snap = save_and_apply(&mut streaks, m);
        assert_ne!(streaks, before);

        restore(&mut streaks, snap);
        assert_eq!(streaks, before);
    }

    #[test]
    fn consecutive_home_games_extend_the_streak() {
        let mut streaks = vec![TeamState::fresh(6); 6];
        apply(&mut streaks, Matchup::new(0, 1));
        assert_eq!(streaks[0].streak.length, 1);
        apply(&mut streaks, Matchup::new(0, 2));
        assert_eq!(streaks[0].streak.length, 2);
        assert_eq!(streaks[0].streak.last_location, Location::Home);
    }

    #[test]
    fn switching_location_restarts_the_streak() {
        let mut streaks = vec![TeamState::fresh(6); 6];
        apply(&mut streaks, Matchup::new(0, 1));
        assert_eq!(streaks[1].streak.length, 1);
        assert_eq!(streaks[1].streak.last_location, Location::Away);
        apply(&mut streaks, Matchup::new(1, 2));
        assert_eq!(streaks[1].streak.length, 1);
        assert_eq!(streaks[1].streak.last_location, Location::Home);
    }

    #[test]
    fn remaining_counters_decrement() {
        let mut streaks = vec![TeamState::fresh(4); 4];
        apply(&mut streaks, Matchup::new(0, 1));
        assert_eq!(streaks[0].home_remaining, 2);
        assert_eq!(streaks[1].away_remaining, 2);
    }
}
