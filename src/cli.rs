use clap::Parser;

use crate::coordinator::DistMode;
use crate::oracle::OracleKind;

/// Command-line interface for the TTP feasibility search.
///
/// Mirrors the documented usage from the original source: `run N K [max]`.
#[derive(Parser, Debug)]
#[command(name = "run", version, about = "Counts feasible double round-robin TTP schedules")]
pub struct Cli {
    /// Number of teams. Must be even and at least 2.
    pub num_teams: i64,

    /// Number of BFS plies the frontier builder expands before handing
    /// tasks to workers.
    pub bfs_plies: i64,

    /// Optional cap on the number of leaves counted per node. Defaults to
    /// a very large sentinel when omitted.
    pub max: Option<u64>,

    /// Enable logging to stdout and to `log.txt`.
    #[arg(long = "log", default_value_t = false)]
    pub log_enabled: bool,

    /// Distributed coordinator mode.
    #[arg(long = "mode", value_enum, default_value = "static")]
    pub mode: DistMode,

    /// Oracle variant: base (C1-C4) or optimized (C1-C6).
    #[arg(long = "oracle", value_enum, default_value = "optimized")]
    pub oracle: OracleKind,
}

impl Cli {
    /// Validates the parsed arguments beyond what clap's type-level parsing
    /// can express, like "even".
    pub fn validate(&self) -> Result<(), crate::error::TtpError> {
        if self.num_teams < 2 {
            return Err(crate::error::TtpError::Argument(format!(
                "num_teams must be >= 2, got {}",
                self.num_teams
            )));
        }
        if self.num_teams % 2 != 0 {
            return Err(crate::error::TtpError::Argument(format!(
                "num_teams must be even, got {}",
                self.num_teams
            )));
        }
        if self.bfs_plies < 0 {
            return Err(crate::error::TtpError::Argument(format!(
                "bfs_plies must be >= 0, got {}",
                self.bfs_plies
            )));
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn cli(num_teams: i64, bfs_plies: i64) -> Cli {
        Cli {
            num_teams,
            bfs_plies,
            max: None,
            log_enabled: false,
            mode: DistMode::Static,
            oracle: OracleKind::Optimized,
        }
    }

    #[test]
    fn rejects_odd_team_count() {
        assert!(cli(5, 0).validate().is_err());
    }

    #[test]
    fn rejects_too_few_teams() {
        assert!(cli(0, 0).validate().is_err());
    }

    #[test]
    fn rejects_negative_bfs_plies() {
        assert!(cli(4, -1).validate().is_err());
    }

    #[test]
    fn accepts_a_valid_configuration() {
        assert!(cli(8, 2).validate().is_ok());
    }
}
