//! Run reporting: summary statistics and a load-distribution chart over the
//! per-rank leaf counts produced by the coordinator. Useful for spotting
//! load imbalance across the static/dynamic dispatch.

use indicatif::{ProgressBar, ProgressStyle};
use log::info;
use plotters::prelude::*;
use serde::Serialize;

/// A structured summary of one run, serializable for `--log`-enabled runs
/// or for piping to downstream tooling. Not persisted to disk by default.
#[derive(Serialize)]
pub struct RunReport {
    pub num_teams: usize,
    pub bfs_plies: u32,
    pub total_tasks: usize,
    pub global_count: u64,
    pub elapsed_seconds: f64,
    pub per_rank_counts: Vec<u64>,
}

/// Arithmetic mean of `data`. Panics on an empty slice.
pub fn mean(data: &[u64]) -> f64 {
    data.iter().sum::<u64>() as f64 / data.len() as f64
}

/// Median of `data`. Panics on an empty slice.
pub fn median(data: &[u64]) -> f64 {
    let mut sorted = data.to_vec();
    sorted.sort_unstable();
    let mid = sorted.len() / 2;
    if sorted.len() % 2 == 0 {
        (sorted[mid - 1] as f64 + sorted[mid] as f64) / 2.0
    } else {
        sorted[mid] as f64
    }
}

/// `(min, max)` of `data`. Panics on an empty slice.
pub fn min_max(data: &[u64]) -> (u64, u64) {
    (*data.iter().min().unwrap(), *data.iter().max().unwrap())
}

/// A simple wrapper around `ProgressBar` for logging a rank's progress
/// through its slice of the task frontier.
pub struct ProgressBarLog {
    bar: ProgressBar,
}

impl ProgressBarLog {
    /// Creates a new `ProgressBarLog` tracking `total` tasks.
    pub fn new(total: u64) -> Self {
        let bar = ProgressBar::new(total);
        bar.set_style(
            ProgressStyle::default_bar()
                .template(" [{elapsed_precise}] {bar:40.green/white} {pos}/{len} ({percent}%) | {msg}")
                .progress_chars("%>="),
        );
        Self { bar }
    }

    /// Increments the progress bar by one step.
    pub fn inc(&self) {
        self.bar.inc(1);
    }

    /// Sets a custom message to display alongside the progress bar.
    pub fn set_message(&self, msg: &str) {
        self.bar.set_message(msg);
    }

    /// Finishes the progress bar, marking it as complete.
    pub fn finish(&self) {
        self.bar.finish();
    }
}

/// Plots a bar chart of per-rank leaf counts to `filename`, one bar per
/// rank. Useful for spotting static-mode load imbalance at a glance.
pub fn plot_rank_distribution(per_rank_counts: &[u64], filename: &str) -> Result<(), Box<dyn std::error::Error>> {
    let max_count = per_rank_counts.iter().max().cloned().unwrap_or(0);

    let root = BitMapBackend::new(filename, (1280, 720)).into_drawing_area();
    root.fill(&WHITE)?;

    let mut chart = ChartBuilder::on(&root)
        .caption("Leaf count per rank", ("sans-serif", 40))
        .margin(10)
        .x_label_area_size(40)
        .y_label_area_size(60)
        .build_cartesian_2d(0u32..per_rank_counts.len() as u32, 0u64..max_count + 1)?;

    chart.configure_mesh().draw()?;

    chart.draw_series(per_rank_counts.iter().enumerate().map(|(rank, &count)| {
        Rectangle::new([(rank as u32, 0), (rank as u32 + 1, count)], BLUE.mix(0.6).filled())
    }))?;

    Ok(())
}

impl RunReport {
    /// Renders this report as pretty-printed JSON for `--log`-enabled runs.
    /// Printed to stdout rather than written to disk — this build persists
    /// no state between runs.
    pub fn to_json(&self) -> serde_json::Result<String> {
        serde_json::to_string_pretty(self)
    }
}

/// Logs a summary of per-rank counts and, when more than one rank
/// contributed, renders the load-distribution chart.
pub fn log_summary(per_rank_counts: &[u64]) {
    if per_rank_counts.is_empty() {
        return;
    }

    info!("per-rank counts: {:?}", per_rank_counts);
    info!("mean: {}", mean(per_rank_counts));
    info!("median: {}", median(per_rank_counts));
    let (min, max) = min_max(per_rank_counts);
    info!("min-max: ({}, {})", min, max);

    if per_rank_counts.len() > 1 {
        if let Err(e) = plot_rank_distribution(per_rank_counts, "rank_distribution.png") {
            log::warn!("failed to render rank distribution chart: {e}");
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn mean_of_uniform_counts_is_that_count() {
        assert_eq!(mean(&[5, 5, 5, 5]), 5.0);
    }

    #[test]
    fn median_handles_even_and_odd_lengths() {
        assert_eq!(median(&[1, 2, 3]), 2.0);
        assert_eq!(median(&[1, 2, 3, 4]), 2.5);
    }

    #[test]
    fn min_max_picks_extremes() {
        assert_eq!(min_max(&[3, 1, 4, 1, 5, 9]), (1, 9));
    }
}
