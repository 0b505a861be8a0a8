// Std library
use std::fs::OpenOptions;
use std::io::Write;

// External crates
use chrono::Local;
use env_logger::{Builder, Target};
use log::LevelFilter;

/// Initializes the logger to write messages to console and to `log_file`.
///
/// Each line carries a timestamp, the log level, and the MPI rank of the
/// process that emitted it, so a run across several nodes can be
/// disentangled from the interleaved stdout. Logging is a no-op unless
/// `enable` is set (the `--log` CLI flag).
///
/// # Panics
/// Panics if `log_file` cannot be created or written.
pub fn init_logger(log_file: &str, enable: bool, rank: i32) {
    if !enable {
        return;
    }

    let file = OpenOptions::new()
        .create(true)
        .append(true)
        .open(log_file)
        .unwrap();

    Builder::new()
        .format(move |_buf, record| {
            let timestamp = Local::now().format("%H:%M:%S");
            let line = format!("[{}][rank {}][{}] {}\n", timestamp, rank, record.level(), record.args());

            print!("{}", line);

            let mut f = &file;
            f.write_all(line.as_bytes()).unwrap();
            Ok(())
        })
        .filter_level(LevelFilter::Info)
        .target(Target::Stdout)
        .init();
}
