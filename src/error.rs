//! Error types for the parts of the system that can actually fail: argument
//! parsing and the message-passing substrate. The search core itself is
//! pure computation and infallible — invariant violations there are
//! programmer errors, guarded with `debug_assert!` rather than surfaced as
//! `Result`.

use thiserror::Error;

#[derive(Debug, Error)]
pub enum TtpError {
    #[error("argument error: {0}")]
    Argument(String),

    #[error("communication error: {0}")]
    Communication(String),
}
