//! Error types for the Rift3D engine
//!
//! The planner and executor have exactly one error class: exhaustion of a
//! per-frame resource (viewport pool, matrix pool, display command budget).
//! Exhaustion is never fatal — a stage that cannot obtain a resource is
//! simply not created, and a replay that runs out of command budget stops
//! early. The pools reset on the next frame.

use std::fmt;

/// Result type for Rift3D engine operations
pub type Result<T> = std::result::Result<T, Error>;

/// Rift3D engine errors
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Error {
    /// A fixed-size frame pool has no free slots (the &str names the pool)
    PoolExhausted(&'static str),

    /// The display command budget for this frame is spent
    CommandBudgetExhausted,
}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Error::PoolExhausted(pool) => write!(f, "Frame pool exhausted: {}", pool),
            Error::CommandBudgetExhausted => write!(f, "Display command budget exhausted"),
        }
    }
}

impl std::error::Error for Error {}

#[cfg(test)]
#[path = "error_tests.rs"]
mod tests;
