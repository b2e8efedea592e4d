//! Domain-level errors (no external dependencies)

use thiserror::Error;

/// Domain errors represent business logic violations.
/// These are independent of infrastructure concerns.
#[derive(Error, Debug)]
pub enum DomainError {
    #[error("day must be between 1 and {max}, got {day}")]
    DayOutOfRange { day: u32, max: u32 },
}
