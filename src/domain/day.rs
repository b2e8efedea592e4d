//! Day index value type

use crate::domain::DomainError;

/// A validated one-based day number within a course plan.
///
/// Construction enforces the range invariant, so every `DayIndex` held
/// anywhere in the program is known to be within `[1, max]`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub struct DayIndex(u32);

impl DayIndex {
    /// Validate a raw day number against the course length.
    pub fn new(day: u32, max: u32) -> Result<Self, DomainError> {
        if day < 1 || day > max {
            return Err(DomainError::DayOutOfRange { day, max });
        }
        Ok(Self(day))
    }

    /// The raw day number.
    pub fn get(&self) -> u32 {
        self.0
    }

    /// Directory name for this day, e.g. `day_007`.
    pub fn dirname(&self) -> String {
        format!("day_{:03}", self.0)
    }

    /// Template filename for this day, e.g. `day_007.md`.
    pub fn filename(&self) -> String {
        format!("day_{:03}.md", self.0)
    }
}

impl std::fmt::Display for DayIndex {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{:03}", self.0)
    }
}

/// Expand environment variables in a path string.
///
/// Supports:
/// - `$VAR` syntax
/// - `${VAR}` syntax
/// - `~` for home directory
///
/// Uses shellexpand crate for robust expansion.
pub fn expand_env_vars(path: &str) -> String {
    shellexpand::full(path)
        .map(|s| s.into_owned())
        .unwrap_or_else(|_| path.to_string())
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[rstest]
    #[case(1)]
    #[case(7)]
    #[case(100)]
    fn given_day_in_range_when_validating_then_succeeds(#[case] day: u32) {
        let idx = DayIndex::new(day, 100).unwrap();
        assert_eq!(idx.get(), day);
    }

    #[rstest]
    #[case(0)]
    #[case(101)]
    #[case(u32::MAX)]
    fn given_day_out_of_range_when_validating_then_fails(#[case] day: u32) {
        let err = DayIndex::new(day, 100).unwrap_err();
        assert!(matches!(err, DomainError::DayOutOfRange { max: 100, .. }));
    }

    #[test]
    fn given_single_digit_day_when_naming_then_zero_pads_to_three() {
        let idx = DayIndex::new(7, 100).unwrap();
        assert_eq!(idx.dirname(), "day_007");
        assert_eq!(idx.filename(), "day_007.md");
    }

    #[test]
    fn given_three_digit_day_when_naming_then_no_extra_padding() {
        let idx = DayIndex::new(100, 100).unwrap();
        assert_eq!(idx.dirname(), "day_100");
        assert_eq!(idx.filename(), "day_100.md");
    }
}
