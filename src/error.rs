use thiserror::Error;

/// Rejected [`SkipListConfig`](crate::SkipListConfig).
#[derive(Clone, Copy, Debug, Error, PartialEq)]
pub enum ConfigError {
    /// Towers need at least two levels to skip anything.
    #[error("max_level must be greater than 1, got {0}")]
    MaxLevelTooSmall(usize),

    /// The promotion probability must be a number above zero.
    #[error("promotion probability must be greater than 0, got {0}")]
    InvalidProbability(f64),
}

#[cfg(test)]
#[cfg_attr(coverage_nightly, coverage(off))]
mod tests {
    use super::*;
    use alloc::string::ToString;

    #[test]
    fn messages_name_the_offending_value() {
        assert_eq!(ConfigError::MaxLevelTooSmall(1).to_string(), "max_level must be greater than 1, got 1");
        assert_eq!(
            ConfigError::InvalidProbability(-0.5).to_string(),
            "promotion probability must be greater than 0, got -0.5"
        );
    }
}
