use crate::ConfigError;

/// Tower height ceiling used by [`SkipList::new`](crate::SkipList::new).
pub const DEFAULT_MAX_LEVEL: usize = 32;
/// Promotion probability used by [`SkipList::new`](crate::SkipList::new).
pub const DEFAULT_P: f64 = 0.25;
/// Random seed used by [`SkipList::new`](crate::SkipList::new).
pub const DEFAULT_SEED: i64 = 0;

/// Shape parameters of a [`SkipList`](crate::SkipList).
///
/// Lists built from equal configurations and fed the same operations end up
/// with identical towers.
///
/// # Examples
///
/// ```
/// use ranked_skiplist::{ConfigError, SkipList, SkipListConfig};
///
/// let list = SkipList::with_config(SkipListConfig::new(10, 0.3, 2)).unwrap();
/// assert_eq!(list.config().max_level, 10);
///
/// let err = SkipListConfig::new(1, 0.3, 2).validate().unwrap_err();
/// assert_eq!(err, ConfigError::MaxLevelTooSmall(1));
/// ```
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct SkipListConfig {
    /// Highest tower any element may get. Must be greater than 1.
    pub max_level: usize,
    /// Chance of growing a tower by one more level. Must be greater than 0;
    /// values of 1 or more put every tower at `max_level`.
    pub p: f64,
    /// Seed of the list's own random source.
    pub seed: i64,
}

impl SkipListConfig {
    #[must_use]
    pub const fn new(max_level: usize, p: f64, seed: i64) -> Self {
        Self { max_level, p, seed }
    }

    /// Checks the configuration without building a list.
    ///
    /// # Errors
    ///
    /// [`ConfigError::MaxLevelTooSmall`] if `max_level <= 1`, and
    /// [`ConfigError::InvalidProbability`] if `p <= 0` or `p` is NaN.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.max_level <= 1 {
            return Err(ConfigError::MaxLevelTooSmall(self.max_level));
        }
        if self.p.is_nan() || self.p <= 0.0 {
            return Err(ConfigError::InvalidProbability(self.p));
        }
        Ok(())
    }

    /// The seed as the random source expects it. Negative seeds keep their
    /// bit pattern.
    pub(crate) const fn rng_seed(&self) -> u64 {
        u64::from_ne_bytes(self.seed.to_ne_bytes())
    }
}

impl Default for SkipListConfig {
    fn default() -> Self {
        Self::new(DEFAULT_MAX_LEVEL, DEFAULT_P, DEFAULT_SEED)
    }
}

#[cfg(test)]
#[cfg_attr(coverage_nightly, coverage(off))]
mod tests {
    use super::*;

    #[test]
    fn default_is_valid() {
        let config = SkipListConfig::default();
        assert_eq!(config, SkipListConfig::new(32, 0.25, 0));
        assert_eq!(config.validate(), Ok(()));
    }

    #[test]
    fn rejects_short_towers() {
        assert_eq!(SkipListConfig::new(0, 0.5, 0).validate(), Err(ConfigError::MaxLevelTooSmall(0)));
        assert_eq!(SkipListConfig::new(1, 0.5, 0).validate(), Err(ConfigError::MaxLevelTooSmall(1)));
        assert_eq!(SkipListConfig::new(2, 0.5, 0).validate(), Ok(()));
    }

    #[test]
    fn rejects_non_positive_probability() {
        assert_eq!(SkipListConfig::new(4, 0.0, 0).validate(), Err(ConfigError::InvalidProbability(0.0)));
        assert_eq!(SkipListConfig::new(4, -1.0, 0).validate(), Err(ConfigError::InvalidProbability(-1.0)));
        assert!(matches!(
            SkipListConfig::new(4, f64::NAN, 0).validate(),
            Err(ConfigError::InvalidProbability(p)) if p.is_nan()
        ));
        assert_eq!(SkipListConfig::new(4, 1.5, 0).validate(), Ok(()));
    }

    #[test]
    fn max_level_is_checked_first() {
        assert_eq!(SkipListConfig::new(1, 0.0, 0).validate(), Err(ConfigError::MaxLevelTooSmall(1)));
    }

    #[test]
    fn negative_seed_keeps_bits() {
        assert_eq!(SkipListConfig::new(4, 0.5, -1).rng_seed(), u64::MAX);
        assert_eq!(SkipListConfig::new(4, 0.5, 7).rng_seed(), 7);
    }
}
