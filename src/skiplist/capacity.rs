use super::SkipList;
use crate::SkipListConfig;

impl SkipList {
    /// Creates an empty list with the default configuration and room for at
    /// least `capacity` elements before the node storage reallocates.
    ///
    /// # Examples
    ///
    /// ```
    /// use ranked_skiplist::SkipList;
    ///
    /// let list = SkipList::with_capacity(64);
    /// assert!(list.is_empty());
    /// assert!(list.capacity() >= 64);
    /// ```
    #[must_use]
    pub fn with_capacity(capacity: usize) -> Self {
        Self::from_valid(SkipListConfig::default(), capacity)
    }

    /// Number of elements the node storage holds without reallocating.
    ///
    /// # Complexity
    ///
    /// O(1)
    #[must_use]
    pub fn capacity(&self) -> usize {
        self.raw.capacity()
    }
}
