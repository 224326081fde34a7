use super::{Element, SkipList};

impl SkipList {
    /// Returns the zero-based rank of `(score, value)` in sorted order, or
    /// `None` if the pair is not present.
    ///
    /// If the pair was inserted more than once, this is the rank of the last
    /// copy.
    ///
    /// # Complexity
    ///
    /// O(log n) expected. The spans stored on each link are summed on the way
    /// down, so no bottom-level scan is needed.
    ///
    /// # Examples
    ///
    /// ```
    /// use ranked_skiplist::SkipList;
    ///
    /// let mut list = SkipList::new();
    /// list.extend([(30, "c"), (10, "a"), (20, "b")]);
    ///
    /// assert_eq!(list.rank_of(10, "a"), Some(0));
    /// assert_eq!(list.rank_of(30, "c"), Some(2));
    /// assert_eq!(list.rank_of(20, "z"), None);
    /// ```
    #[must_use]
    pub fn rank_of(&self, score: i64, value: impl AsRef<[u8]>) -> Option<usize> {
        self.raw.rank_of(score, value.as_ref())
    }

    /// Returns the element at zero-based position `rank` in sorted order, or
    /// `None` if `rank` is out of bounds.
    ///
    /// # Complexity
    ///
    /// O(log n) expected.
    ///
    /// # Examples
    ///
    /// ```
    /// use ranked_skiplist::SkipList;
    ///
    /// let mut list = SkipList::new();
    /// list.extend([(30, "c"), (10, "a"), (20, "b")]);
    ///
    /// let median = list.get_by_rank(1).unwrap();
    /// assert_eq!((median.score(), median.value()), (20, &b"b"[..]));
    /// assert!(list.get_by_rank(3).is_none());
    /// ```
    #[must_use]
    pub fn get_by_rank(&self, rank: usize) -> Option<Element<'_>> {
        self.raw.get_by_rank(rank).map(|handle| Element::new(&self.raw, handle))
    }
}

#[cfg(test)]
#[cfg_attr(coverage_nightly, coverage(off))]
mod tests {
    use crate::{SkipList, SkipListConfig};

    #[test]
    fn rank_round_trips_through_position() {
        let mut list = SkipList::with_config(SkipListConfig::new(6, 0.5, 99)).unwrap();
        for score in (0..300).rev() {
            list.insert(score * 3 % 301, "v");
        }

        for (position, element) in list.iter().enumerate() {
            assert_eq!(list.rank_of(element.score(), element.value()), Some(position));
            assert_eq!(list.get_by_rank(position), Some(element));
        }
        assert_eq!(list.get_by_rank(list.len()), None);
    }

    #[test]
    fn ranks_shift_after_removal() {
        let mut list = SkipList::new();
        list.extend([(1, "a"), (2, "b"), (3, "c"), (4, "d")]);
        assert_eq!(list.rank_of(4, "d"), Some(3));

        assert!(list.remove(2, "b"));
        assert_eq!(list.rank_of(4, "d"), Some(2));
        assert_eq!(list.rank_of(2, "b"), None);
        assert_eq!(list.get_by_rank(1).map(|e| e.score()), Some(3));
    }

    #[test]
    fn empty_list_has_no_ranks() {
        let list = SkipList::new();
        assert_eq!(list.rank_of(0, ""), None);
        assert_eq!(list.get_by_rank(0), None);
    }
}
