use core::fmt;
use core::iter::FusedIterator;
use core::ops::RangeBounds;

use crate::raw::{Handle, RawSkipList};
use crate::{ConfigError, SkipListConfig};

mod capacity;
mod dump;
mod element;
mod order_statistic;

pub use dump::Dump;
pub use element::Element;

/// A sorted set of `(score, value)` pairs backed by a ranked skip list.
///
/// Elements are ordered by their `i64` score, ties broken by comparing the
/// value bytes lexicographically. Every forward link records how many
/// elements it jumps over, so besides the usual O(log n) insert, remove and
/// lookup the list answers rank queries ([`rank_of`], [`get_by_rank`]) in
/// O(log n) as well.
///
/// Tower heights come from a random source owned by the list and seeded from
/// its [`SkipListConfig`], so two lists with the same configuration that see
/// the same operations have the same shape.
///
/// Inserting a pair that is already present adds a second element; removing
/// it takes out one of the copies, which one is unspecified.
///
/// [`rank_of`]: SkipList::rank_of
/// [`get_by_rank`]: SkipList::get_by_rank
///
/// # Examples
///
/// ```
/// use ranked_skiplist::SkipList;
///
/// let mut board = SkipList::new();
/// board.insert(300, "carol");
/// board.insert(100, "alice");
/// board.insert(200, "bob");
/// board.insert(200, "bea");
///
/// assert_eq!(board.len(), 4);
/// assert_eq!(board.head().unwrap().value(), b"alice");
/// assert_eq!(board.tail().unwrap().score(), 300);
///
/// // "bea" sorts before "bob" on equal score.
/// let order: Vec<_> = board.iter().map(|e| e.value()).collect();
/// assert_eq!(order, [&b"alice"[..], &b"bea"[..], &b"bob"[..], &b"carol"[..]]);
///
/// assert!(board.remove(200, "bob"));
/// assert!(!board.remove(200, "bob"));
/// assert_eq!(board.len(), 3);
/// ```
#[derive(Clone)]
pub struct SkipList {
    raw: RawSkipList,
    config: SkipListConfig,
}

impl SkipList {
    /// Creates an empty list with the default configuration
    /// (`max_level` 32, `p` 0.25, seed 0).
    ///
    /// # Examples
    ///
    /// ```
    /// use ranked_skiplist::SkipList;
    ///
    /// let list = SkipList::new();
    /// assert!(list.is_empty());
    /// ```
    #[must_use]
    pub fn new() -> Self {
        Self::from_valid(SkipListConfig::default(), 0)
    }

    /// Creates an empty list with the given configuration.
    ///
    /// # Errors
    ///
    /// Returns a [`ConfigError`] if `max_level <= 1` or `p <= 0`.
    ///
    /// # Examples
    ///
    /// ```
    /// use ranked_skiplist::{ConfigError, SkipList, SkipListConfig};
    ///
    /// let list = SkipList::with_config(SkipListConfig::new(10, 0.3, 2)).unwrap();
    /// assert_eq!(list.level(), 1);
    ///
    /// let err = SkipList::with_config(SkipListConfig::new(10, 0.0, 2)).unwrap_err();
    /// assert_eq!(err, ConfigError::InvalidProbability(0.0));
    /// ```
    pub fn with_config(config: SkipListConfig) -> Result<Self, ConfigError> {
        config.validate()?;
        Ok(Self::from_valid(config, 0))
    }

    fn from_valid(config: SkipListConfig, capacity: usize) -> Self {
        SkipList {
            raw: RawSkipList::with_capacity(config.max_level, config.p, config.rng_seed(), capacity),
            config,
        }
    }

    /// The configuration this list was built with.
    #[must_use]
    pub const fn config(&self) -> SkipListConfig {
        self.config
    }

    /// Returns the number of elements.
    ///
    /// # Complexity
    ///
    /// O(1)
    #[must_use]
    pub const fn len(&self) -> usize {
        self.raw.len()
    }

    /// Returns `true` if the list holds no elements.
    #[must_use]
    pub const fn is_empty(&self) -> bool {
        self.raw.len() == 0
    }

    /// Number of levels currently in use: the height of the tallest tower,
    /// or 1 when the list is empty.
    #[must_use]
    pub const fn level(&self) -> usize {
        self.raw.level()
    }

    /// Returns the first element in order, or `None` if the list is empty.
    ///
    /// # Complexity
    ///
    /// O(1)
    #[must_use]
    pub fn head(&self) -> Option<Element<'_>> {
        self.raw.head().map(|handle| Element::new(&self.raw, handle))
    }

    /// Returns the last element in order, or `None` if the list is empty.
    ///
    /// # Complexity
    ///
    /// O(1)
    #[must_use]
    pub fn tail(&self) -> Option<Element<'_>> {
        self.raw.tail().map(|handle| Element::new(&self.raw, handle))
    }

    /// Inserts `(score, value)` and returns the new element.
    ///
    /// Never fails. If an equal pair is already present the new element is
    /// placed next to it and both remain.
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
    /// let element = list.insert(42, b"answer");
    /// assert_eq!((element.score(), element.value()), (42, &b"answer"[..]));
    /// assert!(element.prev().is_none() && element.next().is_none());
    /// ```
    pub fn insert(&mut self, score: i64, value: impl AsRef<[u8]>) -> Element<'_> {
        let handle = self.raw.insert(score, value.as_ref().into());
        Element::new(&self.raw, handle)
    }

    /// Removes an element equal to `(score, value)`.
    ///
    /// Returns `true` if one was found and removed, `false` (without touching
    /// the list) otherwise.
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
    /// list.insert(1, "a");
    /// assert!(!list.remove(1, "b"));
    /// assert!(list.remove(1, "a"));
    /// assert!(list.is_empty());
    /// ```
    pub fn remove(&mut self, score: i64, value: impl AsRef<[u8]>) -> bool {
        self.raw.remove(score, value.as_ref())
    }

    /// Returns `true` if an element equal to `(score, value)` is present.
    #[must_use]
    pub fn contains(&self, score: i64, value: impl AsRef<[u8]>) -> bool {
        self.raw.contains(score, value.as_ref())
    }

    /// Removes every element.
    ///
    /// The configuration is kept, and the random source carries on from where
    /// it was rather than restarting from the seed.
    pub fn clear(&mut self) {
        self.raw.clear();
    }

    /// Iterates over all elements in ascending order.
    ///
    /// # Examples
    ///
    /// ```
    /// use ranked_skiplist::SkipList;
    ///
    /// let mut list = SkipList::new();
    /// list.extend([(3, "c"), (1, "a"), (2, "b")]);
    ///
    /// let scores: Vec<_> = list.iter().map(|e| e.score()).collect();
    /// assert_eq!(scores, [1, 2, 3]);
    ///
    /// let reversed: Vec<_> = list.iter().rev().map(|e| e.score()).collect();
    /// assert_eq!(reversed, [3, 2, 1]);
    /// ```
    pub fn iter(&self) -> Iter<'_> {
        Iter {
            list: &self.raw,
            front: self.raw.head(),
            back: self.raw.tail(),
            remaining: self.raw.len(),
        }
    }

    /// Iterates, in ascending order, over the elements whose score lies in
    /// `range`.
    ///
    /// A range whose start lies past its end yields nothing.
    ///
    /// # Complexity
    ///
    /// O(log n) to position both ends, then O(1) per element.
    ///
    /// # Examples
    ///
    /// ```
    /// use ranked_skiplist::SkipList;
    ///
    /// let mut list = SkipList::new();
    /// list.extend((0..10).map(|score| (score, "x")));
    ///
    /// let picked: Vec<_> = list.range_by_score(3..6).map(|e| e.score()).collect();
    /// assert_eq!(picked, [3, 4, 5]);
    /// assert_eq!(list.range_by_score(8..).len(), 2);
    /// assert_eq!(list.range_by_score(20..=30).next(), None);
    /// ```
    pub fn range_by_score<R>(&self, range: R) -> Iter<'_>
    where
        R: RangeBounds<i64>,
    {
        match self.raw.score_range(&range) {
            Some((first, last, count)) => Iter {
                list: &self.raw,
                front: Some(first),
                back: Some(last),
                remaining: count,
            },
            None => Iter {
                list: &self.raw,
                front: None,
                back: None,
                remaining: 0,
            },
        }
    }
}

impl Default for SkipList {
    fn default() -> Self {
        Self::new()
    }
}

impl fmt::Debug for SkipList {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_list().entries(self.iter()).finish()
    }
}

impl<V: AsRef<[u8]>> Extend<(i64, V)> for SkipList {
    fn extend<I: IntoIterator<Item = (i64, V)>>(&mut self, iter: I) {
        for (score, value) in iter {
            self.insert(score, value);
        }
    }
}

impl<'a> IntoIterator for &'a SkipList {
    type Item = Element<'a>;
    type IntoIter = Iter<'a>;

    fn into_iter(self) -> Iter<'a> {
        self.iter()
    }
}

/// An iterator over elements of a [`SkipList`] in ascending order.
///
/// Created by [`SkipList::iter`] and [`SkipList::range_by_score`]. Walks the
/// bottom level from both ends.
#[must_use = "iterators are lazy and do nothing unless consumed"]
#[derive(Clone)]
pub struct Iter<'a> {
    list: &'a RawSkipList,
    front: Option<Handle>,
    back: Option<Handle>,
    remaining: usize,
}

impl<'a> Iterator for Iter<'a> {
    type Item = Element<'a>;

    fn next(&mut self) -> Option<Element<'a>> {
        if self.remaining == 0 {
            return None;
        }

        let handle = self.front?;
        self.remaining -= 1;
        self.front = self.list.node(handle).next();
        Some(Element::new(self.list, handle))
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        (self.remaining, Some(self.remaining))
    }
}

impl DoubleEndedIterator for Iter<'_> {
    fn next_back(&mut self) -> Option<Self::Item> {
        if self.remaining == 0 {
            return None;
        }

        let handle = self.back?;
        self.remaining -= 1;
        self.back = self.list.node(handle).prev();
        Some(Element::new(self.list, handle))
    }
}

impl ExactSizeIterator for Iter<'_> {
    fn len(&self) -> usize {
        self.remaining
    }
}

impl FusedIterator for Iter<'_> {}

impl fmt::Debug for Iter<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Iter").field("remaining", &self.remaining).finish()
    }
}
