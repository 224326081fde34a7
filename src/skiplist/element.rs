use core::fmt;
use core::ptr;

use crate::raw::{Handle, Node, RawSkipList};

/// A borrowed view of one element of a [`SkipList`](crate::SkipList).
///
/// Returned by [`insert`](crate::SkipList::insert), [`head`](crate::SkipList::head),
/// [`tail`](crate::SkipList::tail) and the iterators. Holds the list borrowed,
/// so it can walk to its neighbours but never outlives a mutation.
#[derive(Clone, Copy)]
pub struct Element<'a> {
    list: &'a RawSkipList,
    handle: Handle,
}

impl<'a> Element<'a> {
    pub(crate) fn new(list: &'a RawSkipList, handle: Handle) -> Self {
        Self { list, handle }
    }

    fn node(&self) -> &'a Node {
        self.list.node(self.handle)
    }

    /// The primary sort key.
    #[must_use]
    pub fn score(&self) -> i64 {
        self.node().score()
    }

    /// The tiebreaker bytes.
    #[must_use]
    pub fn value(&self) -> &'a [u8] {
        self.node().value()
    }

    /// How many levels this element's tower reaches, at least 1.
    #[must_use]
    pub fn height(&self) -> usize {
        self.node().height()
    }

    /// The following element in order.
    #[must_use]
    pub fn next(&self) -> Option<Self> {
        self.node().next().map(|handle| Self::new(self.list, handle))
    }

    /// The preceding element in order.
    #[must_use]
    pub fn prev(&self) -> Option<Self> {
        self.node().prev().map(|handle| Self::new(self.list, handle))
    }

    /// Zero-based position of this element in the list.
    ///
    /// # Complexity
    ///
    /// O(log n), plus one step per equal `(score, value)` pair sorting after
    /// this one.
    #[must_use]
    pub fn rank(&self) -> usize {
        self.list.rank_of_handle(self.handle)
    }
}

impl PartialEq for Element<'_> {
    fn eq(&self, other: &Self) -> bool {
        ptr::eq(self.list, other.list) && self.handle == other.handle
    }
}

impl Eq for Element<'_> {}

impl fmt::Debug for Element<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Element")
            .field("score", &self.score())
            .field("value", &format_args!("\"{}\"", self.value().escape_ascii()))
            .finish()
    }
}
