use alloc::boxed::Box;
use core::cmp::Ordering;

use smallvec::{SmallVec, smallvec};

use super::handle::Handle;

/// Towers at or below this height are stored inline in the node.
///
/// With the default promotion probability of 0.25 fewer than one node in 250
/// grows past it.
pub(crate) const INLINE_LEVELS: usize = 4;

/// One forward link of a tower.
#[derive(Clone, Copy, Debug, Default, Eq, PartialEq)]
pub(crate) struct Level {
    pub(crate) next: Option<Handle>,
    // Level-0 hops to `next`. With no `next`, the number of nodes after the
    // owner of this link.
    pub(crate) span: usize,
}

pub(crate) type Levels = SmallVec<[Level; INLINE_LEVELS]>;

/// An element of the list together with its tower.
#[derive(Clone, Debug)]
pub(crate) struct Node {
    score: i64,
    value: Box<[u8]>,
    // Level-0 predecessor. `None` for the first element; the header is never
    // a predecessor here.
    prev: Option<Handle>,
    levels: Levels,
}

impl Node {
    pub(crate) fn new(score: i64, value: Box<[u8]>, height: usize) -> Self {
        debug_assert!(height >= 1, "`Node::new()` - `height` must be at least 1!");
        Self {
            score,
            value,
            prev: None,
            levels: smallvec![Level::default(); height],
        }
    }

    #[inline]
    pub(crate) fn score(&self) -> i64 {
        self.score
    }

    #[inline]
    pub(crate) fn value(&self) -> &[u8] {
        &self.value
    }

    #[inline]
    pub(crate) fn prev(&self) -> Option<Handle> {
        self.prev
    }

    pub(crate) fn set_prev(&mut self, prev: Option<Handle>) {
        self.prev = prev;
    }

    /// Number of levels this node takes part in.
    #[inline]
    pub(crate) fn height(&self) -> usize {
        self.levels.len()
    }

    #[inline]
    pub(crate) fn levels(&self) -> &[Level] {
        &self.levels
    }

    #[inline]
    pub(crate) fn levels_mut(&mut self) -> &mut [Level] {
        &mut self.levels
    }

    #[inline]
    pub(crate) fn next(&self) -> Option<Handle> {
        self.levels[0].next
    }

    /// Orders this node against `(score, value)`: score first, then the value
    /// bytes lexicographically.
    #[inline]
    pub(crate) fn cmp_key(&self, score: i64, value: &[u8]) -> Ordering {
        self.score.cmp(&score).then_with(|| (*self.value).cmp(value))
    }
}

#[cfg(test)]
#[cfg_attr(coverage_nightly, coverage(off))]
mod tests {
    use super::*;

    fn node(score: i64, value: &[u8]) -> Node {
        Node::new(score, value.into(), 1)
    }

    #[test]
    fn score_orders_before_value() {
        assert_eq!(node(1, b"z").cmp_key(2, b"a"), Ordering::Less);
        assert_eq!(node(-1, b"a").cmp_key(-2, b"z"), Ordering::Greater);
    }

    #[test]
    fn value_breaks_ties_bytewise() {
        assert_eq!(node(5, b"abc").cmp_key(5, b"abd"), Ordering::Less);
        assert_eq!(node(5, b"abc").cmp_key(5, b"abc"), Ordering::Equal);
        // A strict prefix sorts first.
        assert_eq!(node(5, b"1").cmp_key(5, b"12"), Ordering::Less);
        assert_eq!(node(5, b"12").cmp_key(5, b"1"), Ordering::Greater);
        // Bytes compare unsigned.
        assert_eq!(node(5, &[0xff]).cmp_key(5, &[0x01]), Ordering::Greater);
        assert_eq!(node(5, b"").cmp_key(5, &[0x00]), Ordering::Less);
    }

    #[test]
    fn new_tower_is_unlinked() {
        let node = Node::new(3, Box::from(&b"v"[..]), 6);
        assert_eq!(node.height(), 6);
        assert!(node.levels().iter().all(|level| *level == Level::default()));
        assert_eq!(node.prev(), None);
        assert_eq!(node.next(), None);
    }
}
