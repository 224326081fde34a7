use alloc::boxed::Box;
use core::cmp::Ordering;
use core::ops::{Bound, RangeBounds};

use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use smallvec::{SmallVec, smallvec};

use super::arena::Arena;
use super::handle::Handle;
use super::node::{Level, Node};

/// Search buffers stay inline for lists up to this height.
const INLINE_PATH: usize = 32;

/// Per-level predecessors (`None` is the header) recorded while searching.
type Path<T> = SmallVec<[T; INLINE_PATH]>;

/// Where a key belongs, as seen from every active level.
struct SearchPath {
    /// The last node before the key at each level.
    update: Path<Option<Handle>>,
    /// One-based rank of `update[i]`, zero for the header.
    rank: Path<usize>,
}

/// The core skip list backing `SkipList`.
///
/// Configuration is validated by the caller; this type trusts
/// `max_level >= 2` and `p > 0`.
#[derive(Clone)]
pub(crate) struct RawSkipList {
    /// Arena storing every element node.
    nodes: Arena<Node>,
    /// Sentinel tower, `max_level` entries tall.
    header: Box<[Level]>,
    /// Last element in level-0 order.
    tail: Option<Handle>,
    len: usize,
    /// Number of active levels, between 1 and `header.len()`.
    level: usize,
    /// Probability of growing a tower by one more level.
    p: f64,
    rng: StdRng,
}

impl RawSkipList {
    #[cfg(test)]
    pub(crate) fn new(max_level: usize, p: f64, seed: u64) -> Self {
        Self::with_capacity(max_level, p, seed, 0)
    }

    pub(crate) fn with_capacity(max_level: usize, p: f64, seed: u64, capacity: usize) -> Self {
        debug_assert!(max_level > 1, "`RawSkipList::with_capacity()` - `max_level` must exceed 1!");
        Self {
            nodes: Arena::with_capacity(capacity),
            header: (0..max_level).map(|_| Level::default()).collect(),
            tail: None,
            len: 0,
            level: 1,
            p,
            rng: StdRng::seed_from_u64(seed),
        }
    }

    pub(crate) const fn len(&self) -> usize {
        self.len
    }

    pub(crate) fn capacity(&self) -> usize {
        self.nodes.capacity()
    }

    /// Number of levels currently in use.
    pub(crate) const fn level(&self) -> usize {
        self.level
    }

    pub(crate) fn max_level(&self) -> usize {
        self.header.len()
    }

    pub(crate) fn header(&self) -> &[Level] {
        &self.header
    }

    pub(crate) fn head(&self) -> Option<Handle> {
        self.header[0].next
    }

    pub(crate) const fn tail(&self) -> Option<Handle> {
        self.tail
    }

    pub(crate) fn node(&self, handle: Handle) -> &Node {
        self.nodes.get(handle)
    }

    /// Drops every element. The random source keeps its state.
    pub(crate) fn clear(&mut self) {
        self.nodes.clear();
        self.header.fill(Level::default());
        self.tail = None;
        self.len = 0;
        self.level = 1;
    }

    /// Links of the header (`None`) or of a node.
    #[inline]
    fn links(&self, at: Option<Handle>) -> &[Level] {
        match at {
            Some(handle) => self.nodes.get(handle).levels(),
            None => &self.header,
        }
    }

    #[inline]
    fn links_mut(&mut self, at: Option<Handle>) -> &mut [Level] {
        match at {
            Some(handle) => self.nodes.get_mut(handle).levels_mut(),
            None => &mut self.header,
        }
    }

    /// Draws a tower height: 1, plus one for every consecutive draw below `p`.
    fn random_level(&mut self) -> usize {
        let mut height = 1;
        while height < self.max_level() && self.rng.r#gen::<f64>() < self.p {
            height += 1;
        }
        height
    }

    /// Descends from the top level, recording the last node strictly before
    /// `(score, value)` on every active level.
    fn search(&self, score: i64, value: &[u8]) -> SearchPath {
        let mut path = SearchPath {
            update: smallvec![None; self.max_level()],
            rank: smallvec![0; self.max_level()],
        };

        let mut at = None;
        let mut rank = 0;
        for i in (0..self.level).rev() {
            loop {
                let link = self.links(at)[i];
                let Some(next) = link.next else { break };
                if self.nodes.get(next).cmp_key(score, value) != Ordering::Less {
                    break;
                }
                rank += link.span;
                at = Some(next);
            }
            path.update[i] = at;
            path.rank[i] = rank;
        }

        path
    }

    /// Walks forward from the header for as long as `advance` accepts the next
    /// node, which must hold for a prefix of the list.
    ///
    /// Returns the last accepted node (`None` if none was) and its one-based
    /// rank.
    fn seek(&self, mut advance: impl FnMut(&Node) -> bool) -> (Option<Handle>, usize) {
        let mut at = None;
        let mut rank = 0;
        for i in (0..self.level).rev() {
            loop {
                let link = self.links(at)[i];
                let Some(next) = link.next else { break };
                if !advance(self.nodes.get(next)) {
                    break;
                }
                rank += link.span;
                at = Some(next);
            }
        }
        (at, rank)
    }

    /// Inserts `(score, value)` and returns the new node. Equal keys already
    /// present stay in place; the new node lands directly before them.
    pub(crate) fn insert(&mut self, score: i64, value: Box<[u8]>) -> Handle {
        let SearchPath { mut update, mut rank } = self.search(score, &value);

        let height = self.random_level();
        if height > self.level {
            // Fresh levels hold only the header, which spans the whole list.
            for i in self.level..height {
                update[i] = None;
                rank[i] = 0;
                self.header[i].span = self.len;
            }
            self.level = height;
        }

        let handle = self.nodes.alloc(Node::new(score, value, height));
        for i in 0..height {
            // Level-0 nodes between `update[i]` and the new node.
            let skipped = rank[0] - rank[i];
            let pred = self.links(update[i])[i];
            self.links_mut(update[i])[i] = Level {
                next: Some(handle),
                span: skipped + 1,
            };
            self.nodes.get_mut(handle).levels_mut()[i] = Level {
                next: pred.next,
                span: pred.span - skipped,
            };
        }

        // Taller predecessors now reach over one more node.
        for i in height..self.level {
            self.links_mut(update[i])[i].span += 1;
        }

        let node = self.nodes.get_mut(handle);
        node.set_prev(update[0]);
        match node.next() {
            Some(next) => self.nodes.get_mut(next).set_prev(Some(handle)),
            None => self.tail = Some(handle),
        }

        self.len += 1;
        self.sync_idle_levels();
        handle
    }

    /// Removes one node equal to `(score, value)`. Returns `false`, leaving
    /// the list untouched, when there is none.
    pub(crate) fn remove(&mut self, score: i64, value: &[u8]) -> bool {
        let SearchPath { update, .. } = self.search(score, value);

        let Some(target) = self.next_of(update[0]) else {
            return false;
        };
        if self.nodes.get(target).cmp_key(score, value) != Ordering::Equal {
            return false;
        }

        self.unlink(target, &update);
        true
    }

    /// Level-0 successor of the header (`None`) or of a node.
    fn next_of(&self, at: Option<Handle>) -> Option<Handle> {
        self.links(at)[0].next
    }

    fn unlink(&mut self, target: Handle, update: &[Option<Handle>]) {
        let node = self.nodes.take(target);

        for i in 0..self.level {
            let pred = &mut self.links_mut(update[i])[i];
            if pred.next == Some(target) {
                let skip = node.levels()[i];
                pred.next = skip.next;
                pred.span = pred.span + skip.span - 1;
            } else {
                pred.span -= 1;
            }
        }

        match node.next() {
            Some(next) => self.nodes.get_mut(next).set_prev(node.prev()),
            None => self.tail = node.prev(),
        }

        while self.level > 1 && self.header[self.level - 1].next.is_none() {
            self.level -= 1;
        }

        self.len -= 1;
        self.sync_idle_levels();
    }

    /// Header levels above the active height keep spanning the whole list.
    fn sync_idle_levels(&mut self) {
        debug_assert_eq!(self.nodes.len(), self.len, "arena and length disagree");
        let len = self.len;
        for link in &mut self.header[self.level..] {
            link.span = len;
        }
    }

    pub(crate) fn contains(&self, score: i64, value: &[u8]) -> bool {
        self.rank_of(score, value).is_some()
    }

    /// Zero-based rank of a node equal to `(score, value)`. With duplicates
    /// this is the rank of the last one.
    pub(crate) fn rank_of(&self, score: i64, value: &[u8]) -> Option<usize> {
        let (at, rank) = self.seek(|node| node.cmp_key(score, value) != Ordering::Greater);
        let at = at?;
        (self.nodes.get(at).cmp_key(score, value) == Ordering::Equal).then(|| rank - 1)
    }

    /// Zero-based rank of a linked node.
    pub(crate) fn rank_of_handle(&self, handle: Handle) -> usize {
        let target = self.nodes.get(handle);
        let (mut at, mut rank) =
            self.seek(|node| node.cmp_key(target.score(), target.value()) != Ordering::Greater);

        // Equal keys: `seek` stops on the last one, step back to ours.
        while at != Some(handle) {
            let current = at.expect("`RawSkipList::rank_of_handle()` - `handle` is not linked!");
            at = self.nodes.get(current).prev();
            rank -= 1;
        }

        rank - 1
    }

    /// The node at zero-based position `rank`.
    pub(crate) fn get_by_rank(&self, rank: usize) -> Option<Handle> {
        if rank >= self.len {
            return None;
        }

        let target = rank + 1;
        let mut at = None;
        let mut traversed = 0;
        for i in (0..self.level).rev() {
            loop {
                let link = self.links(at)[i];
                let Some(next) = link.next else { break };
                if traversed + link.span > target {
                    break;
                }
                traversed += link.span;
                at = Some(next);
            }
            if traversed == target {
                return at;
            }
        }

        debug_assert!(false, "get_by_rank: span invariant violated - rank {rank} not reached (len {})", self.len);
        None
    }

    /// First and last node whose score lies in `range`, and how many nodes
    /// lie between them inclusive. `None` when the range selects nothing.
    pub(crate) fn score_range<R>(&self, range: &R) -> Option<(Handle, Handle, usize)>
    where
        R: RangeBounds<i64>,
    {
        let below_start = |node: &Node| match range.start_bound() {
            Bound::Included(&start) => node.score() < start,
            Bound::Excluded(&start) => node.score() <= start,
            Bound::Unbounded => false,
        };
        let before_end = |node: &Node| match range.end_bound() {
            Bound::Included(&end) => node.score() <= end,
            Bound::Excluded(&end) => node.score() < end,
            Bound::Unbounded => true,
        };

        let (before, skipped) = self.seek(below_start);
        let (last, last_rank) = self.seek(before_end);
        if last_rank <= skipped {
            return None;
        }

        let first = self.next_of(before)?;
        Some((first, last?, last_rank - skipped))
    }
}
