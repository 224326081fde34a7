use alloc::vec::Vec;

use super::handle::Handle;

/// Slot storage for skip list nodes.
///
/// Removed nodes leave a hole that the next allocation reuses, so handles held
/// by neighbouring nodes stay valid across unrelated inserts and removes.
#[derive(Clone)]
pub(crate) struct Arena<T> {
    slots: Vec<Option<T>>,
    vacant: Vec<Handle>,
}

impl<T> Arena<T> {
    #[cfg(test)]
    pub(crate) const fn new() -> Self {
        Self {
            slots: Vec::new(),
            vacant: Vec::new(),
        }
    }

    pub(crate) fn with_capacity(capacity: usize) -> Self {
        Self {
            slots: Vec::with_capacity(capacity),
            vacant: Vec::new(),
        }
    }

    pub(crate) fn capacity(&self) -> usize {
        self.slots.capacity()
    }

    /// Number of live nodes.
    pub(crate) const fn len(&self) -> usize {
        self.slots.len().saturating_sub(self.vacant.len())
    }

    pub(crate) fn alloc(&mut self, node: T) -> Handle {
        if let Some(handle) = self.vacant.pop() {
            self.slots[handle.index()] = Some(node);
            return handle;
        }

        assert!(
            self.slots.len() <= Handle::MAX,
            "`Arena::alloc()` - arena is at maximum capacity ({})",
            Handle::MAX + 1
        );
        let handle = Handle::from_index(self.slots.len());
        self.slots.push(Some(node));
        handle
    }

    #[inline]
    pub(crate) fn get(&self, handle: Handle) -> &T {
        self.slots[handle.index()].as_ref().expect("`Arena::get()` - `handle` is vacant!")
    }

    #[inline]
    pub(crate) fn get_mut(&mut self, handle: Handle) -> &mut T {
        self.slots[handle.index()].as_mut().expect("`Arena::get_mut()` - `handle` is vacant!")
    }

    /// Moves the node out and marks its slot for reuse.
    pub(crate) fn take(&mut self, handle: Handle) -> T {
        let node = self.slots[handle.index()].take().expect("`Arena::take()` - `handle` is vacant!");
        self.vacant.push(handle);
        node
    }

    pub(crate) fn clear(&mut self) {
        self.slots.clear();
        self.vacant.clear();
    }
}

#[cfg(test)]
#[cfg_attr(coverage_nightly, coverage(off))]
mod tests {
    use super::*;
    use alloc::vec;
    use proptest::prelude::*;

    #[test]
    fn vacated_slot_is_reused() {
        let mut arena = Arena::new();
        let a = arena.alloc("a");
        let b = arena.alloc("b");
        assert_eq!(arena.take(a), "a");
        assert_eq!(arena.len(), 1);

        let c = arena.alloc("c");
        assert_eq!(c, a);
        assert_eq!(*arena.get(b), "b");
        assert_eq!(*arena.get(c), "c");
    }

    #[test]
    #[should_panic(expected = "`Arena::get()` - `handle` is vacant!")]
    fn get_after_take_panics() {
        let mut arena = Arena::new();
        let a = arena.alloc(1u8);
        arena.take(a);
        let _ = arena.get(a);
    }

    #[test]
    #[should_panic(expected = "`Arena::alloc()` - arena is at maximum capacity")]
    fn alloc_past_handle_range_panics() {
        let mut arena = Arena::with_capacity(Handle::MAX + 1);
        for i in 0..=Handle::MAX {
            arena.alloc(i);
        }
        assert_eq!(arena.len(), Handle::MAX + 1);
        arena.alloc(0);
    }

    #[derive(Clone, Debug)]
    enum Op {
        Alloc(i64),
        Update(usize, i64),
        Take(usize),
        Clear,
    }

    fn op() -> impl Strategy<Value = Op> {
        prop_oneof![
            10 => any::<i64>().prop_map(Op::Alloc),
            3 => (any::<usize>(), any::<i64>()).prop_map(|(at, score)| Op::Update(at, score)),
            6 => any::<usize>().prop_map(Op::Take),
            1 => Just(Op::Clear),
        ]
    }

    proptest! {
        #[test]
        fn live_nodes_match_model(ops in prop::collection::vec(op(), 0..256)) {
            let mut arena = Arena::new();
            let mut live: Vec<(Handle, i64)> = vec![];

            for op in ops {
                match op {
                    Op::Alloc(score) => live.push((arena.alloc(score), score)),
                    Op::Update(at, score) if !live.is_empty() => {
                        let at = at % live.len();
                        *arena.get_mut(live[at].0) = score;
                        live[at].1 = score;
                    }
                    Op::Take(at) if !live.is_empty() => {
                        let (handle, score) = live.swap_remove(at % live.len());
                        prop_assert_eq!(arena.take(handle), score);
                    }
                    Op::Clear => {
                        arena.clear();
                        live.clear();
                    }
                    Op::Update(..) | Op::Take(_) => {}
                }

                prop_assert_eq!(arena.len(), live.len());
                for &(handle, score) in &live {
                    prop_assert_eq!(*arena.get(handle), score);
                }
            }
        }
    }
}
