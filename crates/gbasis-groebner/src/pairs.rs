//! Pending critical pairs for the worklist completion loop.

use std::collections::VecDeque;

use rustc_hash::FxHashSet;

/// An unordered pair of generator indices, stored with `i < j`.
#[derive(Clone, Copy, PartialEq, Eq, Hash, Debug)]
pub struct Pair {
    /// Smaller index.
    pub i: usize,
    /// Larger index.
    pub j: usize,
}

impl Pair {
    /// Creates a pair, normalizing the index order.
    #[must_use]
    pub fn new(a: usize, b: usize) -> Self {
        debug_assert_ne!(a, b, "a pair needs two distinct generators");
        Self {
            i: a.min(b),
            j: a.max(b),
        }
    }
}

/// FIFO queue of pending pairs with O(1) membership queries.
///
/// Each pair is pending at most once. Popping a pair removes it from the
/// pending set immediately.
#[derive(Clone, Debug, Default)]
pub struct PairQueue {
    queue: VecDeque<Pair>,
    pending: FxHashSet<Pair>,
}

impl PairQueue {
    /// Creates an empty queue.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates a queue holding every pair over `n` generators.
    #[must_use]
    pub fn all_pairs(n: usize) -> Self {
        let mut queue = Self::new();
        for j in 1..n {
            for i in 0..j {
                queue.push(Pair::new(i, j));
            }
        }
        queue
    }

    /// Enqueues a pair. Returns false if it was already pending.
    pub fn push(&mut self, pair: Pair) -> bool {
        if self.pending.insert(pair) {
            self.queue.push_back(pair);
            true
        } else {
            false
        }
    }

    /// Dequeues the oldest pending pair.
    pub fn pop(&mut self) -> Option<Pair> {
        let pair = self.queue.pop_front()?;
        self.pending.remove(&pair);
        Some(pair)
    }

    /// Returns true if the pair `{a, b}` is pending.
    #[must_use]
    pub fn contains(&self, a: usize, b: usize) -> bool {
        self.pending.contains(&Pair::new(a, b))
    }

    /// Returns the number of pending pairs.
    #[must_use]
    pub fn len(&self) -> usize {
        self.queue.len()
    }

    /// Returns true if no pair is pending.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.queue.is_empty()
    }
}

impl Extend<Pair> for PairQueue {
    fn extend<T: IntoIterator<Item = Pair>>(&mut self, iter: T) {
        for pair in iter {
            self.push(pair);
        }
    }
}
