//! Least Recently Used (LRU) Recency List.
//!
//! Orders a closed set of indices `0..N` from least to most recently used. Both
//! the TLB (over its slots) and the frame table (over its frames) keep one.
//!
//! The list is an arena of `(prev, next)` links indexed by value, plus one extra
//! link at index `N` acting as a permanent sentinel. The sentinel sits just
//! before the least recently used element, so the victim is always one hop away,
//! and a single movable `mru` index marks the other end. Promoting an element
//! relinks it in place; nothing is ever removed or reinserted.
//!
//! # Performance
//!
//! - **Time Complexity:**
//!   - `promote()`: O(1)
//!   - `peek_least()`: O(1)
//! - **Space Complexity:** O(N)

/// Marks the end of the chain past the most recently used element.
const NIL: usize = usize::MAX;

/// One arena slot.
#[derive(Clone, Copy, Debug)]
struct Link {
    /// Neighbour towards the least recently used end (or the sentinel).
    prev: usize,
    /// Neighbour towards the most recently used end, `NIL` past the end.
    next: usize,
}

/// Fixed-capacity LRU ordering over the indices `0..capacity`.
///
/// Every index appears exactly once at all times.
#[derive(Clone, Debug)]
pub struct LruList {
    /// `capacity + 1` links; the last one is the sentinel.
    links: Vec<Link>,
    /// Current most recently used index.
    mru: usize,
}

impl LruList {
    /// Seeds a list holding `0..capacity`.
    ///
    /// The initial order is most recent `0`, least recent `capacity - 1`, so an
    /// untouched list offers its highest index as the first victim.
    ///
    /// # Panics
    ///
    /// Panics if `capacity` is zero.
    pub fn new(capacity: usize) -> Self {
        assert!(capacity > 0, "LRU list capacity must be non-zero");

        let sentinel = capacity;
        let mut links = vec![Link { prev: NIL, next: NIL }; capacity + 1];

        // Chain: sentinel -> capacity-1 -> ... -> 1 -> 0
        let mut prev = sentinel;
        for idx in (0..capacity).rev() {
            links[prev].next = idx;
            links[idx].prev = prev;
            prev = idx;
        }
        links[0].next = NIL;

        Self { links, mru: 0 }
    }

    /// Number of indices tracked.
    #[inline]
    pub fn capacity(&self) -> usize {
        self.links.len() - 1
    }

    #[inline(always)]
    fn sentinel(&self) -> usize {
        self.links.len() - 1
    }

    /// Marks `idx` as the most recently used index.
    ///
    /// No-op when `idx` already is.
    ///
    /// # Panics
    ///
    /// Panics if `idx` is not below [`LruList::capacity`].
    pub fn promote(&mut self, idx: usize) {
        assert!(idx < self.capacity(), "LRU index {idx} out of range");
        if idx == self.mru {
            return;
        }

        // Unlink. `idx` is not the MRU, so it has a successor.
        let Link { prev, next } = self.links[idx];
        self.links[prev].next = next;
        self.links[next].prev = prev;

        // Relink behind the current MRU.
        self.links[idx].prev = self.mru;
        self.links[idx].next = NIL;
        self.links[self.mru].next = idx;
        self.mru = idx;
    }

    /// Returns the least recently used index without touching the order.
    ///
    /// Callers overwrite the victim in place and then [`promote`](Self::promote) it.
    #[inline]
    pub fn peek_least(&self) -> usize {
        self.links[self.sentinel()].next
    }

    /// Returns the most recently used index.
    #[inline]
    pub fn mru(&self) -> usize {
        self.mru
    }

    /// Indices from least to most recently used.
    pub fn order(&self) -> Vec<usize> {
        let mut out = Vec::with_capacity(self.capacity());
        let mut cur = self.peek_least();
        while cur != NIL {
            out.push(cur);
            cur = self.links[cur].next;
        }
        out
    }
}
