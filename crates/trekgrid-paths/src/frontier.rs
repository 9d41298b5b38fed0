//! Priority frontier for the search.
//!
//! Entries pop in ascending `(score, position, resources)` order, with the
//! insertion sequence number as a final tie-break, so equal-score entries
//! are resolved the same way on every run.
//!
//! An open-set index maps each queued position to the sequence number of its
//! live entry. Pushing a position that is already queued supersedes the old
//! entry, which is then skipped lazily when it reaches the top of the heap.

use std::cmp::Ordering;
use std::collections::{BinaryHeap, HashMap};

use trekgrid_core::{Coord, Resources};

/// A queued search state.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub(crate) struct Entry {
    pub(crate) score: i32,
    pub(crate) pos: Coord,
    pub(crate) resources: Resources,
    seq: u64,
}

impl Entry {
    #[inline]
    fn key(&self) -> (i32, Coord, Resources, u64) {
        (self.score, self.pos, self.resources, self.seq)
    }
}

impl Ord for Entry {
    fn cmp(&self, other: &Self) -> Ordering {
        // Reverse so BinaryHeap (max-heap) pops the smallest key first.
        other.key().cmp(&self.key())
    }
}

impl PartialOrd for Entry {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

#[derive(Debug, Default)]
pub(crate) struct Frontier {
    heap: BinaryHeap<Entry>,
    live: HashMap<Coord, u64>,
    next_seq: u64,
    pub(crate) pushes: usize,
    pub(crate) stale: usize,
}

impl Frontier {
    pub(crate) fn new() -> Self {
        Self::default()
    }

    /// Queue `pos`, superseding any entry already queued for it.
    pub(crate) fn push(&mut self, score: i32, pos: Coord, resources: Resources) {
        let seq = self.next_seq;
        self.next_seq += 1;
        if self.live.insert(pos, seq).is_some() {
            log::trace!("superseding queued entry for {pos}");
        }
        self.heap.push(Entry {
            score,
            pos,
            resources,
            seq,
        });
        self.pushes += 1;
    }

    /// Pop the lowest live entry, discarding superseded ones on the way.
    pub(crate) fn pop(&mut self) -> Option<Entry> {
        while let Some(entry) = self.heap.pop() {
            if self.live.get(&entry.pos) == Some(&entry.seq) {
                self.live.remove(&entry.pos);
                return Some(entry);
            }
            self.stale += 1;
        }
        None
    }

    /// Whether `pos` has a live entry.
    #[inline]
    pub(crate) fn contains(&self, pos: Coord) -> bool {
        self.live.contains_key(&pos)
    }

    /// Number of live entries.
    #[inline]
    pub(crate) fn len(&self) -> usize {
        self.live.len()
    }
}
