use std::cmp::Reverse;
use std::collections::BinaryHeap;
use std::fmt::Debug;

/// A min-priority queue over `(vertex, priority)` pairs for Dijkstra-style relaxation.
///
/// Entries are never decreased in place: callers push a fresh entry when a
/// tentative distance improves and skip stale entries when they are popped.
#[derive(Debug)]
pub struct BinaryHeapWrapper<V, P>
where
    V: Copy + Eq + Debug + Ord,
    P: Copy + Debug + Ord,
{
    heap: BinaryHeap<Reverse<(P, V)>>,
}

impl<V, P> BinaryHeapWrapper<V, P>
where
    V: Copy + Eq + Debug + Ord,
    P: Copy + Debug + Ord,
{
    /// Creates an empty priority queue with room for `capacity` entries
    pub fn with_capacity(capacity: usize) -> Self {
        BinaryHeapWrapper {
            heap: BinaryHeap::with_capacity(capacity),
        }
    }

    /// Pushes a vertex with the given priority
    pub fn push(&mut self, vertex: V, priority: P) {
        self.heap.push(Reverse((priority, vertex)));
    }

    /// Removes the vertex with the smallest priority
    pub fn pop(&mut self) -> Option<(V, P)> {
        self.heap.pop().map(|Reverse((priority, vertex))| (vertex, priority))
    }
}
