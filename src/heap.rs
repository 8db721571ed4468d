//! Binary min-heap of tree nodes, keyed by frequency.
//!
//! Ties are ordered by frequency only. Two nodes of equal frequency come out
//! in whatever order the sift operations leave them, so inputs with repeated
//! frequencies can yield different (equally optimal) trees.

use crate::error::{Error, Result};
use crate::tree::Node;

/// Minimum-ordered store of [`Node`]s.
///
/// `nodes[0]` always holds a node whose frequency is `<=` every other
/// stored frequency.
#[derive(Debug, Default)]
pub struct MinHeap {
    nodes: Vec<Node>,
}

impl MinHeap {
    /// Create an empty heap.
    pub fn new() -> Self {
        Self { nodes: Vec::new() }
    }

    /// Heapify `nodes` in place. Linear in `nodes.len()`.
    pub fn build(nodes: Vec<Node>) -> Self {
        let mut heap = Self { nodes };
        for i in (0..heap.nodes.len() / 2).rev() {
            heap.sift_down(i);
        }
        heap
    }

    /// Number of stored nodes.
    pub fn len(&self) -> usize {
        self.nodes.len()
    }

    /// True if no nodes are stored.
    pub fn is_empty(&self) -> bool {
        self.nodes.is_empty()
    }

    /// True if exactly one node remains.
    pub fn is_size_one(&self) -> bool {
        self.nodes.len() == 1
    }

    /// The minimum node, if any.
    pub fn peek(&self) -> Option<&Node> {
        self.nodes.first()
    }

    /// Add a node and restore the heap order by sifting it up.
    pub fn insert(&mut self, node: Node) {
        self.nodes.push(node);
        self.sift_up(self.nodes.len() - 1);
    }

    /// Remove and return the minimum node.
    ///
    /// # Errors
    /// Returns `Error::EmptyStore` if the heap is empty.
    pub fn extract_min(&mut self) -> Result<Node> {
        if self.nodes.is_empty() {
            return Err(Error::EmptyStore);
        }
        // The last element takes the root slot, then sinks.
        let min = self.nodes.swap_remove(0);
        self.sift_down(0);
        Ok(min)
    }

    fn sift_up(&mut self, mut i: usize) {
        while i > 0 {
            let parent = (i - 1) / 2;
            if self.nodes[i].freq() >= self.nodes[parent].freq() {
                break;
            }
            self.nodes.swap(i, parent);
            i = parent;
        }
    }

    fn sift_down(&mut self, mut i: usize) {
        let n = self.nodes.len();
        loop {
            let l = 2 * i + 1;
            let r = l + 1;
            let mut smallest = i;

            if l < n && self.nodes[l].freq() < self.nodes[smallest].freq() {
                smallest = l;
            }
            if r < n && self.nodes[r].freq() < self.nodes[smallest].freq() {
                smallest = r;
            }
            if smallest == i {
                return;
            }
            self.nodes.swap(i, smallest);
            i = smallest;
        }
    }

    #[cfg(test)]
    fn is_valid(&self) -> bool {
        (1..self.nodes.len()).all(|i| self.nodes[(i - 1) / 2].freq() <= self.nodes[i].freq())
    }
}
