use crate::{error::InvariantError, record::Record};

/// The result of a search: whether the key was present, and how many key
/// comparisons the search took.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Lookup {
    pub found: bool,
    pub comparisons: usize,
}

pub trait CountingTree<R: Record> {
    fn new() -> Self;

    /// Insert the record into the tree.
    ///
    /// Equal keys are never rejected, so this always succeeds.
    /// Return the number of key comparisons done by this call.
    fn insert(&mut self, record: R) -> usize;

    /// Search the record with the key.
    ///
    /// The tree is not changed. Every visited node costs one comparison,
    /// including the node that matches.
    fn find(&self, key: &R::Key) -> Lookup;

    /// Return the number of records in the tree.
    fn len(&self) -> usize;

    /// Return the height of the tree. An empty tree is -1 and a single leaf is 0.
    fn height(&self) -> isize;

    /// Check the invariants of the tree from scratch.
    fn validate(&self) -> Result<(), InvariantError>;

    fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

/// Per-call comparison registers.
///
/// The trees return their counts directly. The harness keeps one of these to
/// attribute the comparisons of exactly one call, and resets it before the next.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct Counters {
    pub insert: usize,
    pub find: usize,
}

impl Counters {
    pub fn new() -> Self {
        Self::default()
    }

    /// clear both registers
    pub fn reset(&mut self) {
        *self = Self::default();
    }
}
