use crate::{
    error::InvariantError,
    map::{CountingTree, Lookup},
    node::{self, Cursor, Iter, Link, Node},
    record::Record,
};
use std::fmt::Debug;

/// Plain binary search tree with the same counting rules as `AVLTree`, but no rotations.
///
/// It is the baseline: sorted input degrades it to a list, and the comparison counts show it.
pub struct BSTree<R> {
    root: Link<R>,
    len: usize,
}

impl<R: Debug> Debug for BSTree<R> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("BSTree")
            .field("len", &self.len)
            .field("height", &self.height())
            .field("records", &self.iter().collect::<Vec<_>>())
            .finish()
    }
}

impl<R> Default for BSTree<R> {
    fn default() -> Self {
        BSTree { root: None, len: 0 }
    }
}

fn renew<R>(mut node: Box<Node<R>>) -> Box<Node<R>> {
    node.renew_height();
    node
}

impl<R: Record> BSTree<R> {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn insert(&mut self, record: R) -> usize {
        let mut cursor = Cursor::new(&mut self.root);

        cursor.seek(record.key());
        cursor.attach(record);
        cursor.unwind(renew);

        self.len += 1;
        cursor.comparisons
    }

    pub fn find(&self, key: &R::Key) -> Lookup {
        let (node, comparisons) = node::search(&self.root, key);

        Lookup {
            found: node.is_some(),
            comparisons,
        }
    }

    pub fn get(&self, key: &R::Key) -> Option<&R> {
        node::search(&self.root, key).0.map(|node| &node.record)
    }

    /// check the order, the cached heights and the count, but not the balance
    pub fn validate(&self) -> Result<(), InvariantError> {
        node::validate(&self.root, self.len, false)
    }
}

impl<R> BSTree<R> {
    pub fn len(&self) -> usize {
        self.len
    }

    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    pub fn height(&self) -> isize {
        node::height(&self.root)
    }

    pub fn iter(&self) -> Iter<'_, R> {
        Iter::new(&self.root, self.len)
    }
}

impl<'a, R> IntoIterator for &'a BSTree<R> {
    type Item = &'a R;
    type IntoIter = Iter<'a, R>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

impl<R: Record> CountingTree<R> for BSTree<R> {
    fn new() -> Self {
        BSTree::new()
    }

    fn insert(&mut self, record: R) -> usize {
        BSTree::insert(self, record)
    }

    fn find(&self, key: &R::Key) -> Lookup {
        BSTree::find(self, key)
    }

    fn len(&self) -> usize {
        self.len
    }

    fn height(&self) -> isize {
        BSTree::height(self)
    }

    fn validate(&self) -> Result<(), InvariantError> {
        BSTree::validate(self)
    }
}

impl<R> Drop for BSTree<R> {
    fn drop(&mut self) {
        node::drop_iteratively(&mut self.root);
    }
}
