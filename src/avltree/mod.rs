use crate::{
    error::InvariantError,
    map::{CountingTree, Lookup},
    node::{self, Cursor, Iter, Link, Node},
    record::Record,
    some_or,
};
use std::fmt::Debug;
use tracing::trace;

/// AVL tree which counts the key comparisons of every insert and find.
///
/// Equal keys are allowed. They are inserted to the right of the equal keys on the path,
/// so every record with the same key is kept and iterated in insertion order.
pub struct AVLTree<R> {
    root: Link<R>,
    len: usize,
}

impl<R: Debug> Debug for AVLTree<R> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("AVLTree")
            .field("len", &self.len)
            .field("height", &self.height())
            .field("records", &self.iter().collect::<Vec<_>>())
            .finish()
    }
}

impl<R> Default for AVLTree<R> {
    fn default() -> Self {
        AVLTree { root: None, len: 0 }
    }
}

/// rebalance the node by the rule of AVL, assuming its childs are already balanced
///
/// The factor is read from the cached heights of the childs, so no key is compared here.
fn rebalance<R>(mut node: Box<Node<R>>) -> Box<Node<R>> {
    let factor = node.get_factor();

    match factor {
        2 => {
            // left heavy
            let left = some_or!(node.left.take(), return node);
            let double = left.get_factor() < 0;

            node.left = Some(if double { Node::rotate_left(left) } else { left });
            let node = Node::rotate_right(node);
            trace!(
                factor,
                height = node.height,
                "rotate {}",
                if double { "left-right" } else { "left-left" }
            );
            node
        }
        -2 => {
            // right heavy
            let right = some_or!(node.right.take(), return node);
            let double = right.get_factor() > 0;

            node.right = Some(if double { Node::rotate_right(right) } else { right });
            let node = Node::rotate_left(node);
            trace!(
                factor,
                height = node.height,
                "rotate {}",
                if double { "right-left" } else { "right-right" }
            );
            node
        }
        _ => {
            node.renew_height();
            node
        }
    }
}

impl<R: Record> AVLTree<R> {
    pub fn new() -> Self {
        Self::default()
    }

    /// Insert the record, and return the number of key comparisons.
    ///
    /// One comparison is counted per node on the way down. Rebalancing works on the cached
    /// heights only, so the count is the depth where the new node is attached: 0 on an empty
    /// tree.
    pub fn insert(&mut self, record: R) -> usize {
        let mut cursor = Cursor::new(&mut self.root);

        cursor.seek(record.key());
        cursor.attach(record);
        cursor.unwind(rebalance);

        self.len += 1;
        cursor.comparisons
    }

    /// Search the key, and return whether it exists with the number of key comparisons.
    pub fn find(&self, key: &R::Key) -> Lookup {
        let (node, comparisons) = node::search(&self.root, key);

        Lookup {
            found: node.is_some(),
            comparisons,
        }
    }

    /// get the record with the key, the nearest one to the root if there are equal keys
    pub fn get(&self, key: &R::Key) -> Option<&R> {
        node::search(&self.root, key).0.map(|node| &node.record)
    }

    /// check every invariant of the tree from scratch
    pub fn validate(&self) -> Result<(), InvariantError> {
        node::validate(&self.root, self.len, true)
    }
}

impl<R> AVLTree<R> {
    pub fn len(&self) -> usize {
        self.len
    }

    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    /// get the height of the tree, -1 if empty
    pub fn height(&self) -> isize {
        node::height(&self.root)
    }

    /// iterate the records in key order
    pub fn iter(&self) -> Iter<'_, R> {
        Iter::new(&self.root, self.len)
    }
}

impl<'a, R> IntoIterator for &'a AVLTree<R> {
    type Item = &'a R;
    type IntoIter = Iter<'a, R>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

impl<R: Record> Extend<R> for AVLTree<R> {
    fn extend<T: IntoIterator<Item = R>>(&mut self, iter: T) {
        for record in iter {
            self.insert(record);
        }
    }
}

impl<R: Record> std::iter::FromIterator<R> for AVLTree<R> {
    fn from_iter<T: IntoIterator<Item = R>>(iter: T) -> Self {
        let mut tree = AVLTree::new();
        tree.extend(iter);

        tree
    }
}

impl<R: Record> CountingTree<R> for AVLTree<R> {
    fn new() -> Self {
        AVLTree::new()
    }

    fn insert(&mut self, record: R) -> usize {
        AVLTree::insert(self, record)
    }

    fn find(&self, key: &R::Key) -> Lookup {
        AVLTree::find(self, key)
    }

    fn len(&self) -> usize {
        self.len
    }

    fn height(&self) -> isize {
        AVLTree::height(self)
    }

    fn validate(&self) -> Result<(), InvariantError> {
        AVLTree::validate(self)
    }
}

impl<R> Drop for AVLTree<R> {
    fn drop(&mut self) {
        node::drop_iteratively(&mut self.root);
    }
}
