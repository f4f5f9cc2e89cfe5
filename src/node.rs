use crate::{error::InvariantError, record::Record, some_or};
use std::{cmp::max, marker::PhantomData, mem, ptr::NonNull};

pub(crate) type Link<R> = Option<Box<Node<R>>>;

#[derive(Debug, Clone, Copy, PartialEq)]
pub(crate) enum Dir {
    Left,
    Right,
}

pub(crate) struct Node<R> {
    pub(crate) record: R,
    pub(crate) height: isize,
    pub(crate) left: Link<R>,
    pub(crate) right: Link<R>,
}

/// height of the subtree: -1 if empty, 0 for a leaf
#[inline]
pub(crate) fn height<R>(link: &Link<R>) -> isize {
    link.as_ref().map_or(-1, |node| node.height)
}

impl<R> Node<R> {
    pub(crate) fn new(record: R) -> Node<R> {
        Node {
            record,
            height: 0,
            left: None,
            right: None,
        }
    }

    /// get the mutable reference of the child of the node by dir
    fn child_mut(&mut self, dir: Dir) -> &mut Link<R> {
        match dir {
            Dir::Left => &mut self.left,
            Dir::Right => &mut self.right,
        }
    }

    /// renew the height of the node from the childs
    pub(crate) fn renew_height(&mut self) {
        self.height = max(height(&self.left), height(&self.right)) + 1;
    }

    /// get difference of the heights from the childs
    pub(crate) fn get_factor(&self) -> isize {
        height(&self.left) - height(&self.right)
    }

    /// rotate left the node
    ///
    /// Change Parent-Right Child to Left Child-Parent, then return new parent(old right child).
    /// Only the old parent and the new parent change their subtrees, so only their heights are renewed.
    pub(crate) fn rotate_left(mut node: Box<Node<R>>) -> Box<Node<R>> {
        let mut new_parent = some_or!(node.right.take(), return node);
        node.right = new_parent.left.take();
        node.renew_height();
        new_parent.left = Some(node);
        new_parent.renew_height();

        new_parent
    }

    /// rotate right the node
    ///
    /// Change Left Child-Parent to Parent-Right Child, then return new parent(old left child).
    pub(crate) fn rotate_right(mut node: Box<Node<R>>) -> Box<Node<R>> {
        let mut new_parent = some_or!(node.left.take(), return node);
        node.left = new_parent.right.take();
        node.renew_height();
        new_parent.right = Some(node);
        new_parent.renew_height();

        new_parent
    }
}

/// manage the path from the root to the slot where a new record is attached
///
/// ancestors: the slots of the visited nodes, from the root.
/// current: the slot which it sees now. After `seek`, it is always empty.
/// comparisons: the key comparisons done while moving down.
///
/// Every slot lives either in the tree or inside a boxed node, and no node is freed while
/// the cursor is alive, so the pointers stay valid even when rotations move the boxes.
/// The cursor holds the mutable borrow of the root for `'a`, so the tree cannot be touched
/// or dropped behind it.
pub(crate) struct Cursor<'a, R> {
    ancestors: Vec<NonNull<Link<R>>>,
    current: NonNull<Link<R>>,
    pub(crate) comparisons: usize,
    _marker: PhantomData<&'a mut Link<R>>,
}

impl<'a, R: Record> Cursor<'a, R> {
    pub(crate) fn new(root: &'a mut Link<R>) -> Cursor<'a, R> {
        let capacity = (height(root) + 2) as usize;

        Cursor {
            ancestors: Vec::with_capacity(capacity),
            current: NonNull::from(root),
            comparisons: 0,
            _marker: PhantomData,
        }
    }

    /// move down to the empty slot for the key
    ///
    /// Less goes left, and greater or equal goes right. So a record lands after every record
    /// with the same key in the in-order sequence.
    pub(crate) fn seek(&mut self, key: &R::Key) {
        loop {
            let node = some_or!(unsafe { self.current.as_mut() }.as_mut(), return);

            self.comparisons += 1;
            let dir = if *key < *node.record.key() {
                Dir::Left
            } else {
                Dir::Right
            };

            let next = NonNull::from(node.child_mut(dir));
            let parent = mem::replace(&mut self.current, next);
            self.ancestors.push(parent);
        }
    }

    /// put the new leaf on the current slot
    pub(crate) fn attach(&mut self, record: R) {
        unsafe {
            *self.current.as_mut() = Some(Box::new(Node::new(record)));
        }
    }

    /// walk back to the root, passing each ancestor to `fix`
    ///
    /// `fix` must renew the height of the node it gets. The walk stops at the first ancestor
    /// whose height did not change, since nothing above it can change either.
    pub(crate) fn unwind(&mut self, fix: impl Fn(Box<Node<R>>) -> Box<Node<R>>) {
        while let Some(mut slot) = self.ancestors.pop() {
            let target = unsafe { slot.as_mut() };
            let node = some_or!(target.take(), break);

            let old_height = node.height;
            let node = fix(node);
            let new_height = node.height;
            *target = Some(node);

            if new_height == old_height {
                break;
            }
        }
    }
}

/// search the node with the key, and count the visited nodes
pub(crate) fn search<'a, R: Record>(
    mut current: &'a Link<R>,
    key: &R::Key,
) -> (Option<&'a Node<R>>, usize) {
    let mut comparisons = 0;

    while let Some(node) = current {
        comparisons += 1;

        current = match key.cmp(node.record.key()) {
            std::cmp::Ordering::Less => &node.left,
            std::cmp::Ordering::Equal => return (Some(node), comparisons),
            std::cmp::Ordering::Greater => &node.right,
        };
    }

    (None, comparisons)
}

/// In-order iterator over the records of a tree.
pub struct Iter<'a, R> {
    stack: Vec<&'a Node<R>>,
    remaining: usize,
}

impl<'a, R> Iter<'a, R> {
    pub(crate) fn new(root: &'a Link<R>, len: usize) -> Self {
        let mut iter = Iter {
            stack: Vec::with_capacity((height(root) + 1) as usize),
            remaining: len,
        };
        iter.push_left(root);

        iter
    }

    fn push_left(&mut self, mut link: &'a Link<R>) {
        while let Some(node) = link {
            self.stack.push(node);
            link = &node.left;
        }
    }
}

impl<'a, R> Iterator for Iter<'a, R> {
    type Item = &'a R;

    fn next(&mut self) -> Option<Self::Item> {
        let node = self.stack.pop()?;
        self.push_left(&node.right);
        self.remaining = self.remaining.saturating_sub(1);

        Some(&node.record)
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        (self.remaining, Some(self.remaining))
    }
}

/// check the order, the cached heights, the node count and, if `balanced`, the AVL factor
///
/// Equal keys may sit on either side after rotations, so the order invariant is that the
/// in-order sequence never decreases. The walk keeps its own stack, so a degenerate tree
/// is checked as safely as a balanced one.
pub(crate) fn validate<R: Record>(
    root: &Link<R>,
    len: usize,
    balanced: bool,
) -> Result<(), InvariantError> {
    let mut steps = vec![Step::Enter(root)];
    let mut position = 0;
    let mut prev: Option<&R::Key> = None;
    // real height of the subtree finished last
    let mut finished = -1;

    while let Some(step) = steps.pop() {
        match step {
            Step::Enter(link) => {
                let node: &Node<R> = some_or!(link, {
                    finished = -1;
                    continue;
                });
                steps.push(Step::Visit(node));
                steps.push(Step::Enter(&node.left));
            }
            Step::Visit(node) => {
                let here = position;
                position += 1;

                let key = node.record.key();
                if let Some(prev) = prev {
                    if key < prev {
                        return Err(InvariantError::Order { position: here });
                    }
                }
                prev = Some(key);

                steps.push(Step::Leave {
                    node,
                    here,
                    left: finished,
                });
                steps.push(Step::Enter(&node.right));
            }
            Step::Leave { node, here, left } => {
                let right = finished;
                let actual = max(left, right) + 1;
                if node.height != actual {
                    return Err(InvariantError::StaleHeight {
                        position: here,
                        cached: node.height,
                        actual,
                    });
                }

                let factor = left - right;
                if balanced && !(-1..=1).contains(&factor) {
                    return Err(InvariantError::Unbalanced {
                        position: here,
                        factor,
                    });
                }

                finished = actual;
            }
        }
    }

    if position != len {
        return Err(InvariantError::Count {
            counted: len,
            actual: position,
        });
    }

    Ok(())
}

// post-order walk of `validate`: the left subtree, the node itself, the right subtree, then
// the heights of both sides
enum Step<'a, R> {
    Enter(&'a Link<R>),
    Visit(&'a Node<R>),
    Leave {
        node: &'a Node<R>,
        here: usize,
        left: isize,
    },
}

/// free the nodes without recursion, so a degenerate tree cannot overflow the stack
pub(crate) fn drop_iteratively<R>(root: &mut Link<R>) {
    let mut stack: Vec<Box<Node<R>>> = root.take().into_iter().collect();

    while let Some(mut node) = stack.pop() {
        stack.extend(node.left.take());
        stack.extend(node.right.take());
    }
}
