pub mod avltree;
pub mod bstree;
pub mod error;
pub mod experiment;
pub mod map;
mod node;
pub mod record;
pub mod util;

pub use avltree::AVLTree;
pub use bstree::BSTree;
pub use error::{Error, InvariantError, Result};
pub use map::{CountingTree, Counters, Lookup};
pub use node::Iter;
pub use record::Record;
